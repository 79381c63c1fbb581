//! Consensus domain
//!
//! Majority-vote aggregation of the predictions made by several classifiers
//! for the same input.
//!
//! ```text
//! PredictionRecord ─┐
//! PredictionRecord ─┼─> VoteCount ─> leaders ─┬─ one leader ──> Majority
//! PredictionRecord ─┘                         └─ tie ─> mean confidence ─> lowest code
//! ```

pub mod summary;
pub mod tally;

pub use summary::{ConsensusSummary, Resolution};
pub use tally::{NEUTRAL_CONFIDENCE, VoteCount, VoteTally};
