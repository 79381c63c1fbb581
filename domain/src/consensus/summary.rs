//! Consensus summary
//!
//! Reduces a batch of per-model records to a single answer:
//!
//! 1. Each record votes once for its class code.
//! 2. The code with the most votes wins.
//! 3. On a tie, the candidate whose votes report the higher mean confidence
//!    wins; a candidate without any reported confidence scores `0.5`.
//! 4. If the confidence scores are also equal (within `1e-9`), the lowest
//!    class code wins.
//!
//! The confidence tie-break is a heuristic: it prefers the more self-certain
//! models, which is not the same as preferring the more accurate ones.

use super::tally::{CONFIDENCE_EPSILON, NEUTRAL_CONFIDENCE, VoteCount};
use crate::core::class_code::ClassCode;
use crate::core::labels::{ClassLabels, UNKNOWN_LABEL};
use crate::prediction::PredictionRecord;
use serde::{Deserialize, Serialize};

/// How the winning class code was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// No records to vote with
    NoData,
    /// A single code had the most votes
    Majority,
    /// Vote tie broken by higher mean confidence
    ConfidenceTieBreak,
    /// Vote and confidence tie broken by the lowest class code
    LowestCodeTieBreak,
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::NoData => write!(f, "no data"),
            Resolution::Majority => write!(f, "majority vote"),
            Resolution::ConfidenceTieBreak => write!(f, "tie broken by confidence"),
            Resolution::LowestCodeTieBreak => write!(f, "tie broken by lowest class code"),
        }
    }
}

/// Aggregated answer across all models of one request
///
/// # Example
///
/// ```
/// use subtype_domain::{ClassCode, ClassLabels, ConsensusSummary, PredictionRecord};
///
/// let labels = ClassLabels::cancer_subtypes();
/// let records = vec![
///     PredictionRecord::new("SVM", ClassCode::new(1), &labels),
///     PredictionRecord::new("Random Forest", ClassCode::new(1), &labels),
/// ];
///
/// let consensus = ConsensusSummary::resolve(&records, &labels);
/// assert!(consensus.agreement);
/// assert_eq!(consensus.vote_count, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusSummary {
    /// Winning class code (`-1` when there is no data)
    pub class_code: ClassCode,
    /// Human label of the winning code
    pub class_label: String,
    /// Whether every model voted for the winning code
    pub agreement: bool,
    /// Number of models that voted for the winning code
    pub vote_count: usize,
    /// Number of models that produced a prediction
    pub total_models: usize,
    /// Rule that selected the winner
    pub resolution: Resolution,
}

impl ConsensusSummary {
    /// The fixed summary for an empty batch
    pub fn no_data() -> Self {
        Self {
            class_code: ClassCode::UNKNOWN,
            class_label: UNKNOWN_LABEL.to_string(),
            agreement: false,
            vote_count: 0,
            total_models: 0,
            resolution: Resolution::NoData,
        }
    }

    /// Resolve the consensus of a batch of records
    pub fn resolve(records: &[PredictionRecord], labels: &ClassLabels) -> Self {
        if records.is_empty() {
            return Self::no_data();
        }

        let count = VoteCount::from_records(records);
        let leaders = count.leaders();
        let Some((winner, resolution)) = Self::pick_winner(&leaders, &count) else {
            return Self::no_data();
        };

        let vote_count = count.votes_for(winner);
        let total_models = records.len();

        Self {
            class_code: winner,
            class_label: labels.label(winner).to_string(),
            agreement: vote_count == total_models,
            vote_count,
            total_models,
            resolution,
        }
    }

    /// Select the winner among the leading codes (given in ascending order)
    fn pick_winner(leaders: &[ClassCode], count: &VoteCount) -> Option<(ClassCode, Resolution)> {
        let (first, rest) = leaders.split_first()?;
        if rest.is_empty() {
            return Some((*first, Resolution::Majority));
        }

        let score = |code: ClassCode| {
            count
                .get(code)
                .map(|tally| tally.mean_confidence())
                .unwrap_or(NEUTRAL_CONFIDENCE)
        };

        let mut best = *first;
        let mut best_score = score(best);
        let mut level = false;
        for &code in rest {
            let candidate = score(code);
            if candidate - best_score > CONFIDENCE_EPSILON {
                best = code;
                best_score = candidate;
                level = false;
            } else if (candidate - best_score).abs() <= CONFIDENCE_EPSILON {
                // Ascending order: keep the lower code
                level = true;
            }
        }

        let resolution = if level {
            Resolution::LowestCodeTieBreak
        } else {
            Resolution::ConfidenceTieBreak
        };
        Some((best, resolution))
    }

    /// Whether there were no records to resolve
    pub fn is_no_data(&self) -> bool {
        self.total_models == 0
    }
}
