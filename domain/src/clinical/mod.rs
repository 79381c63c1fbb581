//! Clinical input domain
//!
//! Validation and encoding of patient records into model features. The core
//! prediction engine only ever sees the encoded [`crate::FeatureTable`].

pub mod categorical;
pub mod encoding;
pub mod input;

pub use categorical::{CancerType, Cellularity, Pam50Subtype, ReceptorStatus, SurgeryType};
pub use encoding::{EncodingMap, FEATURE_ORDER, encoding_maps};
pub use input::{ClinicalInput, InputError};
