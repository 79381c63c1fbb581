//! Core domain concepts shared across all subdomains.
//!
//! - [`class_code::ClassCode`]: integer identifier of an output class
//! - [`labels::ClassLabels`]: fixed code-to-name mapping
//! - [`features::FeatureTable`]: encoded numeric input
//! - [`error::ClassifierError`]: errors raised by classifiers

pub mod class_code;
pub mod error;
pub mod features;
pub mod labels;
