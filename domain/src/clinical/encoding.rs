//! Feature encoder
//!
//! Turns a validated [`ClinicalInput`] into the one-row [`FeatureTable`] the
//! models were trained on. Column order is fixed by [`FEATURE_ORDER`].

use super::categorical::{CancerType, Cellularity, Pam50Subtype, ReceptorStatus, SurgeryType};
use super::input::{ClinicalInput, InputError};
use crate::core::features::FeatureTable;
use serde::Serialize;

/// Model input columns, in training order
pub const FEATURE_ORDER: [&str; 12] = [
    "type_of_breast_surgery",
    "cancer_type",
    "cellularity",
    "chemotherapy",
    "pam50_+_claudin-low_subtype",
    "neoplasm_histologic_grade",
    "her2_status",
    "hormone_therapy",
    "lymph_nodes_examined_positive",
    "nottingham_prognostic_index",
    "pr_status",
    "radio_therapy",
];

/// Value-to-code table of one categorical feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodingMap {
    pub feature: &'static str,
    pub values: Vec<(&'static str, u8)>,
}

/// Encoding tables of every categorical feature
pub fn encoding_maps() -> Vec<EncodingMap> {
    vec![
        EncodingMap {
            feature: "type_of_breast_surgery",
            values: SurgeryType::encoding(),
        },
        EncodingMap {
            feature: "cancer_type",
            values: CancerType::encoding(),
        },
        EncodingMap {
            feature: "cellularity",
            values: Cellularity::encoding(),
        },
        EncodingMap {
            feature: "pam50_+_claudin-low_subtype",
            values: Pam50Subtype::encoding(),
        },
        EncodingMap {
            feature: "her2_status",
            values: ReceptorStatus::encoding(),
        },
        EncodingMap {
            feature: "pr_status",
            values: ReceptorStatus::encoding(),
        },
    ]
}

impl ClinicalInput {
    /// Validate and encode into a one-row feature table
    pub fn encode(&self) -> Result<FeatureTable, InputError> {
        self.validate()?;

        let row = vec![
            f64::from(self.type_of_breast_surgery.code()),
            f64::from(self.cancer_type.code()),
            f64::from(self.cellularity.code()),
            f64::from(self.chemotherapy),
            f64::from(self.pam50_claudin_low_subtype.code()),
            f64::from(self.neoplasm_histologic_grade),
            f64::from(self.her2_status.code()),
            f64::from(self.hormone_therapy),
            self.lymph_nodes_examined_positive as f64,
            self.nottingham_prognostic_index,
            f64::from(self.pr_status.code()),
            f64::from(self.radio_therapy),
        ];

        let columns = FEATURE_ORDER.iter().map(|c| c.to_string()).collect();
        FeatureTable::single_row(columns, row).map_err(|e| InputError::Encoding(e.to_string()))
    }
}
