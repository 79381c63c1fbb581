//! Clinical input record

use super::categorical::{CancerType, Cellularity, Pam50Subtype, ReceptorStatus, SurgeryType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors found while validating or encoding a clinical record
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} must be 0 or 1, got {value}")]
    InvalidFlag { field: &'static str, value: u8 },

    #[error("neoplasm_histologic_grade must be between 1 and 3, got {0}")]
    GradeOutOfRange(u8),

    #[error("{field} must be >= 0, got {value}")]
    Negative { field: &'static str, value: String },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("Encoding failed: {0}")]
    Encoding(String),
}

/// One patient's clinical attributes, as submitted by a client
///
/// Categorical fields only accept the documented values (deserialization
/// fails otherwise). Numeric ranges are checked by [`ClinicalInput::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalInput {
    pub type_of_breast_surgery: SurgeryType,
    pub cancer_type: CancerType,
    pub cellularity: Cellularity,
    /// 0: no, 1: yes
    pub chemotherapy: u8,
    #[serde(
        rename = "pam50_+_claudin-low_subtype",
        alias = "pam50_claudin_low_subtype"
    )]
    pub pam50_claudin_low_subtype: Pam50Subtype,
    /// 1 to 3
    pub neoplasm_histologic_grade: u8,
    pub her2_status: ReceptorStatus,
    /// 0: no, 1: yes
    pub hormone_therapy: u8,
    pub lymph_nodes_examined_positive: i64,
    pub nottingham_prognostic_index: f64,
    pub pr_status: ReceptorStatus,
    /// 0: no, 1: yes
    pub radio_therapy: u8,
}

impl ClinicalInput {
    /// Documented example payload
    pub fn example() -> Self {
        Self {
            type_of_breast_surgery: SurgeryType::Mastectomy,
            cancer_type: CancerType::BreastCancer,
            cellularity: Cellularity::High,
            chemotherapy: 1,
            pam50_claudin_low_subtype: Pam50Subtype::LumA,
            neoplasm_histologic_grade: 3,
            her2_status: ReceptorStatus::Positive,
            hormone_therapy: 1,
            lymph_nodes_examined_positive: 5,
            nottingham_prognostic_index: 5.4,
            pr_status: ReceptorStatus::Positive,
            radio_therapy: 1,
        }
    }

    /// Check numeric ranges, returning the first violation
    pub fn validate(&self) -> Result<(), InputError> {
        for (field, value) in [
            ("chemotherapy", self.chemotherapy),
            ("hormone_therapy", self.hormone_therapy),
            ("radio_therapy", self.radio_therapy),
        ] {
            if value > 1 {
                return Err(InputError::InvalidFlag { field, value });
            }
        }

        if !(1..=3).contains(&self.neoplasm_histologic_grade) {
            return Err(InputError::GradeOutOfRange(self.neoplasm_histologic_grade));
        }

        if self.lymph_nodes_examined_positive < 0 {
            return Err(InputError::Negative {
                field: "lymph_nodes_examined_positive",
                value: self.lymph_nodes_examined_positive.to_string(),
            });
        }

        if !self.nottingham_prognostic_index.is_finite() {
            return Err(InputError::NotFinite {
                field: "nottingham_prognostic_index",
            });
        }
        if self.nottingham_prognostic_index < 0.0 {
            return Err(InputError::Negative {
                field: "nottingham_prognostic_index",
                value: self.nottingham_prognostic_index.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_is_valid() {
        assert!(ClinicalInput::example().validate().is_ok());
    }

    #[test]
    fn test_deserialize_with_original_field_name() {
        let json = r#"{
            "type_of_breast_surgery": "MASTECTOMY",
            "cancer_type": "Breast Cancer",
            "cellularity": "High",
            "chemotherapy": 1,
            "pam50_+_claudin-low_subtype": "LumA",
            "neoplasm_histologic_grade": 3,
            "her2_status": "Positive",
            "hormone_therapy": 1,
            "lymph_nodes_examined_positive": 5,
            "nottingham_prognostic_index": 5.4,
            "pr_status": "Positive",
            "radio_therapy": 1
        }"#;
        let input: ClinicalInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, ClinicalInput::example());
    }

    #[test]
    fn test_serialize_uses_original_field_name() {
        let json = serde_json::to_value(ClinicalInput::example()).unwrap();
        assert_eq!(json["pam50_+_claudin-low_subtype"], "LumA");
        assert_eq!(json["type_of_breast_surgery"], "MASTECTOMY");
    }

    #[test]
    fn test_invalid_flag() {
        let mut input = ClinicalInput::example();
        input.radio_therapy = 2;
        assert_eq!(
            input.validate(),
            Err(InputError::InvalidFlag {
                field: "radio_therapy",
                value: 2
            })
        );
    }

    #[test]
    fn test_grade_out_of_range() {
        let mut input = ClinicalInput::example();
        input.neoplasm_histologic_grade = 0;
        assert_eq!(input.validate(), Err(InputError::GradeOutOfRange(0)));
    }

    #[test]
    fn test_negative_values() {
        let mut input = ClinicalInput::example();
        input.lymph_nodes_examined_positive = -1;
        assert!(matches!(
            input.validate(),
            Err(InputError::Negative {
                field: "lymph_nodes_examined_positive",
                ..
            })
        ));

        let mut input = ClinicalInput::example();
        input.nottingham_prognostic_index = -0.1;
        assert!(input.validate().is_err());

        let mut input = ClinicalInput::example();
        input.nottingham_prognostic_index = f64::INFINITY;
        assert_eq!(
            input.validate(),
            Err(InputError::NotFinite {
                field: "nottingham_prognostic_index"
            })
        );
    }
}
