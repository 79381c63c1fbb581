//! Categorical clinical attributes and their integer encodings
//!
//! The integer codes are the ones the bundled models were trained with; they
//! must not change without retraining.

use serde::{Deserialize, Serialize};

macro_rules! categorical {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal = $code:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted value, in code order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Integer code fed to the models
            pub fn code(&self) -> u8 {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            /// Value as it appears in clinical records
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            /// `(value, code)` pairs for documentation output
            pub fn encoding() -> Vec<(&'static str, u8)> {
                Self::ALL.iter().map(|v| (v.as_str(), v.code())).collect()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

categorical! {
    /// Type of breast surgery performed
    SurgeryType {
        BreastConserving => "BREAST CONSERVING" = 0,
        Mastectomy => "MASTECTOMY" = 1,
    }
}

categorical! {
    /// Primary cancer type
    CancerType {
        BreastCancer => "Breast Cancer" = 0,
        BreastSarcoma => "Breast Sarcoma" = 1,
    }
}

categorical! {
    /// Tumor cellularity after chemotherapy
    Cellularity {
        High => "High" = 0,
        Low => "Low" = 1,
        Moderate => "Moderate" = 2,
    }
}

categorical! {
    /// PAM50 + Claudin-low molecular subtype
    Pam50Subtype {
        Basal => "Basal" = 0,
        Her2 => "Her2" = 1,
        LumA => "LumA" = 2,
        LumB => "LumB" = 3,
        Nc => "NC" = 4,
        Normal => "Normal" = 5,
        ClaudinLow => "claudin-low" = 6,
    }
}

categorical! {
    /// Receptor status (HER2, PR)
    ReceptorStatus {
        Negative => "Negative" = 0,
        Positive => "Positive" = 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(SurgeryType::Mastectomy.code(), 1);
        assert_eq!(Cellularity::Moderate.code(), 2);
        assert_eq!(Pam50Subtype::ClaudinLow.code(), 6);
        assert_eq!(ReceptorStatus::Positive.code(), 1);
    }

    #[test]
    fn test_deserialize_clinical_strings() {
        let surgery: SurgeryType = serde_json::from_str("\"BREAST CONSERVING\"").unwrap();
        assert_eq!(surgery, SurgeryType::BreastConserving);

        let subtype: Pam50Subtype = serde_json::from_str("\"claudin-low\"").unwrap();
        assert_eq!(subtype, Pam50Subtype::ClaudinLow);
    }

    #[test]
    fn test_rejects_unknown_value() {
        assert!(serde_json::from_str::<Cellularity>("\"Very High\"").is_err());
        assert!(serde_json::from_str::<Pam50Subtype>("\"nc\"").is_err());
    }

    #[test]
    fn test_encoding_in_code_order() {
        let encoding = Pam50Subtype::encoding();
        assert_eq!(encoding.len(), 7);
        assert_eq!(encoding[0], ("Basal", 0));
        assert_eq!(encoding[6], ("claudin-low", 6));
    }
}
