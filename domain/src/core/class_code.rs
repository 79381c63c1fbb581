//! Class code value object

use serde::{Deserialize, Serialize};

/// Integer identifier of one output class (Value Object)
///
/// Codes are small non-negative integers produced by a classifier.
/// [`ClassCode::UNKNOWN`] (`-1`) marks the absence of a usable answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassCode(pub i64);

impl ClassCode {
    /// Sentinel code for "no data" / unmapped results
    pub const UNKNOWN: ClassCode = ClassCode(-1);

    pub fn new(code: i64) -> Self {
        Self(code)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ClassCode {
    fn from(code: i64) -> Self {
        Self(code)
    }
}

impl std::fmt::Display for ClassCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_sentinel() {
        assert_eq!(ClassCode::UNKNOWN.value(), -1);
    }

    #[test]
    fn test_serialize_transparent() {
        let json = serde_json::to_string(&ClassCode::new(3)).unwrap();
        assert_eq!(json, "3");
        let code: ClassCode = serde_json::from_str("-1").unwrap();
        assert_eq!(code, ClassCode::UNKNOWN);
    }
}
