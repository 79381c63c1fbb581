//! Feature table value object

use super::error::ClassifierError;
use serde::{Deserialize, Serialize};

/// Encoded, fixed-column-order numeric input consumed by classifiers
///
/// The column order is owned by the encoder that produced the table;
/// classifiers and the prediction engine never reorder or re-encode it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureTable {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl FeatureTable {
    /// Create a table, checking that every row matches the column count
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, ClassifierError> {
        if let Some(row) = rows.iter().find(|row| row.len() != columns.len()) {
            return Err(ClassifierError::ShapeMismatch {
                expected: columns.len(),
                actual: row.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    /// Create a single-row table
    pub fn single_row(columns: Vec<String>, row: Vec<f64>) -> Result<Self, ClassifierError> {
        Self::new(columns, vec![row])
    }

    /// Create a single-row table with positional column names (`x0`, `x1`, ...)
    pub fn from_values(row: Vec<f64>) -> Self {
        let columns = (0..row.len()).map(|i| format!("x{}", i)).collect();
        Self {
            columns,
            rows: vec![row],
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn n_features(&self) -> usize {
        self.columns.len()
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Return a table with the same columns and transformed rows
    pub fn map_rows<F>(&self, f: F) -> Self
    where
        F: Fn(&[f64]) -> Vec<f64>,
    {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().map(|row| f(row)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row_table() {
        let table =
            FeatureTable::single_row(vec!["a".into(), "b".into()], vec![1.0, 2.0]).unwrap();
        assert_eq!(table.n_rows(), 1);
        assert_eq!(table.n_features(), 2);
        assert_eq!(table.columns()[1], "b");
    }

    #[test]
    fn test_row_length_mismatch_rejected() {
        let err = FeatureTable::single_row(vec!["a".into()], vec![1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            ClassifierError::ShapeMismatch {
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn test_map_rows_keeps_columns() {
        let table = FeatureTable::from_values(vec![1.0, 3.0]);
        let doubled = table.map_rows(|row| row.iter().map(|v| v * 2.0).collect());
        assert_eq!(doubled.rows()[0], vec![2.0, 6.0]);
        assert_eq!(doubled.columns(), table.columns());
    }
}
