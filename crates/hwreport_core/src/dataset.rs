use std::collections::HashSet;
use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Scalar
// ---------------------------------------------------------------------------

/// A single cell value as it came out of the decoded spreadsheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Scalar {
    #[default]
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Convert a raw text cell into the most specific scalar.
    ///
    /// Whitespace-only input becomes `Empty`, integer literals become `Int`,
    /// other numeric literals become `Float`, everything else stays `Text`.
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if let Ok(int) = trimmed.parse::<i64>() {
            return Self::Int(int);
        }
        match trimmed.parse::<f64>() {
            // "nan" / "inf" parse as floats but are not grades
            Ok(float) if float.is_finite() => Self::Float(float),
            _ => Self::Text(raw.to_string()),
        }
    }

    /// Empty cells, NaN, and whitespace-only text count as blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Float(f) => f.is_nan(),
            Self::Text(s) => s.trim().is_empty(),
            Self::Int(_) => false,
        }
    }

    /// True only for numbers equal to zero. Text is never numeric.
    pub fn is_numeric_zero(&self) -> bool {
        match self {
            Self::Int(i) => *i == 0,
            Self::Float(f) => *f == 0.0,
            Self::Empty | Self::Text(_) => false,
        }
    }

    /// Display form with surrounding whitespace removed; blank values give `""`.
    pub fn trimmed_text(&self) -> String {
        if self.is_blank() {
            return String::new();
        }
        self.to_string().trim().to_string()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_none(),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(v) if v.is_nan() => serializer.serialize_none(),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

// ---------------------------------------------------------------------------
// TabularDataset
// ---------------------------------------------------------------------------

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetError {
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("Row {row} has {actual} value(s), expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Named columns plus rows of values, one value per column.
///
/// Column names are unique, so a row can be addressed by column name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabularDataset {
    columns: Vec<String>,
    rows: Vec<Vec<Scalar>>,
}

impl TabularDataset {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Scalar>>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(columns.len());
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(DatasetError::DuplicateColumn(name.clone()));
            }
        }

        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(DatasetError::RowWidth {
                    row: idx,
                    expected: columns.len(),
                    actual: row.len(),
                });
            }
        }

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn rows(&self) -> &[Vec<Scalar>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_infer_scalars() {
        assert_eq!(Scalar::infer(""), Scalar::Empty);
        assert_eq!(Scalar::infer("   "), Scalar::Empty);
        assert_eq!(Scalar::infer("0"), Scalar::Int(0));
        assert_eq!(Scalar::infer(" 42 "), Scalar::Int(42));
        assert_eq!(Scalar::infer("0.0"), Scalar::Float(0.0));
        assert_eq!(Scalar::infer("7.5"), Scalar::Float(7.5));
        assert_eq!(Scalar::infer("absent"), Scalar::Text("absent".into()));
        assert_eq!(Scalar::infer("nan"), Scalar::Text("nan".into()));
    }

    #[test]
    fn test_blank_values() {
        assert!(Scalar::Empty.is_blank());
        assert!(Scalar::Float(f64::NAN).is_blank());
        assert!(Scalar::Text("  ".into()).is_blank());
        assert!(!Scalar::Int(0).is_blank());
        assert!(!Scalar::Text("x".into()).is_blank());
    }

    #[test]
    fn test_numeric_zero() {
        assert!(Scalar::Int(0).is_numeric_zero());
        assert!(Scalar::Float(0.0).is_numeric_zero());
        assert!(Scalar::Float(-0.0).is_numeric_zero());
        assert!(!Scalar::Int(5).is_numeric_zero());
        assert!(!Scalar::Float(0.5).is_numeric_zero());
        assert!(!Scalar::Text("0".into()).is_numeric_zero());
        assert!(!Scalar::Empty.is_numeric_zero());
        assert!(!Scalar::Float(f64::NAN).is_numeric_zero());
    }

    #[test]
    fn test_display_keeps_natural_form() {
        assert_eq!(Scalar::Int(1).to_string(), "1");
        assert_eq!(Scalar::Float(1.0).to_string(), "1");
        assert_eq!(Scalar::Float(2.5).to_string(), "2.5");
        assert_eq!(Scalar::Text("A".into()).to_string(), "A");
        assert_eq!(Scalar::Empty.to_string(), "");
    }

    #[test]
    fn test_trimmed_text() {
        assert_eq!(Scalar::Text("  Ann ".into()).trimmed_text(), "Ann");
        assert_eq!(Scalar::Empty.trimmed_text(), "");
        assert_eq!(Scalar::Float(f64::NAN).trimmed_text(), "");
        assert_eq!(Scalar::Int(3).trimmed_text(), "3");
    }

    #[test]
    fn test_serialize_scalar_as_json_value() {
        let json = serde_json::to_string(&vec![
            Scalar::Int(1),
            Scalar::Float(2.5),
            Scalar::Text("B".into()),
            Scalar::Empty,
        ])
        .unwrap();
        assert_eq!(json, r#"[1,2.5,"B",null]"#);
    }

    #[test]
    fn test_dataset_rejects_duplicate_columns() {
        let err = TabularDataset::new(cols(&["A", "B", "A"]), vec![]).unwrap_err();
        assert_eq!(err, DatasetError::DuplicateColumn("A".into()));
    }

    #[test]
    fn test_dataset_rejects_ragged_rows() {
        let err = TabularDataset::new(
            cols(&["A", "B"]),
            vec![vec![Scalar::Int(1), Scalar::Int(2)], vec![Scalar::Int(3)]],
        )
        .unwrap_err();
        assert_eq!(
            err,
            DatasetError::RowWidth {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_dataset_column_lookup() {
        let ds = TabularDataset::new(cols(&["First Name", "HW1"]), vec![]).unwrap();
        assert_eq!(ds.column_count(), 2);
        assert_eq!(ds.column_index("HW1"), Some(1));
        assert!(ds.has_column("First Name"));
        assert!(!ds.has_column("Email"));
        assert!(ds.is_empty());
    }
}
