use serde::Serialize;

/// A single cell of the ranking table after preprocessing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Text(String),
    /// Empty cell, NA marker, or a numeric cell that failed coercion.
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Text content for `Text` cells.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Result of coercing a numeric cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl From<Number> for CellValue {
    fn from(value: Number) -> Self {
        match value {
            Number::Int(i) => CellValue::Int(i),
            Number::Float(f) => CellValue::Float(f),
        }
    }
}

impl From<Option<Number>> for CellValue {
    fn from(value: Option<Number>) -> Self {
        value.map(CellValue::from).unwrap_or(CellValue::Missing)
    }
}
