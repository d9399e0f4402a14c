//! Header normalization and per-cell coercion.
//!
//! All functions here are pure and operate on one header or one cell at a
//! time. A bad cell never affects its row or its neighbours.

use crate::value::Number;

/// Markers treated as an absent value in text columns.
const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Trims a header and replaces internal spaces with underscores.
///
/// ```rust
/// use dataset::normalize_column_name;
///
/// assert_eq!(normalize_column_name("  Overall Score "), "Overall_Score");
/// assert_eq!(normalize_column_name("RES."), "RES.");
/// ```
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim().replace(' ', "_")
}

/// Whether a normalized column holds ranks or scores.
///
/// Matches names containing `_Score` or `_Rank`, or starting with `RANK_`.
pub fn is_numeric_column(name: &str) -> bool {
    name.contains("_Score") || name.contains("_Rank") || name.starts_with("RANK_")
}

/// Whether a raw cell is exactly one of the recognised NA markers.
///
/// The comparison is on the untrimmed field, so `" NA "` stays text.
pub fn is_missing_token(raw: &str) -> bool {
    MISSING_TOKENS.contains(&raw)
}

/// Lenient numeric conversion for a single cell.
///
/// Integers stay integers, decimals become floats, and everything else
/// (blank cells, `"601-650"`, `"=12"`, `NaN`, infinities) yields `None`.
///
/// ```rust
/// use dataset::{coerce_numeric, Number};
///
/// assert_eq!(coerce_numeric(" 12 "), Some(Number::Int(12)));
/// assert_eq!(coerce_numeric("98.7"), Some(Number::Float(98.7)));
/// assert_eq!(coerce_numeric("601-650"), None);
/// ```
pub fn coerce_numeric(raw: &str) -> Option<Number> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(Number::Int(i));
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(Number::Float(f)),
        _ => None,
    }
}
