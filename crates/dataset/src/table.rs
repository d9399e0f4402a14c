use std::collections::{HashMap, HashSet};

use crate::value::CellValue;

/// One institution's record.
///
/// Cells are aligned with [`Table::columns`]. The lowercase name and its
/// token set are derived once at load so lookups never re-fold case.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    name: String,
    name_lower: String,
    name_tokens: HashSet<String>,
    cells: Vec<CellValue>,
}

impl Row {
    pub(crate) fn new(name: String, cells: Vec<CellValue>) -> Self {
        let name_lower = name.to_lowercase();
        let name_tokens = name_lower.split_whitespace().map(str::to_owned).collect();
        Self {
            name,
            name_lower,
            name_tokens,
            cells,
        }
    }

    /// Trimmed, case-preserved `Institution_Name`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercase form of [`name`](Self::name).
    pub fn name_lower(&self) -> &str {
        &self.name_lower
    }

    /// Whitespace-delimited tokens of the lowercase name, deduplicated.
    pub fn name_tokens(&self) -> &HashSet<String> {
        &self.name_tokens
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }
}

/// Immutable, ordered collection of rows with a fixed column set.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    column_index: HashMap<String, usize>,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from normalized columns and preprocessed rows.
    ///
    /// When two headers normalize to the same name the first one wins for
    /// lookups by name.
    pub(crate) fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        let mut column_index = HashMap::with_capacity(columns.len());
        for (idx, name) in columns.iter().enumerate() {
            column_index.entry(name.clone()).or_insert(idx);
        }
        Self {
            columns,
            column_index,
            rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index.contains_key(name)
    }

    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.column_index.get(name).copied()
    }

    /// Cell of `row` in column `column`, or `None` when the table lacks it.
    pub fn value<'a>(&self, row: &'a Row, column: &str) -> Option<&'a CellValue> {
        self.column_position(column).and_then(|idx| row.cell(idx))
    }
}
