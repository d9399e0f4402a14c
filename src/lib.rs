//! Workspace umbrella crate for Unirank.
//!
//! This crate stitches the dataset loader and the matcher together behind a
//! single application context, [`UniversityQa`], which is built once at
//! startup and shared read-only by every request.
//!
//! A failed load does not abort the process: the context is created without
//! a table and every lookup reports [`QaError::DatasetNotLoaded`].

pub use dataset::{
    CellValue, ColumnKind, DETAIL_COLUMNS, DatasetError, NAME_COLUMN, Row, SchemaReport, Table,
    load, load_from_reader,
};
pub use matcher::{
    ChatRoute, DetailsResult, DisplayValue, LookupMetrics, MatchTier, MatchedRow,
    UniversityDetails, classify, extract_university_name, find_university, get_details,
    is_university_query, set_lookup_metrics,
};

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

/// Errors returned by [`UniversityQa`] lookups.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QaError {
    /// The dataset failed to load at startup.
    #[error("Dataset not loaded. Please check server configuration.")]
    DatasetNotLoaded,
}

/// Application context: the ranking table, if it loaded.
#[derive(Debug, Clone)]
pub struct UniversityQa {
    table: Option<Arc<Table>>,
    load_error: Option<String>,
}

impl UniversityQa {
    /// Load the dataset at `path`.
    ///
    /// Never fails: a load error is logged, remembered, and turns every later
    /// lookup into [`QaError::DatasetNotLoaded`].
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match dataset::load(path) {
            Ok(table) => Self::from_table(table),
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "failed to load dataset");
                Self::unavailable(err.to_string())
            }
        }
    }

    /// Wrap an already loaded table.
    pub fn from_table(table: Table) -> Self {
        let report = table.check_schema(DETAIL_COLUMNS);
        if !report.missing.is_empty() {
            tracing::warn!(
                missing = ?report.missing,
                "dataset lacks some detail columns; they will be omitted from responses"
            );
        }
        if !report.kind_mismatches.is_empty() {
            tracing::warn!(columns = ?report.kind_mismatches, "detail columns with unexpected kind");
        }
        Self {
            table: Some(Arc::new(table)),
            load_error: None,
        }
    }

    /// A context without a table.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            table: None,
            load_error: Some(reason.into()),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_deref()
    }

    /// Number of rows, or zero without a table.
    pub fn row_count(&self) -> usize {
        self.table().map_or(0, Table::len)
    }

    /// Why the dataset is unavailable, when it is.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Structured lookup by university name.
    pub fn details(&self, name: &str) -> Result<DetailsResult, QaError> {
        let table = self.table().ok_or(QaError::DatasetNotLoaded)?;
        Ok(get_details(table, name))
    }

    /// Decide how a chat message is answered.
    ///
    /// Without a table every message is conversational.
    pub fn route_chat(&self, message: &str) -> ChatRoute {
        match self.table() {
            Some(table) => classify(table, message),
            None => ChatRoute::Conversational,
        }
    }
}
