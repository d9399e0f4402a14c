//! Unirank dataset layer.
//!
//! Reads a university ranking table from delimited text and turns it into an
//! immutable in-memory [`Table`]. Everything downstream (matching, details
//! projection, the HTTP service) reads this table and never writes back.
//!
//! ## What we do
//!
//! - Decode every field as ISO-8859-1 so legacy single-byte exports load
//!   instead of aborting on invalid UTF-8
//! - Normalize column names (trim, spaces become underscores)
//! - Trim `Institution_Name` values
//! - Coerce rank/score columns to numbers, turning unparseable cells into
//!   [`CellValue::Missing`] instead of rejecting the row. A column with any
//!   float or missing cell becomes a float column throughout.
//!
//! ## Failure model
//!
//! [`load`] returns a [`DatasetError`] for a missing or unreadable file and
//! never panics. Callers are expected to keep running without a table and
//! report "dataset not loaded" to their own clients.
//!
//! ```rust
//! use dataset::{load_from_reader, CellValue};
//!
//! let csv = "Institution_Name,Overall_Score\n  University of Oxford ,96.9\n";
//! let table = load_from_reader(csv.as_bytes()).expect("table loads");
//!
//! let row = &table.rows()[0];
//! assert_eq!(row.name(), "University of Oxford");
//! assert_eq!(table.value(row, "Overall_Score"), Some(&CellValue::Float(96.9)));
//! ```

mod coerce;
mod error;
mod loader;
mod schema;
mod table;
mod value;

pub use crate::coerce::{coerce_numeric, is_missing_token, is_numeric_column, normalize_column_name};
pub use crate::error::DatasetError;
pub use crate::loader::{decode_latin1, load, load_from_reader};
pub use crate::schema::{ColumnKind, SchemaReport, DETAIL_COLUMNS};
pub use crate::table::{Row, Table};
pub use crate::value::{CellValue, Number};

/// Column holding the display name used as the match key.
pub const NAME_COLUMN: &str = "Institution_Name";
