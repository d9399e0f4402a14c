//! # Unirank Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` sits on top of the dataset layer (`dataset`). Given a free-text
//! university name it picks a single row of the ranking [`Table`](dataset::Table)
//! and projects it into a flat, display-ready payload. It also decides
//! whether a chat message is a dataset question at all.
//!
//! ## Matching tiers
//!
//! All comparisons use lowercase forms; stored names are never modified.
//!
//! 1. [`MatchTier::Exact`]: trimmed query equals the name.
//! 2. [`MatchTier::WordSubset`]: the query's token set is a subset of the
//!    name's token set (order and duplicates ignored).
//! 3. [`MatchTier::Substring`]: the query occurs inside the name.
//!
//! The first tier with any hit wins, and within a tier the first row in table
//! order wins. Nothing is scored or ranked.
//!
//! ## Core Types
//!
//! - [`MatchedRow`]: row reference, its position and the tier that found it.
//! - [`UniversityDetails`]: ordered `Institution_Name` + allowlisted columns,
//!   with missing cells rendered as `"N/A"`.
//! - [`DetailsResult`]: details or a not-found message echoing the query.
//! - [`ChatRoute`]: answer a chat message from the table or hand it to the
//!   assistant.
//!
//! ## Example Usage
//!
//! ```
//! use dataset::load_from_reader;
//! use matcher::{get_details, DisplayValue};
//!
//! let csv = "Institution_Name,Overall_Score\nUniversity of Oxford,96.9\n";
//! let table = load_from_reader(csv.as_bytes()).expect("table");
//!
//! let result = get_details(&table, "oxford university");
//! let details = result.details().expect("found");
//! assert_eq!(details.get("Overall_Score"), Some(&DisplayValue::Float(96.9)));
//! ```
//!
//! ## Observability
//!
//! Install a [`LookupMetrics`] implementation via [`set_lookup_metrics`] to
//! record per-lookup latency and the winning tier.

pub mod classify;
pub mod engine;
pub mod metrics;
pub mod types;

pub use crate::classify::{classify, extract_university_name, is_university_query};
pub use crate::engine::{find_university, get_details, project_row};
pub use crate::metrics::{set_lookup_metrics, LookupMetrics};
pub use crate::types::{ChatRoute, DetailsResult, DisplayValue, MatchTier, MatchedRow, UniversityDetails};
