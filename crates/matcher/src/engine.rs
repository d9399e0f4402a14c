use std::collections::HashSet;
use std::time::Instant;

use dataset::{Row, Table, DETAIL_COLUMNS, NAME_COLUMN};

use crate::metrics::metrics_recorder;
use crate::types::{DetailsResult, DisplayValue, MatchTier, MatchedRow, UniversityDetails};

#[cfg(test)]
mod tests;

/// Find the row best matching a free-text university name.
///
/// Tiers are tried in order (exact, word-subset, substring), all on
/// lowercase forms. Within a tier the first row in table order wins; there
/// is no scoring. An empty or whitespace-only query never matches.
pub fn find_university<'a>(table: &'a Table, query: &str) -> Option<MatchedRow<'a>> {
    let start = Instant::now();
    let hit = search(table, query);

    if let Some(recorder) = metrics_recorder() {
        recorder.record_lookup(start.elapsed(), hit.map(|h| h.tier));
    }
    match &hit {
        Some(h) => tracing::debug!(
            query,
            tier = h.tier.as_str(),
            row = h.index,
            name = h.row.name(),
            "university matched"
        ),
        None => tracing::debug!(query, "no university matched"),
    }

    hit
}

fn search<'a>(table: &'a Table, query: &str) -> Option<MatchedRow<'a>> {
    let needle = query.to_lowercase();
    let needle = needle.trim();
    if needle.is_empty() {
        return None;
    }
    let rows = table.rows();

    if let Some(hit) = first_match(rows, MatchTier::Exact, |row| row.name_lower() == needle) {
        return Some(hit);
    }

    let tokens: HashSet<&str> = needle.split_whitespace().collect();
    if let Some(hit) = first_match(rows, MatchTier::WordSubset, |row| {
        tokens.iter().all(|token| row.name_tokens().contains(*token))
    }) {
        return Some(hit);
    }

    first_match(rows, MatchTier::Substring, |row| {
        row.name_lower().contains(needle)
    })
}

fn first_match<'a>(
    rows: &'a [Row],
    tier: MatchTier,
    pred: impl Fn(&Row) -> bool,
) -> Option<MatchedRow<'a>> {
    rows.iter()
        .enumerate()
        .find(|(_, row)| pred(row))
        .map(|(index, row)| MatchedRow { index, tier, row })
}

/// Look up a university and project it into a display-ready payload.
///
/// A miss yields [`DetailsResult::NotFound`] echoing `query` verbatim.
pub fn get_details(table: &Table, query: &str) -> DetailsResult {
    match find_university(table, query) {
        Some(hit) => DetailsResult::Found(project_row(table, hit.row)),
        None => DetailsResult::not_found(query),
    }
}

/// Project a row onto `Institution_Name` plus the detail allowlist.
///
/// Allowlisted columns the table does not have are left out.
pub fn project_row(table: &Table, row: &Row) -> UniversityDetails {
    let mut details = UniversityDetails::default();
    details.push(NAME_COLUMN, DisplayValue::Text(row.name().to_string()));
    for &(column, _) in DETAIL_COLUMNS {
        if let Some(value) = table.value(row, column) {
            details.push(column, DisplayValue::from(value));
        }
    }
    details
}
