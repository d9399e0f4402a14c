use crate::coerce::is_numeric_column;
use crate::table::Table;

/// Expected kind of a detail column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Text,
}

/// Ordered allowlist of columns projected into a details payload.
///
/// `Institution_Name` is not listed; it always leads the payload.
pub const DETAIL_COLUMNS: &[(&str, ColumnKind)] = &[
    ("RANK_2025", ColumnKind::Numeric),
    ("RANK_2024", ColumnKind::Numeric),
    ("Location", ColumnKind::Text),
    ("Region", ColumnKind::Text),
    ("SIZE", ColumnKind::Text),
    ("FOCUS", ColumnKind::Text),
    ("RES.", ColumnKind::Text),
    ("STATUS", ColumnKind::Text),
    ("Academic_Reputation_Score", ColumnKind::Numeric),
    ("Academic_Reputation_Rank", ColumnKind::Numeric),
    ("Employer_Reputation_Score", ColumnKind::Numeric),
    ("Employer_Reputation_Rank", ColumnKind::Numeric),
    ("Faculty_Student_Score", ColumnKind::Numeric),
    ("Faculty_Student_Rank", ColumnKind::Numeric),
    ("Citations_per_Faculty_Score", ColumnKind::Numeric),
    ("Citations_per_Faculty_Rank", ColumnKind::Numeric),
    ("International_Faculty_Score", ColumnKind::Numeric),
    ("International_Faculty_Rank", ColumnKind::Numeric),
    ("International_Students_Score", ColumnKind::Numeric),
    ("International_Students_Rank", ColumnKind::Numeric),
    ("International_Research_Network_Score", ColumnKind::Numeric),
    ("International_Research_Network_Rank", ColumnKind::Numeric),
    ("Employment_Outcomes_Score", ColumnKind::Numeric),
    ("Employment_Outcomes_Rank", ColumnKind::Numeric),
    ("Sustainability_Score", ColumnKind::Numeric),
    ("Sustainability_Rank", ColumnKind::Numeric),
    ("Overall_Score", ColumnKind::Numeric),
];

/// Outcome of checking an allowlist against a loaded table.
///
/// Neither list is an error: absent columns are skipped when details are
/// rendered, and a kind mismatch only means the cells keep their raw form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaReport {
    /// Allowlisted columns the table does not have.
    pub missing: Vec<&'static str>,
    /// Allowlisted columns whose expected kind disagrees with the coercion rule.
    pub kind_mismatches: Vec<&'static str>,
}

impl SchemaReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.kind_mismatches.is_empty()
    }
}

impl Table {
    /// Compare the table's header against an ordered column allowlist.
    pub fn check_schema(&self, columns: &[(&'static str, ColumnKind)]) -> SchemaReport {
        let mut report = SchemaReport::default();
        for &(name, kind) in columns {
            if !self.has_column(name) {
                report.missing.push(name);
            }
            let coerced = if is_numeric_column(name) {
                ColumnKind::Numeric
            } else {
                ColumnKind::Text
            };
            if coerced != kind {
                report.kind_mismatches.push(name);
            }
        }
        report
    }
}
