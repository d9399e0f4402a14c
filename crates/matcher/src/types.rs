use dataset::{CellValue, Row};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Which matching strategy produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Lowercase query equals the lowercase name.
    Exact,
    /// Every query token appears among the name's tokens.
    WordSubset,
    /// Lowercase query occurs contiguously inside the lowercase name.
    Substring,
}

impl MatchTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::WordSubset => "word_subset",
            MatchTier::Substring => "substring",
        }
    }
}

/// A row selected by [`find_university`](crate::find_university).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchedRow<'a> {
    /// Position of the row in table order.
    pub index: usize,
    pub tier: MatchTier,
    pub row: &'a Row,
}

/// Display-ready value of one details field.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayValue {
    Int(i64),
    Float(f64),
    Text(String),
    /// Rendered as the literal string `"N/A"`.
    NotAvailable,
}

impl From<&CellValue> for DisplayValue {
    fn from(value: &CellValue) -> Self {
        match value {
            CellValue::Int(i) => DisplayValue::Int(*i),
            CellValue::Float(f) => DisplayValue::Float(*f),
            CellValue::Text(s) => DisplayValue::Text(s.clone()),
            CellValue::Missing => DisplayValue::NotAvailable,
        }
    }
}

impl Serialize for DisplayValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DisplayValue::Int(i) => serializer.serialize_i64(*i),
            DisplayValue::Float(f) => serializer.serialize_f64(*f),
            DisplayValue::Text(s) => serializer.serialize_str(s),
            DisplayValue::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}

/// Flat, ordered projection of a matched row.
///
/// Serializes as a JSON object whose keys keep insertion order:
/// `Institution_Name` first, then allowlisted columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniversityDetails {
    fields: Vec<(String, DisplayValue)>,
}

impl UniversityDetails {
    pub(crate) fn push(&mut self, column: impl Into<String>, value: DisplayValue) {
        self.fields.push((column.into(), value));
    }

    pub fn get(&self, column: &str) -> Option<&DisplayValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Matched `Institution_Name`.
    pub fn institution_name(&self) -> Option<&str> {
        match self.get(dataset::NAME_COLUMN) {
            Some(DisplayValue::Text(name)) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn fields(&self) -> &[(String, DisplayValue)] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for UniversityDetails {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (column, value) in &self.fields {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Outcome of a details lookup.
///
/// A miss is a normal result rather than an error: it carries the query
/// verbatim and a message ready to show to a user.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailsResult {
    Found(UniversityDetails),
    NotFound { query: String, message: String },
}

impl DetailsResult {
    pub(crate) fn not_found(query: &str) -> Self {
        DetailsResult::NotFound {
            query: query.to_string(),
            message: format!("Sorry, could not find any university matching '{query}'."),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, DetailsResult::Found(_))
    }

    pub fn details(&self) -> Option<&UniversityDetails> {
        match self {
            DetailsResult::Found(details) => Some(details),
            DetailsResult::NotFound { .. } => None,
        }
    }

    pub fn into_details(self) -> Option<UniversityDetails> {
        match self {
            DetailsResult::Found(details) => Some(details),
            DetailsResult::NotFound { .. } => None,
        }
    }
}

impl Serialize for DetailsResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DetailsResult::Found(details) => details.serialize(serializer),
            DetailsResult::NotFound { message, .. } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", message)?;
                map.end()
            }
        }
    }
}

/// Where a chat message should be answered from.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatRoute {
    /// The message named a university that exists in the table.
    Lookup(UniversityDetails),
    /// Anything else, including university questions the table cannot answer.
    Conversational,
}
