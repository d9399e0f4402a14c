//! Routing of free-text chat messages.
//!
//! A message is answered from the table when it looks like a university
//! question and the extracted name resolves to a row. Everything else,
//! including university questions the table cannot answer, goes to the
//! conversational assistant. A lookup miss is not an error in the chat path.

use dataset::Table;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::engine::{find_university, get_details};
use crate::types::ChatRoute;

/// Substrings that mark a message as a university question.
pub const UNIVERSITY_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "rank",
    "score",
    "location",
    "reputation",
    "employment",
    "sustainability",
    "citations",
    "details of",
];

/// Phrases removed before trying the whole message as a name.
const FILLER_PHRASES: &[&str] = &["what is the", "tell me about"];

static NAME_AFTER_CONNECTOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:of|for|about|tell me about|what is the|details of)\s+(.*?)(?:\?|\.|$)")
        .expect("connector pattern is valid")
});

/// Whether a chat message should be treated as a dataset lookup.
pub fn is_university_query(table: &Table, message: &str) -> bool {
    let lower = message.to_lowercase();
    if UNIVERSITY_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return true;
    }

    let candidate = FILLER_PHRASES
        .iter()
        .fold(lower, |acc, phrase| acc.replace(phrase, ""));
    find_university(table, candidate.trim()).is_some()
}

/// Pull the university name out of a chat message.
///
/// Takes the text after the first connector word (`of`, `for`, `about`,
/// `tell me about`, `what is the`, `details of`) up to a `?`, a `.`, or the
/// end of the message. Without a connector the whole message is used with
/// question marks removed.
///
/// ```rust
/// use matcher::extract_university_name;
///
/// assert_eq!(extract_university_name("Tell me about ETH Zurich?"), "ETH Zurich");
/// assert_eq!(extract_university_name("Harvard University?"), "Harvard University");
/// ```
pub fn extract_university_name(message: &str) -> String {
    if let Some(name) = NAME_AFTER_CONNECTOR
        .captures(message)
        .and_then(|caps| caps.get(1))
    {
        return name.as_str().trim().to_string();
    }
    message.replace('?', "").trim().to_string()
}

/// Decide how a chat message is answered.
pub fn classify(table: &Table, message: &str) -> ChatRoute {
    if !is_university_query(table, message) {
        return ChatRoute::Conversational;
    }

    let name = extract_university_name(message);
    match get_details(table, &name).into_details() {
        Some(details) => ChatRoute::Lookup(details),
        None => {
            tracing::debug!(name = %name, "university query missed the table, falling through");
            ChatRoute::Conversational
        }
    }
}
