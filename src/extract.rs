//! Field extraction from CSL-JSON.
//!
//! Every extractor is total: missing or oddly-shaped data yields `None`,
//! never an error.

use crate::csl::CslJson;
use serde_json::Value;
use std::fmt;

/// A single author's name as found in a CSL `author` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorName {
    /// Organizational or otherwise unstructured name, used as-is.
    Literal(String),
    /// A person, family name first.
    Personal {
        family: String,
        given: Option<String>,
    },
}

impl AuthorName {
    /// Read one CSL name object.
    ///
    /// `literal` wins over `family`/`given`. Entries with neither a literal
    /// nor a family name are unusable and give `None`.
    pub fn from_entry(entry: &Value) -> Option<Self> {
        let fields = entry.as_object()?;

        if let Some(literal) = fields.get("literal").and_then(scalar_text) {
            return Some(Self::Literal(literal));
        }

        let family = fields.get("family").and_then(scalar_text)?;
        let given = fields.get("given").and_then(scalar_text);
        Some(Self::Personal { family, given })
    }
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(name) => f.write_str(name),
            Self::Personal {
                family,
                given: Some(given),
            } => write!(f, "{}, {}", family, given),
            Self::Personal {
                family,
                given: None,
            } => f.write_str(family),
        }
    }
}

/// Collapse one author entry, or a list of them, into a display string.
///
/// Lists are joined with `" & "` in their original order. Unusable entries
/// are dropped; if nothing usable remains the result is `None`.
pub fn flatten_names(value: &Value) -> Option<String> {
    match value {
        Value::Array(entries) => {
            let names: Vec<String> = entries
                .iter()
                .filter_map(AuthorName::from_entry)
                .map(|name| name.to_string())
                .collect();
            if names.is_empty() {
                None
            } else {
                Some(names.join(" & "))
            }
        }
        Value::Object(_) => AuthorName::from_entry(value).map(|name| name.to_string()),
        _ => None,
    }
}

/// Publication year: the first part of the last `issued.date-parts` entry.
pub fn extract_year(json: &CslJson) -> Option<i32> {
    json.get("issued")?
        .get("date-parts")?
        .as_array()?
        .last()?
        .as_array()?
        .first()
        .and_then(year_value)
}

/// Flattened author names from `author`.
pub fn extract_author(json: &CslJson) -> Option<String> {
    json.get("author").and_then(flatten_names)
}

/// Journal name from `container-title`.
///
/// Some services send the title as a one-element list; the first string is
/// used in that case.
pub fn extract_journal(json: &CslJson) -> Option<String> {
    match json.get("container-title")? {
        Value::String(title) => Some(title.clone()),
        Value::Array(titles) => titles.iter().find_map(|t| t.as_str().map(String::from)),
        _ => None,
    }
}

fn year_value(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
