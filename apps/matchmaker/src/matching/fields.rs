//! Field Extractor — flattens designated fields of a loosely-structured record
//! into a single space-joined text blob for embedding.
//!
//! Each record type has a declarative `FieldSpec` table; `extract_text` is the
//! only routine that walks a record.

use serde_json::{Map, Value};
use tracing::warn;

/// How a field's value contributes tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A single string.
    Text,
    /// An array of strings, each contributed as its own token.
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }

    pub const fn list(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::List,
        }
    }
}

pub const JOB_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("jobDescription"),
    FieldSpec::text("responsibilities"),
    FieldSpec::list("keySkills"),
];

pub const CANDIDATE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("self_intro"),
    FieldSpec::text("Work Experience"),
    FieldSpec::list("skills"),
    FieldSpec::list("Tools"),
];

/// Comma-separated field names, for error messages.
pub fn field_names(fields: &[FieldSpec]) -> String {
    fields
        .iter()
        .map(|f| f.name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Joins the non-empty designated fields of `record` with single spaces,
/// in table order. Returns an empty string when nothing usable is present.
///
/// Values of the wrong shape are skipped with a warning, never an error.
pub fn extract_text(record: &Map<String, Value>, fields: &[FieldSpec]) -> String {
    let mut tokens: Vec<&str> = Vec::new();

    for field in fields {
        let value = match record.get(field.name) {
            Some(v) if !is_empty(v) => v,
            _ => continue,
        };

        match (field.kind, value) {
            (FieldKind::Text, Value::String(s)) => tokens.push(s.as_str()),
            (FieldKind::List, Value::Array(items)) => {
                for item in items {
                    match item {
                        Value::String(s) if !s.is_empty() => tokens.push(s.as_str()),
                        Value::String(_) | Value::Null => {}
                        other => warn!(
                            field = field.name,
                            value = %other,
                            "Skipping non-string element in list field"
                        ),
                    }
                }
            }
            (FieldKind::List, other) => {
                warn!(field = field.name, value = %other, "Expected a list; skipping field")
            }
            (FieldKind::Text, other) => {
                warn!(field = field.name, value = %other, "Expected a string; skipping field")
            }
        }
    }

    tokens.join(" ")
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
