//! The parsed patch document.
//!
//! A [`Document`] is the raw partial-update input as a generic name→value
//! tree, distinct from the typed entity. It is the source of truth for
//! "was this field mentioned at all": a key set to explicit JSON null is
//! present, a missing key is absent. Keys keep whatever casing the input
//! used; lookups are case-insensitive.

use patchdoc_core::PatchError;
use serde_json::{Map, Value};

/// Top-level name→value mapping parsed from raw patch input.
///
/// Immutable after construction. Iteration follows input order
/// (serde_json's `preserve_order`), though nothing downstream depends on
/// order — validation results are keyed by name.
#[derive(Debug, Clone)]
pub struct Document {
    entries: Map<String, Value>,
}

impl Document {
    /// Parse raw text into a document.
    ///
    /// Fails with [`PatchError::Parse`] on malformed JSON and
    /// [`PatchError::NotAnObject`] when the root is not an object.
    pub fn parse(raw: &str) -> Result<Self, PatchError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|source| PatchError::Parse { source })?;
        match value {
            Value::Object(entries) => Ok(Document { entries }),
            other => Err(PatchError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }

    /// Iterate entries in input order, under their original key casing.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Find the original casing of a key, matching case-insensitively.
    pub fn original_key(&self, name: &str) -> Option<&str> {
        let lower = name.to_lowercase();
        self.entries
            .keys()
            .find(|key| key.to_lowercase() == lower)
            .map(String::as_str)
    }

    /// Whether the document mentions a field, case-insensitively.
    ///
    /// An explicit null entry counts as mentioned.
    pub fn contains(&self, name: &str) -> bool {
        self.original_key(name).is_some()
    }

    /// Look up a value by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.original_key(name).and_then(|key| self.entries.get(key))
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
