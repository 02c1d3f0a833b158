//! Read-only view over a parsed manifest document.

use serde_json::{Map, Value};

/// Borrowed view of a manifest.
///
/// A document whose root is not a mapping is treated as having no fields.
#[derive(Debug, Clone, Copy)]
pub struct Manifest<'a> {
    root: Option<&'a Map<String, Value>>,
}

impl<'a> Manifest<'a> {
    pub fn new(document: &'a Value) -> Self {
        Self {
            root: document.as_object(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&'a Value> {
        self.root.and_then(|map| map.get(field))
    }

    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn str_field(&self, field: &str) -> Option<&'a str> {
        self.get(field).and_then(Value::as_str)
    }

    /// The field as a mapping, or `None` when absent or not a mapping.
    pub fn object(&self, field: &str) -> Option<&'a Map<String, Value>> {
        self.get(field).and_then(Value::as_object)
    }
}

/// Render a value for a message: strings bare, everything else as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
