//! # Structural Kind Dispatch
//!
//! Exactly one structural checker runs per step. Which one is decided
//! here, from the schema's `type` keyword:
//!
//! | `type`                         | Checker   |
//! |--------------------------------|-----------|
//! | `"object"`                     | objects   |
//! | `"array"`                      | arrays    |
//! | `"string"`                     | strings   |
//! | `"integer"` / `"number"`       | numbers   |
//! | `"boolean"`, `"null"`, unknown | none      |
//! | list of names                  | first listed structural kind the value satisfies |
//! | absent                         | the value's own kind |
//!
//! The absent case lets untyped subschemas such as `{"multipleOf": 3}`
//! inside `oneOf` enforce their keywords.

use jsv_core::JsonKind;
use serde_json::Value;

/// The structural checker selected for one validation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralKind {
    /// Object checker.
    Object,
    /// Array checker.
    Array,
    /// String checker.
    String,
    /// Number checker (`integer` and `number`).
    Number,
    /// No structural checker.
    Unstructured,
}

impl StructuralKind {
    /// Resolve the checker for `data` under `schema`.
    pub fn resolve(schema: &Value, data: &Value) -> Self {
        match schema.get("type") {
            None => Self::from(JsonKind::of(data)),
            Some(Value::String(name)) => JsonKind::from_name(name)
                .map(Self::from)
                .unwrap_or(Self::Unstructured),
            Some(Value::Array(names)) => names
                .iter()
                .filter_map(Value::as_str)
                .filter_map(JsonKind::from_name)
                .find(|kind| kind.matches(data))
                .map(Self::from)
                .unwrap_or(Self::Unstructured),
            Some(_) => Self::Unstructured,
        }
    }
}

impl From<JsonKind> for StructuralKind {
    fn from(kind: JsonKind) -> Self {
        match kind {
            JsonKind::Object => Self::Object,
            JsonKind::Array => Self::Array,
            JsonKind::String => Self::String,
            JsonKind::Integer | JsonKind::Number => Self::Number,
            JsonKind::Null | JsonKind::Boolean => Self::Unstructured,
        }
    }
}
