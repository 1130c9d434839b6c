//! Type, enum and const checks.
//!
//! The three keywords are independent, so one value can produce up to three
//! errors. Errors carry the key-token line of the current member.

use jsv_core::{json_equal, JsonKind};
use serde_json::Value;

use crate::result::{ValidationError, ValidationResult};
use crate::scope::Scope;

/// Checks `type`, `enum` and `const`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeValidator;

impl TypeValidator {
    /// Validate the identity keywords of `schema` against `data`.
    pub fn validate(&self, data: &Value, schema: &Value, scope: &Scope<'_>) -> ValidationResult {
        let mut errors: Vec<ValidationError> = Vec::new();

        if let Some(allowed) = declared_types(schema) {
            let matched = allowed
                .iter()
                .any(|name| JsonKind::from_name(name).is_some_and(|kind| kind.matches(data)));
            if !matched {
                errors.push(scope.key_error(
            "type",
            "Data does not match any of the allowed types",
        ));
            }
        }

        if let Some(Value::Array(members)) = schema.get("enum") {
            if !members.iter().any(|member| json_equal(member, data)) {
                errors.push(scope.key_error("enum", "Data does not match any of the enum values"));
            }
        }

        if let Some(expected) = schema.get("const") {
            if !json_equal(expected, data) {
                errors.push(scope.key_error("const", "Data does not match the const value"));
            }
        }

        ValidationResult::from_errors(errors)
    }
}

/// `type` normalized to a list of names. Non-string list members are
/// dropped; a `type` of any other JSON kind is ignored entirely.
fn declared_types(schema: &Value) -> Option<Vec<&str>> {
    match schema.get("type")? {
        Value::String(name) => Some(vec![name.as_str()]),
        Value::Array(names) => Some(names.iter().filter_map(Value::as_str).collect()),
        _ => None,
    }
}
