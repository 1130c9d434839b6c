//! String checks: `minLength`, `maxLength`, `pattern`.
//!
//! Lengths count Unicode scalar values, so `"é"` has length 1 however it
//! is encoded. `pattern` is anchored at the start of the string only: the
//! regex must match at offset 0, and trailing input may remain.

use regex::Regex;
use serde_json::Value;

use super::count_keyword;
use crate::result::ValidationResult;
use crate::scope::Scope;

/// Compile a `pattern` keyword with its implicit start anchor.
///
/// The pattern must compile on its own before it is wrapped, so an
/// unbalanced group such as `a)|(b` cannot escape the anchor. The `regex`
/// crate has no look-around or backreferences; patterns using them fail
/// here.
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(pattern)?;
    Regex::new(&format!(r"\A(?:{pattern})"))
}

/// Checks string keywords.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringValidator;

impl StringValidator {
    /// Validate a string value.
    pub fn validate(&self, data: &Value, schema: &Value, scope: &Scope<'_>) -> ValidationResult {
        let Value::String(text) = data else {
            return ValidationResult::from_errors(vec![scope.error("Data is not a string")]);
        };
        let mut errors = Vec::new();
        let len = text.chars().count() as u64;

        if let Some(min) = count_keyword(schema, "minLength") {
            if len < min {
                errors.push(
                    scope.value_error(
                        "minLength",
                        format!("String length {len} < minLength {min}"),
                    ),
                );
            }
        }
        if let Some(max) = count_keyword(schema, "maxLength") {
            if len > max {
                errors.push(
                    scope.value_error(
                        "maxLength",
                        format!("String length {len} > maxLength {max}"),
                    ),
                );
            }
        }

        if let Some(pattern) = schema.get("pattern").and_then(Value::as_str) {
            match compile_pattern(pattern) {
                Ok(regex) if !regex.is_match(text) => errors.push(scope.value_error(
                    "pattern",
                    format!("String {text} does not match pattern {pattern}"),
                )),
                Ok(_) => {}
                Err(err) => tracing::warn!(
                    path = scope.report_path(),
                    pattern,
                    error = %err,
                    "skipping uncompilable pattern"
                ),
            }
        }

        ValidationResult::from_errors(errors)
    }
}
