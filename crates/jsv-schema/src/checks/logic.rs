//! # Combinators — allOf, anyOf, oneOf, not, if/then/else
//!
//! Branches are validated at the parent's report path and data pointer, so
//! a branch error reads exactly as if the branch's keywords had been
//! written inline. Only the aggregate failure of `anyOf`, `oneOf` and `not`
//! is placed at the combinator keyword.
//!
//! | Keyword | Evaluation                          | Failure                          |
//! |---------|-------------------------------------|----------------------------------|
//! | `allOf` | every branch                        | every failing branch's errors    |
//! | `anyOf` | in order, stops at first success    | one error, branch errors in `details` |
//! | `oneOf` | in order, stops at second success   | one error, `details` only when none matched |
//! | `not`   | the one branch                      | one error when the branch passes |
//! | `if`    | condition, then `then` or `else`    | the chosen branch's errors, unwrapped |

use serde_json::Value;

use super::subschema;
use crate::result::{ValidationError, ValidationResult};
use crate::scope::Scope;
use crate::validate::Validate;

/// Evaluates combinator keywords through `root`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogicValidator;

impl LogicValidator {
    /// Validate every combinator keyword of `schema`, in the order
    /// `allOf`, `anyOf`, `oneOf`, `not`, `if`.
    pub fn validate(
        &self,
        root: &dyn Validate,
        data: &Value,
        schema: &Value,
        scope: &Scope<'_>,
    ) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if let Some(Value::Array(branches)) = schema.get("allOf") {
            for branch in branches {
                result.merge(root.validate(data, branch, scope));
            }
        }

        if let Some(Value::Array(branches)) = schema.get("anyOf") {
            if let Some(error) = any_of(root, data, branches, scope) {
                result.merge(vec![error].into());
            }
        }

        if let Some(Value::Array(branches)) = schema.get("oneOf") {
            if let Some(error) = one_of(root, data, branches, scope) {
                result.merge(vec![error].into());
            }
        }

        if let Some(negated) = subschema(schema, "not") {
            if root.validate(data, negated, scope).is_valid() {
                result.merge(vec![scope.value_error("not", "Data matches not schema")].into());
            }
        }

        if let Some(condition) = subschema(schema, "if") {
            let chosen = if root.validate(data, condition, scope).is_valid() {
                subschema(schema, "then")
            } else {
                subschema(schema, "else")
            };
            if let Some(branch) = chosen {
                result.merge(root.validate(data, branch, scope));
            }
        }

        result
    }
}

fn any_of(
    root: &dyn Validate,
    data: &Value,
    branches: &[Value],
    scope: &Scope<'_>,
) -> Option<ValidationError> {
    let mut collected = Vec::new();
    for branch in branches {
        let outcome = root.validate(data, branch, scope);
        if outcome.is_valid() {
            return None;
        }
        collected.extend(outcome.into_errors());
    }
    Some(scope.value_error("anyOf", "Data does not match anyOf schemas").with_details(collected))
}

fn one_of(
    root: &dyn Validate,
    data: &Value,
    branches: &[Value],
    scope: &Scope<'_>,
) -> Option<ValidationError> {
    let mut collected = Vec::new();
    let mut matched = 0usize;
    for branch in branches {
        let outcome = root.validate(data, branch, scope);
        if outcome.is_valid() {
            matched += 1;
            if matched > 1 {
                tracing::trace!(path = scope.report_path(), "oneOf matched twice, stopping");
                return Some(scope.value_error("oneOf", "Data matches more than one oneOf schema"));
            }
        } else {
            collected.extend(outcome.into_errors());
        }
    }
    (matched == 0).then(|| {
        scope
            .value_error("oneOf", "Data does not match oneOf schemas")
            .with_details(collected)
    })
}
