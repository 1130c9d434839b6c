//! Array checks: `items`, `minItems`, `maxItems`.

use serde_json::Value;

use super::{count_keyword, subschema};
use crate::result::ValidationResult;
use crate::scope::Scope;
use crate::validate::Validate;

/// Checks array keywords, recursing into elements through `root`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayValidator;

impl ArrayValidator {
    /// Validate an array value.
    pub fn validate(
        &self,
        root: &dyn Validate,
        data: &Value,
        schema: &Value,
        scope: &Scope<'_>,
    ) -> ValidationResult {
        let Value::Array(items) = data else {
            return ValidationResult::from_errors(vec![scope.error("Data is not an array")]);
        };
        let mut result = ValidationResult::ok();

        // Tuple-form `items` (a list of schemas) is not supported and is skipped.
        if let Some(item_schema) = subschema(schema, "items") {
            for (index, item) in items.iter().enumerate() {
                result.merge(root.validate(item, item_schema, &scope.item(index)));
            }
        }

        let len = items.len() as u64;
        let mut bounds = Vec::new();
        if let Some(min) = count_keyword(schema, "minItems") {
            if len < min {
                bounds.push(scope.value_error(
                    "minItems",
                    format!("Array length {len} is smaller than minItems {min}"),
                ));
            }
        }
        if let Some(max) = count_keyword(schema, "maxItems") {
            if len > max {
                bounds.push(scope.value_error(
                    "maxItems",
                    format!("Array length {len} is bigger than maxItems {max}"),
                ));
            }
        }
        result.merge(bounds.into());
        result
    }
}
