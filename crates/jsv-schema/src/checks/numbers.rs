//! Number checks: inclusive and exclusive bounds, `multipleOf`.
//!
//! `multipleOf` uses the floating-point remainder. Values that are exact
//! multiples in decimal but not in binary (`0.3` of `0.1`) are reported as
//! violations.

use std::cmp::Ordering;

use jsv_core::{as_finite_number, compare_numbers};
use serde_json::{Number, Value};

use super::number_keyword;
use crate::result::ValidationResult;
use crate::scope::Scope;

/// Checks numeric keywords.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberValidator;

/// A bound keyword, the orderings that violate it, and its message text.
const BOUNDS: [(&str, &[Ordering], &str); 4] = [
    ("minimum", &[Ordering::Less], "is smaller than minimum"),
    ("maximum", &[Ordering::Greater], "is bigger than maximum"),
    (
        "exclusiveMinimum",
        &[Ordering::Less, Ordering::Equal],
        "is smaller or equal than exclusiveMinimum",
    ),
    (
        "exclusiveMaximum",
        &[Ordering::Greater, Ordering::Equal],
        "is bigger or equal than exclusiveMaximum",
    ),
];

impl NumberValidator {
    /// Validate a numeric value.
    pub fn validate(&self, data: &Value, schema: &Value, scope: &Scope<'_>) -> ValidationResult {
        let Some(number) = as_finite_number(data) else {
            return ValidationResult::from_errors(vec![
                scope.error("Data is not a valid finite number")
            ]);
        };
        let mut errors = Vec::new();

        for (keyword, violating, text) in BOUNDS {
            let Some(bound) = number_keyword(schema, keyword) else {
                continue;
            };
            if compare_numbers(number, bound).is_some_and(|ord| violating.contains(&ord)) {
                errors.push(scope.value_error(keyword, format!("Number {number} {text} {bound}")));
            }
        }

        if let Some(factor) = number_keyword(schema, "multipleOf") {
            if !is_multiple(number, factor) {
                errors.push(scope.value_error(
                    "multipleOf",
                    format!("Number {number} is not a multipleOf {factor}"),
                ));
            }
        }

        ValidationResult::from_errors(errors)
    }
}

/// Non-positive factors impose no constraint.
fn is_multiple(number: &Number, factor: &Number) -> bool {
    match (number.as_f64(), factor.as_f64()) {
        (Some(n), Some(m)) if m > 0.0 => n % m == 0.0,
        _ => true,
    }
}
