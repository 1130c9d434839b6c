//! # Keyword Checkers
//!
//! One checker per keyword family. The type checker and the leaf checkers
//! (strings, numbers) are pure functions of `(data, schema, scope)`. The
//! object, array and logic checkers additionally receive the orchestrator
//! as a `&dyn Validate` so they can recurse into subvalues and branches.
//!
//! Every checker tolerates any schema value: keywords whose value has the
//! wrong JSON kind are skipped here and reported by [`crate::lint`].

mod arrays;
mod logic;
mod numbers;
mod objects;
mod strings;
mod types;

pub use arrays::ArrayValidator;
pub use logic::LogicValidator;
pub use numbers::NumberValidator;
pub use objects::ObjectValidator;
pub use strings::{compile_pattern, StringValidator};
pub use types::TypeValidator;

use jsv_core::as_finite_number;
use serde_json::{Number, Value};

/// A count keyword (`minLength`, `maxItems`, ...) as a non-negative integer.
///
/// Integral floats such as `3.0` are accepted.
pub(crate) fn count_keyword(schema: &Value, keyword: &str) -> Option<u64> {
    schema.get(keyword).and_then(as_count)
}

pub(crate) fn as_count(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

/// A numeric keyword (`minimum`, `multipleOf`, ...) if it holds a finite number.
pub(crate) fn number_keyword<'s>(schema: &'s Value, keyword: &str) -> Option<&'s Number> {
    schema.get(keyword).and_then(as_finite_number)
}

/// A keyword holding a subschema. Objects and booleans qualify.
pub(crate) fn subschema<'s>(schema: &'s Value, keyword: &str) -> Option<&'s Value> {
    schema
        .get(keyword)
        .filter(|value| value.is_object() || value.is_boolean())
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_count_keyword_accepts_integral_values_only() {
        let schema = json!({"a": 3, "b": 3.0, "c": -1, "d": 2.5, "e": "3"});
        assert_eq!(count_keyword(&schema, "a"), Some(3));
        assert_eq!(count_keyword(&schema, "b"), Some(3));
        assert_eq!(count_keyword(&schema, "c"), None);
        assert_eq!(count_keyword(&schema, "d"), None);
        assert_eq!(count_keyword(&schema, "e"), None);
        assert_eq!(count_keyword(&schema, "missing"), None);
    }

    #[test]
    fn test_subschema_requires_object_or_bool() {
        let schema = json!({"a": {}, "b": true, "c": [], "d": 1});
        assert!(subschema(&schema, "a").is_some());
        assert!(subschema(&schema, "b").is_some());
        assert!(subschema(&schema, "c").is_none());
        assert!(subschema(&schema, "d").is_none());
    }
}
