//! # JSON Kinds — Primitive Classification and Kind-Aware Equality
//!
//! Classifies `serde_json::Value`s into the seven schema type names and
//! compares values the way `enum`/`const` require.
//!
//! ## Equality Rules
//!
//! - Booleans never equal numbers, in either direction.
//! - Numbers compare by exact numeric value: `1` equals `1.0`, but an
//!   integer never equals a float that merely rounds to it.
//! - Objects compare by key set and per-key value, ignoring key order.
//! - Arrays compare element-wise, in order.

use std::cmp::Ordering;
use std::fmt;

use serde_json::{Number, Value};

/// A schema `type` name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    /// `"null"`
    Null,
    /// `"boolean"`
    Boolean,
    /// `"integer"`: a number with no fractional part.
    Integer,
    /// `"number"`: any finite number.
    Number,
    /// `"string"`
    String,
    /// `"array"`
    Array,
    /// `"object"`
    Object,
}

impl JsonKind {
    /// All kinds, in the order they are documented.
    pub const ALL: [JsonKind; 7] = [
        JsonKind::Null,
        JsonKind::Boolean,
        JsonKind::Integer,
        JsonKind::Number,
        JsonKind::String,
        JsonKind::Array,
        JsonKind::Object,
    ];

    /// Parse a schema type name. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "null" => Some(Self::Null),
            "boolean" => Some(Self::Boolean),
            "integer" => Some(Self::Integer),
            "number" => Some(Self::Number),
            "string" => Some(Self::String),
            "array" => Some(Self::Array),
            "object" => Some(Self::Object),
            _ => None,
        }
    }

    /// The schema type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// Whether `value` satisfies this kind.
    ///
    /// An integral number satisfies both `integer` and `number`.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Null => value.is_null(),
            Self::Boolean => value.is_boolean(),
            Self::Integer => as_finite_number(value).is_some_and(is_integral),
            Self::Number => as_finite_number(value).is_some(),
            Self::String => value.is_string(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
        }
    }

    /// The most specific kind of a value (`integer` before `number`).
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) if is_integral(n) => Self::Integer,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The numeric payload of `value` if it is a finite number.
///
/// Booleans are never numbers. `serde_json` cannot hold NaN or infinities
/// in a parsed tree, but values built programmatically are checked anyway.
pub fn as_finite_number(value: &Value) -> Option<&Number> {
    match value {
        Value::Number(n) if n.as_f64().is_some_and(f64::is_finite) => Some(n),
        _ => None,
    }
}

/// Whether a number has no fractional part.
pub fn is_integral(n: &Number) -> bool {
    if n.is_i64() || n.is_u64() {
        return true;
    }
    n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}

/// Kind-aware structural equality used by `enum` and `const`.
pub fn json_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| json_equal(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, l)| y.get(key).is_some_and(|r| json_equal(l, r)))
        }
        _ => false,
    }
}

fn numbers_equal(x: &Number, y: &Number) -> bool {
    compare_numbers(x, y) == Some(Ordering::Equal)
}

/// Exact numeric ordering across integer and float representations.
///
/// Integers are compared as `i128`. An integer against a float never
/// rounds the integer through `f64`. `None` only for NaN.
pub fn compare_numbers(x: &Number, y: &Number) -> Option<Ordering> {
    match (as_exact_integer(x), as_exact_integer(y)) {
        (Some(l), Some(r)) => Some(l.cmp(&r)),
        (Some(l), None) => compare_integer_float(l, y.as_f64()?),
        (None, Some(r)) => compare_integer_float(r, x.as_f64()?).map(Ordering::reverse),
        (None, None) => x.as_f64()?.partial_cmp(&y.as_f64()?),
    }
}

fn as_exact_integer(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

/// 2^127; every `i64` and `u64` lies strictly inside `±I128_BOUND`.
const I128_BOUND: f64 = i128::MAX as f64;

fn compare_integer_float(int: i128, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= I128_BOUND {
        return Some(Ordering::Less);
    }
    if float <= -I128_BOUND {
        return Some(Ordering::Greater);
    }
    let floor = float.floor();
    // `floor` is integral and in range, so the cast is exact.
    match int.cmp(&(floor as i128)) {
        Ordering::Equal if floor < float => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn n(value: Value) -> Number {
        match value {
            Value::Number(n) => n,
            other => panic!("not a number: {other}"),
        }
    }

    #[test]
    fn test_compare_numbers_mixed_representations() {
        assert_eq!(compare_numbers(&n(json!(2)), &n(json!(2.0))), Some(Ordering::Equal));
        assert_eq!(compare_numbers(&n(json!(-1)), &n(json!(u64::MAX))), Some(Ordering::Less));
        assert_eq!(
            compare_numbers(&n(json!(i64::MAX)), &n(json!(i64::MAX - 1))),
            Some(Ordering::Greater)
        );
        assert_eq!(compare_numbers(&n(json!(1.5)), &n(json!(2))), Some(Ordering::Less));
        assert_eq!(compare_numbers(&n(json!(2)), &n(json!(1.5))), Some(Ordering::Greater));
        assert_eq!(compare_numbers(&n(json!(-2)), &n(json!(-1.5))), Some(Ordering::Less));
        assert_eq!(compare_numbers(&n(json!(-1)), &n(json!(-1.5))), Some(Ordering::Greater));
    }

    #[test]
    fn test_compare_numbers_is_exact_above_two_pow_53() {
        let big_float = n(json!(9_007_199_254_740_992.0));
        let next_int = n(json!(9_007_199_254_740_993_u64));
        assert_eq!(compare_numbers(&next_int, &big_float), Some(Ordering::Greater));
        assert_eq!(compare_numbers(&big_float, &next_int), Some(Ordering::Less));
        assert_eq!(
            compare_numbers(&n(json!(9_007_199_254_740_992_i64)), &big_float),
            Some(Ordering::Equal)
        );
        assert_eq!(
            compare_numbers(&n(json!(u64::MAX)), &n(json!(1e300))),
            Some(Ordering::Less)
        );
        assert_eq!(
            compare_numbers(&n(json!(i64::MIN)), &n(json!(-1e300))),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn test_integer_never_equals_a_rounded_float() {
        assert!(!json_equal(&json!(9_007_199_254_740_993_u64), &json!(9_007_199_254_740_992.0)));
        assert!(!json_equal(&json!(9_007_199_254_740_992.0), &json!(9_007_199_254_740_993_u64)));
        assert!(json_equal(&json!(9_007_199_254_740_992_u64), &json!(9_007_199_254_740_992.0)));
    }

    #[test]
    fn test_from_name_round_trips_every_kind() {
        for kind in JsonKind::ALL {
            assert_eq!(JsonKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(JsonKind::from_name("float"), None);
    }

    #[test]
    fn test_integer_accepts_integral_floats() {
        assert!(JsonKind::Integer.matches(&json!(10)));
        assert!(JsonKind::Integer.matches(&json!(-3)));
        assert!(JsonKind::Integer.matches(&json!(4.0)));
        assert!(!JsonKind::Integer.matches(&json!(1.2)));
    }

    #[test]
    fn test_booleans_are_not_numbers() {
        assert!(!JsonKind::Number.matches(&json!(true)));
        assert!(!JsonKind::Integer.matches(&json!(false)));
        assert!(JsonKind::Boolean.matches(&json!(true)));
    }

    #[test]
    fn test_number_accepts_integers() {
        assert!(JsonKind::Number.matches(&json!(3)));
        assert!(JsonKind::Number.matches(&json!(3.5)));
        assert!(!JsonKind::Number.matches(&json!("3")));
    }

    #[test]
    fn test_kind_of_prefers_integer() {
        assert_eq!(JsonKind::of(&json!(7)), JsonKind::Integer);
        assert_eq!(JsonKind::of(&json!(7.25)), JsonKind::Number);
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&json!({})), JsonKind::Object);
    }

    #[test]
    fn test_equal_numbers_across_representations() {
        assert!(json_equal(&json!(1), &json!(1.0)));
        assert!(json_equal(&json!(u64::MAX), &json!(u64::MAX)));
        assert!(!json_equal(&json!(1), &json!(2)));
    }

    #[test]
    fn test_boolean_never_equals_number() {
        assert!(!json_equal(&json!(true), &json!(1)));
        assert!(!json_equal(&json!(0), &json!(false)));
    }

    #[test]
    fn test_object_equality_ignores_key_order() {
        let a: Value = serde_json::from_str(r#"{"a": 1, "b": [1, 2]}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"b": [1, 2.0], "a": 1}"#).unwrap();
        assert!(json_equal(&a, &b));
        assert!(!json_equal(&a, &json!({"a": 1})));
    }

    #[test]
    fn test_array_equality_is_ordered() {
        assert!(!json_equal(&json!([1, 2]), &json!([2, 1])));
        assert!(json_equal(&json!(["x", null]), &json!(["x", null])));
    }
}
