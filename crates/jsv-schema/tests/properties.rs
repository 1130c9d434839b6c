//! Property tests over generated schemas and documents, including schemas
//! with ill-typed keyword values.

use jsv_core::SourceMap;
use jsv_schema::{JsonValidator, Scope, TypeValidator, ValidationResult};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-50i64..50).prop_map(|n| json!(n)),
        (-200i32..200).prop_map(|n| json!(f64::from(n) / 4.0)),
        "[a-z@0-9]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-d]", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// A single keyword entry, sometimes with an ill-typed value.
fn keyword() -> impl Strategy<Value = (String, Value)> {
    let type_name = prop_oneof![
        Just("null"),
        Just("boolean"),
        Just("integer"),
        Just("number"),
        Just("string"),
        Just("array"),
        Just("object"),
        Just("bogus"),
    ];
    prop_oneof![
        type_name.clone().prop_map(|t| ("type".to_string(), json!(t))),
        prop::collection::vec(type_name, 0..3).prop_map(|t| ("type".to_string(), json!(t))),
        prop::collection::vec(json_value(), 0..3).prop_map(|v| ("enum".to_string(), json!(v))),
        json_value().prop_map(|v| ("const".to_string(), v)),
        (
            prop_oneof![
                Just("minLength"),
                Just("maxLength"),
                Just("minItems"),
                Just("maxItems"),
                Just("minProperties"),
                Just("maxProperties"),
            ],
            prop_oneof![(0u64..6).prop_map(|n| json!(n)), Just(json!("3")), Just(json!(-1))],
        )
            .prop_map(|(k, v)| (k.to_string(), v)),
        (
            prop_oneof![
                Just("minimum"),
                Just("maximum"),
                Just("exclusiveMinimum"),
                Just("exclusiveMaximum"),
                Just("multipleOf"),
            ],
            prop_oneof![(-10i64..10).prop_map(|n| json!(n)), Just(json!(0.5)), Just(json!(true))],
        )
            .prop_map(|(k, v)| (k.to_string(), v)),
        prop_oneof![Just("^[a-z]"), Just("@"), Just("(unclosed"), Just("\\d+")]
            .prop_map(|p| ("pattern".to_string(), json!(p))),
        prop::collection::vec("[a-d]", 0..3).prop_map(|r| ("required".to_string(), json!(r))),
        any::<bool>().prop_map(|b| ("additionalProperties".to_string(), json!(b))),
    ]
}

fn schema() -> impl Strategy<Value = Value> {
    let leaf = prop::collection::vec(keyword(), 0..4).prop_map(|entries| {
        Value::Object(entries.into_iter().collect::<Map<String, Value>>())
    });
    leaf.prop_recursive(3, 32, 4, |inner| {
        let one = |key: &'static str| move |s: Value| vec![(key.to_string(), s)];
        let list = |key: &'static str| move |v: Vec<Value>| vec![(key.to_string(), json!(v))];
        let nested = prop_oneof![
            prop::collection::btree_map("[a-d]", inner.clone(), 1..3).prop_map(|p| vec![(
                "properties".to_string(),
                Value::Object(p.into_iter().collect())
            )]),
            inner.clone().prop_map(one("items")),
            inner.clone().prop_map(one("additionalProperties")),
            prop::collection::vec(inner.clone(), 0..3).prop_map(list("allOf")),
            prop::collection::vec(inner.clone(), 0..3).prop_map(list("anyOf")),
            prop::collection::vec(inner.clone(), 0..3).prop_map(list("oneOf")),
            inner.clone().prop_map(one("not")),
            (inner.clone(), inner.clone(), inner).prop_map(|(i, t, e)| vec![
                ("if".to_string(), i),
                ("then".to_string(), t),
                ("else".to_string(), e),
            ]),
        ];
        (prop::collection::vec(keyword(), 0..3), nested).prop_map(|(entries, extra)| {
            Value::Object(entries.into_iter().chain(extra).collect())
        })
    })
}

fn run(schema: &Value, data: &Value) -> ValidationResult {
    JsonValidator::default().validate_root(data, schema, &SourceMap::new())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn valid_flag_matches_error_list(schema in schema(), data in json_value()) {
        let result = run(&schema, &data);
        let serialized = serde_json::to_value(&result).unwrap();
        prop_assert_eq!(serialized["valid"].as_bool(), Some(result.errors().is_empty()));
        prop_assert_eq!(result.is_valid(), result.errors().is_empty());
    }

    #[test]
    fn validation_is_idempotent(schema in schema(), data in json_value()) {
        prop_assert_eq!(run(&schema, &data), run(&schema, &data));
    }

    #[test]
    fn failing_type_check_short_circuits(schema in schema(), data in json_value()) {
        let map = SourceMap::new();
        let scope = Scope::new("#", "", &map);
        let types = TypeValidator.validate(&data, &schema, &scope);
        if !types.is_valid() {
            prop_assert_eq!(run(&schema, &data), types);
        }
    }

    #[test]
    fn all_of_sums_branch_errors(
        branches in prop::collection::vec(schema(), 1..4),
        data in json_value(),
    ) {
        let expected: usize = branches.iter().map(|b| run(b, &data).errors().len()).sum();
        let combined = run(&json!({"allOf": branches}), &data);
        prop_assert_eq!(combined.errors().len(), expected);
    }

    #[test]
    fn any_of_with_passing_branch_is_valid(
        branches in prop::collection::vec(schema(), 0..3),
        data in json_value(),
        position in 0usize..3,
    ) {
        let mut branches = branches;
        let at = position.min(branches.len());
        branches.insert(at, json!({}));
        let any_of = json!({"anyOf": branches});
        prop_assert!(run(&any_of, &data).is_valid());
    }

    #[test]
    fn not_inverts_branch_validity(schema in schema(), data in json_value()) {
        let inner = run(&schema, &data).is_valid();
        let negated = run(&json!({"not": schema}), &data);
        prop_assert_eq!(negated.is_valid(), !inner);
    }
}
