//! Object checks: property counts, `required`, `properties` and
//! `additionalProperties`.

use serde_json::{Map, Value};

use super::{count_keyword, subschema};
use crate::result::{ValidationError, ValidationResult};
use crate::scope::Scope;
use crate::validate::Validate;

/// Checks object keywords, recursing into member values through `root`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectValidator;

impl ObjectValidator {
    /// Validate an object value. Every keyword is checked independently.
    pub fn validate(
        &self,
        root: &dyn Validate,
        data: &Value,
        schema: &Value,
        scope: &Scope<'_>,
    ) -> ValidationResult {
        let Value::Object(members) = data else {
            return ValidationResult::from_errors(vec![scope.error("Data is not an object")]);
        };
        let mut result = ValidationResult::from_errors(count_errors(members, schema, scope));

        if let Some(Value::Array(required)) = schema.get("required") {
            let missing = required
                .iter()
                .filter_map(Value::as_str)
                .filter(|key| !members.contains_key(*key))
                .map(|key| {
                    scope.value_error("required", format!("Missing required property: {key}"))
                });
            result.merge(missing.collect::<Vec<_>>().into());
        }

        let properties = schema.get("properties").and_then(Value::as_object);
        if let Some(properties) = properties {
            for (key, property_schema) in properties {
                if let Some(value) = members.get(key) {
                    result.merge(root.validate(value, property_schema, &scope.property(key)));
                }
            }
        }

        if let Some(additional) = subschema(schema, "additionalProperties") {
            let extra = members
                .iter()
                .filter(|(key, _)| !properties.is_some_and(|p| p.contains_key(key.as_str())));
            for (key, value) in extra {
                match additional {
                    Value::Bool(false) => result.merge(
                        vec![scope.member_error(
                            "additionalProperties",
                            key,
                            format!("Additional property '{key}' is not allowed"),
                        )]
                        .into(),
                    ),
                    Value::Object(_) => result.merge(root.validate(
                        value,
                        additional,
                        &scope.additional_property(key),
                    )),
                    _ => {}
                }
            }
        }

        result
    }
}

fn count_errors(
    members: &Map<String, Value>,
    schema: &Value,
    scope: &Scope<'_>,
) -> Vec<ValidationError> {
    let count = members.len() as u64;
    let mut errors = Vec::new();
    if let Some(min) = count_keyword(schema, "minProperties") {
        if count < min {
            errors.push(scope.value_error(
                "minProperties",
                format!("Object has fewer properties ({count}) than minProperties ({min})"),
            ));
        }
    }
    if let Some(max) = count_keyword(schema, "maxProperties") {
        if count > max {
            errors.push(scope.value_error(
                "maxProperties",
                format!("Object has more properties ({count}) than maxProperties ({max})"),
            ));
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::{fail, pass, Scripted};
    use jsv_core::SourceMap;
    use serde_json::json;

    fn check(root: &dyn Validate, schema: Value, data: Value) -> ValidationResult {
        let map = SourceMap::new();
        ObjectValidator.validate(root, &data, &schema, &Scope::new("#", "", &map))
    }

    #[test]
    fn test_rejects_non_objects() {
        let root = Scripted::default();
        let result = check(&root, json!({}), json!([1, 2]));
        assert_eq!(result.messages(), vec!["Data is not an object"]);
        assert_eq!(result.errors()[0].path, "#");
    }

    #[test]
    fn test_min_properties() {
        let root = Scripted::default();
        let result = check(&root, json!({"minProperties": 2}), json!({"a": 1}));
        assert_eq!(
            result.messages(),
            vec!["Object has fewer properties (1) than minProperties (2)"]
        );
        assert_eq!(result.errors()[0].path, "#/minProperties");
        assert!(check(&root, json!({"minProperties": 2}), json!({"a": 1, "b": 2})).is_valid());
    }

    #[test]
    fn test_max_properties() {
        let root = Scripted::default();
        let result = check(&root, json!({"maxProperties": 1}), json!({"a": 1, "b": 2}));
        assert_eq!(
            result.messages(),
            vec!["Object has more properties (2) than maxProperties (1)"]
        );
        assert_eq!(result.errors()[0].path, "#/maxProperties");
    }

    #[test]
    fn test_required_reports_each_missing_key() {
        let root = Scripted::default();
        let result = check(
            &root,
            json!({"required": ["name", "age", "email"]}),
            json!({"name": "John"}),
        );
        assert_eq!(
            result.messages(),
            vec!["Missing required property: age", "Missing required property: email"]
        );
        assert!(result.errors().iter().all(|e| e.path == "#/required"));
    }

    #[test]
    fn test_properties_recurse_with_both_paths() {
        let root = Scripted::new(vec![pass(), fail("inner")]);
        let result = check(
            &root,
            json!({"properties": {"name": {"type": "string"}, "a/b": {}, "absent": {}}}),
            json!({"a/b": 1, "name": "x"}),
        );
        assert_eq!(root.calls(), 2);
        assert_eq!(
            root.seen(),
            vec![
                ("#/properties/name".to_string(), "/name".to_string()),
                ("#/properties/a/b".to_string(), "/a~1b".to_string()),
            ]
        );
        assert_eq!(result.messages(), vec!["inner"]);
    }

    #[test]
    fn test_additional_properties_false() {
        let root = Scripted::default();
        let result = check(
            &root,
            json!({"properties": {"a": {}}, "additionalProperties": false}),
            json!({"a": 1, "b": 2}),
        );
        assert_eq!(result.messages(), vec!["Additional property 'b' is not allowed"]);
        assert_eq!(result.errors()[0].path, "#/additionalProperties");
    }

    #[test]
    fn test_additional_properties_false_without_properties() {
        let root = Scripted::default();
        let result = check(&root, json!({"additionalProperties": false}), json!({"x": 1, "y": 2}));
        assert_eq!(result.errors().len(), 2);
    }

    #[test]
    fn test_additional_properties_schema_recurses() {
        let root = Scripted::new(vec![pass(), fail("extra is wrong")]);
        let result = check(
            &root,
            json!({"properties": {"a": {}}, "additionalProperties": {"type": "string"}}),
            json!({"a": 1, "extra": 2}),
        );
        assert_eq!(
            root.seen(),
            vec![
                ("#/properties/a".to_string(), "/a".to_string()),
                ("#/additionalProperties".to_string(), "/extra".to_string()),
            ]
        );
        assert_eq!(result.messages(), vec!["extra is wrong"]);
    }

    #[test]
    fn test_additional_properties_true_is_unconstrained() {
        let root = Scripted::default();
        assert!(check(&root, json!({"additionalProperties": true}), json!({"z": 0})).is_valid());
        assert_eq!(root.calls(), 0);
    }

    #[test]
    fn test_additional_property_line_is_key_line() {
        let map = SourceMap::from_text("{\n  \"a\": 1,\n  \"b\":\n    2\n}").unwrap();
        let root = Scripted::default();
        let result = ObjectValidator.validate(
            &root,
            &json!({"a": 1, "b": 2}),
            &json!({"properties": {"a": {}}, "additionalProperties": false}),
            &Scope::new("#", "", &map),
        );
        assert_eq!(result.errors()[0].line, 3);
    }
}
