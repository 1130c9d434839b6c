//! # Schema Lint — Keyword Shape Checks
//!
//! The engine never fails on a schema: a keyword whose value has the wrong
//! JSON kind is silently skipped. The lint is where those mistakes surface.
//! It walks every subschema the engine would visit and reports each keyword
//! value the engine would ignore.
//!
//! ## Walked Locations
//!
//! `properties/*`, `additionalProperties`, `items`, the members of `allOf`,
//! `anyOf` and `oneOf`, and `not`, `if`, `then`, `else`. Each issue carries
//! the keyword path of the offending value, in the same form the engine
//! uses for report paths (`#/properties/a/pattern`).

use std::fmt;

use jsv_core::{as_finite_number, JsonKind};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::checks::{as_count, compile_pattern};

const COUNT_KEYWORDS: [&str; 6] = [
    "minLength",
    "maxLength",
    "minItems",
    "maxItems",
    "minProperties",
    "maxProperties",
];

const BOUND_KEYWORDS: [&str; 4] = ["minimum", "maximum", "exclusiveMinimum", "exclusiveMaximum"];

const BRANCH_LIST_KEYWORDS: [&str; 3] = ["allOf", "anyOf", "oneOf"];

const BRANCH_KEYWORDS: [&str; 4] = ["not", "if", "then", "else"];

/// One malformed keyword value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaIssue {
    /// Keyword path of the offending value.
    pub path: String,
    /// The keyword, or empty when the schema itself is malformed.
    pub keyword: String,
    /// What is wrong.
    pub message: String,
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}: {}", self.path, self.message)
    }
}

/// Collection of lint issues, in walk order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SchemaIssues {
    issues: Vec<SchemaIssue>,
}

impl SchemaIssues {
    /// Returns the number of issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns true if there are no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns a slice of all issues.
    pub fn issues(&self) -> &[SchemaIssue] {
        &self.issues
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<SchemaIssue> {
        self.issues
    }
}

impl fmt::Display for SchemaIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// A schema rejected by the lint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// One or more keyword values are malformed.
    #[error("schema has {} malformed keyword(s):\n{issues}", .issues.len())]
    Malformed {
        /// Every issue found.
        issues: SchemaIssues,
    },
}

impl SchemaError {
    /// The issues behind this error.
    pub fn issues(&self) -> &SchemaIssues {
        match self {
            Self::Malformed { issues } => issues,
        }
    }
}

/// Check every keyword value of `schema`.
///
/// # Errors
///
/// Returns [`SchemaError::Malformed`] carrying every issue found.
pub fn lint_schema(schema: &Value) -> Result<(), SchemaError> {
    let issues = schema_issues(schema);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::Malformed { issues })
    }
}

/// Every issue in `schema`, with paths rooted at `#`.
pub fn schema_issues(schema: &Value) -> SchemaIssues {
    let mut linter = Linter::default();
    linter.walk(schema, "#");
    tracing::debug!(issues = linter.issues.len(), "schema lint finished");
    SchemaIssues {
        issues: linter.issues,
    }
}

#[derive(Default)]
struct Linter {
    issues: Vec<SchemaIssue>,
}

impl Linter {
    fn report(&mut self, path: &str, keyword: &str, message: impl Into<String>) {
        let path = if keyword.is_empty() {
            path.to_string()
        } else {
            format!("{path}/{keyword}")
        };
        self.issues.push(SchemaIssue {
            path,
            keyword: keyword.to_string(),
            message: message.into(),
        });
    }

    fn walk(&mut self, schema: &Value, path: &str) {
        let Value::Object(_) = schema else {
            if !schema.is_boolean() {
                self.report(path, "", "schema must be an object or a boolean");
            }
            return;
        };

        self.check_type(schema, path);
        if let Some(members) = schema.get("enum") {
            if !members.is_array() {
                self.report(path, "enum", "enum must be an array");
            }
        }
        self.check_pattern(schema, path);

        for keyword in COUNT_KEYWORDS {
            if let Some(value) = schema.get(keyword) {
                if as_count(value).is_none() {
                    self.report(path, keyword, format!("{keyword} must be a non-negative integer"));
                }
            }
        }
        for keyword in BOUND_KEYWORDS {
            if let Some(value) = schema.get(keyword) {
                if as_finite_number(value).is_none() {
                    self.report(path, keyword, format!("{keyword} must be a number"));
                }
            }
        }
        if let Some(factor) = schema.get("multipleOf") {
            let positive = as_finite_number(factor)
                .and_then(serde_json::Number::as_f64)
                .is_some_and(|f| f > 0.0);
            if !positive {
                self.report(path, "multipleOf", "multipleOf must be a number greater than 0");
            }
        }

        self.check_object_keywords(schema, path);
        self.check_items(schema, path);
        self.check_branches(schema, path);
    }

    fn check_type(&mut self, schema: &Value, path: &str) {
        let Some(declared) = schema.get("type") else {
            return;
        };
        let names: Vec<&Value> = match declared {
            Value::String(_) => vec![declared],
            Value::Array(names) if !names.is_empty() => names.iter().collect(),
            Value::Array(_) => {
                self.report(path, "type", "type must list at least one kind");
                return;
            }
            _ => {
                self.report(path, "type", "type must be a string or an array of strings");
                return;
            }
        };
        for name in names {
            match name.as_str() {
                Some(name) if JsonKind::from_name(name).is_some() => {}
                Some(name) => self.report(path, "type", format!("unknown type '{name}'")),
                None => self.report(path, "type", "type must be a string or an array of strings"),
            }
        }
    }

    fn check_pattern(&mut self, schema: &Value, path: &str) {
        match schema.get("pattern") {
            None => {}
            Some(Value::String(pattern)) => {
                if let Err(err) = compile_pattern(pattern) {
                    self.report(path, "pattern", format!("invalid regular expression: {err}"));
                }
            }
            Some(_) => self.report(path, "pattern", "pattern must be a string"),
        }
    }

    fn check_object_keywords(&mut self, schema: &Value, path: &str) {
        if let Some(required) = schema.get("required") {
            let well_formed = required
                .as_array()
                .is_some_and(|keys| keys.iter().all(Value::is_string));
            if !well_formed {
                self.report(path, "required", "required must be an array of strings");
            }
        }

        match schema.get("properties") {
            None => {}
            Some(Value::Object(properties)) => {
                for (key, property) in properties {
                    self.walk(property, &format!("{path}/properties/{key}"));
                }
            }
            Some(_) => self.report(path, "properties", "properties must be an object"),
        }

        if let Some(additional) = schema.get("additionalProperties") {
            self.walk(additional, &format!("{path}/additionalProperties"));
        }
    }

    fn check_items(&mut self, schema: &Value, path: &str) {
        match schema.get("items") {
            None => {}
            Some(Value::Array(_)) => {
                self.report(path, "items", "tuple-form items is not supported")
            }
            Some(items) => self.walk(items, &format!("{path}/items")),
        }
    }

    fn check_branches(&mut self, schema: &Value, path: &str) {
        for keyword in BRANCH_LIST_KEYWORDS {
            match schema.get(keyword) {
                None => {}
                Some(Value::Array(branches)) => {
                    for (i, branch) in branches.iter().enumerate() {
                        self.walk(branch, &format!("{path}/{keyword}/{i}"));
                    }
                }
                Some(_) => {
                    self.report(path, keyword, format!("{keyword} must be an array of schemas"))
                }
            }
        }
        for keyword in BRANCH_KEYWORDS {
            if let Some(branch) = schema.get(keyword) {
                self.walk(branch, &format!("{path}/{keyword}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths(schema: Value) -> Vec<String> {
        schema_issues(&schema)
            .into_inner()
            .into_iter()
            .map(|issue| issue.path)
            .collect()
    }

    #[test]
    fn test_well_formed_schema_is_clean() {
        let schema = json!({
            "type": "object",
            "required": ["name"],
            "minProperties": 1,
            "properties": {
                "name": {"type": "string", "minLength": 1, "pattern": "^[A-Z]"},
                "tags": {"type": "array", "items": {"enum": ["a", "b"]}, "maxItems": 3},
                "score": {"type": ["integer", "null"], "minimum": 0, "multipleOf": 0.5}
            },
            "additionalProperties": false,
            "oneOf": [{"required": ["name"]}, true],
            "if": {"properties": {"name": {"const": "x"}}},
            "then": {"required": ["tags"]}
        });
        assert!(lint_schema(&schema).is_ok());
    }

    #[test]
    fn test_ill_typed_keywords_are_reported() {
        let got = paths(json!({
            "type": 3,
            "minLength": "3",
            "maximum": "10",
            "enum": "a",
            "required": "name",
            "pattern": 7
        }));
        assert_eq!(
            got,
            vec!["#/type", "#/enum", "#/pattern", "#/minLength", "#/maximum", "#/required"]
        );
    }

    #[test]
    fn test_unknown_type_names() {
        let issues = schema_issues(&json!({"type": ["string", "float"]}));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues.issues()[0].message, "unknown type 'float'");
        assert_eq!(paths(json!({"type": []})), vec!["#/type"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let issues = schema_issues(&json!({"properties": {"a": {"pattern": "(open"}}}));
        assert_eq!(issues.issues()[0].path, "#/properties/a/pattern");
        assert_eq!(issues.issues()[0].keyword, "pattern");
        assert!(issues.issues()[0].message.starts_with("invalid regular expression"));
    }

    #[test]
    fn test_multiple_of_must_be_positive() {
        assert_eq!(paths(json!({"multipleOf": 0})), vec!["#/multipleOf"]);
        assert_eq!(paths(json!({"multipleOf": -2})), vec!["#/multipleOf"]);
        assert!(paths(json!({"multipleOf": 0.1})).is_empty());
    }

    #[test]
    fn test_negative_counts_are_reported() {
        assert_eq!(paths(json!({"maxItems": -1})), vec!["#/maxItems"]);
        assert_eq!(paths(json!({"minProperties": 1.5})), vec!["#/minProperties"]);
    }

    #[test]
    fn test_walks_nested_subschemas() {
        let got = paths(json!({
            "items": {"minItems": "x"},
            "additionalProperties": {"type": "bogus"},
            "anyOf": [{}, {"maxLength": -1}],
            "not": {"pattern": "["},
            "else": 5
        }));
        assert_eq!(
            got,
            vec![
                "#/additionalProperties/type",
                "#/items/minItems",
                "#/anyOf/1/maxLength",
                "#/not/pattern",
                "#/else",
            ]
        );
    }

    #[test]
    fn test_combinators_must_be_arrays() {
        assert_eq!(paths(json!({"allOf": {}})), vec!["#/allOf"]);
        assert_eq!(paths(json!({"items": [{}]})), vec!["#/items"]);
    }

    #[test]
    fn test_error_display_lists_issues() {
        let err = lint_schema(&json!({"minLength": "3"})).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert_eq!(
            err.to_string(),
            concat!(
                "schema has 1 malformed keyword(s):\n",
                "  #/minLength: minLength must be a non-negative integer"
            )
        );
    }

    #[test]
    fn test_issues_serialize_as_list() {
        let issues = schema_issues(&json!({"enum": 1}));
        let json = serde_json::to_value(&issues).unwrap();
        assert_eq!(
            json,
            json!([{"path": "#/enum", "keyword": "enum", "message": "enum must be an array"}])
        );
    }
}
