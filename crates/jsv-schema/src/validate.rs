//! # Validation Orchestrator
//!
//! [`JsonValidator`] is the entry point of the engine. Each step:
//!
//! 1. Runs the type/enum/const checker. If it fails, its errors are the
//!    whole result: nested checks on a value of the wrong kind would only
//!    cascade (`minLength` on a number).
//! 2. Runs exactly one structural checker, chosen by [`StructuralKind`].
//! 3. Runs the combinator checker unconditionally.
//! 4. Returns structural errors followed by combinator errors.
//!
//! ## Recursion
//!
//! The object, array and logic checkers recurse through the [`Validate`]
//! capability they are handed at call time, never through a stored
//! back-reference. Recursion depth is the nesting depth of data plus
//! schema; schemas are assumed finite and acyclic.

use jsv_core::{Document, SourceMap};
use serde_json::Value;

use crate::checks::{
    ArrayValidator, LogicValidator, NumberValidator, ObjectValidator, StringValidator,
    TypeValidator,
};
use crate::kind::StructuralKind;
use crate::result::ValidationResult;
use crate::scope::Scope;

/// Report root used by [`validate_document`].
pub const DEFAULT_REPORT_ROOT: &str = "#";

/// The recursion capability handed to checkers that validate subvalues.
pub trait Validate {
    /// Validate `data` against `schema` at `scope`.
    fn validate(&self, data: &Value, schema: &Value, scope: &Scope<'_>) -> ValidationResult;
}

/// The orchestrator: owns every checker and sequences them.
///
/// `Send + Sync` and stateless; one instance can serve any number of
/// concurrent validations.
#[derive(Debug, Clone, Default)]
pub struct JsonValidator {
    types: TypeValidator,
    objects: ObjectValidator,
    arrays: ArrayValidator,
    strings: StringValidator,
    numbers: NumberValidator,
    logic: LogicValidator,
}

impl JsonValidator {
    /// Assemble an orchestrator from its checkers.
    pub fn new(
        types: TypeValidator,
        objects: ObjectValidator,
        arrays: ArrayValidator,
        strings: StringValidator,
        numbers: NumberValidator,
        logic: LogicValidator,
    ) -> Self {
        Self {
            types,
            objects,
            arrays,
            strings,
            numbers,
            logic,
        }
    }

    /// Validate a value at the conventional roots (`#` and `""`).
    pub fn validate_root(
        &self,
        data: &Value,
        schema: &Value,
        source_map: &SourceMap,
    ) -> ValidationResult {
        self.validate(data, schema, &Scope::new(DEFAULT_REPORT_ROOT, "", source_map))
    }
}

impl Validate for JsonValidator {
    fn validate(&self, data: &Value, schema: &Value, scope: &Scope<'_>) -> ValidationResult {
        let type_result = self.types.validate(data, schema, scope);
        if !type_result.is_valid() {
            tracing::trace!(
                path = scope.report_path(),
                pointer = scope.pointer(),
                errors = type_result.errors().len(),
                "type check failed, skipping nested checks"
            );
            return type_result;
        }

        let mut result = match StructuralKind::resolve(schema, data) {
            StructuralKind::Object => self.objects.validate(self, data, schema, scope),
            StructuralKind::Array => self.arrays.validate(self, data, schema, scope),
            StructuralKind::String => self.strings.validate(data, schema, scope),
            StructuralKind::Number => self.numbers.validate(data, schema, scope),
            StructuralKind::Unstructured => ValidationResult::ok(),
        };
        result.merge(self.logic.validate(self, data, schema, scope));
        result
    }
}

/// Validate `data` against `schema`, rooting report paths at `report_root`
/// and data pointers at `pointer_root`.
pub fn validate(
    data: &Value,
    schema: &Value,
    report_root: &str,
    pointer_root: &str,
    source_map: &SourceMap,
) -> ValidationResult {
    let scope = Scope::new(report_root, pointer_root, source_map);
    let result = JsonValidator::default().validate(data, schema, &scope);
    tracing::debug!(
        valid = result.is_valid(),
        errors = result.errors().len(),
        "validation finished"
    );
    result
}

/// Validate a loaded document at the conventional roots.
pub fn validate_document(document: &Document, schema: &Value) -> ValidationResult {
    validate(
        document.value(),
        schema,
        DEFAULT_REPORT_ROOT,
        "",
        document.source_map(),
    )
}
