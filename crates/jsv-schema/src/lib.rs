//! # jsv-schema — Validation Engine
//!
//! Walks a JSON document and a JSON-Schema-like schema in lockstep and
//! reports every violation with two coordinates: the keyword path inside
//! the schema (`#/properties/name/minLength`) and the source line of the
//! offending value in the original document text.
//!
//! ## Validation (`validate`)
//!
//! - [`validate()`] / [`validate_document`]: the entry points.
//! - [`JsonValidator`]: the orchestrator. Runs the type checker, then one
//!   structural checker chosen by [`StructuralKind`], then the combinators.
//! - [`checks`]: one checker per keyword family.
//!
//! Validation outcomes are data. The engine returns a [`ValidationResult`]
//! for every `(data, schema)` pair and never panics on a malformed schema.
//!
//! ## Lint (`lint`)
//!
//! [`lint_schema`] reports keyword values the engine would silently skip
//! (`minLength: "3"`, an uncompilable `pattern`). Front ends run it before
//! validating.
//!
//! ## Crate Policy
//!
//! - Depends only on `jsv-core` internally.
//! - No I/O, no global state. Every call is independent.
//! - Supported keywords: `type`, `enum`, `const`, `minLength`, `maxLength`,
//!   `pattern`, `minimum`, `maximum`, `exclusiveMinimum`, `exclusiveMaximum`,
//!   `multipleOf`, `minItems`, `maxItems`, `items`, `minProperties`,
//!   `maxProperties`, `required`, `properties`, `additionalProperties`,
//!   `allOf`, `anyOf`, `oneOf`, `not`, `if`, `then`, `else`. Anything else
//!   is ignored.

pub mod checks;
pub mod kind;
pub mod lint;
pub mod result;
pub mod scope;
pub mod validate;

pub use checks::{
    ArrayValidator, LogicValidator, NumberValidator, ObjectValidator, StringValidator,
    TypeValidator,
};
pub use kind::StructuralKind;
pub use lint::{lint_schema, schema_issues, SchemaError, SchemaIssue, SchemaIssues};
pub use result::{ValidationError, ValidationResult};
pub use scope::Scope;
pub use validate::{validate, validate_document, JsonValidator, Validate, DEFAULT_REPORT_ROOT};
