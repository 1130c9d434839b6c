//! # jsv-core — Foundational Types for jsv
//!
//! Everything the validation engine needs from a JSON document that is not
//! validation itself. Every other crate in the workspace depends on
//! `jsv-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One value model.** Documents and schemas are both
//!    `serde_json::Value` (built with `preserve_order`), so object keys keep
//!    their source order throughout.
//!
//! 2. **Kinds are an enum.** [`JsonKind`] is the single definition of the
//!    seven schema type names; `integer` vs `number` and boolean-vs-number
//!    rules live in one place.
//!
//! 3. **Positions travel by pointer.** The engine never sees raw text. It
//!    asks the [`SourceMap`] for the line of a JSON Pointer, choosing the
//!    key token or the value token.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `jsv-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod document;
pub mod error;
pub mod kind;
pub mod pointer;
pub mod source_map;

// Re-export primary types for ergonomic imports.
pub use document::Document;
pub use error::{DocumentError, SourceMapError};
pub use kind::{as_finite_number, compare_numbers, is_integral, json_equal, JsonKind};
pub use source_map::{lookup_line, Entry, Position, SourceMap};
