//! # Validation Scope — Dual Path Threading
//!
//! Every recursive call owns a [`Scope`]: the report path (keyword
//! segments, shown to the user) and the data pointer (document segments,
//! used for line lookup), plus the read-only source map.
//!
//! The two paths diverge on purpose. For `{"name": "Ka"}` against
//! `{"properties": {"name": {"minLength": 4}}}` the violation is reported at
//! `#/properties/name/minLength`, but its line is the line of the value at
//! `/name`.
//!
//! Child scopes are built by value, so sibling branches never observe each
//! other's segments.

use jsv_core::{pointer, SourceMap};

use crate::result::ValidationError;

/// Location of the current validation step.
#[derive(Debug, Clone)]
pub struct Scope<'a> {
    report_path: String,
    pointer: String,
    source_map: &'a SourceMap,
}

impl<'a> Scope<'a> {
    /// A root scope. Callers conventionally pass `"#"` and `""`.
    pub fn new(
        report_root: impl Into<String>,
        pointer_root: impl Into<String>,
        source_map: &'a SourceMap,
    ) -> Self {
        Self {
            report_path: report_root.into(),
            pointer: pointer_root.into(),
            source_map,
        }
    }

    /// The report path of this step.
    pub fn report_path(&self) -> &str {
        &self.report_path
    }

    /// The data pointer of this step.
    pub fn pointer(&self) -> &str {
        &self.pointer
    }

    /// The source map shared by every scope of one run.
    pub fn source_map(&self) -> &'a SourceMap {
        self.source_map
    }

    /// Report path of a keyword under this step.
    pub fn keyword_path(&self, keyword: &str) -> String {
        format!("{}/{keyword}", self.report_path)
    }

    /// Scope for `properties/<key>`.
    pub fn property(&self, key: &str) -> Scope<'a> {
        Scope {
            report_path: format!("{}/properties/{key}", self.report_path),
            pointer: pointer::push_key(&self.pointer, key),
            source_map: self.source_map,
        }
    }

    /// Scope for a member validated by the `additionalProperties` schema.
    pub fn additional_property(&self, key: &str) -> Scope<'a> {
        Scope {
            report_path: self.keyword_path("additionalProperties"),
            pointer: pointer::push_key(&self.pointer, key),
            source_map: self.source_map,
        }
    }

    /// Scope for element `index` validated by `items`.
    pub fn item(&self, index: usize) -> Scope<'a> {
        Scope {
            report_path: self.keyword_path("items"),
            pointer: pointer::push_index(&self.pointer, index),
            source_map: self.source_map,
        }
    }

    /// Line of the current value token.
    pub fn value_line(&self) -> u32 {
        self.source_map.lookup_line(&self.pointer, false)
    }

    /// Line of the current key token, or the value line at the root and
    /// for array elements.
    pub fn key_line(&self) -> u32 {
        self.source_map.lookup_line(&self.pointer, true)
    }

    /// Error at this step's own path (structural guards).
    pub fn error(&self, message: impl Into<String>) -> ValidationError {
        ValidationError::new(message, self.report_path.clone(), self.value_line())
    }

    /// Error about the current value, reported at `keyword`.
    pub fn value_error(&self, keyword: &str, message: impl Into<String>) -> ValidationError {
        ValidationError::new(message, self.keyword_path(keyword), self.value_line())
    }

    /// Error about the current member, reported at `keyword`.
    pub fn key_error(&self, keyword: &str, message: impl Into<String>) -> ValidationError {
        ValidationError::new(message, self.keyword_path(keyword), self.key_line())
    }

    /// Error about child member `key`, reported at `keyword` with the line
    /// of the child's key token.
    pub fn member_error(
        &self,
        keyword: &str,
        key: &str,
        message: impl Into<String>,
    ) -> ValidationError {
        let child = pointer::push_key(&self.pointer, key);
        let line = self.source_map.lookup_line(&child, true);
        ValidationError::new(message, self.keyword_path(keyword), line)
    }
}
