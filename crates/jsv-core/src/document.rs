//! # Documents — Parsed Value Plus Source Map
//!
//! A [`Document`] pairs the `serde_json` value tree with the [`SourceMap`]
//! of the text it came from. Both are built once per input text and are
//! read-only afterwards.

use serde_json::Value;

use crate::error::DocumentError;
use crate::source_map::SourceMap;

/// A JSON document loaded from text.
#[derive(Debug, Clone)]
pub struct Document {
    value: Value,
    source_map: SourceMap,
}

impl Document {
    /// Parse `text` and index its source positions.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Parse` if the text is not valid JSON, or
    /// `DocumentError::SourceMap` if the scanner rejects it.
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(text)?;
        let source_map = SourceMap::from_text(text)?;
        tracing::debug!(values = source_map.len(), "loaded document");
        Ok(Self { value, source_map })
    }

    /// Wrap an in-memory value that has no source text. Every line
    /// lookup resolves to 0.
    pub fn from_value(value: Value) -> Self {
        Self {
            value,
            source_map: SourceMap::new(),
        }
    }

    /// The parsed value tree.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The source map for the original text.
    pub fn source_map(&self) -> &SourceMap {
        &self.source_map
    }

    /// Split into value and source map.
    pub fn into_parts(self) -> (Value, SourceMap) {
        (self.value, self.source_map)
    }
}
