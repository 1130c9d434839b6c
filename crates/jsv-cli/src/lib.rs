//! # jsv-cli — Command-Line Interface for jsv
//!
//! ## Subcommands
//!
//! - `jsv validate`: validate a document file against a schema file.
//! - `jsv lint`: report malformed keywords in a schema file.
//!
//! ```bash
//! jsv validate --schema person.schema.json person.json
//! jsv validate --schema person.schema.json person.json --format json --root '$'
//! jsv lint person.schema.json
//! ```
//!
//! Exit codes: 0 success, 1 the input failed the check, 2 operational error
//! (unreadable file, unparseable JSON, malformed schema).

pub mod lint;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use jsv_core::Document;

/// Read and parse a JSON file, keeping its source map.
pub fn load_document(path: &Path) -> Result<Document> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Document::parse(&text).with_context(|| format!("failed to parse {}", path.display()))
}
