//! # Validation Report Types
//!
//! [`ValidationResult`] is the entire output contract of the engine:
//!
//! ```json
//! {"valid": false, "errors": [{"message": "...", "path": "#/minLength", "line": 3}]}
//! ```
//!
//! `valid` is derived from the error list and cannot be set independently,
//! so `valid == errors.is_empty()` holds for every value of the type.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// A single violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Human-readable description.
    pub message: String,
    /// Report path: root token followed by keyword segments.
    pub path: String,
    /// 1-based source line, or 0 when unknown.
    pub line: u32,
    /// Branch errors collected by `anyOf`/`oneOf` failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationError>>,
}

impl ValidationError {
    /// Create an error without details.
    pub fn new(message: impl Into<String>, path: impl Into<String>, line: u32) -> Self {
        Self {
            message: message.into(),
            path: path.into(),
            line,
            details: None,
        }
    }

    /// Attach branch errors.
    pub fn with_details(mut self, details: Vec<ValidationError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (line {}): {}", self.path, self.line, self.message)
    }
}

/// Outcome of one validation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// A passing result.
    pub fn ok() -> Self {
        Self::default()
    }

    /// A result carrying `errors`; valid iff the list is empty.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// True iff there are no errors.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The errors, in report order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Append another result's errors after this one's.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    /// Top-level error messages, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }
}

impl From<Vec<ValidationError>> for ValidationResult {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::from_errors(errors)
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.end()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "valid");
        }
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {e}")?;
        }
        Ok(())
    }
}
