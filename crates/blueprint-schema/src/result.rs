//! # Validation Results
//!
//! A [`ValidationResult`] carries every error and warning produced by one
//! validation pass. Validity is derived, never stored: a result is valid
//! exactly when it holds no errors.

use std::fmt;

use blueprint_core::display_path;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Errors and advisory warnings collected by a validation pass.
///
/// Each message is prefixed with the field path it refers to, e.g.
/// `data_sources[2].source_type: Must be one of: API, FTP`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    /// An empty, valid result.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no errors were recorded. Warnings do not count.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error messages in discovery order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Warning messages in discovery order.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Record an error at `path`.
    pub fn push_error(&mut self, path: &str, message: impl fmt::Display) {
        self.errors.push(format!("{}: {message}", display_path(path)));
    }

    /// Record a warning at `path`.
    pub fn push_warning(&mut self, path: &str, message: impl fmt::Display) {
        self.warnings.push(format!("{}: {message}", display_path(path)));
    }

    /// Append another result's messages after this one's.
    ///
    /// Messages are concatenated as-is; duplicates are kept.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 3)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.serialize_field("warnings", &self.warnings)?;
        state.end()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "valid")?;
        } else {
            write!(f, "invalid ({} error(s))", self.errors.len())?;
        }
        for e in &self.errors {
            write!(f, "\n  error: {e}")?;
        }
        for w in &self.warnings {
            write!(f, "\n  warning: {w}")?;
        }
        Ok(())
    }
}
