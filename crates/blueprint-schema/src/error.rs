//! # Schema Faults
//!
//! Errors in this module describe a broken *schema*, never bad data. Data
//! problems are collected into [`crate::ValidationResult`]; these are
//! returned as `Err` so a caller can tell "fix your input" apart from "fix
//! the schema definition".
//!
//! `location` fields name the position inside the schema tree using the
//! same dotted convention as data paths, with the structural keywords
//! spelled out: `properties.data_sources.items.properties.source_type`.

use thiserror::Error;

/// A structurally invalid schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A `pattern` constraint is not a valid regular expression.
    ///
    /// When raised by [`crate::validate`] rather than by a self-check, the
    /// location is the data path the pattern was being applied to.
    #[error("invalid pattern {pattern:?} at {location}: {source}")]
    InvalidPattern {
        /// Location of the offending node.
        location: String,
        /// The pattern text as authored.
        pattern: String,
        /// Compilation failure reported by the regex engine.
        #[source]
        source: regex::Error,
    },

    /// A lower bound exceeds its upper bound.
    #[error("inverted bounds at {location}: {lower_name} ({lower}) > {upper_name} ({upper})")]
    InvertedBounds {
        /// Location of the offending node in the schema tree.
        location: String,
        /// Keyword of the lower bound (`minLength`, `minItems`, `minimum`).
        lower_name: &'static str,
        /// Lower bound value.
        lower: String,
        /// Keyword of the upper bound.
        upper_name: &'static str,
        /// Upper bound value.
        upper: String,
    },

    /// A numeric bound is NaN or infinite.
    #[error("non-finite {keyword} at {location}")]
    NonFiniteBound {
        /// Location of the offending node in the schema tree.
        location: String,
        /// Keyword of the bound (`minimum` or `maximum`).
        keyword: &'static str,
    },

    /// An `enum` constraint permits nothing.
    #[error("empty enum at {location}")]
    EmptyEnum {
        /// Location of the offending node in the schema tree.
        location: String,
    },

    /// A `oneOf` union has no alternatives.
    #[error("oneOf without alternatives at {location}")]
    EmptyUnion {
        /// Location of the offending node in the schema tree.
        location: String,
    },
}

impl SchemaError {
    /// Location of the fault in the schema tree.
    pub fn location(&self) -> &str {
        match self {
            Self::InvalidPattern { location, .. }
            | Self::InvertedBounds { location, .. }
            | Self::NonFiniteBound { location, .. }
            | Self::EmptyEnum { location }
            | Self::EmptyUnion { location } => location,
        }
    }
}
