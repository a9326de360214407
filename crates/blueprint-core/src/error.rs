//! # Error Types
//!
//! Workspace-level errors. Crates with richer failure modes (the schema
//! engine, the catalog) define their own `thiserror` enums; this one covers
//! the concerns shared by every caller.

use thiserror::Error;

/// Top-level error type for the blueprint planner.
#[derive(Error, Debug)]
pub enum BlueprintError {
    /// A planner module name did not match any known module.
    #[error("unknown planner module: {0:?}")]
    UnknownModule(String),

    /// A document could not be parsed or rendered.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
