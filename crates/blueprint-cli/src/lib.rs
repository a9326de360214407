//! # blueprint-cli — CLI for the Blueprint Planner
//!
//! Provides the `blueprint` command-line interface over the schema catalog.
//!
//! ## Subcommands
//!
//! - `blueprint validate`: Validate module documents against their schemas.
//! - `blueprint modules`: List the planner modules with built-in schemas.
//! - `blueprint schema`: Print a module's schema in JSON-Schema vocabulary.
//!
//! ```bash
//! blueprint validate blueprints/sample/security.yaml
//! blueprint validate draft.yaml --module commander_intent --format json
//! blueprint validate --dir blueprints/sample --deny-warnings
//! blueprint schema data_sources
//! ```
//!
//! ## Exit Codes
//!
//! 0 when every document is valid, 1 when any document fails validation,
//! 2 on operational errors (unreadable file, unknown module, broken schema).

pub mod catalog;
pub mod config;
pub mod input;
pub mod validate;

use std::path::{Path, PathBuf};

/// Exit code for a clean run.
pub const EXIT_OK: u8 = 0;
/// Exit code when at least one document failed validation.
pub const EXIT_INVALID: u8 = 1;
/// Exit code for operational errors.
pub const EXIT_ERROR: u8 = 2;

/// Resolve a path relative to a base directory.
///
/// Absolute paths are returned as-is. A relative path is joined onto `base`
/// when the result exists there, otherwise it is left relative to the
/// current directory.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let joined = base.join(path);
    if joined.exists() {
        joined
    } else {
        path.to_path_buf()
    }
}
