//! # blueprint-core — Foundational Types for the Blueprint Planner
//!
//! Leaf crate of the workspace. Defines the planner module taxonomy, the
//! dotted/bracketed field-path convention used by every validation message,
//! and the top-level error type.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `blueprint-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod module;
pub mod path;

// Re-export primary types for ergonomic imports.
pub use error::BlueprintError;
pub use module::{PlannerModule, PLANNER_MODULE_COUNT};
pub use path::{display_path, join_index, join_key, ROOT_PATH_LABEL};
