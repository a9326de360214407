//! # blueprint-catalog — Named Schemas for Planner Modules
//!
//! The validation engine takes a schema tree directly. Callers that think
//! in module names ("validate this as `security`") go through a
//! [`SchemaRegistry`], which maps names to schemas and runs the schema
//! self-check on registration.
//!
//! [`SchemaRegistry::builtin`] preloads one schema per
//! [`blueprint_core::PlannerModule`], defined in [`modules`].

pub mod error;
pub mod modules;
pub mod registry;

pub use error::CatalogError;
pub use modules::{schema_for, ISO_TIMESTAMP_PATTERN, VERSION_PATTERN};
pub use registry::SchemaRegistry;
