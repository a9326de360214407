//! # blueprint-schema — Declarative Schema Validation
//!
//! Validates arbitrary JSON values against in-memory schema trees and
//! reports every violation found, each prefixed with its field path.
//!
//! ## Model (`node`)
//!
//! [`SchemaNode`] is a closed sum type over the node kinds: object, array,
//! string, number, boolean, union (`oneOf`), and the unconstrained node.
//! Constraints exist only on the variant they apply to, so a `pattern` on a
//! number node cannot be written.
//!
//! ## Validation (`validate`)
//!
//! [`validate`] walks the value and the schema together and returns a
//! [`ValidationResult`]. Data problems are reported in-band as errors;
//! unknown object properties are reported as warnings and never affect
//! validity. Only a broken schema (an uncompilable `pattern`) yields `Err`.
//!
//! ## Self-check (`check`)
//!
//! [`SchemaNode::check`] rejects authoring faults (bad patterns, inverted
//! bounds, empty enums and unions) before a schema is put into service.
//!
//! ## Crate Policy
//!
//! - Depends only on `blueprint-core` internally.
//! - Pure and synchronous: no I/O, no global state, no caching between calls.

pub mod check;
pub mod error;
pub mod node;
pub mod result;
pub mod validate;

pub use error::SchemaError;
pub use node::{ArraySchema, NumberSchema, ObjectSchema, SchemaNode, StringSchema};
pub use result::ValidationResult;
pub use validate::{validate, value_kind};
