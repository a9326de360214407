//! # Schema Registry
//!
//! Maps names to schema trees. Every schema is self-checked on the way in,
//! so a registry only ever holds well-formed schemas and lookups never fail
//! for structural reasons.
//!
//! The registry is owned by its caller. Nothing here is global.

use std::collections::BTreeMap;

use blueprint_core::PlannerModule;
use blueprint_schema::{validate, SchemaNode, ValidationResult};
use serde_json::Value;

use crate::error::CatalogError;
use crate::modules::schema_for;

/// Named schemas, iterated in name order.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, SchemaNode>,
}

impl SchemaRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the schema of every planner module, keyed by
    /// [`PlannerModule::as_str`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Schema`] if a built-in schema fails its
    /// self-check.
    pub fn builtin() -> Result<Self, CatalogError> {
        let mut registry = Self::new();
        for module in PlannerModule::all() {
            registry.register(module.as_str(), schema_for(*module))?;
        }
        tracing::debug!(schema_count = registry.len(), "loaded built-in planner schemas");
        Ok(registry)
    }

    /// Register `schema` under `name` after checking it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateSchema`] if the name is taken and
    /// [`CatalogError::Schema`] if the schema is malformed. The registry is
    /// unchanged on error.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        schema: SchemaNode,
    ) -> Result<(), CatalogError> {
        let name = name.into();
        if self.schemas.contains_key(&name) {
            return Err(CatalogError::DuplicateSchema(name));
        }
        schema
            .check()
            .map_err(|source| CatalogError::Schema {
                name: name.clone(),
                source,
            })?;
        self.schemas.insert(name, schema);
        Ok(())
    }

    /// Look up a schema by name.
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.schemas.get(name)
    }

    /// Whether a schema is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.schemas.keys().map(String::as_str).collect()
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Validate `value` against the schema registered as `name`.
    ///
    /// Messages are rooted at the document itself (empty path).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownSchema`] if `name` is not registered.
    pub fn validate(&self, name: &str, value: &Value) -> Result<ValidationResult, CatalogError> {
        let schema = self
            .get(name)
            .ok_or_else(|| CatalogError::UnknownSchema(name.to_string()))?;

        let result = validate(value, schema, "").map_err(|source| CatalogError::Schema {
            name: name.to_string(),
            source,
        })?;

        tracing::debug!(
            schema = name,
            valid = result.is_valid(),
            errors = result.errors().len(),
            warnings = result.warnings().len(),
            "validated document"
        );
        Ok(result)
    }

    /// Validate a planner module's document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownSchema`] if the module's schema was
    /// not registered.
    pub fn validate_module(
        &self,
        module: PlannerModule,
        value: &Value,
    ) -> Result<ValidationResult, CatalogError> {
        self.validate(module.as_str(), value)
    }
}
