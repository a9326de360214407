use blueprint_schema::SchemaError;
use thiserror::Error;

/// Failure to register or look up a named schema.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No schema is registered under this name.
    #[error("no schema registered as {0:?}")]
    UnknownSchema(String),

    /// A schema is already registered under this name.
    #[error("schema {0:?} is already registered")]
    DuplicateSchema(String),

    /// The schema itself is malformed.
    #[error("schema {name:?} is malformed: {source}")]
    Schema {
        /// Registry name of the schema.
        name: String,
        /// The underlying fault.
        #[source]
        source: SchemaError,
    },
}
