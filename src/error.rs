//! Error types for the schema registry

use thiserror::Error;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Schema registry errors
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("schema compilation failed for {entity} {version}: {source}")]
    Compilation {
        entity: String,
        version: String,
        #[source]
        source: apache_avro::Error,
    },

    #[error("unknown entity: {entity}")]
    UnknownEntity { entity: String },

    #[error("unknown version {version} for entity {entity}")]
    UnknownVersion { entity: String, version: String },

    #[error("duplicate version {version} for entity {entity}")]
    DuplicateVersion { entity: String, version: String },

    #[error("empty schema definition for {entity} {version}")]
    EmptyDefinition { entity: String, version: String },

    #[error("encode failed: {0}")]
    Encode(#[source] apache_avro::Error),

    #[error("decode failed: {0}")]
    Decode(#[source] apache_avro::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
