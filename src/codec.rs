//! Codec compilation
//!
//! The registry treats the codec compiler as a black box behind
//! [`CodecCompiler`]; any serialization-library binding that can turn a
//! [`SchemaDefinition`] into a [`Codec`] satisfies it. The default binding is
//! [`AvroCompiler`], backed by `apache-avro`.

use std::io::Cursor;

use apache_avro::types::Value;
use apache_avro::{from_avro_datum, to_avro_datum, Schema};

use crate::definition::SchemaDefinition;
use crate::error::{Result, SchemaError};
use crate::fingerprint::Fingerprint;

/// A compiled, reusable encode/decode artifact for one schema version.
///
/// Immutable once constructed; shared read-only by every caller that
/// resolves it.
#[derive(Debug, Clone)]
pub struct Codec {
    entity: String,
    version: String,
    schema: Schema,
    canonical: String,
    fingerprint: Fingerprint,
}

impl Codec {
    /// Entity this codec was compiled for
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Version label this codec was compiled for
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The parsed AVRO schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Parsing Canonical Form of the schema
    pub fn canonical_form(&self) -> &str {
        &self.canonical
    }

    /// SHA256 fingerprint of the canonical form
    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// Number of fields, for record schemas
    pub fn field_count(&self) -> Option<usize> {
        match &self.schema {
            Schema::Record(record) => Some(record.fields.len()),
            _ => None,
        }
    }

    /// Field names in schema order, for record schemas
    pub fn field_names(&self) -> Vec<&str> {
        match &self.schema {
            Schema::Record(record) => record.fields.iter().map(|f| f.name.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// Encode a value to AVRO binary datum form
    pub fn encode(&self, value: Value) -> Result<Vec<u8>> {
        to_avro_datum(&self.schema, value).map_err(SchemaError::Encode)
    }

    /// Decode an AVRO binary datum produced by [`Codec::encode`]
    pub fn decode(&self, bytes: &[u8]) -> Result<Value> {
        from_avro_datum(&self.schema, &mut Cursor::new(bytes), None).map_err(SchemaError::Decode)
    }
}

/// The external codec-compiler collaborator.
///
/// `compile` either yields a usable codec or a typed error naming the
/// offending definition; the registry build consumes nothing else.
pub trait CodecCompiler {
    fn compile(&self, definition: &SchemaDefinition) -> Result<Codec>;
}

/// Codec compiler backed by `apache-avro`
pub struct AvroCompiler;

impl CodecCompiler for AvroCompiler {
    fn compile(&self, definition: &SchemaDefinition) -> Result<Codec> {
        if definition.is_empty() {
            return Err(SchemaError::EmptyDefinition {
                entity: definition.entity.clone(),
                version: definition.version.clone(),
            });
        }

        let schema =
            Schema::parse_str(&definition.raw()).map_err(|e| SchemaError::Compilation {
                entity: definition.entity.clone(),
                version: definition.version.clone(),
                source: e,
            })?;

        let canonical = schema.canonical_form();
        let fingerprint = Fingerprint::of(&canonical);

        Ok(Codec {
            entity: definition.entity.clone(),
            version: definition.version.clone(),
            schema,
            canonical,
            fingerprint,
        })
    }
}
