//! Schema definition sources
//!
//! A [`SchemaDefinition`] is the raw, immutable description of one record
//! shape for one version of an entity. Definitions are authored as AVRO
//! record schemas in JSON form; they are inputs to the registry build and are
//! never mutated afterwards.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A raw schema definition for one `(entity, version)` pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDefinition {
    /// Logical entity name (e.g. "parcelEvent")
    pub entity: String,
    /// Opaque version label (e.g. "v1"); unique within the entity
    pub version: String,
    /// The AVRO schema as a JSON value
    pub content: serde_json::Value,
}

impl SchemaDefinition {
    /// Create a definition from a JSON value
    pub fn new(
        entity: impl Into<String>,
        version: impl Into<String>,
        content: serde_json::Value,
    ) -> Self {
        Self {
            entity: entity.into(),
            version: version.into(),
            content,
        }
    }

    /// Create a definition by parsing a JSON string
    pub fn from_json_str(
        entity: impl Into<String>,
        version: impl Into<String>,
        json: &str,
    ) -> Result<Self> {
        let content = serde_json::from_str(json)?;
        Ok(Self::new(entity, version, content))
    }

    /// The definition serialized for the codec compiler
    pub fn raw(&self) -> String {
        self.content.to_string()
    }

    /// Whether the definition body is empty (null or blank)
    pub fn is_empty(&self) -> bool {
        match &self.content {
            serde_json::Value::Null => true,
            serde_json::Value::String(s) => s.trim().is_empty(),
            serde_json::Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }
}

/// Load definitions from a directory laid out as `{entity}/{version}.avsc`.
///
/// Non-directories at the top level and files without the `.avsc` extension
/// are skipped. The version label is the file stem, taken verbatim.
pub fn load_dir(path: impl AsRef<Path>) -> Result<Vec<SchemaDefinition>> {
    let mut definitions = Vec::new();

    for entity_dir in fs::read_dir(path.as_ref())? {
        let entity_dir = entity_dir?;
        let entity_path = entity_dir.path();
        if !entity_path.is_dir() {
            continue;
        }
        let entity = entity_dir.file_name().to_string_lossy().into_owned();

        let mut files: Vec<_> = fs::read_dir(&entity_path)?
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "avsc"))
            .collect();
        // Deterministic input order regardless of readdir order.
        files.sort();

        for file in files {
            let version = file
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let content: serde_json::Value = serde_json::from_str(&fs::read_to_string(&file)?)?;
            definitions.push(SchemaDefinition::new(entity.clone(), version, content));
        }
    }

    Ok(definitions)
}

/// Built-in definitions carried by the crate
pub mod builtin {
    use super::SchemaDefinition;
    use serde_json::json;

    /// The two known versions of the "parcelEvent" entity.
    ///
    /// v1 is a four-field record; v2 adds a numeric `Weight` field.
    pub fn parcel_event() -> Vec<SchemaDefinition> {
        vec![
            SchemaDefinition::new(
                "parcelEvent",
                "v1",
                json!({
                    "type": "record",
                    "name": "ParcelEventV1",
                    "fields": [
                        {"name": "ID", "type": "string"},
                        {"name": "ParcelNumber", "type": "string"},
                        {"name": "CreatedAt", "type": "string"},
                        {"name": "UpdatedAt", "type": "string"}
                    ]
                }),
            ),
            SchemaDefinition::new(
                "parcelEvent",
                "v2",
                json!({
                    "type": "record",
                    "name": "ParcelEventV2",
                    "fields": [
                        {"name": "ID", "type": "string"},
                        {"name": "ParcelNumber", "type": "string"},
                        {"name": "CreatedAt", "type": "string"},
                        {"name": "UpdatedAt", "type": "string"},
                        {"name": "Weight", "type": "double"}
                    ]
                }),
            ),
        ]
    }
}
