//! Schema Registry
//!
//! Maps entity names to their compiled schema versions. Built eagerly and
//! exactly once from a set of [`SchemaDefinition`]s; immutable afterwards, so
//! concurrent resolution requires no synchronization.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::codec::{Codec, CodecCompiler};
use crate::definition::SchemaDefinition;
use crate::error::{Result, SchemaError};

/// One compiled schema version of an entity
#[derive(Debug, Clone)]
pub struct VersionEntry {
    /// Opaque version label ("v1", "v2", ...)
    pub version: String,
    /// The compiled codec for this version
    pub codec: Codec,
    /// When this entry was built
    pub created_at: DateTime<Utc>,
}

/// Immutable store of compiled schema versions keyed by entity name
#[derive(Debug)]
pub struct SchemaRegistry {
    /// Map from entity name to its versions, in registration order
    entities: HashMap<String, Vec<VersionEntry>>,
}

impl SchemaRegistry {
    /// Build a registry from a set of definitions.
    ///
    /// All-or-nothing: every definition is compiled through `compiler`, and
    /// the first failure aborts the whole build with an error naming the
    /// offending `(entity, version)`. A duplicate `(entity, version)` pair in
    /// the input is also a build error.
    pub fn build<C: CodecCompiler>(
        definitions: impl IntoIterator<Item = SchemaDefinition>,
        compiler: &C,
    ) -> Result<Self> {
        let mut entities: HashMap<String, Vec<VersionEntry>> = HashMap::new();

        for definition in definitions {
            let versions = entities.entry(definition.entity.clone()).or_default();
            if versions.iter().any(|e| e.version == definition.version) {
                return Err(SchemaError::DuplicateVersion {
                    entity: definition.entity,
                    version: definition.version,
                });
            }

            let codec = compiler.compile(&definition)?;
            debug!(
                entity = %definition.entity,
                version = %definition.version,
                fingerprint = %codec.fingerprint(),
                "compiled schema"
            );

            versions.push(VersionEntry {
                version: definition.version,
                codec,
                created_at: Utc::now(),
            });
        }

        let registry = Self { entities };
        info!(
            entities = registry.entity_count(),
            "schema registry built"
        );
        Ok(registry)
    }

    /// Resolve an `(entity, version)` pair to its codec.
    ///
    /// Pure with respect to the registry: the same inputs always yield the
    /// same codec reference or the same error.
    pub fn resolve(&self, entity: &str, version: &str) -> Result<&Codec> {
        self.entry(entity, version).map(|e| &e.codec)
    }

    /// Resolve to the full version entry
    pub fn entry(&self, entity: &str, version: &str) -> Result<&VersionEntry> {
        let versions = self
            .entities
            .get(entity)
            .ok_or_else(|| SchemaError::UnknownEntity {
                entity: entity.to_string(),
            })?;

        versions
            .iter()
            .find(|e| e.version == version)
            .ok_or_else(|| SchemaError::UnknownVersion {
                entity: entity.to_string(),
                version: version.to_string(),
            })
    }

    /// Whether an `(entity, version)` pair is registered
    pub fn contains(&self, entity: &str, version: &str) -> bool {
        self.entry(entity, version).is_ok()
    }

    /// All registered entity names (sorted for determinism)
    pub fn entities(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entities.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Version labels for an entity, in registration order
    pub fn versions(&self, entity: &str) -> Result<Vec<&str>> {
        self.entities
            .get(entity)
            .map(|versions| versions.iter().map(|e| e.version.as_str()).collect())
            .ok_or_else(|| SchemaError::UnknownEntity {
                entity: entity.to_string(),
            })
    }

    /// Number of distinct entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Number of versions registered for an entity (0 if unknown)
    pub fn version_count(&self, entity: &str) -> usize {
        self.entities.get(entity).map_or(0, Vec::len)
    }
}
