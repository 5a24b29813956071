//! Versioned Schema Registry
//!
//! A minimal, immutable registry that maps a logical entity name (e.g.
//! "parcelEvent") to a set of schema versions, compiles each version's AVRO
//! definition into a reusable codec at startup, and resolves a
//! `(entity, version)` pair to its codec on demand.
//!
//! ## Features
//!
//! - **Eager compilation**: every definition is compiled once, at build time;
//!   a single malformed definition fails the whole build
//! - **Immutable storage**: the registry never changes after construction, so
//!   concurrent resolution needs no locking
//! - **Opaque version labels**: "v1" and "v2" are labels, not numbers; no
//!   ordering is inferred between them
//! - **Fingerprinting**: every codec carries a SHA256 fingerprint of its
//!   canonical schema form
//!
//! ## Usage
//!
//! ```no_run
//! use schema_registry::{AvroCompiler, SchemaRegistry, definition};
//!
//! let definitions = definition::builtin::parcel_event();
//! let registry = SchemaRegistry::build(definitions, &AvroCompiler).unwrap();
//! let codec = registry.resolve("parcelEvent", "v1").unwrap();
//! ```

pub mod codec;
pub mod definition;
pub mod error;
pub mod fingerprint;
pub mod registry;

pub mod config;

pub use codec::{AvroCompiler, Codec, CodecCompiler};
pub use definition::SchemaDefinition;
pub use error::{Result, SchemaError};
pub use fingerprint::Fingerprint;
pub use registry::{SchemaRegistry, VersionEntry};
