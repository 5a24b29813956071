//! Configuration for hosting processes
//!
//! The core library takes definitions as plain values; this module is for
//! hosts (such as the bundled CLI) that want their definition source and
//! output behavior configured externally.
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (schema-registry.toml)
//! - Environment variables (SCHEMA_REGISTRY__*)
//!
//! ## Example config file (schema-registry.toml):
//! ```toml
//! [definitions]
//! dir = "./schemas"
//! include_builtin = true
//!
//! [output]
//! format = "pretty"
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for a registry host
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegistryConfig {
    /// Where schema definitions come from
    #[serde(default)]
    pub definitions: DefinitionsConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Definition source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionsConfig {
    /// Directory of `{entity}/{version}.avsc` files (optional)
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Whether the built-in definitions are registered as well
    #[serde(default = "default_true")]
    pub include_builtin: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// JSON output format for `show`
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format for schema JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
}

fn default_true() -> bool {
    true
}

impl Default for DefinitionsConfig {
    fn default() -> Self {
        Self {
            dir: None,
            include_builtin: true,
        }
    }
}

impl RegistryConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_locations = ["schema-registry.toml", ".schema-registry.toml"];
        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // XDG config directory
        if let Some(dirs) = directories::ProjectDirs::from("dev", "strokan", "schema-registry") {
            let xdg_config = dirs.config_dir().join("schema-registry.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("SCHEMA_REGISTRY")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}
