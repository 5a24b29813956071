//! Schema Registry CLI
//!
//! Builds the registry from configured definitions and answers lookup
//! queries against it.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use schema_registry::config::{OutputFormat, RegistryConfig};
use schema_registry::{definition, AvroCompiler, SchemaDefinition, SchemaRegistry};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schema-registry")]
#[command(about = "Versioned schema registry with Avro codec resolution")]
struct Cli {
    /// Path to a config file (defaults to schema-registry.toml if present)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Where to write the config
        #[arg(default_value = "schema-registry.toml")]
        path: String,
    },

    /// List all entities and their versions
    List,

    /// List the versions of one entity
    Versions {
        /// Entity name
        entity: String,
    },

    /// Show the canonical schema for a version
    Show {
        /// Entity name
        entity: String,
        /// Version label (e.g. "v1")
        version: String,
    },

    /// Compile every definition and report the result
    Check,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn load_definitions(config: &RegistryConfig) -> Result<Vec<SchemaDefinition>> {
    let mut definitions = Vec::new();
    if config.definitions.include_builtin {
        definitions.extend(definition::builtin::parcel_event());
    }
    if let Some(dir) = &config.definitions.dir {
        let loaded = definition::load_dir(dir)
            .with_context(|| format!("loading definitions from {}", dir.display()))?;
        definitions.extend(loaded);
    }
    if definitions.is_empty() {
        return Err(anyhow!(
            "no definitions configured (builtin disabled and no definitions dir)"
        ));
    }
    Ok(definitions)
}

fn run(cli: Cli) -> Result<()> {
    if let Commands::Init { path } = &cli.command {
        RegistryConfig::default().save(path)?;
        println!("✅ Wrote default config to {path}");
        return Ok(());
    }

    let config = RegistryConfig::load_from(cli.config.as_deref())?;
    let definitions = load_definitions(&config)?;

    match cli.command {
        Commands::Init { .. } => unreachable!("handled above"),

        Commands::List => {
            let registry = SchemaRegistry::build(definitions, &AvroCompiler)?;
            println!("📚 Registered entities:");
            for entity in registry.entities() {
                let versions = registry.versions(entity)?;
                println!("  {} ({})", entity, versions.join(", "));
            }
            Ok(())
        }

        Commands::Versions { entity } => {
            let registry = SchemaRegistry::build(definitions, &AvroCompiler)?;
            for label in registry.versions(&entity)? {
                let entry = registry.entry(&entity, label)?;
                println!(
                    "  {} {} {}",
                    entry.version,
                    entry.created_at.format("%Y-%m-%d"),
                    entry.codec.fingerprint()
                );
            }
            Ok(())
        }

        Commands::Show { entity, version } => {
            let registry = SchemaRegistry::build(definitions, &AvroCompiler)?;
            let codec = registry.resolve(&entity, &version)?;

            let value: serde_json::Value = serde_json::from_str(codec.canonical_form())?;
            let rendered = match config.output.format {
                OutputFormat::Pretty => serde_json::to_string_pretty(&value)?,
                OutputFormat::Compact => serde_json::to_string(&value)?,
            };
            println!("{rendered}");
            Ok(())
        }

        Commands::Check => {
            let total = definitions.len();
            match SchemaRegistry::build(definitions, &AvroCompiler) {
                Ok(registry) => {
                    println!(
                        "✅ {} definitions compiled across {} entities",
                        total,
                        registry.entity_count()
                    );
                    Ok(())
                }
                Err(e) => Err(e.into()),
            }
        }
    }
}
