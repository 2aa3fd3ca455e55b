use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::changeset::{load_schema, SchemaSource, TableSchema, IDENTITY_COLUMN};
use crate::config::{load_config_file, resolve_config_path, ConfigFile, GeneratorConfig};
use crate::generator::{generate_project, EmitMode, FieldDef, GenerateOptions, GenerationReport};

/// Command-line interface for crudforge
///
/// Generates a Spring Boot CRUD layer from a Liquibase `createTable` changeset.
#[derive(Parser, Debug)]
#[command(name = "crudforge", version)]
#[command(about = "Generate a Spring Boot CRUD layer from a Liquibase changeset", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the seven CRUD source files for the table in a changeset
    Generate {
        /// Changeset XML file; `-` or omitted reads standard input
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Namespace of the generated code (e.g. com.example)
        #[arg(short = 'p', long)]
        base_package: Option<String>,

        /// Root directory the namespace tree is written under (e.g. src/main/java)
        #[arg(short = 'o', long)]
        base_path: Option<PathBuf>,

        /// TOML file with base_package / base_path
        /// If not provided, crudforge.toml next to the schema is used when present
        #[arg(short, long, env = "CRUDFORGE_CONFIG")]
        config: Option<PathBuf>,

        /// Perform a dry run: list the files that would be written without writing them
        #[arg(long, default_value_t = false)]
        dry_run: bool,

        /// Write each file in place as it is rendered instead of staging all of them first
        #[arg(long, default_value_t = false)]
        direct: bool,
    },
    /// Print the table, fields and types extracted from a changeset
    Inspect {
        /// Changeset XML file; `-` or omitted reads standard input
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = InspectFormat::Text)]
        format: InspectFormat,
    },
}

/// Output format of `inspect`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InspectFormat {
    Text,
    Json,
}

/// Run the parsed command
///
/// # Errors
///
/// Returns configuration, parse, render and I/O failures with context attached.
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            schema,
            base_package,
            base_path,
            config,
            dry_run,
            direct,
        } => {
            let source = SchemaSource::from_arg(schema.as_deref());
            let flags = ConfigFile {
                base_package,
                base_path,
            };
            let config = resolve_generator_config(flags, config.as_deref(), source.path())?;
            let options = GenerateOptions {
                mode: if direct {
                    EmitMode::Direct
                } else {
                    EmitMode::Staged
                },
                dry_run,
            };
            let report = generate_project(&source, &config, &options)
                .with_context(|| format!("Failed to generate from {source}"))?;
            print_report(&report);
            Ok(())
        }
        Commands::Inspect { schema, format } => {
            let source = SchemaSource::from_arg(schema.as_deref());
            let schema =
                load_schema(&source).with_context(|| format!("Failed to inspect {source}"))?;
            println!("{}", render_inspect(&schema, format)?);
            Ok(())
        }
    }
}

/// Merge flags with the config file and validate the result
///
/// Flags win. The file is `explicit_config` when given (it must exist), else a
/// `crudforge.toml` beside the schema.
pub fn resolve_generator_config(
    flags: ConfigFile,
    explicit_config: Option<&Path>,
    schema_path: Option<&Path>,
) -> anyhow::Result<GeneratorConfig> {
    if let Some(path) = explicit_config {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
    }
    let file = match resolve_config_path(explicit_config, schema_path) {
        Some(path) => {
            debug!(path = %path.display(), "using config file");
            load_config_file(&path)?.unwrap_or_default()
        }
        None => ConfigFile::default(),
    };
    Ok(flags.or(file).resolve()?)
}

fn print_report(report: &GenerationReport) {
    for artifact in &report.artifacts {
        if report.written {
            println!(
                "✅ Generated {} → {}",
                artifact.kind,
                artifact.relative_path.display()
            );
        } else {
            println!(
                "🔍 Would generate {} → {}",
                artifact.kind,
                artifact.relative_path.display()
            );
        }
    }
}

#[derive(Serialize)]
struct IdentityView {
    name: &'static str,
    java_type: &'static str,
}

#[derive(Serialize)]
struct InspectView<'a> {
    table: &'a str,
    entity: &'a str,
    identity: IdentityView,
    fields: Vec<FieldDef>,
    fallback_columns: Vec<&'a str>,
}

impl<'a> InspectView<'a> {
    fn new(schema: &'a TableSchema) -> Self {
        InspectView {
            table: schema.raw_table_name(),
            entity: schema.entity_name(),
            identity: IdentityView {
                name: IDENTITY_COLUMN,
                java_type: "Long",
            },
            fields: schema.columns().iter().map(FieldDef::from_column).collect(),
            fallback_columns: schema
                .fallback_columns()
                .map(|c| c.raw_name.as_str())
                .collect(),
        }
    }
}

/// Format an extracted schema for `inspect`
pub fn render_inspect(schema: &TableSchema, format: InspectFormat) -> anyhow::Result<String> {
    let view = InspectView::new(schema);
    match format {
        InspectFormat::Json => {
            serde_json::to_string_pretty(&view).context("Failed to serialize schema")
        }
        InspectFormat::Text => {
            let mut out = format!("📦 Table: {} → entity {}\n", view.table, view.entity);
            out.push_str(&format!(
                "   {} : {} (identity, generated)\n",
                view.identity.name, view.identity.java_type
            ));
            for field in &view.fields {
                out.push_str(&format!(
                    "   {} : {} ({}, column {})\n",
                    field.name, field.java_type, field.semantic_type, field.column_name
                ));
            }
            if !view.fallback_columns.is_empty() {
                out.push_str(&format!(
                    "⚠️  Unmapped storage types defaulted to text: {}\n",
                    view.fallback_columns.join(", ")
                ));
            }
            Ok(out.trim_end().to_string())
        }
    }
}
