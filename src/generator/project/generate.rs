use std::path::{Component, PathBuf};

use tracing::info;

use super::emit::{write_artifacts, EmitMode};
use crate::changeset::{load_schema, SchemaSource, TableSchema};
use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::generator::templates::{render_artifact, ArtifactContext, ArtifactKind};

/// One generated source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSpec {
    pub kind: ArtifactKind,
    /// Target path: `base_path/<package dirs>/<layer>/<Type>.java`
    pub relative_path: PathBuf,
    pub content: String,
}

/// Options for [`generate_project`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// How artifacts are committed to disk
    pub mode: EmitMode,
    /// Render everything but write nothing
    pub dry_run: bool,
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub schema: TableSchema,
    pub artifacts: Vec<ArtifactSpec>,
    /// False for dry runs
    pub written: bool,
}

/// Target path of an artifact
///
/// `base_path/<base_package as dirs>/<layer>/<EntityName><Suffix>.java`
pub fn artifact_path(config: &GeneratorConfig, kind: ArtifactKind, entity_name: &str) -> PathBuf {
    let mut path = config.base_path.join(config.package_dir());
    path.extend(kind.layer().split('/'));
    path.push(format!("{}.java", kind.type_name(entity_name)));
    path
}

/// Render all seven artifacts for a schema
///
/// Pure: the same schema and config always produce the same paths and
/// byte-identical contents, in [`ArtifactKind::ALL`] order.
///
/// # Errors
///
/// - [`GeneratorError::SchemaParse`] if a table or column name is not a valid
///   Java identifier, or a target path would leave `base_path`
/// - [`GeneratorError::Render`] if a template fails
pub fn generate_artifacts(
    schema: &TableSchema,
    config: &GeneratorConfig,
) -> Result<Vec<ArtifactSpec>, GeneratorError> {
    schema.validate_names()?;
    let ctx = ArtifactContext::new(schema, config);
    ArtifactKind::ALL
        .iter()
        .map(|&kind| -> Result<ArtifactSpec, GeneratorError> {
            let relative_path = artifact_path(config, kind, schema.entity_name());
            let inside = relative_path
                .strip_prefix(&config.base_path)
                .is_ok_and(|rest| rest.components().all(|c| matches!(c, Component::Normal(_))));
            if !inside {
                return Err(GeneratorError::parse(format!(
                    "{kind} path {} is outside {}",
                    relative_path.display(),
                    config.base_path.display()
                )));
            }
            Ok(ArtifactSpec {
                kind,
                relative_path,
                content: render_artifact(kind, &ctx)?,
            })
        })
        .collect()
}

/// Run the whole pipeline: read, parse, render, write
///
/// # Errors
///
/// Any [`GeneratorError`]; the run stops at the first one.
pub fn generate_project(
    source: &SchemaSource,
    config: &GeneratorConfig,
    options: &GenerateOptions,
) -> Result<GenerationReport, GeneratorError> {
    let schema = load_schema(source)?;
    info!(
        base_package = %config.base_package,
        base_path = %config.base_path.display(),
        table = schema.raw_table_name(),
        entity = schema.entity_name(),
        "generating CRUD layer"
    );
    for column in schema.columns() {
        info!(
            column = %column.raw_name,
            field = %column.field_name(),
            semantic_type = %column.semantic_type(),
            "column"
        );
    }

    let artifacts = generate_artifacts(&schema, config)?;
    if options.dry_run {
        info!(artifacts = artifacts.len(), "dry run, nothing written");
    } else {
        write_artifacts(&artifacts, options.mode)?;
        info!(artifacts = artifacts.len(), "files generated successfully");
    }

    Ok(GenerationReport {
        schema,
        artifacts,
        written: !options.dry_run,
    })
}
