use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use roxmltree::{Document, Node};
use tracing::{debug, warn};

use super::types::{ColumnSpec, TableSchema};
use crate::error::GeneratorError;

const CREATE_TABLE: &str = "createTable";
const COLUMN: &str = "column";

/// Where the changeset text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    /// Read from a file on disk
    File(PathBuf),
    /// Read all of standard input
    Stdin,
    /// Already in memory
    Inline(String),
}

impl SchemaSource {
    /// `None` or `-` means stdin, anything else is a file path
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => SchemaSource::File(path.to_path_buf()),
            _ => SchemaSource::Stdin,
        }
    }

    /// Path of the source file, if it has one
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            SchemaSource::File(path) => Some(path),
            _ => None,
        }
    }
}

impl fmt::Display for SchemaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaSource::File(path) => write!(f, "{}", path.display()),
            SchemaSource::Stdin => f.write_str("<stdin>"),
            SchemaSource::Inline(_) => f.write_str("<inline>"),
        }
    }
}

/// Read the full changeset text from its source
///
/// # Errors
///
/// - [`GeneratorError::Io`] if the file or stdin cannot be read
/// - [`GeneratorError::SchemaParse`] if the bytes are not valid UTF-8
pub fn read_schema_source(source: &SchemaSource) -> Result<String, GeneratorError> {
    let bytes = match source {
        SchemaSource::File(path) => std::fs::read(path).map_err(|e| GeneratorError::io(path, e))?,
        SchemaSource::Stdin => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .map_err(|e| GeneratorError::io("<stdin>", e))?;
            bytes
        }
        SchemaSource::Inline(text) => return Ok(text.clone()),
    };
    String::from_utf8(bytes)
        .map_err(|e| GeneratorError::parse(format!("{source} is not valid UTF-8: {e}")))
}

/// Parse a Liquibase changeset into a [`TableSchema`]
///
/// The first `createTable` element in document order is used. Its direct
/// `column` children become the schema columns in declaration order; the
/// identity column is dropped. Element names are matched on their local name,
/// so both bare `<changeSet>` fragments and namespaced `<databaseChangeLog>`
/// documents are accepted.
///
/// # Errors
///
/// - [`GeneratorError::SchemaParse`] if the text is not well-formed XML, the
///   table or a column has no name, or a name does not normalize to a Java
///   identifier (see [`TableSchema::validate_names`])
/// - [`GeneratorError::NoTableFound`] if there is no `createTable` element
pub fn parse_changeset(text: &str) -> Result<TableSchema, GeneratorError> {
    let doc = Document::parse(text).map_err(|e| GeneratorError::parse(e.to_string()))?;

    let mut tables = doc
        .descendants()
        .filter(|n| is_element(n, CREATE_TABLE));
    let table = tables.next().ok_or(GeneratorError::NoTableFound)?;
    let ignored = tables.count();
    if ignored > 0 {
        warn!(
            ignored,
            "changeset declares more than one createTable; only the first is generated"
        );
    }

    let raw_table_name = table
        .attribute("tableName")
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| GeneratorError::parse("createTable is missing a tableName attribute"))?;

    let mut columns = Vec::new();
    for (index, node) in table.children().filter(|n| is_element(n, COLUMN)).enumerate() {
        let name = node
            .attribute("name")
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| {
                GeneratorError::parse(format!(
                    "column #{} of table '{raw_table_name}' is missing a name attribute",
                    index + 1
                ))
            })?;
        let column = ColumnSpec::new(name, node.attribute("type").unwrap_or_default());
        if column.is_identity() {
            debug!(column = name, "skipping identity column");
            continue;
        }
        if column.is_fallback() {
            warn!(
                column = name,
                storage_type = %column.storage_type,
                "unmapped storage type, falling back to text"
            );
        }
        columns.push(column);
    }

    let schema = TableSchema::new(raw_table_name, columns);
    schema.validate_names()?;
    Ok(schema)
}

/// Read and parse a changeset in one step
///
/// # Errors
///
/// Propagates errors from [`read_schema_source`] and [`parse_changeset`].
pub fn load_schema(source: &SchemaSource) -> Result<TableSchema, GeneratorError> {
    let text = read_schema_source(source)?;
    let schema = parse_changeset(&text)?;
    debug!(
        %source,
        table = schema.raw_table_name(),
        columns = schema.columns().len(),
        "loaded changeset"
    );
    Ok(schema)
}

fn is_element(node: &Node<'_, '_>, local_name: &str) -> bool {
    node.is_element() && node.tag_name().name() == local_name
}
