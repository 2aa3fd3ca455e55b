use serde::Serialize;
use std::collections::HashSet;

use crate::error::GeneratorError;
use crate::generator::{clean_storage_type, entity_name, lookup_storage_type, map_storage_type};
use crate::generator::{is_java_identifier, snake_to_camel, SemanticType};

/// Reserved name of the identity column, compared case-insensitively after
/// normalization. Every artifact declares its own `id` field instead.
pub const IDENTITY_COLUMN: &str = "id";

/// One column declared in the changeset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    /// Column name as declared (usually snake_case)
    pub raw_name: String,
    /// Declared storage type, qualifier included (e.g. `varchar(255)`)
    pub storage_type: String,
}

impl ColumnSpec {
    pub fn new(raw_name: impl Into<String>, storage_type: impl Into<String>) -> Self {
        ColumnSpec {
            raw_name: raw_name.into(),
            storage_type: storage_type.into(),
        }
    }

    /// lowerCamel field name used by every artifact
    #[must_use]
    pub fn field_name(&self) -> String {
        snake_to_camel(&self.raw_name)
    }

    /// Storage type with any `(...)` qualifier removed
    #[must_use]
    pub fn base_type(&self) -> &str {
        clean_storage_type(&self.storage_type)
    }

    #[must_use]
    pub fn semantic_type(&self) -> SemanticType {
        map_storage_type(self.base_type())
    }

    /// True when the base type is not in the type table and resolved to text by default
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        lookup_storage_type(self.base_type()).is_none()
    }

    /// True for the reserved identity column (`id`, any case)
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.field_name().eq_ignore_ascii_case(IDENTITY_COLUMN)
    }
}

/// A normalized table definition
///
/// Built once per run and never mutated. The identity column is removed on
/// construction, and column order is declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    raw_table_name: String,
    entity_name: String,
    columns: Vec<ColumnSpec>,
}

impl TableSchema {
    /// Build a schema, dropping any identity column from `columns`
    pub fn new(raw_table_name: impl Into<String>, columns: Vec<ColumnSpec>) -> Self {
        let raw_table_name = raw_table_name.into();
        TableSchema {
            entity_name: entity_name(&raw_table_name),
            columns: columns.into_iter().filter(|c| !c.is_identity()).collect(),
            raw_table_name,
        }
    }

    /// Table name as declared in the changeset
    #[must_use]
    pub fn raw_table_name(&self) -> &str {
        &self.raw_table_name
    }

    /// Capitalized stem of every generated type name (e.g. `UserProfile`)
    #[must_use]
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Materialized columns in declaration order, identity excluded
    #[must_use]
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Columns whose storage type fell back to text
    pub fn fallback_columns(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter().filter(|c| c.is_fallback())
    }

    /// Check that every generated name is a usable Java identifier
    ///
    /// The entity name becomes file names and type names, and each field name
    /// becomes a Java field, so both must be plain identifiers and field names
    /// must be unique after normalization (`first_name` and `firstName` clash).
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::SchemaParse`] naming the offending table or column.
    pub fn validate_names(&self) -> Result<(), GeneratorError> {
        if !is_java_identifier(&self.entity_name) {
            return Err(GeneratorError::parse(format!(
                "table name '{}' does not produce a valid type name (got '{}')",
                self.raw_table_name, self.entity_name
            )));
        }
        let mut seen = HashSet::with_capacity(self.columns.len());
        for column in &self.columns {
            let field = column.field_name();
            if !is_java_identifier(&field) {
                return Err(GeneratorError::parse(format!(
                    "column '{}' does not produce a valid field name (got '{field}')",
                    column.raw_name
                )));
            }
            if !seen.insert(field.clone()) {
                return Err(GeneratorError::parse(format!(
                    "column '{}' duplicates field '{field}'",
                    column.raw_name
                )));
            }
        }
        Ok(())
    }
}
