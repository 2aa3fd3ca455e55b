use serde::Serialize;
use std::fmt;

use super::naming::{camel_to_snake, capitalize};
use crate::changeset::ColumnSpec;

/// Closed set of field types a storage type resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SemanticType {
    Integer,
    LongInteger,
    Boolean,
    FloatingPoint,
    Text,
}

impl SemanticType {
    /// Java type used for fields of this semantic type
    #[must_use]
    pub fn java_type(self) -> &'static str {
        match self {
            SemanticType::Integer => "Integer",
            SemanticType::LongInteger => "Long",
            SemanticType::Boolean => "Boolean",
            SemanticType::FloatingPoint => "Double",
            SemanticType::Text => "String",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SemanticType::Integer => "integer",
            SemanticType::LongInteger => "long-integer",
            SemanticType::Boolean => "boolean",
            SemanticType::FloatingPoint => "floating-point",
            SemanticType::Text => "text",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strip a parenthesised qualifier from a storage type: `varchar(255)` → `varchar`
pub fn clean_storage_type(raw: &str) -> &str {
    match raw.find('(') {
        Some(idx) => &raw[..idx],
        None => raw,
    }
}

/// Resolve a cleaned storage type token, or `None` when the token is unknown
///
/// Matching is case-sensitive.
pub fn lookup_storage_type(token: &str) -> Option<SemanticType> {
    match token {
        "int" => Some(SemanticType::Integer),
        "long" | "bigint" => Some(SemanticType::LongInteger),
        "boolean" => Some(SemanticType::Boolean),
        "double" => Some(SemanticType::FloatingPoint),
        "string" => Some(SemanticType::Text),
        _ => None,
    }
}

/// Map a cleaned storage type token to its semantic type
///
/// Total: tokens outside the table fall back to [`SemanticType::Text`]. The
/// fallback is not an error; [`crate::changeset::parse_changeset`] logs it.
pub fn map_storage_type(token: &str) -> SemanticType {
    lookup_storage_type(token).unwrap_or(SemanticType::Text)
}

/// A field as every template sees it
///
/// All names are derived here once, from the column, so templates only
/// interpolate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    /// lowerCamel field name (e.g. `firstName`)
    pub name: String,
    /// Accessor suffix (e.g. `FirstName` for `getFirstName`)
    pub accessor: String,
    /// Persisted column name (e.g. `first_name`)
    pub column_name: String,
    /// Semantic type the storage type resolved to
    pub semantic_type: SemanticType,
    /// Java type for the field declaration
    pub java_type: &'static str,
}

impl FieldDef {
    pub fn from_column(column: &ColumnSpec) -> Self {
        let name = column.field_name();
        let semantic_type = column.semantic_type();
        FieldDef {
            accessor: capitalize(&name),
            column_name: camel_to_snake(&name),
            semantic_type,
            java_type: semantic_type.java_type(),
            name,
        }
    }
}
