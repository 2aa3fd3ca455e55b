//! Base configuration for a generation run
//!
//! The base package and base path can come from CLI flags, from a TOML file
//! passed explicitly, or from a `crudforge.toml` sitting next to the schema:
//!
//! ```toml
//! base_package = "com.example"
//! base_path = "src/main/java"
//! ```
//!
//! Flags win over the file. Both values are required once everything is merged.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::GeneratorError;

/// File name auto-detected alongside the schema
pub const CONFIG_FILE_NAME: &str = "crudforge.toml";

/// Validated namespace and output root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorConfig {
    /// Dot-delimited namespace of the generated code (e.g. `com.example`)
    pub base_package: String,
    /// Root directory the namespace tree is written under
    pub base_path: PathBuf,
}

impl GeneratorConfig {
    /// Build a config, rejecting an empty path or a malformed package
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] if either value is invalid.
    pub fn new(
        base_package: impl Into<String>,
        base_path: impl Into<PathBuf>,
    ) -> Result<Self, GeneratorError> {
        let base_package = base_package.into();
        let base_path = base_path.into();
        validate_package(&base_package)?;
        if base_path.as_os_str().is_empty() {
            return Err(GeneratorError::config("base path must not be empty"));
        }
        Ok(GeneratorConfig {
            base_package,
            base_path,
        })
    }

    /// Namespace as a relative directory: `com.example` → `com/example`
    #[must_use]
    pub fn package_dir(&self) -> PathBuf {
        self.base_package.split('.').collect()
    }
}

/// Partially specified configuration, as read from a file or from flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub base_package: Option<String>,
    #[serde(default)]
    pub base_path: Option<PathBuf>,
}

impl ConfigFile {
    /// Fill values missing from `self` with those from `fallback`
    #[must_use]
    pub fn or(self, fallback: ConfigFile) -> ConfigFile {
        ConfigFile {
            base_package: self.base_package.or(fallback.base_package),
            base_path: self.base_path.or(fallback.base_path),
        }
    }

    /// Turn the merged values into a validated [`GeneratorConfig`]
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] if a value is missing or invalid.
    pub fn resolve(self) -> Result<GeneratorConfig, GeneratorError> {
        let base_package = self
            .base_package
            .ok_or_else(|| GeneratorError::config("base package is required (--base-package)"))?;
        let base_path = self
            .base_path
            .ok_or_else(|| GeneratorError::config("base path is required (--base-path)"))?;
        GeneratorConfig::new(base_package, base_path)
    }
}

/// Load a config file
///
/// Returns `Ok(None)` if the file does not exist and an error if it exists but
/// cannot be read or parsed.
pub fn load_config_file(path: &Path) -> anyhow::Result<Option<ConfigFile>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    Ok(Some(config))
}

/// Resolve which config file to read
///
/// Priority:
/// 1. Explicitly provided path (via CLI)
/// 2. `crudforge.toml` next to the schema file
/// 3. None
pub fn resolve_config_path(
    explicit_path: Option<&Path>,
    schema_path: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }
    let candidate = schema_path?.parent()?.join(CONFIG_FILE_NAME);
    candidate.exists().then_some(candidate)
}

fn validate_package(package: &str) -> Result<(), GeneratorError> {
    if package.is_empty() {
        return Err(GeneratorError::config("base package must not be empty"));
    }
    for segment in package.split('.') {
        let valid = segment
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid {
            return Err(GeneratorError::config(format!(
                "invalid base package '{package}': segment '{segment}' is not an identifier"
            )));
        }
    }
    Ok(())
}
