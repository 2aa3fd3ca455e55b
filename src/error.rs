use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure of a generation run
///
/// Every variant is fatal: the pipeline stops at the first one and no further
/// artifacts are rendered or written.
#[derive(Debug)]
pub enum GeneratorError {
    /// The schema text is not well-formed, or a required attribute is missing
    SchemaParse {
        /// Parser or validation message
        message: String,
    },
    /// The schema is well-formed but declares no `createTable`
    NoTableFound,
    /// Base package or base path is missing or malformed
    InvalidConfig {
        /// What is wrong with the configuration
        message: String,
    },
    /// An artifact template failed to render
    Render {
        /// Artifact kind being rendered
        artifact: &'static str,
        /// Underlying template error
        source: askama::Error,
    },
    /// A directory could not be created or a file could not be written
    Io {
        /// Path the failing operation targeted
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
}

impl GeneratorError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        GeneratorError::SchemaParse {
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        GeneratorError::InvalidConfig {
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GeneratorError::Io {
            path: path.into(),
            source,
        }
    }

    /// Pipeline stage the error was raised in: `parse`, `config`, `render` or `io`
    #[must_use]
    pub fn stage(&self) -> &'static str {
        match self {
            GeneratorError::SchemaParse { .. } | GeneratorError::NoTableFound => "parse",
            GeneratorError::InvalidConfig { .. } => "config",
            GeneratorError::Render { .. } => "render",
            GeneratorError::Io { .. } => "io",
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::SchemaParse { message } => {
                write!(f, "schema parse error: {message}")
            }
            GeneratorError::NoTableFound => {
                write!(
                    f,
                    "schema parse error: no createTable declaration found in changeset"
                )
            }
            GeneratorError::InvalidConfig { message } => {
                write!(f, "configuration error: {message}")
            }
            GeneratorError::Render { artifact, source } => {
                write!(f, "render error: failed to render {artifact}: {source}")
            }
            GeneratorError::Io { path, source } => {
                write!(f, "I/O error: {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeneratorError::Render { source, .. } => Some(source),
            GeneratorError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
