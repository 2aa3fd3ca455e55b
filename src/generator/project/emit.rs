use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::generate::ArtifactSpec;
use crate::error::GeneratorError;

/// How [`write_artifacts`] commits files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmitMode {
    /// Write every artifact to a sibling temporary file first, then rename
    /// them all into place. A failure while staging leaves no target touched.
    #[default]
    Staged,
    /// Create directories and truncate-write each artifact in turn. A failure
    /// aborts the remaining writes and keeps the ones already done.
    Direct,
}

/// Write artifacts to their paths, creating missing directories
///
/// Existing files are overwritten in full.
///
/// # Errors
///
/// Returns [`GeneratorError::Io`] for the first directory or file that fails.
pub fn write_artifacts(artifacts: &[ArtifactSpec], mode: EmitMode) -> Result<(), GeneratorError> {
    match mode {
        EmitMode::Direct => write_direct(artifacts),
        EmitMode::Staged => write_staged(artifacts),
    }
}

fn write_direct(artifacts: &[ArtifactSpec]) -> Result<(), GeneratorError> {
    for artifact in artifacts {
        let path = &artifact.relative_path;
        ensure_parent_dir(path)?;
        fs::write(path, &artifact.content).map_err(|e| GeneratorError::io(path, e))?;
        debug!(kind = %artifact.kind, path = %path.display(), "wrote artifact");
    }
    Ok(())
}

fn write_staged(artifacts: &[ArtifactSpec]) -> Result<(), GeneratorError> {
    let mut staged: Vec<(PathBuf, &Path)> = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let target = artifact.relative_path.as_path();
        let tmp = staging_path(target);
        if let Err(err) = stage(target, &tmp, &artifact.content) {
            discard(&staged);
            return Err(err);
        }
        staged.push((tmp, target));
    }

    for (index, (tmp, target)) in staged.iter().enumerate() {
        if let Err(e) = fs::rename(tmp, target) {
            discard(&staged[index..]);
            return Err(GeneratorError::io(*target, e));
        }
        debug!(path = %target.display(), "committed artifact");
    }
    Ok(())
}

fn stage(target: &Path, tmp: &Path, content: &str) -> Result<(), GeneratorError> {
    ensure_parent_dir(target)?;
    if target.is_dir() {
        return Err(GeneratorError::io(
            target,
            std::io::Error::other("a directory exists at the artifact path"),
        ));
    }
    fs::write(tmp, content).map_err(|e| GeneratorError::io(tmp, e))
}

fn discard(staged: &[(PathBuf, &Path)]) {
    for (tmp, _) in staged {
        if let Err(e) = fs::remove_file(tmp) {
            warn!(path = %tmp.display(), error = %e, "failed to remove staged file");
        }
    }
}

/// `dir/Foo.java` → `dir/.Foo.java.crudforge-tmp`
fn staging_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{name}.crudforge-tmp"))
}

fn ensure_parent_dir(path: &Path) -> Result<(), GeneratorError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| GeneratorError::io(parent, e))
        }
        _ => Ok(()),
    }
}
