use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::CoefficientSet;
use crate::parse::{parse_rc, serialize_rc};

/// Error type for rc file I/O
#[derive(Debug, thiserror::Error)]
pub enum RcError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read an rc file. A missing file reads as an empty set; malformed lines,
/// including lines with invalid UTF-8, are skipped.
pub fn read_rc(path: &Path) -> Result<CoefficientSet, RcError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(CoefficientSet::new()),
        Err(e) => {
            return Err(RcError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let text = String::from_utf8_lossy(&bytes);
    let (set, dropped) = parse_rc(&text);
    for line in &dropped {
        tracing::debug!(path = %path.display(), line = %line, "skipped malformed rc line");
    }
    Ok(set)
}

/// Replace the rc file with the non-zero entries of `set`, creating parent
/// directories as needed. The new content is renamed into place.
pub fn write_rc(path: &Path, set: &CoefficientSet) -> Result<(), RcError> {
    let write_err = |source| RcError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(write_err)?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(write_err)?;
    tmp.write_all(serialize_rc(set).as_bytes())
        .map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
