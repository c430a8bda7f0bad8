//! Artifact writing helpers.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::PddlError;

/// Create (or truncate) `path` and write `contents`, flushing before return.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), PddlError> {
    let mut file = File::create(path)
        .map_err(|e| PddlError::Io(format!("Cannot create {}: {}", path.display(), e)))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| PddlError::Io(format!("Cannot write {}: {}", path.display(), e)))?;
    file.flush()
        .map_err(|e| PddlError::Io(format!("Cannot flush {}: {}", path.display(), e)))?;
    Ok(())
}
