//! File I/O utilities with atomic writes
//!
//! Full rewrites of the store, the sorted snapshot and the report go through
//! [`write_atomic`], so a failed write never leaves a half-written file.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{SalesError, SalesResult};

/// Create the parent directory of `path` if it is missing
pub fn ensure_parent_dir(path: &Path) -> SalesResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            SalesError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    Ok(())
}

/// Sibling temp path used while rewriting `path` (`sales.csv` -> `sales.csv.tmp`)
fn temp_path_for(path: &Path) -> SalesResult<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        SalesError::Storage(format!("Not a file path: {}", path.display()))
    })?;
    let mut temp_name = OsString::from(file_name);
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}

/// Write a file atomically (write to temp, then rename)
///
/// The closure receives a buffered writer over the temp file. The file is
/// flushed and synced before it replaces `path`; on any error the temp file
/// is removed and `path` keeps its previous contents.
pub fn write_atomic<P, F>(path: P, write: F) -> SalesResult<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> SalesResult<()>,
{
    let path = path.as_ref();
    ensure_parent_dir(path)?;

    let temp_path = temp_path_for(path)?;

    let result = (|| {
        let file = File::create(&temp_path)
            .map_err(|e| SalesError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        write(&mut writer)?;

        writer
            .flush()
            .map_err(|e| SalesError::Storage(format!("Failed to flush data: {}", e)))?;

        // Sync to disk before rename
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| SalesError::Storage(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, path)
            .map_err(|e| SalesError::Storage(format!("Failed to rename temp file: {}", e)))
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}
