//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};

/// Open a file for buffered reading
///
/// A missing file is reported as `SourceNotFound` so callers can treat it
/// differently from any other failure.
pub fn open_source<P: AsRef<Path>>(path: P) -> LedgerResult<BufReader<File>> {
    let path = path.as_ref();

    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(LedgerError::SourceNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(LedgerError::Io(format!(
            "Failed to open {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Path of the temp file used while writing `path`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("ledger"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write a file atomically (write to temp, then rename)
///
/// `write` receives a buffered writer over the temp file. The target is
/// either completely replaced or left untouched.
pub fn write_atomic<P, F>(path: P, write: F) -> LedgerResult<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> LedgerResult<()>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = temp_path_for(path);

    let result = write_and_sync(&temp_path, write);
    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Io(format!(
            "Failed to rename temp file to {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

fn write_and_sync<F>(temp_path: &Path, write: F) -> LedgerResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> LedgerResult<()>,
{
    let file = File::create(temp_path)
        .map_err(|e| LedgerError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    write(&mut writer)?;

    writer
        .flush()
        .map_err(|e| LedgerError::Io(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Io(format!("Failed to sync data: {}", e)))?;

    Ok(())
}
