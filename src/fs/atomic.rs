//! Atomic file replacement.
//!
//! Content is written to `.{filename}.tmp` next to the target, synced, and
//! renamed over the target. A crash mid-write leaves either the old file or
//! the new one, never a truncated artifact. Source and destination are always
//! in the same directory, so the rename stays on one filesystem.

use crate::error::{InfragenError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to `path`, creating parent directories as needed.
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(InfragenError::WriteError)` - On directory creation, write, or rename failure
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            InfragenError::WriteError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    if let Err(e) = write_and_sync(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        InfragenError::WriteError(format!("failed to replace '{}': {}", path.display(), e))
    })
}

/// `.{filename}.tmp` in the target's directory.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            InfragenError::WriteError(format!("invalid output path '{}'", target.display()))
        })?;
    let temp_name = format!(".{}.tmp", filename);
    Ok(match target.parent() {
        Some(parent) => parent.join(temp_name),
        None => PathBuf::from(temp_name),
    })
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let write_error = |e: std::io::Error| {
        InfragenError::WriteError(format!("failed to write '{}': {}", path.display(), e))
    };

    let mut file = File::create(path).map_err(write_error)?;
    file.write_all(content).map_err(write_error)?;
    file.sync_all().map_err(write_error)
}
