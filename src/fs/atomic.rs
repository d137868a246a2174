//! Atomic file writes for generated artifacts.
//!
//! All writes follow the same pattern:
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename it over the target
//!
//! On crash a temporary file (named `.{filename}.tmp`) may remain in the
//! target directory, but the target itself is never partially written. The
//! rename is atomic on POSIX when source and target share a filesystem;
//! generated targets never pre-exist, so a plain `rename` also suffices on
//! Windows.

use crate::error::{Result, StrutError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file.
///
/// # Arguments
///
/// * `path` - The target file path
/// * `content` - The text to write
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(StrutError::WriteFile)` - On write or rename failure
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    // Generate temp file path in the same directory
    let temp_path = generate_temp_path(path)?;

    // Write to temp file with sync
    write_and_sync(&temp_path, content.as_bytes())?;

    // Move the temp file over the target
    replace(&temp_path, path)?;

    Ok(())
}

/// Generate a temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            StrutError::WriteFile(format!("invalid file path '{}'", target.display()))
        })?;

    let temp_name = format!(".{}.tmp", filename);
    Ok(parent.join(temp_name))
}

/// Write content to a file and sync to disk.
fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    // Create or truncate the file
    let mut file = File::create(path).map_err(|e| {
        StrutError::WriteFile(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    // Write all content
    file.write_all(content).map_err(|e| {
        // Clean up temp file on error
        let _ = fs::remove_file(path);
        StrutError::WriteFile(format!("failed to write to temporary file: {}", e))
    })?;

    // Sync to disk to ensure durability
    file.sync_all().map_err(|e| {
        // Clean up temp file on error
        let _ = fs::remove_file(path);
        StrutError::WriteFile(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

/// Rename the temporary file over the target.
fn replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        // Clean up temp file on error
        let _ = fs::remove_file(source);
        StrutError::WriteFile(format!(
            "failed to write '{}': {}",
            target.display(),
            e
        ))
    })
}
