//! Filesystem utilities for whole-file rewrites.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Replace `destination` with `contents` via a temp file and rename.
///
/// The temp file is created next to the destination so the rename never
/// crosses a filesystem boundary. On some platforms (notably Windows),
/// `fs::rename` fails if the destination already exists; that case is
/// handled by removing the destination first and retrying.
///
/// If the rename ultimately fails, the temp file is cleaned up.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or the rename fails
/// even after the fallback attempt.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> io::Result<()> {
    let temp_path = temp_sibling(destination);
    fs::write(&temp_path, contents)?;

    if let Err(initial_err) = fs::rename(&temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(&temp_path, destination).map_err(|retry_err| {
            // Clean up the temp file on failure
            let _ = fs::remove_file(&temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

fn temp_sibling(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "shelf".into());
    name.push(".tmp");
    destination.with_file_name(name)
}
