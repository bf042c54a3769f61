//! Database file storage.
//!
//! Reads and writes the encrypted database text. Writes go to a sibling
//! temporary file that is renamed over the old one, so a failed write
//! never leaves a half-written database behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{CipherError, DatabaseError, Result};

/// Permissions for database files (Unix only).
#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

/// Warn when a database is readable by other users (Unix only).
#[cfg(unix)]
fn check_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = fs::metadata(path)?.permissions().mode() & 0o777;
    if mode & 0o077 != 0 {
        warn!(
            path = %path.display(),
            mode = %format!("{:o}", mode),
            "database is accessible by other users; run: chmod 600 {}",
            path.display()
        );
    }
    Ok(())
}

/// Read the encrypted database at `path`.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if the file does not exist, and
/// `CipherError::DecryptionFailed` if it is not text, which no database is.
pub fn read(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(DatabaseError::NotFound(path.to_path_buf()).into());
    }

    #[cfg(unix)]
    check_permissions(path)?;

    let contents = String::from_utf8(fs::read(path)?)
        .map_err(|e| CipherError::DecryptionFailed(format!("not a database: {}", e)))?;
    debug!(path = %path.display(), bytes = contents.len(), "read database");
    Ok(contents)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_temp(tmp: &Path, contents: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(tmp)?;

    // Restrict permissions before any ciphertext lands (Unix only)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(tmp, fs::Permissions::from_mode(FILE_MODE))?;
    }

    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

/// Replace the database at `path` with `contents`.
///
/// The file is written with mode 0600 on Unix. On failure the temporary
/// file is removed and the old database is left as it was.
pub fn write(path: &Path, contents: &str) -> Result<()> {
    let tmp = temp_path(path);
    if let Err(e) = write_temp(&tmp, contents).and_then(|()| fs::rename(&tmp, path)) {
        if tmp.exists() {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                warn!(path = %tmp.display(), error = %cleanup, "failed to remove temporary file");
            }
        }
        return Err(e.into());
    }

    debug!(path = %path.display(), bytes = contents.len(), "wrote database");
    Ok(())
}

/// Write a new database, refusing to replace an existing one.
///
/// # Errors
///
/// Returns `DatabaseError::AlreadyExists` if `path` exists.
pub fn create(path: &Path, contents: &str) -> Result<()> {
    if path.exists() {
        return Err(DatabaseError::AlreadyExists(path.to_path_buf()).into());
    }
    write(path, contents)
}
