//! Create command - start a new, empty database.

use std::path::Path;

use tracing::info;

use crate::cli::{output, prompt};
use crate::core::cipher::CipherKind;
use crate::core::database::Database;
use crate::core::store;
use crate::error::{DatabaseError, Result};

/// Create an empty database at `file`.
///
/// # Errors
///
/// Returns `DatabaseError::AlreadyExists` if `file` exists; checked before
/// prompting so no passphrase is asked for in vain.
pub fn execute(file: &Path, cipher: CipherKind) -> Result<()> {
    if file.exists() {
        return Err(DatabaseError::AlreadyExists(file.to_path_buf()).into());
    }

    let passphrase = prompt::new_passphrase()?;
    let database = Database::create(&passphrase, cipher);
    store::create(file, &database.encrypt()?)?;

    info!(cipher = %cipher, "created database");
    output::success(&format!(
        "created {} ({})",
        output::path(&file.display().to_string()),
        cipher
    ));
    Ok(())
}
