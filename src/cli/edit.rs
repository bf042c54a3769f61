//! Set and remove commands.

use tracing::info;

use crate::cli::output;
use crate::core::database::Database;
use crate::error::Result;

/// Store a password at `path`.
pub fn set(database: &mut Database, path: &str, value: &str) -> Result<()> {
    database.set(path, value)?;
    info!(path = %path, "password set");
    output::success(&format!("set {}", output::path(path)));
    Ok(())
}

/// Remove the entry at `path`.
///
/// A missing path is reported but is not an error.
pub fn remove(database: &mut Database, path: &str) -> Result<()> {
    if database.remove(path) {
        info!(path = %path, "entry removed");
        output::success(&format!("removed {}", output::path(path)));
    } else {
        output::warn(&format!("no entry at {}", output::path(path)));
    }
    Ok(())
}
