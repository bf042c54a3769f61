//! Dump command.

use crate::core::database::Database;
use crate::error::Result;

/// Print the decrypted envelope as JSON.
pub fn execute(database: &Database) -> Result<()> {
    println!("{}", database.envelope().to_json()?);
    Ok(())
}
