//! Passphrase input.
//!
//! Interactive terminals get a hidden prompt on stderr. When stdin is a
//! pipe, a single line is read from it instead.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Password;
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{Result, UsageError};

/// Read the passphrase for an existing database.
pub fn passphrase() -> Result<Zeroizing<String>> {
    read(false)
}

/// Read a passphrase for a new database, asking twice on a terminal.
pub fn new_passphrase() -> Result<Zeroizing<String>> {
    read(true)
}

fn read(confirm: bool) -> Result<Zeroizing<String>> {
    let passphrase = if !io::stdin().is_terminal() {
        debug!("reading passphrase from stdin");
        read_line(io::stdin().lock())?
    } else {
        let mut prompt = Password::new().with_prompt("Password");
        if confirm {
            prompt = prompt.with_confirmation("Repeat password", "Passwords do not match");
        }
        Zeroizing::new(prompt.interact()?)
    };

    if passphrase.is_empty() {
        return Err(UsageError::EmptyPassphrase.into());
    }
    Ok(passphrase)
}

/// Read one line, dropping the line terminator.
fn read_line(mut input: impl BufRead) -> Result<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::new());
    input.read_line(&mut line)?;

    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(line)
}
