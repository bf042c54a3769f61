//! Encrypt command - turn a plaintext database into an encrypted one.

use std::io::{self, Write};
use std::path::Path;

use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::prompt;
use crate::core::cipher::CipherKind;
use crate::core::envelope::{self, Envelope};
use crate::core::store;
use crate::error::Result;

/// Encrypt the plaintext envelope in `file` and print the ciphertext.
///
/// The input is the JSON written by `--dump`. Its version is restamped for
/// `cipher` so the output opens with the same build.
pub fn execute(file: &Path, cipher: CipherKind) -> Result<()> {
    let plaintext = Zeroizing::new(store::read(file)?);
    let parsed = Envelope::from_json(&plaintext)?;
    let passphrase = prompt::passphrase()?;

    let envelope = Envelope::new(cipher, parsed.data);
    if envelope.version != parsed.version {
        debug!(from = %parsed.version, to = %envelope.version, "restamping version");
    }

    print!("{}", envelope::encrypt(&envelope, &passphrase, cipher)?);
    io::stdout().flush()?;
    Ok(())
}
