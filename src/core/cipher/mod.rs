//! Cryptographic operations.
//!
//! Two passphrase-based ciphers are supported:
//!
//! - **age** (default): scrypt-derived key, random salt and nonce,
//!   authenticated payload, ASCII armor. Used for new databases.
//! - **legacy**: aes256-cbc with the key and IV derived from the passphrase
//!   by `EVP_BytesToKey` (MD5, no salt), hex encoded. Deterministic; kept so
//!   databases written by older releases stay readable and writable.
//!
//! The cipher of an existing database is detected from its text, see
//! [`CipherKind::detect`].

use serde::{Deserialize, Serialize};

use crate::error::Result;

mod age;
mod legacy;

pub use self::age::Age;
pub use self::legacy::Legacy;

/// First line of an armored age file.
pub const AGE_ARMOR_HEADER: &str = "-----BEGIN AGE ENCRYPTED FILE-----";

/// Passphrase-based cipher backend.
pub trait Cipher {
    /// Encrypt `plaintext` with `passphrase`.
    ///
    /// # Returns
    ///
    /// Printable ciphertext (format depends on backend).
    ///
    /// # Errors
    ///
    /// Returns `CipherError::EncryptionFailed` if encryption fails.
    fn encrypt(&self, plaintext: &str, passphrase: &str) -> Result<String>;

    /// Decrypt `ciphertext` with `passphrase`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` on a wrong passphrase or a
    /// corrupted ciphertext. The two cases are not told apart.
    fn decrypt(&self, ciphertext: &str, passphrase: &str) -> Result<String>;

    /// Backend name for display/config.
    fn name(&self) -> &'static str;
}

/// Selectable cipher backend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    /// age passphrase encryption
    #[default]
    Age,
    /// aes256-cbc, the 1.x file format
    Legacy,
}

impl CipherKind {
    /// Detect which cipher produced `ciphertext`.
    ///
    /// Armored age text is recognized by its header; anything else is
    /// treated as a legacy hex database.
    pub fn detect(ciphertext: &str) -> Self {
        if ciphertext.trim_start().starts_with(AGE_ARMOR_HEADER) {
            Self::Age
        } else {
            Self::Legacy
        }
    }

    /// Database format version written and accepted by this cipher.
    pub fn format_version(&self) -> &'static str {
        match self {
            Self::Age => "2.0.0",
            Self::Legacy => "1.0.0",
        }
    }

    fn backend(&self) -> &'static dyn Cipher {
        match self {
            Self::Age => &Age,
            Self::Legacy => &Legacy,
        }
    }

    pub fn encrypt(&self, plaintext: &str, passphrase: &str) -> Result<String> {
        self.backend().encrypt(plaintext, passphrase)
    }

    pub fn decrypt(&self, ciphertext: &str, passphrase: &str) -> Result<String> {
        self.backend().decrypt(ciphertext, passphrase)
    }

    pub fn name(&self) -> &'static str {
        self.backend().name()
    }
}

impl std::fmt::Display for CipherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
