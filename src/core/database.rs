//! Database handle.
//!
//! The primary interface for reading and changing a password database.

use regex::Regex;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::cipher::CipherKind;
use crate::core::envelope::{self, Envelope};
use crate::core::path::{self, Lookup};
use crate::core::search::{self, Match};
use crate::core::tree::{Namespace, Node};
use crate::error::Result;

/// A decrypted database held in memory for one invocation.
///
/// Remembers the passphrase and cipher it was opened with so it can be
/// written back, and whether anything changed since it was loaded.
pub struct Database {
    data: Namespace,
    passphrase: Zeroizing<String>,
    cipher: CipherKind,
    modified: bool,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("entries", &self.data.len())
            .field("cipher", &self.cipher)
            .field("modified", &self.modified)
            .finish_non_exhaustive()
    }
}

impl Database {
    // --- Construction ---
    /// Decrypt an existing database.
    ///
    /// # Errors
    ///
    /// Returns the codec's error if the passphrase is wrong, the file is
    /// corrupt, or its version is incompatible.
    pub fn open(buffer: &str, passphrase: &str) -> Result<Self> {
        let opened = envelope::open(buffer, passphrase)?;
        Ok(Self {
            data: opened.data,
            passphrase: Zeroizing::new(passphrase.to_string()),
            cipher: opened.cipher,
            modified: false,
        })
    }

    /// Start a new, empty database.
    ///
    /// It counts as modified so that it gets written out.
    pub fn create(passphrase: &str, cipher: CipherKind) -> Self {
        Self {
            data: Namespace::new(),
            passphrase: Zeroizing::new(passphrase.to_string()),
            cipher,
            modified: true,
        }
    }

    /// The record tree.
    pub fn data(&self) -> &Namespace {
        &self.data
    }

    /// Cipher used when the database is written back.
    pub fn cipher(&self) -> CipherKind {
        self.cipher
    }

    /// Whether the tree differs from what was loaded.
    pub fn modified(&self) -> bool {
        self.modified
    }

    /// Switch the cipher used on save.
    ///
    /// Changing it marks the database modified so it gets rewritten.
    pub fn set_cipher(&mut self, cipher: CipherKind) {
        if cipher != self.cipher {
            debug!(from = %self.cipher, to = %cipher, "changing cipher");
            self.cipher = cipher;
            self.modified = true;
        }
    }

    // --- Queries ---
    /// Search all keys at every depth.
    pub fn search(&self, pattern: &Regex) -> Vec<Match> {
        let results = search::traverse(&self.data, pattern, None);
        debug!(pattern = %pattern, results = results.len(), "search");
        results
    }

    /// Look up the password or directory at `path`.
    ///
    /// Returns `None` when nothing (or only an empty directory) is there.
    pub fn get(&self, path: &str) -> Option<Lookup<'_>> {
        path::get(&self.data, path)
    }

    // --- Mutations ---
    /// Store `value` at `path`, creating directories as needed.
    ///
    /// Only marks the database modified if the stored value actually changed.
    ///
    /// # Errors
    ///
    /// Returns `PathError::NotANamespace` if a directory segment is a password.
    pub fn set(&mut self, path: &str, value: &str) -> Result<()> {
        let previous = path::set(&mut self.data, path, value)?;
        let changed = !matches!(&previous, Some(Node::Secret(old)) if old == value);
        debug!(path = %path, changed, "set");
        self.modified |= changed;
        Ok(())
    }

    /// Remove the password or directory at `path`.
    ///
    /// Returns whether anything was removed. Removing a missing path changes
    /// nothing.
    pub fn remove(&mut self, path: &str) -> bool {
        let removed = path::remove(&mut self.data, path).is_some();
        debug!(path = %path, removed, "remove");
        self.modified |= removed;
        removed
    }

    // --- Persistence ---
    /// The envelope that would be written.
    pub fn envelope(&self) -> Envelope {
        Envelope::new(self.cipher, self.data.clone())
    }

    /// Encrypt with the passphrase the database was opened with.
    pub fn encrypt(&self) -> Result<String> {
        self.encrypt_with(&self.passphrase)
    }

    /// Encrypt with a different passphrase.
    pub fn encrypt_with(&self, passphrase: &str) -> Result<String> {
        envelope::encrypt(&self.envelope(), passphrase, self.cipher)
    }
}
