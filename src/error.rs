//! Error types.
//!
//! Each concern gets its own enum; everything funnels into [`Error`] so the
//! binary is the single place that decides how a failure is shown.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for all passwordmachine operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Problems with the decrypted `{version, data}` envelope.
#[derive(Error, Debug)]
pub enum EnvelopeError {
    /// The plaintext has no usable `version` field.
    #[error("failed to decrypt: database has no version")]
    MissingVersion,

    /// The stored version range does not accept the running format version.
    #[error("database version mismatch: file requires {stored}, this build reads {running}")]
    VersionMismatch { stored: String, running: String },

    /// The envelope parsed but its contents are not a record tree.
    #[error("malformed database: {0}")]
    Malformed(String),
}

/// Encryption and decryption failures.
#[derive(Error, Debug)]
pub enum CipherError {
    /// Wrong passphrase or corrupted file; the two are indistinguishable.
    #[error("failed to decrypt: {0}")]
    DecryptionFailed(String),

    #[error("failed to encrypt: {0}")]
    EncryptionFailed(String),
}

/// Path resolution failures on write.
#[derive(Error, Debug)]
pub enum PathError {
    #[error("'{0}' holds a password, not a directory")]
    NotANamespace(String),

    #[error("path is {depth} levels deep, at most {max} are supported")]
    TooDeep { depth: usize, max: usize },
}

/// Database file lifecycle errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("database already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}

/// Invalid invocations, detected before any file is touched.
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("need a pattern")]
    MissingPattern,

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("passphrase cannot be empty")]
    EmptyPassphrase,
}

/// Settings file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
