//! Envelope codec.
//!
//! A database file is the ciphertext of `{"version": "~X.Y.Z", "data": {..}}`.
//! The version is a semver range naming the format the writer used; on read
//! it must accept the format version of the cipher that opened the file.

use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::cipher::CipherKind;
use crate::core::tree::Namespace;
use crate::error::{CipherError, EnvelopeError, Result};

/// Versioned wrapper around a record tree; the unit of encryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub version: String,
    pub data: Namespace,
}

/// Fields read before the version is trusted.
#[derive(Deserialize)]
struct Header {
    #[serde(default)]
    version: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct Body {
    #[serde(default)]
    data: Option<Namespace>,
}

impl Envelope {
    /// Wrap `data` with the version range written by `cipher`.
    pub fn new(cipher: CipherKind, data: Namespace) -> Self {
        Self {
            version: format!("~{}", cipher.format_version()),
            data,
        }
    }

    /// A fresh envelope around an empty root.
    pub fn empty(cipher: CipherKind) -> Self {
        Self::new(cipher, Namespace::new())
    }

    /// Parse a plaintext envelope without checking its version range.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::MissingVersion` if there is no version string
    /// and `EnvelopeError::Malformed` if `data` is missing or not a tree.
    pub fn from_json(plaintext: &str) -> Result<Self> {
        let version = parse_version(plaintext)?;
        let data = parse_data(plaintext)?;
        Ok(Self { version, data })
    }

    /// Check that the stored range accepts the `running` format version.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::VersionMismatch` if it does not. A range that
    /// fails to parse accepts nothing.
    pub fn check_version(&self, running: &str) -> Result<()> {
        check_version(&self.version, running)
    }

    /// Serialize to the compact JSON that gets encrypted.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn parse_version(plaintext: &str) -> Result<String> {
    let header: Header = serde_json::from_str(plaintext).map_err(|e| {
        if e.is_data() {
            // valid JSON, but not an object
            EnvelopeError::MissingVersion.into()
        } else {
            crate::error::Error::from(CipherError::DecryptionFailed(format!(
                "not a database: {}",
                e
            )))
        }
    })?;

    match header.version {
        Some(serde_json::Value::String(version)) => Ok(version),
        _ => Err(EnvelopeError::MissingVersion.into()),
    }
}

fn parse_data(plaintext: &str) -> Result<Namespace> {
    let body: Body = serde_json::from_str(plaintext)
        .map_err(|e| EnvelopeError::Malformed(format!("data: {}", e)))?;
    body.data
        .ok_or_else(|| EnvelopeError::Malformed("missing data".to_string()).into())
}

/// Check a stored npm-style range against the running format version.
///
/// Supported forms: `||` alternatives, space separated comparators that must
/// all hold (`>=1.0.0 <2.0.0`), hyphen ranges (`1.0.0 - 1.5.0`), exact bare
/// versions (`1.0.0`, `v1.0.0`), `~` and `^` ranges, `x`/`*` wildcards, and
/// comma-joined ranges. Anything else accepts nothing.
fn check_version(stored: &str, running: &str) -> Result<()> {
    let mismatch = || EnvelopeError::VersionMismatch {
        stored: stored.to_string(),
        running: running.to_string(),
    };

    let running_version = Version::parse(running)
        .map_err(|e| EnvelopeError::Malformed(format!("format version {}: {}", running, e)))?;
    let alternatives = parse_range(stored).ok_or_else(mismatch)?;

    if alternatives.iter().any(|req| req.matches(&running_version)) {
        Ok(())
    } else {
        Err(mismatch().into())
    }
}

fn parse_range(range: &str) -> Option<Vec<VersionReq>> {
    range.split("||").map(parse_comparator_set).collect()
}

/// Translate one npm comparator set into a semver requirement.
fn parse_comparator_set(set: &str) -> Option<VersionReq> {
    let set = set.trim();
    if set.is_empty() {
        return Some(VersionReq::STAR);
    }
    if set.contains(',') {
        return VersionReq::parse(set).ok();
    }

    let tokens: Vec<&str> = set.split_whitespace().collect();
    let comparators = match tokens.as_slice() {
        [low, "-", high] => vec![
            format!(">={}", strip_v(low)),
            format!("<={}", strip_v(high)),
        ],
        _ => {
            let mut comparators = Vec::new();
            let mut operator: Option<&str> = None;
            for token in tokens {
                // `>= 1.0.0` splits into two tokens
                if token.chars().all(|c| "<>=~^".contains(c)) {
                    operator = Some(token);
                    continue;
                }
                comparators.push(match operator.take() {
                    Some(op) => format!("{}{}", op, strip_v(token)),
                    None => comparator(token),
                });
            }
            if operator.is_some() {
                return None;
            }
            comparators
        }
    };

    VersionReq::parse(&comparators.join(", ")).ok()
}

/// A single token with no separate operator. Bare versions are exact.
fn comparator(token: &str) -> String {
    let wildcard = token.contains(['x', 'X', '*']);
    match token.chars().next() {
        Some(c) if !wildcard && (c.is_ascii_digit() || c == 'v' || c == '=') => {
            format!("={}", token.trim_start_matches(['=', 'v']))
        }
        _ => token.to_string(),
    }
}

fn strip_v(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

/// Encrypt `envelope` with `passphrase` using `cipher`.
pub fn encrypt(envelope: &Envelope, passphrase: &str, cipher: CipherKind) -> Result<String> {
    let plaintext = Zeroizing::new(envelope.to_json()?);
    debug!(cipher = %cipher, entries = envelope.data.len(), "encrypting database");
    cipher.encrypt(&plaintext, passphrase)
}

/// A decrypted database and the cipher it was read with.
#[derive(Debug)]
pub struct Opened {
    pub cipher: CipherKind,
    pub data: Namespace,
}

/// Decrypt and validate a database, keeping track of its cipher.
///
/// # Errors
///
/// - `CipherError::DecryptionFailed` for a wrong passphrase or corrupt file
/// - `EnvelopeError::MissingVersion` if the plaintext has no version
/// - `EnvelopeError::VersionMismatch` if the version range is incompatible
/// - `EnvelopeError::Malformed` if the data is not a record tree
pub fn open(ciphertext: &str, passphrase: &str) -> Result<Opened> {
    let cipher = CipherKind::detect(ciphertext);
    debug!(cipher = %cipher, "decrypting database");

    let plaintext = Zeroizing::new(cipher.decrypt(ciphertext, passphrase)?);

    let version = parse_version(&plaintext)?;
    check_version(&version, cipher.format_version())?;
    let data = parse_data(&plaintext)?;

    debug!(version = %version, entries = data.len(), "database decrypted");
    Ok(Opened { cipher, data })
}

/// Decrypt a database and return its record tree.
///
/// See [`open`] for the failure cases.
pub fn decrypt(ciphertext: &str, passphrase: &str) -> Result<Namespace> {
    open(ciphertext, passphrase).map(|opened| opened.data)
}
