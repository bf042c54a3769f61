//! Settings file management.
//!
//! Optional `config.toml` in the user config directory:
//!
//! ```toml
//! file = "/home/me/secrets/.passwordmachine"
//! cipher = "age"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::cipher::CipherKind;
use crate::core::constants;
use crate::error::{ConfigError, Result};

/// User settings; every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Default database location.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Cipher for new databases and `--encrypt`.
    #[serde(default)]
    pub cipher: Option<CipherKind>,
}

impl Settings {
    /// Path of the settings file.
    ///
    /// `PASSWORDMACHINE_CONFIG` overrides the default location under the
    /// user config directory.
    pub fn path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(constants::CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
    }

    /// Load settings from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file exists but cannot be
    /// read, or `ConfigError::Parse` if the TOML is malformed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading settings");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(settings)
    }

    /// Resolve the database path.
    ///
    /// An explicit path wins, then the settings file, then
    /// `~/.passwordmachine`.
    pub fn database_path(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        if let Some(path) = &self.file {
            return path.clone();
        }
        dirs::home_dir()
            .unwrap_or_default()
            .join(constants::DEFAULT_DATABASE)
    }

    /// Resolve the cipher: explicit choice, then settings, then the default.
    pub fn cipher(&self, explicit: Option<CipherKind>) -> CipherKind {
        explicit.or(self.cipher).unwrap_or_default()
    }
}
