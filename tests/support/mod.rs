//! Test support utilities for passwordmachine integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own directory for the database and its own home
/// directory. Child processes get everything through arguments and
/// environment, so tests can run in parallel.
pub struct Test {
    /// Temporary directory holding the database file
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment. No database exists yet.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Path of the database file used by `cmd()`.
    pub fn db(&self) -> PathBuf {
        self.dir.path().join("passwords.db")
    }

    /// Path of the settings file the binary will look for.
    pub fn config(&self) -> PathBuf {
        self.home.path().join("config.toml")
    }

    /// Create a test environment with an empty legacy database.
    ///
    /// Legacy is used for most tests since age's scrypt work factor makes
    /// every open take about a second.
    pub fn create() -> Self {
        let t = Self::new();
        let output = t.create_with(&["--cipher", "legacy"], MASTER);
        assert!(
            output.status.success(),
            "Failed to create database: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create a test environment holding the reference database.
    ///
    /// ```text
    /// company/area 69/http = super_mega_secret
    /// company 2/area 62/ftp = f
    /// ```
    pub fn with_passwords() -> Self {
        let t = Self::new();
        t.write_db(LEGACY_PASSWORDS_DB);
        t
    }

    /// Write raw contents to the database file, private to the owner.
    pub fn write_db(&self, contents: &str) {
        std::fs::write(self.db(), contents).expect("failed to write database");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(self.db(), std::fs::Permissions::from_mode(0o600))
                .expect("failed to set permissions");
        }
    }

    /// Read the raw database file.
    pub fn read_db(&self) -> String {
        std::fs::read_to_string(self.db()).expect("failed to read database")
    }
}
