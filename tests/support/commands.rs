//! Command helper methods for Test.

use super::{Test, MASTER};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a passwordmachine command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - a settings file path inside the temporary home
    /// - `-f` pointing at the test database
    /// - colors disabled
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.arg("-f").arg(self.db());
        cmd
    }

    /// Like `cmd()` but without `-f`.
    pub fn bare_cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("passwordmachine")
            .expect("failed to find passwordmachine binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("PASSWORDMACHINE_CONFIG", self.config());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("PASSWORDMACHINE_FILE");
        cmd.env_remove("PASSWORDMACHINE_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run with `args`, feeding `passphrase` on stdin.
    pub fn run(&self, args: &[&str], passphrase: &str) -> Output {
        self.cmd()
            .args(args)
            .write_stdin(format!("{}\n", passphrase))
            .output()
            .expect("failed to run passwordmachine")
    }

    /// Shortcut for `passwordmachine --create` with extra arguments.
    pub fn create_with(&self, args: &[&str], passphrase: &str) -> Output {
        let mut all = vec!["--create"];
        all.extend_from_slice(args);
        self.run(&all, passphrase)
    }

    /// Shortcut for `passwordmachine <path>`.
    pub fn get(&self, path: &str) -> Output {
        self.run(&[path], MASTER)
    }

    /// Shortcut for `passwordmachine -v <value> <path>`.
    pub fn set(&self, path: &str, value: &str) -> Output {
        self.run(&["-v", value, path], MASTER)
    }

    /// Shortcut for `passwordmachine -r <path>`.
    pub fn rm(&self, path: &str) -> Output {
        self.run(&["-r", path], MASTER)
    }

    /// Shortcut for `passwordmachine /<expr>`.
    pub fn search(&self, expr: &str) -> Output {
        self.run(&[&format!("/{}", expr)], MASTER)
    }

    /// Shortcut for `passwordmachine --dump`.
    pub fn dump(&self) -> Output {
        self.run(&["--dump"], MASTER)
    }

    /// Parse the output of `--dump`.
    pub fn dump_json(&self) -> serde_json::Value {
        let output = self.dump();
        super::assert_success(&output);
        serde_json::from_slice(&output.stdout).expect("dump is not JSON")
    }
}
