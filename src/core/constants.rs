//! Constants used throughout passwordmachine.
//!
//! Centralizes magic strings and configuration values.

/// Default database file name, relative to HOME.
pub const DEFAULT_DATABASE: &str = ".passwordmachine";

/// Settings directory under the user config dir.
pub const CONFIG_DIR: &str = "passwordmachine";

/// Settings file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Overrides the settings file location.
pub const CONFIG_ENV: &str = "PASSWORDMACHINE_CONFIG";

/// Default database location when `--file` is not given.
pub const FILE_ENV: &str = "PASSWORDMACHINE_FILE";

/// Log filter, e.g. `PASSWORDMACHINE_LOG=debug`.
pub const LOG_ENV: &str = "PASSWORDMACHINE_LOG";

/// Prefix that turns a pattern into a search.
pub const SEARCH_PREFIX: char = '/';

/// Deepest path `set` will create, counted in segments.
///
/// The stored JSON nests one object per segment inside the envelope, and
/// serde_json refuses to parse more than 128 levels. Anything written must
/// stay well under that to be readable again.
pub const MAX_DEPTH: usize = 100;
