//! Command-line interface.

pub mod create;
pub mod dump;
pub mod edit;
pub mod encrypt;
pub mod output;
pub mod prompt;
pub mod query;

use std::path::{Path, PathBuf};

use clap::Parser;
use regex::Regex;
use tracing::debug;

use crate::core::cipher::CipherKind;
use crate::core::config::Settings;
use crate::core::constants;
use crate::core::database::Database;
use crate::core::store;
use crate::error::{Result, UsageError};

/// passwordmachine - Encrypted hierarchical password store.
#[derive(Parser, Debug)]
#[command(
    name = "passwordmachine",
    about = "Encrypted hierarchical password store",
    disable_version_flag = true,
    after_help = "Patterns starting with '/' are regular expressions searched across all keys.\n\
                  Anything else is a path like 'company/area 69/http'."
)]
pub struct Cli {
    /// Entry path, or /regex to search
    pub pattern: Option<String>,

    /// Path to database file
    #[arg(short, long, env = constants::FILE_ENV, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Set a password
    #[arg(short = 'v', long, value_name = "VALUE")]
    pub value: Option<String>,

    /// Remove an entry from the database
    #[arg(short, long)]
    pub remove: bool,

    /// Encrypt a plaintext database file and print it
    #[arg(short, long)]
    pub encrypt: bool,

    /// Dump the database
    #[arg(short, long)]
    pub dump: bool,

    /// Create a new database
    #[arg(short, long)]
    pub create: bool,

    /// Verbose output
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Cipher for new or rewritten databases
    #[arg(long, value_enum, value_name = "CIPHER")]
    pub cipher: Option<CipherKind>,

    /// Output search results and listings as JSON
    #[arg(long)]
    pub json: bool,

    /// Print version
    #[arg(long)]
    pub version: bool,
}

/// What a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Version,
    Create,
    Encrypt,
    Dump,
    Remove(String),
    Set { path: String, value: String },
    Search(String),
    Get(String),
}

impl Mode {
    /// Short name for logging; never includes the value being set.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Version => "version",
            Mode::Create => "create",
            Mode::Encrypt => "encrypt",
            Mode::Dump => "dump",
            Mode::Remove(_) => "remove",
            Mode::Set { .. } => "set",
            Mode::Search(_) => "search",
            Mode::Get(_) => "get",
        }
    }
}

impl Cli {
    /// Work out the mode, rejecting invalid invocations before any file
    /// or terminal access.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::MissingPattern` when a pattern is required but
    /// absent, or `UsageError::InvalidPattern` for a bad search regex.
    pub fn mode(&self) -> Result<Mode> {
        if self.version {
            return Ok(Mode::Version);
        }
        if self.create {
            return Ok(Mode::Create);
        }
        if self.encrypt {
            return Ok(Mode::Encrypt);
        }
        if self.dump {
            return Ok(Mode::Dump);
        }

        let pattern = self.pattern.clone().ok_or(UsageError::MissingPattern)?;

        if self.remove {
            Ok(Mode::Remove(pattern))
        } else if let Some(value) = &self.value {
            Ok(Mode::Set {
                path: pattern,
                value: value.clone(),
            })
        } else if let Some(expr) = search_expression(&pattern) {
            Regex::new(expr).map_err(UsageError::from)?;
            Ok(Mode::Search(expr.to_string()))
        } else {
            Ok(Mode::Get(pattern))
        }
    }
}

/// Extract the regex from a `/pattern` or `/pattern/` argument.
///
/// Keys never contain `/`, so one trailing slash is treated as a closing
/// delimiter rather than part of the expression.
pub fn search_expression(pattern: &str) -> Option<&str> {
    let expr = pattern.strip_prefix(constants::SEARCH_PREFIX)?;
    Some(
        expr.strip_suffix(constants::SEARCH_PREFIX)
            .filter(|inner| !inner.ends_with('\\'))
            .unwrap_or(expr),
    )
}

/// Read and decrypt the database at `file`, prompting for the passphrase.
fn open(file: &Path) -> Result<Database> {
    let buffer = store::read(file)?;
    let passphrase = prompt::passphrase()?;
    Database::open(&buffer, &passphrase)
}

/// Execute a parsed command line.
///
/// The database is written back only after the whole operation succeeded
/// and only if it changed.
pub fn execute(cli: Cli) -> Result<()> {
    let mode = cli.mode()?;
    if mode == Mode::Version {
        println!("passwordmachine {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let settings = Settings::load()?;
    let file = settings.database_path(cli.file.as_deref());
    debug!(file = %file.display(), mode = mode.name(), "starting");

    match mode {
        Mode::Create => return create::execute(&file, settings.cipher(cli.cipher)),
        Mode::Encrypt => return encrypt::execute(&file, settings.cipher(cli.cipher)),
        _ => {}
    }

    let mut database = open(&file)?;
    if let Some(cipher) = cli.cipher {
        database.set_cipher(cipher);
    }

    match mode {
        Mode::Dump => dump::execute(&database)?,
        Mode::Remove(path) => edit::remove(&mut database, &path)?,
        Mode::Set { path, value } => edit::set(&mut database, &path, &value)?,
        Mode::Search(expr) => query::search(&database, &expr, cli.json)?,
        Mode::Get(path) => query::get(&database, &path, cli.json)?,
        Mode::Version | Mode::Create | Mode::Encrypt => {}
    }

    if database.modified() {
        store::write(&file, &database.encrypt()?)?;
        debug!(cipher = %database.cipher(), "database saved");
    }

    Ok(())
}
