//! Get and search commands.

use std::io::{self, IsTerminal, Write};

use regex::Regex;

use crate::cli::output;
use crate::core::database::Database;
use crate::core::path::Lookup;
use crate::core::tree;
use crate::error::{Result, UsageError};

/// Search all keys for `expr` and print the matches.
pub fn search(database: &Database, expr: &str, json: bool) -> Result<()> {
    let pattern = Regex::new(expr).map_err(UsageError::from)?;
    let results = database.search(&pattern);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let color = output::colors_enabled();
    println!();
    println!("total: {}", results.len());
    for result in &results {
        println!("{}", output::format_match(result, color));
    }
    Ok(())
}

/// Print the password at `path`, or list the directory there.
///
/// A password goes to a terminal with a newline and to a pipe without.
pub fn get(database: &Database, path: &str, json: bool) -> Result<()> {
    match database.get(path) {
        None => {
            output::warn(&format!("no entry at {}", output::path(path)));
        }
        Some(Lookup::Secret(value)) => {
            if json {
                println!("{}", serde_json::to_string(value)?);
            } else if io::stdout().is_terminal() {
                println!("{}", value);
            } else {
                // piped into a clipboard or another command: the bare value
                print!("{}", value);
                io::stdout().flush()?;
            }
        }
        Some(Lookup::Namespace(ns)) => {
            let entries = tree::list(ns);
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
                return Ok(());
            }

            let color = output::colors_enabled();
            println!();
            println!("total {}", entries.len());
            for entry in &entries {
                println!("{}", output::format_entry(entry, color));
            }
        }
    }
    Ok(())
}
