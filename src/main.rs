//! passwordmachine - Encrypted hierarchical password store.

use std::error::Error as _;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use passwordmachine::cli::output;
use passwordmachine::cli::{execute, Cli};
use passwordmachine::core::constants;
use passwordmachine::error::{DatabaseError, Error};

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("passwordmachine=debug")
        } else {
            EnvFilter::new("passwordmachine=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Database(DatabaseError::NotFound(_)) => Some("run: passwordmachine --create"),
            Error::Database(DatabaseError::AlreadyExists(_)) => {
                Some("choose another path with --file")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if verbose {
            output::diagnostic(&diagnostic(&e));
        } else if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

/// Full error report: the source chain followed by the debug representation.
fn diagnostic(e: &Error) -> String {
    let mut report = String::new();
    let mut source = e.source();
    while let Some(cause) = source {
        report.push_str(&format!("  caused by: {}\n", cause));
        source = cause.source();
    }
    report.push_str(&format!("{:#?}", e));
    report
}
