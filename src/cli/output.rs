//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR and non-terminal output):
//! - Green: success, checkmarks
//! - Red: errors, search matches
//! - Yellow: warnings
//! - Cyan: paths, hints
//! - Magenta: namespace path of a search result
//! - Bold blue: directories
//! - Dimmed: secondary info

use console::{style, Style};

use crate::core::search::Match;
use crate::core::tree::{Entry, Kind};

/// Check if color output is enabled.
///
/// Disabled by `NO_COLOR` or when stdout is not a terminal.
pub fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err() && console::colors_enabled()
}

fn paint(text: &str, s: Style, color: bool) -> String {
    if color {
        s.force_styling(true).apply_to(text).to_string()
    } else {
        text.to_string()
    }
}

fn directory_style() -> Style {
    Style::new().blue().bold()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ created /home/me/.passwordmachine`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ failed to decrypt: bad decrypt`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message to stderr (yellow).
///
/// Example: `⚠ no entry at company/ftp`
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run: passwordmachine --create`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a multi-line diagnostic to stderr, uncolored.
pub fn diagnostic(text: &str) {
    eprintln!("{}", text);
}

/// Format a path string in cyan.
pub fn path(p: &str) -> String {
    paint(p, Style::new().cyan(), colors_enabled())
}

/// Format one search result line.
///
/// `d company/area 69/` for a directory, `p company 2/area 62/ftp` for a
/// password. The matched part is highlighted.
pub fn format_match(m: &Match, color: bool) -> String {
    let mut line = format!("{} ", m.kind.marker());

    if let Some(path) = &m.path {
        line.push_str(&paint(&format!("{}/", path), Style::new().magenta(), color));
    }

    let (before, after) = (m.before(), m.after());
    let matched = paint(&m.matched, Style::new().red().bold(), color);
    match m.kind {
        Kind::Directory => {
            line.push_str(&paint(before, directory_style(), color));
            line.push_str(&matched);
            line.push_str(&paint(after, directory_style(), color));
            line.push('/');
        }
        Kind::Password => {
            line.push_str(before);
            line.push_str(&matched);
            line.push_str(after);
        }
    }

    line
}

/// Format one namespace listing line: `d key/` or `p key`.
pub fn format_entry(entry: &Entry, color: bool) -> String {
    match entry.kind {
        Kind::Directory => format!(
            "{} {}/",
            entry.kind.marker(),
            paint(&entry.key, directory_style(), color)
        ),
        Kind::Password => format!("{} {}", entry.kind.marker(), entry.key),
    }
}
