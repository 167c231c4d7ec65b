//! Interactive selection of input and output locations
//!
//! Paths missing from the command line are asked for through a [`Picker`].
//! `None` means the user cancelled the selection.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

pub(crate) trait Picker {
    fn pick_directory(&mut self, title: &str) -> Option<PathBuf>;

    /// `filter` names the accepted file kind, e.g. "Excel files (*.xlsx *.xls)"
    fn pick_file(&mut self, title: &str, filter: &str) -> Option<PathBuf>;
}

/// Prompts on stderr and reads the answer from stdin.
///
/// A blank answer, EOF, or a stdin that is not a terminal is a cancellation.
pub(crate) struct TerminalPicker;

impl TerminalPicker {
    fn ask(&self, prompt: &str) -> Option<PathBuf> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return None;
        }
        eprint!("{prompt}: ");
        let _ = io::stderr().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => clean_answer(&line),
        }
    }
}

impl Picker for TerminalPicker {
    fn pick_directory(&mut self, title: &str) -> Option<PathBuf> {
        self.ask(title)
    }

    fn pick_file(&mut self, title: &str, filter: &str) -> Option<PathBuf> {
        self.ask(&format!("{title} [{filter}]"))
    }
}

/// Trim whitespace and the quotes terminals add around dropped paths.
fn clean_answer(line: &str) -> Option<PathBuf> {
    let trimmed = line.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| trimmed.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(trimmed);
    if unquoted.is_empty() {
        None
    } else {
        Some(PathBuf::from(unquoted))
    }
}
