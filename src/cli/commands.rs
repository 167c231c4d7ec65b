//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Clone, Copy, Subcommand)]
pub(crate) enum Commands {
    /// Rename the PDFs, then sort them into session folders (default)
    Run,
    /// Only strip the submission prefix from the PDF file names
    Rename,
    /// Only sort already-renamed PDFs into session folders
    Assign,
}

/// Which passes a command runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Steps {
    pub(crate) rename: bool,
    pub(crate) assign: bool,
}

/// Resolve the passes to run; `--no-rename` only affects the full run.
pub(crate) fn parse_command(cmd: Option<Commands>, no_rename: bool) -> Steps {
    match cmd {
        Some(Commands::Rename) => Steps {
            rename: true,
            assign: false,
        },
        Some(Commands::Assign) => Steps {
            rename: false,
            assign: true,
        },
        Some(Commands::Run) | None => Steps {
            rename: !no_rename,
            assign: true,
        },
    }
}
