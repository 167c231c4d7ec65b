//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::consts::{DEFAULT_SESSION_LABELS, SUBMISSION_PREFIX, TIME_FORMAT};
use crate::error::AppError;
use crate::sheet::ScheduleColumns;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "postersort")]
#[command(
    about = "Sort poster-submission PDFs into per-session folders and record screen numbers",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Directory holding the submitted PDFs (asked for when omitted)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub(crate) pdf_dir: Option<PathBuf>,

    /// Schedule workbook; updated in place with screen numbers (asked for when omitted)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub(crate) schedule: Option<PathBuf>,

    /// Root directory for the per-date session folders (asked for when omitted)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub(crate) output: Option<PathBuf>,

    /// File name prefix stripped by the rename pass [default: submission_]
    #[arg(long, global = true, value_name = "PREFIX")]
    pub(crate) prefix: Option<String>,

    /// Session label, in start-time order; repeat for each session
    /// [default: "session 1", "session 2"]
    #[arg(long = "session-label", global = true, value_name = "LABEL")]
    pub(crate) session_labels: Vec<String>,

    /// Skip the rename pass of a full run
    #[arg(long, global = true)]
    pub(crate) no_rename: bool,

    /// Print the run report as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Suppress per-file progress messages
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,

    /// Enable debug output (column mapping, per-row parsing)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    #[arg(skip)]
    pub(crate) time_format: Option<String>,

    #[arg(skip)]
    pub(crate) columns: ScheduleColumns,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.no_rename && config.no_rename {
            self.no_rename = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.quiet && config.quiet {
            self.quiet = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        // String options: only apply if CLI didn't set them
        if self.prefix.is_none() {
            self.prefix = config.prefix;
        }
        if self.session_labels.is_empty()
            && let Some(labels) = config.session_labels
        {
            self.session_labels = labels;
        }
        self.time_format = config.time_format;
        self.columns = config.columns;

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    /// Progress lines are silenced by `--quiet`
    pub(crate) fn progress(&self) -> bool {
        !self.quiet
    }

    pub(crate) fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(SUBMISSION_PREFIX)
    }

    pub(crate) fn time_format(&self) -> &str {
        self.time_format.as_deref().unwrap_or(TIME_FORMAT)
    }

    /// Session labels in start-time order, validated for use as directory names
    pub(crate) fn session_labels(&self) -> Result<Vec<String>, AppError> {
        let labels: Vec<String> = if self.session_labels.is_empty() {
            DEFAULT_SESSION_LABELS.iter().map(|l| l.to_string()).collect()
        } else {
            self.session_labels.clone()
        };

        for (i, label) in labels.iter().enumerate() {
            let trimmed = label.trim();
            if trimmed.is_empty()
                || trimmed == "."
                || trimmed == ".."
                || label.contains(['/', '\\'])
            {
                return Err(AppError::InvalidSessionLabel {
                    label: label.clone(),
                });
            }
            if labels[..i].contains(label) {
                return Err(AppError::DuplicateSessionLabel {
                    label: label.clone(),
                });
            }
        }
        Ok(labels)
    }
}
