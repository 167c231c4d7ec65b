use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("No {what} selected.")]
    NoSelection { what: &'static str },

    #[error("Directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to list files: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Failed to read spreadsheet: {0}")]
    SheetRead(#[from] calamine::Error),

    #[error("Failed to write spreadsheet: {0}")]
    SheetWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Spreadsheet has no worksheets: {}", path.display())]
    EmptyWorkbook { path: PathBuf },

    #[error("Missing column \"{name}\" in spreadsheet")]
    MissingColumn { name: String },

    #[error("Invalid date \"{value}\" in row {row}")]
    InvalidDate { row: usize, value: String },

    #[error("Invalid start time \"{value}\" in row {row} (expected {format})")]
    InvalidTime {
        row: usize,
        value: String,
        format: String,
    },

    #[error("Invalid session label \"{label}\"")]
    InvalidSessionLabel { label: String },

    #[error("Duplicate session label \"{label}\"")]
    DuplicateSessionLabel { label: String },

    #[error("Failed to serialize JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
