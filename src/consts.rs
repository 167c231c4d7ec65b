/// Date format used for per-date output directories: "2024-05-01"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Start-time format expected in text cells unless configured otherwise
pub(crate) const TIME_FORMAT: &str = "%H:%M:%S";

/// Prefix the submission system puts on every exported PDF
pub(crate) const SUBMISSION_PREFIX: &str = "submission_";

pub(crate) const PDF_EXTENSION: &str = "pdf";

/// Session labels, in start-time order
pub(crate) const DEFAULT_SESSION_LABELS: [&str; 2] = ["session 1", "session 2"];

pub(crate) const ID_COLUMN: &str = "Abstract Submission ID";
pub(crate) const DATE_COLUMN: &str = "date";
pub(crate) const START_TIME_COLUMN: &str = "start time (local time)";
pub(crate) const SCREEN_COLUMN: &str = "Screen number";
