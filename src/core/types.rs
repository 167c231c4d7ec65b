use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};

use crate::consts::DATE_FORMAT;

/// One submission record from the schedule
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScheduleRow {
    /// Position of the row in the worksheet (0-based, header excluded)
    pub(crate) index: usize,
    pub(crate) submission_id: String,
    pub(crate) date: NaiveDate,
    pub(crate) start_time: NaiveTime,
    pub(crate) screen_number: Option<u32>,
}

/// A (date, label) slot matched to one distinct start time of that date
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Session {
    pub(crate) date: NaiveDate,
    pub(crate) label: String,
    pub(crate) start_time: NaiveTime,
}

impl Session {
    pub(crate) fn date_dir_name(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// A PDF copied into its session directory
#[derive(Debug, Clone)]
pub(crate) struct Placement {
    pub(crate) row_index: usize,
    pub(crate) submission_id: String,
    pub(crate) date: NaiveDate,
    pub(crate) label: String,
    pub(crate) screen_number: u32,
    pub(crate) source: PathBuf,
    pub(crate) destination: PathBuf,
}

/// A scheduled row whose PDF was not in the source directory
#[derive(Debug, Clone)]
pub(crate) struct MissingPdf {
    pub(crate) row_index: usize,
    pub(crate) submission_id: String,
    pub(crate) label: String,
    pub(crate) expected: PathBuf,
}

/// A row whose start time ranks after the last session label of its date
#[derive(Debug, Clone)]
pub(crate) struct Unscheduled {
    pub(crate) row_index: usize,
    pub(crate) submission_id: String,
    pub(crate) date: NaiveDate,
    pub(crate) start_time: NaiveTime,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct AssignmentReport {
    /// Input rows with screen numbers filled in for every placed PDF
    pub(crate) rows: Vec<ScheduleRow>,
    pub(crate) placements: Vec<Placement>,
    pub(crate) missing: Vec<MissingPdf>,
    pub(crate) unscheduled: Vec<Unscheduled>,
    pub(crate) created_dirs: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rename {
    pub(crate) from: String,
    pub(crate) to: String,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct RenameReport {
    pub(crate) renamed: Vec<Rename>,
    /// Matching files left in place because their names are not valid UTF-8
    pub(crate) skipped: Vec<PathBuf>,
}

impl RenameReport {
    pub(crate) fn count(&self) -> usize {
        self.renamed.len()
    }
}

/// Everything a run did, for the final report
#[derive(Debug, Clone, Default)]
pub(crate) struct RunReport {
    pub(crate) rename: Option<RenameReport>,
    pub(crate) assignment: Option<AssignmentReport>,
    /// Where the updated schedule was written
    pub(crate) schedule: Option<PathBuf>,
}
