//! Core module - schedule types and the rename / assign passes

mod assigner;
mod renamer;
mod sanitize;
mod sessions;
mod types;

pub(crate) use assigner::{AssignOptions, copy_and_assign_screens};
pub(crate) use renamer::rename_pdfs;
pub(crate) use types::{
    AssignmentReport, MissingPdf, Placement, Rename, RenameReport, RunReport, ScheduleRow,
    Unscheduled,
};
