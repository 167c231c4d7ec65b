//! Spreadsheet access
//!
//! The schedule workbook is read with calamine into a format-neutral
//! [`Sheet`], mapped to schedule rows by header name, and written back as
//! xlsx once screen numbers are assigned.

mod model;
mod reader;
mod schedule;
mod writer;

use std::path::{Path, PathBuf};

pub(crate) use model::Sheet;
#[cfg(test)]
pub(crate) use model::CellValue;
pub(crate) use reader::read_sheet;
pub(crate) use schedule::{ScheduleColumns, apply_rows, extract_rows};
pub(crate) use writer::write_sheet;

/// Where the updated schedule is saved: the source itself when it is xlsx,
/// otherwise an xlsx file with the same stem next to it.
pub(crate) fn save_path(source: &Path) -> PathBuf {
    let is_xlsx = source
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));
    if is_xlsx {
        source.to_path_buf()
    } else {
        source.with_extension("xlsx")
    }
}
