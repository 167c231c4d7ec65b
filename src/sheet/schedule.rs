//! Mapping between worksheet columns and schedule rows

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::consts::{DATE_COLUMN, ID_COLUMN, SCREEN_COLUMN, START_TIME_COLUMN};
use crate::core::ScheduleRow;
use crate::error::AppError;
use crate::sheet::model::{CellValue, Sheet, serial_to_cell};
use crate::utils::{debug_enabled, parse_date, parse_time};

/// Header names of the columns the tool reads and writes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct ScheduleColumns {
    pub(crate) id: String,
    pub(crate) date: String,
    pub(crate) start_time: String,
    pub(crate) screen: String,
}

impl Default for ScheduleColumns {
    fn default() -> Self {
        ScheduleColumns {
            id: ID_COLUMN.to_string(),
            date: DATE_COLUMN.to_string(),
            start_time: START_TIME_COLUMN.to_string(),
            screen: SCREEN_COLUMN.to_string(),
        }
    }
}

fn require(sheet: &Sheet, name: &str) -> Result<usize, AppError> {
    sheet.column(name).ok_or_else(|| AppError::MissingColumn {
        name: name.to_string(),
    })
}

/// 1-based spreadsheet row number for a data row (header is row 1)
fn sheet_row(index: usize) -> usize {
    index + 2
}

fn normalize_date(cell: &CellValue, index: usize) -> Result<NaiveDate, AppError> {
    let date = match cell {
        CellValue::Date(d) => Some(*d),
        CellValue::DateTime(dt) => Some(dt.date()),
        CellValue::Number(n) => match serial_to_cell(*n) {
            CellValue::Date(d) => Some(d),
            CellValue::DateTime(dt) => Some(dt.date()),
            _ => None,
        },
        CellValue::Text(s) => parse_date(s),
        _ => None,
    };
    date.ok_or_else(|| AppError::InvalidDate {
        row: sheet_row(index),
        value: cell.as_text(),
    })
}

fn normalize_time(cell: &CellValue, index: usize, format: &str) -> Result<NaiveTime, AppError> {
    let time = match cell {
        CellValue::Time(t) => Some(*t),
        CellValue::DateTime(dt) => Some(dt.time()),
        CellValue::Number(n) if (0.0..1.0).contains(n) => match serial_to_cell(*n) {
            CellValue::Time(t) => Some(t),
            _ => None,
        },
        CellValue::Text(s) => parse_time(s, format),
        _ => None,
    };
    time.ok_or_else(|| AppError::InvalidTime {
        row: sheet_row(index),
        value: cell.as_text(),
        format: format.to_string(),
    })
}

fn screen_number(cell: &CellValue) -> Option<u32> {
    match cell {
        CellValue::Number(n) if *n >= 1.0 && n.fract() == 0.0 => Some(*n as u32),
        CellValue::Text(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read schedule rows from the sheet, normalizing dates and start times.
///
/// Rows with blank id, date and start time are skipped. Any other row whose
/// date or start time cannot be parsed aborts the load.
pub(crate) fn extract_rows(
    sheet: &Sheet,
    columns: &ScheduleColumns,
    time_format: &str,
) -> Result<Vec<ScheduleRow>, AppError> {
    let id_col = require(sheet, &columns.id)?;
    let date_col = require(sheet, &columns.date)?;
    let time_col = require(sheet, &columns.start_time)?;
    let screen_col = sheet.column(&columns.screen);

    if debug_enabled() {
        eprintln!(
            "Column mapping: id={id_col} date={date_col} start_time={time_col} screen={screen_col:?}"
        );
    }

    let mut rows = Vec::new();
    for index in 0..sheet.rows.len() {
        let id_cell = sheet.cell(index, id_col);
        let date_cell = sheet.cell(index, date_col);
        let time_cell = sheet.cell(index, time_col);
        if id_cell.is_empty() && date_cell.is_empty() && time_cell.is_empty() {
            continue;
        }

        let row = ScheduleRow {
            index,
            submission_id: id_cell.as_text(),
            date: normalize_date(date_cell, index)?,
            start_time: normalize_time(time_cell, index, time_format)?,
            screen_number: screen_col.and_then(|col| screen_number(sheet.cell(index, col))),
        };
        if debug_enabled() {
            eprintln!(
                "Row {}: {:?} {} {}",
                sheet_row(index),
                row.submission_id,
                row.date,
                row.start_time
            );
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Write normalized dates, start times and assigned screen numbers back into
/// the sheet. Rows without a screen number keep whatever the cell held.
pub(crate) fn apply_rows(sheet: &mut Sheet, rows: &[ScheduleRow], columns: &ScheduleColumns) {
    let date_col = sheet.column_or_insert(&columns.date);
    let time_col = sheet.column_or_insert(&columns.start_time);
    let screen_col = sheet.column_or_insert(&columns.screen);

    for row in rows {
        sheet.set_cell(row.index, date_col, CellValue::Date(row.date));
        sheet.set_cell(row.index, time_col, CellValue::Time(row.start_time));
        if let Some(screen) = row.screen_number {
            sheet.set_cell(row.index, screen_col, CellValue::Number(f64::from(screen)));
        }
    }
}
