use std::path::Path;

use calamine::{Data, ExcelDateTime, Reader, open_workbook_auto};
use chrono::NaiveTime;

use crate::error::AppError;
use crate::sheet::model::{CellValue, Sheet, classify_serial};
use crate::utils::{debug_enabled, parse_date, parse_datetime};

fn convert(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) if dt.is_duration() => CellValue::Number(dt.as_f64()),
        Data::DateTime(dt) => convert_datetime(dt),
        Data::DateTimeIso(s) => parse_iso(s),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}

/// `as_datetime` applies the workbook's date system (1900 or 1904).
fn convert_datetime(dt: &ExcelDateTime) -> CellValue {
    match dt.as_datetime() {
        Some(resolved) => classify_serial(dt.as_f64(), resolved),
        None => CellValue::Number(dt.as_f64()),
    }
}

/// ISO 8601 cells (ODS files) carry a date, a time, or both.
fn parse_iso(s: &str) -> CellValue {
    if let Some(dt) = parse_datetime(s) {
        return CellValue::DateTime(dt);
    }
    if let Some(d) = parse_date(s) {
        return CellValue::Date(d);
    }
    match NaiveTime::parse_from_str(s.trim(), "%H:%M:%S%.f") {
        Ok(t) => CellValue::Time(t),
        Err(_) => CellValue::Text(s.to_string()),
    }
}

/// Load the first worksheet of a workbook (xlsx, xlsm, xls or ods).
pub(crate) fn read_sheet(path: &Path) -> Result<Sheet, AppError> {
    let mut workbook = open_workbook_auto(path)?;
    let Some(name) = workbook.sheet_names().first().cloned() else {
        return Err(AppError::EmptyWorkbook {
            path: path.to_path_buf(),
        });
    };
    let range = workbook.worksheet_range(&name)?;
    let origin = range.start().unwrap_or((0, 0));

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|cells| cells.iter().map(|c| convert(c).as_text()).collect())
        .unwrap_or_default();
    let rows: Vec<Vec<CellValue>> = rows
        .map(|cells| cells.iter().map(convert).collect())
        .collect();

    if debug_enabled() {
        eprintln!(
            "Read sheet \"{}\" from {}: {} columns, {} rows",
            name,
            path.display(),
            headers.len(),
            rows.len()
        );
        eprintln!("Columns: {}", headers.join(" | "));
    }

    Ok(Sheet {
        name,
        origin,
        headers,
        rows,
    })
}
