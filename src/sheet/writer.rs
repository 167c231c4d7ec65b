use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::AppError;
use crate::sheet::model::{CellValue, Sheet, date_to_serial, datetime_to_serial, time_to_serial};

/// Write `sheet` as a single-worksheet xlsx file, replacing `path`.
///
/// The table is placed back at `sheet.origin`. Error cells such as `#N/A`
/// have no writable counterpart and are saved as their text.
pub(crate) fn write_sheet(sheet: &Sheet, path: &Path) -> Result<(), AppError> {
    let header_format = Format::new().set_bold();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let time_format = Format::new().set_num_format("hh:mm:ss");
    let datetime_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    if !sheet.name.is_empty() {
        worksheet.set_name(&sheet.name)?;
    }

    let (top, left) = sheet.origin;
    let left = left as u16;

    for (col, title) in sheet.headers.iter().enumerate() {
        worksheet.write_string_with_format(top, left + col as u16, title, &header_format)?;
    }

    for (idx, cells) in sheet.rows.iter().enumerate() {
        let row = top + idx as u32 + 1;
        for (col, cell) in cells.iter().enumerate() {
            let col = left + col as u16;
            match cell {
                CellValue::Empty => {}
                CellValue::Text(s) | CellValue::Error(s) => {
                    worksheet.write_string(row, col, s)?;
                }
                CellValue::Number(n) => {
                    worksheet.write_number(row, col, *n)?;
                }
                CellValue::Bool(b) => {
                    worksheet.write_boolean(row, col, *b)?;
                }
                CellValue::Date(d) => {
                    worksheet.write_number_with_format(row, col, date_to_serial(*d), &date_format)?;
                }
                CellValue::Time(t) => {
                    worksheet.write_number_with_format(row, col, time_to_serial(*t), &time_format)?;
                }
                CellValue::DateTime(dt) => {
                    worksheet.write_number_with_format(
                        row,
                        col,
                        datetime_to_serial(*dt),
                        &datetime_format,
                    )?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}
