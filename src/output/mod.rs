mod format;
mod json;
mod table;

pub(crate) use json::output_report_json;
pub(crate) use table::{ReportTableOptions, print_report_table};
