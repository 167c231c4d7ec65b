use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

/// Spreadsheet cell value, independent of the file format
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    Error(String),
}

impl CellValue {
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Render the cell as text the way it reads in the sheet.
    pub(crate) fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Date(d) => d.to_string(),
            CellValue::Time(t) => t.format("%H:%M:%S").to_string(),
            CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            CellValue::Error(e) => e.clone(),
        }
    }
}

/// Integral values print without a fractional part ("1042", not "1042.0")
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

static EMPTY: CellValue = CellValue::Empty;

/// First worksheet of a workbook: a header row plus data rows
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Sheet {
    pub(crate) name: String,
    /// Zero-based (row, column) of the header's first cell in the worksheet
    pub(crate) origin: (u32, u32),
    pub(crate) headers: Vec<String>,
    pub(crate) rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub(crate) fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    /// Index of `name`, appending an empty column when the sheet has none.
    pub(crate) fn column_or_insert(&mut self, name: &str) -> usize {
        match self.column(name) {
            Some(idx) => idx,
            None => {
                self.headers.push(name.to_string());
                self.headers.len() - 1
            }
        }
    }

    pub(crate) fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    pub(crate) fn set_cell(&mut self, row: usize, col: usize, value: CellValue) {
        if row >= self.rows.len() {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if col >= cells.len() {
            cells.resize(col + 1, CellValue::Empty);
        }
        cells[col] = value;
    }
}

const MS_PER_DAY: f64 = 86_400_000.0;

fn excel_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap_or_default()
        .and_time(NaiveTime::MIN)
}

/// Convert an Excel serial day number (1900 date system) to a date-time.
pub(crate) fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let ms = (serial * MS_PER_DAY).round() as i64;
    excel_epoch().checked_add_signed(TimeDelta::try_milliseconds(ms)?)
}

pub(crate) fn datetime_to_serial(dt: NaiveDateTime) -> f64 {
    (dt - excel_epoch()).num_milliseconds() as f64 / MS_PER_DAY
}

pub(crate) fn date_to_serial(date: NaiveDate) -> f64 {
    datetime_to_serial(date.and_time(NaiveTime::MIN))
}

pub(crate) fn time_to_serial(time: NaiveTime) -> f64 {
    let ms = time.num_seconds_from_midnight() as f64 * 1000.0
        + (time.nanosecond() / 1_000_000) as f64;
    ms / MS_PER_DAY
}

/// Classify a serial as a bare time (< 1 day), a bare date, or a date-time.
pub(crate) fn serial_to_cell(serial: f64) -> CellValue {
    match serial_to_datetime(serial) {
        Some(dt) => classify_serial(serial, dt),
        None => CellValue::Number(serial),
    }
}

/// `dt` is `serial` already resolved against the workbook's date system.
pub(crate) fn classify_serial(serial: f64, dt: NaiveDateTime) -> CellValue {
    if serial < 1.0 {
        CellValue::Time(dt.time())
    } else if dt.time() == NaiveTime::MIN {
        CellValue::Date(dt.date())
    } else {
        CellValue::DateTime(dt)
    }
}
