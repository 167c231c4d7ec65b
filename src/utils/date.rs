use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%Y%m%d"];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse a calendar date from spreadsheet text, dropping any time part.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    // YYYYMMDD only when it is exactly eight digits
    for format in DATE_FORMATS {
        if format == "%Y%m%d" && s.len() != 8 {
            continue;
        }
        if let Ok(d) = NaiveDate::parse_from_str(s, format) {
            return Some(d);
        }
    }
    parse_datetime(s).map(|dt| dt.date())
}

pub(crate) fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
}

/// Parse a time of day with the configured format, falling back to `HH:MM`.
pub(crate) fn parse_time(s: &str, format: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, format)
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_date_iso() {
        assert_eq!(parse_date("2024-05-01"), Some(ymd(2024, 5, 1)));
        assert_eq!(parse_date(" 2024-05-01 "), Some(ymd(2024, 5, 1)));
    }

    #[test]
    fn parse_date_other_layouts() {
        assert_eq!(parse_date("2024/05/01"), Some(ymd(2024, 5, 1)));
        assert_eq!(parse_date("05/01/2024"), Some(ymd(2024, 5, 1)));
        assert_eq!(parse_date("20240501"), Some(ymd(2024, 5, 1)));
    }

    #[test]
    fn parse_date_drops_time_part() {
        assert_eq!(parse_date("2024-05-01 13:30:00"), Some(ymd(2024, 5, 1)));
        assert_eq!(parse_date("2024-05-01T09:00:00"), Some(ymd(2024, 5, 1)));
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert_eq!(parse_date("next tuesday"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2024-13-01"), None);
    }

    #[test]
    fn parse_time_formats() {
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert_eq!(parse_time("09:00:00", "%H:%M:%S"), Some(nine));
        assert_eq!(parse_time("09:00", "%H:%M:%S"), Some(nine));
        assert_eq!(parse_time("9.00", "%H.%M"), Some(nine));
        assert_eq!(parse_time("morning", "%H:%M:%S"), None);
    }
}
