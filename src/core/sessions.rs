//! Session planning
//!
//! Each date's distinct start times are sorted and paired positionally with
//! the session labels. Surplus start times get no session; surplus labels
//! stay unused for that date.

use chrono::{NaiveDate, NaiveTime};

use crate::core::types::{ScheduleRow, Session};

/// Distinct dates in order of first appearance
pub(crate) fn distinct_dates(rows: &[ScheduleRow]) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    for row in rows {
        if !dates.contains(&row.date) {
            dates.push(row.date);
        }
    }
    dates
}

/// Sorted distinct start times observed on a date
pub(crate) fn start_times_for(rows: &[ScheduleRow], date: NaiveDate) -> Vec<NaiveTime> {
    let mut times: Vec<NaiveTime> = rows
        .iter()
        .filter(|r| r.date == date)
        .map(|r| r.start_time)
        .collect();
    times.sort();
    times.dedup();
    times
}

/// Sessions for every date, grouped by date and ordered by label within a date.
pub(crate) fn plan_sessions(rows: &[ScheduleRow], labels: &[String]) -> Vec<Session> {
    let mut sessions = Vec::new();
    for date in distinct_dates(rows) {
        let times = start_times_for(rows, date);
        for (label, start_time) in labels.iter().zip(times) {
            sessions.push(Session {
                date,
                label: label.clone(),
                start_time,
            });
        }
    }
    sessions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(index: usize, date: &str, time: &str) -> ScheduleRow {
        ScheduleRow {
            index,
            submission_id: format!("P{index}"),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            start_time: NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
            screen_number: None,
        }
    }

    fn labels() -> Vec<String> {
        vec!["session 1".to_string(), "session 2".to_string()]
    }

    #[test]
    fn earlier_time_is_first_session_regardless_of_row_order() {
        let rows = vec![
            row(0, "2024-05-01", "13:00"),
            row(1, "2024-05-01", "09:00"),
            row(2, "2024-05-01", "13:00"),
        ];
        let sessions = plan_sessions(&rows, &labels());
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].label, "session 1");
        assert_eq!(sessions[0].start_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(sessions[1].label, "session 2");
        assert_eq!(sessions[1].start_time, NaiveTime::from_hms_opt(13, 0, 0).unwrap());
    }

    #[test]
    fn extra_start_times_are_dropped() {
        let rows = vec![
            row(0, "2024-05-01", "09:00"),
            row(1, "2024-05-01", "11:00"),
            row(2, "2024-05-01", "15:00"),
        ];
        let sessions = plan_sessions(&rows, &labels());
        assert_eq!(sessions.len(), 2);
        assert!(sessions.iter().all(|s| s.start_time.to_string() != "15:00:00"));
    }

    #[test]
    fn single_start_time_uses_first_label_only() {
        let rows = vec![row(0, "2024-05-02", "10:00"), row(1, "2024-05-02", "10:00")];
        let sessions = plan_sessions(&rows, &labels());
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].label, "session 1");
    }

    #[test]
    fn dates_keep_first_appearance_order() {
        let rows = vec![
            row(0, "2024-05-02", "10:00"),
            row(1, "2024-05-01", "10:00"),
            row(2, "2024-05-02", "14:00"),
        ];
        let dates = distinct_dates(&rows);
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0].to_string(), "2024-05-02");

        let sessions = plan_sessions(&rows, &labels());
        let names: Vec<_> = sessions
            .iter()
            .map(|s| format!("{} {}", s.date_dir_name(), s.label))
            .collect();
        assert_eq!(
            names,
            vec![
                "2024-05-02 session 1",
                "2024-05-02 session 2",
                "2024-05-01 session 1"
            ]
        );
    }

    #[test]
    fn no_rows_no_sessions() {
        assert!(plan_sessions(&[], &labels()).is_empty());
    }
}
