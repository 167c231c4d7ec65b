//! Copy scheduled PDFs into `<output>/<date>/<session>/` and number the screens.

use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::DATE_FORMAT;
use crate::core::sanitize::pdf_file_name;
use crate::core::sessions::{distinct_dates, plan_sessions, start_times_for};
use crate::core::types::{AssignmentReport, MissingPdf, Placement, ScheduleRow, Unscheduled};
use crate::error::AppError;

#[derive(Debug, Clone, Copy)]
pub(crate) struct AssignOptions<'a> {
    pub(crate) pdf_dir: &'a Path,
    pub(crate) output_dir: &'a Path,
    pub(crate) labels: &'a [String],
    pub(crate) quiet: bool,
}

fn ensure_dir(path: &Path, created: &mut Vec<PathBuf>, quiet: bool) -> Result<(), AppError> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir(path).map_err(|e| AppError::io("create directory", path, e))?;
    if !quiet {
        eprintln!("Created directory: {}", path.display());
    }
    created.push(path.to_path_buf());
    Ok(())
}

/// Rows whose start time has no session label on their date
fn find_unscheduled(rows: &[ScheduleRow], label_count: usize) -> Vec<Unscheduled> {
    let mut unscheduled = Vec::new();
    for date in distinct_dates(rows) {
        let times = start_times_for(rows, date);
        let overflow = times.get(label_count..).unwrap_or_default();
        for row in rows
            .iter()
            .filter(|r| r.date == date && overflow.contains(&r.start_time))
        {
            unscheduled.push(Unscheduled {
                row_index: row.index,
                submission_id: row.submission_id.clone(),
                date: row.date,
                start_time: row.start_time,
            });
        }
    }
    unscheduled
}

/// Copy each row's PDF into its session directory and assign screen numbers.
///
/// Screen numbers start at 1 per (date, session) and advance only when a PDF
/// is actually copied, so rows with a missing PDF leave no gap. The input is
/// not modified; the report carries an annotated copy of `rows`. Existing
/// destination files are overwritten.
pub(crate) fn copy_and_assign_screens(
    rows: &[ScheduleRow],
    opts: AssignOptions<'_>,
) -> Result<AssignmentReport, AppError> {
    for dir in [opts.pdf_dir, opts.output_dir] {
        if !dir.is_dir() {
            return Err(AppError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }
    }

    let sessions = plan_sessions(rows, opts.labels);
    let mut report = AssignmentReport {
        rows: rows.to_vec(),
        unscheduled: find_unscheduled(rows, opts.labels.len()),
        ..AssignmentReport::default()
    };

    for date in distinct_dates(rows) {
        let date_dir = opts.output_dir.join(date.format(DATE_FORMAT).to_string());
        ensure_dir(&date_dir, &mut report.created_dirs, opts.quiet)?;
        for session in sessions.iter().filter(|s| s.date == date) {
            ensure_dir(&date_dir.join(&session.label), &mut report.created_dirs, opts.quiet)?;
        }
    }

    for session in &sessions {
        let session_dir = opts
            .output_dir
            .join(session.date_dir_name())
            .join(&session.label);
        let mut screen_number = 1;

        for (pos, row) in rows.iter().enumerate() {
            if row.date != session.date || row.start_time != session.start_time {
                continue;
            }
            let pdf_name = pdf_file_name(&row.submission_id);
            let source = opts.pdf_dir.join(&pdf_name);

            if !source.is_file() {
                if !opts.quiet {
                    eprintln!("PDF {} not found in {}", pdf_name, opts.pdf_dir.display());
                }
                report.missing.push(MissingPdf {
                    row_index: row.index,
                    submission_id: row.submission_id.clone(),
                    label: session.label.clone(),
                    expected: source,
                });
                continue;
            }

            let destination = session_dir.join(format!("{screen_number}_{pdf_name}"));
            fs::copy(&source, &destination).map_err(|e| AppError::io("copy", &source, e))?;
            if !opts.quiet {
                eprintln!("Copied {} to {}", pdf_name, destination.display());
            }

            report.rows[pos].screen_number = Some(screen_number);
            report.placements.push(Placement {
                row_index: row.index,
                submission_id: row.submission_id.clone(),
                date: session.date,
                label: session.label.clone(),
                screen_number,
                source,
                destination,
            });
            screen_number += 1;
        }
    }

    if !opts.quiet {
        for row in &report.unscheduled {
            eprintln!(
                "Warning: {} starts at {} on {}, after the last session; not placed",
                row.submission_id, row.start_time, row.date
            );
        }
        eprintln!("All PDFs copied and screens assigned successfully.");
    }
    Ok(report)
}
