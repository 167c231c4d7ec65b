use comfy_table::{Cell, Color, Table};

use crate::consts::DATE_FORMAT;
use crate::core::{AssignmentReport, Placement, RunReport};
use crate::output::format::{create_styled_table, header_cell, plural, right_cell, styled_cell};

#[derive(Debug, Clone, Copy)]
pub(crate) struct ReportTableOptions {
    pub(crate) use_color: bool,
}

fn file_name(placement: &Placement) -> String {
    placement
        .destination
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn placement_table(assignment: &AssignmentReport, use_color: bool) -> Table {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Date", use_color),
        header_cell("Session", use_color),
        header_cell("Screen", use_color),
        header_cell("Submission", use_color),
        header_cell("File", use_color),
    ]);

    let mut placements: Vec<&Placement> = assignment.placements.iter().collect();
    placements.sort_by(|a, b| {
        (a.date, &a.label, a.screen_number).cmp(&(b.date, &b.label, b.screen_number))
    });

    for p in placements {
        table.add_row(vec![
            Cell::new(p.date.format(DATE_FORMAT).to_string()),
            Cell::new(&p.label),
            right_cell(&p.screen_number.to_string(), None),
            Cell::new(&p.submission_id),
            Cell::new(file_name(p)),
        ]);
    }

    let red = if use_color { Some(Color::Red) } else { None };
    for m in &assignment.missing {
        table.add_row(vec![
            Cell::new(""),
            Cell::new(&m.label),
            styled_cell("-", red),
            Cell::new(&m.submission_id),
            styled_cell("not found", red),
        ]);
    }

    let yellow = if use_color { Some(Color::Yellow) } else { None };
    for u in &assignment.unscheduled {
        table.add_row(vec![
            Cell::new(u.date.format(DATE_FORMAT).to_string()),
            styled_cell(&u.start_time.format("%H:%M").to_string(), yellow),
            styled_cell("-", yellow),
            Cell::new(&u.submission_id),
            styled_cell("no session", yellow),
        ]);
    }

    table
}

/// One-line summary of what the run did
pub(crate) fn summary_line(report: &RunReport) -> String {
    let mut parts = Vec::new();
    if let Some(rename) = &report.rename {
        parts.push(format!("{} renamed", plural(rename.count(), "file")));
        if !rename.skipped.is_empty() {
            parts.push(format!("{} skipped", rename.skipped.len()));
        }
    }
    if let Some(assignment) = &report.assignment {
        parts.push(format!("{} placed", plural(assignment.placements.len(), "PDF")));
        parts.push(format!("{} not found", assignment.missing.len()));
        if !assignment.unscheduled.is_empty() {
            parts.push(format!(
                "{} without a session",
                plural(assignment.unscheduled.len(), "row")
            ));
        }
    }
    parts.join(" | ")
}

pub(crate) fn print_report_table(report: &RunReport, options: ReportTableOptions) {
    if let Some(assignment) = &report.assignment {
        let table = placement_table(assignment, options.use_color);
        println!("\n  Poster Screen Assignments\n");
        println!("{table}");
    }

    let summary = summary_line(report);
    if options.use_color {
        println!("\n  \x1b[36m{summary}\x1b[0m");
    } else {
        println!("\n  {summary}");
    }
    if let Some(path) = &report.schedule {
        println!("  Updated Excel file with screen numbers: {}", path.display());
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MissingPdf, Rename, RenameReport};
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn placement(id: &str, label: &str, screen: u32) -> Placement {
        Placement {
            row_index: 0,
            submission_id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            label: label.to_string(),
            screen_number: screen,
            source: PathBuf::from(format!("in/{id}.pdf")),
            destination: PathBuf::from(format!("out/2024-05-01/{label}/{screen}_{id}.pdf")),
        }
    }

    fn report() -> RunReport {
        RunReport {
            rename: Some(RenameReport {
                renamed: vec![Rename {
                    from: "submission_B.pdf".into(),
                    to: "B.pdf".into(),
                }],
                ..RenameReport::default()
            }),
            assignment: Some(AssignmentReport {
                placements: vec![
                    placement("B", "session 2", 1),
                    placement("A", "session 1", 1),
                ],
                missing: vec![MissingPdf {
                    row_index: 2,
                    submission_id: "C".into(),
                    label: "session 1".into(),
                    expected: PathBuf::from("in/C.pdf"),
                }],
                ..AssignmentReport::default()
            }),
            schedule: None,
        }
    }

    #[test]
    fn summary_counts() {
        assert_eq!(
            summary_line(&report()),
            "1 file renamed | 2 PDFs placed | 1 not found"
        );
    }

    #[test]
    fn summary_for_rename_only() {
        let report = RunReport {
            rename: Some(RenameReport::default()),
            ..RunReport::default()
        };
        assert_eq!(summary_line(&report), "0 files renamed");
    }

    #[test]
    fn summary_counts_skipped_renames() {
        let report = RunReport {
            rename: Some(RenameReport {
                skipped: vec![PathBuf::from("pdfs/submission_?.pdf")],
                ..RenameReport::default()
            }),
            ..RunReport::default()
        };
        assert_eq!(summary_line(&report), "0 files renamed | 1 skipped");
    }

    #[test]
    fn table_lists_placements_in_session_order() {
        let report = report();
        let rendered = placement_table(report.assignment.as_ref().unwrap(), false).to_string();
        let a = rendered.find("1_A.pdf").unwrap();
        let b = rendered.find("1_B.pdf").unwrap();
        assert!(a < b);
        assert!(rendered.contains("not found"));
    }
}
