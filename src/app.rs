use std::path::PathBuf;

use crate::cli::{Cli, Picker, Steps};
use crate::core::{AssignOptions, RunReport, copy_and_assign_screens, rename_pdfs};
use crate::error::AppError;
use crate::output::{ReportTableOptions, output_report_json, print_report_table};
use crate::sheet::{Sheet, apply_rows, extract_rows, read_sheet, save_path, write_sheet};

/// Use the path given on the command line, otherwise ask for it.
fn resolve(
    given: Option<&PathBuf>,
    what: &'static str,
    ask: impl FnOnce() -> Option<PathBuf>,
) -> Result<PathBuf, AppError> {
    given.cloned().or_else(ask).ok_or(AppError::NoSelection { what })
}

/// Run the requested passes, asking for any location not given on the
/// command line in the order: PDF directory, schedule, output directory.
pub(crate) fn run(cli: &Cli, steps: Steps, picker: &mut dyn Picker) -> Result<RunReport, AppError> {
    let progress = cli.progress();
    let labels = cli.session_labels()?;
    let mut report = RunReport::default();

    let pdf_dir = resolve(cli.pdf_dir.as_ref(), "directory", || {
        picker.pick_directory("Select Directory with PDF Files")
    })?;

    if steps.rename {
        report.rename = Some(rename_pdfs(&pdf_dir, cli.prefix(), !progress)?);
    }
    if !steps.assign {
        return Ok(report);
    }

    let schedule = resolve(cli.schedule.as_ref(), "Excel file", || {
        picker.pick_file("Select Excel File", "Excel files (*.xlsx *.xls)")
    })?;
    let mut sheet: Sheet = read_sheet(&schedule)?;
    let rows = extract_rows(&sheet, &cli.columns, cli.time_format())?;

    let output_dir = resolve(cli.output.as_ref(), "output directory", || {
        picker.pick_directory("Select Output Directory for Poster Sessions")
    })?;

    let assignment = copy_and_assign_screens(
        &rows,
        AssignOptions {
            pdf_dir: &pdf_dir,
            output_dir: &output_dir,
            labels: &labels,
            quiet: !progress,
        },
    )?;

    apply_rows(&mut sheet, &assignment.rows, &cli.columns);
    let target = save_path(&schedule);
    write_sheet(&sheet, &target)?;

    report.assignment = Some(assignment);
    report.schedule = Some(target);
    Ok(report)
}

pub(crate) fn print_report(cli: &Cli, report: &RunReport) -> Result<(), AppError> {
    if cli.json {
        println!("{}", output_report_json(report)?);
    } else {
        print_report_table(
            report,
            ReportTableOptions {
                use_color: cli.use_color(),
            },
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse_command;
    use crate::config::Config;
    use crate::sheet::CellValue;
    use clap::Parser;
    use std::collections::VecDeque;
    use std::fs;

    /// Answers selections from a queue; an exhausted queue cancels.
    struct ScriptedPicker {
        answers: VecDeque<PathBuf>,
        asked: Vec<String>,
    }

    impl ScriptedPicker {
        fn new(answers: &[&PathBuf]) -> Self {
            ScriptedPicker {
                answers: answers.iter().map(|p| (*p).clone()).collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Picker for ScriptedPicker {
        fn pick_directory(&mut self, title: &str) -> Option<PathBuf> {
            self.asked.push(title.to_string());
            self.answers.pop_front()
        }

        fn pick_file(&mut self, title: &str, _filter: &str) -> Option<PathBuf> {
            self.asked.push(title.to_string());
            self.answers.pop_front()
        }
    }

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    struct Workspace {
        _root: tempfile::TempDir,
        pdfs: PathBuf,
        out: PathBuf,
        schedule: PathBuf,
    }

    fn workspace() -> Workspace {
        let root = tempfile::tempdir().unwrap();
        let pdfs = root.path().join("pdfs");
        let out = root.path().join("out");
        fs::create_dir(&pdfs).unwrap();
        fs::create_dir(&out).unwrap();
        for name in ["submission_A_12_3.pdf", "submission_B.pdf", "submission_C.pdf"] {
            fs::write(pdfs.join(name), name).unwrap();
        }

        let schedule = root.path().join("schedule.xlsx");
        let sheet = Sheet {
            name: "Sheet1".to_string(),
            origin: (0, 0),
            headers: vec![
                "Abstract Submission ID".to_string(),
                "date".to_string(),
                "start time (local time)".to_string(),
                "Room".to_string(),
            ],
            rows: vec![
                vec![text("B"), text("2024-05-01"), text("13:00:00"), text("Hall 1")],
                vec![text("A: 12 3"), text("2024-05-01"), text("09:00:00"), text("Hall 1")],
                vec![text("Z"), text("2024-05-01"), text("09:00:00"), text("Hall 2")],
                vec![text("C"), text("2024-05-01"), text("09:00:00"), text("Hall 2")],
            ],
        };
        write_sheet(&sheet, &schedule).unwrap();

        Workspace {
            _root: root,
            pdfs,
            out,
            schedule,
        }
    }

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["postersort", "--quiet"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().with_config(Config::default())
    }

    #[test]
    fn full_run_through_picker() {
        let ws = workspace();
        let cli = cli(&[]);
        let mut picker = ScriptedPicker::new(&[&ws.pdfs, &ws.schedule, &ws.out]);

        let report = run(&cli, parse_command(None, false), &mut picker).unwrap();

        assert_eq!(
            picker.asked,
            vec![
                "Select Directory with PDF Files",
                "Select Excel File",
                "Select Output Directory for Poster Sessions"
            ]
        );
        assert_eq!(report.rename.as_ref().map(|r| r.count()), Some(3));

        let day = ws.out.join("2024-05-01");
        assert!(day.join("session 1/1_A_12_3.pdf").is_file());
        assert!(day.join("session 1/2_C.pdf").is_file());
        assert!(day.join("session 2/1_B.pdf").is_file());

        let sheet = read_sheet(&ws.schedule).unwrap();
        let screen = sheet.column("Screen number").unwrap();
        assert_eq!(sheet.cell(0, screen), &CellValue::Number(1.0));
        assert_eq!(sheet.cell(1, screen), &CellValue::Number(1.0));
        assert_eq!(sheet.cell(2, screen), &CellValue::Empty);
        assert_eq!(sheet.cell(3, screen), &CellValue::Number(2.0));
        assert_eq!(sheet.cell(3, 3), &text("Hall 2"));
    }

    #[test]
    fn cancelled_pdf_directory() {
        let cli = cli(&[]);
        let mut picker = ScriptedPicker::new(&[]);
        let err = run(&cli, parse_command(None, false), &mut picker).unwrap_err();
        assert_eq!(err.to_string(), "No directory selected.");
    }

    #[test]
    fn cancelled_schedule_after_rename() {
        let ws = workspace();
        let cli = cli(&[]);
        let mut picker = ScriptedPicker::new(&[&ws.pdfs]);
        let err = run(&cli, parse_command(None, false), &mut picker).unwrap_err();
        assert_eq!(err.to_string(), "No Excel file selected.");
        // the rename pass already ran
        assert!(ws.pdfs.join("B.pdf").is_file());
    }

    #[test]
    fn cancelled_output_directory() {
        let ws = workspace();
        let cli = cli(&["--no-rename"]);
        let mut picker = ScriptedPicker::new(&[&ws.pdfs, &ws.schedule]);
        let err = run(&cli, parse_command(None, true), &mut picker).unwrap_err();
        assert_eq!(err.to_string(), "No output directory selected.");
    }

    #[test]
    fn paths_from_command_line_skip_the_picker() {
        let ws = workspace();
        let pdfs = ws.pdfs.to_string_lossy().into_owned();
        let cli = cli(&["rename", "-p", pdfs.as_str()]);
        let mut picker = ScriptedPicker::new(&[]);

        let report = run(&cli, parse_command(cli.command, cli.no_rename), &mut picker).unwrap();

        assert!(picker.asked.is_empty());
        assert!(report.assignment.is_none());
        assert!(ws.pdfs.join("A_12_3.pdf").is_file());
        assert!(!ws.out.join("2024-05-01").exists());
    }

    #[test]
    fn assign_without_rename_finds_nothing_prefixed() {
        let ws = workspace();
        let cli = cli(&[]);
        let mut picker = ScriptedPicker::new(&[&ws.pdfs, &ws.schedule, &ws.out]);
        let steps = Steps {
            rename: false,
            assign: true,
        };

        let report = run(&cli, steps, &mut picker).unwrap();

        let assignment = report.assignment.unwrap();
        assert!(assignment.placements.is_empty());
        assert_eq!(assignment.missing.len(), 4);
        // session directories exist even when nothing was copied
        assert!(ws.out.join("2024-05-01/session 2").is_dir());
    }
}
