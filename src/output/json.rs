use serde_json::{Value, json};

use crate::consts::DATE_FORMAT;
use crate::core::{MissingPdf, Placement, Rename, RenameReport, RunReport, Unscheduled};
use crate::error::AppError;

fn rename_json(r: &Rename) -> Value {
    json!({ "from": r.from, "to": r.to })
}

fn renamed_json(report: &RenameReport) -> Value {
    report.renamed.iter().map(rename_json).collect()
}

fn placement_json(p: &Placement) -> Value {
    json!({
        "submission_id": p.submission_id,
        "row": p.row_index + 2,
        "date": p.date.format(DATE_FORMAT).to_string(),
        "session": p.label,
        "screen_number": p.screen_number,
        "source": p.source.display().to_string(),
        "destination": p.destination.display().to_string(),
    })
}

fn missing_json(m: &MissingPdf) -> Value {
    json!({
        "submission_id": m.submission_id,
        "session": m.label,
        "expected": m.expected.display().to_string(),
        // 1-based spreadsheet row, header is row 1
        "row": m.row_index + 2,
    })
}

fn unscheduled_json(u: &Unscheduled) -> Value {
    json!({
        "submission_id": u.submission_id,
        "date": u.date.format(DATE_FORMAT).to_string(),
        "start_time": u.start_time.format("%H:%M:%S").to_string(),
        "row": u.row_index + 2,
    })
}

pub(crate) fn output_report_json(report: &RunReport) -> Result<String, AppError> {
    let mut obj = json!({});

    if let Some(rename) = &report.rename {
        obj["renamed"] = renamed_json(rename);
        obj["rename_skipped"] = rename
            .skipped
            .iter()
            .map(|p| Value::String(p.display().to_string()))
            .collect();
    }

    if let Some(assignment) = &report.assignment {
        obj["placements"] = assignment.placements.iter().map(placement_json).collect();
        obj["missing"] = assignment.missing.iter().map(missing_json).collect();
        obj["unscheduled"] = assignment.unscheduled.iter().map(unscheduled_json).collect();
        obj["created_directories"] = assignment
            .created_dirs
            .iter()
            .map(|d| Value::String(d.display().to_string()))
            .collect();
    }

    if let Some(path) = &report.schedule {
        obj["schedule"] = json!(path.display().to_string());
    }

    Ok(serde_json::to_string_pretty(&obj)?)
}
