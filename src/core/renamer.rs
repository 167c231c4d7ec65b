use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::PDF_EXTENSION;
use crate::core::types::{Rename, RenameReport};
use crate::error::AppError;

/// Prefixed PDFs whose names are not valid UTF-8. glob never yields these.
fn non_utf8_matches(directory: &Path, prefix: &str) -> Result<Vec<PathBuf>, AppError> {
    let suffix = format!(".{PDF_EXTENSION}");
    let mut found = Vec::new();
    let entries =
        fs::read_dir(directory).map_err(|e| AppError::io("read directory", directory, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| AppError::io("read directory", directory, e))?;
        let name = entry.file_name();
        if name.to_str().is_some() {
            continue;
        }
        let lossy = name.to_string_lossy();
        if lossy.starts_with(prefix) && lossy.ends_with(&suffix) && entry.path().is_file() {
            found.push(entry.path());
        }
    }
    found.sort();
    Ok(found)
}

/// Strip `prefix` from every `<prefix>*.pdf` in `directory`, renaming in place.
pub(crate) fn rename_pdfs(
    directory: &Path,
    prefix: &str,
    quiet: bool,
) -> Result<RenameReport, AppError> {
    if !directory.is_dir() {
        return Err(AppError::DirectoryNotFound {
            path: directory.to_path_buf(),
        });
    }

    let pattern = format!(
        "{}/{}*.{PDF_EXTENSION}",
        glob::Pattern::escape(&directory.to_string_lossy()),
        glob::Pattern::escape(prefix)
    );
    let mut matches = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        if path.is_file() {
            matches.push(path);
        }
    }
    matches.sort();

    let mut report = RenameReport {
        skipped: non_utf8_matches(directory, prefix)?,
        ..RenameReport::default()
    };
    for old_path in matches {
        let Some(file_name) = old_path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(new_name) = file_name.strip_prefix(prefix) else {
            continue;
        };
        let new_path = directory.join(new_name);
        fs::rename(&old_path, &new_path).map_err(|e| AppError::io("rename", &old_path, e))?;
        if !quiet {
            eprintln!("Renamed: {file_name} -> {new_name}");
        }
        report.renamed.push(Rename {
            from: file_name.to_string(),
            to: new_name.to_string(),
        });
    }

    if !quiet {
        for path in &report.skipped {
            eprintln!(
                "Warning: skipped {}: file name is not valid UTF-8",
                path.display()
            );
        }
        eprintln!("Renamed {} files.", report.count());
    }
    Ok(report)
}
