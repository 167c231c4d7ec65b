use crate::consts::PDF_EXTENSION;

/// Turn a submission identifier into the stem its PDF is saved under.
pub(crate) fn sanitize_identifier(id: &str) -> String {
    id.replace(' ', "_").replace([':', '\n'], "")
}

/// Expected PDF file name for a submission identifier
pub(crate) fn pdf_file_name(id: &str) -> String {
    format!("{}.{PDF_EXTENSION}", sanitize_identifier(id))
}
