//! Loading resumes and job postings from disk as plain text.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::DocumentError;

/// Read a document file and return its text.
///
/// Text formats (`.txt`, `.text`, `.md`) are read as UTF-8. PDFs are
/// supported when the `pdf` feature is enabled.
pub fn load_text(path: &Path) -> Result<String, DocumentError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    debug!("Loading {} as {:?}", path.display(), extension);

    match extension.as_str() {
        "txt" | "text" | "md" => {
            let bytes = fs::read(path)?;
            String::from_utf8(bytes).map_err(|e| DocumentError::Encoding(e.to_string()))
        }
        "pdf" => load_pdf(path),
        other => Err(DocumentError::UnsupportedFormat(if other.is_empty() {
            path.display().to_string()
        } else {
            other.to_string()
        })),
    }
}

#[cfg(feature = "pdf")]
fn load_pdf(path: &Path) -> Result<String, DocumentError> {
    let data = fs::read(path)?;
    pdf_extract::extract_text_from_mem(&data).map_err(|e| DocumentError::Pdf(e.to_string()))
}

#[cfg(not(feature = "pdf"))]
fn load_pdf(_path: &Path) -> Result<String, DocumentError> {
    Err(DocumentError::UnsupportedFormat(
        "pdf (built without the `pdf` feature)".to_string(),
    ))
}
