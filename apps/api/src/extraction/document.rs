//! Document text extraction: decodes uploaded resume bytes into the
//! newline-separated plain text the field extractor consumes.

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to extract text from PDF: {0}")]
    Pdf(String),

    #[error("Failed to parse DOCX document: {0}")]
    Docx(String),
}

/// Supported upload formats, detected from the filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Maps a filename to its document kind by extension, case-insensitively.
    /// Returns `None` for anything other than `.pdf` / `.docx`.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = std::path::Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }
}

/// Decodes document bytes into plain text with lines joined by `\n`.
pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, DocumentError> {
    match kind {
        DocumentKind::Pdf => {
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| DocumentError::Pdf(e.to_string()))
        }
        DocumentKind::Docx => extract_docx_text(bytes),
    }
}

/// Walks the docx tree (paragraph → run → text), one output line per
/// paragraph. Empty paragraphs are kept so line offsets in the source
/// document survive into the extracted text.
fn extract_docx_text(bytes: &[u8]) -> Result<String, DocumentError> {
    let docx = read_docx(bytes).map_err(|e| DocumentError::Docx(format!("{e:?}")))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(para) = child {
            let mut parts: Vec<&str> = Vec::new();
            for pc in &para.children {
                if let ParagraphChild::Run(run) = pc {
                    for rc in &run.children {
                        if let RunChild::Text(t) = rc {
                            parts.push(&t.text);
                        }
                    }
                }
            }
            paragraphs.push(parts.concat());
        }
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_pdf_filename() {
        assert_eq!(
            DocumentKind::from_filename("resume.pdf"),
            Some(DocumentKind::Pdf)
        );
    }

    #[test]
    fn test_kind_from_docx_filename() {
        assert_eq!(
            DocumentKind::from_filename("resume.docx"),
            Some(DocumentKind::Docx)
        );
    }

    #[test]
    fn test_kind_ignores_extension_case() {
        assert_eq!(
            DocumentKind::from_filename("Resume.PDF"),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::from_filename("Resume.DocX"),
            Some(DocumentKind::Docx)
        );
    }

    #[test]
    fn test_kind_rejects_other_extensions() {
        assert_eq!(DocumentKind::from_filename("resume.txt"), None);
        assert_eq!(DocumentKind::from_filename("resume"), None);
    }

    #[test]
    fn test_docx_garbage_bytes_is_error_not_panic() {
        let result = extract_docx_text(b"not a zip archive");
        assert!(matches!(result, Err(DocumentError::Docx(_))));
    }
}
