//! Offer letter generation. Builds a small DOCX (heading plus a few 11pt
//! body paragraphs) and writes it under the configured documents directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use docx_rs::{Docx, Paragraph, Run};

// Half-points: 22 = 11pt body, 32 = 16pt heading.
const BODY_SIZE: usize = 22;
const HEADING_SIZE: usize = 32;

/// The letter's body paragraphs, in order. Kept separate from the DOCX
/// plumbing so the wording is testable without touching the filesystem.
pub fn letter_body(name: &str, position: &str, start_date: NaiveDate, salary: f64) -> Vec<String> {
    vec![
        format!("Dear {name},"),
        format!(
            "We are excited to offer you the position of {position}. \
             Your start date will be {start_date}, with a starting salary of ${salary:.2}."
        ),
        "Please let us know if you have any questions.".to_string(),
        "Sincerely,".to_string(),
        "HR Team".to_string(),
    ]
}

/// Filename for a generated letter: spaces in the candidate name become
/// underscores, suffixed with a second-resolution timestamp.
pub fn doc_filename(name: &str, at: DateTime<Utc>) -> String {
    format!(
        "{}_{}.docx",
        name.trim().replace(' ', "_"),
        at.format("%Y%m%d%H%M%S")
    )
}

/// Writes the offer letter and returns the path of the created file.
/// Creates `dir` on first use.
pub fn write_offer_letter(
    dir: &Path,
    name: &str,
    position: &str,
    start_date: NaiveDate,
    salary: f64,
    at: DateTime<Utc>,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Cannot create documents directory '{}'", dir.display()))?;

    let path = dir.join(doc_filename(name, at));

    let mut docx = Docx::new().add_paragraph(
        Paragraph::new().add_run(Run::new().add_text("Offer Letter").bold().size(HEADING_SIZE)),
    );
    for paragraph in letter_body(name, position, start_date, salary) {
        docx = docx.add_paragraph(
            Paragraph::new().add_run(Run::new().add_text(paragraph.as_str()).size(BODY_SIZE)),
        );
    }

    let file = fs::File::create(&path)
        .with_context(|| format!("Cannot create '{}'", path.display()))?;
    docx.build()
        .pack(file)
        .map_err(|e| anyhow::anyhow!("Failed to write '{}': {e}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::extraction::document::{extract_text, DocumentKind};

    fn start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    }

    #[test]
    fn test_letter_body_mentions_all_offer_terms() {
        let body = letter_body("Jane Doe", "Backend Engineer", start_date(), 95000.0).join("\n");
        assert!(body.contains("Dear Jane Doe,"));
        assert!(body.contains("Backend Engineer"));
        assert!(body.contains("2026-09-01"));
        assert!(body.contains("$95000.00"));
    }

    #[test]
    fn test_doc_filename_replaces_spaces_and_stamps_time() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(doc_filename("Jane Doe", at), "Jane_Doe_20260102030405.docx");
    }

    #[test]
    fn test_written_letter_roundtrips_through_text_extraction() {
        let dir = tempfile::tempdir().expect("tempdir");
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();

        let path = write_offer_letter(
            dir.path(),
            "Jane Doe",
            "Backend Engineer",
            start_date(),
            95000.0,
            at,
        )
        .expect("write letter");

        let bytes = std::fs::read(&path).expect("read letter");
        let text = extract_text(DocumentKind::Docx, &bytes).expect("extract");
        assert!(text.contains("Offer Letter"));
        assert!(text.contains("Dear Jane Doe,"));
        assert!(text.contains("Backend Engineer"));
    }
}
