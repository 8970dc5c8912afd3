//! Field Extractor: parses raw resume text into a structured candidate record.
//!
//! Pure and single-pass: one string in, one record out, no I/O, no shared
//! state. Unmatched fields resolve to the empty string, never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+").expect("email pattern"));

// Loose North-American shape: optional country code, optional parens around
// the area code, separators of space/dot/hyphen.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+\d{1,2}\s)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("phone pattern")
});

const SKILLS_LABEL: &str = "skills";
const SKILLS_WINDOW: usize = 5;
const EXPERIENCE_LABEL: &str = "experience";
const EXPERIENCE_WINDOW: usize = 9;

/// Structured output of [`extract`]. Every field defaults to the empty
/// string when the source text yields no match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub experience: String,
}

/// Parses one document's plain text into a [`CandidateRecord`].
///
/// - `name` is the first line, trimmed.
/// - `email`/`phone` are the leftmost pattern matches anywhere in the text.
/// - `skills` is the 5 lines after the first line containing "skills"
///   (case-insensitive); `experience` the 9 lines after the first line
///   containing "experience". Windows clip at end of input, only the first
///   trigger line per field counts, and one line may trigger both fields.
pub fn extract(text: &str) -> CandidateRecord {
    let lines: Vec<&str> = text.split('\n').collect();

    CandidateRecord {
        name: lines
            .first()
            .map(|line| line.trim().to_owned())
            .unwrap_or_default(),
        email: first_match(&EMAIL_RE, text),
        phone: first_match(&PHONE_RE, text),
        skills: lines_after_label(&lines, SKILLS_LABEL, SKILLS_WINDOW),
        experience: lines_after_label(&lines, EXPERIENCE_LABEL, EXPERIENCE_WINDOW),
    }
}

fn first_match(re: &Regex, text: &str) -> String {
    re.find(text)
        .map(|m| m.as_str().to_owned())
        .unwrap_or_default()
}

/// Joins up to `window` lines following the first line whose lowercase form
/// contains `label`. Clips at the end of the sequence rather than indexing
/// out of bounds.
fn lines_after_label(lines: &[&str], label: &str, window: usize) -> String {
    lines
        .iter()
        .position(|line| line.to_lowercase().contains(label))
        .map(|idx| {
            let start = (idx + 1).min(lines.len());
            let end = (idx + 1 + window).min(lines.len());
            lines[start..end].join("\n")
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const JANE_DOE: &str = "Jane Doe\njane@example.com\n555-123-4567\nSkills\nPython\nSQL\nDocker\nCommunication\nLeadership\nExperience\n5 years backend dev";

    #[test]
    fn test_empty_input_yields_all_empty_fields() {
        let record = extract("");
        assert_eq!(record, CandidateRecord::default());
    }

    #[test]
    fn test_extract_is_idempotent() {
        assert_eq!(extract(JANE_DOE), extract(JANE_DOE));
    }

    #[test]
    fn test_full_resume_fixture() {
        let record = extract(JANE_DOE);
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.email, "jane@example.com");
        assert_eq!(record.phone, "555-123-4567");
        assert_eq!(record.skills, "Python\nSQL\nDocker\nCommunication\nLeadership");
        assert_eq!(record.experience, "5 years backend dev");
    }

    #[test]
    fn test_name_is_first_line_trimmed() {
        let record = extract("   John Smith  \nsome other line");
        assert_eq!(record.name, "John Smith");
    }

    #[test]
    fn test_first_email_wins() {
        let record = extract("Header\nfirst@example.com second@example.com");
        assert_eq!(record.email, "first@example.com");
    }

    #[test]
    fn test_no_email_is_empty() {
        let record = extract("Jane Doe\nno contact info here");
        assert_eq!(record.email, "");
    }

    #[test]
    fn test_phone_with_parens_and_country_code() {
        let record = extract("Jane\n+1 (555) 123-4567");
        assert_eq!(record.phone, "+1 (555) 123-4567");
    }

    #[test]
    fn test_phone_with_dots() {
        let record = extract("Jane\n555.123.4567");
        assert_eq!(record.phone, "555.123.4567");
    }

    #[test]
    fn test_skills_window_clips_at_end_of_document() {
        // Trigger on the second-to-last line leaves a single available line.
        let record = extract("Jane\nSkills\nPython");
        assert_eq!(record.skills, "Python");
    }

    #[test]
    fn test_skills_trigger_on_last_line_is_empty() {
        let record = extract("Jane\nSkills");
        assert_eq!(record.skills, "");
    }

    #[test]
    fn test_missing_experience_leaves_other_fields_intact() {
        let record = extract("Jane Doe\njane@example.com\nSkills\nPython");
        assert_eq!(record.experience, "");
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.email, "jane@example.com");
        assert_eq!(record.skills, "Python");
    }

    #[test]
    fn test_label_match_is_case_insensitive() {
        let record = extract("Jane\nSKILLS\nRust");
        assert_eq!(record.skills, "Rust");
    }

    #[test]
    fn test_only_first_trigger_line_counts() {
        let record = extract("Jane\nSkills\nRust\nGo\nC\nZig\nNim\nOther Skills\nCOBOL");
        assert_eq!(record.skills, "Rust\nGo\nC\nZig\nNim");
    }

    #[test]
    fn test_combined_label_line_triggers_both_windows() {
        let record = extract("Jane\nSkills and Experience\nRust\nGo");
        assert_eq!(record.skills, "Rust\nGo");
        assert_eq!(record.experience, "Rust\nGo");
    }

    #[test]
    fn test_experience_window_takes_nine_lines() {
        let text = "Jane\nExperience\n1\n2\n3\n4\n5\n6\n7\n8\n9\n10";
        let record = extract(text);
        assert_eq!(record.experience, "1\n2\n3\n4\n5\n6\n7\n8\n9");
    }
}
