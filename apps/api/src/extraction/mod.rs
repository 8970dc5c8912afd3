// Resume ingestion pipeline: decode uploaded document bytes to plain text,
// then parse the text into a structured candidate record.
// No LLM involvement — both stages are deterministic and fully testable.

pub mod document;
pub mod fields;
