//! Resume and job posting field extraction.

mod job;
mod resume;
pub mod rules;

pub use job::{is_valid, JobPostingParser};
pub use resume::ResumeParser;

/// Trait for turning raw document text into a structured record.
///
/// Parsing never fails: text that yields nothing produces a record with
/// default values.
pub trait DocumentParser {
    /// The record type produced.
    type Record;

    /// Parse a record from plain text.
    fn parse(&self, text: &str) -> Self::Record;
}
