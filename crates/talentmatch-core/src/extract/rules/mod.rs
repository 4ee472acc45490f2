//! Rule-based field extractors for resumes and job postings.

pub mod contact;
pub mod list;
pub mod name;
pub mod patterns;
pub mod section;
pub mod years;

pub use contact::{extract_email, extract_phone, EmailExtractor, PhoneExtractor};
pub use list::{split_job_skills, split_list, ListTokenizer};
pub use name::{extract_name_heuristic, NameExtractor};
pub use section::{extract_section, SectionExtractor, JOB_POSTING_HEADERS, RESUME_HEADERS};
pub use years::{extract_years_of_experience, YearsExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A matched field value with its location in the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, confidence: f32, source: impl Into<String>) -> Self {
        Self {
            value,
            confidence,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
