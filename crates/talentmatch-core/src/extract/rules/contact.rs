//! Email and phone number extraction.

use super::patterns::{EMAIL, PHONE};
use super::{ExtractionMatch, FieldExtractor};

/// Email address extractor.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailExtractor;

impl FieldExtractor for EmailExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        EMAIL
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), 0.95, m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Phone number extractor.
///
/// Accepts an optional `+CC` prefix, a 3-digit area code (bare or in
/// parentheses) and two more groups separated by space, dot or dash.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhoneExtractor;

impl FieldExtractor for PhoneExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        PHONE
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), 0.8, m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Extract the first email address from text.
pub fn extract_email(text: &str) -> Option<String> {
    EmailExtractor.extract(text).map(|m| m.value)
}

/// Extract the first phone number from text.
pub fn extract_phone(text: &str) -> Option<String> {
    PhoneExtractor.extract(text).map(|m| m.value)
}
