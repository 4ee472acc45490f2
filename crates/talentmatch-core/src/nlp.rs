//! Pluggable person-name detection.
//!
//! No model ships with this crate. Callers that have a named-entity
//! recognizer can wrap it in a [`NameDetector`] and hand it to
//! [`crate::extract::ResumeParser::with_name_detector`]; without one, name
//! extraction relies on the line heuristic alone.

/// Detects a person name in a span of text.
pub trait NameDetector: Send + Sync {
    /// Return the first person name found in `text`, if any.
    fn detect(&self, text: &str) -> Option<String>;

    /// Whether the detector is loaded and usable.
    fn is_available(&self) -> bool {
        true
    }
}

/// Detector used when no model is configured. Never finds anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoNameDetector;

impl NameDetector for NoNameDetector {
    fn detect(&self, _text: &str) -> Option<String> {
        None
    }

    fn is_available(&self) -> bool {
        false
    }
}

impl<F> NameDetector for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn detect(&self, text: &str) -> Option<String> {
        self(text)
    }
}
