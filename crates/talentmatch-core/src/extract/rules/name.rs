//! Candidate name extraction.

use tracing::debug;

use super::patterns::{NAME_TOKEN, PHONE_LIKE_GROUPING};
use crate::models::candidate::UNKNOWN_NAME;
use crate::nlp::NameDetector;

/// Words that mark a detected span as a job title rather than a name.
const JOB_TITLE_WORDS: &[&str] = &[
    "Developer",
    "Engineer",
    "Manager",
    "Analyst",
    "Designer",
    "Architect",
];

/// Finds the candidate's name near the top of a resume.
#[derive(Debug, Clone, Copy)]
pub struct NameExtractor {
    max_lines: usize,
    window_chars: usize,
}

impl NameExtractor {
    pub fn new() -> Self {
        Self {
            max_lines: 5,
            window_chars: 500,
        }
    }

    /// Number of leading non-empty lines inspected by the heuristic.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Number of leading characters handed to the name detector.
    pub fn with_window_chars(mut self, window_chars: usize) -> Self {
        self.window_chars = window_chars;
        self
    }

    /// Heuristic first, detector second, "Unknown" last.
    pub fn extract(&self, text: &str, detector: &dyn NameDetector) -> String {
        if let Some(name) = extract_name_heuristic(text, self.max_lines) {
            return name;
        }

        if !detector.is_available() {
            debug!("No name detector available, name left as {}", UNKNOWN_NAME);
            return UNKNOWN_NAME.to_string();
        }

        let header = leading_chars(text, self.window_chars);
        match detector.detect(header) {
            Some(name) if is_job_title(&name) => {
                debug!("Rejected detected name that looks like a job title: {}", name);
                UNKNOWN_NAME.to_string()
            }
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => UNKNOWN_NAME.to_string(),
        }
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Return the first of the leading `max_lines` non-empty lines that looks
/// like a 2-4 word name, verbatim.
pub fn extract_name_heuristic(text: &str, max_lines: usize) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(max_lines)
        .find(|line| looks_like_name(line))
        .map(str::to_string)
}

fn looks_like_name(line: &str) -> bool {
    if line.contains('@') || PHONE_LIKE_GROUPING.is_match(line) {
        return false;
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    (2..=4).contains(&words.len()) && words.iter().all(|w| NAME_TOKEN.is_match(w))
}

fn is_job_title(name: &str) -> bool {
    JOB_TITLE_WORDS.iter().any(|word| name.contains(word))
}

fn leading_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
