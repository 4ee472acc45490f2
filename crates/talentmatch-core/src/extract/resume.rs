//! Resume parser producing [`Candidate`] records.

use std::time::Instant;

use tracing::{debug, info, warn};

use super::rules::patterns::{DEGREE_KEYWORD, YEAR_RUN};
use super::rules::{extract_email, extract_phone, split_list, NameExtractor, SectionExtractor};
use super::DocumentParser;
use crate::models::config::ExtractionConfig;
use crate::models::Candidate;
use crate::nlp::{NameDetector, NoNameDetector};

const SKILL_LABELS: &[&str] = &[
    "skills",
    "skill",
    "technical skills",
    "technical skill",
    "key skills",
    "key skill",
];

const EDUCATION_LABELS: &[&str] = &[
    "education",
    "academic background",
    "qualifications",
    "qualification",
];

const EXPERIENCE_LABELS: &[&str] = &[
    "work experience",
    "professional experience",
    "employment history",
    "experience",
];

/// Rule-based resume parser with an optional name detector.
pub struct ResumeParser {
    sections: SectionExtractor,
    names: NameExtractor,
    detector: Box<dyn NameDetector>,
    min_education_line_len: usize,
    experience_entry_min_len: usize,
}

impl ResumeParser {
    /// Create a parser with default settings and no name detector.
    pub fn new() -> Self {
        Self::with_config(&ExtractionConfig::default())
    }

    /// Create a parser from extraction settings.
    pub fn with_config(config: &ExtractionConfig) -> Self {
        warn!("No name detector configured, using heuristic name extraction only");
        Self {
            sections: SectionExtractor::resume(),
            names: NameExtractor::new()
                .with_max_lines(config.name_scan_lines)
                .with_window_chars(config.detector_window_chars),
            detector: Box::new(NoNameDetector),
            min_education_line_len: config.min_education_line_len,
            experience_entry_min_len: config.experience_entry_min_len,
        }
    }

    /// Use `detector` when the line heuristic finds no name.
    pub fn with_name_detector(mut self, detector: impl NameDetector + 'static) -> Self {
        if !detector.is_available() {
            warn!("Name detector is not available, falling back to heuristic name extraction");
        }
        self.detector = Box::new(detector);
        self
    }

    /// Whether a usable name detector is installed.
    pub fn has_name_detector(&self) -> bool {
        self.detector.is_available()
    }

    fn extract_skills(&self, text: &str) -> Vec<String> {
        let section = self.sections.extract(text, SKILL_LABELS);
        split_list(&section)
    }

    fn extract_education(&self, text: &str) -> Vec<String> {
        let section = self.sections.extract(text, EDUCATION_LABELS);

        section
            .lines()
            .map(str::trim)
            .filter(|line| line.chars().count() > self.min_education_line_len)
            .filter(|line| DEGREE_KEYWORD.is_match(line) || YEAR_RUN.is_match(line))
            .map(str::to_string)
            .collect()
    }

    fn extract_work_experience(&self, text: &str) -> Vec<String> {
        let section = self.sections.extract(text, EXPERIENCE_LABELS);

        let mut entries = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in section.lines().map(str::trim) {
            let starts_entry = YEAR_RUN.is_match(line)
                || line.chars().count() > self.experience_entry_min_len;

            if starts_entry {
                if !current.is_empty() {
                    entries.push(current.join(" "));
                    current.clear();
                }
                current.push(line);
            } else if !line.is_empty() {
                current.push(line);
            }
        }

        if !current.is_empty() {
            entries.push(current.join(" "));
        }

        entries
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for ResumeParser {
    type Record = Candidate;

    fn parse(&self, text: &str) -> Candidate {
        let start = Instant::now();
        let mut candidate = Candidate::new();

        if text.trim().is_empty() {
            warn!("Empty text provided for resume parsing");
            return candidate;
        }

        info!("Parsing resume from {} characters of text", text.len());

        candidate.name = self.names.extract(text, self.detector.as_ref());
        candidate.email = extract_email(text);
        candidate.phone = extract_phone(text);
        candidate.skills = self.extract_skills(text);
        candidate.education = self.extract_education(text);
        candidate.work_experience = self.extract_work_experience(text);

        debug!(
            "Parsed candidate {} ({} skills, {} education, {} experience) in {:?}",
            candidate.name,
            candidate.skills.len(),
            candidate.education.len(),
            candidate.work_experience.len(),
            start.elapsed()
        );

        candidate
    }
}
