//! Job posting parser producing [`JobRequirement`] records.

use tracing::{debug, info, warn};

use super::rules::patterns::{BULLET_PREFIX, JOB_TITLE_LABEL};
use super::rules::{extract_years_of_experience, split_job_skills, SectionExtractor};
use super::DocumentParser;
use crate::models::job::DEFAULT_TITLE;
use crate::models::JobRequirement;

const SKILL_LABELS: &[&str] = &[
    "required skills",
    "required skill",
    "skills",
    "skill",
    "technical skills",
    "technical skill",
    "requirements",
    "requirement",
    "qualifications",
    "qualification",
];

const RESPONSIBILITY_LABELS: &[&str] = &["responsibilities", "duties", "you will", "what you'll do"];

/// Minimum character count for a responsibility line to be kept.
const MIN_RESPONSIBILITY_LEN: usize = 10;

/// Rule-based job posting parser.
#[derive(Debug, Clone)]
pub struct JobPostingParser {
    sections: SectionExtractor,
}

impl JobPostingParser {
    pub fn new() -> Self {
        Self {
            sections: SectionExtractor::job_posting(),
        }
    }

    /// Job title from a "Job Title:" / "Position:" / "Role:" line, else the
    /// first reasonably sized line, else "Position".
    pub fn extract_title(&self, text: &str) -> String {
        let labeled = text.lines().find_map(|line| {
            JOB_TITLE_LABEL
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim())
                .filter(|title| !title.is_empty())
        });

        if let Some(title) = labeled {
            return title.to_string();
        }

        text.lines()
            .map(str::trim)
            .find(|line| {
                let len = line.chars().count();
                len > 3 && len < 100
            })
            .unwrap_or(DEFAULT_TITLE)
            .to_string()
    }

    /// Required skills from the first skills/requirements section.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let section = self.sections.extract(text, SKILL_LABELS);
        split_job_skills(&section)
    }

    /// Bullet lines from the responsibilities section, glyphs stripped.
    pub fn extract_responsibilities(&self, text: &str) -> Vec<String> {
        let section = self.sections.extract(text, RESPONSIBILITY_LABELS);

        section
            .lines()
            .map(|line| BULLET_PREFIX.replace(line.trim(), "").trim().to_string())
            .filter(|line| line.chars().count() > MIN_RESPONSIBILITY_LEN)
            .collect()
    }
}

impl Default for JobPostingParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for JobPostingParser {
    type Record = JobRequirement;

    fn parse(&self, text: &str) -> JobRequirement {
        let mut job = JobRequirement {
            raw_text: text.to_string(),
            ..JobRequirement::default()
        };

        if text.trim().is_empty() {
            warn!("Empty text provided for job posting parsing");
            return job;
        }

        job.title = self.extract_title(text);
        job.required_skills = self.extract_skills(text);
        job.required_years = extract_years_of_experience(text);
        job.responsibilities = self.extract_responsibilities(text);

        info!(
            "Parsed job posting '{}' with {} required skills",
            job.title,
            job.required_skills.len()
        );
        debug!(
            "Required years: {}, responsibilities: {}",
            job.required_years,
            job.responsibilities.len()
        );

        job
    }
}

/// A job is usable for matching when it has a title and at least one
/// required skill.
pub fn is_valid(job: &JobRequirement) -> bool {
    !job.title.trim().is_empty() && job.has_required_skills()
}
