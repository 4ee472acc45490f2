//! Candidate record extracted from a resume.

use serde::{Deserialize, Serialize};

/// Name used when no name could be detected in a resume.
pub const UNKNOWN_NAME: &str = "Unknown";

/// A candidate with the information extracted from their resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Store-assigned identifier (0 until persisted).
    #[serde(default)]
    pub id: u32,

    /// Full name, or "Unknown".
    pub name: String,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone number as written in the resume.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Skills in document order.
    #[serde(default)]
    pub skills: Vec<String>,

    /// Education entries in document order.
    #[serde(default)]
    pub education: Vec<String>,

    /// Work experience entries in document order.
    #[serde(default)]
    pub work_experience: Vec<String>,
}

impl Candidate {
    /// Create an empty, unpersisted candidate.
    pub fn new() -> Self {
        Self {
            id: 0,
            name: UNKNOWN_NAME.to_string(),
            email: None,
            phone: None,
            skills: Vec::new(),
            education: Vec::new(),
            work_experience: Vec::new(),
        }
    }

    /// Set the skill list.
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Set the work experience list.
    pub fn with_experience<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.work_experience = entries.into_iter().map(Into::into).collect();
        self
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Whether the candidate has at least one non-blank experience entry.
    pub fn has_work_experience(&self) -> bool {
        self.work_experience.iter().any(|e| !e.trim().is_empty())
    }

    /// Skills joined with ", ".
    pub fn skills_display(&self) -> String {
        self.skills.join(", ")
    }

    /// Education entries joined with " | ".
    pub fn education_display(&self) -> String {
        self.education.join(" | ")
    }

    /// Work experience entries joined with " | ".
    pub fn experience_display(&self) -> String {
        self.work_experience.join(" | ")
    }
}

impl Default for Candidate {
    fn default() -> Self {
        Self::new()
    }
}
