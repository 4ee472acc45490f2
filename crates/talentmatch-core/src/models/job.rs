//! Job requirement record extracted from a job posting or entered by hand.

use serde::{Deserialize, Serialize};

/// Title used when no title could be detected in a posting.
pub const DEFAULT_TITLE: &str = "Position";

/// Requirements of an open position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequirement {
    /// Store-assigned identifier (0 until persisted).
    #[serde(default)]
    pub id: u32,

    /// Job title.
    pub title: String,

    /// Required skills in document order.
    #[serde(default)]
    pub required_skills: Vec<String>,

    /// Required years of experience (0 = no explicit requirement).
    #[serde(default)]
    pub required_years: u32,

    /// Key responsibilities listed in the posting.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responsibilities: Vec<String>,

    /// Source text the record was parsed from.
    #[serde(default)]
    pub raw_text: String,
}

impl JobRequirement {
    /// Create a job requirement from manually entered values.
    pub fn new<I, S>(title: impl Into<String>, required_skills: I, required_years: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: 0,
            title: title.into(),
            required_skills: required_skills.into_iter().map(Into::into).collect(),
            required_years,
            responsibilities: Vec::new(),
            raw_text: String::new(),
        }
    }

    /// Whether any skills are required.
    pub fn has_required_skills(&self) -> bool {
        !self.required_skills.is_empty()
    }

    /// Required skills joined with ", ".
    pub fn skills_display(&self) -> String {
        self.required_skills.join(", ")
    }
}

impl Default for JobRequirement {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, Vec::<String>::new(), 0)
    }
}
