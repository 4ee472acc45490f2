//! Result of comparing one candidate against one job requirement.

use serde::Serialize;

use super::{Candidate, JobRequirement};

/// Outcome of a single candidate/job evaluation.
///
/// Holds read-only references to the evaluated records. `matched_skills` and
/// `missing_skills` split the job's required skills into two lists that keep
/// the original order. Produced by [`crate::matching::MatchingEngine`] and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    candidate: &'a Candidate,
    job: &'a JobRequirement,
    score: f64,
    skill_score: f64,
    experience_score: f64,
    matched_skills: Vec<String>,
    missing_skills: Vec<String>,
    details: String,
}

impl<'a> MatchResult<'a> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        candidate: &'a Candidate,
        job: &'a JobRequirement,
        score: f64,
        skill_score: f64,
        experience_score: f64,
        matched_skills: Vec<String>,
        missing_skills: Vec<String>,
        details: String,
    ) -> Self {
        Self {
            candidate,
            job,
            score,
            skill_score,
            experience_score,
            matched_skills,
            missing_skills,
            details,
        }
    }

    /// The evaluated candidate.
    pub fn candidate(&self) -> &'a Candidate {
        self.candidate
    }

    /// The job the candidate was evaluated against.
    pub fn job(&self) -> &'a JobRequirement {
        self.job
    }

    /// Overall weighted score (0.0 - 100.0).
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Skill component (0.0 - 100.0).
    pub fn skill_score(&self) -> f64 {
        self.skill_score
    }

    /// Experience component (0.0 - 100.0).
    pub fn experience_score(&self) -> f64 {
        self.experience_score
    }

    /// Required skills the candidate has.
    pub fn matched_skills(&self) -> &[String] {
        &self.matched_skills
    }

    /// Required skills the candidate lacks.
    pub fn missing_skills(&self) -> &[String] {
        &self.missing_skills
    }

    /// Human-readable breakdown of the score.
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Matched skills joined with ", ", or "None".
    pub fn matched_display(&self) -> String {
        join_or_none(&self.matched_skills)
    }

    /// Missing skills joined with ", ", or "None".
    pub fn missing_display(&self) -> String {
        join_or_none(&self.missing_skills)
    }

    /// Score formatted as a percentage with one decimal, e.g. "66.7%".
    pub fn score_percentage(&self) -> String {
        format!("{:.1}%", self.score)
    }
}

fn join_or_none(skills: &[String]) -> String {
    if skills.is_empty() {
        "None".to_string()
    } else {
        skills.join(", ")
    }
}
