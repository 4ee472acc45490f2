//! Candidate scoring and ranking.

use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};

use super::skills::are_equivalent;
use crate::models::{Candidate, JobRequirement, MatchResult};

/// Weight of the skill component in the overall score.
pub const SKILL_WEIGHT: f64 = 0.70;

/// Weight of the experience component in the overall score.
pub const EXPERIENCE_WEIGHT: f64 = 0.30;

/// Scores candidates against job requirements.
#[derive(Debug, Clone, Copy)]
pub struct MatchingEngine {
    parallel: bool,
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self { parallel: true }
    }

    /// Evaluate batches on the rayon pool. Ignored without the `parallel`
    /// feature.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Score one candidate against one job.
    pub fn evaluate<'a>(
        &self,
        candidate: &'a Candidate,
        job: &'a JobRequirement,
    ) -> MatchResult<'a> {
        let (skill_score, matched, missing) = skill_score(candidate, job);
        let experience_score = experience_score(candidate, job);
        let score = skill_score * SKILL_WEIGHT + experience_score * EXPERIENCE_WEIGHT;

        let details = format!(
            "Candidate: {}\nJob: {}\nOverall Match: {:.1}%\n\n\
             Skill Match: {:.1}% (Weight: {:.0}%)\n\
             Experience Match: {:.1}% (Weight: {:.0}%)\n",
            candidate.name,
            job.title,
            score,
            skill_score,
            SKILL_WEIGHT * 100.0,
            experience_score,
            EXPERIENCE_WEIGHT * 100.0,
        );

        debug!(
            "Evaluated {} against '{}': {:.1} (skills {:.1}, experience {:.1})",
            candidate.name, job.title, score, skill_score, experience_score
        );

        MatchResult::new(
            candidate,
            job,
            score,
            skill_score,
            experience_score,
            matched,
            missing,
            details,
        )
    }

    /// Evaluate every candidate and sort by descending score. Candidates with
    /// equal scores keep their input order.
    pub fn rank_batch<'a>(
        &self,
        candidates: &'a [Candidate],
        job: &'a JobRequirement,
    ) -> Vec<MatchResult<'a>> {
        let start = Instant::now();
        let mut results = self.evaluate_all(candidates, job);

        results.sort_by(|a, b| b.score().total_cmp(&a.score()));

        info!(
            "Ranked {} candidates for '{}' in {:?}",
            results.len(),
            job.title,
            start.elapsed()
        );
        results
    }

    #[cfg(feature = "parallel")]
    fn evaluate_all<'a>(
        &self,
        candidates: &'a [Candidate],
        job: &'a JobRequirement,
    ) -> Vec<MatchResult<'a>> {
        if self.parallel {
            candidates.par_iter().map(|c| self.evaluate(c, job)).collect()
        } else {
            candidates.iter().map(|c| self.evaluate(c, job)).collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_all<'a>(
        &self,
        candidates: &'a [Candidate],
        job: &'a JobRequirement,
    ) -> Vec<MatchResult<'a>> {
        candidates.iter().map(|c| self.evaluate(c, job)).collect()
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep results scoring at least `min_score`, preserving order.
pub fn filter_by_threshold<'a>(
    results: Vec<MatchResult<'a>>,
    min_score: f64,
) -> Vec<MatchResult<'a>> {
    results
        .into_iter()
        .filter(|r| r.score() >= min_score)
        .collect()
}

fn skill_score(candidate: &Candidate, job: &JobRequirement) -> (f64, Vec<String>, Vec<String>) {
    if job.required_skills.is_empty() {
        return (100.0, Vec::new(), Vec::new());
    }

    if candidate.skills.is_empty() {
        return (0.0, Vec::new(), job.required_skills.clone());
    }

    let owned: Vec<String> = candidate
        .skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();

    let (matched, missing): (Vec<String>, Vec<String>) =
        job.required_skills.iter().cloned().partition(|required| {
            let required = required.trim().to_lowercase();
            owned.iter().any(|skill| are_equivalent(skill, &required))
        });

    let score = 100.0 * matched.len() as f64 / job.required_skills.len() as f64;
    (score, matched, missing)
}

/// Candidate years are not compared against the requirement; any work
/// experience satisfies a non-zero requirement.
fn experience_score(candidate: &Candidate, job: &JobRequirement) -> f64 {
    if job.required_years == 0 || candidate.has_work_experience() {
        100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn candidate(name: &str, skills: &[&str], experience: &[&str]) -> Candidate {
        Candidate::new()
            .with_name(name)
            .with_skills(skills.iter().copied())
            .with_experience(experience.iter().copied())
    }

    #[test]
    fn test_scenario_java_sql_python() {
        let c = candidate("Ann", &["Java", "SQL"], &[]);
        let job = JobRequirement::new("Backend", ["java", "databases", "Python"], 0);

        let result = MatchingEngine::new().evaluate(&c, &job);

        assert_eq!(result.matched_skills(), ["java", "databases"]);
        assert_eq!(result.missing_skills(), ["Python"]);
        assert!((result.skill_score() - 200.0 / 3.0).abs() < 1e-9);
        assert!((result.experience_score() - 100.0).abs() < 1e-9);
        assert!((result.score() - (200.0 / 3.0 * 0.7 + 30.0)).abs() < 1e-9);
    }

    #[test]
    fn test_no_required_skills_scores_full() {
        let c = candidate("Ann", &[], &[]);
        let job = JobRequirement::new("Anything", Vec::<String>::new(), 0);

        let result = MatchingEngine::new().evaluate(&c, &job);
        assert_eq!(result.skill_score(), 100.0);
        assert_eq!(result.score(), 100.0);
        assert!(result.matched_skills().is_empty());
        assert!(result.missing_skills().is_empty());
    }

    #[test]
    fn test_candidate_without_skills() {
        let c = candidate("Ann", &[], &["Acme 2020"]);
        let job = JobRequirement::new("Backend", ["Rust", "Go", "Rust"], 2);

        let result = MatchingEngine::new().evaluate(&c, &job);
        assert_eq!(result.skill_score(), 0.0);
        assert!(result.matched_skills().is_empty());
        assert_eq!(result.missing_skills(), job.required_skills.as_slice());
    }

    #[test]
    fn test_matched_and_missing_partition_required() {
        let c = candidate("Ann", &["python", "docker", "js"], &[]);
        let job = JobRequirement::new(
            "Full stack",
            ["JavaScript", "Rust", "Python", "Kubernetes", "Docker", "Rust"],
            0,
        );

        let result = MatchingEngine::new().evaluate(&c, &job);
        assert_eq!(result.matched_skills(), ["JavaScript", "Python", "Docker"]);
        assert_eq!(result.missing_skills(), ["Rust", "Kubernetes", "Rust"]);

        let mut all: Vec<_> = result
            .matched_skills()
            .iter()
            .chain(result.missing_skills())
            .cloned()
            .collect();
        let mut required = job.required_skills.clone();
        all.sort();
        required.sort();
        assert_eq!(all, required);
    }

    #[test]
    fn test_experience_years_are_not_compared() {
        let junior = candidate("Junior", &["Rust"], &["Intern 2024"]);
        let none = candidate("None", &["Rust"], &["   "]);
        let job = JobRequirement::new("Staff Engineer", ["Rust"], 15);

        let engine = MatchingEngine::new();
        assert_eq!(engine.evaluate(&junior, &job).experience_score(), 100.0);
        assert_eq!(engine.evaluate(&none, &job).experience_score(), 0.0);
        assert!((engine.evaluate(&none, &job).score() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_details_format() {
        let c = candidate("Ann Lee", &["Java", "SQL"], &[]);
        let job = JobRequirement::new("Backend", ["java", "databases", "Python"], 0);

        let result = MatchingEngine::new().evaluate(&c, &job);
        assert_eq!(
            result.details(),
            "Candidate: Ann Lee\nJob: Backend\nOverall Match: 76.7%\n\n\
             Skill Match: 66.7% (Weight: 70%)\n\
             Experience Match: 100.0% (Weight: 30%)\n"
        );
    }

    #[test]
    fn test_rank_batch_descending_and_stable() {
        let candidates = vec![
            candidate("A", &["Go"], &[]),
            candidate("B", &["Rust", "Go"], &[]),
            candidate("C", &["Go"], &[]),
            candidate("D", &[], &[]),
            candidate("E", &["Rust", "Go"], &[]),
        ];
        let job = JobRequirement::new("Backend", ["Rust", "Go"], 0);

        for parallel in [true, false] {
            let ranked = MatchingEngine::new()
                .with_parallel(parallel)
                .rank_batch(&candidates, &job);

            let names: Vec<&str> = ranked.iter().map(|r| r.candidate().name.as_str()).collect();
            assert_eq!(names, vec!["B", "E", "A", "C", "D"]);
            assert!(ranked.windows(2).all(|w| w[0].score() >= w[1].score()));
        }
    }

    #[test]
    fn test_rank_empty_batch() {
        let job = JobRequirement::new("Backend", ["Rust"], 0);
        assert!(MatchingEngine::new().rank_batch(&[], &job).is_empty());
    }

    #[test]
    fn test_filter_by_threshold_inclusive() {
        let candidates = vec![
            candidate("A", &["Rust", "Go"], &[]),
            candidate("B", &["Rust"], &[]),
            candidate("C", &[], &[]),
        ];
        let job = JobRequirement::new("Backend", ["Rust", "Go"], 0);
        let ranked = MatchingEngine::new().rank_batch(&candidates, &job);

        // B scores exactly 0.7 * 50 + 30 = 65
        let kept = filter_by_threshold(ranked.clone(), 65.0);
        let names: Vec<&str> = kept.iter().map(|r| r.candidate().name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);

        assert_eq!(filter_by_threshold(ranked.clone(), 0.0).len(), 3);
        assert!(filter_by_threshold(ranked, 100.1).is_empty());
    }

    #[test]
    fn test_scores_within_bounds() {
        let c = candidate("Ann", &["SQL", "Excel"], &["Analyst 2019"]);
        for job in [
            JobRequirement::new("A", ["SQL"], 3),
            JobRequirement::new("B", ["Rust", "Haskell"], 0),
            JobRequirement::new("C", Vec::<String>::new(), 10),
        ] {
            let r = MatchingEngine::new().evaluate(&c, &job);
            assert!((0.0..=100.0).contains(&r.score()));
            let expected = r.skill_score() * SKILL_WEIGHT + r.experience_score() * EXPERIENCE_WEIGHT;
            assert!((r.score() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_result_json() {
        let c = candidate("Ann", &["Rust"], &[]);
        let job = JobRequirement::new("Backend", ["Rust", "Go"], 0);
        let result = MatchingEngine::new().evaluate(&c, &job);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "candidate": {
                    "id": 0,
                    "name": "Ann",
                    "skills": ["Rust"],
                    "education": [],
                    "work_experience": []
                },
                "job": {
                    "id": 0,
                    "title": "Backend",
                    "required_skills": ["Rust", "Go"],
                    "required_years": 0,
                    "raw_text": ""
                },
                "score": 65.0,
                "skill_score": 50.0,
                "experience_score": 100.0,
                "matched_skills": ["Rust"],
                "missing_skills": ["Go"],
                "details": result.details()
            })
        );
    }
}
