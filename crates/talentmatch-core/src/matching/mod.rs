//! Candidate/job matching.
//!
//! The overall score is a weighted sum of a skill component and an
//! experience component, both on a 0-100 scale.

mod engine;
pub mod skills;

pub use engine::{filter_by_threshold, MatchingEngine, EXPERIENCE_WEIGHT, SKILL_WEIGHT};
pub use skills::are_equivalent;
