//! Data models for candidates, job requirements, match results and configuration.

pub mod candidate;
pub mod config;
pub mod job;
pub mod match_result;

pub use candidate::Candidate;
pub use config::TalentConfig;
pub use job::JobRequirement;
pub use match_result::MatchResult;
