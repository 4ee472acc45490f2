//! Core library for resume and job posting analysis.
//!
//! This crate provides:
//! - Rule-based field extraction from resumes (name, contact details,
//!   skills, education, work experience) and job postings (title, required
//!   skills, years of experience, responsibilities)
//! - Skill equivalence with synonyms and candidate/job scoring
//! - Batch ranking of candidates for one job
//! - Record stores for parsed candidates and jobs

pub mod document;
pub mod error;
pub mod extract;
pub mod matching;
pub mod models;
pub mod nlp;
pub mod store;

pub use error::{DocumentError, Result, StoreError, TalentError};
pub use extract::{is_valid, DocumentParser, JobPostingParser, ResumeParser};
pub use matching::{are_equivalent, filter_by_threshold, MatchingEngine};
pub use models::{Candidate, JobRequirement, MatchResult, TalentConfig};
pub use nlp::{NameDetector, NoNameDetector};
pub use store::{JsonFileStore, MemoryStore, RecordStore};
