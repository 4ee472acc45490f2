//! Persistence of parsed candidates and job requirements.
//!
//! Stores are constructed explicitly and passed to whoever needs them.
//! Identifiers start at 1, grow monotonically per record kind and are never
//! reused, even after a delete.

mod json;
mod memory;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::models::{Candidate, JobRequirement};

pub use json::JsonFileStore;
pub use memory::MemoryStore;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// CRUD access to candidate and job records.
pub trait RecordStore {
    /// Persist a candidate, assigning and returning its id.
    fn insert_candidate(&mut self, candidate: Candidate) -> Result<u32>;

    /// All candidates in id order.
    fn candidates(&self) -> Result<Vec<Candidate>>;

    fn candidate(&self, id: u32) -> Result<Option<Candidate>>;

    /// Remove a candidate. Returns `false` if no record had that id.
    fn delete_candidate(&mut self, id: u32) -> Result<bool>;

    /// Persist a job requirement, assigning and returning its id.
    fn insert_job(&mut self, job: JobRequirement) -> Result<u32>;

    /// All job requirements in id order.
    fn jobs(&self) -> Result<Vec<JobRequirement>>;

    fn job(&self, id: u32) -> Result<Option<JobRequirement>>;

    /// Remove a job requirement. Returns `false` if no record had that id.
    fn delete_job(&mut self, id: u32) -> Result<bool>;
}

/// Record tables shared by the store implementations. Serialized as-is by
/// [`JsonFileStore`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct Records {
    next_candidate_id: u32,
    next_job_id: u32,
    candidates: BTreeMap<u32, Candidate>,
    jobs: BTreeMap<u32, JobRequirement>,
}

impl Records {
    fn insert_candidate(&mut self, mut candidate: Candidate) -> u32 {
        let id = next_id(&mut self.next_candidate_id);
        candidate.id = id;
        self.candidates.insert(id, candidate);
        id
    }

    fn insert_job(&mut self, mut job: JobRequirement) -> u32 {
        let id = next_id(&mut self.next_job_id);
        job.id = id;
        self.jobs.insert(id, job);
        id
    }
}

/// Advance a counter and return the new id. Counters start at 0, so the
/// first id handed out is 1.
fn next_id(counter: &mut u32) -> u32 {
    *counter += 1;
    *counter
}
