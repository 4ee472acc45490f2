//! In-process record store.

use super::{RecordStore, Records, Result};
use crate::models::{Candidate, JobRequirement};

/// Record store that lives only as long as the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Records,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn insert_candidate(&mut self, candidate: Candidate) -> Result<u32> {
        Ok(self.records.insert_candidate(candidate))
    }

    fn candidates(&self) -> Result<Vec<Candidate>> {
        Ok(self.records.candidates.values().cloned().collect())
    }

    fn candidate(&self, id: u32) -> Result<Option<Candidate>> {
        Ok(self.records.candidates.get(&id).cloned())
    }

    fn delete_candidate(&mut self, id: u32) -> Result<bool> {
        Ok(self.records.candidates.remove(&id).is_some())
    }

    fn insert_job(&mut self, job: JobRequirement) -> Result<u32> {
        Ok(self.records.insert_job(job))
    }

    fn jobs(&self) -> Result<Vec<JobRequirement>> {
        Ok(self.records.jobs.values().cloned().collect())
    }

    fn job(&self, id: u32) -> Result<Option<JobRequirement>> {
        Ok(self.records.jobs.get(&id).cloned())
    }

    fn delete_job(&mut self, id: u32) -> Result<bool> {
        Ok(self.records.jobs.remove(&id).is_some())
    }
}
