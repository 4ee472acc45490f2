//! Record store backed by a single JSON file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::{RecordStore, Records, Result};
use crate::error::StoreError;
use crate::models::{Candidate, JobRequirement};

/// Record store persisted as pretty-printed JSON.
///
/// Every mutation rewrites the file through a temporary file in the same
/// directory followed by a rename, so readers never see a partial document.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: Records,
}

impl JsonFileStore {
    /// Open the store at `path`, starting empty if the file does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let records = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Records::default()
            } else {
                serde_json::from_str(&content)
                    .map_err(|e| StoreError::Corrupt(format!("{}: {}", path.display(), e)))?
            }
        } else {
            Records::default()
        };

        info!(
            "Opened store {} ({} candidates, {} jobs)",
            path.display(),
            records.candidates.len(),
            records.jobs.len()
        );

        Ok(Self { path, records })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write pending state and release the store.
    pub fn close(self) -> Result<()> {
        write_records(&self.path, &self.records)
    }

    /// Apply `change` to a copy of the records and keep it only once the
    /// file write succeeded.
    fn commit<T>(&mut self, change: impl FnOnce(&mut Records) -> T) -> Result<T> {
        let mut next = self.records.clone();
        let out = change(&mut next);
        write_records(&self.path, &next)?;
        self.records = next;
        Ok(out)
    }
}

fn write_records(path: &Path, records: &Records) -> Result<()> {
    let content = serde_json::to_string_pretty(records)
        .map_err(|e| StoreError::Serialize(e.to_string()))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

impl RecordStore for JsonFileStore {
    fn insert_candidate(&mut self, candidate: Candidate) -> Result<u32> {
        self.commit(|records| records.insert_candidate(candidate))
    }

    fn candidates(&self) -> Result<Vec<Candidate>> {
        Ok(self.records.candidates.values().cloned().collect())
    }

    fn candidate(&self, id: u32) -> Result<Option<Candidate>> {
        Ok(self.records.candidates.get(&id).cloned())
    }

    fn delete_candidate(&mut self, id: u32) -> Result<bool> {
        if !self.records.candidates.contains_key(&id) {
            return Ok(false);
        }
        self.commit(|records| records.candidates.remove(&id).is_some())
    }

    fn insert_job(&mut self, job: JobRequirement) -> Result<u32> {
        self.commit(|records| records.insert_job(job))
    }

    fn jobs(&self) -> Result<Vec<JobRequirement>> {
        Ok(self.records.jobs.values().cloned().collect())
    }

    fn job(&self, id: u32) -> Result<Option<JobRequirement>> {
        Ok(self.records.jobs.get(&id).cloned())
    }

    fn delete_job(&mut self, id: u32) -> Result<bool> {
        if !self.records.jobs.contains_key(&id) {
            return Ok(false);
        }
        self.commit(|records| records.jobs.remove(&id).is_some())
    }
}
