//! Configuration structures for extraction, matching and storage.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::TalentError;

/// Main configuration for talentmatch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TalentConfig {
    /// Text extraction configuration.
    pub extraction: ExtractionConfig,

    /// Candidate matching configuration.
    pub matching: MatchingConfig,

    /// Record store configuration.
    pub store: StoreConfig,
}

/// Resume and job posting extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Number of leading non-empty lines inspected for a candidate name.
    pub name_scan_lines: usize,

    /// Number of leading characters handed to the name detector.
    pub detector_window_chars: usize,

    /// Education lines must be longer than this (in characters).
    pub min_education_line_len: usize,

    /// Experience lines longer than this (in characters) start a new entry.
    pub experience_entry_min_len: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            name_scan_lines: 5,
            detector_window_chars: 500,
            min_education_line_len: 10,
            experience_entry_min_len: 20,
        }
    }
}

/// Matching configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Minimum score (inclusive) for a candidate to be reported.
    pub default_threshold: f64,

    /// Evaluate batches across worker threads.
    pub parallel: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            default_threshold: 0.0,
            parallel: true,
        }
    }
}

/// Record store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the JSON store file.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("talentmatch-store.json"),
        }
    }
}

impl TalentConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Load configuration from `path` if the file exists, defaults otherwise.
    pub fn load_or_default(path: &std::path::Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| TalentError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
