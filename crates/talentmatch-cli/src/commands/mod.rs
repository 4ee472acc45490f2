//! CLI command implementations.

pub mod config;
pub mod job;
pub mod matching;
pub mod resume;
pub mod store;

use std::fs;
use std::path::{Path, PathBuf};

use console::style;

use talentmatch_core::models::config::TalentConfig;
use talentmatch_core::JsonFileStore;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

/// Load the configuration given with `--config`, or the user's default
/// configuration file when present.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<TalentConfig> {
    let path = match config_path {
        Some(path) => {
            let path = PathBuf::from(path);
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            path
        }
        None => config::default_config_path(),
    };

    Ok(TalentConfig::load_or_default(&path)?)
}

/// Open the JSON record store named in the configuration.
pub fn open_store(config: &TalentConfig) -> anyhow::Result<JsonFileStore> {
    let path = &config.store.path;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    JsonFileStore::open(path)
        .map_err(|e| anyhow::anyhow!("Failed to open store {}: {}", path.display(), e))
}

/// Write command output to a file or stdout.
pub fn emit(output: &str, path: Option<&Path>) -> anyhow::Result<()> {
    if let Some(output_path) = path {
        fs::write(output_path, output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
    Ok(())
}
