//! Store command - inspect and prune saved records.

use clap::{Args, Subcommand, ValueEnum};
use console::style;

use talentmatch_core::RecordStore;

use super::{load_config, open_store};

/// Arguments for the store command.
#[derive(Args)]
pub struct StoreArgs {
    #[command(subcommand)]
    command: StoreCommand,
}

#[derive(Subcommand)]
enum StoreCommand {
    /// List stored records
    List {
        /// Record kind
        #[arg(value_enum)]
        kind: RecordKind,
    },

    /// Show one record as JSON
    Show {
        /// Record kind
        #[arg(value_enum)]
        kind: RecordKind,
        /// Record id
        id: u32,
    },

    /// Delete one record
    Delete {
        /// Record kind
        #[arg(value_enum)]
        kind: RecordKind,
        /// Record id
        id: u32,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RecordKind {
    Candidates,
    Jobs,
}

pub fn run(args: StoreArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let mut store = open_store(&config)?;

    match args.command {
        StoreCommand::List { kind } => list(&store, kind),
        StoreCommand::Show { kind, id } => show(&store, kind, id),
        StoreCommand::Delete { kind, id } => {
            let removed = match kind {
                RecordKind::Candidates => store.delete_candidate(id)?,
                RecordKind::Jobs => store.delete_job(id)?,
            };
            if !removed {
                anyhow::bail!("No stored {} with id {}", kind_label(kind), id);
            }
            store.close()?;
            println!("{} Deleted {} #{}", style("✓").green(), kind_label(kind), id);
            Ok(())
        }
    }
}

fn list(store: &impl RecordStore, kind: RecordKind) -> anyhow::Result<()> {
    match kind {
        RecordKind::Candidates => {
            let candidates = store.candidates()?;
            if candidates.is_empty() {
                println!("{} No stored candidates.", style("ℹ").blue());
            }
            for candidate in candidates {
                println!(
                    "{:>4}  {}  [{}]",
                    candidate.id,
                    candidate.name,
                    candidate.skills_display()
                );
            }
        }
        RecordKind::Jobs => {
            let jobs = store.jobs()?;
            if jobs.is_empty() {
                println!("{} No stored jobs.", style("ℹ").blue());
            }
            for job in jobs {
                println!(
                    "{:>4}  {}  [{}]  {}+ years",
                    job.id,
                    job.title,
                    job.skills_display(),
                    job.required_years
                );
            }
        }
    }
    Ok(())
}

fn show(store: &impl RecordStore, kind: RecordKind, id: u32) -> anyhow::Result<()> {
    let json = match kind {
        RecordKind::Candidates => store.candidate(id)?.map(|c| serde_json::to_string_pretty(&c)),
        RecordKind::Jobs => store.job(id)?.map(|j| serde_json::to_string_pretty(&j)),
    };

    match json {
        Some(json) => {
            println!("{}", json?);
            Ok(())
        }
        None => anyhow::bail!("No stored {} with id {}", kind_label(kind), id),
    }
}

fn kind_label(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Candidates => "candidate",
        RecordKind::Jobs => "job",
    }
}
