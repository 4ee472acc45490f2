//! Job command - extract requirements from a job posting.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use talentmatch_core::document::load_text;
use talentmatch_core::models::JobRequirement;
use talentmatch_core::{is_valid, DocumentParser, JobPostingParser, RecordStore};

use super::{emit, load_config, open_store, OutputFormat};

/// Arguments for the job command.
#[derive(Args)]
pub struct JobArgs {
    /// Job posting file (.txt, .md or .pdf)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Save the parsed job to the record store
    #[arg(long)]
    save: bool,

    /// Fail if the posting has no title or no required skills
    #[arg(long)]
    validate: bool,
}

pub fn run(args: JobArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing job posting: {}", args.input.display());

    let text = load_text(&args.input)?;
    let mut job = JobPostingParser::new().parse(&text);

    if args.validate && !is_valid(&job) {
        eprintln!("{}", style("Validation issues:").yellow());
        for issue in validation_issues(&job) {
            eprintln!("  - {}", issue);
        }
        anyhow::bail!("Job posting {} is not usable for matching", args.input.display());
    }

    if args.save {
        let mut store = open_store(&config)?;
        job.id = store.insert_job(job.clone())?;
        store.close()?;
        eprintln!(
            "{} Saved job #{} to {}",
            style("✓").green(),
            job.id,
            config.store.path.display()
        );
    }

    let output = format_job(&job, args.format)?;
    emit(&output, args.output.as_deref())
}

fn validation_issues(job: &JobRequirement) -> Vec<&'static str> {
    let mut issues = Vec::new();
    if job.title.trim().is_empty() {
        issues.push("no job title");
    }
    if !job.has_required_skills() {
        issues.push("no required skills found");
    }
    issues
}

fn format_job(job: &JobRequirement, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(job)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(["id", "title", "required_skills", "required_years"])?;
            wtr.write_record([
                &job.id.to_string(),
                &job.title,
                &job.skills_display(),
                &job.required_years.to_string(),
            ])?;
            Ok(String::from_utf8(wtr.into_inner()?)?)
        }
        OutputFormat::Text => {
            let mut output = format!("Job: {}\n", job.title);
            output.push_str(&format!("Required skills: {}\n", job.skills_display()));
            output.push_str(&format!("Required years: {}\n", job.required_years));
            if !job.responsibilities.is_empty() {
                output.push_str("\nResponsibilities:\n");
                for item in &job.responsibilities {
                    output.push_str(&format!("  - {}\n", item));
                }
            }
            Ok(output)
        }
    }
}
