//! Resume command - extract candidate data from a single resume.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use talentmatch_core::document::load_text;
use talentmatch_core::models::Candidate;
use talentmatch_core::{DocumentParser, RecordStore, ResumeParser};

use super::{emit, load_config, open_store, OutputFormat};

/// Arguments for the resume command.
#[derive(Args)]
pub struct ResumeArgs {
    /// Resume file (.txt, .md or .pdf)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Save the parsed candidate to the record store
    #[arg(long)]
    save: bool,
}

pub fn run(args: ResumeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing resume: {}", args.input.display());

    let text = load_text(&args.input)?;
    let parser = ResumeParser::with_config(&config.extraction);
    let mut candidate = parser.parse(&text);

    if args.save {
        let mut store = open_store(&config)?;
        candidate.id = store.insert_candidate(candidate.clone())?;
        store.close()?;
        eprintln!(
            "{} Saved candidate #{} to {}",
            style("✓").green(),
            candidate.id,
            config.store.path.display()
        );
    }

    let output = format_candidate(&candidate, args.format)?;
    emit(&output, args.output.as_deref())?;

    debug!("Total processing time: {:?}", start.elapsed());
    Ok(())
}

fn format_candidate(candidate: &Candidate, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(candidate)?),
        OutputFormat::Csv => format_csv(candidate),
        OutputFormat::Text => Ok(format_text(candidate)),
    }
}

fn format_csv(candidate: &Candidate) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "id",
        "name",
        "email",
        "phone",
        "skills",
        "education",
        "work_experience",
    ])?;

    wtr.write_record([
        &candidate.id.to_string(),
        &candidate.name,
        &candidate.email.clone().unwrap_or_default(),
        &candidate.phone.clone().unwrap_or_default(),
        &candidate.skills_display(),
        &candidate.education_display(),
        &candidate.experience_display(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(candidate: &Candidate) -> String {
    let mut output = String::new();

    output.push_str(&format!("Candidate: {}\n", candidate.name));
    if let Some(email) = &candidate.email {
        output.push_str(&format!("Email: {}\n", email));
    }
    if let Some(phone) = &candidate.phone {
        output.push_str(&format!("Phone: {}\n", phone));
    }
    output.push('\n');

    output.push_str(&format!("Skills: {}\n", candidate.skills_display()));

    if !candidate.education.is_empty() {
        output.push_str("\nEducation:\n");
        for entry in &candidate.education {
            output.push_str(&format!("  - {}\n", entry));
        }
    }

    if !candidate.work_experience.is_empty() {
        output.push_str("\nWork experience:\n");
        for entry in &candidate.work_experience {
            output.push_str(&format!("  - {}\n", entry));
        }
    }

    output
}
