//! Match command - rank candidates for one job.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use talentmatch_core::document::load_text;
use talentmatch_core::models::{Candidate, JobRequirement, MatchResult, TalentConfig};
use talentmatch_core::{
    filter_by_threshold, is_valid, DocumentParser, JobPostingParser, MatchingEngine,
    RecordStore, ResumeParser,
};

use super::{emit, load_config, open_store, OutputFormat};

/// Arguments for the match command.
#[derive(Args)]
pub struct MatchArgs {
    /// Job posting file
    #[arg(long, conflicts_with = "job_id", required_unless_present = "job_id")]
    job: Option<PathBuf>,

    /// Id of a stored job
    #[arg(long)]
    job_id: Option<u32>,

    /// Resume files or glob pattern
    #[arg(conflicts_with = "stored", required_unless_present = "stored")]
    resumes: Option<String>,

    /// Match all stored candidates instead of resume files
    #[arg(long)]
    stored: bool,

    /// Minimum overall score to report (default from config)
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: MatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let job = load_job(&args, &config)?;
    if !is_valid(&job) {
        anyhow::bail!(
            "Job '{}' has no required skills, nothing to match against",
            job.title
        );
    }

    let candidates = load_candidates(&args, &config)?;
    if candidates.is_empty() {
        anyhow::bail!("No candidates to match");
    }

    let threshold = args.threshold.unwrap_or(config.matching.default_threshold);
    let engine = MatchingEngine::new().with_parallel(config.matching.parallel);
    let ranked = engine.rank_batch(&candidates, &job);
    let total = ranked.len();
    let results = filter_by_threshold(ranked, threshold);

    eprintln!(
        "{} {} of {} candidates scored at least {:.1}%",
        style("ℹ").blue(),
        results.len(),
        total,
        threshold
    );

    let output = format_results(&results, args.format)?;
    emit(&output, args.output.as_deref())?;

    debug!("Total matching time: {:?}", start.elapsed());
    Ok(())
}

fn load_job(args: &MatchArgs, config: &TalentConfig) -> anyhow::Result<JobRequirement> {
    if let Some(id) = args.job_id {
        let store = open_store(config)?;
        return store
            .job(id)?
            .ok_or_else(|| anyhow::anyhow!("No stored job with id {}", id));
    }

    let path = args
        .job
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("Either --job or --job-id is required"))?;
    if !path.exists() {
        anyhow::bail!("Job posting not found: {}", path.display());
    }

    let text = load_text(path)?;
    Ok(JobPostingParser::new().parse(&text))
}

fn load_candidates(args: &MatchArgs, config: &TalentConfig) -> anyhow::Result<Vec<Candidate>> {
    if args.stored {
        let store = open_store(config)?;
        return Ok(store.candidates()?);
    }

    let pattern = args.resumes.as_deref().unwrap_or_default();
    let files: Vec<PathBuf> = glob(pattern)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "text" | "md" | "pdf")
        })
        .collect();

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} resumes")?
            .progress_chars("=>-"),
    );

    let parser = ResumeParser::with_config(&config.extraction);
    let mut candidates = Vec::with_capacity(files.len());

    for path in files {
        match load_text(&path) {
            Ok(text) => candidates.push(parser.parse(&text)),
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(candidates)
}

fn format_results(results: &[MatchResult<'_>], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
        OutputFormat::Csv => format_csv(results),
        OutputFormat::Text => Ok(format_text(results)),
    }
}

fn format_csv(results: &[MatchResult<'_>]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "rank",
        "candidate_id",
        "name",
        "score",
        "skill_score",
        "experience_score",
        "matched_skills",
        "missing_skills",
    ])?;

    for (rank, result) in results.iter().enumerate() {
        wtr.write_record([
            &(rank + 1).to_string(),
            &result.candidate().id.to_string(),
            &result.candidate().name,
            &format!("{:.1}", result.score()),
            &format!("{:.1}", result.skill_score()),
            &format!("{:.1}", result.experience_score()),
            &result.matched_skills().join(", "),
            &result.missing_skills().join(", "),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(results: &[MatchResult<'_>]) -> String {
    let mut output = String::new();

    for (rank, result) in results.iter().enumerate() {
        output.push_str(&format!(
            "#{} {} ({})\n",
            rank + 1,
            result.candidate().name,
            result.score_percentage()
        ));
        output.push_str(&format!("  Matched: {}\n", result.matched_display()));
        output.push_str(&format!("  Missing: {}\n", result.missing_display()));
        output.push('\n');
        for line in result.details().lines() {
            output.push_str(&format!("  {}\n", line));
        }
        output.push('\n');
    }

    output
}
