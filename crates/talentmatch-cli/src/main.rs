//! CLI application for resume parsing and candidate matching.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{config, job, matching, resume, store};

/// talentmatch - Extract resumes and job postings, rank candidates
#[derive(Parser)]
#[command(name = "talentmatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract candidate data from a resume
    Resume(resume::ResumeArgs),

    /// Extract requirements from a job posting
    Job(job::JobArgs),

    /// Rank candidates against a job
    Match(matching::MatchArgs),

    /// Inspect stored candidates and jobs
    Store(store::StoreArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Resume(args) => resume::run(args, config_path),
        Commands::Job(args) => job::run(args, config_path),
        Commands::Match(args) => matching::run(args, config_path),
        Commands::Store(args) => store::run(args, config_path),
        Commands::Config(args) => config::run(args, config_path),
    }
}
