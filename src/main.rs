//! Cricket Sim - Entry Point
//!
//! Plays one two-innings match and prints the ball-by-ball commentary, or the
//! full match report as JSON.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use cricket_sim::core::config::NegativeWeightPolicy;
use cricket_sim::core::error::Result;
use cricket_sim::roster::MatchSetup;
use cricket_sim::simulation::{commentary, MatchRunner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Cricket Sim - five-over match between two squads
#[derive(Parser, Debug)]
#[command(name = "cricket-sim")]
#[command(about = "Simulate a short-form cricket match ball by ball")]
struct Args {
    /// Match setup TOML (teams, field, simulation). Defaults to the built-in fixture.
    #[arg(long)]
    setup: Option<PathBuf>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Override how negative outcome scores are sampled
    #[arg(long, value_enum)]
    negative_weights: Option<NegativeWeightPolicy>,

    /// Do not reset player scores at the start of each innings
    #[arg(long)]
    keep_scores: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cricket_sim=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut setup = match &args.setup {
        Some(path) => MatchSetup::load(path)?,
        None => MatchSetup::reference(),
    };
    if let Some(seed) = args.seed {
        setup.simulation.seed = Some(seed);
    }
    if let Some(policy) = args.negative_weights {
        setup.simulation.negative_weights = policy;
    }
    if args.keep_scores {
        setup.simulation.reset_players_each_innings = false;
    }

    let mut runner = MatchRunner::from_setup(setup);
    let report = runner.play_seeded();

    match args.format {
        OutputFormat::Text => {
            for line in commentary::transcript(&report) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
