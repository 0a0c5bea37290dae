//! CLI command definitions.

pub mod picks;
pub mod results;

use clap::{Parser, Subcommand, ValueEnum};
use picker_core::contest::Outcomes;

/// CLI client for the pick contest API.
#[derive(Debug, Parser)]
#[command(name = "picker-client")]
#[command(about = "CLI client for the weekly pick contest API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "PICKER_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Member picks.
    Picks(picks::PicksCommand),
    /// Game results.
    Results(results::ResultsCommand),
    /// Season standings.
    Leaderboard,
}

/// Parse a `GAME=OUTCOME` argument.
pub fn parse_game_outcome(value: &str) -> Result<(String, String), String> {
    let (game, outcome) = value
        .split_once('=')
        .ok_or_else(|| format!("expected GAME=OUTCOME, got '{}'", value))?;

    let game = game.trim();
    if game.is_empty() {
        return Err(format!("missing game id in '{}'", value));
    }

    Ok((game.to_string(), outcome.trim().to_string()))
}

/// Collect parsed pairs into an outcome mapping. Later pairs win.
pub fn into_outcomes(pairs: Vec<(String, String)>) -> Outcomes {
    pairs.into_iter().collect()
}
