//! Results CLI commands.

use clap::{Parser, Subcommand};

use super::parse_game_outcome;

/// Results commands.
#[derive(Debug, Parser)]
pub struct ResultsCommand {
    #[command(subcommand)]
    pub action: ResultsAction,
}

/// Available results actions.
#[derive(Debug, Subcommand)]
pub enum ResultsAction {
    /// Save the outcomes for a week.
    Save {
        /// Week identifier.
        #[arg(long)]
        week: String,
        /// An outcome as GAME=OUTCOME. Repeat for each decided game.
        #[arg(long = "result", value_name = "GAME=OUTCOME", value_parser = parse_game_outcome)]
        results: Vec<(String, String)>,
    },
    /// Get the outcomes for a week.
    Get {
        /// Week identifier.
        #[arg(long)]
        week: String,
    },
}
