//! Picks CLI commands.

use clap::{Parser, Subcommand};

use super::parse_game_outcome;

/// Picks commands.
#[derive(Debug, Parser)]
pub struct PicksCommand {
    #[command(subcommand)]
    pub action: PicksAction,
}

/// Available picks actions.
#[derive(Debug, Subcommand)]
pub enum PicksAction {
    /// Save a member's picks for a week, replacing earlier ones.
    Save {
        /// Week identifier.
        #[arg(long)]
        week: String,
        /// Member identifier.
        #[arg(long)]
        member: String,
        /// A pick as GAME=OUTCOME. Repeat for each game.
        #[arg(long = "pick", value_name = "GAME=OUTCOME", required = true, value_parser = parse_game_outcome)]
        picks: Vec<(String, String)>,
    },
    /// Get every member's picks for a week.
    Get {
        /// Week identifier.
        #[arg(long)]
        week: String,
    },
}
