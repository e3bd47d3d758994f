use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "swiss-tournament backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Create or reset the tournament database schema
    Init,
    /// Register a new player (the store assigns the id)
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },
    /// Record the outcome of a single match
    Report {
        /// Id of the winning player
        winner: i64,
        /// Id of the losing player
        loser: i64,
    },
    /// Show current standings, sorted by wins
    Standings {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Compute next-round pairings from the current standings
    Pairings {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Delete all match records
    ClearMatches,
    /// Delete all player records (clear matches first)
    ClearPlayers,
}
