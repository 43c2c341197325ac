use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "swiss-tournament", author, version, about = "Swiss-system tournament bookkeeping")]
pub struct Cli {
    /// SQLite database file (defaults to $DATABASE_PATH, then tournament.db)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Create the players and matches tables if they are missing
    Init,
    /// Drop and recreate both tables
    Reset,
    /// Register a new player
    Register {
        /// Player name (need not be unique)
        name: String,
    },
    /// Record the outcome of a single match
    Report {
        /// Id of the player who won
        winner: i32,
        /// Id of the player who lost
        loser: i32,
    },
    /// Print the number of registered players
    Count,
    /// List registered players
    Players,
    /// Show players ranked by wins
    Standings {
        #[arg(long)]
        json: bool,
    },
    /// Show pairings for the next round
    Pairings {
        #[arg(long)]
        json: bool,
    },
    /// Remove all match records
    DeleteMatches,
    /// Remove all players (fails while matches are recorded)
    DeletePlayers,
    /// Print shell completions to stdout
    Completions {
        shell: Shell,
    },
}
