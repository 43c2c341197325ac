pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod output;
pub mod services;
pub mod tournament;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use cli::Cli;

use crate::config::AppConfig;
use crate::services::TournamentService;

pub use crate::errors::{TournamentError, TournamentResult};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn open_service(database: Option<String>) -> Result<TournamentService> {
    let config = AppConfig::new().with_database_path(database);
    TournamentService::open(&config.store)
        .with_context(|| format!("Failed to open {}", config.store.database_path))
}

pub fn handle_register(service: &TournamentService, name: &str) -> Result<()> {
    let id = service.register_player(name)?;
    println!("Registered {} with id {}", name, id);
    Ok(())
}

pub fn handle_report(service: &TournamentService, winner: i32, loser: i32) -> Result<()> {
    let id = service
        .report_match(winner, loser)
        .with_context(|| format!("Failed to report {} beating {}", winner, loser))?;
    println!("Recorded match {}", id);
    Ok(())
}

pub fn handle_standings(service: &TournamentService, json: bool) -> Result<()> {
    let standings = service.player_standings()?;
    if json {
        println!("{}", output::to_json(&standings)?);
    } else {
        println!("{}", output::render_standings(&standings));
    }
    Ok(())
}

pub fn handle_pairings(service: &TournamentService, json: bool) -> Result<()> {
    let pairings = service.swiss_pairings()?;
    if json {
        println!("{}", output::to_json(&pairings)?);
    } else {
        println!("{}", output::render_pairings(&pairings));
    }
    Ok(())
}

pub fn handle_completions(shell: clap_complete::Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
}
