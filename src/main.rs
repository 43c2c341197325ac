use anyhow::Result;

use swiss_tournament::cli::{Cli, Command};
use swiss_tournament::services::TournamentService;
use swiss_tournament::{
    handle_completions, handle_pairings, handle_register, handle_report, handle_standings,
    interpret, open_service, output,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(cli)
}

fn execute_command(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Completions { shell } => {
            handle_completions(shell);
            Ok(())
        }
        command => {
            let service = open_service(cli.database)?;
            execute_with_service(&service, command)
        }
    }
}

fn execute_with_service(service: &TournamentService, command: Command) -> Result<()> {
    match command {
        Command::Init => println!("Database ready"),
        Command::Reset => service.reset()?,
        Command::Register { name } => handle_register(service, &name)?,
        Command::Report { winner, loser } => handle_report(service, winner, loser)?,
        Command::Count => println!("{}", service.count_players()?),
        Command::Players => println!("{}", output::render_players(&service.list_players()?)),
        Command::Standings { json } => handle_standings(service, json)?,
        Command::Pairings { json } => handle_pairings(service, json)?,
        Command::DeleteMatches => service.delete_matches()?,
        Command::DeletePlayers => service.delete_players()?,
        Command::Completions { .. } => {}
    }

    Ok(())
}
