use anyhow::Result;

use swiss_tournament::cli::Command;
use swiss_tournament::{
    handle_clear_matches, handle_clear_players, handle_init, handle_pairings, handle_register,
    handle_report, handle_standings, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Init => handle_init(),
        Command::Register { name } => handle_register(name),
        Command::Report { winner, loser } => handle_report(*winner, *loser),
        Command::Standings { json } => handle_standings(*json),
        Command::Pairings { json } => handle_pairings(*json),
        Command::ClearMatches => handle_clear_matches(),
        Command::ClearPlayers => handle_clear_players(),
    }
}
