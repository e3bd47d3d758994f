pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod pairing;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::database::StandingEntry;
use crate::pairing::Pairing;
use crate::services::tournament::TournamentService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_init() -> Result<()> {
    open_service()?.reset()?;
    println!("Tournament database initialized");
    Ok(())
}

pub fn handle_register(name: &str) -> Result<()> {
    let player = open_service()?.register_player(name)?;
    println!("Registered '{}' with id {}", player.name, player.id);
    Ok(())
}

pub fn handle_report(winner: i64, loser: i64) -> Result<()> {
    let record = open_service()?.report_match(winner, loser)?;
    println!("Recorded match {}: {} beat {}", record.id, winner, loser);
    Ok(())
}

pub fn handle_standings(json: bool) -> Result<()> {
    let standings = open_service()?.standings()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&standings)?);
    } else {
        print_standings(&standings);
    }
    Ok(())
}

pub fn handle_pairings(json: bool) -> Result<()> {
    let pairings = open_service()?.swiss_pairings()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&pairings)?);
    } else {
        print_pairings(&pairings);
    }
    Ok(())
}

pub fn handle_clear_matches() -> Result<()> {
    let service = open_service()?;
    service.clear_matches()?;
    println!("Matches cleared ({} remaining)", service.count_matches()?);
    Ok(())
}

pub fn handle_clear_players() -> Result<()> {
    let service = open_service()?;
    service.clear_players()?;
    println!("Players cleared ({} remaining)", service.count_players()?);
    Ok(())
}

fn open_service() -> Result<TournamentService> {
    let config = AppConfig::new();
    let service = TournamentService::open(&config.storage.database_path)?;
    Ok(service)
}

fn print_standings(standings: &[StandingEntry]) {
    println!("{:>6}  {:<24} {:>5} {:>8}", "id", "name", "wins", "matches");
    for entry in standings {
        println!(
            "{:>6}  {:<24} {:>5} {:>8}",
            entry.player_id, entry.name, entry.wins, entry.matches_played
        );
    }
}

fn print_pairings(pairings: &[Pairing]) {
    for (round_table, pairing) in pairings.iter().enumerate() {
        println!(
            "Table {}: {} ({}) vs {} ({})",
            round_table + 1,
            pairing.player1_name,
            pairing.player1_id,
            pairing.player2_name,
            pairing.player2_id
        );
    }
}
