use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::database::Player;
use crate::tournament::{Pairing, Standing};

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

pub fn render_players(players: &[Player]) -> String {
    let mut lines = vec![format!("{:>5}  {}", "ID", "Name").bold().to_string()];
    lines.extend(
        players
            .iter()
            .map(|p| format!("{:>5}  {}", p.id, p.name)),
    );
    lines.join("\n")
}

pub fn render_standings(standings: &[Standing]) -> String {
    let header = format!(
        "{:>4}  {:>5}  {:<24} {:>4} {:>6} {:>7}",
        "Rank", "ID", "Name", "Wins", "Losses", "Matches"
    );
    let mut lines = vec![header.bold().to_string()];

    for (idx, s) in standings.iter().enumerate() {
        let line = format!(
            "{:>4}  {:>5}  {:<24} {:>4} {:>6} {:>7}",
            idx + 1,
            s.player_id,
            s.name,
            s.wins,
            s.losses(),
            s.matches_played
        );
        lines.push(if idx == 0 && s.wins > 0 {
            line.green().to_string()
        } else {
            line
        });
    }

    lines.join("\n")
}

pub fn render_pairings(pairings: &[Pairing]) -> String {
    if pairings.is_empty() {
        return "No players registered".dimmed().to_string();
    }

    pairings
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            format!(
                "Table {:>3}: {} ({}) {} {} ({})",
                idx + 1,
                p.first_name,
                p.first_id,
                "vs".yellow(),
                p.second_name,
                p.second_id
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
