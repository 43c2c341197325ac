use std::cmp::Ordering;
use std::collections::HashMap;

use super::types::{PlayerId, Standing};
use crate::database::{Match, Player};

#[derive(Default)]
struct Tally {
    wins: u32,
    played: u32,
}

/// Builds one standing per player from the full match log, ranked by wins.
///
/// Matches naming an id outside `players` are ignored. Players with equal
/// wins keep registration order (lower id first).
pub fn compute_standings(players: &[Player], matches: &[Match]) -> Vec<Standing> {
    let tallies = tally_matches(matches);

    let mut standings: Vec<Standing> = players
        .iter()
        .map(|player| {
            let tally = tallies.get(&player.id);
            Standing {
                player_id: player.id,
                name: player.name.clone(),
                wins: tally.map_or(0, |t| t.wins),
                matches_played: tally.map_or(0, |t| t.played),
            }
        })
        .collect();

    standings.sort_by(rank_order);
    standings
}

fn tally_matches(matches: &[Match]) -> HashMap<PlayerId, Tally> {
    let mut tallies: HashMap<PlayerId, Tally> = HashMap::new();

    for m in matches {
        let winner = tallies.entry(m.winner_id).or_default();
        winner.wins += 1;
        winner.played += 1;

        tallies.entry(m.loser_id).or_default().played += 1;
    }

    tallies
}

/// Wins descending, then player id ascending.
pub(crate) fn rank_order(a: &Standing, b: &Standing) -> Ordering {
    b.wins
        .cmp(&a.wins)
        .then_with(|| a.player_id.cmp(&b.player_id))
}
