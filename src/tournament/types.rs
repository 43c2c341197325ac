use serde::Serialize;

pub type PlayerId = i32;
pub type MatchId = i32;

/// A player's record, derived from the match log on every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches_played: u32,
}

impl Standing {
    pub fn losses(&self) -> u32 {
        self.matches_played.saturating_sub(self.wins)
    }
}

/// Two players meeting in the next round; the first is the higher ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub first_id: PlayerId,
    pub first_name: String,
    pub second_id: PlayerId,
    pub second_name: String,
}
