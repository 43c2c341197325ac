use serde::Serialize;

use crate::tournament::{MatchId, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub id: MatchId,
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
}
