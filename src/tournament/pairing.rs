use super::standings::rank_order;
use super::types::{Pairing, Standing};
use crate::errors::{TournamentError, TournamentResult};

/// Pairs adjacent players in the ranking: 1st with 2nd, 3rd with 4th, and so
/// on. The input is re-ranked here, so callers may pass standings in any
/// order.
pub fn swiss_pairings(standings: &[Standing]) -> TournamentResult<Vec<Pairing>> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount(standings.len()));
    }

    let mut ranked: Vec<&Standing> = standings.iter().collect();
    ranked.sort_by(|a, b| rank_order(a, b));

    let pairings = ranked
        .chunks_exact(2)
        .map(|pair| Pairing {
            first_id: pair[0].player_id,
            first_name: pair[0].name.clone(),
            second_id: pair[1].player_id,
            second_name: pair[1].name.clone(),
        })
        .collect();

    Ok(pairings)
}
