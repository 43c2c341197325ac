use log::info;

use crate::config::StoreSettings;
use crate::database::{self, matches, players, setup, DbPool, Player};
use crate::errors::TournamentResult;
use crate::tournament::{self, MatchId, Pairing, PlayerId, Standing};

/// Public call surface of the tournament. Holds the storage handle; every
/// call checks out one connection and gives it back before returning.
pub struct TournamentService {
    pool: DbPool,
}

impl TournamentService {
    /// Opens (or creates) the configured database and makes sure both
    /// relations exist.
    pub fn open(settings: &StoreSettings) -> TournamentResult<Self> {
        let pool = database::create_pool(settings)?;
        info!("Opened tournament database at {}", settings.database_path);
        Self::with_pool(pool)
    }

    pub fn in_memory() -> TournamentResult<Self> {
        Self::with_pool(database::create_memory_pool()?)
    }

    pub fn with_pool(pool: DbPool) -> TournamentResult<Self> {
        let mut conn = database::get_connection(&pool)?;
        setup::ensure_schema(&mut conn)?;
        drop(conn);

        Ok(Self { pool })
    }

    /// Drops and recreates both relations.
    pub fn reset(&self) -> TournamentResult<()> {
        let mut conn = database::get_connection(&self.pool)?;
        setup::reset_database(&mut conn)
    }

    pub fn delete_matches(&self) -> TournamentResult<()> {
        let mut conn = database::get_connection(&self.pool)?;
        let removed = matches::delete_all(&mut conn)?;
        info!("Deleted {} matches", removed);
        Ok(())
    }

    /// Fails with a constraint `Statement` error while any match still
    /// references a player; call `delete_matches` first. Matches are never
    /// removed here.
    pub fn delete_players(&self) -> TournamentResult<()> {
        let mut conn = database::get_connection(&self.pool)?;
        let removed = players::delete_all(&mut conn)?;
        info!("Deleted {} players", removed);
        Ok(())
    }

    pub fn count_players(&self) -> TournamentResult<i64> {
        let mut conn = database::get_connection(&self.pool)?;
        players::count(&mut conn)
    }

    pub fn register_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let mut conn = database::get_connection(&self.pool)?;
        let player = players::insert_player(&mut conn, name)?;
        info!("Registered player {} as #{}", player.name, player.id);
        Ok(player.id)
    }

    pub fn report_match(&self, winner_id: PlayerId, loser_id: PlayerId) -> TournamentResult<MatchId> {
        let mut conn = database::get_connection(&self.pool)?;
        let recorded = matches::insert_match(&mut conn, winner_id, loser_id)?;
        info!("Recorded match #{}: {} beat {}", recorded.id, winner_id, loser_id);
        Ok(recorded.id)
    }

    pub fn list_players(&self) -> TournamentResult<Vec<Player>> {
        let conn = database::get_connection(&self.pool)?;
        players::list_all(&conn)
    }

    /// Standings ranked by wins, ties in registration order.
    pub fn player_standings(&self) -> TournamentResult<Vec<Standing>> {
        let mut conn = database::get_connection(&self.pool)?;

        // Both reads see the same snapshot.
        let tx = conn.transaction()?;
        let all_players = players::list_all(&tx)?;
        let all_matches = matches::list_all(&tx)?;
        tx.commit()?;

        Ok(tournament::compute_standings(&all_players, &all_matches))
    }

    /// Next-round pairings. Fails with `OddPlayerCount` unless an even number
    /// of players is registered.
    pub fn swiss_pairings(&self) -> TournamentResult<Vec<Pairing>> {
        let standings = self.player_standings()?;
        tournament::swiss_pairings(&standings)
    }
}
