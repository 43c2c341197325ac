use log::debug;
use rusqlite::params;

use super::connection::DbConn;
use super::models::Match;
use crate::errors::{TournamentError, TournamentResult};
use crate::tournament::PlayerId;

pub fn insert_match(
    conn: &mut DbConn,
    winner_id: PlayerId,
    loser_id: PlayerId,
) -> TournamentResult<Match> {
    if winner_id == loser_id {
        return Err(TournamentError::SelfMatch(winner_id));
    }

    let sql = "INSERT INTO matches (winner_id, loser_id) VALUES (?1, ?2) RETURNING id, winner_id, loser_id";

    let recorded = conn.query_row(sql, params![winner_id, loser_id], parse_match_row)?;
    debug!(
        "Inserted match {}: {} beat {}",
        recorded.id, recorded.winner_id, recorded.loser_id
    );
    Ok(recorded)
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        winner_id: row.get(1)?,
        loser_id: row.get(2)?,
    })
}

pub fn delete_all(conn: &mut DbConn) -> TournamentResult<usize> {
    let removed = conn.execute("DELETE FROM matches", [])?;
    Ok(removed)
}

pub fn list_all(conn: &rusqlite::Connection) -> TournamentResult<Vec<Match>> {
    let sql = "SELECT id, winner_id, loser_id FROM matches ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_memory_pool, get_connection, players, setup};

    fn fresh_connection() -> DbConn {
        let pool = create_memory_pool().unwrap();
        let mut conn = get_connection(&pool).unwrap();
        setup::ensure_schema(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_insert_and_list() {
        let mut conn = fresh_connection();
        let a = players::insert_player(&mut conn, "Ada").unwrap();
        let b = players::insert_player(&mut conn, "Grace").unwrap();

        let recorded = insert_match(&mut conn, a.id, b.id).unwrap();

        assert_eq!(recorded.winner_id, a.id);
        assert_eq!(recorded.loser_id, b.id);
        assert_eq!(list_all(&conn).unwrap(), vec![recorded]);
    }

    #[test]
    fn test_rematch_is_allowed() {
        let mut conn = fresh_connection();
        let a = players::insert_player(&mut conn, "Ada").unwrap();
        let b = players::insert_player(&mut conn, "Grace").unwrap();

        insert_match(&mut conn, a.id, b.id).unwrap();
        insert_match(&mut conn, a.id, b.id).unwrap();

        assert_eq!(list_all(&conn).unwrap().len(), 2);
    }

    #[test]
    fn test_self_match_rejected_without_insert() {
        let mut conn = fresh_connection();
        let a = players::insert_player(&mut conn, "Ada").unwrap();

        let err = insert_match(&mut conn, a.id, a.id).unwrap_err();

        assert!(matches!(err, TournamentError::SelfMatch(id) if id == a.id));
        assert!(list_all(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_player_violates_constraint() {
        let mut conn = fresh_connection();
        let a = players::insert_player(&mut conn, "Ada").unwrap();

        let err = insert_match(&mut conn, a.id, a.id + 42).unwrap_err();

        assert!(err.is_constraint_violation());
    }

    #[test]
    fn test_clearing_referenced_players_is_rejected() {
        let mut conn = fresh_connection();
        let a = players::insert_player(&mut conn, "Ada").unwrap();
        let b = players::insert_player(&mut conn, "Grace").unwrap();
        let recorded = insert_match(&mut conn, a.id, b.id).unwrap();

        let err = players::delete_all(&mut conn).unwrap_err();

        assert!(err.is_constraint_violation());
        assert_eq!(list_all(&conn).unwrap(), vec![recorded]);
        assert_eq!(players::count(&mut conn).unwrap(), 2);
    }

    #[test]
    fn test_players_clear_once_matches_are_gone() {
        let mut conn = fresh_connection();
        let a = players::insert_player(&mut conn, "Ada").unwrap();
        let b = players::insert_player(&mut conn, "Grace").unwrap();
        insert_match(&mut conn, a.id, b.id).unwrap();

        delete_all(&mut conn).unwrap();
        players::delete_all(&mut conn).unwrap();

        assert_eq!(players::count(&mut conn).unwrap(), 0);
    }
}
