use log::debug;
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::Player;
use crate::errors::{TournamentError, TournamentResult};

pub fn insert_player(conn: &mut DbConn, name: &str) -> TournamentResult<Player> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name";

    let player = conn.query_row(sql, params![name], parse_player_row)?;
    debug!("Inserted player {} ({})", player.id, player.name);
    Ok(player)
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

pub fn delete_all(conn: &mut DbConn) -> TournamentResult<usize> {
    let removed = conn.execute("DELETE FROM players", [])?;
    Ok(removed)
}

pub fn count(conn: &mut DbConn) -> TournamentResult<i64> {
    let sql = "SELECT COUNT(*) FROM players";

    conn.query_row(sql, [], |row| row.get(0))
        .optional()?
        .ok_or(TournamentError::EmptyResult("player count"))
}

/// All players in registration order.
pub fn list_all(conn: &rusqlite::Connection) -> TournamentResult<Vec<Player>> {
    let sql = "SELECT id, name FROM players ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_memory_pool, get_connection, setup};

    fn fresh_connection() -> DbConn {
        let pool = create_memory_pool().unwrap();
        let mut conn = get_connection(&pool).unwrap();
        setup::ensure_schema(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_insert_assigns_distinct_ids() {
        let mut conn = fresh_connection();

        let first = insert_player(&mut conn, "Bruno Walton").unwrap();
        let second = insert_player(&mut conn, "Bruno Walton").unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(second.name, "Bruno Walton");
        assert_eq!(count(&mut conn).unwrap(), 2);
    }

    #[test]
    fn test_list_all_in_registration_order() {
        let mut conn = fresh_connection();
        for name in ["Markov", "Twilight", "Diane"] {
            insert_player(&mut conn, name).unwrap();
        }

        let names: Vec<String> = list_all(&conn).unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Markov", "Twilight", "Diane"]);
    }

    #[test]
    fn test_delete_all_twice() {
        let mut conn = fresh_connection();
        insert_player(&mut conn, "Boots O'Neal").unwrap();

        assert_eq!(delete_all(&mut conn).unwrap(), 1);
        assert_eq!(delete_all(&mut conn).unwrap(), 0);
        assert_eq!(count(&mut conn).unwrap(), 0);
    }
}
