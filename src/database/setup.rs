use log::{debug, info};

use super::connection::DbConn;
use crate::errors::TournamentResult;

const SCHEMA_SQL: &str = include_str!("schema.sql");

// Children before parents.
const DROP_STATEMENTS: [&str; 2] = ["DROP TABLE IF EXISTS matches", "DROP TABLE IF EXISTS players"];

/// Drops both relations and recreates them empty.
pub fn reset_database(conn: &mut DbConn) -> TournamentResult<()> {
    let mut statements: Vec<String> = DROP_STATEMENTS.iter().map(|s| s.to_string()).collect();
    statements.extend(split_sql_statements(SCHEMA_SQL));
    run_statements(conn, &statements)?;

    info!("Tournament schema reset");
    Ok(())
}

/// Creates the relations when they are missing, leaving existing rows alone.
pub fn ensure_schema(conn: &mut DbConn) -> TournamentResult<()> {
    run_statements(conn, &split_sql_statements(SCHEMA_SQL))?;

    debug!("Tournament schema present");
    Ok(())
}

fn run_statements(conn: &mut DbConn, statements: &[String]) -> TournamentResult<()> {
    let tx = conn.transaction()?;
    for statement in statements {
        tx.execute(statement, [])?;
    }
    tx.commit()?;
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
