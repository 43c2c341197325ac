use std::time::Duration;

use r2d2_sqlite::SqliteConnectionManager;

use crate::config::StoreSettings;
use crate::errors::TournamentResult;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(settings: &StoreSettings) -> TournamentResult<DbPool> {
    let manager = build_manager(&settings.database_path);
    build_pool(manager, settings)
}

/// Single-connection pool over a private in-memory database. Each further
/// connection would open its own empty database.
pub fn create_memory_pool() -> TournamentResult<DbPool> {
    let manager = SqliteConnectionManager::memory().with_init(enable_foreign_keys);
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .build(manager)?;
    Ok(pool)
}

fn build_manager(path: &str) -> SqliteConnectionManager {
    SqliteConnectionManager::file(path).with_init(enable_foreign_keys)
}

// SQLite leaves foreign keys off unless asked, per connection.
fn enable_foreign_keys(conn: &mut rusqlite::Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
}

fn build_pool(manager: SqliteConnectionManager, settings: &StoreSettings) -> TournamentResult<DbPool> {
    let pool = r2d2::Pool::builder()
        .max_size(settings.pool_size.max(1))
        .connection_timeout(Duration::from_secs(settings.connect_timeout_secs.max(1)))
        .build(manager)?;
    Ok(pool)
}

pub fn get_connection(pool: &DbPool) -> TournamentResult<DbConn> {
    Ok(pool.get()?)
}
