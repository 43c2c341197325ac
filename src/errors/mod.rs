//! Error types for store and engine operations.

use thiserror::Error;

use crate::tournament::PlayerId;

#[derive(Debug, Error)]
pub enum TournamentError {
    /// Storage could not be reached (pool build or checkout failed)
    #[error("Failed to connect to tournament database: {0}")]
    Connection(#[from] r2d2::Error),

    /// Malformed statement or constraint violation
    #[error("Database statement failed: {0}")]
    Statement(#[from] rusqlite::Error),

    /// A single-row query came back empty
    #[error("Query returned no rows: {0}")]
    EmptyResult(&'static str),

    #[error("Player {0} cannot be reported as both winner and loser")]
    SelfMatch(PlayerId),

    #[error("Swiss pairing needs an even number of players, found {0}")]
    OddPlayerCount(usize),
}

pub type TournamentResult<T> = Result<T, TournamentError>;

impl TournamentError {
    /// True when the storage engine rejected a statement on a constraint
    /// (foreign key, not-null).
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            TournamentError::Statement(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}
