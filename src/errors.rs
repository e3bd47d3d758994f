use thiserror::Error;

pub type Result<T> = std::result::Result<T, TournamentError>;

/// Error kinds callers can act on: a failed write is not the same thing
/// as an unreachable store, and pairing an odd field is neither.
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("storage unavailable: {message}")]
    StorageUnavailable { message: String },

    #[error("constraint violation: {message}")]
    ConstraintViolation { message: String },

    #[error("invalid state: {message}")]
    InvalidState { message: String },
}

impl TournamentError {
    pub fn invalid_state(message: impl Into<String>) -> Self {
        TournamentError::InvalidState {
            message: message.into(),
        }
    }
}

impl From<rusqlite::Error> for TournamentError {
    fn from(err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(rusqlite::ErrorCode::ConstraintViolation) => {
                TournamentError::ConstraintViolation {
                    message: err.to_string(),
                }
            }
            _ => TournamentError::StorageUnavailable {
                message: err.to_string(),
            },
        }
    }
}

impl From<r2d2::Error> for TournamentError {
    fn from(err: r2d2::Error) -> Self {
        TournamentError::StorageUnavailable {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_code_maps_to_constraint_violation() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (v INTEGER NOT NULL CHECK (v > 0))")
            .unwrap();

        let err = conn
            .execute("INSERT INTO t (v) VALUES (0)", [])
            .map_err(TournamentError::from)
            .unwrap_err();

        assert!(matches!(err, TournamentError::ConstraintViolation { .. }));
    }

    #[test]
    fn other_sqlite_errors_map_to_storage_unavailable() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();

        let err = conn
            .execute("SELECT * FROM missing_table", [])
            .map_err(TournamentError::from)
            .unwrap_err();

        assert!(matches!(err, TournamentError::StorageUnavailable { .. }));
    }
}
