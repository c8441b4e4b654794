use thiserror::Error;
use uuid::Uuid;

/// Failures reported by a [`UserStore`](super::store::UserStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("constraint violation: {0}")]
    Conflict(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Maps unique-constraint violations to `Conflict`, everything else to `Database`.
    pub fn from_sqlx(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                let what = db.constraint().unwrap_or("unique constraint").to_string();
                StoreError::Conflict(what)
            }
            _ => StoreError::Database(e),
        }
    }
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("user {0} not found")]
    NotFound(Uuid),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("password hashing failed: {0}")]
    Hash(String),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
