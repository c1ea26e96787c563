//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// The pool could not be established or failed its liveness ping.
    #[error("database unreachable: {0}")]
    Connectivity(#[source] sqlx::Error),

    /// The configuration does not describe a usable connection target.
    #[error("invalid connection target: {0}")]
    InvalidTarget(String),

    /// `CREATE TABLE IF NOT EXISTS` statements could not be applied.
    #[error("schema setup failed: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// An insert collided with a unique column.
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },
}

impl DbError {
    /// Classify a statement failure, separating unique-constraint rejections
    /// (SQLSTATE 23505) from every other store failure.
    pub(crate) fn from_statement(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::UniqueViolation {
                    constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                };
            }
        }
        Self::Sqlx(err)
    }
}
