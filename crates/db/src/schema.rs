//! Idempotent table creation, run before the server accepts traffic.

use tracing::info;

use crate::{DbError, DbPool};

const CREATE_EXPENSES: &str = r#"
    CREATE TABLE IF NOT EXISTS expenses (
        id SERIAL PRIMARY KEY,
        description TEXT NOT NULL,
        amount DECIMAL(10,2) NOT NULL,
        category TEXT NOT NULL,
        date TIMESTAMP NOT NULL
    )
"#;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        username VARCHAR(255) NOT NULL UNIQUE,
        email VARCHAR(255) NOT NULL UNIQUE,
        password_hash VARCHAR(255) NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Create the `expenses` and `users` tables if they are missing.
///
/// Leaves an existing schema untouched, so it is safe on every start.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), DbError> {
    let mut conn = pool.inner().acquire().await.map_err(DbError::Schema)?;

    for statement in [CREATE_EXPENSES, CREATE_USERS] {
        sqlx::query(statement)
            .execute(&mut *conn)
            .await
            .map_err(DbError::Schema)?;
    }

    info!("Database schema ensured");
    Ok(())
}
