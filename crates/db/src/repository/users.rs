//! User account persistence.
//!
//! Duplicate usernames and emails are rejected only by the table's UNIQUE
//! constraints. Nothing is looked up before the insert, so of two concurrent
//! signups for the same name exactly one gets through.

use crate::{
    models::{NewUser, UserRow},
    DbError, DbPool,
};

/// Insert a user and return the stored row without its hash.
///
/// Returns `DbError::UniqueViolation` when the username or email is taken.
pub async fn create_user(pool: &DbPool, user: &NewUser) -> Result<UserRow, DbError> {
    let mut conn = pool.acquire().await?;

    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (username, email, password_hash)
        VALUES ($1, $2, $3)
        RETURNING id, username, email, created_at
        "#,
    )
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password_hash)
    .fetch_one(&mut *conn)
    .await
    .map_err(DbError::from_statement)?;

    Ok(row)
}
