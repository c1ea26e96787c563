//! Expense CRUD operations.

use crate::{
    models::{ExpenseFields, ExpenseRow},
    DbError, DbPool,
};

/// Return every expense, most recent `date` first.
pub async fn list_expenses(pool: &DbPool) -> Result<Vec<ExpenseRow>, DbError> {
    let mut conn = pool.acquire().await?;

    let rows = sqlx::query_as::<_, ExpenseRow>(
        r#"SELECT id, description, amount, category, date FROM expenses ORDER BY date DESC"#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}

/// Insert a new expense and return the stored row, including the id the
/// store assigned and the amount as rounded by the column type.
pub async fn create_expense(
    pool: &DbPool,
    fields: &ExpenseFields,
) -> Result<ExpenseRow, DbError> {
    let mut conn = pool.acquire().await?;

    let row = sqlx::query_as::<_, ExpenseRow>(
        r#"
        INSERT INTO expenses (description, amount, category, date)
        VALUES ($1, $2, $3, $4)
        RETURNING id, description, amount, category, date
        "#,
    )
    .bind(&fields.description)
    .bind(fields.amount)
    .bind(&fields.category)
    .bind(fields.date)
    .fetch_one(&mut *conn)
    .await
    .map_err(DbError::from_statement)?;

    Ok(row)
}

/// Overwrite every mutable column of expense `id`.
///
/// Returns `DbError::NotFound` if no row matched; never inserts.
pub async fn update_expense(
    pool: &DbPool,
    id: i32,
    fields: &ExpenseFields,
) -> Result<(), DbError> {
    let mut conn = pool.acquire().await?;

    let result = sqlx::query(
        r#"
        UPDATE expenses
        SET description = $1, amount = $2, category = $3, date = $4
        WHERE id = $5
        "#,
    )
    .bind(&fields.description)
    .bind(fields.amount)
    .bind(&fields.category)
    .bind(fields.date)
    .bind(id)
    .execute(&mut *conn)
    .await
    .map_err(DbError::from_statement)?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound { resource: "expense" });
    }

    Ok(())
}

/// Permanently delete expense `id`.
///
/// Returns `DbError::NotFound` if no row was deleted.
pub async fn delete_expense(pool: &DbPool, id: i32) -> Result<(), DbError> {
    let mut conn = pool.acquire().await?;

    let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound { resource: "expense" });
    }

    Ok(())
}
