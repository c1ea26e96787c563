use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use db::repository::expenses as expense_repo;

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::models::{Expense, ExpenseInput};
use crate::AppState;

/// Path ids that are not a valid integer key can never match a row.
fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::NotFound { resource: "expense" })
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Expense>>, ApiError> {
    let rows = expense_repo::list_expenses(&state.pool).await?;
    Ok(Json(rows.into_iter().map(Expense::from).collect()))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ExpenseInput>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let fields = input.into_fields()?;
    let row = expense_repo::create_expense(&state.pool, &fields).await?;
    tracing::debug!(expense_id = row.id, "Expense created");
    Ok((StatusCode::CREATED, Json(row.into())))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<ExpenseInput>,
) -> Result<StatusCode, ApiError> {
    let fields = input.into_fields()?;
    let id = parse_id(&id)?;
    expense_repo::update_expense(&state.pool, id, &fields).await?;
    Ok(StatusCode::OK)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    expense_repo::delete_expense(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_parse() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("-3").unwrap(), -3);
    }

    #[test]
    fn non_numeric_ids_are_not_found() {
        for raw in ["abc", "1.5", "", "99999999999"] {
            let err = parse_id(raw).unwrap_err();
            assert!(matches!(err, ApiError::NotFound { resource: "expense" }));
        }
    }
}
