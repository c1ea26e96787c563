use axum::{extract::State, http::StatusCode, Json};
use db::models::NewUser;
use db::repository::users as user_repo;
use db::DbError;

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::models::{SignupRequest, User};
use crate::password;
use crate::AppState;

/// Register an account. Duplicate usernames or emails surface as 409 from
/// the insert itself.
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SignupRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    req.validate()?;
    let SignupRequest {
        username,
        email,
        password,
    } = req;

    let password_hash = password::hash_password(password).await?;
    let new_user = NewUser {
        username,
        email,
        password_hash,
    };

    match user_repo::create_user(&state.pool, &new_user).await {
        Ok(row) => {
            tracing::info!(user_id = row.id, username = %row.username, "User signed up");
            Ok((StatusCode::CREATED, Json(row.into())))
        }
        Err(DbError::UniqueViolation { constraint }) => {
            tracing::debug!(%constraint, "Signup rejected as duplicate");
            Err(ApiError::Conflict {
                message: "username or email already exists",
            })
        }
        Err(e) => Err(e.into()),
    }
}
