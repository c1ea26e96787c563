//! Error Mapper: every failure a handler can produce, and the HTTP response
//! it becomes.
//!
//! Responses are JSON `{"error": <kind>, "message": <text>}`. 400/404/409
//! carry short fixed messages; 500s carry the underlying error text and are
//! logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use db::DbError;
use serde_json::json;

/// Request body problems, reported as 400.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body is not JSON of the expected shape. Holds the parser's detail.
    MalformedBody(String),

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedBody(_) => write!(f, "malformed request body"),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// 400
    Validation(ValidationError),

    /// 404
    NotFound { resource: &'static str },

    /// 409
    Conflict { message: &'static str },

    /// 500, logged
    Database(DbError),

    /// 500, logged
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Database(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound { .. } => "not_found",
            Self::Conflict { .. } => "conflict",
            Self::Database(_) | Self::Internal { .. } => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind();

        let body = match &self {
            Self::Validation(ValidationError::MalformedBody(detail)) => json!({
                "error": kind,
                "message": "malformed request body",
                "detail": detail,
            }),
            Self::Validation(e) => json!({ "error": kind, "message": e.to_string() }),
            Self::NotFound { resource } => json!({
                "error": kind,
                "message": format!("{} not found", resource),
            }),
            Self::Conflict { message } => json!({ "error": kind, "message": message }),
            Self::Database(e) => {
                tracing::error!(error = %e, "Database error");
                json!({ "error": kind, "message": e.to_string() })
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                json!({ "error": kind, "message": message })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource } => Self::NotFound { resource },
            DbError::UniqueViolation { .. } => Self::Conflict {
                message: "record already exists",
            },
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Empty {
            field: "description",
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "description cannot be empty");
    }

    #[tokio::test]
    async fn malformed_body_keeps_a_stable_message() {
        let err = ApiError::from(ValidationError::MalformedBody(
            "expected value at line 1 column 1".into(),
        ));
        let body = body_json(err.into_response()).await;
        assert_eq!(body["message"], "malformed request body");
        assert_eq!(body["detail"], "expected value at line 1 column 1");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::from(DbError::NotFound {
            resource: "expense",
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "expense not found");
    }

    #[test]
    fn unique_violation_is_409() {
        let err = ApiError::from(DbError::UniqueViolation {
            constraint: "users_email_key".into(),
        });
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn store_failures_are_500_with_the_error_text() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "internal_error");
        assert!(body["message"].as_str().unwrap().contains("timed out"));
    }

    #[test]
    fn connectivity_and_schema_failures_are_500() {
        let connectivity = ApiError::from(DbError::Connectivity(sqlx::Error::PoolClosed));
        let schema = ApiError::from(DbError::Schema(sqlx::Error::PoolClosed));
        assert_eq!(connectivity.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(schema.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
