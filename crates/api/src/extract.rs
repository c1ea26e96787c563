//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ValidationError};

/// JSON request body whose every failure is a 400.
///
/// Unlike `axum::Json` this ignores `Content-Type` and does not split syntax
/// errors (400) from shape errors (422).
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ValidationError::MalformedBody(e.body_text()))?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| ValidationError::MalformedBody(e.to_string()))?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        name: String,
    }

    async fn extract(body: &'static str) -> Result<Probe, ApiError> {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap();
        JsonBody::<Probe>::from_request(req, &()).await.map(|b| b.0)
    }

    #[tokio::test]
    async fn parses_without_content_type() {
        let parsed = extract(r#"{"name":"ok"}"#).await.unwrap();
        assert_eq!(parsed.name, "ok");
    }

    #[tokio::test]
    async fn syntax_and_shape_errors_are_both_validation() {
        for body in ["{not json", r#"{"name": 5}"#, "{}", ""] {
            let err = extract(body).await.unwrap_err();
            assert!(
                matches!(err, ApiError::Validation(ValidationError::MalformedBody(_))),
                "body {body:?} gave {err:?}"
            );
        }
    }
}
