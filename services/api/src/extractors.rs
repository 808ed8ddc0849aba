use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

/// Session id taken from the `{id}` path segment.
pub struct SessionId(pub Uuid);

#[derive(Debug)]
pub struct SessionIdRejection(String);

impl IntoResponse for SessionIdRejection {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "success": false, "error": self.0 });
        (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for SessionId {
    type Rejection = SessionIdRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| SessionIdRejection("missing session id".to_string()))?;

        // A malformed id can never name a session.
        let id = Uuid::parse_str(&raw)
            .map_err(|_| SessionIdRejection(format!("session {raw} not found")))?;

        Ok(SessionId(id))
    }
}
