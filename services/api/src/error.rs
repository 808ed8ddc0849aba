use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use icebreak_common::error::IcebreakError;

pub struct ApiError(pub IcebreakError);

impl From<IcebreakError> for ApiError {
    fn from(err: IcebreakError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            IcebreakError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            IcebreakError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            other => {
                tracing::error!(error = %other, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
            }
        };

        let body = serde_json::json!({ "success": false, "error": message });
        (status, Json(body)).into_response()
    }
}
