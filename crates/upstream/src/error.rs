use icebreak_common::error::IcebreakError;
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("HTTP {status}: {body}")]
    HttpError { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("{0} is not configured")]
    MissingCredentials(&'static str),
}

impl From<UpstreamError> for IcebreakError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::UnexpectedShape(msg) => IcebreakError::MalformedResponse(msg),
            UpstreamError::MissingCredentials(key) => {
                IcebreakError::Config(format!("{key} is not configured on the server"))
            }
            UpstreamError::Encode(e) => IcebreakError::Internal(e.to_string()),
            other => IcebreakError::Upstream(other.to_string()),
        }
    }
}
