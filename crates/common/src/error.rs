use thiserror::Error;

#[derive(Debug, Error)]
pub enum IcebreakError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type IcebreakResult<T> = Result<T, IcebreakError>;
