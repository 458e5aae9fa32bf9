use thiserror::Error;

/// Reasons a stored bearer token cannot be turned into session claims.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token has no payload segment")]
    MissingPayload,

    #[error("token payload is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("token payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("token payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("token payload is null")]
    NullPayload,
}
