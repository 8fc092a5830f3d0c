use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("request failed: {0}")]
    Request(String),

    /// Non-200 answer. The message is the server's `error` field when it sent
    /// one.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("response stream interrupted: {0}")]
    Stream(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}
