use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    /// Message reported by the provider itself, passed through verbatim.
    #[error("{0}")]
    Provider(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("response stream interrupted: {0}")]
    Stream(String),
}
