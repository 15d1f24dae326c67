use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum MatchError {
    /// The embedding backend is not ready. Non-retryable inside a ranking
    /// call; callers may retry once the model reaches `Ready`.
    #[error("embedding model unavailable: {0}")]
    ModelUnavailable(String),
}
