/// The error surface of every use case. Each variant maps to exactly one
/// HTTP status in the presentation layer; nothing is retried and nothing is
/// fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A referenced entity is absent (404).
    #[error("{0}")]
    NotFound(String),
    /// A business rule was violated: duplicate email, unknown role,
    /// duplicate grade, not enrolled (400).
    #[error("{0}")]
    InvalidState(String),
    /// Bad credentials (401).
    #[error("Invalid email or password")]
    Unauthorized,
    /// Authenticated but the role does not grant the endpoint (403).
    #[error("Access denied")]
    Forbidden,
    /// Persistence or other unexpected failure (500).
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;
