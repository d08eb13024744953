use thiserror::Error;

/// Failure talking to the game service. Every variant aborts the step that
/// issued the request; none of them are retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("{endpoint} answered with HTTP {status}")]
    Status { endpoint: String, status: u16 },
    #[error("failed to decode {endpoint} response: {message}")]
    Decode { endpoint: String, message: String },
}

impl ApiError {
    pub fn endpoint(&self) -> &str {
        match self {
            ApiError::Transport { endpoint, .. }
            | ApiError::Status { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => endpoint,
        }
    }
}
