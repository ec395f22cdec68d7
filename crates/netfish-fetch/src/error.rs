//! Error types for netfish-fetch.

use netfish_core::ValidationError;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum FetchError {
    /// A guard rejected the input; no request was sent.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("{0}")]
    Transport(#[source] BoxError),

    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl FetchError {
    pub(crate) fn transport<E>(e: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        FetchError::Transport(Box::new(e))
    }

    /// Returns `true` if the request never reached the transport.
    pub fn is_invalid(&self) -> bool {
        matches!(self, FetchError::Invalid(_))
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
