//! Error types for netfish-store.

use std::string::FromUtf8Error;

use netfish_core::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Backend(#[from] sled::Error),

    #[error("stored text is not UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
