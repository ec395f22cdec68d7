//! Error types for the netfish facade.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    ParseConfig(#[from] toml::de::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error(transparent)]
    Store(#[from] netfish_store::StoreError),

    #[error(transparent)]
    Fetch(#[from] netfish_fetch::FetchError),
}

pub type Result<T> = std::result::Result<T, Error>;
