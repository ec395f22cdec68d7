//! TOML configuration.
//!
//! ```toml
//! [client]
//! proxies = ["http://proxy:8080"]
//! user_agent = "my-app/1.0"
//!
//! [headers]
//! Authorization = "Bearer token"
//!
//! [store]
//! path = "/var/lib/my-app/netfish"
//! ```
//!
//! Every table and field is optional.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use netfish_fetch::ClientSetting;
use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub client: ClientSetting,
    /// Headers sent with every request.
    pub headers: BTreeMap<String, String>,
    pub store: StoreSetting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreSetting {
    /// Directory of the on-disk store. Without it an in-memory store is used.
    pub path: Option<PathBuf>,
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
