//! Small JSON utility kit.
//!
//! Bundles validated HTTP verbs, object transforms, local key-value
//! persistence and text helpers behind one facade.
//!
//! # Crates
//!
//! - [`netfish_core`] - guards, the diagnostic sink, object and text helpers
//! - [`netfish_store`] - [`LocalStorage`] over an injected [`Storage`]
//! - [`netfish_fetch`] - [`Client`] over an injected [`Transport`]
//!
//! # Diagnostics
//!
//! Rejected input and request failures are reported through `tracing` under
//! the `netfish` target, prefixed with `Netfish Error |`. Install a
//! subscriber in the host application to see them.
//!
//! # Example
//!
//! ```no_run
//! use netfish::{Config, Netfish};
//! use serde_json::json;
//!
//! # async fn run() -> netfish::Result<()> {
//! let netfish = Netfish::from_config(Config::load("netfish.toml")?)?;
//!
//! let todo = netfish.get("https://api.example.com/todos/1").await?;
//! netfish.set_item("last-todo", &todo)?;
//! # Ok(())
//! # }
//! ```

use netfish_fetch::ReqwestTransport;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

pub use config::{Config, StoreSetting};
pub use error::{Error, Result};

pub use netfish_core::{ValidationError, guard, object, render_error, text};
pub use netfish_fetch::{
    Client, ClientSetting, FetchError, Method, RequestDescriptor, Transport, TransportResponse,
};
pub use netfish_store::{LocalStorage, MemoryStore, SledStore, Storage, StoreError};

mod config;
mod error;

/// A request client and a local store wired together.
pub struct Netfish<T = ReqwestTransport, S = Box<dyn Storage>> {
    client: Client<T>,
    storage: LocalStorage<S>,
}

impl Netfish {
    /// Builds a reqwest transport and opens the configured store.
    pub fn from_config(config: Config) -> Result<Self> {
        let transport = ReqwestTransport::with_setting(config.client)?;

        let mut client = Client::new(transport);
        for (name, value) in config.headers {
            client = client.with_header(name, value);
        }

        let store: Box<dyn Storage> = match &config.store.path {
            Some(path) => {
                debug!(path = %path.display(), "opening on-disk store");
                Box::new(SledStore::open(path)?)
            }
            None => {
                debug!("using in-memory store");
                Box::new(MemoryStore::new())
            }
        };

        Ok(Self {
            client,
            storage: LocalStorage::new(store),
        })
    }
}

impl<T: Transport, S: Storage> Netfish<T, S> {
    pub fn new(transport: T, store: S) -> Self {
        Self::from_parts(Client::new(transport), LocalStorage::new(store))
    }

    pub fn from_parts(client: Client<T>, storage: LocalStorage<S>) -> Self {
        Self { client, storage }
    }

    pub fn client(&self) -> &Client<T> {
        &self.client
    }

    pub fn storage(&self) -> &LocalStorage<S> {
        &self.storage
    }

    pub async fn get(&self, url: &str) -> Result<Value> {
        Ok(self.client.get(url).await?)
    }

    pub async fn post<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> Result<Value> {
        Ok(self.client.post(url, body).await?)
    }

    pub async fn put<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> Result<Value> {
        Ok(self.client.put(url, body).await?)
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> Result<Value> {
        Ok(self.client.patch(url, body).await?)
    }

    pub async fn delete(&self, url: &str) -> Result<Value> {
        Ok(self.client.delete(url).await?)
    }

    pub fn set_item<V: Serialize + ?Sized>(&self, key: &str, value: &V) -> Result<()> {
        Ok(self.storage.set_item(key, value)?)
    }

    pub fn get_item<V: DeserializeOwned>(&self, key: &str) -> Result<Option<V>> {
        Ok(self.storage.get_item(key)?)
    }

    pub fn get_all_items(&self) -> Result<Map<String, Value>> {
        Ok(self.storage.get_all_items()?)
    }
}
