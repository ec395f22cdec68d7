//! JSON-valued local key-value persistence.
//!
//! # Architecture
//!
//! - [`Storage`] - the text key-value service the accessors run against
//! - [`MemoryStore`] / [`SledStore`] - in-process and on-disk implementations
//! - [`LocalStorage`] - `set_item` / `get_item` / `get_all_items`, serializing
//!   values as JSON text
//!
//! The store is injected rather than ambient, and it may be shared with other
//! writers: nothing here assumes every entry was written by [`LocalStorage`].
//!
//! # Example
//!
//! ```
//! use netfish_store::{LocalStorage, MemoryStore};
//! use serde_json::{json, Value};
//!
//! let storage = LocalStorage::new(MemoryStore::new());
//! storage.set_item("k", &json!({"x": 1})).unwrap();
//!
//! let value: Option<Value> = storage.get_item("k").unwrap();
//! assert_eq!(value, Some(json!({"x": 1})));
//! ```

pub use error::{Result, StoreError};
pub use local::LocalStorage;
pub use memory::MemoryStore;
pub use sled_store::SledStore;

mod error;
mod local;
mod memory;
mod sled_store;

/// Text key-value service backing [`LocalStorage`].
///
/// Implementations provide no atomicity across calls; concurrent writers
/// elsewhere in the process may interleave with any accessor.
pub trait Storage: Send + Sync {
    /// Reads the raw text stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Lists every key currently present, including ones written by others.
    fn keys(&self) -> Result<Vec<String>>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn keys(&self) -> Result<Vec<String>> {
        (**self).keys()
    }
}
