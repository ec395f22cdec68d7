use netfish_core::{guard, render_error};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{Result, Storage};

/// JSON accessors over an injected [`Storage`].
pub struct LocalStorage<S> {
    backend: S,
}

impl<S: Storage> LocalStorage<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Serializes `value` as JSON and stores it under `key`.
    ///
    /// A value that serializes to `null` is rejected by the presence guard
    /// and nothing is written.
    pub fn set_item<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        guard::require_present(&[&value])?;

        let text = serde_json::to_string(&value)?;
        debug!(key, bytes = text.len(), "storing item");
        self.backend.set(key, &text)
    }

    /// Reads and deserializes the value stored under `key`.
    ///
    /// A missing key, or one holding an empty string, emits an "Item not
    /// found" diagnostic and yields `Ok(None)`.
    pub fn get_item<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.backend.get(key)? {
            Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => {
                render_error("Item not found");
                Ok(None)
            }
        }
    }

    /// Collects every entry in the backing store into one mapping.
    ///
    /// Entries written by someone else whose text is not valid JSON are kept
    /// as JSON strings holding the raw text. Keys removed between listing and
    /// reading are skipped.
    pub fn get_all_items(&self) -> Result<Map<String, Value>> {
        let mut items = Map::new();

        for key in self.backend.keys()? {
            let Some(raw) = self.backend.get(&key)? else {
                continue;
            };

            let value = match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!(key = %key, error = %e, "stored value is not JSON, keeping raw text");
                    Value::String(raw)
                }
            };
            items.insert(key, value);
        }

        Ok(items)
    }
}
