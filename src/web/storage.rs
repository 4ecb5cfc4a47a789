//! `localStorage` backend for [`PreferenceStore`](crate::core::PreferenceStore)

use wasm_bindgen::{JsCast, JsValue};
use web_sys::Storage;

use crate::core::store::{KeyValueStore, StoreError};

pub struct BrowserStorage {
    storage: Storage,
}

impl BrowserStorage {
    /// Open `window.localStorage`.
    ///
    /// Fails when storage is disabled or access throws (privacy mode,
    /// sandboxed frames).
    pub fn local() -> Result<Self, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StoreError::Unavailable),
            Err(e) => Err(StoreError::Rejected(describe(&e))),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Rejected(describe(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Rejected(describe(&e)))
    }
}

fn describe(error: &JsValue) -> String {
    if let Some(message) = error.as_string() {
        return message;
    }
    if let Some(error) = error.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", error)
}
