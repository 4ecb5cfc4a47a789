//! Durable preference storage
//!
//! [`KeyValueStore`] is the fallible backend (`localStorage` in the
//! browser). [`PreferenceStore`] sits in front of it and never lets a
//! storage fault reach the caller: errors are logged and read as absence.

use leptos::logging::warn;

/// Failure reported by a storage backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Storage is not available")]
    Unavailable,

    #[error("Storage rejected the operation: {0}")]
    Rejected(String),
}

/// Fallible key-value backend
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Infallible facade over an optional backend
pub struct PreferenceStore<K> {
    backend: Option<K>,
}

impl<K: KeyValueStore> PreferenceStore<K> {
    /// Wrap an available backend
    pub fn new(backend: K) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// A store whose backend could not be opened; reads are absent, writes are dropped
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    /// Build from the result of opening a backend, logging the failure
    pub fn from_result(result: Result<K, StoreError>) -> Self {
        match result {
            Ok(backend) => Self::new(backend),
            Err(e) => {
                warn!("Preference storage disabled: {}", e);
                Self::unavailable()
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Read a value; any storage error reads as `None`
    pub fn get(&self, key: &str) -> Option<String> {
        let backend = self.backend.as_ref()?;
        match backend.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read preference '{}': {}", key, e);
                None
            }
        }
    }

    /// Write a value; returns whether the backend accepted it
    pub fn set(&self, key: &str, value: &str) -> bool {
        let Some(backend) = self.backend.as_ref() else {
            return false;
        };
        match backend.set_item(key, value) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to persist preference '{}': {}", key, e);
                false
            }
        }
    }
}
