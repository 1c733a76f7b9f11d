use crate::error::AppError;
use std::collections::HashMap;
use std::sync::RwLock;

/// Key-value configuration store the client reads settings from and persists
/// the session token into
///
/// The store performs no encryption; anything sensitive at rest is the
/// implementor's concern.
pub trait ConfigStore: Send + Sync {
    /// Returns the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Process-local store, mostly for tests and one-shot invocations
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `pairs`
    pub fn with_values<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            values: RwLock::new(values),
        }
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .ok()
            .and_then(|values| values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut values = self
            .values
            .write()
            .map_err(|_| AppError::InvalidInput("configuration store poisoned".to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
