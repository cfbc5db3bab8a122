//! localStorage backend.
//! Persistent across page reloads; synchronous, quota-limited, one tab
//! assumed per storage key.

use querybot_core::ports::KvStore;
use querybot_types::{QueryBotError, Result};

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| QueryBotError::Storage("No window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| QueryBotError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| QueryBotError::Storage("localStorage not available".to_string()))?;
        Ok(Self { storage })
    }
}

impl KvStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| QueryBotError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // Quota-exceeded surfaces here as a JS exception
        self.storage
            .set_item(key, value)
            .map_err(|e| QueryBotError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| QueryBotError::Storage(format!("{:?}", e)))
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}
