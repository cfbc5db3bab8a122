//! Pick the best available storage backend.
//!
//! Priority: localStorage → memory (fallback). The memory fallback keeps the
//! app usable in contexts where localStorage is blocked, at the cost of
//! losing history on reload.

use std::rc::Rc;
use querybot_core::ports::KvStore;
use super::{LocalStorage, MemoryStorage};

/// Open the best available storage backend.
/// Returns a trait object so callers are backend-agnostic.
pub fn auto_detect_storage() -> Rc<dyn KvStore> {
    match LocalStorage::open() {
        Ok(local) => {
            log::info!("Storage backend: localStorage");
            Rc::new(local)
        }
        Err(e) => {
            log::warn!("localStorage unavailable ({}), falling back to memory", e);
            Rc::new(MemoryStorage::new())
        }
    }
}
