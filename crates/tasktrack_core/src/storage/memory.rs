//! In-memory slot implementation.
//!
//! # Responsibility
//! - Provide a process-local fake of the durable slot for tests and smoke
//!   probes.

use super::{StoragePort, StorageResult};
use std::sync::Mutex;

/// Holds the task slot in process memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    /// Creates a slot pre-seeded with a payload, bypassing the port.
    ///
    /// Used by tests that need to stage arbitrary (including malformed)
    /// slot contents.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(payload.into())),
        }
    }
}

impl StoragePort for MemoryStorage {
    fn read(&self) -> StorageResult<Option<String>> {
        let slot = self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(slot.clone())
    }

    fn write(&self, payload: &str) -> StorageResult<()> {
        let mut slot = self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(payload.to_string());
        Ok(())
    }
}
