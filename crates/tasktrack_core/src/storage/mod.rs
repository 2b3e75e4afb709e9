//! Durable slot abstraction for the task collection.
//!
//! # Responsibility
//! - Define the storage port contract the task store is built against.
//! - Provide file-backed and in-memory slot implementations.
//!
//! # Invariants
//! - The slot holds the entire serialized task collection or nothing.
//! - An absent slot reads as `None`, never as an error.
//! - Implementations do not interpret the payload; parsing stays in the
//!   store layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level failure while reading or writing the slot.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Port over the single named slot holding the serialized task collection.
///
/// Injected into the store so tests run against an in-memory fake instead
/// of the real durable medium.
pub trait StoragePort {
    /// Reads the whole slot; `Ok(None)` when nothing has been persisted yet.
    fn read(&self) -> StorageResult<Option<String>>;

    /// Replaces the whole slot with `payload`.
    fn write(&self, payload: &str) -> StorageResult<()>;
}
