//! Authoritative task store over an injected storage port.
//!
//! # Responsibility
//! - Provide stable CRUD + toggle operations over the serialized slot.
//! - Keep the read-modify-write cycle for every mutation in one place.
//!
//! # Invariants
//! - Every mutating operation performs exactly one full slot read followed
//!   by at most one full slot write; there is no partial persistence.
//! - Collection order is insertion order: create appends, update replaces
//!   in place, delete removes the one matching element.
//! - An absent slot is an empty collection; an unparseable slot is a
//!   distinct `Corrupt` failure so callers can offer recovery.

use crate::model::task::{Task, TaskDraft, TaskId, TaskPatch, TaskValidationError};
use crate::storage::{StorageError, StoragePort};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for task persistence operations.
///
/// Unknown-id lookups are not represented here; they surface as `Ok(None)`
/// or `Ok(false)` sentinels on the individual operations.
#[derive(Debug)]
pub enum StoreError {
    /// A supplied field violates task invariants.
    Validation(TaskValidationError),
    /// The storage port failed to read or write the slot.
    Storage(StorageError),
    /// The slot holds data that does not parse as a task collection.
    Corrupt(serde_json::Error),
    /// The in-memory collection could not be serialized for persistence.
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::Corrupt(err) => write!(f, "corrupt task slot: {err}"),
            Self::Encode(err) => write!(f, "failed to encode task collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::Corrupt(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Sole authority for reading and mutating the persisted task collection.
pub struct TaskStore<S: StoragePort> {
    storage: S,
}

impl<S: StoragePort> TaskStore<S> {
    /// Creates a store over the provided slot implementation.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the full ordered task collection.
    ///
    /// An absent slot yields an empty collection. Timestamps come back as
    /// real date-time values re-parsed from the serialized form.
    pub fn list(&self) -> StoreResult<Vec<Task>> {
        self.load()
    }

    /// Creates a task from the draft and appends it to the collection.
    ///
    /// # Contract
    /// - Validates the draft at the store boundary.
    /// - Assigns a fresh unique id; `created_at == updated_at`.
    /// - Appends at the end, preserving insertion order.
    ///
    /// # Errors
    /// - `Validation` when the trimmed title is empty.
    /// - `Storage`/`Corrupt`/`Encode` on slot failures.
    pub fn create(&self, draft: TaskDraft) -> StoreResult<Task> {
        let mut tasks = self.load()?;
        let task = Task::from_draft(draft)?;

        tasks.push(task.clone());
        self.persist(&tasks)?;

        info!(
            "event=task_create module=store status=ok task_id={} count={}",
            task.id,
            tasks.len()
        );
        Ok(task)
    }

    /// Merges a partial update over the task with the given id.
    ///
    /// # Contract
    /// - `Ok(None)` when the id is unknown; the slot is left untouched.
    /// - Fields absent from the patch are retained.
    /// - `updated_at` is re-stamped even when the patch is empty.
    /// - The task keeps its position in the collection.
    pub fn update(&self, id: TaskId, patch: TaskPatch) -> StoreResult<Option<Task>> {
        let mut tasks = self.load()?;

        let Some(task) = tasks.iter_mut().find(|task| task.id == id) else {
            info!("event=task_update module=store status=not_found task_id={id}");
            return Ok(None);
        };

        task.apply_patch(patch)?;
        let updated = task.clone();
        self.persist(&tasks)?;

        info!("event=task_update module=store status=ok task_id={id}");
        Ok(Some(updated))
    }

    /// Removes the task with the given id.
    ///
    /// Returns whether a removal occurred; `Ok(false)` for an unknown id
    /// with no slot write.
    pub fn delete(&self, id: TaskId) -> StoreResult<bool> {
        let mut tasks = self.load()?;
        let before = tasks.len();

        tasks.retain(|task| task.id != id);
        if tasks.len() == before {
            info!("event=task_delete module=store status=not_found task_id={id}");
            return Ok(false);
        }

        self.persist(&tasks)?;
        info!(
            "event=task_delete module=store status=ok task_id={id} count={}",
            tasks.len()
        );
        Ok(true)
    }

    /// Flips the completion flag of the task with the given id.
    ///
    /// Goes through the same merge/stamp path as `update`, so `updated_at`
    /// advances on every toggle. `Ok(None)` when the id is unknown.
    pub fn toggle_completion(&self, id: TaskId) -> StoreResult<Option<Task>> {
        let mut tasks = self.load()?;

        let Some(task) = tasks.iter_mut().find(|task| task.id == id) else {
            info!("event=task_toggle module=store status=not_found task_id={id}");
            return Ok(None);
        };

        let patch = TaskPatch {
            completed: Some(!task.completed),
            ..TaskPatch::default()
        };
        task.apply_patch(patch)?;
        let updated = task.clone();
        self.persist(&tasks)?;

        info!(
            "event=task_toggle module=store status=ok task_id={id} completed={}",
            updated.completed
        );
        Ok(Some(updated))
    }

    fn load(&self) -> StoreResult<Vec<Task>> {
        let payload = match self.storage.read() {
            Ok(Some(payload)) => payload,
            Ok(None) => return Ok(Vec::new()),
            Err(err) => {
                error!("event=slot_read module=store status=error error={err}");
                return Err(err.into());
            }
        };

        serde_json::from_str(&payload).map_err(|err| {
            error!("event=slot_decode module=store status=error error={err}");
            StoreError::Corrupt(err)
        })
    }

    fn persist(&self, tasks: &[Task]) -> StoreResult<()> {
        let payload = serde_json::to_string(tasks).map_err(StoreError::Encode)?;

        if let Err(err) = self.storage.write(&payload) {
            error!("event=slot_write module=store status=error error={err}");
            return Err(err.into());
        }

        Ok(())
    }
}
