//! Task use-case service.
//!
//! # Responsibility
//! - Provide stable entry points mirroring the presentation layer's
//!   commands (add, list, edit, toggle, remove).
//! - Delegate persistence to the task store.
//!
//! # Invariants
//! - Service APIs never bypass store validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::task::{Task, TaskDraft, TaskId, TaskPatch};
use crate::storage::StoragePort;
use crate::store::task_store::{StoreResult, TaskStore};

/// Use-case service wrapper for task CRUD operations.
pub struct TaskService<S: StoragePort> {
    store: TaskStore<S>,
}

impl<S: StoragePort> TaskService<S> {
    /// Creates a service over an existing store.
    pub fn new(store: TaskStore<S>) -> Self {
        Self { store }
    }

    /// Creates a service directly over a slot implementation.
    pub fn with_storage(storage: S) -> Self {
        Self::new(TaskStore::new(storage))
    }

    /// Lists all tasks in creation order.
    pub fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        self.store.list()
    }

    /// Adds a new open task.
    ///
    /// # Contract
    /// - `description = None` means the field stays unset.
    /// - The new task starts with `completed = false`.
    pub fn add_task(
        &self,
        title: impl Into<String>,
        description: Option<String>,
    ) -> StoreResult<Task> {
        let draft = TaskDraft {
            title: title.into(),
            description,
            completed: None,
        };
        self.store.create(draft)
    }

    /// Applies a partial edit to an existing task.
    ///
    /// Returns `Ok(None)` for an unknown id, matching the store contract.
    pub fn edit_task(&self, id: TaskId, patch: TaskPatch) -> StoreResult<Option<Task>> {
        self.store.update(id, patch)
    }

    /// Flips a task between open and completed.
    pub fn toggle_task(&self, id: TaskId) -> StoreResult<Option<Task>> {
        self.store.toggle_completion(id)
    }

    /// Removes a task; `Ok(false)` when the id is unknown.
    pub fn remove_task(&self, id: TaskId) -> StoreResult<bool> {
        self.store.delete(id)
    }
}
