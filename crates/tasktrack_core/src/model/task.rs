//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record persisted in the task slot.
//! - Normalize and validate caller-supplied text fields.
//! - Provide the merge/stamp lifecycle helpers used by the store.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is never empty after a successful create or patch.
//! - `updated_at >= created_at`; every successful mutation re-stamps
//!   `updated_at`.
//! - `description = None` means "not set" and is distinct from an empty
//!   string; empty-after-trim input normalizes to `None`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Validation error for task field invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace-only after trimming.
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
///
/// Wire names are camelCase to match the persisted JSON document shape
/// (`createdAt`/`updatedAt` serialize as RFC 3339 text and are re-parsed
/// into real timestamps on every read).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable ID assigned at creation, immutable thereafter.
    pub id: TaskId,
    /// Non-empty, trimmed title.
    pub title: String,
    /// Optional trimmed detail text; key is absent on the wire when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Completion flag.
    pub completed: bool,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
    /// Stamped at creation and on every successful mutation.
    pub updated_at: DateTime<Utc>,
}

/// Creation input supplied by callers of the store.
///
/// An explicitly supplied `completed: Some(false)` is honored as `false`;
/// only an absent value falls back to the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TaskDraft {
    /// Creates a draft with only a title set.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            completed: None,
        }
    }
}

/// Partial update for a task; `None` fields are left unchanged.
///
/// A supplied description that trims to empty clears the field back to
/// "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl Task {
    /// Builds a new task from a creation draft.
    ///
    /// # Contract
    /// - Assigns a fresh `TaskId`.
    /// - Stamps `created_at` and `updated_at` with the same instant.
    /// - `completed` defaults to `false` when the draft leaves it unset.
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyTitle` when the trimmed title is empty.
    pub fn from_draft(draft: TaskDraft) -> Result<Self, TaskValidationError> {
        let title = normalize_title(&draft.title)?;
        let description = draft.description.as_deref().and_then(normalize_description);
        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            description,
            completed: draft.completed.unwrap_or(false),
            created_at: now,
            updated_at: now,
        })
    }

    /// Merges a partial update over this task and re-stamps `updated_at`.
    ///
    /// # Contract
    /// - Fields absent from the patch are retained unchanged.
    /// - `updated_at` advances even for an empty patch.
    /// - On validation failure the task is left untouched.
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyTitle` when a supplied title trims empty.
    pub fn apply_patch(&mut self, patch: TaskPatch) -> Result<(), TaskValidationError> {
        let title = match patch.title {
            Some(raw) => Some(normalize_title(&raw)?),
            None => None,
        };

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(raw) = patch.description {
            self.description = normalize_description(&raw);
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        self.updated_at = Utc::now();

        Ok(())
    }
}

fn normalize_title(raw: &str) -> Result<String, TaskValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

fn normalize_description(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
