//! Domain model for task tracking.
//!
//! # Responsibility
//! - Define the canonical `Task` record and its creation/update inputs.
//! - Enforce field-level invariants (non-empty title, trimmed text).
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`, unique in a collection.
//! - `updated_at` is never earlier than `created_at`.

pub mod task;
