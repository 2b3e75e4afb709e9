//! Store layer over the durable task slot.
//!
//! # Responsibility
//! - Define the authoritative CRUD + toggle API for the task collection.
//! - Isolate slot serialization details from service orchestration.
//!
//! # Invariants
//! - Write paths validate field invariants before persisting.
//! - Unknown-id mutations are sentinel results (`None`/`false`), never
//!   errors.

pub mod task_store;
