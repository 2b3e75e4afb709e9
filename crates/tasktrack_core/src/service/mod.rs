//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep presentation layers decoupled from slot/serialization details.

pub mod task_service;
