//! Todo list use-case layer.
//!
//! # Responsibility
//! - `todo_manager`: persisted list and pure mutations.
//! - `session`: transient UI state (filter, edit, pending input) on top.
//! - `capability`: injectable id and clock sources.
//!
//! # Invariants
//! - Only `todo_manager` talks to the key-value store.

pub mod capability;
pub mod payload;
pub mod session;
pub mod todo_manager;
