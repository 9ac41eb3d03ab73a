//! Domain model for the todo list.
//!
//! # Responsibility
//! - Define the persisted `TodoItem` record and its validation rules.
//! - Define view-level value types (`FilterMode`, `TodoStats`).
//!
//! # Invariants
//! - Every item is identified by a stable, non-nil `TodoId`.
//! - Stored text is never blank.

pub mod filter;
pub mod todo;
