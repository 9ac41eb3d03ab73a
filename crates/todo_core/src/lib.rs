//! Core state management for the todo list.
//! This crate is the single source of truth for list invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::filter::{FilterMode, TodoStats};
pub use model::todo::{parse_due_date, TodoId, TodoItem, TodoValidationError};
pub use service::capability::{
    Clock, FixedClock, IdGenerator, SequentialIds, SystemClock, UuidV4Ids,
};
pub use service::payload::{decode_items, encode_items, PayloadError};
pub use service::session::{EditState, PendingInput, TodoSession};
pub use service::todo_manager::{TodoListManager, TODOS_STORAGE_KEY};
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StoreError, StoreResult};

