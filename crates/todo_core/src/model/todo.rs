//! Todo item domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted for every todo entry.
//! - Validate text/identity invariants at construction and decode time.
//!
//! # Invariants
//! - `id` is never the nil UUID and never changes after creation.
//! - `text` is never empty after trimming.
//! - `created_at` is captured once at creation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of one todo item.
pub type TodoId = Uuid;

/// Wire format accepted for due dates (`<input type="date">` value).
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation failures for todo records and raw user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    NilId,
    EmptyText,
    InvalidDueDate(String),
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "todo id must not be nil"),
            Self::EmptyText => write!(f, "todo text must not be empty"),
            Self::InvalidDueDate(value) => {
                write!(f, "invalid due date `{value}`; expected YYYY-MM-DD")
            }
        }
    }
}

impl Error for TodoValidationError {}

/// One entry of the todo list.
///
/// Serialized with camelCase field names so the stored payload keeps the
/// `id, text, completed, createdAt, dueDate` record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TodoItemRecord")]
pub struct TodoItem {
    pub id: TodoId,
    /// Display text, stored exactly as entered.
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    /// `None` means "no due date".
    pub due_date: Option<NaiveDate>,
}

impl TodoItem {
    /// Creates an open (not completed) item.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `EmptyText` when `text` is empty or whitespace-only.
    pub fn new(
        id: TodoId,
        text: impl Into<String>,
        created_at: DateTime<Utc>,
        due_date: Option<NaiveDate>,
    ) -> Result<Self, TodoValidationError> {
        let item = Self {
            id,
            text: text.into(),
            completed: false,
            created_at,
            due_date,
        };
        item.validate()?;
        Ok(item)
    }

    /// Checks record invariants.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.id.is_nil() {
            return Err(TodoValidationError::NilId);
        }
        if is_blank(&self.text) {
            return Err(TodoValidationError::EmptyText);
        }
        Ok(())
    }

    /// Whether the item is still open.
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

/// Returns whether `text` would be rejected as todo text.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Parses raw date-input text.
///
/// Empty or whitespace-only input means "no due date".
pub fn parse_due_date(value: &str) -> Result<Option<NaiveDate>, TodoValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT)
        .map(Some)
        .map_err(|_| TodoValidationError::InvalidDueDate(trimmed.to_string()))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TodoItemRecord {
    id: TodoId,
    text: String,
    #[serde(default)]
    completed: bool,
    created_at: DateTime<Utc>,
    #[serde(default)]
    due_date: Option<NaiveDate>,
}

impl TryFrom<TodoItemRecord> for TodoItem {
    type Error = TodoValidationError;

    fn try_from(value: TodoItemRecord) -> Result<Self, Self::Error> {
        let item = Self {
            id: value.id,
            text: value.text,
            completed: value.completed,
            created_at: value.created_at,
            due_date: value.due_date,
        };
        item.validate()?;
        Ok(item)
    }
}
