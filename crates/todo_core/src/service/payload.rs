//! Whole-list payload codec for the key-value store.
//!
//! # Invariants
//! - The payload is a JSON array of `TodoItem` records in list order.
//! - Decoding never yields duplicate ids or invalid records.

use crate::model::todo::{TodoId, TodoItem};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reasons a stored payload cannot be used as a todo list.
#[derive(Debug)]
pub enum PayloadError {
    /// Not JSON, wrong shape, or a record failed validation.
    Json(serde_json::Error),
    DuplicateId(TodoId),
}

impl Display for PayloadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed todo payload: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate todo id in payload: {id}"),
        }
    }
}

impl Error for PayloadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for PayloadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Serializes the full list.
pub fn encode_items(items: &[TodoItem]) -> Result<String, PayloadError> {
    Ok(serde_json::to_string(items)?)
}

/// Parses a stored payload, rejecting it as a whole on any invalid record.
pub fn decode_items(raw: &str) -> Result<Vec<TodoItem>, PayloadError> {
    let items: Vec<TodoItem> = serde_json::from_str(raw)?;
    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if !seen.insert(item.id) {
            return Err(PayloadError::DuplicateId(item.id));
        }
    }
    Ok(items)
}
