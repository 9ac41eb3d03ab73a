//! Transient UI state wrapped around a `TodoListManager`.
//!
//! # Responsibility
//! - Track the active filter, the in-progress edit and the pending new-item
//!   input that a presentation layer binds to.
//! - Route user actions to the manager.
//!
//! # Invariants
//! - None of the state in this module is persisted.
//! - A blank commit keeps edit mode active with the edit text untouched.
//! - A successful add clears the pending input.

use crate::model::filter::{FilterMode, TodoStats};
use crate::model::todo::{is_blank, TodoId, TodoItem};
use crate::service::capability::{Clock, IdGenerator, SystemClock, UuidV4Ids};
use crate::service::todo_manager::TodoListManager;
use crate::store::KeyValueStore;
use chrono::NaiveDate;
use log::debug;

/// Item currently being edited and its unsaved text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub id: TodoId,
    pub text: String,
}

/// New-item form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingInput {
    pub text: String,
    pub due_date: Option<NaiveDate>,
}

pub struct TodoSession<S, G = UuidV4Ids, C = SystemClock> {
    manager: TodoListManager<S, G, C>,
    filter: FilterMode,
    editing: Option<EditState>,
    pending: PendingInput,
}

impl<S: KeyValueStore, G: IdGenerator, C: Clock> TodoSession<S, G, C> {
    /// Starts a session with filter `all`, no edit and an empty form.
    pub fn new(manager: TodoListManager<S, G, C>) -> Self {
        Self {
            manager,
            filter: FilterMode::All,
            editing: None,
            pending: PendingInput::default(),
        }
    }

    /// Adds an item and clears the pending input on success.
    pub fn add(&mut self, text: impl Into<String>, due_date: Option<NaiveDate>) -> Option<TodoId> {
        let id = self.manager.add(text, due_date)?;
        self.pending = PendingInput::default();
        Some(id)
    }

    /// Adds an item from the pending form. The form is kept on rejection.
    pub fn submit_pending(&mut self) -> Option<TodoId> {
        let PendingInput { text, due_date } = self.pending.clone();
        self.add(text, due_date)
    }

    pub fn set_pending_text(&mut self, text: impl Into<String>) {
        self.pending.text = text.into();
    }

    pub fn set_pending_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.pending.due_date = due_date;
    }

    pub fn toggle(&mut self, id: TodoId) -> bool {
        self.manager.toggle(id)
    }

    pub fn remove(&mut self, id: TodoId) -> bool {
        self.manager.remove(id)
    }

    /// Enters edit mode for `id`, seeded with its current text.
    ///
    /// Replaces any edit already in progress. Unknown ids are ignored.
    pub fn start_edit(&mut self, id: TodoId) -> bool {
        let Some(item) = self.manager.get(id) else {
            debug!("event=edit_start module=session status=not_found id={id}");
            return false;
        };
        self.editing = Some(EditState {
            id,
            text: item.text.clone(),
        });
        debug!("event=edit_start module=session status=ok id={id}");
        true
    }

    /// Updates the unsaved edit text. Ignored outside edit mode.
    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        if let Some(edit) = self.editing.as_mut() {
            edit.text = text.into();
        }
    }

    /// Saves the edit text and leaves edit mode.
    ///
    /// Blank text is refused and edit mode stays active. If the edited item no
    /// longer exists, edit mode ends without changes. Returns whether text was
    /// saved.
    pub fn commit_edit(&mut self) -> bool {
        match self.editing.as_ref() {
            None => return false,
            Some(edit) if is_blank(&edit.text) => {
                debug!(
                    "event=edit_commit module=session status=rejected reason=empty_text id={}",
                    edit.id
                );
                return false;
            }
            Some(_) => {}
        }

        let Some(EditState { id, text }) = self.editing.take() else {
            return false;
        };
        let saved = self.manager.edit_text(id, text);
        if !saved {
            debug!("event=edit_commit module=session status=dropped reason=not_found id={id}");
        }
        saved
    }

    /// Leaves edit mode without saving.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Sets the view filter. Unrecognized labels select `all`.
    pub fn set_filter(&mut self, mode: impl Into<FilterMode>) {
        self.filter = mode.into();
    }

    /// Items matching the current filter, in list order.
    pub fn visible_items(&self) -> Vec<&TodoItem> {
        self.manager.filtered(self.filter)
    }

    pub fn stats(&self) -> TodoStats {
        self.manager.stats()
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn editing(&self) -> Option<&EditState> {
        self.editing.as_ref()
    }

    pub fn pending(&self) -> &PendingInput {
        &self.pending
    }

    pub fn manager(&self) -> &TodoListManager<S, G, C> {
        &self.manager
    }

    pub fn into_manager(self) -> TodoListManager<S, G, C> {
        self.manager
    }
}
