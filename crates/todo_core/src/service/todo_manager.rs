//! Persisted todo list and its pure mutations.
//!
//! # Responsibility
//! - Own the ordered item list (newest first).
//! - Apply add/toggle/remove/edit mutations and derive filtered views and stats.
//! - Hydrate once from the key-value store and write the whole list back after
//!   every successful mutation.
//!
//! # Invariants
//! - Item ids are unique; stored text is never blank.
//! - Rejected input and unknown ids are silent no-ops that do not write.
//! - Store failures never surface to callers: reads degrade to an empty list,
//!   writes are logged and dropped.

use crate::model::filter::{FilterMode, TodoStats};
use crate::model::todo::{is_blank, TodoId, TodoItem};
use crate::service::capability::{Clock, IdGenerator, SystemClock, UuidV4Ids};
use crate::service::payload::{decode_items, encode_items};
use crate::store::KeyValueStore;
use chrono::NaiveDate;
use log::{debug, error, info, warn};
use std::collections::HashSet;
use std::time::Instant;

/// Store key holding the serialized list.
pub const TODOS_STORAGE_KEY: &str = "todos";

/// Todo list bound to a key-value store.
pub struct TodoListManager<S, G = UuidV4Ids, C = SystemClock> {
    store: S,
    ids: G,
    clock: C,
    items: Vec<TodoItem>,
}

impl<S: KeyValueStore> TodoListManager<S> {
    /// Hydrates a manager with random ids and wall-clock timestamps.
    pub fn load(store: S) -> Self {
        Self::load_with(store, UuidV4Ids, SystemClock)
    }
}

impl<S: KeyValueStore, G: IdGenerator, C: Clock> TodoListManager<S, G, C> {
    /// Hydrates a manager from `store` using the given id and time sources.
    ///
    /// An absent, unreadable or invalid payload yields an empty list.
    pub fn load_with(store: S, ids: G, clock: C) -> Self {
        let items = hydrate(&store);
        Self {
            store,
            ids,
            clock,
            items,
        }
    }

    /// Prepends a new open item.
    ///
    /// Returns `None` (and changes nothing) when `text` is blank or the id
    /// generator keeps repeating ids already in the list.
    pub fn add(&mut self, text: impl Into<String>, due_date: Option<NaiveDate>) -> Option<TodoId> {
        let text = text.into();
        if is_blank(&text) {
            debug!("event=todo_add module=manager status=rejected reason=empty_text");
            return None;
        }

        let id = self.fresh_id()?;
        let item = TodoItem {
            id,
            text,
            completed: false,
            created_at: self.clock.now(),
            due_date,
        };
        self.items.insert(0, item);
        debug!(
            "event=todo_add module=manager status=ok id={id} has_due_date={}",
            due_date.is_some()
        );
        self.persist("add");
        Some(id)
    }

    /// Flips completion of `id`. Returns whether an item changed.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!("event=todo_toggle module=manager status=not_found id={id}");
            return false;
        };
        item.completed = !item.completed;
        debug!(
            "event=todo_toggle module=manager status=ok id={id} completed={}",
            item.completed
        );
        self.persist("toggle");
        true
    }

    /// Deletes `id`. Returns whether an item was removed.
    pub fn remove(&mut self, id: TodoId) -> bool {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            debug!("event=todo_remove module=manager status=not_found id={id}");
            return false;
        };
        self.items.remove(index);
        debug!("event=todo_remove module=manager status=ok id={id}");
        self.persist("remove");
        true
    }

    /// Replaces the text of `id`. Blank text and unknown ids are rejected.
    pub fn edit_text(&mut self, id: TodoId, text: impl Into<String>) -> bool {
        let text = text.into();
        if is_blank(&text) {
            debug!("event=todo_edit module=manager status=rejected reason=empty_text id={id}");
            return false;
        }
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!("event=todo_edit module=manager status=not_found id={id}");
            return false;
        };
        item.text = text;
        debug!("event=todo_edit module=manager status=ok id={id}");
        self.persist("edit");
        true
    }

    /// Full list, newest first.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items selected by `mode`, in list order.
    pub fn filtered(&self, mode: FilterMode) -> Vec<&TodoItem> {
        self.items.iter().filter(|item| mode.matches(item)).collect()
    }

    pub fn stats(&self) -> TodoStats {
        TodoStats::from_items(&self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Draws ids until one is unused. Gives up only when the generator
    /// repeats an id it already offered during this call.
    fn fresh_id(&mut self) -> Option<TodoId> {
        let mut offered = HashSet::new();
        loop {
            let id = self.ids.next_id();
            if !id.is_nil() && self.get(id).is_none() {
                return Some(id);
            }
            if !offered.insert(id) {
                error!(
                    "event=todo_add module=manager status=error error_code=id_exhausted attempts={}",
                    offered.len()
                );
                return None;
            }
        }
    }

    fn persist(&mut self, op: &str) {
        let started_at = Instant::now();
        let payload = match encode_items(&self.items) {
            Ok(payload) => payload,
            Err(err) => {
                error!(
                    "event=todo_persist module=manager status=error op={op} error_code=encode_failed error={err}"
                );
                return;
            }
        };

        match self.store.set(TODOS_STORAGE_KEY, &payload) {
            Ok(()) => debug!(
                "event=todo_persist module=manager status=ok op={op} count={} duration_ms={}",
                self.items.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => warn!(
                "event=todo_persist module=manager status=error op={op} error_code=store_write_failed error={err}"
            ),
        }
    }
}

fn hydrate<S: KeyValueStore>(store: &S) -> Vec<TodoItem> {
    let raw = match store.get(TODOS_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("event=todo_hydrate module=manager status=empty reason=absent");
            return Vec::new();
        }
        Err(err) => {
            warn!(
                "event=todo_hydrate module=manager status=error error_code=store_read_failed error={err}"
            );
            return Vec::new();
        }
    };

    match decode_items(&raw) {
        Ok(items) => {
            info!(
                "event=todo_hydrate module=manager status=ok count={}",
                items.len()
            );
            items
        }
        Err(err) => {
            warn!(
                "event=todo_hydrate module=manager status=error error_code=payload_invalid bytes={} error={err}",
                raw.len()
            );
            Vec::new()
        }
    }
}
