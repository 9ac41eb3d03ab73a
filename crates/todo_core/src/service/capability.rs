//! Injectable id and time sources for the todo manager.

use crate::model::todo::TodoId;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Produces fresh ids for new items.
pub trait IdGenerator {
    fn next_id(&mut self) -> TodoId;
}

/// Random v4 UUIDs. Default in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Ids;

impl IdGenerator for UuidV4Ids {
    fn next_id(&mut self) -> TodoId {
        Uuid::new_v4()
    }
}

/// Deterministic ids `00000000-0000-0000-0000-000000000001`, `...02`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    issued: u128,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> TodoId {
        self.issued += 1;
        Uuid::from_u128(self.issued)
    }
}

/// Source of creation timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
