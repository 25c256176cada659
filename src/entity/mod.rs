mod memo;
mod task;
mod todo;

pub use memo::{Memo, MemoEdit, NEW_MEMO_TITLE};
pub use task::{Importance, Task, TaskStatus};
pub use todo::TodoItem;

use chrono::Utc;

/// Identifier shared by every persisted entity. Stored as a JSON integer.
pub type EntityId = i64;

/// Hands out millisecond-timestamp ids that never repeat within a process.
///
/// Each id is the current wall-clock millisecond or one past the previous id,
/// whichever is larger, so two creations inside the same tick still differ.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: EntityId,
}

impl IdGenerator {
    /// Start above every id already in use.
    pub fn seeded<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = EntityId>,
    {
        Self {
            last: existing.into_iter().max().unwrap_or(0),
        }
    }

    pub fn next_id(&mut self) -> EntityId {
        self.next_at(Utc::now().timestamp_millis())
    }

    pub fn next_at(&mut self, now_millis: EntityId) -> EntityId {
        let id = now_millis.max(self.last.saturating_add(1));
        self.last = id;
        id
    }

    /// Record an id assigned elsewhere so later ids stay above it.
    pub fn observe(&mut self, id: EntityId) {
        self.last = self.last.max(id);
    }
}
