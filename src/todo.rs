//! The standalone to-do list. Shares the store but nothing else with the board.

use crate::board::Collection;
use crate::entity::{EntityId, IdGenerator, TodoItem};
use crate::error::Result;
use crate::storage::{SharedStore, TODOS_KEY};

pub struct TodoList {
    items: Collection<TodoItem>,
    ids: IdGenerator,
}

impl TodoList {
    pub fn load(store: SharedStore) -> Result<Self> {
        let items: Collection<TodoItem> = Collection::load(store, TODOS_KEY, Vec::new)?;
        let ids = IdGenerator::seeded(items.items().iter().map(|t| t.id));
        Ok(Self { items, ids })
    }

    pub fn list(&self) -> &[TodoItem] {
        self.items.items()
    }

    /// Number of items not yet completed
    pub fn remaining(&self) -> usize {
        self.items.items().iter().filter(|t| !t.completed).count()
    }

    /// Append an item. Blank text is ignored and nothing is written.
    pub fn add(&mut self, text: &str) -> Result<Option<TodoItem>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let item = TodoItem::new(self.ids.next_id(), text);
        let mut items = self.items.items().to_vec();
        items.push(item.clone());
        self.items.replace(items)?;
        Ok(Some(item))
    }

    pub fn toggle(&mut self, id: EntityId) -> Result<bool> {
        let mut items = self.items.items().to_vec();
        let found = match items.iter_mut().find(|t| t.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        };
        self.items.replace(items)?;
        Ok(found)
    }

    pub fn delete(&mut self, id: EntityId) -> Result<bool> {
        let before = self.items.len();
        self.retain(|t| t.id != id)?;
        Ok(self.items.len() != before)
    }

    /// Drop every completed item. Returns how many were removed.
    pub fn clear_completed(&mut self) -> Result<usize> {
        let before = self.items.len();
        self.retain(|t| !t.completed)?;
        Ok(before - self.items.len())
    }

    fn retain<F>(&mut self, keep: F) -> Result<()>
    where
        F: Fn(&TodoItem) -> bool,
    {
        let items: Vec<TodoItem> = self
            .items
            .items()
            .iter()
            .filter(|t| keep(t))
            .cloned()
            .collect();
        self.items.replace(items)
    }
}
