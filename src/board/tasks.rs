use crate::entity::{EntityId, IdGenerator, Task};
use crate::error::Result;
use crate::storage::{SharedStore, TASKS_KEY};

use super::collection::Collection;

/// What [`TaskRepository::save`] did with a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// New id, appended to the end.
    Inserted,
    /// Existing id, replaced at its original position.
    Replaced,
    /// Blank title. Nothing changed and nothing was written.
    Rejected,
}

pub struct TaskRepository {
    tasks: Collection<Task>,
    ids: IdGenerator,
}

impl TaskRepository {
    pub fn load(store: SharedStore) -> Result<Self> {
        let tasks: Collection<Task> = Collection::load(store, TASKS_KEY, Vec::new)?;
        let ids = IdGenerator::seeded(tasks.items().iter().map(|t| t.id));
        Ok(Self { tasks, ids })
    }

    /// A fresh, unsaved task in `category`.
    pub fn create(&mut self, category: &str) -> Task {
        Task::new(self.ids.next_id(), category)
    }

    pub fn save(&mut self, task: Task) -> Result<SaveOutcome> {
        if !task.has_title() {
            tracing::debug!(id = task.id, "rejected task with blank title");
            return Ok(SaveOutcome::Rejected);
        }

        self.ids.observe(task.id);
        let mut tasks = self.tasks.items().to_vec();
        let outcome = match tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => {
                *existing = task;
                SaveOutcome::Replaced
            }
            None => {
                tasks.push(task);
                SaveOutcome::Inserted
            }
        };

        self.tasks.replace(tasks)?;
        Ok(outcome)
    }

    /// Remove the task with `id`. Returns whether one was removed.
    pub fn delete(&mut self, id: EntityId) -> Result<bool> {
        let before = self.tasks.len();
        let tasks: Vec<Task> = self
            .tasks
            .items()
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect();
        let removed = tasks.len() != before;

        self.tasks.replace(tasks)?;
        Ok(removed)
    }

    pub fn list(&self) -> &[Task] {
        self.tasks.items()
    }

    pub fn get(&self, id: EntityId) -> Option<&Task> {
        self.tasks.items().iter().find(|t| t.id == id)
    }
}
