use crate::entity::{EntityId, Importance, Task, TaskStatus};
use crate::error::Result;

use super::tasks::{SaveOutcome, TaskRepository};

/// One field change on a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Title(String),
    Category(String),
    Importance(Importance),
    Status(TaskStatus),
    Content(String),
    DDay(String),
}

/// The result of [`Editor::save`].
pub enum EditorResult {
    /// The repository accepted the draft; the editor is gone.
    Closed(SaveOutcome),
    /// The repository rejected the draft. The editor stays open with the draft intact.
    Open(Editor),
}

/// Holds an editable copy of one task until it is saved, deleted or cancelled.
///
/// The editor does no validation of its own. A draft with a blank title is
/// handed to the repository like any other and simply comes back unsaved.
#[derive(Debug, Clone)]
pub struct Editor {
    original_id: EntityId,
    draft: Task,
}

impl Editor {
    pub fn open(task: Task) -> Self {
        Self {
            original_id: task.id,
            draft: task,
        }
    }

    pub fn draft(&self) -> &Task {
        &self.draft
    }

    pub fn apply(&mut self, edit: DraftEdit) {
        let draft = &mut self.draft;
        match edit {
            DraftEdit::Title(title) => draft.title = title,
            DraftEdit::Category(category) => draft.category = category,
            DraftEdit::Importance(importance) => draft.importance = importance,
            DraftEdit::Status(status) => draft.status = status,
            DraftEdit::Content(content) => draft.content = content,
            DraftEdit::DDay(d_day) => draft.d_day = d_day,
        }
    }

    pub fn save(self, repo: &mut TaskRepository) -> Result<EditorResult> {
        match repo.save(self.draft.clone())? {
            SaveOutcome::Rejected => Ok(EditorResult::Open(self)),
            outcome => Ok(EditorResult::Closed(outcome)),
        }
    }

    /// Delete the task this editor was opened on. Returns whether it existed.
    pub fn delete(self, repo: &mut TaskRepository) -> Result<bool> {
        repo.delete(self.original_id)
    }

    /// Discard the draft without touching the repository.
    pub fn cancel(self) {}
}
