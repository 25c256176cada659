//! The task board: store-backed collections plus the views and editor wired to them.

mod categories;
mod collection;
mod editor;
mod memos;
mod preferences;
mod tasks;

pub use categories::{CategoryCollection, DEFAULT_CATEGORIES};
pub use collection::Collection;
pub use editor::{DraftEdit, Editor, EditorResult};
pub use memos::MemoCollection;
pub use preferences::{prefers_dark_from_colorfgbg, Theme, ThemePreference, ViewMode};
pub use tasks::{SaveOutcome, TaskRepository};

use crate::entity::{EntityId, Task};
use crate::error::{Result, TaskboardError};
use crate::storage::SharedStore;
use crate::view::{board_projection, grid_projection, orphaned_tasks, BoardColumn, GridRow};

/// Everything the board screen works with, loaded from one store.
pub struct Workspace {
    tasks: TaskRepository,
    memos: MemoCollection,
    categories: CategoryCollection,
    theme: ThemePreference,
    view_mode: ViewMode,
}

impl Workspace {
    /// Load every collection from `store`. `prefers_dark` is the system
    /// color-scheme signal used when no theme has been stored yet.
    pub fn open(store: SharedStore, prefers_dark: bool) -> Result<Self> {
        Ok(Self {
            tasks: TaskRepository::load(store.clone())?,
            memos: MemoCollection::load(store.clone())?,
            categories: CategoryCollection::load(store.clone())?,
            theme: ThemePreference::load(store, prefers_dark)?,
            view_mode: ViewMode::default(),
        })
    }

    pub fn tasks(&self) -> &TaskRepository {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut TaskRepository {
        &mut self.tasks
    }

    pub fn memos(&self) -> &MemoCollection {
        &self.memos
    }

    pub fn memos_mut(&mut self) -> &mut MemoCollection {
        &mut self.memos
    }

    pub fn categories(&self) -> &CategoryCollection {
        &self.categories
    }

    pub fn categories_mut(&mut self) -> &mut CategoryCollection {
        &mut self.categories
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.theme.toggle()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn board(&self) -> Vec<BoardColumn<'_>> {
        board_projection(self.categories.list(), self.tasks.list())
    }

    pub fn grid(&self) -> Vec<GridRow> {
        grid_projection(self.tasks.list())
    }

    pub fn orphaned_tasks(&self) -> Vec<&Task> {
        orphaned_tasks(self.categories.list(), self.tasks.list())
    }

    /// Open an editor on a fresh task in `category`, or the first column when
    /// none is given.
    pub fn new_task(&mut self, category: Option<&str>) -> Result<Editor> {
        let category = match category {
            Some(c) => c.to_string(),
            None => self
                .categories
                .first()
                .map(str::to_string)
                .ok_or_else(|| TaskboardError::InvalidValue("no categories defined".to_string()))?,
        };
        Ok(Editor::open(self.tasks.create(&category)))
    }

    /// Open an editor on a copy of the stored task with `id`.
    pub fn edit_task(&self, id: EntityId) -> Result<Editor> {
        self.tasks
            .get(id)
            .cloned()
            .map(Editor::open)
            .ok_or(TaskboardError::TaskNotFound(id))
    }

    pub fn save_editor(&mut self, editor: Editor) -> Result<EditorResult> {
        editor.save(&mut self.tasks)
    }

    pub fn delete_from_editor(&mut self, editor: Editor) -> Result<bool> {
        editor.delete(&mut self.tasks)
    }
}
