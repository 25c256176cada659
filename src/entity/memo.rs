// src/entity/memo.rs
use serde::{Deserialize, Serialize};

use super::EntityId;

pub const NEW_MEMO_TITLE: &str = "새 메모";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Sidebar collapse state. Persisted with the memo.
    #[serde(default)]
    pub expanded: bool,
}

impl Memo {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            title: NEW_MEMO_TITLE.to_string(),
            content: String::new(),
            expanded: true,
        }
    }
}

/// The edits a memo accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoEdit {
    SetTitle(String),
    SetContent(String),
    SetExpanded(bool),
    ToggleExpanded,
}

impl MemoEdit {
    pub fn apply(self, memo: &mut Memo) {
        match self {
            MemoEdit::SetTitle(title) => memo.title = title,
            MemoEdit::SetContent(content) => memo.content = content,
            MemoEdit::SetExpanded(expanded) => memo.expanded = expanded,
            MemoEdit::ToggleExpanded => memo.expanded = !memo.expanded,
        }
    }
}
