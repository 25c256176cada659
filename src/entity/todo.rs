// src/entity/todo.rs
use serde::{Deserialize, Serialize};

use super::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: EntityId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: EntityId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}
