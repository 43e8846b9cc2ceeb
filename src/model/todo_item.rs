use serde::{Deserialize, Serialize};

use crate::model::priority::{Priority, deserialize_name};

/// The reduced todo record kept in its own collection.
///
/// `priority` is stored as whatever string the writer gave it; read it
/// through [`TodoItem::priority`] to get a defined value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoItem {
    pub id: String,
    pub title: String,
    #[serde(rename = "priority", deserialize_with = "deserialize_name")]
    pub priority_name: String,
    pub completed: bool,
    pub owner: String,
}

impl TodoItem {
    pub fn new(title: impl Into<String>, priority: Priority, owner: impl Into<String>) -> Self {
        TodoItem {
            id: String::new(),
            title: title.into(),
            priority_name: priority.name().to_string(),
            completed: false,
            owner: owner.into(),
        }
    }

    pub fn priority(&self) -> Priority {
        Priority::from_name(&self.priority_name)
    }
}
