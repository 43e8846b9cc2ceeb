use serde::{Deserialize, Serialize};

use crate::model::due::DueTimestamp;
use crate::model::priority::{FlagOption, Priority};

/// A task as edited and stored.
///
/// An empty `id` means the task has not been saved yet; the store assigns
/// one on first save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub due: DueTimestamp,
    pub priority: Priority,
    pub flag: bool,
    /// Not editable through an edit session; carried through untouched
    pub completed: bool,
    /// Owning account, carried through untouched
    pub user_id: String,
}

impl Task {
    /// Create an unsaved task with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Task {
            title: title.into(),
            ..Task::default()
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }

    pub fn flag_option(&self) -> FlagOption {
        FlagOption::from_checked(self.flag)
    }
}
