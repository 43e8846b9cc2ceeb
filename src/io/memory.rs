use indexmap::IndexMap;

use crate::io::backend::{BackendError, TaskBackend, TodoStore, new_id};
use crate::model::task::Task;
use crate::model::todo_item::TodoItem;

/// Task and todo store held entirely in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    tasks: IndexMap<String, Task>,
    todos: IndexMap<String, TodoItem>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with already-saved tasks (ids must be set)
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        MemoryBackend {
            tasks: tasks.into_iter().map(|t| (t.id.clone(), t)).collect(),
            todos: IndexMap::new(),
        }
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl TaskBackend for MemoryBackend {
    fn load(&self, id: &str) -> Result<Task, BackendError> {
        self.tasks
            .get(id)
            .cloned()
            .ok_or_else(|| BackendError::NotFound(id.to_string()))
    }

    fn save(&mut self, task: &Task) -> Result<String, BackendError> {
        let mut stored = task.clone();
        if stored.id.is_empty() {
            stored.id = new_id();
        }
        let id = stored.id.clone();
        self.tasks.insert(id.clone(), stored);
        Ok(id)
    }
}

impl TodoStore for MemoryBackend {
    fn list_todos(&self) -> Result<Vec<TodoItem>, BackendError> {
        Ok(self.todos.values().cloned().collect())
    }

    fn load_todo(&self, id: &str) -> Result<TodoItem, BackendError> {
        self.todos
            .get(id)
            .cloned()
            .ok_or_else(|| BackendError::NotFound(id.to_string()))
    }

    fn save_todo(&mut self, item: &TodoItem) -> Result<String, BackendError> {
        let mut stored = item.clone();
        if stored.id.is_empty() {
            stored.id = new_id();
        }
        let id = stored.id.clone();
        self.todos.insert(id.clone(), stored);
        Ok(id)
    }

    fn update_todo<F>(&mut self, id: &str, f: F) -> Result<TodoItem, BackendError>
    where
        F: FnOnce(&mut TodoItem),
    {
        let item = self
            .todos
            .get_mut(id)
            .ok_or_else(|| BackendError::NotFound(id.to_string()))?;
        f(item);
        Ok(item.clone())
    }
}
