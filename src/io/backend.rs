use crate::model::task::Task;
use crate::model::todo_item::TodoItem;

/// Error type for persistence backends
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Where edit sessions load tasks from and save them to.
///
/// `save` inserts when the task's id is empty (the backend assigns and
/// returns a fresh id) and overwrites the stored record otherwise.
pub trait TaskBackend {
    fn load(&self, id: &str) -> Result<Task, BackendError>;

    fn save(&mut self, task: &Task) -> Result<String, BackendError>;
}

impl<B: TaskBackend + ?Sized> TaskBackend for &mut B {
    fn load(&self, id: &str) -> Result<Task, BackendError> {
        (**self).load(id)
    }

    fn save(&mut self, task: &Task) -> Result<String, BackendError> {
        (**self).save(task)
    }
}

impl<B: TaskBackend + ?Sized> TaskBackend for Box<B> {
    fn load(&self, id: &str) -> Result<Task, BackendError> {
        (**self).load(id)
    }

    fn save(&mut self, task: &Task) -> Result<String, BackendError> {
        (**self).save(task)
    }
}

/// The separate collection of reduced todo records.
///
/// Same insert/update rule as [`TaskBackend::save`].
pub trait TodoStore {
    fn list_todos(&self) -> Result<Vec<TodoItem>, BackendError>;

    fn load_todo(&self, id: &str) -> Result<TodoItem, BackendError>;

    fn save_todo(&mut self, item: &TodoItem) -> Result<String, BackendError>;

    /// Change a stored item in place and return the result. The read and the
    /// write happen as one step, so concurrent updates are not lost.
    fn update_todo<F>(&mut self, id: &str, f: F) -> Result<TodoItem, BackendError>
    where
        F: FnOnce(&mut TodoItem);
}

/// Fresh document id
pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
