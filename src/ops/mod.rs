pub mod edit_session;
pub mod todo_ops;

pub use edit_session::{EditError, TaskEditSession, ValidationError};
