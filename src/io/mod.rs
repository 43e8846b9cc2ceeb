pub mod backend;
pub mod config_io;
pub mod json_store;
pub mod lock;
pub mod memory;

pub use backend::{BackendError, TaskBackend, TodoStore};
pub use json_store::JsonFileBackend;
pub use memory::MemoryBackend;
