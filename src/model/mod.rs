pub mod config;
pub mod due;
pub mod priority;
pub mod task;
pub mod todo_item;

pub use config::*;
pub use due::*;
pub use priority::*;
pub use task::*;
pub use todo_item::*;
