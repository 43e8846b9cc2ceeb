use crate::io::backend::{BackendError, TodoStore};
use crate::model::priority::Priority;
use crate::model::todo_item::TodoItem;

/// Store a new todo item and return it with its assigned id.
pub fn add_todo(
    store: &mut impl TodoStore,
    title: &str,
    priority_name: &str,
    owner: &str,
) -> Result<TodoItem, BackendError> {
    let mut item = TodoItem::new(title, Priority::from_name(priority_name), owner);
    item.id = store.save_todo(&item)?;
    tracing::info!(id = %item.id, "todo added");
    Ok(item)
}

/// Todo items, optionally restricted to one owner
pub fn list_todos(store: &impl TodoStore, owner: Option<&str>) -> Result<Vec<TodoItem>, BackendError> {
    let mut items = store.list_todos()?;
    if let Some(owner) = owner {
        items.retain(|item| item.owner == owner);
    }
    Ok(items)
}

/// Flip the completed flag of a todo item in the store.
pub fn toggle_completed(store: &mut impl TodoStore, id: &str) -> Result<TodoItem, BackendError> {
    let item = store.update_todo(id, |item| item.completed = !item.completed)?;
    tracing::info!(id = %item.id, completed = item.completed, "todo toggled");
    Ok(item)
}
