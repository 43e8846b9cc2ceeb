use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::io::backend::{BackendError, TaskBackend, TodoStore, new_id};
use crate::io::lock::StoreLock;
use crate::model::task::Task;
use crate::model::todo_item::TodoItem;

/// On-disk shape of the store: two independent collections keyed by id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub tasks: IndexMap<String, Task>,
    #[serde(default)]
    pub todos: IndexMap<String, TodoItem>,
}

/// Store backed by a single pretty-printed JSON document.
///
/// Every call re-reads the file, so separate processes see each other's
/// writes. Writes hold a [`StoreLock`] across read-modify-write.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileBackend { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole document. A missing file is an empty store.
    pub fn read_document(&self) -> Result<StoreDocument, BackendError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(StoreDocument::default()),
            Err(e) => return Err(unavailable(&self.path, e)),
        };
        serde_json::from_str(&text).map_err(|e| unavailable(&self.path, e))
    }

    /// Apply `f` to the document under the store lock and write it back.
    /// Nothing is written when `f` fails.
    pub fn update<T>(
        &self,
        f: impl FnOnce(&mut StoreDocument) -> Result<T, BackendError>,
    ) -> Result<T, BackendError> {
        if let Some(dir) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| unavailable(&self.path, e))?;
        }
        StoreLock::with_lock(&self.path, || -> Result<T, BackendError> {
            let mut doc = self.read_document()?;
            let out = f(&mut doc)?;
            let content =
                serde_json::to_string_pretty(&doc).map_err(|e| unavailable(&self.path, e))?;
            atomic_write(&self.path, content.as_bytes()).map_err(|e| unavailable(&self.path, e))?;
            tracing::debug!(path = %self.path.display(), "store written");
            Ok(out)
        })
        .map_err(|e| BackendError::Unavailable(e.to_string()))?
    }
}

impl TaskBackend for JsonFileBackend {
    fn load(&self, id: &str) -> Result<Task, BackendError> {
        self.read_document()?
            .tasks
            .swap_remove(id)
            .ok_or_else(|| BackendError::NotFound(id.to_string()))
    }

    fn save(&mut self, task: &Task) -> Result<String, BackendError> {
        let mut stored = task.clone();
        if stored.id.is_empty() {
            stored.id = new_id();
        }
        self.update(|doc| {
            let id = stored.id.clone();
            doc.tasks.insert(id.clone(), stored);
            Ok(id)
        })
    }
}

impl TodoStore for JsonFileBackend {
    fn list_todos(&self) -> Result<Vec<TodoItem>, BackendError> {
        Ok(self.read_document()?.todos.into_values().collect())
    }

    fn load_todo(&self, id: &str) -> Result<TodoItem, BackendError> {
        self.read_document()?
            .todos
            .swap_remove(id)
            .ok_or_else(|| BackendError::NotFound(id.to_string()))
    }

    fn save_todo(&mut self, item: &TodoItem) -> Result<String, BackendError> {
        let mut stored = item.clone();
        if stored.id.is_empty() {
            stored.id = new_id();
        }
        self.update(|doc| {
            let id = stored.id.clone();
            doc.todos.insert(id.clone(), stored);
            Ok(id)
        })
    }

    fn update_todo<F>(&mut self, id: &str, f: F) -> Result<TodoItem, BackendError>
    where
        F: FnOnce(&mut TodoItem),
    {
        self.update(|doc| {
            let item = doc
                .todos
                .get_mut(id)
                .ok_or_else(|| BackendError::NotFound(id.to_string()))?;
            f(item);
            Ok(item.clone())
        })
    }
}

fn unavailable(path: &Path, e: impl std::fmt::Display) -> BackendError {
    BackendError::Unavailable(format!("{}: {}", path.display(), e))
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
