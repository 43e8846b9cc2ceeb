use crate::io::backend::{BackendError, TaskBackend};
use crate::model::due::{DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT, DueError, DueTimestamp};
use crate::model::priority::{FlagOption, Priority};
use crate::model::task::Task;

/// Error type for edit session operations
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("task not found: {0}")]
    NotFound(String),
    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
}

impl From<BackendError> for EditError {
    fn from(e: BackendError) -> Self {
        match e {
            BackendError::NotFound(id) => EditError::NotFound(id),
            BackendError::Unavailable(msg) => EditError::BackendUnavailable(msg),
        }
    }
}

/// Rejected field input or an unsavable working copy
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error(transparent)]
    Due(#[from] DueError),
    #[error("task id must not be blank")]
    BlankId,
}

/// One edit interaction over a single task.
///
/// A session only exists once its working copy is loaded. Field setters
/// change the working copy in memory; nothing reaches the backend until
/// [`commit`](TaskEditSession::commit). Committing or discarding consumes
/// the session.
pub struct TaskEditSession<B: TaskBackend> {
    backend: B,
    original: Task,
    task: Task,
}

impl<B: TaskBackend> TaskEditSession<B> {
    /// Start editing `task_id`, or a fresh default task when it is empty.
    pub fn initialize(backend: B, task_id: &str) -> Result<Self, EditError> {
        let task = if task_id.is_empty() {
            Task::default()
        } else {
            backend.load(task_id)?
        };
        tracing::debug!(id = task_id, "edit session started");
        Ok(TaskEditSession {
            backend,
            original: task.clone(),
            task,
        })
    }

    /// The working copy
    pub fn task(&self) -> &Task {
        &self.task
    }

    /// Whether the working copy differs from what the session started with
    pub fn is_modified(&self) -> bool {
        self.task != self.original
    }

    pub fn set_title(&mut self, text: impl Into<String>) {
        self.task.title = text.into();
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.task.description = text.into();
    }

    pub fn set_url(&mut self, text: impl Into<String>) {
        self.task.url = text.into();
    }

    /// Unknown option names select [`Priority::None`].
    pub fn set_priority(&mut self, option_name: &str) {
        let priority = Priority::from_name(option_name);
        tracing::debug!(option = option_name, resolved = priority.name(), "priority set");
        self.task.priority = priority;
    }

    /// Unknown option names clear the flag.
    pub fn toggle_flag(&mut self, option_name: &str) {
        self.task.flag = FlagOption::from_name(option_name).is_checked();
    }

    /// Set the due date from a picked UTC timestamp; the time is kept.
    pub fn set_due_date(&mut self, epoch_millis: i64) -> Result<(), ValidationError> {
        self.task.due.date = Some(DueTimestamp::date_from_epoch_millis(epoch_millis)?);
        Ok(())
    }

    /// Set the due time from a 24-hour reading; the date is kept.
    pub fn set_due_time(&mut self, hour: i32, minute: i32) -> Result<(), ValidationError> {
        self.task.due.time = Some(DueTimestamp::time_from_hour_minute(hour, minute)?);
        Ok(())
    }

    pub fn clear_due_date(&mut self) {
        self.task.due.date = None;
    }

    pub fn clear_due_time(&mut self) {
        self.task.due.time = None;
    }

    /// Due date in the default display format, empty when unset
    pub fn due_date_display(&self) -> String {
        self.task.due.format_date(DEFAULT_DATE_FORMAT)
    }

    /// Due time in the default display format, empty when unset
    pub fn due_time_display(&self) -> String {
        self.task.due.format_time(DEFAULT_TIME_FORMAT)
    }

    /// Save the working copy and call `on_success` once it is stored.
    ///
    /// On failure the callback is not called and the error is returned
    /// as-is; there is no retry.
    pub fn commit(mut self, on_success: impl FnOnce()) -> Result<Task, EditError> {
        validate(&self.task)?;
        let inserting = self.task.is_new();
        let id = self.backend.save(&self.task)?;
        self.task.id = id;
        tracing::info!(id = %self.task.id, inserted = inserting, "task committed");
        on_success();
        Ok(self.task)
    }

    /// End the session without saving, returning the backend.
    pub fn discard(self) -> B {
        tracing::debug!(id = %self.task.id, "edit session discarded");
        self.backend
    }
}

fn validate(task: &Task) -> Result<(), ValidationError> {
    if !task.id.is_empty() && task.id.trim().is_empty() {
        return Err(ValidationError::BlankId);
    }
    Ok(())
}
