//! Task model - the base unit of work in SmartTask.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskError};
use crate::id::TaskId;
use crate::priority::{priority_label, Priority, PRIORITY_LOW};

/// A task: identity, name, priority and completion flag.
///
/// The fields shared by every task kind live here; routine and urgent tasks
/// embed a `Task` rather than duplicating its validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    id: TaskId,
    name: String,
    priority: u8,
    completed: bool,
}

impl Task {
    /// Create a pending task, validating and trimming the name.
    pub fn new(id: impl Into<TaskId>, name: &str, priority: i64) -> Result<Self> {
        let name = normalize_name(name)?;
        let priority = Priority::try_from(priority)?;

        Ok(Self {
            id: id.into(),
            name,
            priority: priority.level(),
            completed: false,
        })
    }

    /// Bare task (empty name) at the given priority.
    pub(crate) fn bare(priority: Priority) -> Self {
        Self {
            priority: priority.level(),
            ..Self::default()
        }
    }

    /// Task id.
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Replace the id. Ids are not meant to change once a manager issued them.
    pub fn set_id(&mut self, id: impl Into<TaskId>) {
        self.id = id.into();
    }

    /// Task name (already trimmed).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the task. Rejects empty or whitespace-only names.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.name = normalize_name(name)?;
        Ok(())
    }

    /// Raw priority level (1..=3).
    pub fn priority(&self) -> u8 {
        self.priority
    }

    /// Change the priority. Rejects levels outside 1..=3.
    pub fn set_priority(&mut self, priority: i64) -> Result<()> {
        self.priority = Priority::try_from(priority)?.level();
        Ok(())
    }

    /// Whether the task is done.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Set the completion flag directly.
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    /// Mark the task as completed.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Mark the task as pending again.
    pub fn mark_pending(&mut self) {
        self.completed = false;
    }

    /// "Low", "Medium", "High" or "Undefined".
    pub fn priority_label(&self) -> &'static str {
        priority_label(self.priority as i64)
    }

    /// `[X]` when completed, `[ ]` otherwise.
    pub fn status_symbol(&self) -> &'static str {
        if self.completed {
            "[X]"
        } else {
            "[ ]"
        }
    }

    /// Whether the stored priority is one of the known levels.
    pub fn is_priority_valid(&self) -> bool {
        Priority::from_level(self.priority as i64).is_some()
    }

    /// Checks shared by every task kind: non-blank name and a valid priority.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.is_priority_valid()
    }

    /// One-line rendering: symbol, id, name, priority label, status.
    pub fn describe(&self) -> String {
        format!(
            "{} ID: {} | {} | Priority: {} | Status: {}",
            self.status_symbol(),
            self.id,
            self.name,
            self.priority_label(),
            if self.completed { "Completed" } else { "Pending" },
        )
    }
}

impl Default for Task {
    /// Bare task: id 0, empty name, low priority, pending.
    fn default() -> Self {
        Self {
            id: TaskId::default(),
            name: String::new(),
            priority: PRIORITY_LOW,
            completed: false,
        }
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Wire form of [`Task`], checked by the same rules as [`Task::new`].
#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    name: String,
    priority: i64,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskError;

    fn try_from(record: TaskRecord) -> Result<Self> {
        let mut task = Task::new(record.id, &record.name, record.priority)?;
        task.completed = record.completed;
        Ok(task)
    }
}

/// Trim a task name, rejecting blank input.
pub fn normalize_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TaskError::invalid("task name cannot be empty"));
    }
    Ok(trimmed.to_string())
}
