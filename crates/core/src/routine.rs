//! Routine tasks: ordinary work with a category and a time estimate.

use serde::{Deserialize, Serialize};

use crate::actionable::{ActionReport, Actionable};
use crate::error::{Result, TaskError};
use crate::id::TaskId;
use crate::task::Task;

/// Category given to routine tasks unless told otherwise.
pub const DEFAULT_CATEGORY: &str = "General";

/// Estimate (minutes) given to routine tasks unless told otherwise.
pub const DEFAULT_ESTIMATED_MINUTES: u32 = 30;

/// A task with a category and an estimated duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoutineRecord")]
pub struct RoutineTask {
    task: Task,
    category: String,
    estimated_minutes: u32,
}

impl RoutineTask {
    /// Routine task in the default category with the default estimate.
    pub fn new(id: impl Into<TaskId>, name: &str, priority: i64) -> Result<Self> {
        Ok(Self::from_task(Task::new(id, name, priority)?))
    }

    /// Routine task with explicit category and estimate.
    ///
    /// A non-positive estimate leaves the default in place, the same way
    /// [`RoutineTask::set_estimated_minutes`] ignores it.
    pub fn with_details(
        id: impl Into<TaskId>,
        name: &str,
        priority: i64,
        category: impl Into<String>,
        estimated_minutes: i64,
    ) -> Result<Self> {
        let mut routine = Self::new(id, name, priority)?;
        routine.set_category(category);
        routine.set_estimated_minutes(estimated_minutes);
        Ok(routine)
    }

    fn from_task(task: Task) -> Self {
        Self {
            task,
            category: DEFAULT_CATEGORY.to_string(),
            estimated_minutes: DEFAULT_ESTIMATED_MINUTES,
        }
    }

    /// Shared task record.
    pub fn task(&self) -> &Task {
        &self.task
    }

    /// Mutable shared task record.
    pub fn task_mut(&mut self) -> &mut Task {
        &mut self.task
    }

    /// Free-text category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replace the category. Any text is accepted, including empty.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Estimated duration in minutes.
    pub fn estimated_minutes(&self) -> u32 {
        self.estimated_minutes
    }

    /// Update the estimate. Non-positive values are ignored and the
    /// previous estimate is kept.
    pub fn set_estimated_minutes(&mut self, minutes: i64) {
        match u32::try_from(minutes) {
            Ok(minutes) if minutes > 0 => self.estimated_minutes = minutes,
            _ => {
                tracing::debug!(
                    task_id = %self.task.id(),
                    minutes,
                    "Ignoring non-positive estimate"
                );
            }
        }
    }

    /// Base rendering followed by category, estimate and kind.
    pub fn describe(&self) -> String {
        format!(
            "{} | Category: {} | Time: {} min | Type: ROUTINE",
            self.task.describe(),
            self.category,
            self.estimated_minutes,
        )
    }
}

#[derive(Deserialize)]
struct RoutineRecord {
    task: Task,
    category: String,
    estimated_minutes: i64,
}

impl TryFrom<RoutineRecord> for RoutineTask {
    type Error = TaskError;

    fn try_from(record: RoutineRecord) -> Result<Self> {
        let estimated_minutes = u32::try_from(record.estimated_minutes)
            .ok()
            .filter(|minutes| *minutes > 0)
            .ok_or_else(|| {
                TaskError::invalid(format!(
                    "estimated minutes must be positive, got {}",
                    record.estimated_minutes
                ))
            })?;
        Ok(Self {
            task: record.task,
            category: record.category,
            estimated_minutes,
        })
    }
}

impl Default for RoutineTask {
    fn default() -> Self {
        Self::from_task(Task::default())
    }
}

impl std::fmt::Display for RoutineTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

impl Actionable for RoutineTask {
    fn execute(&self) -> ActionReport {
        tracing::info!(task_id = %self.task.id(), name = self.task.name(), "Executing routine task");

        ActionReport::new(self.task.id(), format!("Executing routine task: {}", self.task.name()))
            .with_detail(format!("Category: {}", self.category))
            .with_detail(format!("Estimated time: {} minutes", self.estimated_minutes))
            .with_detail(format!("Priority: {}", self.task.priority_label()))
    }

    fn cancel(&mut self) {
        tracing::info!(task_id = %self.task.id(), name = self.task.name(), "Cancelling routine task");
        self.task.mark_pending();
    }

    fn validate(&self) -> bool {
        self.task.is_valid()
    }

    fn importance_level(&self) -> u8 {
        self.task.priority()
    }

    fn describe_action(&self) -> String {
        format!(
            "Routine task - {} [{}] - {} min",
            self.task.name(),
            self.category,
            self.estimated_minutes,
        )
    }
}
