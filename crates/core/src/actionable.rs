//! Capability shared by the specialised task kinds.

use serde::{Deserialize, Serialize};

use crate::id::TaskId;

/// Operations every specialised task kind supports.
///
/// Plain tasks do not implement this; use
/// [`TaskEntry::as_actionable`](crate::TaskEntry::as_actionable) to ask an
/// entry for the capability.
pub trait Actionable {
    /// Report the task's current data. Never changes state.
    fn execute(&self) -> ActionReport;

    /// Return the task to pending, plus any kind-specific side effects.
    fn cancel(&mut self);

    /// Whether the task carries everything its kind requires.
    fn validate(&self) -> bool;

    /// Ranking scalar comparable across kinds.
    fn importance_level(&self) -> u8;

    /// One-line action summary with the kind-specific fields.
    fn describe_action(&self) -> String;
}

/// What `execute` produced for a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionReport {
    /// Task that was executed
    pub task_id: TaskId,

    /// Headline naming the task and its kind
    pub headline: String,

    /// Detail lines in display order
    pub details: Vec<String>,

    /// Raised when the task needs attention (e.g. it is overdue)
    pub alert: Option<String>,
}

impl ActionReport {
    /// Start a report with no details.
    pub fn new(task_id: TaskId, headline: impl Into<String>) -> Self {
        Self {
            task_id,
            headline: headline.into(),
            details: Vec::new(),
            alert: None,
        }
    }

    /// Append a detail line.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    /// Set the alert.
    pub fn with_alert(mut self, alert: impl Into<String>) -> Self {
        self.alert = Some(alert.into());
        self
    }
}
