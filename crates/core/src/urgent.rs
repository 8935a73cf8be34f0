//! Urgent tasks: time-critical work with a deadline and an owner.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::actionable::{ActionReport, Actionable};
use crate::error::{Result, TaskError};
use crate::id::TaskId;
use crate::priority::Priority;
use crate::task::Task;
use crate::Time;

/// Lowest accepted criticality.
pub const CRITICALITY_MIN: u8 = 1;
/// Highest accepted criticality.
pub const CRITICALITY_MAX: u8 = 10;
/// Criticality given to urgent tasks unless told otherwise.
pub const CRITICALITY_DEFAULT: u8 = 8;

/// Responsible party given to urgent tasks unless told otherwise.
pub const UNASSIGNED: &str = "Unassigned";

const DEADLINE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// A task with a deadline, a criticality score and a responsible party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UrgentRecord")]
pub struct UrgentTask {
    task: Task,
    deadline: Time,
    notifications_enabled: bool,
    criticality: u8,
    responsible: String,
}

impl UrgentTask {
    /// Urgent task due in one day, default criticality, unassigned.
    pub fn new(id: impl Into<TaskId>, name: &str, priority: i64) -> Result<Self> {
        Ok(Self::from_task(Task::new(id, name, priority)?))
    }

    /// Urgent task with explicit deadline, criticality and owner.
    pub fn with_details(
        id: impl Into<TaskId>,
        name: &str,
        priority: i64,
        deadline: Time,
        criticality: i64,
        responsible: impl Into<String>,
    ) -> Result<Self> {
        let criticality = check_criticality(criticality)?;
        let mut urgent = Self::new(id, name, priority)?;
        urgent.deadline = deadline;
        urgent.criticality = criticality;
        urgent.responsible = responsible.into();
        Ok(urgent)
    }

    fn from_task(task: Task) -> Self {
        Self {
            task,
            deadline: chrono::Utc::now() + Duration::days(1),
            notifications_enabled: true,
            criticality: CRITICALITY_DEFAULT,
            responsible: UNASSIGNED.to_string(),
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

    /// When the task is due.
    pub fn deadline(&self) -> Time {
        self.deadline
    }

    /// Move the deadline.
    pub fn set_deadline(&mut self, deadline: Time) {
        self.deadline = deadline;
    }

    /// Whether reminders are sent for this task.
    pub fn notifications_enabled(&self) -> bool {
        self.notifications_enabled
    }

    /// Turn reminders on or off.
    pub fn set_notifications_enabled(&mut self, enabled: bool) {
        self.notifications_enabled = enabled;
    }

    /// Criticality score (1..=10).
    pub fn criticality(&self) -> u8 {
        self.criticality
    }

    /// Change the criticality. Rejects values outside 1..=10.
    pub fn set_criticality(&mut self, criticality: i64) -> Result<()> {
        self.criticality = check_criticality(criticality)?;
        Ok(())
    }

    /// Who is responsible.
    pub fn responsible(&self) -> &str {
        &self.responsible
    }

    /// Reassign the task. Any text is accepted.
    pub fn set_responsible(&mut self, responsible: impl Into<String>) {
        self.responsible = responsible.into();
    }

    /// Whether `now` is strictly past the deadline.
    pub fn is_overdue_at(&self, now: Time) -> bool {
        now > self.deadline
    }

    /// Whether the deadline has passed.
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(chrono::Utc::now())
    }

    /// Whole hours from `now` until the deadline, rounded down; negative once overdue.
    pub fn hours_remaining_at(&self, now: Time) -> i64 {
        let remaining = self.deadline - now;
        let hours = remaining.num_hours();
        // num_hours truncates toward zero; round partial hours past the deadline down.
        if remaining < Duration::hours(hours) {
            hours - 1
        } else {
            hours
        }
    }

    /// Whole hours until the deadline.
    pub fn hours_remaining(&self) -> i64 {
        self.hours_remaining_at(chrono::Utc::now())
    }

    /// Deadline as `dd/mm/YYYY HH:MM`.
    pub fn formatted_deadline(&self) -> String {
        self.deadline.format(DEADLINE_FORMAT).to_string()
    }

    /// Reminder text, only while notifications are enabled.
    pub fn notification(&self) -> Option<String> {
        self.notifications_enabled.then(|| {
            format!(
                "Urgent task '{}' needs attention, {} hours left",
                self.task.name(),
                self.hours_remaining(),
            )
        })
    }

    /// Base rendering followed by criticality, owner, deadline and state.
    pub fn describe(&self) -> String {
        format!(
            "{} | Criticality: {}/{} | Responsible: {} | Due: {} | State: {} | Type: URGENT",
            self.task.describe(),
            self.criticality,
            CRITICALITY_MAX,
            self.responsible,
            self.formatted_deadline(),
            if self.is_overdue() { "OVERDUE" } else { "CURRENT" },
        )
    }
}

#[derive(Deserialize)]
struct UrgentRecord {
    task: Task,
    deadline: Time,
    notifications_enabled: bool,
    criticality: i64,
    responsible: String,
}

impl TryFrom<UrgentRecord> for UrgentTask {
    type Error = TaskError;

    fn try_from(record: UrgentRecord) -> Result<Self> {
        Ok(Self {
            criticality: check_criticality(record.criticality)?,
            task: record.task,
            deadline: record.deadline,
            notifications_enabled: record.notifications_enabled,
            responsible: record.responsible,
        })
    }
}

impl Default for UrgentTask {
    /// Bare urgent task: empty name, high priority.
    fn default() -> Self {
        Self::from_task(Task::bare(Priority::High))
    }
}

impl std::fmt::Display for UrgentTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

impl Actionable for UrgentTask {
    fn execute(&self) -> ActionReport {
        let overdue = self.is_overdue();
        tracing::info!(
            task_id = %self.task.id(),
            name = self.task.name(),
            criticality = self.criticality,
            overdue,
            "Executing urgent task"
        );

        let report = ActionReport::new(
            self.task.id(),
            format!("EXECUTING URGENT TASK: {}", self.task.name()),
        )
        .with_detail(format!("Criticality: {}/{}", self.criticality, CRITICALITY_MAX))
        .with_detail(format!("Responsible: {}", self.responsible))
        .with_detail(format!("Deadline: {}", self.formatted_deadline()))
        .with_detail(format!(
            "Notifications: {}",
            if self.notifications_enabled { "ACTIVE" } else { "disabled" }
        ));

        if overdue {
            report.with_alert("task is OVERDUE")
        } else {
            report
        }
    }

    fn cancel(&mut self) {
        tracing::info!(task_id = %self.task.id(), name = self.task.name(), "Cancelling urgent task");
        self.task.mark_pending();
        self.notifications_enabled = false;
    }

    fn validate(&self) -> bool {
        // The deadline is always present; only the criticality range can drift.
        self.task.is_valid() && (CRITICALITY_MIN..=CRITICALITY_MAX).contains(&self.criticality)
    }

    // Criticality 1..=10 lands in 6..=9.
    fn importance_level(&self) -> u8 {
        6 + self.criticality / 3
    }

    fn describe_action(&self) -> String {
        format!(
            "URGENT TASK - {} | Criticality: {}/{} | Responsible: {} | Due: {}",
            self.task.name(),
            self.criticality,
            CRITICALITY_MAX,
            self.responsible,
            self.formatted_deadline(),
        )
    }
}

fn check_criticality(criticality: i64) -> Result<u8> {
    u8::try_from(criticality)
        .ok()
        .filter(|c| (CRITICALITY_MIN..=CRITICALITY_MAX).contains(c))
        .ok_or_else(|| {
            TaskError::invalid(format!(
                "criticality must be between {CRITICALITY_MIN} and {CRITICALITY_MAX}, got {criticality}"
            ))
        })
}
