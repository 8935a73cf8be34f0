//! SmartTask core data models.
//!
//! This crate defines the task entity, its routine and urgent variants, and
//! the [`Actionable`] capability they share.

#![warn(missing_docs)]

// Core identities
mod id;
mod error;
mod priority;

// Task model
mod task;
mod actionable;
mod routine;
mod urgent;
mod entry;

// Re-exports
pub use id::TaskId;
pub use error::{Result, TaskError};
pub use priority::{
    priority_glyph, priority_label, Priority, PRIORITY_HIGH, PRIORITY_LOW, PRIORITY_MEDIUM,
};

pub use task::{normalize_name, Task};
pub use actionable::{ActionReport, Actionable};
pub use routine::{RoutineTask, DEFAULT_CATEGORY, DEFAULT_ESTIMATED_MINUTES};
pub use urgent::{UrgentTask, CRITICALITY_DEFAULT, CRITICALITY_MAX, CRITICALITY_MIN, UNASSIGNED};
pub use entry::{TaskEntry, TaskKind};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
