//! Stored task entries: one closed variant per task kind.

use serde::{Deserialize, Serialize};

use crate::actionable::Actionable;
use crate::id::TaskId;
use crate::routine::RoutineTask;
use crate::task::Task;
use crate::urgent::UrgentTask;

/// Any task the manager can hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskEntry {
    /// Base task without specialised behaviour
    Plain(Task),
    /// Routine task
    Routine(RoutineTask),
    /// Urgent task
    Urgent(UrgentTask),
}

/// Discriminant of a [`TaskEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    /// [`TaskEntry::Plain`]
    Plain,
    /// [`TaskEntry::Routine`]
    Routine,
    /// [`TaskEntry::Urgent`]
    Urgent,
}

impl TaskKind {
    /// Uppercase display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Plain => "PLAIN",
            TaskKind::Routine => "ROUTINE",
            TaskKind::Urgent => "URGENT",
        }
    }
}

impl TaskEntry {
    /// Shared task record.
    pub fn task(&self) -> &Task {
        match self {
            Self::Plain(task) => task,
            Self::Routine(routine) => routine.task(),
            Self::Urgent(urgent) => urgent.task(),
        }
    }

    /// Mutable shared task record.
    pub fn task_mut(&mut self) -> &mut Task {
        match self {
            Self::Plain(task) => task,
            Self::Routine(routine) => routine.task_mut(),
            Self::Urgent(urgent) => urgent.task_mut(),
        }
    }

    /// Task id.
    pub fn id(&self) -> TaskId {
        self.task().id()
    }

    /// Which kind of task this is.
    pub fn kind(&self) -> TaskKind {
        match self {
            Self::Plain(_) => TaskKind::Plain,
            Self::Routine(_) => TaskKind::Routine,
            Self::Urgent(_) => TaskKind::Urgent,
        }
    }

    /// Kind-specific rendering.
    pub fn describe(&self) -> String {
        match self {
            Self::Plain(task) => task.describe(),
            Self::Routine(routine) => routine.describe(),
            Self::Urgent(urgent) => urgent.describe(),
        }
    }

    /// The actionable view, `None` for plain tasks.
    pub fn as_actionable(&self) -> Option<&dyn Actionable> {
        match self {
            Self::Plain(_) => None,
            Self::Routine(routine) => Some(routine),
            Self::Urgent(urgent) => Some(urgent),
        }
    }

    /// Mutable actionable view, `None` for plain tasks.
    pub fn as_actionable_mut(&mut self) -> Option<&mut dyn Actionable> {
        match self {
            Self::Plain(_) => None,
            Self::Routine(routine) => Some(routine),
            Self::Urgent(urgent) => Some(urgent),
        }
    }
}

impl From<Task> for TaskEntry {
    fn from(task: Task) -> Self {
        Self::Plain(task)
    }
}

impl From<RoutineTask> for TaskEntry {
    fn from(routine: RoutineTask) -> Self {
        Self::Routine(routine)
    }
}

impl From<UrgentTask> for TaskEntry {
    fn from(urgent: UrgentTask) -> Self {
        Self::Urgent(urgent)
    }
}

impl std::fmt::Display for TaskEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_shared_record() {
        let entries: Vec<TaskEntry> = vec![
            Task::new(1, "plain", 1).unwrap().into(),
            RoutineTask::new(2, "routine", 2).unwrap().into(),
            UrgentTask::new(3, "urgent", 3).unwrap().into(),
        ];

        let kinds: Vec<_> = entries.iter().map(TaskEntry::kind).collect();
        assert_eq!(kinds, vec![TaskKind::Plain, TaskKind::Routine, TaskKind::Urgent]);

        let ids: Vec<u32> = entries.iter().map(|e| e.id().value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_actionable_capability() {
        let plain: TaskEntry = Task::new(1, "plain", 1).unwrap().into();
        assert!(plain.as_actionable().is_none());

        let routine: TaskEntry = RoutineTask::new(2, "routine", 2).unwrap().into();
        assert_eq!(routine.as_actionable().map(|a| a.importance_level()), Some(2));

        let urgent: TaskEntry = UrgentTask::new(3, "urgent", 3).unwrap().into();
        assert_eq!(urgent.as_actionable().map(|a| a.importance_level()), Some(8));
    }

    #[test]
    fn test_mutation_through_entry() {
        let mut entry: TaskEntry = UrgentTask::new(4, "deploy", 3).unwrap().into();
        entry.task_mut().mark_completed();
        assert!(entry.task().is_completed());

        if let Some(actionable) = entry.as_actionable_mut() {
            actionable.cancel();
        }
        match &entry {
            TaskEntry::Urgent(urgent) => {
                assert!(!urgent.task().is_completed());
                assert!(!urgent.notifications_enabled());
            }
            other => panic!("unexpected kind {:?}", other.kind()),
        }
    }

    #[test]
    fn test_describe_dispatches_on_kind() {
        let routine: TaskEntry = RoutineTask::new(2, "routine", 2).unwrap().into();
        assert!(routine.to_string().ends_with("Type: ROUTINE"));

        let plain: TaskEntry = Task::new(1, "plain", 1).unwrap().into();
        assert!(plain.to_string().ends_with("Status: Pending"));
    }

    #[test]
    fn test_serialized_shape_is_tagged() {
        let entry: TaskEntry = Task::new(1, "plain", 1).unwrap().into();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "plain");
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "plain");
    }

    #[test]
    fn test_deserialize_by_kind_validates_payload() {
        let entry: TaskEntry = RoutineTask::with_details(2, "Stretch", 1, "Health", 15)
            .unwrap()
            .into();
        let json = serde_json::to_value(&entry).unwrap();
        let back: TaskEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);

        let urgent = r#"{"kind":"urgent","task":{"id":5,"name":"Hotfix","priority":3,"completed":false},
            "deadline":"2030-01-01T00:00:00Z","notifications_enabled":true,"criticality":12,"responsible":"Ops"}"#;
        assert!(serde_json::from_str::<TaskEntry>(urgent).is_err());

        let plain = r#"{"kind":"plain","id":6,"name":"","priority":1,"completed":false}"#;
        assert!(serde_json::from_str::<TaskEntry>(plain).is_err());
    }
}
