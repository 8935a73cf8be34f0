//! Task manager: owns the collection and the id sequence.

use smarttask_core::{
    Priority, Result, RoutineTask, Task, TaskEntry, TaskId, Time, UrgentTask,
};
use tracing::debug;

use crate::stats::TaskStats;

/// In-memory task collection with sequential ids.
///
/// Ids start at 1 and are never reused, except after [`TaskManager::clear_all`].
/// Query methods hand back freshly built vectors of references in insertion
/// order; the live entries are reachable through [`TaskManager::find_by_id_mut`].
#[derive(Debug, Clone)]
pub struct TaskManager {
    tasks: Vec<TaskEntry>,
    next_id: u32,
}

impl Default for TaskManager {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

impl TaskManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next added task will receive.
    pub fn next_id(&self) -> TaskId {
        TaskId::new(self.next_id)
    }

    /// Create a plain task and append it.
    ///
    /// Fails on a blank name or a priority outside 1..=3; on failure no id
    /// is consumed and nothing is stored.
    pub fn add_task(&mut self, name: &str, priority: i64) -> Result<&Task> {
        let task = Task::new(self.next_id(), name, priority).inspect_err(|err| {
            debug!("Rejected task '{}': {}", name, err);
        })?;
        Ok(self.store(task.into()).task())
    }

    /// Create a routine task with a manager-issued id and append it.
    pub fn add_routine_task(
        &mut self,
        name: &str,
        priority: i64,
        category: &str,
        estimated_minutes: i64,
    ) -> Result<&TaskEntry> {
        let routine = RoutineTask::with_details(
            self.next_id(),
            name,
            priority,
            category,
            estimated_minutes,
        )
        .inspect_err(|err| debug!("Rejected routine task '{}': {}", name, err))?;
        Ok(self.store(routine.into()))
    }

    /// Create an urgent task with a manager-issued id and append it.
    pub fn add_urgent_task(
        &mut self,
        name: &str,
        priority: i64,
        deadline: Time,
        criticality: i64,
        responsible: &str,
    ) -> Result<&TaskEntry> {
        let urgent = UrgentTask::with_details(
            self.next_id(),
            name,
            priority,
            deadline,
            criticality,
            responsible,
        )
        .inspect_err(|err| debug!("Rejected urgent task '{}': {}", name, err))?;
        Ok(self.store(urgent.into()))
    }

    fn store(&mut self, entry: TaskEntry) -> &TaskEntry {
        debug!("Added task {} - {}", entry.id(), entry.task().name());
        self.next_id += 1;
        self.tasks.push(entry);
        &self.tasks[self.tasks.len() - 1]
    }

    /// Mark a task completed. Returns `false` when no task has that id.
    pub fn complete_by_id(&mut self, id: impl Into<TaskId>) -> bool {
        let id = id.into();
        match self.find_by_id_mut(id) {
            Some(entry) => {
                entry.task_mut().mark_completed();
                debug!("Completed task {}", id);
                true
            }
            None => false,
        }
    }

    /// Remove a task. Returns `false` when no task has that id.
    pub fn remove_by_id(&mut self, id: impl Into<TaskId>) -> bool {
        let id = id.into();
        match self.tasks.iter().position(|entry| entry.id() == id) {
            Some(index) => {
                self.tasks.remove(index);
                debug!("Removed task {}", id);
                true
            }
            None => false,
        }
    }

    /// Look up a task by id.
    pub fn find_by_id(&self, id: impl Into<TaskId>) -> Option<&TaskEntry> {
        let id = id.into();
        self.tasks.iter().find(|entry| entry.id() == id)
    }

    /// Look up a task by id for in-place changes.
    pub fn find_by_id_mut(&mut self, id: impl Into<TaskId>) -> Option<&mut TaskEntry> {
        let id = id.into();
        self.tasks.iter_mut().find(|entry| entry.id() == id)
    }

    /// Every task, in insertion order.
    pub fn list(&self) -> Vec<&TaskEntry> {
        self.tasks.iter().collect()
    }

    /// Tasks whose priority equals `priority` exactly.
    pub fn filter_by_priority(&self, priority: i64) -> Vec<&TaskEntry> {
        self.tasks
            .iter()
            .filter(|entry| entry.task().priority() as i64 == priority)
            .collect()
    }

    /// Completed tasks.
    pub fn completed_tasks(&self) -> Vec<&TaskEntry> {
        self.tasks
            .iter()
            .filter(|entry| entry.task().is_completed())
            .collect()
    }

    /// Tasks not yet completed.
    pub fn pending_tasks(&self) -> Vec<&TaskEntry> {
        self.tasks
            .iter()
            .filter(|entry| !entry.task().is_completed())
            .collect()
    }

    /// Number of tasks.
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Number of completed tasks.
    pub fn count_completed(&self) -> usize {
        self.tasks
            .iter()
            .filter(|entry| entry.task().is_completed())
            .count()
    }

    /// Number of pending tasks.
    pub fn count_pending(&self) -> usize {
        self.tasks
            .iter()
            .filter(|entry| !entry.task().is_completed())
            .count()
    }

    /// Number of tasks at the given priority.
    pub fn count_by_priority(&self, priority: i64) -> usize {
        self.tasks
            .iter()
            .filter(|entry| entry.task().priority() as i64 == priority)
            .count()
    }

    /// Share of completed tasks in percent, 0.0 when empty.
    pub fn percent_completed(&self) -> f64 {
        percentage(self.count_completed(), self.count())
    }

    /// Share of pending tasks in percent, 0.0 when empty.
    pub fn percent_pending(&self) -> f64 {
        percentage(self.count_pending(), self.count())
    }

    /// Whether there are no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Drop every task and restart ids at 1.
    pub fn clear_all(&mut self) {
        debug!("Clearing {} tasks", self.tasks.len());
        self.tasks.clear();
        self.next_id = 1;
    }

    /// Snapshot of the counters above.
    pub fn stats(&self) -> TaskStats {
        TaskStats {
            timestamp: chrono::Utc::now(),
            total: self.count(),
            completed: self.count_completed(),
            pending: self.count_pending(),
            by_priority: Priority::ALL
                .iter()
                .map(|p| (*p, self.count_by_priority(p.level() as i64)))
                .collect(),
            percent_completed: self.percent_completed(),
            percent_pending: self.percent_pending(),
        }
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use smarttask_core::{TaskError, TaskKind};

    fn ids(entries: &[&TaskEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.id().value()).collect()
    }

    #[test]
    fn test_add_task_assigns_sequential_ids() {
        let mut manager = TaskManager::new();
        for expected in 1..=5u32 {
            let task = manager.add_task(&format!("task {expected}"), 2).unwrap();
            assert_eq!(task.id().value(), expected);
        }
        assert_eq!(manager.count(), 5);
        assert_eq!(manager.next_id(), TaskId::new(6));
    }

    #[test]
    fn test_add_task_trims_name() {
        let mut manager = TaskManager::new();
        let task = manager.add_task("   Buy bread  ", 1).unwrap();
        assert_eq!(task.name(), "Buy bread");
        assert!(!task.is_completed());
    }

    #[test]
    fn test_add_task_rejects_blank_names() {
        let mut manager = TaskManager::new();
        for name in ["", "   ", "\t\n"] {
            assert!(matches!(
                manager.add_task(name, 1),
                Err(TaskError::InvalidArgument { .. })
            ));
        }
        assert_eq!(manager.count(), 0);
        assert_eq!(manager.add_task("first", 1).unwrap().id().value(), 1);
    }

    #[test]
    fn test_add_task_priority_bounds() {
        let mut manager = TaskManager::new();
        assert!(manager.add_task("low", 0).is_err());
        assert!(manager.add_task("high", 4).is_err());
        assert_eq!(manager.count(), 0);

        assert_eq!(manager.add_task("low", 1).unwrap().priority(), 1);
        assert_eq!(manager.add_task("high", 3).unwrap().priority(), 3);
        assert_eq!(manager.count(), 2);
    }

    #[test]
    fn test_complete_by_id() {
        let mut manager = TaskManager::new();
        manager.add_task("a", 1).unwrap();

        assert!(!manager.complete_by_id(42));
        assert_eq!(manager.count(), 1);
        assert_eq!(manager.count_completed(), 0);

        assert!(manager.complete_by_id(1));
        assert!(manager.complete_by_id(1));
        assert!(manager.find_by_id(1).unwrap().task().is_completed());
        assert_eq!(manager.count_completed(), 1);
    }

    #[test]
    fn test_remove_by_id() {
        let mut manager = TaskManager::new();
        manager.add_task("a", 1).unwrap();
        manager.add_task("b", 2).unwrap();
        manager.add_task("c", 3).unwrap();

        assert!(manager.remove_by_id(2));
        assert_eq!(manager.count(), 2);
        assert!(manager.find_by_id(2).is_none());
        assert_eq!(ids(&manager.list()), vec![1, 3]);
        assert_eq!(manager.find_by_id(3).unwrap().task().name(), "c");

        assert!(!manager.remove_by_id(2));
        assert_eq!(manager.count(), 2);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut manager = TaskManager::new();
        manager.add_task("a", 1).unwrap();
        manager.add_task("b", 1).unwrap();
        manager.remove_by_id(2);
        assert_eq!(manager.add_task("c", 1).unwrap().id().value(), 3);
    }

    #[test]
    fn test_clear_all_resets_ids() {
        let mut manager = TaskManager::new();
        manager.add_task("a", 1).unwrap();
        manager.add_task("b", 2).unwrap();

        manager.clear_all();
        assert!(manager.is_empty());
        assert_eq!(manager.count(), 0);
        assert_eq!(manager.add_task("again", 1).unwrap().id().value(), 1);
    }

    #[test]
    fn test_find_by_id_mut_changes_stored_task() {
        let mut manager = TaskManager::new();
        manager.add_task("draft", 1).unwrap();

        let entry = manager.find_by_id_mut(1).unwrap();
        entry.task_mut().set_name("final").unwrap();
        entry.task_mut().set_priority(3).unwrap();

        let entry = manager.find_by_id(1).unwrap();
        assert_eq!(entry.task().name(), "final");
        assert_eq!(manager.count_by_priority(3), 1);
    }

    #[test]
    fn test_returned_lists_are_independent() {
        let mut manager = TaskManager::new();
        manager.add_task("a", 1).unwrap();
        manager.add_task("b", 1).unwrap();

        let mut listed = manager.list();
        listed.clear();
        assert_eq!(manager.count(), 2);

        let mut filtered = manager.filter_by_priority(1);
        filtered.reverse();
        assert_eq!(ids(&manager.filter_by_priority(1)), vec![1, 2]);
    }

    #[test]
    fn test_filter_by_priority() {
        let mut manager = TaskManager::new();
        manager.add_task("a", 1).unwrap();
        manager.add_task("b", 2).unwrap();
        manager.add_task("c", 1).unwrap();

        assert_eq!(ids(&manager.filter_by_priority(1)), vec![1, 3]);
        assert_eq!(ids(&manager.filter_by_priority(2)), vec![2]);
        assert!(manager.filter_by_priority(3).is_empty());
        assert!(manager.filter_by_priority(7).is_empty());
    }

    #[test]
    fn test_completed_and_pending_partitions() {
        let mut manager = TaskManager::new();
        for name in ["a", "b", "c", "d"] {
            manager.add_task(name, 2).unwrap();
        }
        manager.complete_by_id(2);
        manager.complete_by_id(4);

        assert_eq!(ids(&manager.completed_tasks()), vec![2, 4]);
        assert_eq!(ids(&manager.pending_tasks()), vec![1, 3]);
        assert_eq!(manager.percent_completed(), 50.0);
        assert_eq!(manager.percent_pending(), 50.0);
    }

    #[test]
    fn test_percentages_on_empty_manager() {
        let manager = TaskManager::new();
        assert_eq!(manager.percent_completed(), 0.0);
        assert_eq!(manager.percent_pending(), 0.0);
        assert!(manager.is_empty());
    }

    #[test]
    fn test_mixed_priority_scenario() {
        let mut manager = TaskManager::new();
        for (i, priority) in [1, 3, 2, 1, 3].into_iter().enumerate() {
            manager.add_task(&format!("task {}", i + 1), priority).unwrap();
        }
        let high: Vec<TaskId> = manager.filter_by_priority(3).iter().map(|e| e.id()).collect();
        for id in &high {
            assert!(manager.complete_by_id(*id));
        }

        assert_eq!(manager.count(), 5);
        assert_eq!(manager.count_completed(), 2);
        assert_eq!(manager.count_pending(), 3);
        assert_eq!(manager.percent_completed(), 40.0);
        assert_eq!(manager.percent_pending(), 60.0);

        let high = manager.filter_by_priority(3);
        assert_eq!(ids(&high), vec![2, 5]);
        assert!(high.iter().all(|e| e.task().is_completed()));

        assert_eq!(manager.count_by_priority(1), 2);
        assert_eq!(manager.count_by_priority(2), 1);
        assert_eq!(manager.count_by_priority(3), 2);
    }

    #[test]
    fn test_add_specialised_tasks() {
        let mut manager = TaskManager::new();
        manager.add_task("plain", 1).unwrap();

        let routine = manager.add_routine_task("Read docs", 1, "Study", 45).unwrap();
        assert_eq!(routine.id().value(), 2);
        assert_eq!(routine.kind(), TaskKind::Routine);

        let deadline = Utc::now() + Duration::hours(2);
        let urgent = manager
            .add_urgent_task("Fix outage", 3, deadline, 10, "On-call")
            .unwrap()
            .clone();
        assert_eq!(urgent.id().value(), 3);
        assert_eq!(urgent.as_actionable().map(|a| a.importance_level()), Some(9));
        assert_eq!(manager.find_by_id(3), Some(&urgent));

        assert!(manager.add_urgent_task("bad", 3, deadline, 11, "x").is_err());
        assert!(manager.add_routine_task(" ", 1, "Study", 45).is_err());
        assert_eq!(manager.count(), 3);
        assert_eq!(manager.next_id(), TaskId::new(4));
    }

    #[test]
    fn test_stats_snapshot() {
        let mut manager = TaskManager::new();
        manager.add_task("a", 1).unwrap();
        manager.add_task("b", 3).unwrap();
        manager.complete_by_id(2);

        let stats = manager.stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.count_for(Priority::Low), 1);
        assert_eq!(stats.count_for(Priority::Medium), 0);
        assert_eq!(stats.count_for(Priority::High), 1);
        assert_eq!(stats.percent_completed, 50.0);
    }
}
