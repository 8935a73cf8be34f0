//! Running actionable tasks.

use smarttask_core::{ActionReport, Actionable};
use tracing::warn;

/// Execute `task` if it validates; otherwise log and skip it.
pub fn process_actionable(task: &dyn Actionable) -> Option<ActionReport> {
    if !task.validate() {
        warn!("Skipping invalid task: {}", task.describe_action());
        return None;
    }
    Some(task.execute())
}

/// Indices of `tasks` ordered by descending importance.
///
/// Ties keep their input order.
pub fn rank_by_importance(tasks: &[&dyn Actionable]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..tasks.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(tasks[i].importance_level()));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use smarttask_core::{RoutineTask, UrgentTask};

    #[test]
    fn test_process_valid_task() {
        let routine = RoutineTask::with_details(1, "Read", 1, "Study", 30).unwrap();
        let report = process_actionable(&routine).unwrap();
        assert!(report.headline.contains("Read"));
    }

    #[test]
    fn test_process_invalid_task_is_skipped() {
        let routine = RoutineTask::default();
        assert!(process_actionable(&routine).is_none());

        let urgent = UrgentTask::default();
        assert!(process_actionable(&urgent).is_none());
    }

    #[test]
    fn test_rank_by_importance() {
        let low = RoutineTask::new(1, "low", 1).unwrap();
        let high = RoutineTask::new(2, "high", 3).unwrap();
        let urgent = UrgentTask::new(3, "urgent", 3).unwrap();
        let also_high = RoutineTask::new(4, "also high", 3).unwrap();

        let tasks: Vec<&dyn Actionable> = vec![&low, &high, &urgent, &also_high];
        assert_eq!(rank_by_importance(&tasks), vec![2, 1, 3, 0]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_by_importance(&[]).is_empty());
    }
}
