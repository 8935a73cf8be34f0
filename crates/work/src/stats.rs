//! Statistics snapshot over a task collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smarttask_core::Priority;

/// Counters taken from a [`TaskManager`](crate::TaskManager) at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskStats {
    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,

    /// Number of tasks
    pub total: usize,

    /// Completed tasks
    pub completed: usize,

    /// Pending tasks
    pub pending: usize,

    /// Task count per priority, ascending
    pub by_priority: Vec<(Priority, usize)>,

    /// Completed share in percent (unrounded)
    pub percent_completed: f64,

    /// Pending share in percent (unrounded)
    pub percent_pending: f64,
}

impl TaskStats {
    /// Count for one priority.
    pub fn count_for(&self, priority: Priority) -> usize {
        self.by_priority
            .iter()
            .find(|(p, _)| *p == priority)
            .map_or(0, |(_, count)| *count)
    }
}

impl Default for TaskStats {
    fn default() -> Self {
        Self {
            timestamp: Utc::now(),
            total: 0,
            completed: 0,
            pending: 0,
            by_priority: Priority::ALL.iter().map(|p| (*p, 0)).collect(),
            percent_completed: 0.0,
            percent_pending: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = TaskStats::default();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.by_priority.len(), 3);
        assert_eq!(stats.count_for(Priority::High), 0);
        assert_eq!(stats.percent_completed, 0.0);
    }

    #[test]
    fn test_stats_serialize() {
        let stats = TaskStats {
            total: 4,
            completed: 1,
            pending: 3,
            by_priority: vec![(Priority::Low, 4)],
            percent_completed: 25.0,
            percent_pending: 75.0,
            ..Default::default()
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total"], 4);
        assert_eq!(json["percent_pending"], 75.0);
        assert_eq!(json["by_priority"][0][0], "Low");
        assert_eq!(stats.count_for(Priority::Medium), 0);
    }
}
