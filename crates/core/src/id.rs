//! Identifiers for SmartTask entities.

use serde::{Deserialize, Serialize};

use crate::error::TaskError;

/// Identifier of a task, unique within one manager.
///
/// Ids are issued sequentially by the manager starting at 1. Tasks built
/// directly (outside a manager) carry whatever id the caller gives them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u32);

impl TaskId {
    /// Wrap a raw id.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Raw numeric value.
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for TaskId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for TaskId {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| TaskError::invalid(format!("'{s}' is not a valid task id")))
    }
}
