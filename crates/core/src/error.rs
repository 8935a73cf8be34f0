//! Error type shared by the task model and the manager.

/// Result alias for task operations.
pub type Result<T> = std::result::Result<T, TaskError>;

/// Errors raised when a precondition on task data is violated.
///
/// Every fallible operation checks its input before touching any state, so
/// an error always means nothing changed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    /// Rejected argument (empty name, out-of-range priority or criticality)
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument
        reason: String,
    },
}

impl TaskError {
    /// Build a [`TaskError::InvalidArgument`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TaskError::invalid("task name cannot be empty");
        assert_eq!(err.to_string(), "Invalid argument: task name cannot be empty");
    }
}
