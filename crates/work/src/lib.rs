//! Task management
//!
//! The task collection, its id sequence, queries, statistics and
//! actionable processing.

#![warn(missing_docs)]

pub mod manager;
pub mod stats;
pub mod executor;

pub use manager::TaskManager;
pub use stats::TaskStats;
pub use executor::{process_actionable, rank_by_importance};
