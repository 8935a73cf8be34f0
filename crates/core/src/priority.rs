//! Priority levels.

use serde::{Deserialize, Serialize};

use crate::error::TaskError;

/// Raw level for [`Priority::Low`].
pub const PRIORITY_LOW: u8 = 1;
/// Raw level for [`Priority::Medium`].
pub const PRIORITY_MEDIUM: u8 = 2;
/// Raw level for [`Priority::High`].
pub const PRIORITY_HIGH: u8 = 3;

/// Task priority. Tasks store the raw level; this enum is the typed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Level 1
    Low,
    /// Level 2
    Medium,
    /// Level 3
    High,
}

impl Priority {
    /// All priorities in ascending order.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Map a raw level to a priority, `None` outside 1..=3.
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            _ => None,
        }
    }

    /// Raw numeric level.
    pub fn level(self) -> u8 {
        match self {
            Self::Low => PRIORITY_LOW,
            Self::Medium => PRIORITY_MEDIUM,
            Self::High => PRIORITY_HIGH,
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Colored marker used by the menu.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🔴",
        }
    }
}

impl TryFrom<i64> for Priority {
    type Error = TaskError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        Self::from_level(level)
            .ok_or_else(|| TaskError::invalid(format!("priority must be between 1 and 3, got {level}")))
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Label for a raw level; "Undefined" when the level is out of range.
pub fn priority_label(level: i64) -> &'static str {
    Priority::from_level(level).map_or("Undefined", Priority::label)
}

/// Glyph for a raw level; a neutral marker when the level is out of range.
pub fn priority_glyph(level: i64) -> &'static str {
    Priority::from_level(level).map_or("⚪", Priority::glyph)
}
