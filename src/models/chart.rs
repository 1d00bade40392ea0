//! Weekly chart ranges.

use serde::{Deserialize, Serialize};

/// One week for which a user's chart is available.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklyChart {
    /// Start of the range, Unix timestamp.
    pub from: i64,

    /// End of the range, Unix timestamp.
    pub to: i64,
}

impl WeeklyChart {
    /// Whether the timestamp falls inside this range.
    pub fn contains(&self, timestamp: i64) -> bool {
        (self.from..self.to).contains(&timestamp)
    }
}
