use serde::{Deserialize, Serialize};

/// A task as stored and exchanged over the API.
///
/// `date` is a `YYYYMMDD` string and `repeat` a rule string understood by
/// `tasuku_rule`; an empty `repeat` marks a one-off task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: String,
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

impl Task {
    /// Whether completing the task schedules another occurrence.
    #[must_use]
    pub fn is_repeating(&self) -> bool {
        !self.repeat.trim().is_empty()
    }
}
