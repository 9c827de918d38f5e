use serde::{Deserialize, Serialize};

/// Task names offered on an empty store so the first run has something to pick.
pub const DEFAULT_TASK_NAMES: [&str; 5] = ["メール確認", "資料作成", "会議", "設計", "調査"];

/// A remembered task name usable for quick re-selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRef {
    pub name: String,
}

impl TaskRef {
    pub fn new(name: &str) -> Self {
        TaskRef { name: name.to_string() }
    }
}

/// Whether a task name should be remembered. Blank input is ignored.
pub fn is_rememberable(name: &str) -> bool {
    !name.trim().is_empty()
}
