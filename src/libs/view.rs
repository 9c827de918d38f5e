//! Derived UI state and table rendering.
//!
//! The stores hand back data in storage order; everything a screen needs on
//! top of that (history ordering, selector options with shortened labels)
//! is computed here from plain values.

use super::formatter::{format_date_time, option_label};
use super::log::LogRecord;
use super::task::TaskRef;
use prettytable::{row, Table};
use serde::{Deserialize, Serialize};

/// Task selector labels are cut after this many characters.
pub const TASK_LABEL_MAX: usize = 23;
/// Category selector labels are cut after this many characters.
pub const CATEGORY_LABEL_MAX: usize = 15;
/// Label of the empty category option.
pub const UNCATEGORIZED_LABEL: &str = "未分類";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryOrder {
    /// Newest first
    #[default]
    Desc,
    /// Oldest first
    Asc,
}

impl HistoryOrder {
    pub fn toggled(self) -> Self {
        match self {
            HistoryOrder::Desc => HistoryOrder::Asc,
            HistoryOrder::Asc => HistoryOrder::Desc,
        }
    }
}

/// A selector entry: the full value and the text shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Orders history by start time.
pub fn sort_history(mut logs: Vec<LogRecord>, order: HistoryOrder) -> Vec<LogRecord> {
    match order {
        HistoryOrder::Desc => logs.sort_by(|a, b| b.start_time.cmp(&a.start_time)),
        HistoryOrder::Asc => logs.sort_by(|a, b| a.start_time.cmp(&b.start_time)),
    }
    logs
}

pub fn task_options(tasks: &[TaskRef]) -> Vec<SelectOption> {
    tasks
        .iter()
        .map(|t| SelectOption {
            value: t.name.clone(),
            label: option_label(&t.name, TASK_LABEL_MAX),
        })
        .collect()
}

/// Category options, led by the empty "uncategorized" choice.
pub fn category_options(categories: &[String]) -> Vec<SelectOption> {
    let mut options = vec![SelectOption {
        value: String::new(),
        label: UNCATEGORIZED_LABEL.to_string(),
    }];
    options.extend(categories.iter().map(|c| SelectOption {
        value: c.clone(),
        label: option_label(c, CATEGORY_LABEL_MAX),
    }));
    options
}

pub struct View {}

impl View {
    pub fn history(logs: &[LogRecord]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "START", "END", "DURATION", "CATEGORY", "TASK"]);
        for log in logs {
            table.add_row(row![
                log.id,
                format_date_time(&log.start_time),
                format_date_time(&log.end_time),
                log.duration,
                log.category,
                log.task
            ]);
        }
        table.printstd();
    }

    pub fn tasks(tasks: &[TaskRef]) {
        let mut table = Table::new();

        table.add_row(row!["NAME"]);
        for task in tasks {
            table.add_row(row![task.name]);
        }
        table.printstd();
    }

    pub fn categories(categories: &[String]) {
        let mut table = Table::new();

        table.add_row(row!["#", "CATEGORY"]);
        for (i, category) in categories.iter().enumerate() {
            table.add_row(row![i + 1, category]);
        }
        table.printstd();
    }
}
