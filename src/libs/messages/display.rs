//! Display implementation for worktimer messages.
//!
//! All user-facing text lives in this one `match`, so wording stays
//! consistent between commands and every new variant needs an explicit
//! phrasing.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TIMER MESSAGES ===
            Message::TimerStarted { task, category } => match (task.is_empty(), category.is_empty()) {
                (true, true) => "Timer started".to_string(),
                (false, true) => format!("Timer started: {}", task),
                (true, false) => format!("Timer started [{}]", category),
                (false, false) => format!("Timer started: {} [{}]", task, category),
            },
            Message::TimerStopHint => "Press Enter or Ctrl-C to stop the timer.".to_string(),
            Message::TimerStopped(duration) => format!("Timer stopped after {}", duration),
            Message::SessionSaved(id) => format!("Session saved as record #{}", id),
            Message::TimerSaveFailed(error) => format!("Failed to save the session, the timer keeps running: {}", error),

            // === LOG MESSAGES ===
            Message::HistoryHeader => "History:".to_string(),
            Message::NoLogsFound => "No recorded sessions yet.".to_string(),
            Message::LogDeleted(id) => format!("Record #{} deleted.", id),
            Message::LogNotFound(id) => format!("Record #{} does not exist, nothing to delete.", id),
            Message::ConfirmDeleteLog(summary) => format!("Delete this record? {}", summary),

            // === TASK MESSAGES ===
            Message::TaskListHeader => "Task history:".to_string(),
            Message::NoTasksFound => "No remembered tasks.".to_string(),
            Message::TaskDeleted(name) => format!("Task '{}' removed from history.", name),
            Message::TaskNotFound(name) => format!("Task '{}' is not in the history.", name),
            Message::ConfirmDeleteTask(name) => format!("Remove '{}' from the task history?", name),
            Message::TaskDefaultsSeeded(count) => format!("Added {} default task names", count),
            Message::TaskSeedingFailed(error) => format!("Could not add default task names: {}", error),

            // === CATEGORY MESSAGES ===
            Message::CategoryListHeader => "Categories:".to_string(),
            Message::NoCategoriesFound => "No categories defined.".to_string(),
            Message::CategoryAdded(value) => format!("Category '{}' added.", value),
            Message::CategoryEmpty => "Category name is empty, nothing added.".to_string(),
            Message::CategoryAlreadyExists(value) => format!("Category '{}' already exists.", value),
            Message::CategoryRemoved(value) => format!("Category '{}' removed.", value),
            Message::CategoryNotFound(value) => format!("Category '{}' does not exist.", value),
            Message::ConfirmDeleteCategory(value) => format!("Delete category '{}'?", value),
            Message::CategoriesMalformed(error) => format!("Stored category list is unreadable, using an empty list: {}", error),

            // === EXPORT MESSAGES ===
            Message::ExportingData(format) => format!("Exporting data in {} format...", format),
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),
            Message::UnknownCsvColumn(label) => format!("Unknown CSV column '{}', it will be left empty", label),

            // === SETTINGS AND CONFIGURATION MESSAGES ===
            Message::SettingsMalformed(error) => format!("Settings file is unreadable, using empty settings until it is fixed: {}", error),
            Message::ShowCategory(show) => format!("Show category selector: {}", if *show { "on" } else { "off" }),
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigRemoved => "Configuration removed, defaults will be used".to_string(),
            Message::ConfigPath(path) => format!("Data directory: {}", path),

            // === PROMPTS ===
            Message::PromptSelectTask => "Task".to_string(),
            Message::PromptTaskName => "Task name".to_string(),
            Message::PromptSelectCategory => "Category".to_string(),
            Message::PromptCsvColumns => "CSV column order (comma separated)".to_string(),
            Message::PromptHistoryOrder => "History order".to_string(),
            Message::NewTaskOption => "(type a new task)".to_string(),

            // === DATABASE MESSAGES ===
            Message::DbOpenFailed(error) => format!("Failed to open the database: {}", error),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),

            // === GENERIC ===
            Message::OperationCancelled => "Operation cancelled.".to_string(),
        };
        write!(f, "{}", text)
    }
}
