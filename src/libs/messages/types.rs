#[derive(Debug, Clone)]
pub enum Message {
    // === TIMER MESSAGES ===
    TimerStarted { task: String, category: String },
    TimerStopHint,
    TimerStopped(String), // duration
    SessionSaved(i64),    // id
    TimerSaveFailed(String),

    // === LOG MESSAGES ===
    HistoryHeader,
    NoLogsFound,
    LogDeleted(i64),
    LogNotFound(i64),
    ConfirmDeleteLog(String), // summary of the record

    // === TASK MESSAGES ===
    TaskListHeader,
    NoTasksFound,
    TaskDeleted(String),
    TaskNotFound(String),
    ConfirmDeleteTask(String),
    TaskDefaultsSeeded(usize),
    TaskSeedingFailed(String),

    // === CATEGORY MESSAGES ===
    CategoryListHeader,
    NoCategoriesFound,
    CategoryAdded(String),
    CategoryEmpty,
    CategoryAlreadyExists(String),
    CategoryRemoved(String),
    CategoryNotFound(String),
    ConfirmDeleteCategory(String),
    CategoriesMalformed(String),

    // === EXPORT MESSAGES ===
    ExportingData(String), // format
    ExportCompleted(String),
    UnknownCsvColumn(String),

    // === SETTINGS AND CONFIGURATION MESSAGES ===
    SettingsMalformed(String),
    ShowCategory(bool),
    ConfigSaved,
    ConfigRemoved,
    ConfigPath(String),

    // === PROMPTS ===
    PromptSelectTask,
    PromptTaskName,
    PromptSelectCategory,
    PromptCsvColumns,
    PromptHistoryOrder,
    NewTaskOption,

    // === DATABASE MESSAGES ===
    DbOpenFailed(String),
    DatabaseUpToDate,
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,

    // === GENERIC ===
    OperationCancelled,
}
