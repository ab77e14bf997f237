#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskRowDeleted(usize),    // 1-based row
    TaskDeleteFailed(String), // error
    NoTasksFound,
    TasksHeader,
    SearchResultsHeader(String), // category prefix
    SearchActiveHint,
    RowNotFound(usize, usize), // row, row count
    ConfirmDeleteTask(String),
    EditingTask(String),
    CreatingTask(i64),
    PromptTaskTitle,
    PromptTaskCategory,
    PromptTaskDate,
    InvalidDate(String),

    // === BROWSE MESSAGES ===
    SelectListAction,
    SelectTaskRow,
    PromptSearchCategory,
    ActionSearch,
    ActionCancelSearch,
    ActionNewTask,
    ActionEditTask,
    ActionDeleteTask,
    ActionRemind,
    ActionQuit,

    // === REMINDER MESSAGES ===
    ReminderScheduled(String, String), // title, date
    ReminderScheduleFailed(String),
    NoPendingReminders,
    PendingRemindersHeader,
    PromptReminderDate,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleStorage,
    ConfigModuleList,
    PromptDatabasePath,
    PromptRowAnimation,
    PromptLogPendingOnDelete,

    // === DATABASE MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,

    // === GENERIC MESSAGES ===
    OperationCancelled,
}
