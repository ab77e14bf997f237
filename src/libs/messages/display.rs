//! Human-readable text for every [`Message`].
//!
//! All user-facing wording lives here, so commands and views only ever
//! pass structured messages around.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskRowDeleted(row) => format!("Row {} deleted", row),
            Message::TaskDeleteFailed(error) => format!("Could not delete task, try again ({})", error),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::SearchResultsHeader(prefix) => format!("Tasks in categories starting with '{}':", prefix),
            Message::SearchActiveHint => "Search active. Cancel the search to see every task.".to_string(),
            Message::RowNotFound(row, count) => match count {
                0 => format!("Row {} not found: the list is empty.", row),
                _ => format!("Row {} not found. Choose a row between 1 and {}.", row, count),
            },
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::EditingTask(title) => format!("Editing task: {}", title),
            Message::CreatingTask(id) => format!("New task #{}", id),
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskCategory => "Category".to_string(),
            Message::PromptTaskDate => "Date (YYYY-MM-DD HH:MM)".to_string(),
            Message::InvalidDate(input) => format!("'{}' is not a date in YYYY-MM-DD HH:MM format", input),

            // === BROWSE MESSAGES ===
            Message::SelectListAction => "What next?".to_string(),
            Message::SelectTaskRow => "Select a task".to_string(),
            Message::PromptSearchCategory => "Category starts with".to_string(),
            Message::ActionSearch => "Search by category".to_string(),
            Message::ActionCancelSearch => "Cancel search".to_string(),
            Message::ActionNewTask => "New task".to_string(),
            Message::ActionEditTask => "Edit task".to_string(),
            Message::ActionDeleteTask => "Delete task".to_string(),
            Message::ActionRemind => "Set reminder".to_string(),
            Message::ActionQuit => "Quit".to_string(),

            // === REMINDER MESSAGES ===
            Message::ReminderScheduled(title, date) => format!("Reminder for '{}' set for {}", title, date),
            Message::ReminderScheduleFailed(error) => format!("Could not set reminder: {}", error),
            Message::NoPendingReminders => "No pending reminders.".to_string(),
            Message::PendingRemindersHeader => "Pending reminders:".to_string(),
            Message::PromptReminderDate => "Remind at (YYYY-MM-DD HH:MM)".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleStorage => "Storage".to_string(),
            Message::ConfigModuleList => "Task list".to_string(),
            Message::PromptDatabasePath => "Database file (empty for the default location)".to_string(),
            Message::PromptRowAnimation => "Row removal animation".to_string(),
            Message::PromptLogPendingOnDelete => "Log pending reminders after a delete?".to_string(),

            // === DATABASE MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
