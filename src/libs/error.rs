use thiserror::Error;

/// Failures of the task store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Task store is unavailable: {0}")]
    Unavailable(String),

    #[error("Task query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("No task id left after {0}")]
    IdsExhausted(i64),
}

/// Failures of the reminder service. The list screen never surfaces these.
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Failed to cancel reminders {ids:?}: {reason}")]
    CancelFailed { ids: Vec<String>, reason: String },

    #[error("Failed to list pending reminders: {0}")]
    ListFailed(String),

    #[error("Failed to schedule reminder {id}: {reason}")]
    ScheduleFailed { id: String, reason: String },
}

#[derive(Debug, Error)]
pub enum PresenterError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Row {index} is out of range ({count} rows)")]
    IndexOutOfRange { index: usize, count: usize },
}
