//! Seams between the task list and its collaborators.
//!
//! The presenter only talks to storage and reminders through these traits,
//! so the SQLite implementations in [`crate::db`] can be swapped for
//! in-memory fakes.

use super::error::{NotificationError, StoreError};
use super::task::{Task, TaskQuery};
use chrono::{DateTime, Utc};

/// Write access available inside a store transaction.
pub trait TaskWriter {
    /// Removes the task with `id`. Returns `false` when no such task exists.
    fn delete(&mut self, id: i64) -> Result<bool, StoreError>;

    /// Inserts the task or replaces the stored task with the same id.
    fn upsert(&mut self, task: &Task) -> Result<(), StoreError>;
}

pub trait RecordStore {
    fn query(&self, query: &TaskQuery) -> Result<Vec<Task>, StoreError>;

    fn max_id(&self) -> Result<Option<i64>, StoreError>;

    fn find(&self, id: i64) -> Result<Option<Task>, StoreError>;

    /// Runs `f` atomically. Nothing `f` wrote is kept when it returns an error.
    fn transaction<T, F>(&mut self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut dyn TaskWriter) -> Result<T, StoreError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingNotification {
    pub id: String,
    pub task_id: i64,
    pub title: String,
    pub body: String,
    pub fire_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRequest {
    pub id: String,
    pub task_id: i64,
    pub title: String,
    pub body: String,
    pub fire_at: DateTime<Utc>,
}

impl NotificationRequest {
    /// A reminder for `task`, keyed by the task id.
    pub fn for_task(task: &Task, fire_at: DateTime<Utc>) -> Self {
        NotificationRequest {
            id: task.notification_id(),
            task_id: task.id,
            title: task.title.clone(),
            body: task.category.clone(),
            fire_at,
        }
    }
}

pub trait NotificationService {
    /// Cancels pending reminders by identifier. Unknown identifiers are ignored.
    fn cancel_pending(&mut self, ids: &[String]) -> Result<(), NotificationError>;

    fn list_pending(&self) -> Result<Vec<PendingNotification>, NotificationError>;

    /// Schedules a reminder, replacing any pending one with the same id.
    fn schedule(&mut self, request: &NotificationRequest) -> Result<(), NotificationError>;
}
