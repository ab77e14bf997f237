use super::db::Db;
use crate::libs::error::{NotificationError, StoreError};
use crate::libs::store::{NotificationRequest, NotificationService, PendingNotification};
use rusqlite::{params, params_from_iter, Connection};

const SELECT_PENDING: &str = "SELECT id, task_id, title, body, fire_at FROM notifications ORDER BY fire_at, id";
const UPSERT_NOTIFICATION: &str = "INSERT INTO notifications (id, task_id, title, body, fire_at) VALUES (?1, ?2, ?3, ?4, ?5)
    ON CONFLICT(id) DO UPDATE SET task_id = excluded.task_id, title = excluded.title, body = excluded.body, fire_at = excluded.fire_at";
const DELETE_NOTIFICATIONS: &str = "DELETE FROM notifications WHERE id IN";

/// Locally stored reminders, keyed by the id of the task they belong to.
pub struct Notifications {
    conn: Connection,
}

impl Notifications {
    pub fn new() -> Result<Self, StoreError> {
        Ok(Self::with_db(Db::new()?))
    }

    pub fn with_db(db: Db) -> Self {
        Notifications { conn: db.conn }
    }
}

impl NotificationService for Notifications {
    fn cancel_pending(&mut self, ids: &[String]) -> Result<(), NotificationError> {
        if ids.is_empty() {
            return Ok(());
        }

        let sql = format!("{} ({})", DELETE_NOTIFICATIONS, vec!["?"; ids.len()].join(", "));
        let cancelled = self
            .conn
            .execute(&sql, params_from_iter(ids.iter()))
            .map_err(|e| NotificationError::CancelFailed {
                ids: ids.to_vec(),
                reason: e.to_string(),
            })?;

        tracing::debug!(?ids, cancelled, "cancelled pending reminders");
        Ok(())
    }

    fn list_pending(&self) -> Result<Vec<PendingNotification>, NotificationError> {
        let list = || -> rusqlite::Result<Vec<PendingNotification>> {
            let mut stmt = self.conn.prepare(SELECT_PENDING)?;
            let rows = stmt.query_map([], |row| {
                Ok(PendingNotification {
                    id: row.get(0)?,
                    task_id: row.get(1)?,
                    title: row.get(2)?,
                    body: row.get(3)?,
                    fire_at: row.get(4)?,
                })
            })?;
            let pending = rows.collect::<Result<Vec<_>, _>>()?;
            Ok(pending)
        };

        list().map_err(|e| NotificationError::ListFailed(e.to_string()))
    }

    fn schedule(&mut self, request: &NotificationRequest) -> Result<(), NotificationError> {
        self.conn
            .execute(
                UPSERT_NOTIFICATION,
                params![request.id, request.task_id, request.title, request.body, request.fire_at],
            )
            .map_err(|e| NotificationError::ScheduleFailed {
                id: request.id.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!(id = %request.id, fire_at = %request.fire_at, "scheduled reminder");
        Ok(())
    }
}
