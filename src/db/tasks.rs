use super::db::Db;
use crate::libs::error::StoreError;
use crate::libs::store::{RecordStore, TaskWriter};
use crate::libs::task::{Task, TaskQuery};
use chrono::DateTime;
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};

const SELECT_TASKS: &str = "SELECT id, title, category, date FROM tasks";
// substr keeps the match case-sensitive and free of LIKE wildcards
const WHERE_CATEGORY_PREFIX: &str = "WHERE substr(category, 1, length(?1)) = ?1";
const ORDER_DESC: &str = "ORDER BY date DESC, id DESC";
const ORDER_ASC: &str = "ORDER BY date ASC, id ASC";
const SELECT_TASK_BY_ID: &str = "SELECT id, title, category, date FROM tasks WHERE id = ?1";
const SELECT_MAX_ID: &str = "SELECT MAX(id) FROM tasks";
const UPSERT_TASK: &str = "INSERT INTO tasks (id, title, category, date) VALUES (?1, ?2, ?3, ?4)
    ON CONFLICT(id) DO UPDATE SET title = excluded.title, category = excluded.category, date = excluded.date";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// SQLite-backed task store.
pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Self, StoreError> {
        Ok(Self::with_db(Db::new()?))
    }

    pub fn with_db(db: Db) -> Self {
        Tasks { conn: db.conn }
    }

    fn map_row(row: &Row) -> rusqlite::Result<Task> {
        let millis: i64 = row.get(3)?;
        let date = DateTime::from_timestamp_millis(millis).ok_or(rusqlite::Error::IntegralValueOutOfRange(3, millis))?;

        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            category: row.get(2)?,
            date,
        })
    }
}

impl RecordStore for Tasks {
    fn query(&self, query: &TaskQuery) -> Result<Vec<Task>, StoreError> {
        let order = if query.descending { ORDER_DESC } else { ORDER_ASC };

        let tasks = match &query.category_prefix {
            Some(prefix) => {
                let mut stmt = self.conn.prepare(&format!("{} {} {}", SELECT_TASKS, WHERE_CATEGORY_PREFIX, order))?;
                let rows = stmt.query_map(params![prefix], Self::map_row)?;
                let tasks = rows.collect::<Result<Vec<_>, _>>()?;
                tasks
            }
            None => {
                let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TASKS, order))?;
                let rows = stmt.query_map([], Self::map_row)?;
                let tasks = rows.collect::<Result<Vec<_>, _>>()?;
                tasks
            }
        };

        tracing::trace!(count = tasks.len(), filter = ?query.category_prefix, "queried tasks");
        Ok(tasks)
    }

    fn max_id(&self) -> Result<Option<i64>, StoreError> {
        let max: Option<i64> = self.conn.query_row(SELECT_MAX_ID, [], |row| row.get(0))?;
        Ok(max)
    }

    fn find(&self, id: i64) -> Result<Option<Task>, StoreError> {
        self.conn
            .query_row(SELECT_TASK_BY_ID, params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    fn transaction<T, F>(&mut self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut dyn TaskWriter) -> Result<T, StoreError>,
    {
        let tx = self.conn.transaction().map_err(|e| StoreError::TransactionFailed(e.to_string()))?;
        let mut writer = SqliteWriter { tx: &tx };
        // Dropping `tx` without commit rolls back
        let value = f(&mut writer)?;
        tx.commit().map_err(|e| StoreError::TransactionFailed(e.to_string()))?;

        Ok(value)
    }
}

struct SqliteWriter<'a> {
    tx: &'a Transaction<'a>,
}

impl TaskWriter for SqliteWriter<'_> {
    fn delete(&mut self, id: i64) -> Result<bool, StoreError> {
        let affected = self
            .tx
            .execute(DELETE_TASK, params![id])
            .map_err(|e| StoreError::TransactionFailed(e.to_string()))?;
        Ok(affected > 0)
    }

    fn upsert(&mut self, task: &Task) -> Result<(), StoreError> {
        self.tx
            .execute(UPSERT_TASK, params![task.id, task.title, task.category, task.date.timestamp_millis()])
            .map_err(|e| StoreError::TransactionFailed(e.to_string()))?;
        Ok(())
    }
}
