//! The task list screen.
//!
//! [`TaskListPresenter`] keeps the visible tasks in sync with the store and
//! drives a [`TaskListView`]. The visible list is never patched from outside:
//! every load, search, cancel and re-appear re-runs the store query, and the
//! only in-place edit is removing a row after a successful delete.
//!
//! ```rust,no_run
//! use taskapp::db::{notifications::Notifications, tasks::Tasks};
//! use taskapp::libs::presenter::TaskListPresenter;
//! use taskapp::libs::view::TerminalView;
//!
//! let mut presenter = TaskListPresenter::new(Tasks::new()?, Notifications::new()?, TerminalView::new());
//! presenter.search("work")?;
//! if presenter.row_count() > 0 {
//!     presenter.delete_row(0)?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::config::ListConfig;
use super::error::{PresenterError, StoreError};
use super::store::{NotificationService, RecordStore};
use super::task::{EditTarget, Task, TaskQuery, FIRST_TASK_ID};
use super::view::{RowContent, TaskListView};
use chrono::Utc;

pub struct TaskListPresenter<S, N, V> {
    store: S,
    notifications: N,
    view: V,
    config: ListConfig,
    visible_tasks: Vec<Task>,
    filter: Option<String>,
}

impl<S, N, V> TaskListPresenter<S, N, V>
where
    S: RecordStore,
    N: NotificationService,
    V: TaskListView,
{
    pub fn new(store: S, notifications: N, view: V) -> Self {
        TaskListPresenter {
            store,
            notifications,
            view,
            config: ListConfig::default(),
            visible_tasks: Vec::new(),
            filter: None,
        }
    }

    pub fn with_config(mut self, config: ListConfig) -> Self {
        self.config = config;
        self
    }

    /// Shows every task, newest first, and drops any active search.
    pub fn load_all(&mut self) -> Result<(), StoreError> {
        self.reload(None)
    }

    /// Shows the tasks whose category starts with `category_prefix`.
    pub fn search(&mut self, category_prefix: &str) -> Result<(), StoreError> {
        self.reload(Some(category_prefix.to_string()))
    }

    pub fn cancel_search(&mut self) -> Result<(), StoreError> {
        self.load_all()
    }

    /// Re-derives the rows before the screen is shown again, keeping the active search.
    pub fn will_appear(&mut self) -> Result<(), StoreError> {
        self.reload(self.filter.clone())
    }

    /// Queries with `filter` and only then switches the screen over to it.
    /// On failure rows, filter and the search affordance stay as they were.
    fn reload(&mut self, filter: Option<String>) -> Result<(), StoreError> {
        let query = match &filter {
            Some(prefix) => TaskQuery::category(prefix),
            None => TaskQuery::all(),
        };
        let tasks = self.store.query(&query)?;

        self.visible_tasks = tasks;
        self.filter = filter;
        tracing::debug!(rows = self.visible_tasks.len(), filter = ?self.filter, "task list reloaded");

        self.view.set_search_active(self.filter.is_some());
        let rows = self.rows();
        self.view.show_rows(&rows);
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.visible_tasks.len()
    }

    pub fn row_content(&self, index: usize) -> Option<RowContent> {
        self.visible_tasks.get(index).map(|task| RowContent {
            title: task.title.clone(),
            date: task.formatted_date(),
        })
    }

    pub fn rows(&self) -> Vec<RowContent> {
        (0..self.row_count()).filter_map(|index| self.row_content(index)).collect()
    }

    pub fn visible_tasks(&self) -> &[Task] {
        &self.visible_tasks
    }

    pub fn active_filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Hands the task behind a row to the edit screen.
    pub fn select_row(&self, index: usize) -> Option<EditTarget> {
        self.visible_tasks.get(index).cloned().map(EditTarget::Existing)
    }

    /// A fresh, unsaved task stamped with the current time and the next free id.
    pub fn prepare_new_task(&self) -> Result<EditTarget, StoreError> {
        let id = match self.store.max_id()? {
            Some(max) => max.checked_add(1).ok_or(StoreError::IdsExhausted(max))?,
            None => FIRST_TASK_ID,
        };

        Ok(EditTarget::New(Task::new(id, "", "", Utc::now())))
    }

    /// Deletes the task behind a row together with its pending reminder.
    ///
    /// The row only leaves the list once the store has committed the delete.
    /// A task that is already gone from the store counts as deleted.
    pub fn delete_row(&mut self, index: usize) -> Result<Task, PresenterError> {
        let task = match self.visible_tasks.get(index) {
            Some(task) => task.clone(),
            None => {
                return Err(PresenterError::IndexOutOfRange {
                    index,
                    count: self.row_count(),
                })
            }
        };

        if let Err(e) = self.notifications.cancel_pending(&[task.notification_id()]) {
            tracing::warn!(task_id = task.id, error = %e, "could not cancel reminder");
        }

        let existed = self.store.transaction(|writer| writer.delete(task.id))?;
        if !existed {
            tracing::debug!(task_id = task.id, "task was already gone from the store");
        }

        self.visible_tasks.remove(index);
        self.view.remove_row(index, self.config.animation);

        if self.config.log_pending_on_delete {
            self.log_pending();
        }

        Ok(task)
    }

    fn log_pending(&self) {
        match self.notifications.list_pending() {
            Ok(pending) => {
                for notification in pending {
                    tracing::debug!(
                        id = %notification.id,
                        title = %notification.title,
                        fire_at = %notification.fire_at,
                        "pending reminder"
                    );
                }
            }
            Err(e) => tracing::debug!(error = %e, "could not list pending reminders"),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn notifications_mut(&mut self) -> &mut N {
        &mut self.notifications
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
