use super::messages::Message;
use super::store::PendingNotification;
use super::task::format_date;
use crate::{msg_info, msg_print, msg_success};
use prettytable::{row, Table};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What one list row shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowContent {
    pub title: String,
    pub date: String,
}

/// Hint for how a removed row should disappear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAnimation {
    #[default]
    Fade,
    None,
}

impl fmt::Display for RowAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowAnimation::Fade => write!(f, "fade"),
            RowAnimation::None => write!(f, "none"),
        }
    }
}

/// The surface the task list presenter draws on.
pub trait TaskListView {
    /// Replaces every row with `rows`.
    fn show_rows(&mut self, rows: &[RowContent]);

    /// Removes a single row without redrawing the others.
    fn remove_row(&mut self, index: usize, animation: RowAnimation);

    /// Shows or hides the "cancel search" affordance.
    fn set_search_active(&mut self, active: bool);
}

/// Renders the list as a table on stdout.
///
/// A muted view skips redraws, for one-shot commands that address a row
/// without showing the list first.
#[derive(Debug, Default)]
pub struct TerminalView {
    search_active: bool,
    muted: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn muted() -> Self {
        TerminalView {
            muted: true,
            ..Self::default()
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_search_active(&self) -> bool {
        self.search_active
    }

    pub fn pending(pending: &[PendingNotification]) {
        if pending.is_empty() {
            msg_info!(Message::NoPendingReminders);
            return;
        }

        let mut table = Table::new();
        table.add_row(row!["ID", "TASK", "TITLE", "FIRES AT"]);
        for notification in pending {
            table.add_row(row![
                notification.id,
                notification.task_id,
                notification.title,
                format_date(&notification.fire_at)
            ]);
        }
        table.printstd();
    }
}

impl TaskListView for TerminalView {
    fn show_rows(&mut self, rows: &[RowContent]) {
        if self.muted {
            return;
        }

        if self.search_active {
            msg_print!(Message::SearchActiveHint);
        }

        if rows.is_empty() {
            msg_info!(Message::NoTasksFound);
            return;
        }

        let mut table = Table::new();
        table.add_row(row!["#", "TITLE", "DATE"]);
        for (index, content) in rows.iter().enumerate() {
            table.add_row(row![index + 1, content.title, content.date]);
        }
        table.printstd();
    }

    fn remove_row(&mut self, index: usize, animation: RowAnimation) {
        tracing::trace!(index, %animation, "removing row");
        msg_success!(Message::TaskRowDeleted(index + 1));
    }

    fn set_search_active(&mut self, active: bool) {
        self.search_active = active;
    }
}
