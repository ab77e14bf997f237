use chrono::{DateTime, Local, Utc};

/// Display pattern for task dates, independent of the user's locale.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Identifier given to the first task of an empty store.
pub const FIRST_TASK_ID: i64 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub date: DateTime<Utc>,
}

impl Task {
    pub fn new(id: i64, title: &str, category: &str, date: DateTime<Utc>) -> Self {
        Task {
            id,
            title: title.to_string(),
            category: category.to_string(),
            date,
        }
    }

    /// Date rendered for a list row in local time.
    pub fn formatted_date(&self) -> String {
        format_date(&self.date)
    }

    /// Identifier used for reminders attached to this task.
    pub fn notification_id(&self) -> String {
        self.id.to_string()
    }
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format(DATE_FORMAT).to_string()
}

/// Selection and ordering of tasks. Tasks are always ordered by date,
/// ties broken by id in the same direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskQuery {
    pub category_prefix: Option<String>,
    pub descending: bool,
}

impl TaskQuery {
    pub fn all() -> Self {
        TaskQuery {
            category_prefix: None,
            descending: true,
        }
    }

    pub fn category(prefix: &str) -> Self {
        TaskQuery {
            category_prefix: Some(prefix.to_string()),
            descending: true,
        }
    }

    pub fn ascending(mut self) -> Self {
        self.descending = false;
        self
    }

    /// Case-sensitive prefix match on the category; no prefix matches everything.
    pub fn matches(&self, task: &Task) -> bool {
        match &self.category_prefix {
            Some(prefix) => task.category.starts_with(prefix.as_str()),
            None => true,
        }
    }
}

/// Hand-off to the edit screen: exactly one of an existing or a fresh task.
#[derive(Debug, Clone, PartialEq)]
pub enum EditTarget {
    Existing(Task),
    New(Task),
}

impl EditTarget {
    pub fn task(&self) -> &Task {
        match self {
            EditTarget::Existing(task) | EditTarget::New(task) => task,
        }
    }

    pub fn into_task(self) -> Task {
        match self {
            EditTarget::Existing(task) | EditTarget::New(task) => task,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, EditTarget::New(_))
    }
}
