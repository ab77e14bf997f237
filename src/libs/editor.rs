//! The edit screen reached from the list.
//!
//! It receives exactly one [`EditTarget`], fills in the fields either from
//! command-line values or from prompts, and saves the task in a store
//! transaction. The list re-reads the store afterwards instead of trusting
//! what is returned here.

use super::error::StoreError;
use super::messages::Message;
use super::store::RecordStore;
use super::task::{EditTarget, Task, DATE_FORMAT};
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use dialoguer::{theme::ColorfulTheme, Input};

/// Field values supplied up front. `None` keeps the task's current value.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

impl TaskDraft {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.category.is_none() && self.date.is_none()
    }

    /// Applies the draft to `task` without prompting.
    pub fn apply(&self, mut task: Task) -> Result<Task> {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(category) = &self.category {
            task.category = category.clone();
        }
        if let Some(date) = &self.date {
            task.date = parse_date(date)?;
        }
        Ok(task)
    }
}

/// Parses a `YYYY-MM-DD HH:MM` local time.
pub fn parse_date(input: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| msg_error_anyhow!(Message::InvalidDate(input.to_string())))?;
    // Ambiguous wall-clock times resolve to the earlier instant
    let local = Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| msg_error_anyhow!(Message::InvalidDate(input.to_string())))?;

    Ok(local.with_timezone(&Utc))
}

pub struct EditScreen;

impl EditScreen {
    /// Edits the target and saves it. Prompts only when `draft` is empty.
    pub fn present<S: RecordStore>(target: EditTarget, draft: &TaskDraft, store: &mut S) -> Result<Task> {
        let edited = if draft.is_empty() {
            Self::prompt(&target)?
        } else {
            draft.apply(target.task().clone())?
        };

        let target = match target {
            EditTarget::Existing(_) => EditTarget::Existing(edited),
            EditTarget::New(_) => EditTarget::New(edited),
        };
        Ok(Self::save(store, &target)?)
    }

    pub fn save<S: RecordStore>(store: &mut S, target: &EditTarget) -> Result<Task, StoreError> {
        let task = target.task();
        store.transaction(|writer| writer.upsert(task))?;
        tracing::debug!(task_id = task.id, new = target.is_new(), "task saved");
        Ok(task.clone())
    }

    fn prompt(target: &EditTarget) -> Result<Task> {
        let mut task = target.task().clone();

        match target {
            EditTarget::Existing(existing) => msg_print!(Message::EditingTask(existing.title.clone()), true),
            EditTarget::New(new) => msg_print!(Message::CreatingTask(new.id), true),
        }

        task.title = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .default(task.title.clone())
            .allow_empty(true)
            .interact_text()?;

        task.category = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskCategory.to_string())
            .default(task.category.clone())
            .allow_empty(true)
            .interact_text()?;

        let date: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDate.to_string())
            .default(task.formatted_date())
            .validate_with(|input: &String| parse_date(input).map(|_| ()).map_err(|e| e.to_string()))
            .interact_text()?;
        task.date = parse_date(&date)?;

        Ok(task)
    }
}
