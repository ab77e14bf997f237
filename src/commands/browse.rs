use super::{open_screen, stay_on_screen, Screen};
use crate::libs::editor::{parse_date, EditScreen, TaskDraft};
use crate::libs::messages::Message;
use crate::libs::store::{NotificationRequest, NotificationService};
use crate::libs::task::{format_date, EditTarget};
use crate::libs::view::TerminalView;
use crate::{msg_error, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Search,
    CancelSearch,
    NewTask,
    EditTask,
    DeleteTask,
    Remind,
    Quit,
}

impl Action {
    fn label(self) -> Message {
        match self {
            Action::Search => Message::ActionSearch,
            Action::CancelSearch => Message::ActionCancelSearch,
            Action::NewTask => Message::ActionNewTask,
            Action::EditTask => Message::ActionEditTask,
            Action::DeleteTask => Message::ActionDeleteTask,
            Action::Remind => Message::ActionRemind,
            Action::Quit => Message::ActionQuit,
        }
    }

    /// Actions that make sense for the current state of the screen.
    fn available(screen: &Screen) -> Vec<Action> {
        let mut actions = vec![Action::Search];
        if screen.active_filter().is_some() {
            actions.push(Action::CancelSearch);
        }
        actions.push(Action::NewTask);
        if screen.row_count() > 0 {
            actions.extend([Action::EditTask, Action::DeleteTask, Action::Remind]);
        }
        actions.push(Action::Quit);
        actions
    }
}

pub fn cmd() -> Result<()> {
    let mut screen = open_screen(TerminalView::new(), None)?;

    loop {
        let actions = Action::available(&screen);
        let labels: Vec<String> = actions.iter().map(|a| a.label().to_string()).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectListAction.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[selection] {
            Action::Search => {
                let prefix: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptSearchCategory.to_string())
                    .allow_empty(true)
                    .interact_text()?;
                stay_on_screen(screen.search(&prefix));
            }
            Action::CancelSearch => {
                stay_on_screen(screen.cancel_search());
            }
            Action::NewTask => {
                if let Some(target) = stay_on_screen(screen.prepare_new_task()) {
                    edit(&mut screen, target);
                }
            }
            Action::EditTask => {
                if let Some(target) = pick_row(&screen)?.and_then(|index| screen.select_row(index)) {
                    edit(&mut screen, target);
                }
            }
            Action::DeleteTask => {
                if let Some(index) = pick_row(&screen)? {
                    delete(&mut screen, index)?;
                }
            }
            Action::Remind => {
                if let Some(target) = pick_row(&screen)?.and_then(|index| screen.select_row(index)) {
                    remind(&mut screen, target)?;
                }
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

fn pick_row(screen: &Screen) -> Result<Option<usize>> {
    let items: Vec<String> = screen
        .rows()
        .into_iter()
        .map(|row| format!("{}  {}", row.date, row.title))
        .collect();

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTaskRow.to_string())
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(index)
}

fn edit(screen: &mut Screen, target: EditTarget) {
    let is_new = target.is_new();
    match EditScreen::present(target, &TaskDraft::default(), screen.store_mut()) {
        Ok(task) if is_new => msg_success!(Message::TaskCreated(task.title)),
        Ok(task) => msg_success!(Message::TaskUpdated(task.title)),
        Err(e) => msg_error!(e),
    }

    // Back on the list: never trust what the edit screen returned
    stay_on_screen(screen.will_appear());
}

fn delete(screen: &mut Screen, index: usize) -> Result<()> {
    let title = screen.row_content(index).map(|row| row.title).unwrap_or_default();
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(title).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        if let Err(e) = screen.delete_row(index) {
            msg_error!(Message::TaskDeleteFailed(e.to_string()));
        }
    }
    Ok(())
}

fn remind(screen: &mut Screen, target: EditTarget) -> Result<()> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptReminderDate.to_string())
        .validate_with(|input: &String| parse_date(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;
    let fire_at = parse_date(&input)?;

    let task = target.into_task();
    match screen.notifications_mut().schedule(&NotificationRequest::for_task(&task, fire_at)) {
        Ok(()) => msg_success!(Message::ReminderScheduled(task.title, format_date(&fire_at))),
        Err(e) => msg_error!(Message::ReminderScheduleFailed(e.to_string())),
    }
    Ok(())
}
