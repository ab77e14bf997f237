use super::open_screen;
use crate::libs::editor::{EditScreen, TaskDraft};
use crate::libs::messages::Message;
use crate::libs::view::TerminalView;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title; without any field flags the task is entered interactively
    #[arg(short, long)]
    title: Option<String>,
    /// Task category
    #[arg(short, long)]
    category: Option<String>,
    /// Task date as "YYYY-MM-DD HH:MM" (defaults to now)
    #[arg(short, long)]
    date: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let mut screen = open_screen(TerminalView::muted(), None)?;

    let draft = TaskDraft {
        title: args.title,
        category: args.category,
        date: args.date,
    };
    let target = screen.prepare_new_task()?;
    let task = EditScreen::present(target, &draft, screen.store_mut())?;
    msg_success!(Message::TaskCreated(task.title));

    screen.view_mut().set_muted(false);
    screen.will_appear()?;

    Ok(())
}
