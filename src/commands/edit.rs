use super::{open_screen, row_index};
use crate::libs::editor::{EditScreen, TaskDraft};
use crate::libs::messages::Message;
use crate::libs::view::TerminalView;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Row number as shown by `list`
    row: usize,
    /// Rows are numbered within this category search
    #[arg(short, long)]
    search: Option<String>,
    /// New title; without any field flags the task is edited interactively
    #[arg(short, long)]
    title: Option<String>,
    /// New category
    #[arg(short, long)]
    category: Option<String>,
    /// New date as "YYYY-MM-DD HH:MM"
    #[arg(short, long)]
    date: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut screen = open_screen(TerminalView::muted(), args.search.as_deref())?;

    let index = row_index(&screen, args.row)?;
    let Some(target) = screen.select_row(index) else {
        return Ok(());
    };

    let draft = TaskDraft {
        title: args.title,
        category: args.category,
        date: args.date,
    };
    let task = EditScreen::present(target, &draft, screen.store_mut())?;
    msg_success!(Message::TaskUpdated(task.title));

    screen.view_mut().set_muted(false);
    screen.will_appear()?;

    Ok(())
}
