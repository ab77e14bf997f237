use super::{open_screen, row_index};
use crate::libs::editor::parse_date;
use crate::libs::messages::Message;
use crate::libs::store::{NotificationRequest, NotificationService};
use crate::libs::task::format_date;
use crate::libs::view::TerminalView;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RemindArgs {
    /// Row number as shown by `list`
    row: usize,
    /// When to remind, as "YYYY-MM-DD HH:MM"
    #[arg(short, long)]
    at: String,
    /// Rows are numbered within this category search
    #[arg(short, long)]
    search: Option<String>,
}

pub fn cmd(args: RemindArgs) -> Result<()> {
    let mut screen = open_screen(TerminalView::muted(), args.search.as_deref())?;

    let index = row_index(&screen, args.row)?;
    let Some(target) = screen.select_row(index) else {
        return Ok(());
    };
    let fire_at = parse_date(&args.at)?;

    let task = target.into_task();
    let request = NotificationRequest::for_task(&task, fire_at);
    if let Err(e) = screen.notifications_mut().schedule(&request) {
        msg_bail_anyhow!(Message::ReminderScheduleFailed(e.to_string()));
    }
    msg_success!(Message::ReminderScheduled(task.title, format_date(&fire_at)));

    Ok(())
}
