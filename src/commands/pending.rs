use crate::db::notifications::Notifications;
use crate::libs::messages::Message;
use crate::libs::store::NotificationService;
use crate::libs::view::TerminalView;
use crate::msg_print;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let pending = Notifications::new()?.list_pending()?;

    msg_print!(Message::PendingRemindersHeader, true);
    TerminalView::pending(&pending);

    Ok(())
}
