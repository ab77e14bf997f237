use super::{open_screen, row_index};
use crate::libs::error::PresenterError;
use crate::libs::messages::Message;
use crate::libs::view::TerminalView;
use crate::{msg_bail_anyhow, msg_info};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Row number as shown by `list`
    row: usize,
    /// Rows are numbered within this category search
    #[arg(short, long)]
    search: Option<String>,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut screen = open_screen(TerminalView::muted(), args.search.as_deref())?;

    let index = row_index(&screen, args.row)?;

    if !args.yes {
        let title = screen.row_content(index).map(|row| row.title).unwrap_or_default();
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(title).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    match screen.delete_row(index) {
        Ok(_) => Ok(()),
        Err(PresenterError::Store(e)) => msg_bail_anyhow!(Message::TaskDeleteFailed(e.to_string())),
        Err(e) => Err(e.into()),
    }
}
