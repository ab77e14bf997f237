use super::open_screen;
use crate::libs::messages::Message;
use crate::libs::view::TerminalView;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show tasks whose category starts with this text
    #[arg(short, long)]
    search: Option<String>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    match &args.search {
        Some(prefix) => msg_print!(Message::SearchResultsHeader(prefix.clone()), true),
        None => msg_print!(Message::TasksHeader, true),
    }
    open_screen(TerminalView::new(), args.search.as_deref())?;

    Ok(())
}
