pub mod add;
pub mod browse;
pub mod delete;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod pending;
pub mod remind;

use crate::db::{notifications::Notifications, tasks::Tasks};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::presenter::TaskListPresenter;
use crate::libs::store::{NotificationService, RecordStore};
use crate::libs::view::{TaskListView, TerminalView};
use crate::libs::error::StoreError;
use crate::{msg_bail_anyhow, msg_error};
use anyhow::Result;
use clap::{Parser, Subcommand};

/// The list screen as the commands use it.
pub type Screen = TaskListPresenter<Tasks, Notifications, TerminalView>;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Show tasks, newest first")]
    List(list::ListArgs),
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "Edit the task in a row of the list", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Delete the task in a row of the list and cancel its reminder", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Set a reminder for the task in a row of the list", arg_required_else_help = true)]
    Remind(remind::RemindArgs),
    #[command(about = "Show pending reminders")]
    Pending,
    #[command(about = "Export tasks to CSV or JSON")]
    Export(export::ExportArgs),
    #[command(about = "Browse, search and edit tasks interactively")]
    Browse,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::List(args) => list::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Remind(args) => remind::cmd(args),
            Commands::Pending => pending::cmd(),
            Commands::Export(args) => export::cmd(args),
            Commands::Browse => browse::cmd(),
        }
    }
}

/// Opens the list screen with the user's settings and shows the matching rows.
pub(crate) fn open_screen(view: TerminalView, search: Option<&str>) -> Result<Screen> {
    let config = Config::read()?;
    let mut screen = TaskListPresenter::new(Tasks::new()?, Notifications::new()?, view).with_config(config.list);

    match search {
        Some(prefix) => screen.search(prefix)?,
        None => screen.load_all()?,
    }

    Ok(screen)
}

/// Converts a 1-based row from the command line into a list index.
pub fn row_index<S, N, V>(screen: &TaskListPresenter<S, N, V>, row: usize) -> Result<usize>
where
    S: RecordStore,
    N: NotificationService,
    V: TaskListView,
{
    let count = screen.row_count();
    if row == 0 || row > count {
        msg_bail_anyhow!(Message::RowNotFound(row, count));
    }
    Ok(row - 1)
}

/// Shows a store failure as a message and keeps the caller on the current screen.
pub fn stay_on_screen<T>(result: Result<T, StoreError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(error = %e, "store operation failed");
            msg_error!(e);
            None
        }
    }
}
