use crate::db::tasks::Tasks;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::libs::task::TaskQuery;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,
    /// Output file (defaults to a timestamped name in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Only export tasks whose category starts with this text
    #[arg(short, long)]
    search: Option<String>,
    /// Write the oldest task first
    #[arg(long)]
    oldest_first: bool,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let mut query = match &args.search {
        Some(prefix) => TaskQuery::category(prefix),
        None => TaskQuery::all(),
    };
    if args.oldest_first {
        query = query.ascending();
    }

    let exporter = Exporter::new(args.format, args.output);
    exporter.export(&Tasks::new()?, &query)?;
    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));

    Ok(())
}
