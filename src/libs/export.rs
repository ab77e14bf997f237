//! Task export to CSV or JSON.
//!
//! ```rust,no_run
//! use taskapp::db::tasks::Tasks;
//! use taskapp::libs::export::{ExportFormat, Exporter};
//! use taskapp::libs::task::TaskQuery;
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(&Tasks::new()?, &TaskQuery::category("work"))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::store::RecordStore;
use super::task::{Task, TaskQuery};
use anyhow::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// One exported task, with the date already formatted the way the list shows it.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportTask {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub date: String,
}

impl From<&Task> for ExportTask {
    fn from(task: &Task) -> Self {
        ExportTask {
            id: task.id,
            title: task.title.clone(),
            category: task.category.clone(),
            date: task.formatted_date(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is named `taskapp_export_<timestamp>.<ext>`.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("taskapp_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the tasks selected by `query` and returns how many were exported.
    pub fn export<S: RecordStore>(&self, store: &S, query: &TaskQuery) -> Result<usize> {
        let tasks: Vec<ExportTask> = store.query(query)?.iter().map(ExportTask::from).collect();

        match self.format {
            ExportFormat::Csv => self.write_csv(&tasks)?,
            ExportFormat::Json => self.write_json(&tasks)?,
        }

        tracing::debug!(count = tasks.len(), path = %self.output_path.display(), "exported tasks");
        Ok(tasks.len())
    }

    fn write_csv(&self, tasks: &[ExportTask]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["ID", "Title", "Category", "Date"])?;

        for task in tasks {
            wtr.write_record([task.id.to_string(), task.title.clone(), task.category.clone(), task.date.clone()])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn write_json(&self, tasks: &[ExportTask]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}
