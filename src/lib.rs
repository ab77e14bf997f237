//! # Taskapp - a single-screen to-do list
//!
//! Tasks live in a local SQLite database and are shown newest first.
//!
//! ## Features
//!
//! - **Task List**: sorted by date, filtered by category prefix
//! - **Delete**: removes the task and cancels its pending reminder
//! - **Reminders**: local reminders keyed by task id
//! - **Data Export**: CSV and JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskapp::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
