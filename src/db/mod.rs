//! Database layer for the taskapp application.
//!
//! SQLite persistence for tasks and their pending reminders. Opening a
//! database applies any pending schema migrations.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskapp::db::{db::Db, tasks::Tasks};
//! use taskapp::libs::store::RecordStore;
//! use taskapp::libs::task::TaskQuery;
//!
//! let tasks = Tasks::with_db(Db::open("taskapp.db")?);
//! let newest_first = tasks.query(&TaskQuery::all())?;
//! # Ok::<(), taskapp::libs::error::StoreError>(())
//! ```

/// Connection management and initialization.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Pending reminders keyed by task id.
pub mod notifications;

/// The task table behind the list screen.
pub mod tasks;
