//! Core library modules for the taskapp application.
//!
//! - **Model**: [`task`] and the collaborator traits in [`store`]
//! - **Screen**: [`presenter`] drives a [`view::TaskListView`]; [`editor`] is the edit screen
//! - **Infrastructure**: configuration, data directory, messages, errors, export
//!
//! ```rust,no_run
//! use taskapp::db::{notifications::Notifications, tasks::Tasks};
//! use taskapp::libs::presenter::TaskListPresenter;
//! use taskapp::libs::view::TerminalView;
//!
//! let mut presenter = TaskListPresenter::new(Tasks::new()?, Notifications::new()?, TerminalView::new());
//! presenter.load_all()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod editor;
pub mod error;
pub mod export;
pub mod messages;
pub mod presenter;
pub mod store;
pub mod task;
pub mod view;
