//! Configuration management for the taskapp application.
//!
//! Settings live in `config.json` inside the platform data directory
//! resolved by [`DataStorage`]. A missing file means defaults; the `init`
//! command runs an interactive wizard and saves the result.
//!
//! ```rust,no_run
//! use taskapp::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.list.log_pending_on_delete = false;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use super::view::RowAnimation;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Where task data is kept.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StorageConfig {
    /// Overrides the database file location. `None` uses `taskapp.db` in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
}

/// Behaviour of the list screen.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ListConfig {
    /// Animation hint sent to the view when a row is deleted.
    #[serde(default)]
    pub animation: RowAnimation,

    /// Log every remaining pending reminder after a delete (debug output only).
    #[serde(default = "default_log_pending")]
    pub log_pending_on_delete: bool,
}

fn default_log_pending() -> bool {
    true
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            animation: RowAnimation::default(),
            log_pending_on_delete: default_log_pending(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub list: ListConfig,
}

impl Config {
    /// Reads the user's configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        Self::read_from(Self::path()?)
    }

    pub fn read_from(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(Self::path()?)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Interactive setup wizard, pre-filled with the current settings.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        msg_print!(Message::ConfigModuleStorage);
        let current_database = config
            .storage
            .database
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let database: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(current_database)
            .allow_empty(true)
            .interact_text()?;
        config.storage.database = if database.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(database.trim()))
        };

        msg_print!(Message::ConfigModuleList);
        let animations = [RowAnimation::Fade, RowAnimation::None];
        let labels: Vec<String> = animations.iter().map(|a| a.to_string()).collect();
        let current = animations.iter().position(|a| *a == config.list.animation).unwrap_or(0);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptRowAnimation.to_string())
            .items(&labels)
            .default(current)
            .interact()?;
        config.list.animation = animations[selection];

        config.list.log_pending_on_delete = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptLogPendingOnDelete.to_string())
            .default(config.list.log_pending_on_delete)
            .interact()?;

        Ok(config)
    }
}
