//! Configuration for the telebill application.
//!
//! One JSON file in the platform data directory, holding the path of the
//! SQLite backing store. A missing file means defaults: the store lives
//! next to the config under the same data directory. `telebill init` runs
//! the interactive setup; a `--db` flag on any invocation overrides the
//! configured path without touching the file.

use crate::db::db::DB_FILE_NAME;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Backing store location; `None` falls back to the data directory.
    pub db_path: Option<PathBuf>,
}

impl Config {
    /// Reads the config file, or returns defaults when it does not exist.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let file = File::open(&config_path)?;
        let config: Config = serde_json::from_reader(file)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        fs::write(&config_path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Interactive setup: prompts for the backing store path, starting from
    /// the currently effective value.
    pub fn init() -> Result<Self> {
        let current = Config::read()?;
        let default_db = current.resolve_db_path()?;

        let entered: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Database file path")
            .default(default_db.display().to_string())
            .interact_text()?;

        Ok(Config {
            db_path: Some(PathBuf::from(entered)),
        })
    }

    /// The effective backing store path: the configured one, or the
    /// default file in the data directory.
    pub fn resolve_db_path(&self) -> Result<PathBuf> {
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => Ok(DataStorage::new().get_path(DB_FILE_NAME)?),
        }
    }
}
