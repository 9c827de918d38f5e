//! Application configuration.
//!
//! Stored as pretty-printed JSON in `config.json` inside the application data
//! directory. A missing file means defaults; keys missing from an existing
//! file also fall back to their defaults, so older files keep loading.
//!
//! ```json
//! {
//!   "csv_columns": "開始時間,終了時間,経過時間,分類,内容",
//!   "history_order": "desc",
//!   "database": null
//! }
//! ```
//!
//! `worktimer init` walks through the settings interactively.

use super::data_storage::DataStorage;
use super::error::Result;
use super::export::DEFAULT_CSV_COLUMNS;
use super::messages::Message;
use super::view::HistoryOrder;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Column order used by `export csv` when none is given.
    pub csv_columns: String,

    /// Default ordering of `log list`.
    pub history_order: HistoryOrder,

    /// Database file to use instead of the one in the data directory.
    pub database: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            csv_columns: DEFAULT_CSV_COLUMNS.to_string(),
            history_order: HistoryOrder::Desc,
            database: None,
        }
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup seeded with the current values.
    pub fn init() -> anyhow::Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        config.csv_columns = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCsvColumns.to_string())
            .default(config.csv_columns)
            .interact_text()?;

        let orders = [HistoryOrder::Desc, HistoryOrder::Asc];
        let labels = ["Newest first", "Oldest first"];
        let current = orders.iter().position(|o| *o == config.history_order).unwrap_or(0);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptHistoryOrder.to_string())
            .items(&labels)
            .default(current)
            .interact()?;
        config.history_order = orders[selection];

        Ok(config)
    }
}
