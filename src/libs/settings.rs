//! Small string key-value settings area persisted as one JSON file.
//!
//! Every read loads the file and every write rewrites it, so the file is
//! always the single source of truth and no state is cached between calls.
//! A missing file reads as empty. A file that exists but cannot be read or
//! decoded is reported through the log and reads as empty, but writes refuse
//! to replace it so the keys it holds are never lost silently.

use super::data_storage::DataStorage;
use super::error::{Error, Result};
use super::messages::Message;
use crate::msg_warning;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Serialized ordered list of category labels.
pub const KEY_CATEGORIES: &str = "timer_categories";
/// `"true"`/`"false"` flag for showing the category selector.
pub const KEY_SHOW_CATEGORY: &str = "timer_show_category";

#[derive(Debug, Clone)]
pub struct Settings {
    path: PathBuf,
}

impl Settings {
    /// Settings file inside the application data directory.
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(SETTINGS_FILE_NAME)?;
        Ok(Self { path })
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_values()?;
        values.insert(key.to_string(), value.to_string());
        self.store(&values)
    }

    /// Anything other than the exact string `"true"` reads as false.
    pub fn show_category(&self) -> bool {
        self.get(KEY_SHOW_CATEGORY).as_deref() == Some("true")
    }

    pub fn set_show_category(&self, show: bool) -> Result<()> {
        self.set(KEY_SHOW_CATEGORY, if show { "true" } else { "false" })
    }

    /// Best-effort read: any fault is reported and yields no values.
    fn load(&self) -> BTreeMap<String, String> {
        self.read_values().unwrap_or_else(|e| {
            msg_warning!(Message::SettingsMalformed(e.to_string()));
            BTreeMap::new()
        })
    }

    /// Strict read used before writing. Only a missing file counts as empty.
    fn read_values(&self) -> Result<BTreeMap<String, String>> {
        let malformed = |reason: String| Error::MalformedSettings {
            path: self.path.display().to_string(),
            reason,
        };

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) if e.kind() == ErrorKind::InvalidData => return Err(malformed(e.to_string())),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&content).map_err(|e| malformed(e.to_string()))
    }

    fn store(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(values)?)?;
        tracing::debug!(path = %self.path.display(), keys = values.len(), "settings written");
        Ok(())
    }
}
