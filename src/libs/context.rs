//! Application context: every store the timer needs, opened once.
//!
//! [`AppContext::open`] resolves file locations, opens the database (running
//! migrations) and builds the log, task and category stores on top of it.
//! A database that cannot be opened is fatal and the error is returned;
//! everything after that is best effort. [`AppContext::init`] seeds the
//! default task names and only logs a warning if that fails.
//!
//! Destructive operations ask a [`Confirm`] collaborator first and leave
//! everything untouched when it declines.
//!
//! ```text
//! open ──▶ init ──▶ timer / delete_* / export ──▶ shutdown
//! ```

use super::category::Categories;
use super::config::Config;
use super::data_storage::DataStorage;
use super::error::Result;
use super::formatter::format_date_time;
use super::messages::Message;
use super::settings::{Settings, SETTINGS_FILE_NAME};
use super::timer::{Clock, PresentationTarget, TimerController};
use crate::db::{
    db::{Db, DB_FILE_NAME},
    logs::Logs,
    tasks::Tasks,
};
use crate::{msg_debug, msg_warning};
use dialoguer::theme::ColorfulTheme;
use std::sync::Arc;

/// Asks the user whether a destructive operation should go ahead.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Accepts every prompt, for `--yes` style flags.
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Terminal yes/no prompt. A prompt that cannot be shown counts as "no".
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        dialoguer::Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// Result of a confirmed destructive operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Deleted,
    NotFound,
    Aborted,
}

pub struct AppContext {
    pub db: Db,
    pub logs: Logs,
    pub tasks: Tasks,
    pub settings: Settings,
    pub categories: Categories,
    pub config: Config,
}

impl AppContext {
    /// Opens the stores under the application data directory.
    pub fn open(config: &Config) -> Result<Self> {
        Self::open_in(&DataStorage::new(), config)
    }

    /// Opens the stores under `storage`. `config.database` overrides the
    /// database location.
    pub fn open_in(storage: &DataStorage, config: &Config) -> Result<Self> {
        let db_path = match &config.database {
            Some(path) => path.clone(),
            None => storage.get_path(DB_FILE_NAME)?,
        };
        let db = Db::open(&db_path)?;
        let settings = Settings::open(storage.get_path(SETTINGS_FILE_NAME)?);

        Ok(AppContext {
            logs: Logs::new(&db),
            tasks: Tasks::new(&db),
            categories: Categories::new(settings.clone()),
            settings,
            db,
            config: config.clone(),
        })
    }

    /// Seeds default task names into an empty task store.
    ///
    /// Failures are reported and swallowed; the application stays usable.
    pub async fn init(&self) {
        match self.tasks.seed_defaults().await {
            Ok(true) => msg_debug!(Message::TaskDefaultsSeeded(crate::libs::task::DEFAULT_TASK_NAMES.len())),
            Ok(false) => {}
            Err(e) => msg_warning!(Message::TaskSeedingFailed(e.to_string())),
        }
    }

    /// A timer writing through this context's stores.
    pub fn timer(&self, clock: Arc<dyn Clock>, targets: Vec<Arc<dyn PresentationTarget>>) -> TimerController {
        TimerController::with_targets(self.logs.clone(), self.tasks.clone(), clock, targets)
    }

    pub async fn delete_log(&self, id: i64, confirm: &dyn Confirm) -> Result<Outcome> {
        let Some(record) = self.logs.get(id).await? else {
            return Ok(Outcome::NotFound);
        };

        let summary = format!(
            "#{} {} {} {}",
            record.id,
            format_date_time(&record.start_time),
            record.duration,
            record.task
        );
        if !confirm.confirm(&Message::ConfirmDeleteLog(summary).to_string()) {
            return Ok(Outcome::Aborted);
        }

        // Someone else may have removed it between the lookup and now.
        match self.logs.delete(id).await? {
            0 => Ok(Outcome::NotFound),
            _ => Ok(Outcome::Deleted),
        }
    }

    pub async fn delete_task(&self, name: &str, confirm: &dyn Confirm) -> Result<Outcome> {
        if !self.tasks.get_all().await?.iter().any(|t| t.name == name) {
            return Ok(Outcome::NotFound);
        }
        if !confirm.confirm(&Message::ConfirmDeleteTask(name.to_string()).to_string()) {
            return Ok(Outcome::Aborted);
        }

        match self.tasks.delete(name).await? {
            0 => Ok(Outcome::NotFound),
            _ => Ok(Outcome::Deleted),
        }
    }

    pub fn remove_category(&self, value: &str, confirm: &dyn Confirm) -> Result<Outcome> {
        if !self.categories.contains(value) {
            return Ok(Outcome::NotFound);
        }
        if !confirm.confirm(&Message::ConfirmDeleteCategory(value.to_string()).to_string()) {
            return Ok(Outcome::Aborted);
        }

        match self.categories.remove(value)? {
            true => Ok(Outcome::Deleted),
            false => Ok(Outcome::NotFound),
        }
    }

    /// Drains queued storage requests and releases the database.
    ///
    /// Consumes the context; timers created from it keep their own handle and
    /// hold the worker open until they are dropped too.
    pub async fn shutdown(self) -> Result<()> {
        // The worker is FIFO, so a no-op round trip waits for everything queued before it.
        self.db.call(|_| Ok(())).await?;
        tracing::debug!("application context closed");
        Ok(())
    }
}
