//! Session timer: an in-memory Idle/Running state machine.
//!
//! Starting a session remembers the task name, captures the start instant
//! and spawns a one-second tick that republishes the elapsed time to every
//! registered [`PresentationTarget`]. Stopping writes exactly one
//! [`LogRecord`] through the log store and returns to Idle. There is no pause
//! state: a new start always begins a new record.
//!
//! Nothing here is persisted; only the finished record is.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use worktimer::db::{db::Db, logs::Logs, tasks::Tasks};
//! use worktimer::libs::timer::{SystemClock, TimerController};
//!
//! # async fn run() -> worktimer::libs::error::Result<()> {
//! let db = Db::new()?;
//! let mut timer = TimerController::new(Logs::new(&db), Tasks::new(&db), Arc::new(SystemClock));
//! timer.start("設計", "").await?;
//! let record = timer.stop().await?;
//! println!("{} {}", record.task, record.duration);
//! # Ok(())
//! # }
//! ```

use super::error::{Error, Result};
use super::log::{LogDuration, LogRecord, NewLogRecord};
use crate::db::{logs::Logs, tasks::Tasks};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

/// Period of the elapsed-time display refresh.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Source of wall-clock time, replaceable in tests.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// State changes published to presentation targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    Started {
        task: String,
        category: String,
        started_at: DateTime<Utc>,
    },
    Tick(LogDuration),
    Stopped(LogRecord),
}

/// Anything that mirrors the timer: a console line, a status bar, a second window.
pub trait PresentationTarget: Send + Sync {
    fn on_event(&self, event: &TimerEvent);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningSession {
    pub started_at: DateTime<Utc>,
    pub task: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TimerState {
    #[default]
    Idle,
    Running(RunningSession),
}

pub struct TimerController {
    logs: Logs,
    tasks: Tasks,
    clock: Arc<dyn Clock>,
    targets: Arc<Vec<Arc<dyn PresentationTarget>>>,
    state: TimerState,
    ticker: Option<JoinHandle<()>>,
}

impl TimerController {
    pub fn new(logs: Logs, tasks: Tasks, clock: Arc<dyn Clock>) -> Self {
        Self::with_targets(logs, tasks, clock, Vec::new())
    }

    pub fn with_targets(logs: Logs, tasks: Tasks, clock: Arc<dyn Clock>, targets: Vec<Arc<dyn PresentationTarget>>) -> Self {
        TimerController {
            logs,
            tasks,
            clock,
            targets: Arc::new(targets),
            state: TimerState::Idle,
            ticker: None,
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running(_))
    }

    /// Elapsed time of the running session, if any.
    pub fn elapsed(&self) -> Option<LogDuration> {
        match &self.state {
            TimerState::Running(session) => Some(LogDuration::between(&session.started_at, &self.clock.now())),
            TimerState::Idle => None,
        }
    }

    /// Idle → Running. Task and category are taken verbatim.
    ///
    /// The task name is remembered first; if that write fails the error is
    /// returned and the timer stays idle.
    pub async fn start(&mut self, task: &str, category: &str) -> Result<()> {
        if self.is_running() {
            return Err(Error::SessionAlreadyRunning);
        }

        self.tasks.upsert(task).await?;

        let session = RunningSession {
            started_at: self.clock.now(),
            task: task.to_string(),
            category: category.to_string(),
        };
        tracing::debug!(task = %session.task, category = %session.category, "session started");

        self.notify(&TimerEvent::Started {
            task: session.task.clone(),
            category: session.category.clone(),
            started_at: session.started_at,
        });
        self.ticker = Some(self.spawn_ticker(session.started_at));
        self.state = TimerState::Running(session);
        Ok(())
    }

    /// Running → Idle, persisting the finished session.
    ///
    /// If the write fails the error is returned and the session keeps
    /// running, so the interval is not lost.
    pub async fn stop(&mut self) -> Result<LogRecord> {
        let TimerState::Running(session) = &self.state else {
            return Err(Error::NoRunningSession);
        };

        let now = self.clock.now();
        // A wall clock that stepped backwards yields an empty interval.
        let end_time = now.max(session.started_at);
        let record = NewLogRecord::new(session.started_at, end_time, &session.task, &session.category, now);

        let id = self.logs.add(record.clone()).await?;
        let record = record.into_record(id);

        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
        self.state = TimerState::Idle;
        tracing::debug!(id, duration = %record.duration, "session stopped");

        self.notify(&TimerEvent::Stopped(record.clone()));
        Ok(record)
    }

    /// Starts when idle, stops when running. Returns the record on stop.
    pub async fn toggle(&mut self, task: &str, category: &str) -> Result<Option<LogRecord>> {
        if self.is_running() {
            self.stop().await.map(Some)
        } else {
            self.start(task, category).await.map(|_| None)
        }
    }

    fn notify(&self, event: &TimerEvent) {
        for target in self.targets.iter() {
            target.on_event(event);
        }
    }

    fn spawn_ticker(&self, started_at: DateTime<Utc>) -> JoinHandle<()> {
        let clock = Arc::clone(&self.clock);
        let targets = Arc::clone(&self.targets);
        tokio::spawn(async move {
            let mut ticks = interval(TICK_INTERVAL);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; the display starts at zero anyway.
            ticks.tick().await;
            loop {
                ticks.tick().await;
                let event = TimerEvent::Tick(LogDuration::between(&started_at, &clock.now()));
                for target in targets.iter() {
                    target.on_event(&event);
                }
            }
        })
    }
}

impl Drop for TimerController {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}
