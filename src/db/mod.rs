//! Database layer for worktimer.
//!
//! Durable tables live in one SQLite file owned by a storage worker thread
//! ([`db::Db`]). Every store method submits a request to that worker and
//! awaits its completion, so requests are served in the order they were
//! issued and no caller ever blocks the async runtime on disk I/O.
//!
//! ## Tables
//!
//! - **logs**: completed sessions, `id INTEGER PRIMARY KEY AUTOINCREMENT`
//! - **tasks**: remembered task names, primary key `name`
//! - **migrations**: applied schema versions
//!
//! There are no foreign keys between `logs` and `tasks`; log rows copy the
//! task and category text.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worktimer::db::{db::Db, logs::Logs, tasks::Tasks};
//!
//! # async fn run() -> worktimer::libs::error::Result<()> {
//! let db = Db::new()?;
//! let tasks = Tasks::new(&db);
//! tasks.upsert("Review code").await?;
//! let history = Logs::new(&db).get_all().await?;
//! # Ok(())
//! # }
//! ```

/// Connection handle and storage worker.
pub mod db;

/// Versioned schema migrations applied on open.
pub mod migrations;

/// Completed session records.
pub mod logs;

/// Remembered task names for quick re-selection.
pub mod tasks;
