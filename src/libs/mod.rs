//! Core library modules for worktimer.
//!
//! ## Layout
//!
//! - **Domain values**: [`log`], [`task`], [`category`]
//! - **Persistence**: [`settings`], [`data_storage`], [`config`]
//! - **Behavior**: [`timer`], [`export`], [`context`]
//! - **Presentation**: [`view`], [`formatter`], [`messages`]
//!
//! The SQLite-backed stores live in [`crate::db`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worktimer::libs::config::Config;
//! use worktimer::libs::context::AppContext;
//!
//! # async fn run() -> worktimer::libs::error::Result<()> {
//! let ctx = AppContext::open(&Config::read()?)?;
//! ctx.init().await;
//! let history = ctx.logs.get_all().await?;
//! # Ok(())
//! # }
//! ```

pub mod category;
pub mod config;
pub mod context;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod formatter;
pub mod log;
pub mod messages;
pub mod settings;
pub mod task;
pub mod timer;
pub mod view;
