//! # Worktimer - a personal work timer with a local history
//!
//! Start a timer for a task, stop it, and the session is stored as a log
//! record. Task names are remembered for quick re-selection, sessions can be
//! tagged with a user-defined category, and the whole history can be
//! exported as a JSON backup or a spreadsheet-friendly CSV file.
//!
//! ## Features
//!
//! - **Session Timer**: Idle/Running state machine with a live elapsed display
//! - **History**: Durable log records with store-assigned ids
//! - **Task Memory**: Previously used task names, seeded with defaults
//! - **Categories**: Ordered, user-defined labels kept in a settings file
//! - **Data Export**: JSON backup and column-selectable CSV
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worktimer::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
