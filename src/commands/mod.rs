//! Command-line interface.
//!
//! Each subcommand lives in its own module with an `Args` struct and an
//! async `cmd` entry point. Commands open an [`AppContext`] themselves;
//! `init` and `settings` work without touching the database.
//!
//! [`AppContext`]: crate::libs::context::AppContext

pub mod category;
pub mod export;
pub mod init;
pub mod log;
pub mod settings;
pub mod start;
pub mod task;

use crate::libs::{config::Config, context::AppContext, messages::Message};
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Start the timer and record the session when it stops")]
    Start(start::StartArgs),
    #[command(about = "Show or delete recorded sessions")]
    Log(log::LogArgs),
    #[command(about = "Manage remembered task names")]
    Task(task::TaskArgs),
    #[command(about = "Manage categories")]
    Category(category::CategoryArgs),
    #[command(about = "Export the history as JSON or CSV")]
    Export(export::ExportArgs),
    #[command(about = "Show or change settings")]
    Settings(settings::SettingsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args).await,
            Commands::Start(args) => start::cmd(args).await,
            Commands::Log(args) => log::cmd(args).await,
            Commands::Task(args) => task::cmd(args).await,
            Commands::Category(args) => category::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
            Commands::Settings(args) => settings::cmd(args),
        }
    }
}

/// Reads the configuration and opens the stores, seeding default tasks.
///
/// Failing to open the database is fatal for every command that needs it.
pub(crate) async fn open_context() -> Result<AppContext> {
    let config = Config::read()?;
    let ctx = AppContext::open(&config).map_err(|e| msg_error_anyhow!(Message::DbOpenFailed(e.to_string())))?;
    ctx.init().await;
    Ok(ctx)
}
