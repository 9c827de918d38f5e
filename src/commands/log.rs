use super::open_context;
use crate::{
    libs::{
        context::{AssumeYes, Confirm, Outcome, TerminalConfirm},
        messages::Message,
        view::{sort_history, HistoryOrder, View},
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct LogArgs {
    #[command(subcommand)]
    command: Option<LogCommand>,
}

#[derive(Debug, Subcommand)]
enum LogCommand {
    /// List recorded sessions
    List {
        /// Oldest first
        #[arg(long, conflicts_with = "desc")]
        asc: bool,
        /// Newest first
        #[arg(long)]
        desc: bool,
        /// Flip the configured order
        #[arg(short, long, conflicts_with_all = ["asc", "desc"])]
        reverse: bool,
    },
    /// Delete a recorded session
    Delete {
        /// Record id
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn cmd(args: LogArgs) -> Result<()> {
    match args.command {
        Some(LogCommand::Delete { id, yes }) => handle_delete(id, yes).await,
        Some(LogCommand::List { asc: true, .. }) => handle_list(OrderChoice::Fixed(HistoryOrder::Asc)).await,
        Some(LogCommand::List { desc: true, .. }) => handle_list(OrderChoice::Fixed(HistoryOrder::Desc)).await,
        Some(LogCommand::List { reverse: true, .. }) => handle_list(OrderChoice::Reversed).await,
        Some(LogCommand::List { .. }) | None => handle_list(OrderChoice::Configured).await,
    }
}

enum OrderChoice {
    Configured,
    Reversed,
    Fixed(HistoryOrder),
}

async fn handle_list(choice: OrderChoice) -> Result<()> {
    let ctx = open_context().await?;
    let logs = ctx.logs.get_all().await?;

    if logs.is_empty() {
        msg_info!(Message::NoLogsFound);
        return Ok(());
    }

    let order = match choice {
        OrderChoice::Configured => ctx.config.history_order,
        OrderChoice::Reversed => ctx.config.history_order.toggled(),
        OrderChoice::Fixed(order) => order,
    };
    msg_print!(Message::HistoryHeader, true);
    View::history(&sort_history(logs, order));
    Ok(())
}

async fn handle_delete(id: i64, yes: bool) -> Result<()> {
    let ctx = open_context().await?;
    let confirm: &dyn Confirm = if yes { &AssumeYes } else { &TerminalConfirm };

    match ctx.delete_log(id, confirm).await? {
        Outcome::Deleted => msg_success!(Message::LogDeleted(id)),
        Outcome::NotFound => msg_error!(Message::LogNotFound(id)),
        Outcome::Aborted => msg_info!(Message::OperationCancelled),
    }
    Ok(())
}
