use super::open_context;
use crate::{
    libs::{
        context::{AssumeYes, Confirm, Outcome, TerminalConfirm},
        messages::Message,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: Option<TaskCommand>,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// List remembered task names
    List,
    /// Forget a task name. Recorded sessions keep their text.
    Delete {
        /// Task name
        name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn cmd(args: TaskArgs) -> Result<()> {
    match args.command {
        Some(TaskCommand::Delete { name, yes }) => handle_delete(name, yes).await,
        Some(TaskCommand::List) | None => handle_list().await,
    }
}

async fn handle_list() -> Result<()> {
    let ctx = open_context().await?;
    let tasks = ctx.tasks.get_all().await?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TaskListHeader, true);
    View::tasks(&tasks);
    Ok(())
}

async fn handle_delete(name: String, yes: bool) -> Result<()> {
    let ctx = open_context().await?;
    let confirm: &dyn Confirm = if yes { &AssumeYes } else { &TerminalConfirm };

    match ctx.delete_task(&name, confirm).await? {
        Outcome::Deleted => msg_success!(Message::TaskDeleted(name)),
        Outcome::NotFound => msg_error!(Message::TaskNotFound(name)),
        Outcome::Aborted => msg_info!(Message::OperationCancelled),
    }
    Ok(())
}
