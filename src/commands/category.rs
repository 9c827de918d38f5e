use super::open_context;
use crate::{
    libs::{
        category::AppendOutcome,
        context::{AssumeYes, Confirm, Outcome, TerminalConfirm},
        messages::Message,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    command: Option<CategoryCommand>,
}

#[derive(Debug, Subcommand)]
enum CategoryCommand {
    /// List categories in selector order
    List,
    /// Append a category
    Add {
        /// Category label, trimmed and cut to 50 characters
        name: String,
    },
    /// Remove a category. Recorded sessions keep their text.
    Remove {
        /// Category label
        name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn cmd(args: CategoryArgs) -> Result<()> {
    match args.command {
        Some(CategoryCommand::Add { name }) => handle_add(name).await,
        Some(CategoryCommand::Remove { name, yes }) => handle_remove(name, yes).await,
        Some(CategoryCommand::List) | None => handle_list().await,
    }
}

async fn handle_list() -> Result<()> {
    let ctx = open_context().await?;
    let categories = ctx.categories.list();

    if categories.is_empty() {
        msg_info!(Message::NoCategoriesFound);
        return Ok(());
    }

    msg_print!(Message::CategoryListHeader, true);
    View::categories(&categories);
    Ok(())
}

async fn handle_add(name: String) -> Result<()> {
    let ctx = open_context().await?;

    match ctx.categories.append(&name)? {
        AppendOutcome::Added(value) => msg_success!(Message::CategoryAdded(value)),
        AppendOutcome::Empty => msg_warning!(Message::CategoryEmpty),
        AppendOutcome::Duplicate(value) => msg_warning!(Message::CategoryAlreadyExists(value)),
    }
    Ok(())
}

async fn handle_remove(name: String, yes: bool) -> Result<()> {
    let ctx = open_context().await?;
    let confirm: &dyn Confirm = if yes { &AssumeYes } else { &TerminalConfirm };

    match ctx.remove_category(&name, confirm)? {
        Outcome::Deleted => msg_success!(Message::CategoryRemoved(name)),
        Outcome::NotFound => msg_error!(Message::CategoryNotFound(name)),
        Outcome::Aborted => msg_info!(Message::OperationCancelled),
    }
    Ok(())
}
