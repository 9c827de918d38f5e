use crate::{
    libs::{data_storage::DataStorage, messages::Message, settings::Settings},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    command: Option<SettingsCommand>,
}

#[derive(Debug, Subcommand)]
enum SettingsCommand {
    /// Show or set whether `start` asks for a category
    ShowCategory {
        /// New value; omit to print the current one
        #[arg(action = clap::ArgAction::Set)]
        value: Option<bool>,
    },
    /// Print the data directory
    Path,
}

pub fn cmd(args: SettingsArgs) -> Result<()> {
    let settings = Settings::new()?;

    match args.command {
        Some(SettingsCommand::ShowCategory { value: Some(show) }) => {
            settings.set_show_category(show)?;
            msg_success!(Message::ShowCategory(show));
        }
        Some(SettingsCommand::ShowCategory { value: None }) | None => {
            msg_info!(Message::ShowCategory(settings.show_category()));
        }
        Some(SettingsCommand::Path) => {
            msg_info!(Message::ConfigPath(DataStorage::new().base_path().display().to_string()));
        }
    }
    Ok(())
}
