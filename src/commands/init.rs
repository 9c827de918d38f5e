//! Interactive configuration setup.

use super::open_context;
use crate::{
    libs::{
        config::{Config, CONFIG_FILE_NAME},
        data_storage::DataStorage,
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the configuration file instead of creating one
    #[arg(short, long)]
    delete: bool,
}

pub async fn cmd(init_args: InitArgs) -> Result<()> {
    let storage = DataStorage::new();

    if init_args.delete {
        let path = storage.get_path(CONFIG_FILE_NAME)?;
        if path.exists() {
            fs::remove_file(&path)?;
        }
        msg_success!(Message::ConfigRemoved);
        return Ok(());
    }

    Config::init()?.save()?;
    msg_success!(Message::ConfigSaved);

    // Creates the database and seeds the default task names.
    open_context().await?.shutdown().await?;
    msg_info!(Message::ConfigPath(storage.base_path().display().to_string()));
    Ok(())
}
