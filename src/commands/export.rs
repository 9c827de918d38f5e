//! Export command: JSON backup or CSV log.
//!
//! ```bash
//! worktimer export json
//! worktimer export csv --columns "内容,経過時間" --output week.csv
//! ```

use super::open_context;
use crate::{
    libs::{
        export::{parse_columns, ExportFormat, Exporter},
        messages::Message,
    },
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(subcommand)]
    command: ExportCommand,
}

#[derive(Debug, Subcommand)]
enum ExportCommand {
    /// Full backup of logs, tasks and categories
    Json {
        /// Output file; defaults to timer_backup_YYYYMMDDHHmm.json
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Spreadsheet-friendly history
    Csv {
        /// Output file; defaults to timer_log_YYYYMMDDHHmm.csv
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Comma-separated column labels; defaults to the configured order
        #[arg(short, long)]
        columns: Option<String>,
    },
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let ctx = open_context().await?;

    let path = match args.command {
        ExportCommand::Json { output } => {
            let exporter = Exporter::new(ExportFormat::Json, output);
            msg_info!(Message::ExportingData(exporter.format().as_str().to_string()));
            exporter.export_json(&ctx.db, &ctx.categories).await?
        }
        ExportCommand::Csv { output, columns } => {
            let columns = columns.unwrap_or_else(|| ctx.config.csv_columns.clone());
            for spec in parse_columns(&columns).iter().filter(|spec| spec.column.is_none()) {
                msg_warning!(Message::UnknownCsvColumn(spec.label.clone()));
            }
            let exporter = Exporter::new(ExportFormat::Csv, output);
            msg_info!(Message::ExportingData(exporter.format().as_str().to_string()));
            exporter.export_csv(&ctx.logs, &columns).await?
        }
    };

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    ctx.shutdown().await?;
    Ok(())
}
