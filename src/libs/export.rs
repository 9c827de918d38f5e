//! Data export: a full JSON backup and a column-selectable CSV log.
//!
//! ## JSON backup
//!
//! Reads every log record and every remembered task inside one read
//! transaction on the storage worker, adds the category list and an export
//! timestamp, and writes the bundle pretty-printed:
//!
//! ```json
//! { "logs": [...], "tasks": [...], "categories": [...], "exportedAt": "2025-01-15T10:00:00.000Z" }
//! ```
//!
//! Nothing is sanitized; the file is a faithful snapshot that
//! [`ExportBundle`] can read back.
//!
//! ## CSV log
//!
//! The caller picks the columns with a comma-separated label list. The
//! output starts with a UTF-8 byte-order mark and a header row made of the
//! labels as given, followed by one row per record in store order. Each
//! field is neutralized against spreadsheet formula injection (a leading
//! `=`, `+`, `-`, `@`, tab or carriage return gets a `'` prefix) and then
//! always wrapped in double quotes.
//!
//! ## File Naming
//!
//! Without an explicit path the files are named after the local time of the
//! export: `timer_backup_202501151030.json`, `timer_log_202501151030.csv`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worktimer::libs::export::{Exporter, ExportFormat, DEFAULT_CSV_COLUMNS};
//! use worktimer::libs::context::AppContext;
//! use worktimer::libs::config::Config;
//!
//! # async fn run() -> worktimer::libs::error::Result<()> {
//! let ctx = AppContext::open(&Config::default())?;
//! let path = Exporter::new(ExportFormat::Csv, None).export_csv(&ctx.logs, DEFAULT_CSV_COLUMNS).await?;
//! # Ok(())
//! # }
//! ```

use super::category::Categories;
use super::error::Result;
use super::formatter::{file_name_stamp, format_date_time_in};
use super::log::{iso8601, LogRecord};
use super::task::TaskRef;
use crate::db::{db::Db, logs::Logs, tasks::Tasks};
use chrono::{DateTime, Local, TimeZone, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use rusqlite::TransactionBehavior;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

/// Byte-order mark so spreadsheet applications detect UTF-8.
pub const UTF8_BOM: &str = "\u{FEFF}";

/// Column order used when the caller does not choose one.
pub const DEFAULT_CSV_COLUMNS: &str = "開始時間,終了時間,経過時間,分類,内容";

/// Leading characters a spreadsheet would treat as the start of a formula.
const FORMULA_TRIGGERS: [char; 6] = ['=', '+', '-', '@', '\t', '\r'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    fn file_prefix(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "timer_log",
            ExportFormat::Json => "timer_backup",
        }
    }

    /// Default file name for an export made at `now`.
    pub fn default_file_name<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        format!("{}_{}.{}", self.file_prefix(), file_name_stamp(now), self.as_str())
    }
}

/// The recognized CSV columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvColumn {
    StartTime,
    EndTime,
    Duration,
    Category,
    Task,
}

impl CsvColumn {
    /// Maps a header label onto a column. Accepts the Japanese labels and
    /// their English names (case-insensitive, `_`/`-` allowed for the space).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "開始時間" => return Some(CsvColumn::StartTime),
            "終了時間" => return Some(CsvColumn::EndTime),
            "経過時間" => return Some(CsvColumn::Duration),
            "分類" => return Some(CsvColumn::Category),
            "内容" => return Some(CsvColumn::Task),
            _ => {}
        }
        let normalized = label.to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "start time" => Some(CsvColumn::StartTime),
            "end time" => Some(CsvColumn::EndTime),
            "duration" => Some(CsvColumn::Duration),
            "category" => Some(CsvColumn::Category),
            "task" => Some(CsvColumn::Task),
            _ => None,
        }
    }

    fn value<Tz: TimeZone>(&self, log: &LogRecord, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        match self {
            CsvColumn::StartTime => format_date_time_in(&log.start_time, tz),
            CsvColumn::EndTime => format_date_time_in(&log.end_time, tz),
            CsvColumn::Duration => log.duration.to_string(),
            CsvColumn::Category => log.category.clone(),
            CsvColumn::Task => log.task.clone(),
        }
    }
}

/// One requested column: the header text and what it maps to, if anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub label: String,
    pub column: Option<CsvColumn>,
}

/// Splits a comma-separated column order. Unknown labels become empty columns.
pub fn parse_columns(order: &str) -> Vec<ColumnSpec> {
    order
        .split(',')
        .map(|label| {
            let label = label.trim();
            ColumnSpec {
                label: label.to_string(),
                column: CsvColumn::from_label(label),
            }
        })
        .collect()
}

/// Prefixes an apostrophe when the value would start a spreadsheet formula.
pub fn neutralize_formula(value: &str) -> Cow<'_, str> {
    match value.chars().next() {
        Some(first) if FORMULA_TRIGGERS.contains(&first) => Cow::Owned(format!("'{}", value)),
        _ => Cow::Borrowed(value),
    }
}

/// Renders the CSV log, formatting times in `tz`.
pub fn render_csv_in<Tz: TimeZone>(logs: &[LogRecord], columns: &[ColumnSpec], tz: &Tz) -> Result<Vec<u8>>
where
    Tz::Offset: std::fmt::Display,
{
    let header = columns.iter().map(|c| c.label.as_str()).collect::<Vec<_>>().join(",");
    let mut out = format!("{}{}\n", UTF8_BOM, header).into_bytes();

    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(&mut out);
    for log in logs {
        let row: Vec<String> = columns
            .iter()
            .map(|spec| {
                let value = spec.column.map(|column| column.value(log, tz)).unwrap_or_default();
                neutralize_formula(&value).into_owned()
            })
            .collect();
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    drop(wtr);

    Ok(out)
}

/// Renders the CSV log with times in the local time zone.
pub fn render_csv(logs: &[LogRecord], columns: &[ColumnSpec]) -> Result<Vec<u8>> {
    render_csv_in(logs, columns, &Local)
}

/// Full-fidelity backup of everything the timer stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub logs: Vec<LogRecord>,
    pub tasks: Vec<TaskRef>,
    pub categories: Vec<String>,
    #[serde(with = "iso8601")]
    pub exported_at: DateTime<Utc>,
}

impl ExportBundle {
    /// Collects logs and tasks in one read transaction, then the categories.
    pub async fn collect(db: &Db, categories: &Categories, exported_at: DateTime<Utc>) -> Result<Self> {
        let (logs, tasks) = db
            .call(|conn| {
                let tx = conn.transaction_with_behavior(TransactionBehavior::Deferred)?;
                let logs = Logs::fetch_all(&tx)?;
                let tasks = Tasks::fetch_all(&tx)?;
                tx.commit()?;
                Ok((logs, tasks))
            })
            .await?;

        Ok(ExportBundle {
            logs,
            tasks,
            categories: categories.list(),
            exported_at,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Writes export files to a chosen or generated path.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without `output_path` the file goes to the current directory under
    /// the default name for `format`.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format.default_file_name(&Local::now())));
        Self { format, output_path }
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn output_path(&self) -> &PathBuf {
        &self.output_path
    }

    pub async fn export_json(&self, db: &Db, categories: &Categories) -> Result<PathBuf> {
        let bundle = ExportBundle::collect(db, categories, Utc::now()).await?;
        fs::write(&self.output_path, bundle.to_json()?)?;
        tracing::debug!(path = %self.output_path.display(), logs = bundle.logs.len(), tasks = bundle.tasks.len(), "json backup written");
        Ok(self.output_path.clone())
    }

    pub async fn export_csv(&self, logs: &Logs, column_order: &str) -> Result<PathBuf> {
        let records = logs.get_all().await?;
        let bytes = render_csv(&records, &parse_columns(column_order))?;
        fs::write(&self.output_path, bytes)?;
        tracing::debug!(path = %self.output_path.display(), rows = records.len(), "csv log written");
        Ok(self.output_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutralize_formula_triggers() {
        assert_eq!(neutralize_formula("=SUM(A1)"), "'=SUM(A1)");
        assert_eq!(neutralize_formula("+1"), "'+1");
        assert_eq!(neutralize_formula("-1"), "'-1");
        assert_eq!(neutralize_formula("@cmd"), "'@cmd");
        assert_eq!(neutralize_formula("\tx"), "'\tx");
        assert_eq!(neutralize_formula("\rx"), "'\rx");
        assert_eq!(neutralize_formula("a=b"), "a=b");
        assert_eq!(neutralize_formula(""), "");
    }

    #[test]
    fn test_column_labels() {
        assert_eq!(CsvColumn::from_label("開始時間"), Some(CsvColumn::StartTime));
        assert_eq!(CsvColumn::from_label("Start Time"), Some(CsvColumn::StartTime));
        assert_eq!(CsvColumn::from_label("end_time"), Some(CsvColumn::EndTime));
        assert_eq!(CsvColumn::from_label("memo"), None);

        let columns = parse_columns(" 内容 , memo,duration ");
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0].label, "内容");
        assert_eq!(columns[1].column, None);
        assert_eq!(columns[2].column, Some(CsvColumn::Duration));
    }
}
