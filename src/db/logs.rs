use super::db::Db;
use crate::libs::error::{Error, Result};
use crate::libs::log::{parse_iso_string, to_iso_string, LogDuration, LogRecord, NewLogRecord};
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_LOG: &str = "INSERT INTO logs (start_time, end_time, duration, task, category, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_LOGS: &str = "SELECT id, start_time, end_time, duration, task, category, created_at FROM logs";
const ORDER_BY_ID: &str = "ORDER BY id";
const WHERE_ID: &str = "WHERE id = ?1";
const DELETE_LOG: &str = "DELETE FROM logs WHERE id = ?1";

/// Raw column values, validated into a [`LogRecord`] afterwards.
struct LogRow {
    id: i64,
    start_time: String,
    end_time: String,
    duration: i64,
    task: Option<String>,
    category: Option<String>,
    created_at: String,
}

impl LogRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(LogRow {
            id: row.get(0)?,
            start_time: row.get(1)?,
            end_time: row.get(2)?,
            duration: row.get(3)?,
            task: row.get(4)?,
            category: row.get(5)?,
            created_at: row.get(6)?,
        })
    }

    fn into_record(self) -> Result<LogRecord> {
        let id = self.id;
        let malformed = |reason: String| Error::MalformedRecord {
            table: "logs",
            key: id.to_string(),
            reason,
        };
        let timestamp = |field: &str, value: &str| parse_iso_string(value).ok_or_else(|| malformed(format!("{} '{}' is not a timestamp", field, value)));

        let start_time = timestamp("start_time", &self.start_time)?;
        let end_time = timestamp("end_time", &self.end_time)?;
        let created_at = timestamp("created_at", &self.created_at)?;
        if self.duration < 0 {
            return Err(malformed(format!("negative duration {}", self.duration)));
        }
        if end_time < start_time {
            return Err(malformed(format!("end_time {} is before start_time {}", self.end_time, self.start_time)));
        }

        Ok(LogRecord {
            id,
            start_time,
            end_time,
            duration: LogDuration::from_secs(self.duration),
            task: self.task.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            created_at,
        })
    }
}

/// Durable table of completed sessions.
///
/// Every method is its own transaction on the storage worker; there is no
/// atomicity across calls.
#[derive(Clone)]
pub struct Logs {
    db: Db,
}

impl Logs {
    pub fn new(db: &Db) -> Self {
        Logs { db: db.clone() }
    }

    /// Persists a finished session and returns the id the store assigned.
    pub async fn add(&self, record: NewLogRecord) -> Result<i64> {
        record.validate()?;
        self.db
            .call(move |conn| {
                let tx = conn.transaction()?;
                tx.execute(
                    INSERT_LOG,
                    params![
                        to_iso_string(record.start_time()),
                        to_iso_string(record.end_time()),
                        record.duration().as_secs(),
                        record.task(),
                        record.category(),
                        to_iso_string(record.created_at()),
                    ],
                )?;
                let id = tx.last_insert_rowid();
                tx.commit()?;
                tracing::debug!(id, "log record added");
                Ok(id)
            })
            .await
    }

    /// All records in store order (ascending id). Display ordering is up to the caller.
    pub async fn get_all(&self) -> Result<Vec<LogRecord>> {
        self.db.call(|conn| Self::fetch_all(conn)).await
    }

    pub async fn get(&self, id: i64) -> Result<Option<LogRecord>> {
        self.db
            .call(move |conn| {
                let row = conn
                    .query_row(&format!("{} {}", SELECT_LOGS, WHERE_ID), params![id], LogRow::from_row)
                    .optional()?;
                row.map(LogRow::into_record).transpose()
            })
            .await
    }

    /// Removes a record. A missing id is not an error; returns rows removed.
    pub async fn delete(&self, id: i64) -> Result<usize> {
        self.db
            .call(move |conn| {
                let tx = conn.transaction()?;
                let deleted = tx.execute(DELETE_LOG, params![id])?;
                tx.commit()?;
                tracing::debug!(id, deleted, "log record delete");
                Ok(deleted)
            })
            .await
    }

    /// Reads every record on an already borrowed connection, so it can share
    /// a transaction with other reads.
    pub(crate) fn fetch_all(conn: &Connection) -> Result<Vec<LogRecord>> {
        let mut stmt = conn.prepare(&format!("{} {}", SELECT_LOGS, ORDER_BY_ID))?;
        let rows = stmt.query_map([], LogRow::from_row)?;

        let mut logs = Vec::new();
        for row in rows {
            logs.push(row?.into_record()?);
        }
        Ok(logs)
    }
}
