use super::db::Db;
use crate::libs::error::Result;
use crate::libs::task::{is_rememberable, TaskRef, DEFAULT_TASK_NAMES};
use rusqlite::{params, Connection};

const UPSERT_TASK: &str = "INSERT OR REPLACE INTO tasks (name) VALUES (?1)";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE name = ?1";
const SELECT_TASKS: &str = "SELECT name FROM tasks ORDER BY name";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM tasks";

/// Remembered task names, keyed by the name itself.
#[derive(Clone)]
pub struct Tasks {
    db: Db,
}

impl Tasks {
    pub fn new(db: &Db) -> Self {
        Tasks { db: db.clone() }
    }

    /// Remembers `name`. Blank names are ignored and duplicates overwrite silently.
    pub async fn upsert(&self, name: &str) -> Result<()> {
        if !is_rememberable(name) {
            return Ok(());
        }
        let name = name.to_string();
        self.db
            .call(move |conn| {
                let tx = conn.transaction()?;
                tx.execute(UPSERT_TASK, params![name])?;
                tx.commit()?;
                Ok(())
            })
            .await
    }

    /// Forgets `name`; returns rows removed. Log records keep their copy of the text.
    pub async fn delete(&self, name: &str) -> Result<usize> {
        let name = name.to_string();
        self.db
            .call(move |conn| {
                let tx = conn.transaction()?;
                let deleted = tx.execute(DELETE_TASK, params![name])?;
                tx.commit()?;
                Ok(deleted)
            })
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<TaskRef>> {
        self.db.call(|conn| Self::fetch_all(conn)).await
    }

    pub async fn count(&self) -> Result<u64> {
        self.db
            .call(|conn| {
                let count: i64 = conn.query_row(COUNT_TASKS, [], |row| row.get(0))?;
                Ok(count.max(0) as u64)
            })
            .await
    }

    /// Fills an empty store with [`DEFAULT_TASK_NAMES`]; returns whether it did.
    ///
    /// The emptiness check and the inserts share one transaction, so running
    /// this twice never adds the defaults twice.
    pub async fn seed_defaults(&self) -> Result<bool> {
        self.db
            .call(|conn| {
                let tx = conn.transaction()?;
                let count: i64 = tx.query_row(COUNT_TASKS, [], |row| row.get(0))?;
                if count > 0 {
                    return Ok(false);
                }
                for name in DEFAULT_TASK_NAMES {
                    tx.execute(UPSERT_TASK, params![name])?;
                }
                tx.commit()?;
                tracing::debug!(count = DEFAULT_TASK_NAMES.len(), "default task names seeded");
                Ok(true)
            })
            .await
    }

    pub(crate) fn fetch_all(conn: &Connection) -> Result<Vec<TaskRef>> {
        let mut stmt = conn.prepare(SELECT_TASKS)?;
        let names = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut tasks = Vec::new();
        for name in names {
            tasks.push(TaskRef { name: name? });
        }
        Ok(tasks)
    }
}
