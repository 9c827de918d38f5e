use super::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::{Error, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::thread;
use tokio::sync::{mpsc, oneshot};

pub const DB_FILE_NAME: &str = "worktimer.db";

type Job = Box<dyn FnOnce(&mut Connection) + Send + 'static>;

/// Handle to the database connection.
///
/// The connection lives on a dedicated worker thread. Requests are queued on
/// an unbounded channel and executed one at a time in submission order; the
/// caller awaits a oneshot completion. A submitted request always runs to
/// completion, even if the awaiting future is dropped. Cloning the handle is
/// cheap; the worker stops once every clone is gone and the queue is drained.
#[derive(Clone)]
pub struct Db {
    sender: mpsc::UnboundedSender<Job>,
}

impl Db {
    /// Opens `worktimer.db` in the application data directory.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(db_file_path)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        tracing::debug!(path = %path.display(), "database opened");
        Self::start(conn, Some(path.to_path_buf()))
    }

    pub fn open_in_memory() -> Result<Db> {
        Self::start(Connection::open_in_memory()?, None)
    }

    fn start(mut conn: Connection, path: Option<PathBuf>) -> Result<Db> {
        init_with_migrations(&mut conn)?;

        let (sender, mut receiver) = mpsc::unbounded_channel::<Job>();
        let name = match &path {
            Some(_) => "worktimer-db".to_string(),
            None => "worktimer-db-memory".to_string(),
        };
        thread::Builder::new().name(name).spawn(move || {
            while let Some(job) = receiver.blocking_recv() {
                job(&mut conn);
            }
            tracing::debug!("database worker stopped");
        })?;

        Ok(Db { sender })
    }

    /// Runs `f` against the connection on the worker thread.
    pub async fn call<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let (reply, response) = oneshot::channel();
        let job: Job = Box::new(move |conn| {
            // The caller may have gone away; the work is done either way.
            let _ = reply.send(f(conn));
        });
        self.sender.send(job).map_err(|_| Error::WorkerGone)?;
        response.await.map_err(|_| Error::WorkerGone)?
    }
}
