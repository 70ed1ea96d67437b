use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{anyhow, Context, Result};
use rusqlite::{Connection, OpenFlags};

pub mod helpers;
pub mod models;
mod repositories;

pub use repositories::captures::CAPTURES_TABLE;

/// Read-only handle to the capture database written by the timelapse rig.
///
/// No connection is held between calls: every [`Database::execute`] opens its
/// own read-only connection on the blocking pool and drops it before returning.
#[derive(Clone)]
pub struct Database {
    db_path: Arc<PathBuf>,
}

impl Database {
    pub fn new(db_path: PathBuf) -> Self {
        Self {
            db_path: Arc::new(db_path),
        }
    }

    pub fn path(&self) -> &Path {
        self.db_path.as_path()
    }

    /// Whether the database file is present at all.
    pub fn is_available(&self) -> bool {
        self.db_path.is_file()
    }

    pub async fn execute<F, T>(&self, task: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = Arc::clone(&self.db_path);

        tokio::task::spawn_blocking(move || {
            let conn = Connection::open_with_flags(
                db_path.as_path(),
                OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )
            .with_context(|| {
                format!("failed to open capture database {}", db_path.display())
            })?;

            task(&conn)
        })
        .await
        .map_err(|err| anyhow!("database task terminated unexpectedly: {err}"))?
    }
}
