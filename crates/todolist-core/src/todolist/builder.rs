//! Builder for creating and configuring TodoList instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::TodoList;
use crate::{
    db::SqliteBackend,
    error::{Result, TodoError},
    store::{MemoryBackend, StorageBackend},
};

#[derive(Debug, Clone)]
enum Storage {
    Sqlite(Option<PathBuf>),
    Memory,
}

/// Builder for creating and configuring TodoList instances.
#[derive(Debug, Clone)]
pub struct TodoListBuilder {
    storage: Storage,
}

impl TodoListBuilder {
    /// Creates a new builder storing data in the default SQLite file.
    pub fn new() -> Self {
        Self {
            storage: Storage::Sqlite(None),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/todolist/todolist.db` or
    /// `~/.local/share/todolist/todolist.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.storage = Storage::Sqlite(Some(path.as_ref().to_path_buf()));
        }
        self
    }

    /// Keeps everything in memory; nothing outlives the built list.
    pub fn in_memory(mut self) -> Self {
        self.storage = Storage::Memory;
        self
    }

    /// Builds the configured todo list.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::XdgDirectory` if no default path can be resolved,
    /// `TodoError::FileSystem` if the database directory cannot be created
    /// and `TodoError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<TodoList> {
        let backend = match self.storage {
            Storage::Memory => StorageBackend::Memory(MemoryBackend::new()),
            Storage::Sqlite(path) => {
                let db_path = match path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };
                StorageBackend::Sqlite(Self::open_sqlite(db_path).await?)
            }
        };
        Ok(TodoList::with_backend(backend))
    }

    async fn open_sqlite(db_path: PathBuf) -> Result<SqliteBackend> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TodoError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening todolist database at {}", db_path.display());
        task::spawn_blocking(move || SqliteBackend::open(db_path))
            .await
            .map_err(TodoError::join)?
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("todolist")
            .place_data_file("todolist.db")
            .map_err(|e| TodoError::XdgDirectory(e.to_string()))
    }
}

impl Default for TodoListBuilder {
    fn default() -> Self {
        Self::new()
    }
}
