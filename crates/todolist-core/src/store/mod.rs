//! Persistence contract used by the hierarchy engine.
//!
//! The engine never talks to SQLite or any other storage directly. It sees two
//! narrow stores, bundled as a [`Repository`], and every operation runs inside
//! [`Backend::transact`], which commits when the operation returns `Ok` and
//! discards every write when it returns `Err`.
//!
//! Two backends exist: [`crate::db::SqliteBackend`] for durable storage and
//! [`MemoryBackend`], an arena keyed by id. [`StorageBackend`] lets the
//! builder pick one at composition time.

use crate::{
    db::SqliteBackend,
    error::Result,
    models::{Project, Task},
};

pub mod memory;

pub use memory::MemoryBackend;

/// Storage operations for projects.
pub trait ProjectStore {
    /// All projects ordered by position.
    fn list_projects(&self) -> Result<Vec<Project>>;

    /// Exact, case-sensitive name lookup.
    fn find_project_by_name(&self, name: &str) -> Result<Option<Project>>;

    /// The project with `id`, or `None` when it does not exist.
    fn find_project(&self, id: u64) -> Result<Option<Project>>;

    /// Whether a project with `id` is stored.
    fn project_exists(&self, id: u64) -> Result<bool>;

    /// Inserts the project when its id is `0` (assigning the new id), updates
    /// it otherwise. Refreshes `updated_at`.
    fn save_project(&mut self, project: &mut Project) -> Result<()>;

    /// Deletes the project row. Callers ensure it holds no tasks.
    fn remove_project(&mut self, project: &Project) -> Result<()>;
}

/// Storage operations for tasks.
pub trait TaskStore {
    /// Top-level tasks of a project ordered by position.
    fn list_top_level_of(&self, project_id: u64) -> Result<Vec<Task>>;

    /// Details of a task ordered by position.
    fn list_details_of(&self, parent_task_id: u64) -> Result<Vec<Task>>;

    /// Number of tasks at any depth referencing the project.
    fn count_tasks_of_project(&self, project_id: u64) -> Result<usize>;

    /// The task with `id` without its details, or `None`.
    fn find_task(&self, id: u64) -> Result<Option<Task>>;

    /// Inserts the task when its id is `0` (assigning the new id), updates it
    /// otherwise. Refreshes `updated_at`. `details` are never stored.
    fn save_task(&mut self, task: &mut Task) -> Result<()>;

    /// Removes the task and, cascading, all of its descendants.
    fn remove_task(&mut self, task: &Task) -> Result<()>;
}

/// Both stores as seen from inside one transaction.
pub trait Repository: ProjectStore + TaskStore {}

impl<T: ProjectStore + TaskStore> Repository for T {}

/// A transaction boundary around a unit of work.
pub trait Backend: Send + Sync + 'static {
    /// Runs `op` inside a single transaction. Every write made by `op` is
    /// committed together if it returns `Ok` and rolled back if it returns
    /// `Err`.
    fn transact<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut dyn Repository) -> Result<T>;

    /// Runs a read-only `op` against a consistent snapshot. Backends that
    /// lock for writing override this to stay out of the writers' way.
    fn read<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&dyn Repository) -> Result<T>,
    {
        self.transact(|repo| op(&*repo))
    }
}

/// Backend chosen by [`crate::TodoListBuilder`].
pub enum StorageBackend {
    Sqlite(SqliteBackend),
    Memory(MemoryBackend),
}

impl Backend for StorageBackend {
    fn transact<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut dyn Repository) -> Result<T>,
    {
        match self {
            StorageBackend::Sqlite(backend) => backend.transact(op),
            StorageBackend::Memory(backend) => backend.transact(op),
        }
    }

    fn read<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&dyn Repository) -> Result<T>,
    {
        match self {
            StorageBackend::Sqlite(backend) => backend.read(op),
            StorageBackend::Memory(backend) => backend.read(op),
        }
    }
}
