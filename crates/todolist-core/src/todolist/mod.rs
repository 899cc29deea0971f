//! The asynchronous `TodoList` facade.
//!
//! [`TodoList`] is the entry point front ends use. Each method validates its
//! parameters through the [`crate::hierarchy`] engine, running the engine
//! inside one storage transaction on a blocking worker thread.
//!
//! Mutating methods first take a write lock shared by every clone of the
//! list, so two mutations never interleave even when they target different
//! sibling groups. The owned lock guard travels into the blocking worker and
//! is released only when the transaction has finished, whether or not the
//! caller is still awaiting the result. Reads skip the lock and see the last
//! committed state.
//!
//! ```rust
//! use todolist_core::{TodoListBuilder, params::{CreateProject, CreateTask, Id}};
//!
//! # async fn example() -> todolist_core::Result<()> {
//! let todo = TodoListBuilder::new().in_memory().build().await?;
//!
//! let project = todo
//!     .create_project(&CreateProject { name: "Errands".to_string() })
//!     .await?;
//! todo.create_task(&CreateTask {
//!     project_id: project.id,
//!     task_string: "Post letters".to_string(),
//! })
//! .await?;
//!
//! let tasks = todo.get_tasks(&Id { id: project.id }).await?;
//! assert_eq!(tasks[0].position, 0);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tokio::{sync::Mutex, task};

use crate::{
    error::{Result, TodoError},
    store::{Backend, Repository, StorageBackend},
};

pub mod builder;
pub mod project_ops;
pub mod task_ops;

#[cfg(test)]
mod tests;

pub use builder::TodoListBuilder;

/// Handle to a todo list. Clones share the storage and the write lock.
pub struct TodoList<B: Backend = StorageBackend> {
    backend: Arc<B>,
    write_lock: Arc<Mutex<()>>,
}

impl<B: Backend> Clone for TodoList<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}

impl<B: Backend> TodoList<B> {
    /// Wraps an already opened backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Runs a mutation under the write lock inside one transaction.
    async fn write<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut dyn Repository) -> Result<T> + Send + 'static,
    {
        let guard = Arc::clone(&self.write_lock).lock_owned().await;
        let backend = Arc::clone(&self.backend);

        task::spawn_blocking(move || {
            let _guard = guard;
            backend.transact(op)
        })
        .await
        .map_err(TodoError::join)?
    }

    /// Runs a read-only query inside one deferred transaction without the
    /// write lock.
    async fn read<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&dyn Repository) -> Result<T> + Send + 'static,
    {
        let backend = Arc::clone(&self.backend);

        task::spawn_blocking(move || backend.read(op))
            .await
            .map_err(TodoError::join)?
    }
}
