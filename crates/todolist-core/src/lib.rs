//! Core library for the todolist application.
//!
//! Projects hold ordered trees of tasks. A task is either a top-level task of
//! a project or a detail of another task, and every sibling group (all
//! projects, the top-level tasks of a project, the details of a task) keeps
//! its positions dense from `0`.
//!
//! # Layers
//!
//! - [`todolist`]: the async [`TodoList`] facade and its builder
//! - [`hierarchy`]: the positioning engine, run inside one transaction per
//!   operation
//! - [`store`]: the storage contract and the in-memory backend
//! - [`db`]: the SQLite backend
//! - [`display`]: markdown output for projects, task trees and results
//!
//! # Quick Start
//!
//! ```rust
//! use todolist_core::{TodoListBuilder, params::{CreateDetail, CreateProject, CreateTask, Id}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let todo = TodoListBuilder::new()
//!     .with_database_path(Some("todolist.db"))
//!     .build()
//!     .await?;
//!
//! let project = todo
//!     .create_project(&CreateProject { name: "Garden".to_string() })
//!     .await?;
//! let task = todo
//!     .create_task(&CreateTask {
//!         project_id: project.id,
//!         task_string: "Plant tulips".to_string(),
//!     })
//!     .await?;
//! todo.create_detail(&CreateDetail {
//!     parent_task_id: task.id,
//!     task_string: "Buy bulbs".to_string(),
//! })
//! .await?;
//!
//! for task in todo.get_tasks(&Id { id: project.id }).await? {
//!     print!("{task}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod hierarchy;
pub mod models;
pub mod params;
pub mod store;
pub mod todolist;
pub mod validate;

// Re-export commonly used types
pub use db::{Database, SqliteBackend};
pub use display::{CreateResult, DeleteResult, LocalDateTime, Projects, SwapResult, Tasks, UpdateResult};
pub use error::{ErrorKind, Result, TodoError};
pub use models::{Project, Task, TaskGroup};
pub use params::{
    CreateDetail, CreateProject, CreateTask, EditTask, Id, MoveTask, ProjectName, RenameProject,
    SwapProjects, SwapTasks,
};
pub use store::{Backend, MemoryBackend, Repository, StorageBackend};
pub use todolist::{TodoList, TodoListBuilder};
