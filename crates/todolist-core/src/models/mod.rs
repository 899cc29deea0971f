//! Data models for projects and tasks.
//!
//! Both models are flat records. A task's tree position is expressed only
//! through its `parent_task_id`; the `details` of a task are rebuilt from a
//! lookup by parent id whenever a listing needs them, so no object graph is
//! ever stored.
//!
//! An `id` of `0` marks a record that has not been saved yet. Stores assign
//! the real id on the first save.

pub mod project;
pub mod task;


pub use project::Project;
pub use task::{Task, TaskGroup};
