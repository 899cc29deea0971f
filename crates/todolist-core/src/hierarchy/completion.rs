//! Completion state of a task.
//!
//! Strictly two states, no propagation to details or parents.

use super::tasks::load_task;
use crate::{
    error::{Result, TodoError},
    models::Task,
    store::Repository,
    validate,
};

/// Marks an incomplete task as completed.
pub fn complete_task(repo: &mut dyn Repository, task_id: u64) -> Result<Task> {
    set_completed(repo, task_id, true)
}

/// Marks a completed task as not completed.
pub fn uncomplete_task(repo: &mut dyn Repository, task_id: u64) -> Result<Task> {
    set_completed(repo, task_id, false)
}

fn set_completed(repo: &mut dyn Repository, task_id: u64, completed: bool) -> Result<Task> {
    validate::id("task_id", task_id)?;

    let mut task = load_task(repo, task_id)?;
    match (task.completed, completed) {
        (true, true) => return Err(TodoError::TaskAlreadyCompleted { id: task_id }),
        (false, false) => return Err(TodoError::TaskNotCompleted { id: task_id }),
        _ => {}
    }

    task.completed = completed;
    repo.save_task(&mut task)?;
    Ok(task)
}
