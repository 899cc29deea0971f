//! Adjacency swap for projects and tasks.
//!
//! Only neighbours may trade places, which keeps a swap to exactly two
//! writes and leaves every other sibling untouched.

use log::debug;

use super::{projects::load_project, tasks::load_task};
use crate::{
    error::{Result, TodoError},
    models::{Project, Task},
    store::Repository,
    validate,
};

/// Swaps the positions of two adjacent projects and returns both as saved.
pub fn swap_projects(
    repo: &mut dyn Repository,
    first_id: u64,
    second_id: u64,
) -> Result<(Project, Project)> {
    validate::id("project_id", first_id)?;
    validate::id("project_id2", second_id)?;
    ensure_distinct("project_id2", first_id, second_id)?;

    let mut first = load_project(repo, first_id)?;
    let mut second = load_project(repo, second_id)?;
    ensure_adjacent("project_id2", first.position, second.position)?;

    std::mem::swap(&mut first.position, &mut second.position);
    repo.save_project(&mut first)?;
    repo.save_project(&mut second)?;

    debug!(
        "Swapped projects {} and {} to positions {} and {}",
        first.id, second.id, first.position, second.position
    );
    Ok((first, second))
}

/// Swaps the positions of two adjacent tasks of the same sibling group and
/// returns both as saved.
pub fn swap_tasks(repo: &mut dyn Repository, first_id: u64, second_id: u64) -> Result<(Task, Task)> {
    validate::id("task_id", first_id)?;
    validate::id("task_id2", second_id)?;
    ensure_distinct("task_id2", first_id, second_id)?;

    let mut first = load_task(repo, first_id)?;
    let mut second = load_task(repo, second_id)?;

    if first.project_id != second.project_id {
        return Err(TodoError::invalid_input("task_id2")
            .with_reason("Project ids of the specified tasks must be equal"));
    }
    if first.parent_task_id != second.parent_task_id {
        return Err(TodoError::invalid_input("task_id2")
            .with_reason("Parent task ids of the specified tasks must be equal"));
    }
    ensure_adjacent("task_id2", first.position, second.position)?;

    std::mem::swap(&mut first.position, &mut second.position);
    repo.save_task(&mut first)?;
    repo.save_task(&mut second)?;

    debug!(
        "Swapped tasks {} and {} to positions {} and {}",
        first.id, second.id, first.position, second.position
    );
    Ok((first, second))
}

fn ensure_distinct(field: &str, first_id: u64, second_id: u64) -> Result<()> {
    if first_id == second_id {
        return Err(TodoError::invalid_input(field).with_reason("Cannot swap position with itself"));
    }
    Ok(())
}

fn ensure_adjacent(field: &str, first: u32, second: u32) -> Result<()> {
    if first.abs_diff(second) != 1 {
        return Err(TodoError::invalid_input(field).with_reason(format!(
            "Positions {first} and {second} are not adjacent; only the previous or next sibling can be swapped"
        )));
    }
    Ok(())
}
