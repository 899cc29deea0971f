//! Task hierarchy mutator.
//!
//! Tasks form a tree through `parent_task_id` only. Moving a task carries its
//! whole subtree along: the subtree keeps its internal shape and positions,
//! while every node in it takes the project of its new location.

use log::debug;

use super::{
    positions,
    projects::ensure_project_exists,
};
use crate::{
    error::{Result, TodoError},
    models::{Task, TaskGroup},
    store::Repository,
    validate,
};

/// Loads a task or fails with [`TodoError::TaskNotFound`].
pub fn load_task(repo: &dyn Repository, task_id: u64) -> Result<Task> {
    repo.find_task(task_id)?
        .ok_or(TodoError::TaskNotFound { id: task_id })
}

/// Top-level tasks of a project with their detail trees filled in.
pub fn get_tasks(repo: &dyn Repository, project_id: u64) -> Result<Vec<Task>> {
    validate::id("project_id", project_id)?;
    ensure_project_exists(repo, project_id)?;

    repo.list_top_level_of(project_id)?
        .into_iter()
        .map(|task| with_details(repo, task))
        .collect()
}

/// A single task with its detail tree filled in.
pub fn get_task(repo: &dyn Repository, task_id: u64) -> Result<Task> {
    validate::id("task_id", task_id)?;
    let task = load_task(repo, task_id)?;
    with_details(repo, task)
}

fn with_details(repo: &dyn Repository, mut task: Task) -> Result<Task> {
    task.details = repo
        .list_details_of(task.id)?
        .into_iter()
        .map(|detail| with_details(repo, detail))
        .collect::<Result<Vec<_>>>()?;
    Ok(task)
}

/// Appends a new top-level task to a project.
pub fn create_task(repo: &mut dyn Repository, project_id: u64, task_string: &str) -> Result<Task> {
    validate::id("project_id", project_id)?;
    ensure_project_exists(repo, project_id)?;

    let group = TaskGroup::TopLevel { project_id };
    let position = positions::append_to_end(repo, group.into())?;
    let mut task = Task::top_level(project_id, task_string, position);
    repo.save_task(&mut task)?;

    debug!("Created task {} in {group:?} at position {position}", task.id);
    Ok(task)
}

/// Appends a new detail to a task. The detail joins the parent's project.
pub fn create_detail(
    repo: &mut dyn Repository,
    parent_task_id: u64,
    task_string: &str,
) -> Result<Task> {
    validate::id("task_id", parent_task_id)?;
    let parent = load_task(repo, parent_task_id)?;

    let group = TaskGroup::Details { parent_task_id };
    let position = positions::append_to_end(repo, group.into())?;
    let mut detail = Task::detail_of(&parent, task_string, position);
    repo.save_task(&mut detail)?;

    debug!("Created detail {} in {group:?} at position {position}", detail.id);
    Ok(detail)
}

/// Replaces the text of a task.
pub fn edit_task(repo: &mut dyn Repository, task_id: u64, new_task_string: &str) -> Result<Task> {
    validate::id("task_id", task_id)?;

    let mut task = load_task(repo, task_id)?;
    task.task_string = new_task_string.to_string();
    repo.save_task(&mut task)?;
    Ok(task)
}

/// Removes a task with all of its descendants and closes the gap it leaves.
pub fn remove_task(repo: &mut dyn Repository, task_id: u64) -> Result<Task> {
    validate::id("task_id", task_id)?;

    let task = load_task(repo, task_id)?;
    repo.remove_task(&task)?;
    positions::compact_after_removal(repo, task.group().into(), task.position)?;

    debug!("Removed task {} from {:?}", task.id, task.group());
    Ok(task)
}

/// Moves a task, with its subtree, under a new parent task or to the top
/// level of a project.
///
/// With `new_parent_task_id` the task becomes the last detail of that task
/// and `new_project_id` is ignored. Without it the task becomes the last
/// top-level task of `new_project_id`, or of its current project when no
/// project is given. A top-level task that would stay where it is fails with
/// "no parent to clear".
pub fn move_task(
    repo: &mut dyn Repository,
    task_id: u64,
    new_parent_task_id: Option<u64>,
    new_project_id: Option<u64>,
) -> Result<Task> {
    validate::id("task_id", task_id)?;
    let mut task = load_task(repo, task_id)?;

    let (destination, destination_project) = match new_parent_task_id {
        Some(parent_id) => {
            let parent = check_new_parent(repo, &task, parent_id)?;
            (
                TaskGroup::Details {
                    parent_task_id: parent.id,
                },
                parent.project_id,
            )
        }
        None => {
            let project_id = check_new_project(repo, &task, new_project_id)?;
            (TaskGroup::TopLevel { project_id }, project_id)
        }
    };

    let departed = task.group();
    positions::compact_after_departure(repo, departed.into(), task.id, task.position)?;
    let position = positions::append_to_end(repo, destination.into())?;

    if task.project_id != destination_project {
        task.project_id = destination_project;
        reassign_subtree_project(repo, task.id, destination_project)?;
    }
    task.parent_task_id = new_parent_task_id;
    task.position = position;
    repo.save_task(&mut task)?;

    debug!(
        "Moved task {} from {departed:?} to {destination:?} at position {position}",
        task.id
    );
    Ok(task)
}

fn check_new_parent(repo: &dyn Repository, task: &Task, parent_id: u64) -> Result<Task> {
    if parent_id == task.id {
        return Err(TodoError::invalid_input("new_parent_task_id")
            .with_reason("Cannot move task to be a detail of itself"));
    }
    validate::id("new_parent_task_id", parent_id)?;

    let parent = load_task(repo, parent_id)?;
    if task.parent_task_id == Some(parent_id) {
        return Err(TodoError::invalid_input("new_parent_task_id")
            .with_reason("Task is already a detail of the new parent task"));
    }
    if is_in_subtree(repo, task.id, parent_id)? {
        return Err(TodoError::invalid_input("new_parent_task_id")
            .with_reason("The new parent task cannot be a detail lower in the hierarchy of the task"));
    }
    Ok(parent)
}

fn check_new_project(repo: &dyn Repository, task: &Task, new_project_id: Option<u64>) -> Result<u64> {
    let unchanged = new_project_id.map_or(true, |id| id == task.project_id);
    if !task.is_detail() && unchanged {
        return Err(TodoError::invalid_input("new_parent_task_id")
            .with_reason("Task does not have a parent task to clear"));
    }

    match new_project_id {
        Some(project_id) => {
            validate::id("new_project_id", project_id)?;
            ensure_project_exists(repo, project_id)?;
            Ok(project_id)
        }
        None => Ok(task.project_id),
    }
}

/// Depth-first search of the details below `root_id` for `candidate_id`.
fn is_in_subtree(repo: &dyn Repository, root_id: u64, candidate_id: u64) -> Result<bool> {
    let mut stack = vec![root_id];
    while let Some(id) = stack.pop() {
        for detail in repo.list_details_of(id)? {
            if detail.id == candidate_id {
                return Ok(true);
            }
            stack.push(detail.id);
        }
    }
    Ok(false)
}

/// Gives every descendant of `root_id` the project `project_id`.
fn reassign_subtree_project(repo: &mut dyn Repository, root_id: u64, project_id: u64) -> Result<()> {
    let mut stack = vec![root_id];
    let mut touched = 0usize;
    while let Some(id) = stack.pop() {
        for mut detail in repo.list_details_of(id)? {
            stack.push(detail.id);
            detail.project_id = project_id;
            repo.save_task(&mut detail)?;
            touched += 1;
        }
    }

    debug!("Reassigned {touched} descendant(s) of task {root_id} to project {project_id}");
    Ok(())
}
