//! Project lifecycle with existence and containment guards.

use log::debug;

use super::positions::{self, SiblingGroup};
use crate::{
    error::{Result, TodoError},
    models::Project,
    store::Repository,
    validate,
};

/// Loads a project or fails with [`TodoError::ProjectNotFound`].
pub fn load_project(repo: &dyn Repository, project_id: u64) -> Result<Project> {
    repo.find_project(project_id)?
        .ok_or(TodoError::ProjectNotFound { id: project_id })
}

/// Fails with [`TodoError::ProjectNotFound`] unless the project exists.
pub fn ensure_project_exists(repo: &dyn Repository, project_id: u64) -> Result<()> {
    if !repo.project_exists(project_id)? {
        return Err(TodoError::ProjectNotFound { id: project_id });
    }
    Ok(())
}

fn ensure_name_available(repo: &dyn Repository, name: &str) -> Result<()> {
    if repo.find_project_by_name(name)?.is_some() {
        return Err(TodoError::ProjectAlreadyExists {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// All projects ordered by position.
pub fn get_projects(repo: &dyn Repository) -> Result<Vec<Project>> {
    repo.list_projects()
}

/// A single project by id.
pub fn get_project(repo: &dyn Repository, project_id: u64) -> Result<Project> {
    validate::id("project_id", project_id)?;
    load_project(repo, project_id)
}

/// A single project by its exact name.
pub fn get_project_by_name(repo: &dyn Repository, name: &str) -> Result<Project> {
    repo.find_project_by_name(name)?
        .ok_or_else(|| TodoError::ProjectNameNotFound {
            name: name.to_string(),
        })
}

/// Creates a project at the end of the project list.
pub fn create_project(repo: &mut dyn Repository, name: &str) -> Result<Project> {
    validate::project_name("name", name)?;
    ensure_name_available(repo, name)?;

    let position = positions::append_to_end(repo, SiblingGroup::Projects)?;
    let mut project = Project::new(name, position);
    repo.save_project(&mut project)?;

    debug!("Created project {} at position {}", project.id, position);
    Ok(project)
}

/// Renames a project. Renaming to the current name changes nothing.
pub fn rename_project(repo: &mut dyn Repository, project_id: u64, new_name: &str) -> Result<Project> {
    validate::id("project_id", project_id)?;
    validate::project_name("new_name", new_name)?;

    let mut project = load_project(repo, project_id)?;
    if project.name == new_name {
        return Ok(project);
    }
    ensure_name_available(repo, new_name)?;

    project.name = new_name.to_string();
    repo.save_project(&mut project)?;
    Ok(project)
}

/// Removes a project that no task references any more and closes its gap.
pub fn remove_project(repo: &mut dyn Repository, project_id: u64) -> Result<Project> {
    validate::id("project_id", project_id)?;

    let project = load_project(repo, project_id)?;
    let count = repo.count_tasks_of_project(project_id)?;
    if count > 0 {
        return Err(TodoError::ProjectHasTasks {
            id: project_id,
            count,
        });
    }

    repo.remove_project(&project)?;
    positions::compact_after_removal(repo, SiblingGroup::Projects, project.position)?;

    debug!("Removed project {} from position {}", project.id, project.position);
    Ok(project)
}
