//! Project operations for the TodoList.

use super::TodoList;
use crate::{
    error::Result,
    hierarchy::{projects, swap},
    models::Project,
    params::{CreateProject, Id, ProjectName, RenameProject, SwapProjects},
    store::Backend,
};

impl<B: Backend> TodoList<B> {
    /// Lists all projects ordered by position.
    pub async fn get_projects(&self) -> Result<Vec<Project>> {
        self.read(projects::get_projects).await
    }

    /// Retrieves a project by its ID.
    pub async fn get_project(&self, params: &Id) -> Result<Project> {
        let project_id = params.id;
        self.read(move |repo| projects::get_project(repo, project_id))
            .await
    }

    /// Retrieves a project by its exact, case-sensitive name.
    pub async fn get_project_by_name(&self, params: &ProjectName) -> Result<Project> {
        let name = params.name.clone();
        self.read(move |repo| projects::get_project_by_name(repo, &name))
            .await
    }

    /// Creates a project at the end of the project list.
    pub async fn create_project(&self, params: &CreateProject) -> Result<Project> {
        let name = params.name.clone();
        self.write(move |repo| projects::create_project(repo, &name))
            .await
    }

    /// Renames a project. The new name must not belong to another project.
    pub async fn rename_project(&self, params: &RenameProject) -> Result<Project> {
        let project_id = params.id;
        let new_name = params.new_name.clone();
        self.write(move |repo| projects::rename_project(repo, project_id, &new_name))
            .await
    }

    /// Removes a project that no task references and closes the gap it
    /// leaves. Returns the removed project.
    pub async fn remove_project(&self, params: &Id) -> Result<Project> {
        let project_id = params.id;
        self.write(move |repo| projects::remove_project(repo, project_id))
            .await
    }

    /// Exchanges the positions of two adjacent projects.
    pub async fn swap_positions_of_projects(
        &self,
        params: &SwapProjects,
    ) -> Result<(Project, Project)> {
        let (first, second) = (params.project1_id, params.project2_id);
        self.write(move |repo| swap::swap_projects(repo, first, second))
            .await
    }
}
