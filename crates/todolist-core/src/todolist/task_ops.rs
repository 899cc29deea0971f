//! Task operations for the TodoList.

use super::TodoList;
use crate::{
    error::Result,
    hierarchy::{completion, swap, tasks},
    models::Task,
    params::{CreateDetail, CreateTask, EditTask, Id, MoveTask, SwapTasks},
    store::Backend,
};

impl<B: Backend> TodoList<B> {
    /// Lists the top-level tasks of a project, each with its detail tree.
    pub async fn get_tasks(&self, params: &Id) -> Result<Vec<Task>> {
        let project_id = params.id;
        self.read(move |repo| tasks::get_tasks(repo, project_id))
            .await
    }

    /// Retrieves a task with its detail tree.
    pub async fn get_task(&self, params: &Id) -> Result<Task> {
        let task_id = params.id;
        self.read(move |repo| tasks::get_task(repo, task_id)).await
    }

    /// Appends a top-level task to a project.
    pub async fn create_task(&self, params: &CreateTask) -> Result<Task> {
        let project_id = params.project_id;
        let task_string = params.task_string.clone();
        self.write(move |repo| tasks::create_task(repo, project_id, &task_string))
            .await
    }

    /// Appends a detail to a task.
    pub async fn create_detail(&self, params: &CreateDetail) -> Result<Task> {
        let parent_task_id = params.parent_task_id;
        let task_string = params.task_string.clone();
        self.write(move |repo| tasks::create_detail(repo, parent_task_id, &task_string))
            .await
    }

    /// Replaces the text of a task.
    pub async fn edit_task(&self, params: &EditTask) -> Result<Task> {
        let task_id = params.id;
        let task_string = params.task_string.clone();
        self.write(move |repo| tasks::edit_task(repo, task_id, &task_string))
            .await
    }

    /// Removes a task together with every detail below it. Returns the
    /// removed task.
    pub async fn remove_task(&self, params: &Id) -> Result<Task> {
        let task_id = params.id;
        self.write(move |repo| tasks::remove_task(repo, task_id))
            .await
    }

    /// Exchanges the positions of two adjacent sibling tasks.
    pub async fn swap_positions_of_tasks(&self, params: &SwapTasks) -> Result<(Task, Task)> {
        let (first, second) = (params.task1_id, params.task2_id);
        self.write(move |repo| swap::swap_tasks(repo, first, second))
            .await
    }

    /// Marks an open task as completed. Its details and parent are left as
    /// they are.
    pub async fn complete_task(&self, params: &Id) -> Result<Task> {
        let task_id = params.id;
        self.write(move |repo| completion::complete_task(repo, task_id))
            .await
    }

    /// Reopens a completed task.
    pub async fn uncomplete_task(&self, params: &Id) -> Result<Task> {
        let task_id = params.id;
        self.write(move |repo| completion::uncomplete_task(repo, task_id))
            .await
    }

    /// Moves a task with its subtree under another task or to the top level
    /// of a project, appending it at the end of its new sibling group.
    pub async fn move_task(&self, params: &MoveTask) -> Result<Task> {
        let task_id = params.id;
        let (new_parent, new_project) = (params.new_parent_task_id, params.new_project_id);
        self.write(move |repo| tasks::move_task(repo, task_id, new_parent, new_project))
            .await
    }
}
