//! Runs parsed commands against a [`TodoList`] and prints the outcome.

use std::fmt::Display;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::to_string_pretty;
use todolist_core::{
    display::{CreateResult, DeleteResult, Projects, SwapResult, Tasks, UpdateResult},
    params::Id,
    TodoList,
};

use crate::{
    cli::{ProjectCommands, TaskCommands},
    renderer::TerminalRenderer,
};

/// Command dispatcher holding the open todo list and the output settings.
pub struct Cli {
    todo: TodoList,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(todo: TodoList, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            todo,
            renderer,
            json,
        }
    }

    /// Prints `value` as JSON or `markdown` through the renderer.
    fn emit<T: Serialize>(&self, value: &T, markdown: impl Display) -> Result<()> {
        if self.json {
            println!(
                "{}",
                to_string_pretty(value).context("Failed to serialize output")?
            );
            Ok(())
        } else {
            self.renderer.render(&markdown.to_string())
        }
    }

    pub async fn list_projects(&self) -> Result<()> {
        let projects = self
            .todo
            .get_projects()
            .await
            .context("Failed to list projects")?;
        self.emit(&projects, Projects(projects.clone()))
    }

    pub async fn handle_project_command(&self, command: ProjectCommands) -> Result<()> {
        match command {
            ProjectCommands::Create(args) => {
                let project = self.todo.create_project(&args.into()).await?;
                self.emit(&project, CreateResult::new(project.clone()))
            }
            ProjectCommands::List => self.list_projects().await,
            ProjectCommands::Show(args) => {
                let params: Id = args.into();
                let project = self.todo.get_project(&params).await?;
                let tasks = Tasks(self.todo.get_tasks(&params).await?);
                let markdown = format!("{project}{tasks}");
                self.emit(&(&project, &tasks.0), markdown)
            }
            ProjectCommands::Find(args) => {
                let project = self.todo.get_project_by_name(&args.into()).await?;
                self.emit(&project, project.clone())
            }
            ProjectCommands::Rename(args) => {
                let old = self.todo.get_project(&Id { id: args.id }).await?;
                let project = self.todo.rename_project(&args.into()).await?;
                let change = format!("Renamed from '{}'", old.name);
                self.emit(&project, UpdateResult::with_changes(project.clone(), vec![change]))
            }
            ProjectCommands::Remove(args) => {
                let project = self.todo.remove_project(&args.into()).await?;
                self.emit(&project, DeleteResult::new(project.clone()))
            }
            ProjectCommands::Swap(args) => {
                let (first, second) = self.todo.swap_positions_of_projects(&args.into()).await?;
                self.emit(&(&first, &second), SwapResult::new(first.clone(), second.clone()))
            }
        }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                let task = self.todo.create_task(&args.into()).await?;
                self.emit(&task, CreateResult::new(task.clone()))
            }
            TaskCommands::Detail(args) => {
                let detail = self.todo.create_detail(&args.into()).await?;
                self.emit(&detail, CreateResult::new(detail.clone()))
            }
            TaskCommands::List(args) => {
                let tasks = self.todo.get_tasks(&args.into()).await?;
                self.emit(&tasks, Tasks(tasks.clone()))
            }
            TaskCommands::Show(args) => {
                let task = self.todo.get_task(&args.into()).await?;
                self.emit(&task, task.clone())
            }
            TaskCommands::Edit(args) => {
                let task = self.todo.edit_task(&args.into()).await?;
                self.emit(&task, UpdateResult::new(task.clone()))
            }
            TaskCommands::Remove(args) => {
                let task = self.todo.remove_task(&args.into()).await?;
                self.emit(&task, DeleteResult::new(task.clone()))
            }
            TaskCommands::Swap(args) => {
                let (first, second) = self.todo.swap_positions_of_tasks(&args.into()).await?;
                self.emit(&(&first, &second), SwapResult::new(first.clone(), second.clone()))
            }
            TaskCommands::Complete(args) => {
                let task = self.todo.complete_task(&args.into()).await?;
                let change = "Marked as completed".to_string();
                self.emit(&task, UpdateResult::with_changes(task.clone(), vec![change]))
            }
            TaskCommands::Uncomplete(args) => {
                let task = self.todo.uncomplete_task(&args.into()).await?;
                let change = "Cleared completed mark".to_string();
                self.emit(&task, UpdateResult::with_changes(task.clone(), vec![change]))
            }
            TaskCommands::Move(args) => {
                let task = self.todo.move_task(&args.into()).await?;
                let change = match task.parent_task_id {
                    Some(parent) => format!("Moved under task {parent} at position {}", task.position),
                    None => format!(
                        "Moved to the top level of project {} at position {}",
                        task.project_id, task.position
                    ),
                };
                self.emit(&task, UpdateResult::with_changes(task.clone(), vec![change]))
            }
        }
    }
}
