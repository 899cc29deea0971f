//! Clap argument wrappers for every todolist operation.
//!
//! Each wrapper owns the clap attributes (help text, flags, aliases) and
//! converts into the matching core parameter struct with `From`, so the core
//! crate stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → TodoList
//! ```

use clap::{Args, Subcommand};
use todolist_core::params::{
    CreateDetail, CreateProject, CreateTask, EditTask, Id, MoveTask, ProjectName, RenameProject,
    SwapProjects, SwapTasks,
};

/// Create a project at the end of the project list
#[derive(Args)]
pub struct CreateProjectArgs {
    #[arg(help = "Unique name of the new project")]
    pub name: String,
}

impl From<CreateProjectArgs> for CreateProject {
    fn from(val: CreateProjectArgs) -> Self {
        CreateProject { name: val.name }
    }
}

/// Find a project by its exact name
#[derive(Args)]
pub struct FindProjectArgs {
    #[arg(help = "Exact, case-sensitive project name")]
    pub name: String,
}

impl From<FindProjectArgs> for ProjectName {
    fn from(val: FindProjectArgs) -> Self {
        ProjectName { name: val.name }
    }
}

/// Rename a project
#[derive(Args)]
pub struct RenameProjectArgs {
    #[arg(help = "Unique identifier of the project to rename")]
    pub id: u64,
    #[arg(help = "New name, not used by any other project")]
    pub new_name: String,
}

impl From<RenameProjectArgs> for RenameProject {
    fn from(val: RenameProjectArgs) -> Self {
        RenameProject {
            id: val.id,
            new_name: val.new_name,
        }
    }
}

/// Arguments naming a single project or task by id
#[derive(Args)]
pub struct IdArgs {
    #[arg(help = "Unique identifier of the project or task")]
    pub id: u64,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Swap two neighbouring projects
#[derive(Args)]
pub struct SwapProjectsArgs {
    pub project1_id: u64,
    pub project2_id: u64,
}

impl From<SwapProjectsArgs> for SwapProjects {
    fn from(val: SwapProjectsArgs) -> Self {
        SwapProjects {
            project1_id: val.project1_id,
            project2_id: val.project2_id,
        }
    }
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create a new project
    #[command(alias = "c")]
    Create(CreateProjectArgs),
    /// List all projects in order
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a project with its task tree
    #[command(alias = "s")]
    Show(IdArgs),
    /// Find a project by name
    #[command(alias = "f")]
    Find(FindProjectArgs),
    /// Rename a project
    #[command(alias = "r")]
    Rename(RenameProjectArgs),
    /// Remove a project that has no tasks
    #[command(aliases = ["d", "rm"])]
    Remove(IdArgs),
    /// Swap the positions of two neighbouring projects
    #[command(alias = "sw")]
    Swap(SwapProjectsArgs),
}

/// Append a top-level task to a project
#[derive(Args)]
pub struct AddTaskArgs {
    #[arg(help = "Unique identifier of the project receiving the task")]
    pub project_id: u64,
    #[arg(help = "Text of the task")]
    pub task_string: String,
}

impl From<AddTaskArgs> for CreateTask {
    fn from(val: AddTaskArgs) -> Self {
        CreateTask {
            project_id: val.project_id,
            task_string: val.task_string,
        }
    }
}

/// Append a detail to a task
#[derive(Args)]
pub struct AddDetailArgs {
    #[arg(help = "Unique identifier of the task receiving the detail")]
    pub parent_task_id: u64,
    #[arg(help = "Text of the detail")]
    pub task_string: String,
}

impl From<AddDetailArgs> for CreateDetail {
    fn from(val: AddDetailArgs) -> Self {
        CreateDetail {
            parent_task_id: val.parent_task_id,
            task_string: val.task_string,
        }
    }
}

/// Replace the text of a task
#[derive(Args)]
pub struct EditTaskArgs {
    pub id: u64,
    #[arg(help = "New text of the task")]
    pub task_string: String,
}

impl From<EditTaskArgs> for EditTask {
    fn from(val: EditTaskArgs) -> Self {
        EditTask {
            id: val.id,
            task_string: val.task_string,
        }
    }
}

/// Swap two neighbouring tasks of the same parent
#[derive(Args)]
pub struct SwapTasksArgs {
    pub task1_id: u64,
    pub task2_id: u64,
}

impl From<SwapTasksArgs> for SwapTasks {
    fn from(val: SwapTasksArgs) -> Self {
        SwapTasks {
            task1_id: val.task1_id,
            task2_id: val.task2_id,
        }
    }
}

/// Move a task and its details
///
/// With `--parent` the task becomes the last detail of that task. Without it
/// the task becomes the last top-level task of `--project`, or of its own
/// project when it is currently a detail.
#[derive(Args)]
pub struct MoveTaskArgs {
    #[arg(help = "Unique identifier of the task to move")]
    pub id: u64,
    #[arg(long, help = "Task that becomes the new parent")]
    pub parent: Option<u64>,
    #[arg(long, help = "Project receiving the task at top level")]
    pub project: Option<u64>,
}

impl From<MoveTaskArgs> for MoveTask {
    fn from(val: MoveTaskArgs) -> Self {
        MoveTask {
            id: val.id,
            new_parent_task_id: val.parent,
            new_project_id: val.project,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a top-level task to a project
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Add a detail to a task
    #[command(alias = "ad")]
    Detail(AddDetailArgs),
    /// List the task tree of a project
    #[command(aliases = ["l", "ls"])]
    List(IdArgs),
    /// Show a task with its details
    #[command(alias = "s")]
    Show(IdArgs),
    /// Edit the text of a task
    #[command(alias = "e")]
    Edit(EditTaskArgs),
    /// Remove a task with all of its details
    #[command(aliases = ["d", "rm"])]
    Remove(IdArgs),
    /// Swap the positions of two neighbouring tasks
    #[command(alias = "sw")]
    Swap(SwapTasksArgs),
    /// Mark a task as completed
    #[command(alias = "done")]
    Complete(IdArgs),
    /// Clear the completed mark of a task
    #[command(alias = "undo")]
    Uncomplete(IdArgs),
    /// Move a task under another task or to the top level of a project
    #[command(alias = "mv")]
    Move(MoveTaskArgs),
}
