//! Parameter structures for todolist operations.
//!
//! These structures are shared by every front end. They carry no framework
//! derives beyond serde; interface layers wrap them with their own derives
//! (clap arguments in the CLI) and convert into them with `.into()`.
//!
//! ```ignore
//! #[derive(Args)]
//! pub struct CreateTaskArgs {
//!     pub project_id: u64,
//!     pub task_string: String,
//! }
//!
//! impl From<CreateTaskArgs> for CreateTask {
//!     fn from(args: CreateTaskArgs) -> Self {
//!         CreateTask {
//!             project_id: args.project_id,
//!             task_string: args.task_string,
//!         }
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
///
/// Used by get_project, remove_project, get_tasks (where the ID names a
/// project), get_task, remove_task, complete_task and uncomplete_task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProject {
    /// Unique, non-blank project name
    pub name: String,
}

/// Parameters for looking a project up by its exact name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectName {
    pub name: String,
}

/// Parameters for renaming a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameProject {
    /// ID of the project to rename
    pub id: u64,
    /// The new unique name
    pub new_name: String,
}

/// Parameters for exchanging the positions of two adjacent projects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwapProjects {
    pub project1_id: u64,
    pub project2_id: u64,
}

/// Parameters for appending a top-level task to a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTask {
    /// ID of the project that receives the task
    pub project_id: u64,
    /// Free-form task text, may be empty
    pub task_string: String,
}

/// Parameters for appending a detail to an existing task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDetail {
    /// ID of the task that receives the detail
    pub parent_task_id: u64,
    /// Free-form detail text, may be empty
    pub task_string: String,
}

/// Parameters for replacing the text of a task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditTask {
    pub id: u64,
    pub task_string: String,
}

/// Parameters for exchanging the positions of two adjacent sibling tasks.
///
/// Both tasks must share a project and a parent (or both be top-level).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwapTasks {
    pub task1_id: u64,
    pub task2_id: u64,
}

/// Parameters for moving a task with its subtree.
///
/// With `new_parent_task_id` the task becomes the last detail of that task
/// and `new_project_id` is ignored. Without it the task becomes the last
/// top-level task of `new_project_id`, or of its current project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveTask {
    /// ID of the task to move
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_parent_task_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_project_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_task_optional_fields_default() {
        let params: MoveTask = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(params.id, 7);
        assert!(params.new_parent_task_id.is_none());
        assert!(params.new_project_id.is_none());

        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"id":7}"#);
    }
}
