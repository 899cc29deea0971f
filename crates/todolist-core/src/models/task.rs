//! Task model definition and sibling-group membership.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Represents a task of a project, either top-level or a detail of another
/// task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: u64,

    /// Project this task and its whole subtree belong to
    pub project_id: u64,

    /// Parent task when this task is a detail, `None` when top-level
    pub parent_task_id: Option<u64>,

    /// Text content of the task
    pub task_string: String,

    /// Position within the task's sibling group (0-indexed)
    pub position: u32,

    /// Whether the task has been marked as completed
    #[serde(default)]
    pub completed: bool,

    /// Details ordered by position. Derived; only populated by listings.
    #[serde(default)]
    pub details: Vec<Task>,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the task was last modified (UTC)
    pub updated_at: Timestamp,
}

/// The ordering domain a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskGroup {
    /// Top-level tasks of a project
    TopLevel { project_id: u64 },
    /// Details of a parent task
    Details { parent_task_id: u64 },
}

impl Task {
    /// Creates an unsaved top-level task.
    pub fn top_level(project_id: u64, task_string: impl Into<String>, position: u32) -> Self {
        Self::unsaved(project_id, None, task_string.into(), position)
    }

    /// Creates an unsaved detail of `parent`, inheriting its project.
    pub fn detail_of(parent: &Task, task_string: impl Into<String>, position: u32) -> Self {
        Self::unsaved(parent.project_id, Some(parent.id), task_string.into(), position)
    }

    fn unsaved(
        project_id: u64,
        parent_task_id: Option<u64>,
        task_string: String,
        position: u32,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: 0,
            project_id,
            parent_task_id,
            task_string,
            position,
            completed: false,
            details: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The sibling group this task currently belongs to.
    pub fn group(&self) -> TaskGroup {
        match self.parent_task_id {
            Some(parent_task_id) => TaskGroup::Details { parent_task_id },
            None => TaskGroup::TopLevel {
                project_id: self.project_id,
            },
        }
    }

    /// Whether this task is a detail of another task.
    pub fn is_detail(&self) -> bool {
        self.parent_task_id.is_some()
    }
}
