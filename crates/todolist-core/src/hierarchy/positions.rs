//! Sibling position manager.

use log::debug;

use crate::{
    error::{Result, TodoError},
    models::TaskGroup,
    store::Repository,
};

/// An ordering domain whose members hold positions `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiblingGroup {
    /// All projects
    Projects,
    /// Top-level tasks of a project, or the details of a task
    Tasks(TaskGroup),
}

impl From<TaskGroup> for SiblingGroup {
    fn from(group: TaskGroup) -> Self {
        SiblingGroup::Tasks(group)
    }
}

/// Number of members currently stored in the group.
pub fn count(repo: &dyn Repository, group: SiblingGroup) -> Result<usize> {
    Ok(match group {
        SiblingGroup::Projects => repo.list_projects()?.len(),
        SiblingGroup::Tasks(TaskGroup::TopLevel { project_id }) => {
            repo.list_top_level_of(project_id)?.len()
        }
        SiblingGroup::Tasks(TaskGroup::Details { parent_task_id }) => {
            repo.list_details_of(parent_task_id)?.len()
        }
    })
}

/// The position a new member of `group` takes.
pub fn append_to_end(repo: &dyn Repository, group: SiblingGroup) -> Result<u32> {
    next_position(count(repo, group)?)
}

/// Converts a group size into the next free position.
fn next_position(count: usize) -> Result<u32> {
    u32::try_from(count).map_err(|_| {
        TodoError::invalid_input("position")
            .with_reason(format!("sibling group already holds {count} members"))
    })
}

/// Closes the gap left by a member deleted from `group`.
pub fn compact_after_removal(
    repo: &mut dyn Repository,
    group: SiblingGroup,
    removed_position: u32,
) -> Result<()> {
    shift_down_after(repo, group, removed_position, None)
}

/// Closes the gap left by a task that is leaving `group` for another one.
///
/// The departing task is still stored with its old membership, so it is
/// skipped explicitly.
pub fn compact_after_departure(
    repo: &mut dyn Repository,
    group: SiblingGroup,
    departed_id: u64,
    departed_position: u32,
) -> Result<()> {
    shift_down_after(repo, group, departed_position, Some(departed_id))
}

fn shift_down_after(
    repo: &mut dyn Repository,
    group: SiblingGroup,
    threshold: u32,
    skip_id: Option<u64>,
) -> Result<()> {
    let mut shifted = 0usize;

    match group {
        SiblingGroup::Projects => {
            for mut project in repo.list_projects()? {
                if project.position > threshold && Some(project.id) != skip_id {
                    project.position -= 1;
                    repo.save_project(&mut project)?;
                    shifted += 1;
                }
            }
        }
        SiblingGroup::Tasks(task_group) => {
            let siblings = match task_group {
                TaskGroup::TopLevel { project_id } => repo.list_top_level_of(project_id)?,
                TaskGroup::Details { parent_task_id } => repo.list_details_of(parent_task_id)?,
            };
            for mut task in siblings {
                if task.position > threshold && Some(task.id) != skip_id {
                    task.position -= 1;
                    repo.save_task(&mut task)?;
                    shifted += 1;
                }
            }
        }
    }

    debug!("Compacted {group:?} after position {threshold}: {shifted} shifted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_next_position_follows_count() {
        assert_eq!(next_position(0).unwrap(), 0);
        assert_eq!(next_position(3).unwrap(), 3);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_next_position_rejects_overflow() {
        let err = next_position(u32::MAX as usize + 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("position"));
    }
}
