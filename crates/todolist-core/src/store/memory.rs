//! In-memory backend.

use std::collections::BTreeMap;
use std::sync::Mutex;

use jiff::Timestamp;

use super::{Backend, ProjectStore, Repository, TaskStore};
use crate::{
    error::{Result, TodoError},
    models::{Project, Task},
};

/// Arena of projects and tasks keyed by id.
#[derive(Debug, Clone, Default)]
struct Arena {
    projects: BTreeMap<u64, Project>,
    tasks: BTreeMap<u64, Task>,
    last_project_id: u64,
    last_task_id: u64,
}

/// Backend holding everything in process memory.
///
/// A transaction works on a staged copy of the arena which replaces the
/// published one only when the operation succeeds.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    arena: Mutex<Arena>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for MemoryBackend {
    fn transact<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut dyn Repository) -> Result<T>,
    {
        let mut published = self.arena.lock().map_err(|e| TodoError::Configuration {
            message: format!("In-memory store lock poisoned: {e}"),
        })?;

        let mut staged = published.clone();
        let output = op(&mut staged)?;
        *published = staged;
        Ok(output)
    }

    fn read<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&dyn Repository) -> Result<T>,
    {
        let published = self.arena.lock().map_err(|e| TodoError::Configuration {
            message: format!("In-memory store lock poisoned: {e}"),
        })?;
        op(&*published)
    }
}

impl Arena {
    fn sorted(mut tasks: Vec<Task>) -> Vec<Task> {
        tasks.sort_by_key(|task| task.position);
        tasks
    }

    fn descendants_of(&self, root_id: u64) -> Vec<u64> {
        let mut found = Vec::new();
        let mut stack = vec![root_id];
        while let Some(id) = stack.pop() {
            for task in self.tasks.values() {
                if task.parent_task_id == Some(id) {
                    found.push(task.id);
                    stack.push(task.id);
                }
            }
        }
        found
    }
}

impl ProjectStore for Arena {
    fn list_projects(&self) -> Result<Vec<Project>> {
        let mut projects: Vec<Project> = self.projects.values().cloned().collect();
        projects.sort_by_key(|project| project.position);
        Ok(projects)
    }

    fn find_project_by_name(&self, name: &str) -> Result<Option<Project>> {
        Ok(self
            .projects
            .values()
            .find(|project| project.name == name)
            .cloned())
    }

    fn find_project(&self, id: u64) -> Result<Option<Project>> {
        Ok(self.projects.get(&id).cloned())
    }

    fn project_exists(&self, id: u64) -> Result<bool> {
        Ok(self.projects.contains_key(&id))
    }

    fn save_project(&mut self, project: &mut Project) -> Result<()> {
        if project.id == 0 {
            self.last_project_id += 1;
            project.id = self.last_project_id;
        }
        project.updated_at = Timestamp::now();
        self.projects.insert(project.id, project.clone());
        Ok(())
    }

    fn remove_project(&mut self, project: &Project) -> Result<()> {
        self.projects.remove(&project.id);
        Ok(())
    }
}

impl TaskStore for Arena {
    fn list_top_level_of(&self, project_id: u64) -> Result<Vec<Task>> {
        Ok(Self::sorted(
            self.tasks
                .values()
                .filter(|task| task.project_id == project_id && task.parent_task_id.is_none())
                .cloned()
                .collect(),
        ))
    }

    fn list_details_of(&self, parent_task_id: u64) -> Result<Vec<Task>> {
        Ok(Self::sorted(
            self.tasks
                .values()
                .filter(|task| task.parent_task_id == Some(parent_task_id))
                .cloned()
                .collect(),
        ))
    }

    fn count_tasks_of_project(&self, project_id: u64) -> Result<usize> {
        Ok(self
            .tasks
            .values()
            .filter(|task| task.project_id == project_id)
            .count())
    }

    fn find_task(&self, id: u64) -> Result<Option<Task>> {
        Ok(self.tasks.get(&id).cloned())
    }

    fn save_task(&mut self, task: &mut Task) -> Result<()> {
        if task.id == 0 {
            self.last_task_id += 1;
            task.id = self.last_task_id;
        }
        task.updated_at = Timestamp::now();

        let mut stored = task.clone();
        stored.details.clear();
        self.tasks.insert(stored.id, stored);
        Ok(())
    }

    fn remove_task(&mut self, task: &Task) -> Result<()> {
        for id in self.descendants_of(task.id) {
            self.tasks.remove(&id);
        }
        self.tasks.remove(&task.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_assigns_increasing_ids() {
        let backend = MemoryBackend::new();
        let ids = backend
            .transact(|repo| {
                let mut first = Project::new("First", 0);
                let mut second = Project::new("Second", 1);
                repo.save_project(&mut first)?;
                repo.save_project(&mut second)?;
                Ok((first.id, second.id))
            })
            .unwrap();
        assert_eq!(ids, (1, 2));
    }

    #[test]
    fn test_failed_transaction_discards_writes() {
        let backend = MemoryBackend::new();
        let result: Result<()> = backend.transact(|repo| {
            repo.save_project(&mut Project::new("Doomed", 0))?;
            Err(TodoError::ProjectNotFound { id: 99 })
        });
        assert!(result.is_err());

        let projects = backend.transact(|repo| repo.list_projects()).unwrap();
        assert!(projects.is_empty());
    }

    #[test]
    fn test_remove_task_cascades_to_descendants() {
        let backend = MemoryBackend::new();
        let remaining = backend
            .transact(|repo| {
                let mut project = Project::new("Home", 0);
                repo.save_project(&mut project)?;

                let mut root = Task::top_level(project.id, "Clean", 0);
                repo.save_task(&mut root)?;
                let mut child = Task::detail_of(&root, "Kitchen", 0);
                repo.save_task(&mut child)?;
                let mut grandchild = Task::detail_of(&child, "Oven", 0);
                repo.save_task(&mut grandchild)?;
                let mut other = Task::top_level(project.id, "Cook", 1);
                repo.save_task(&mut other)?;

                repo.remove_task(&root)?;
                repo.count_tasks_of_project(project.id)
            })
            .unwrap();
        assert_eq!(remaining, 1);
    }

    #[test]
    fn test_listings_are_ordered_by_position() {
        let backend = MemoryBackend::new();
        let names = backend
            .transact(|repo| {
                let mut project = Project::new("Home", 0);
                repo.save_project(&mut project)?;
                repo.save_task(&mut Task::top_level(project.id, "second", 1))?;
                repo.save_task(&mut Task::top_level(project.id, "first", 0))?;
                Ok(repo
                    .list_top_level_of(project.id)?
                    .into_iter()
                    .map(|task| task.task_string)
                    .collect::<Vec<_>>())
            })
            .unwrap();
        assert_eq!(names, vec!["first", "second"]);
    }
}
