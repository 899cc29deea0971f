//! Collection wrappers with empty-collection handling.

use std::{fmt, ops::Index};

use crate::models::{Project, Task};

/// Projects in position order.
#[derive(Debug, Clone, Default)]
pub struct Projects(pub Vec<Project>);

/// Top-level tasks of one project, each carrying its detail tree.
#[derive(Debug, Clone, Default)]
pub struct Tasks(pub Vec<Task>);

macro_rules! collection {
    ($wrapper:ident, $item:ty) => {
        impl $wrapper {
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $wrapper {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $wrapper {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<$item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $wrapper {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

collection!(Projects, Project);
collection!(Tasks, Task);

impl fmt::Display for Projects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No projects found.");
        }
        for project in &self.0 {
            write!(f, "{project}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks found.");
        }
        for task in &self.0 {
            write!(f, "{task}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collections() {
        assert_eq!(Projects::default().to_string(), "No projects found.\n");
        assert_eq!(Tasks::default().to_string(), "No tasks found.\n");
    }

    #[test]
    fn test_projects_in_order() {
        let projects = Projects(vec![Project::new("First", 0), Project::new("Second", 1)]);
        let output = projects.to_string();

        let first = output.find("## First").unwrap();
        let second = output.find("## Second").unwrap();
        assert!(first < second);
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].name, "Second");
    }

    #[test]
    fn test_tasks_listed_as_one_list() {
        let tasks = Tasks(vec![Task::top_level(1, "a", 0), Task::top_level(1, "b", 1)]);
        let output = tasks.to_string();
        assert_eq!(output.lines().count(), 2);
        assert!(output.lines().all(|line| line.starts_with("- [ ]")));
    }
}
