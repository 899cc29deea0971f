//! Display implementations for projects and tasks.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Project, Task};

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Position**: {}", self.position)?;
        writeln!(f, "- **Created**: {}", LocalDateTime::new(&self.created_at))?;
        writeln!(f)
    }
}

impl Task {
    fn checkbox(&self) -> &'static str {
        if self.completed { "[x]" } else { "[ ]" }
    }

    /// Writes the task as a markdown list item followed by its details,
    /// indented one level deeper per generation.
    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(
            f,
            "{:indent$}- {} {} (ID: {})",
            "",
            self.checkbox(),
            self.task_string,
            self.id,
            indent = depth * 2
        )?;
        for detail in &self.details {
            detail.fmt_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(id: u64, text: &str, parent: Option<&Task>) -> Task {
        let mut task = match parent {
            Some(parent) => Task::detail_of(parent, text, 0),
            None => Task::top_level(1, text, 0),
        };
        task.id = id;
        task
    }

    #[test]
    fn test_task_tree_nests_details() {
        let mut root = saved(1, "Plan trip", None);
        let mut child = saved(2, "Book hotel", Some(&root));
        child.completed = true;
        let grandchild = saved(3, "Compare prices", Some(&child));
        child.details.push(grandchild);
        root.details.push(child);

        let output = root.to_string();
        assert_eq!(
            output,
            "- [ ] Plan trip (ID: 1)\n  - [x] Book hotel (ID: 2)\n    - [ ] Compare prices (ID: 3)\n"
        );
    }

    #[test]
    fn test_project_display() {
        let mut project = Project::new("Home", 2);
        project.id = 5;

        let output = project.to_string();
        assert!(output.starts_with("## Home (ID: 5)"));
        assert!(output.contains("- **Position**: 2"));
    }
}
