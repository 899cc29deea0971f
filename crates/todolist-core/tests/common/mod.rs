use todolist_core::{
    params::{CreateProject, CreateTask},
    Project, Task, TodoList, TodoListBuilder,
};
use tempfile::TempDir;

/// Creates a todo list backed by an SQLite file in a fresh temp dir.
pub async fn create_test_list() -> (TempDir, TodoList) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let todo = TodoListBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create todo list");
    (temp_dir, todo)
}

pub async fn create_project(todo: &TodoList, name: &str) -> Project {
    todo.create_project(&CreateProject {
        name: name.to_string(),
    })
    .await
    .expect("Failed to create project")
}

pub async fn create_task(todo: &TodoList, project_id: u64, task_string: &str) -> Task {
    todo.create_task(&CreateTask {
        project_id,
        task_string: task_string.to_string(),
    })
    .await
    .expect("Failed to create task")
}
