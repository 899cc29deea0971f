use todolist_core::{
    models::{Project, Task},
    Backend, ErrorKind, SqliteBackend, TodoError,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary SQLite backend for testing
fn create_test_backend() -> (NamedTempFile, SqliteBackend) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let backend =
        SqliteBackend::open(temp_file.path().to_path_buf()).expect("Failed to open backend");
    (temp_file, backend)
}

fn saved_project(backend: &SqliteBackend, name: &str, position: u32) -> Project {
    backend
        .transact(|repo| {
            let mut project = Project::new(name, position);
            repo.save_project(&mut project)?;
            Ok(project)
        })
        .expect("Failed to save project")
}

#[test]
fn test_save_assigns_ids_and_round_trips() {
    let (_temp_file, backend) = create_test_backend();
    let project = saved_project(&backend, "Home", 0);
    assert!(project.id > 0);

    let task = backend
        .transact(|repo| {
            let mut task = Task::top_level(project.id, "Sweep", 0);
            repo.save_task(&mut task)?;
            Ok(task)
        })
        .unwrap();

    let loaded = backend.transact(|repo| repo.find_task(task.id)).unwrap();
    let loaded = loaded.expect("Task should exist");
    assert_eq!(loaded.task_string, "Sweep");
    assert_eq!(loaded.project_id, project.id);
    assert_eq!(loaded.parent_task_id, None);
    assert!(!loaded.completed);

    let by_name = backend
        .transact(|repo| repo.find_project_by_name("Home"))
        .unwrap();
    assert_eq!(by_name.map(|p| p.id), Some(project.id));
}

#[test]
fn test_error_rolls_back_every_write() {
    let (_temp_file, backend) = create_test_backend();

    let result: todolist_core::Result<()> = backend.transact(|repo| {
        let mut project = Project::new("Doomed", 0);
        repo.save_project(&mut project)?;
        Err(TodoError::ProjectNotFound { id: 42 })
    });
    assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);

    let projects = backend.transact(|repo| repo.list_projects()).unwrap();
    assert!(projects.is_empty());
}

#[test]
fn test_removing_task_cascades_to_descendants() {
    let (_temp_file, backend) = create_test_backend();
    let project = saved_project(&backend, "Tree", 0);

    let (root, grandchild) = backend
        .transact(|repo| {
            let mut root = Task::top_level(project.id, "root", 0);
            repo.save_task(&mut root)?;
            let mut child = Task::detail_of(&root, "child", 0);
            repo.save_task(&mut child)?;
            let mut grandchild = Task::detail_of(&child, "grandchild", 0);
            repo.save_task(&mut grandchild)?;
            Ok((root, grandchild))
        })
        .unwrap();

    backend.transact(|repo| repo.remove_task(&root)).unwrap();

    let count = backend
        .transact(|repo| repo.count_tasks_of_project(project.id))
        .unwrap();
    assert_eq!(count, 0);
    let gone = backend.transact(|repo| repo.find_task(grandchild.id)).unwrap();
    assert!(gone.is_none());
}

#[test]
fn test_listings_are_ordered_by_position() {
    let (_temp_file, backend) = create_test_backend();
    let project = saved_project(&backend, "Ordered", 0);

    backend
        .transact(|repo| {
            for (text, position) in [("third", 2), ("first", 0), ("second", 1)] {
                let mut task = Task::top_level(project.id, text, position);
                repo.save_task(&mut task)?;
            }
            Ok(())
        })
        .unwrap();

    let texts: Vec<String> = backend
        .transact(|repo| repo.list_top_level_of(project.id))
        .unwrap()
        .into_iter()
        .map(|t| t.task_string)
        .collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}

#[test]
fn test_legacy_database_gains_completed_column() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let conn = rusqlite::Connection::open(temp_file.path()).unwrap();
        conn.execute_batch(
            "CREATE TABLE projects (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                position INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            CREATE TABLE tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                project_id INTEGER NOT NULL REFERENCES projects (id),
                parent_task_id INTEGER REFERENCES tasks (id) ON DELETE CASCADE,
                task TEXT NOT NULL,
                position INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );",
        )
        .unwrap();
    }

    let backend = SqliteBackend::open(temp_file.path().to_path_buf())
        .expect("Failed to migrate legacy database");
    let project = saved_project(&backend, "Legacy", 0);
    let task = backend
        .transact(|repo| {
            let mut task = Task::top_level(project.id, "old", 0);
            task.completed = true;
            repo.save_task(&mut task)?;
            Ok(task)
        })
        .unwrap();

    let loaded = backend.transact(|repo| repo.find_task(task.id)).unwrap();
    assert!(loaded.expect("Task should exist").completed);
}
