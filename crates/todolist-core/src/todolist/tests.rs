//! Tests for the TodoList facade.

use super::*;
use crate::{
    error::ErrorKind,
    params::{CreateDetail, CreateProject, CreateTask, Id, MoveTask, RenameProject, SwapTasks},
};

async fn create_test_list() -> TodoList {
    TodoListBuilder::new()
        .in_memory()
        .build()
        .await
        .expect("Failed to create todo list")
}

async fn project_with_tasks(todo: &TodoList, name: &str, count: usize) -> (u64, Vec<u64>) {
    let project = todo
        .create_project(&CreateProject {
            name: name.to_string(),
        })
        .await
        .expect("Failed to create project");

    let mut ids = Vec::new();
    for i in 0..count {
        let task = todo
            .create_task(&CreateTask {
                project_id: project.id,
                task_string: format!("{name} task {i}"),
            })
            .await
            .expect("Failed to create task");
        ids.push(task.id);
    }
    (project.id, ids)
}

#[tokio::test]
async fn test_get_tasks_returns_trees() {
    let todo = create_test_list().await;
    let (project_id, ids) = project_with_tasks(&todo, "Home", 2).await;

    todo.create_detail(&CreateDetail {
        parent_task_id: ids[0],
        task_string: "Sub".to_string(),
    })
    .await
    .expect("Failed to create detail");

    let tasks = todo.get_tasks(&Id { id: project_id }).await.unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].details.len(), 1);
    assert_eq!(tasks[0].details[0].task_string, "Sub");

    let single = todo.get_task(&Id { id: ids[0] }).await.unwrap();
    assert_eq!(single.details.len(), 1);
}

#[tokio::test]
async fn test_failed_write_keeps_lock_usable() {
    let todo = create_test_list().await;
    let (project_id, _) = project_with_tasks(&todo, "Home", 1).await;

    let err = todo
        .rename_project(&RenameProject {
            id: project_id,
            new_name: " ".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let renamed = todo
        .rename_project(&RenameProject {
            id: project_id,
            new_name: "House".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(renamed.name, "House");
}

#[tokio::test]
async fn test_clones_serialize_appends() {
    let todo = create_test_list().await;
    let (project_id, _) = project_with_tasks(&todo, "Shared", 0).await;

    let mut handles = Vec::new();
    for i in 0..16 {
        let todo = todo.clone();
        handles.push(tokio::spawn(async move {
            todo.create_task(&CreateTask {
                project_id,
                task_string: format!("concurrent {i}"),
            })
            .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let positions: Vec<u32> = todo
        .get_tasks(&Id { id: project_id })
        .await
        .unwrap()
        .iter()
        .map(|t| t.position)
        .collect();
    assert_eq!(positions, (0..16).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_swap_and_move_through_facade() {
    let todo = create_test_list().await;
    let (first_project, first_ids) = project_with_tasks(&todo, "A", 3).await;
    let (second_project, _) = project_with_tasks(&todo, "B", 1).await;

    let (first, second) = todo
        .swap_positions_of_tasks(&SwapTasks {
            task1_id: first_ids[1],
            task2_id: first_ids[2],
        })
        .await
        .unwrap();
    assert_eq!((first.position, second.position), (2, 1));

    let moved = todo
        .move_task(&MoveTask {
            id: first_ids[0],
            new_parent_task_id: None,
            new_project_id: Some(second_project),
        })
        .await
        .unwrap();
    assert_eq!(moved.project_id, second_project);
    assert_eq!(moved.position, 1);

    let remaining = todo.get_tasks(&Id { id: first_project }).await.unwrap();
    let order: Vec<u64> = remaining.iter().map(|t| t.id).collect();
    assert_eq!(order, vec![first_ids[2], first_ids[1]]);
}
