//! Task queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row};

use super::{project_queries::timestamp_column, SqliteRepository};
use crate::{
    error::{DatabaseResultExt, Result},
    models::Task,
    store::TaskStore,
};

const TASK_COLUMNS: &str =
    "id, project_id, parent_task_id, task, position, completed, created_at, updated_at";
const COUNT_TASKS_OF_PROJECT_SQL: &str = "SELECT COUNT(*) FROM tasks WHERE project_id = ?1";
const INSERT_TASK_SQL: &str = "INSERT INTO tasks (project_id, parent_task_id, task, position, completed, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_TASK_SQL: &str = "UPDATE tasks SET project_id = ?1, parent_task_id = ?2, task = ?3, position = ?4, completed = ?5, updated_at = ?6 WHERE id = ?7";
const DELETE_TASK_SQL: &str = "DELETE FROM tasks WHERE id = ?1";

fn build_task_from_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get::<_, i64>(0)? as u64,
        project_id: row.get::<_, i64>(1)? as u64,
        parent_task_id: row.get::<_, Option<i64>>(2)?.map(|id| id as u64),
        task_string: row.get(3)?,
        position: row.get::<_, u32>(4)?,
        completed: row.get(5)?,
        details: Vec::new(),
        created_at: timestamp_column(row, 6)?,
        updated_at: timestamp_column(row, 7)?,
    })
}

impl SqliteRepository<'_> {
    fn select_tasks(&self, filter: &str, id: u64) -> Result<Vec<Task>> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE {filter} ORDER BY position");
        let mut stmt = self.conn.prepare(&sql).db_context("Failed to prepare query")?;

        let tasks = stmt
            .query_map(params![id as i64], build_task_from_row)
            .db_context("Failed to query tasks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch tasks")?;

        Ok(tasks)
    }
}

impl TaskStore for SqliteRepository<'_> {
    fn list_top_level_of(&self, project_id: u64) -> Result<Vec<Task>> {
        self.select_tasks("project_id = ?1 AND parent_task_id IS NULL", project_id)
    }

    fn list_details_of(&self, parent_task_id: u64) -> Result<Vec<Task>> {
        self.select_tasks("parent_task_id = ?1", parent_task_id)
    }

    fn count_tasks_of_project(&self, project_id: u64) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row(COUNT_TASKS_OF_PROJECT_SQL, params![project_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to count tasks of project")?;
        Ok(count as usize)
    }

    fn find_task(&self, id: u64) -> Result<Option<Task>> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1");
        self.conn
            .query_row(&sql, params![id as i64], build_task_from_row)
            .optional()
            .db_context("Failed to get task")
    }

    fn save_task(&mut self, task: &mut Task) -> Result<()> {
        task.updated_at = Timestamp::now();
        let updated_at = task.updated_at.to_string();
        let parent_task_id = task.parent_task_id.map(|id| id as i64);

        if task.id == 0 {
            self.conn
                .execute(
                    INSERT_TASK_SQL,
                    params![
                        task.project_id as i64,
                        parent_task_id,
                        &task.task_string,
                        task.position as i64,
                        task.completed,
                        task.created_at.to_string(),
                        &updated_at
                    ],
                )
                .db_context("Failed to insert task")?;
            task.id = self.conn.last_insert_rowid() as u64;
        } else {
            self.conn
                .execute(
                    UPDATE_TASK_SQL,
                    params![
                        task.project_id as i64,
                        parent_task_id,
                        &task.task_string,
                        task.position as i64,
                        task.completed,
                        &updated_at,
                        task.id as i64
                    ],
                )
                .db_context("Failed to update task")?;
        }

        Ok(())
    }

    fn remove_task(&mut self, task: &Task) -> Result<()> {
        // Descendants go through the ON DELETE CASCADE on parent_task_id
        self.conn
            .execute(DELETE_TASK_SQL, params![task.id as i64])
            .db_context("Failed to delete task")?;
        Ok(())
    }
}
