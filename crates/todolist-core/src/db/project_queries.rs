//! Project queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use super::SqliteRepository;
use crate::{
    error::{DatabaseResultExt, Result},
    models::Project,
    store::ProjectStore,
};

const SELECT_PROJECTS_SQL: &str =
    "SELECT id, name, position, created_at, updated_at FROM projects ORDER BY position";
const SELECT_PROJECT_BY_ID_SQL: &str =
    "SELECT id, name, position, created_at, updated_at FROM projects WHERE id = ?1";
const SELECT_PROJECT_BY_NAME_SQL: &str =
    "SELECT id, name, position, created_at, updated_at FROM projects WHERE name = ?1";
const CHECK_PROJECT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1)";
const INSERT_PROJECT_SQL: &str =
    "INSERT INTO projects (name, position, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_PROJECT_SQL: &str =
    "UPDATE projects SET name = ?1, position = ?2, updated_at = ?3 WHERE id = ?4";
const DELETE_PROJECT_SQL: &str = "DELETE FROM projects WHERE id = ?1";

/// Parses an RFC 3339 timestamp column.
pub(super) fn timestamp_column(row: &Row, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

fn build_project_from_row(row: &Row) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        position: row.get::<_, u32>(2)?,
        created_at: timestamp_column(row, 3)?,
        updated_at: timestamp_column(row, 4)?,
    })
}

impl ProjectStore for SqliteRepository<'_> {
    fn list_projects(&self) -> Result<Vec<Project>> {
        let mut stmt = self
            .conn
            .prepare(SELECT_PROJECTS_SQL)
            .db_context("Failed to prepare query")?;

        let projects = stmt
            .query_map([], build_project_from_row)
            .db_context("Failed to query projects")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch projects")?;

        Ok(projects)
    }

    fn find_project_by_name(&self, name: &str) -> Result<Option<Project>> {
        self.conn
            .query_row(SELECT_PROJECT_BY_NAME_SQL, params![name], build_project_from_row)
            .optional()
            .db_context("Failed to get project by name")
    }

    fn find_project(&self, id: u64) -> Result<Option<Project>> {
        self.conn
            .query_row(SELECT_PROJECT_BY_ID_SQL, params![id as i64], build_project_from_row)
            .optional()
            .db_context("Failed to get project")
    }

    fn project_exists(&self, id: u64) -> Result<bool> {
        self.conn
            .query_row(CHECK_PROJECT_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check project existence")
    }

    fn save_project(&mut self, project: &mut Project) -> Result<()> {
        project.updated_at = Timestamp::now();
        let updated_at = project.updated_at.to_string();

        if project.id == 0 {
            self.conn
                .execute(
                    INSERT_PROJECT_SQL,
                    params![
                        &project.name,
                        project.position as i64,
                        project.created_at.to_string(),
                        &updated_at
                    ],
                )
                .db_context("Failed to insert project")?;
            project.id = self.conn.last_insert_rowid() as u64;
        } else {
            self.conn
                .execute(
                    UPDATE_PROJECT_SQL,
                    params![
                        &project.name,
                        project.position as i64,
                        &updated_at,
                        project.id as i64
                    ],
                )
                .db_context("Failed to update project")?;
        }

        Ok(())
    }

    fn remove_project(&mut self, project: &Project) -> Result<()> {
        self.conn
            .execute(DELETE_PROJECT_SQL, params![project.id as i64])
            .db_context("Failed to delete project")?;
        Ok(())
    }
}
