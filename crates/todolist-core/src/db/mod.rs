//! SQLite persistence for projects and tasks.
//!
//! This module provides the durable implementation of the store traits in
//! [`crate::store`]. A [`Database`] owns one connection; [`SqliteBackend`]
//! opens a fresh connection per unit of work and runs it inside a single
//! SQLite transaction.
//!
//! Mutations begin `IMMEDIATE`, taking the write lock before their first read,
//! so a competing connection (another handle or another process on the same
//! file) waits out [`BUSY_TIMEOUT`] instead of failing a lock upgrade. Reads
//! begin `DEFERRED` and never block writers.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{Connection, TransactionBehavior};

use crate::{
    error::{DatabaseResultExt, Result},
    store::{Backend, Repository},
};

pub mod migrations;
pub mod project_queries;
pub mod task_queries;

/// How long a connection waits on a lock held by another connection.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to configure busy timeout")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Runs `op` inside one write transaction on this connection.
    pub fn transact<T, F>(&mut self, op: F) -> Result<T>
    where
        F: FnOnce(&mut dyn Repository) -> Result<T>,
    {
        self.transact_with(TransactionBehavior::Immediate, op)
    }

    /// Runs a read-only `op` inside one deferred transaction.
    pub fn read<T, F>(&mut self, op: F) -> Result<T>
    where
        F: FnOnce(&dyn Repository) -> Result<T>,
    {
        self.transact_with(TransactionBehavior::Deferred, |repo| op(&*repo))
    }

    fn transact_with<T, F>(&mut self, behavior: TransactionBehavior, op: F) -> Result<T>
    where
        F: FnOnce(&mut dyn Repository) -> Result<T>,
    {
        let tx = self
            .connection
            .transaction_with_behavior(behavior)
            .db_context("Failed to begin transaction")?;

        // Dropping `tx` without committing rolls it back.
        let output = op(&mut SqliteRepository { conn: &tx })?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(output)
    }
}

/// Store view over a connection that is inside a transaction.
pub struct SqliteRepository<'a> {
    conn: &'a Connection,
}

/// Backend storing everything in an SQLite file.
#[derive(Debug, Clone)]
pub struct SqliteBackend {
    db_path: PathBuf,
}

impl SqliteBackend {
    /// Opens the database once so the schema exists before first use.
    pub fn open(db_path: PathBuf) -> Result<Self> {
        Database::new(&db_path)?;
        Ok(Self { db_path })
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }
}

impl Backend for SqliteBackend {
    fn transact<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut dyn Repository) -> Result<T>,
    {
        Database::new(&self.db_path)?.transact(op)
    }

    fn read<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&dyn Repository) -> Result<T>,
    {
        Database::new(&self.db_path)?.read(op)
    }
}
