//! Project model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// An ordered top-level container of tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Unique identifier for the project
    pub id: u64,

    /// Unique, non-blank name of the project
    pub name: String,

    /// Position among all projects (0-indexed)
    pub position: u32,

    /// Timestamp when the project was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the project was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Project {
    /// Creates an unsaved project at the given position.
    pub fn new(name: impl Into<String>, position: u32) -> Self {
        let now = Timestamp::now();
        Self {
            id: 0,
            name: name.into(),
            position,
            created_at: now,
            updated_at: now,
        }
    }
}
