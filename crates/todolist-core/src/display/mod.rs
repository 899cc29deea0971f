//! Markdown presentation of projects, task trees and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly; collections and
//! operation outcomes go through newtype wrappers so every front end prints
//! the same text.
//!
//! ```rust
//! use todolist_core::{display::CreateResult, models::Project};
//!
//! let mut project = Project::new("Groceries", 0);
//! project.id = 1;
//!
//! let output = CreateResult::new(project).to_string();
//! assert!(output.contains("Created project with ID: 1"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::{Projects, Tasks};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, SwapResult, UpdateResult};
