//! The ordered-hierarchy positioning engine.
//!
//! Every function here runs against a [`Repository`](crate::store::Repository)
//! that is already inside a transaction, validates first, and only then
//! writes. Callers are expected to serialize mutating calls and to roll the
//! transaction back when an error is returned; [`crate::TodoList`] does both.
//!
//! Three kinds of sibling group share one ordering discipline: all projects,
//! the top-level tasks of a project, and the details of a task. Within each
//! group positions are always exactly `0..n`.
//!
//! - [`positions`]: appending to a group and closing the gap an item leaves
//! - [`swap`]: exchanging the positions of two adjacent siblings
//! - [`projects`]: project lifecycle and its existence and containment guards
//! - [`tasks`]: task and detail lifecycle, listing and re-parenting
//! - [`completion`]: the completed flag

pub mod completion;
pub mod positions;
pub mod projects;
pub mod swap;
pub mod tasks;


pub use positions::SiblingGroup;
