//! Input validation run before any state is touched.

use crate::error::{Result, TodoError};

/// Rejects ids that storage could never have assigned.
pub fn id(field: &str, value: u64) -> Result<u64> {
    if value == 0 {
        return Err(TodoError::invalid_input(field).with_reason("must be greater than zero"));
    }
    Ok(value)
}

/// Rejects project names that are empty or whitespace-only.
pub fn project_name<'a>(field: &str, name: &'a str) -> Result<&'a str> {
    if name.trim().is_empty() {
        return Err(TodoError::invalid_input(field).with_reason("must not be empty or whitespace-only"));
    }
    Ok(name)
}
