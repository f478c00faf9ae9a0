//! Domain types for the todo store.
//!
//! A [`Todo`] is a record with exactly three fields: an id assigned by the
//! store, the task text, and a completion flag. Records are updated through
//! copy-override constructors rather than in-place mutation, so a collection
//! handed to the operations in [`crate::ops`] is never changed behind the
//! caller's back.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum accepted task length, in characters.
pub const MAX_TASK_LEN: usize = 500;

/// Unique identifier for a todo item.
///
/// Ids are assigned by [`crate::ops::add`], never supplied by the caller:
/// a new id is always one past the largest id currently in the collection,
/// so ids within a collection stay pairwise distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, assigned by the store
    pub id: TodoId,
    /// Text content of the task
    pub task: String,
    /// Whether the task is completed
    pub completed: bool,
}

impl Todo {
    /// Creates a new todo with `completed` set to `false`.
    #[must_use]
    pub fn new(id: TodoId, task: impl Into<String>) -> Self {
        Self {
            id,
            task: task.into(),
            completed: false,
        }
    }

    /// Returns a copy of this todo with the task text replaced.
    #[must_use]
    pub fn with_task(&self, task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            ..self.clone()
        }
    }

    /// Returns a copy of this todo with `completed` set to the given value.
    #[must_use]
    pub fn with_completed(&self, completed: bool) -> Self {
        Self {
            completed,
            ..self.clone()
        }
    }

    /// Returns a copy of this todo with `completed` flipped.
    #[must_use]
    pub fn toggled(&self) -> Self {
        self.with_completed(!self.completed)
    }
}

/// Validation errors for caller-supplied task text.
///
/// The operation surface in [`crate::ops`] is total and never returns these.
/// Callers validate input at the boundary, before handing text to `add` or
/// `edit`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// Task text is empty after trimming.
    #[error("task text cannot be empty")]
    EmptyTask,

    /// Task text exceeds [`MAX_TASK_LEN`] characters.
    #[error("task text too long (max {MAX_TASK_LEN} characters)")]
    TaskTooLong,
}

/// Checks caller-supplied task text before it enters the store.
///
/// # Errors
///
/// Returns [`TodoError::EmptyTask`] if the text is empty after trimming, or
/// [`TodoError::TaskTooLong`] if it exceeds [`MAX_TASK_LEN`] characters.
pub fn validate_task(task: &str) -> Result<(), TodoError> {
    if task.trim().is_empty() {
        return Err(TodoError::EmptyTask);
    }

    if task.chars().count() > MAX_TASK_LEN {
        return Err(TodoError::TaskTooLong);
    }

    Ok(())
}
