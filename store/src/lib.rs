//! # Todo Store
//!
//! Pure, immutable-update operations over an in-memory todo collection.
//!
//! The store is a set of stateless functions: each takes the current
//! collection (plus operation-specific arguments) and returns a fresh
//! collection, never mutating the input. State lives with the caller, which
//! threads the latest returned value into the next call. Because every
//! change produces a new value, consumers can detect updates by comparing
//! collections instead of tracking individual fields.
//!
//! Ids are assigned by the store: a new todo always receives one past the
//! largest existing id, so ids stay unique and gaps left by deletions are
//! never backfilled. Operations addressed at an id that is no longer present
//! are harmless no-ops, which keeps the surface resilient to stale callers.
//!
//! # Quick Start
//!
//! ```
//! use todo_store::{ops, TodoId};
//!
//! let todos = ops::add(&[], "Buy milk");
//! let todos = ops::add(&todos, "Write documentation");
//! let todos = ops::toggle_completed(&todos, TodoId::new(1));
//!
//! assert_eq!(todos.len(), 2);
//! assert!(todos[0].completed);
//!
//! let open = ops::filter_by_status(&todos, false);
//! assert_eq!(open.len(), 1);
//! assert_eq!(open[0].task, "Write documentation");
//!
//! let todos = ops::clear_completed(&todos);
//! assert_eq!(todos.len(), 1);
//! ```

pub mod ops;
pub mod types;

// Re-export commonly used types
pub use types::{MAX_TASK_LEN, Todo, TodoError, TodoId, validate_task};
