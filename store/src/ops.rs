//! Pure operations over a todo collection.
//!
//! Every operation takes the current collection and returns a new one; the
//! input is never modified. The caller owns the "current" collection,
//! replaces it with the returned value, and can therefore detect change by
//! comparing values instead of inspecting individual fields. That contract
//! is what lets reactive consumers (a UI state slot, a watch channel) treat
//! the collection as an opaque snapshot.
//!
//! Operations addressed by id treat a missing id as a no-op rather than an
//! error, so stale callers (a delete fired twice, a toggle racing a clear)
//! cannot crash. All operations are total: the empty collection is valid
//! input everywhere.

use crate::types::{Todo, TodoId};

/// Returns the id the next added todo will receive: one past the current
/// maximum, or `1` for an empty collection.
///
/// Gaps in the id sequence are never backfilled; ids `{1, 2, 4}` yield `5`.
#[must_use]
pub fn next_id(todos: &[Todo]) -> TodoId {
    let max = todos.iter().map(|todo| todo.id.value()).max().unwrap_or(0);
    TodoId::new(max + 1)
}

/// Appends a new todo with the given task text.
///
/// The new todo gets its id from [`next_id`], starts with `completed` set to
/// `false`, and is placed at the end of the returned collection.
#[must_use]
pub fn add(todos: &[Todo], task: &str) -> Vec<Todo> {
    let mut next = todos.to_vec();
    next.push(Todo::new(next_id(todos), task));
    next
}

/// Flips the completion flag on the todo with the given id.
///
/// Todos with other ids are carried over unchanged. A missing id is a no-op.
#[must_use]
pub fn toggle_completed(todos: &[Todo], id: TodoId) -> Vec<Todo> {
    todos
        .iter()
        .map(|todo| {
            if todo.id == id {
                todo.toggled()
            } else {
                todo.clone()
            }
        })
        .collect()
}

/// Removes the todo with the given id.
///
/// Given the uniqueness invariant this drops at most one record. A missing
/// id is a no-op.
#[must_use]
pub fn delete(todos: &[Todo], id: TodoId) -> Vec<Todo> {
    todos.iter().filter(|todo| todo.id != id).cloned().collect()
}

/// Replaces the task text on the todo with the given id.
///
/// `id` and `completed` are preserved on the match; other todos are carried
/// over unchanged. A missing id is a no-op.
#[must_use]
pub fn edit(todos: &[Todo], id: TodoId, task: &str) -> Vec<Todo> {
    todos
        .iter()
        .map(|todo| {
            if todo.id == id {
                todo.with_task(task)
            } else {
                todo.clone()
            }
        })
        .collect()
}

/// Removes every completed todo, preserving the relative order of the rest.
#[must_use]
pub fn clear_completed(todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|todo| !todo.completed).cloned().collect()
}

/// Read accessor for the whole collection.
///
/// Exists so all access to the store flows through one function surface.
#[must_use]
pub const fn get_all(todos: &[Todo]) -> &[Todo] {
    todos
}

/// Returns the todos whose completion flag equals `completed`, in order.
#[must_use]
pub fn filter_by_status(todos: &[Todo], completed: bool) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| todo.completed == completed)
        .cloned()
        .collect()
}

/// Sets the completion flag on every todo; ids and task text are untouched.
#[must_use]
pub fn set_all_completion(todos: &[Todo], completed: bool) -> Vec<Todo> {
    todos
        .iter()
        .map(|todo| todo.with_completed(completed))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: u64, task: &str, completed: bool) -> Todo {
        Todo {
            id: TodoId::new(id),
            task: task.to_string(),
            completed,
        }
    }

    #[test]
    fn add_to_empty_collection() {
        let todos = add(&[], "buy milk");

        assert_eq!(todos, vec![todo(1, "buy milk", false)]);
    }

    #[test]
    fn add_appends_at_the_end() {
        let todos = vec![todo(1, "a", true), todo(2, "b", false)];
        let next = add(&todos, "c");

        assert_eq!(next.len(), 3);
        assert_eq!(next[2], todo(3, "c", false));
        // Existing entries keep their order and fields.
        assert_eq!(&next[..2], &todos[..]);
    }

    #[test]
    fn add_skips_id_gaps() {
        let todos = vec![todo(1, "a", false), todo(2, "b", false), todo(4, "c", false)];
        let next = add(&todos, "x");

        assert_eq!(next[3].id, TodoId::new(5));
    }

    #[test]
    fn add_leaves_input_unchanged() {
        let todos = vec![todo(1, "a", false)];
        let snapshot = todos.clone();

        let _ = add(&todos, "b");

        assert_eq!(todos, snapshot);
    }

    #[test]
    fn next_id_on_empty_collection_is_one() {
        assert_eq!(next_id(&[]), TodoId::new(1));
    }

    #[test]
    fn toggle_flips_only_the_match() {
        let todos = vec![todo(1, "a", false), todo(2, "b", false)];
        let next = toggle_completed(&todos, TodoId::new(1));

        assert_eq!(next, vec![todo(1, "a", true), todo(2, "b", false)]);
    }

    #[test]
    fn toggle_twice_restores_the_flag() {
        let todos = vec![todo(1, "a", false)];
        let next = toggle_completed(&toggle_completed(&todos, TodoId::new(1)), TodoId::new(1));

        assert_eq!(next, todos);
    }

    #[test]
    fn toggle_missing_id_is_a_noop() {
        let todos = vec![todo(1, "a", false)];

        assert_eq!(toggle_completed(&todos, TodoId::new(99)), todos);
    }

    #[test]
    fn delete_removes_exactly_the_match() {
        let todos = vec![todo(1, "a", false), todo(2, "b", true), todo(3, "c", false)];
        let next = delete(&todos, TodoId::new(2));

        assert_eq!(next, vec![todo(1, "a", false), todo(3, "c", false)]);
    }

    #[test]
    fn delete_missing_id_is_a_noop() {
        let todos = vec![todo(1, "a", false)];

        assert_eq!(delete(&todos, TodoId::new(2)), todos);
        assert_eq!(delete(&[], TodoId::new(1)), Vec::new());
    }

    #[test]
    fn deleted_id_is_not_reused_while_larger_ids_remain() {
        let todos = vec![todo(1, "a", false), todo(2, "b", false)];
        let next = add(&delete(&todos, TodoId::new(1)), "c");

        assert_eq!(next[1].id, TodoId::new(3));
    }

    #[test]
    fn edit_replaces_task_text_only() {
        let todos = vec![todo(1, "a", true), todo(2, "b", false)];
        let next = edit(&todos, TodoId::new(1), "a2");

        assert_eq!(next, vec![todo(1, "a2", true), todo(2, "b", false)]);
    }

    #[test]
    fn edit_missing_id_is_a_noop() {
        let todos = vec![todo(1, "a", false)];

        assert_eq!(edit(&todos, TodoId::new(7), "x"), todos);
    }

    #[test]
    fn clear_completed_keeps_open_todos_in_order() {
        let todos = vec![todo(1, "a", true), todo(2, "b", false)];

        assert_eq!(clear_completed(&todos), vec![todo(2, "b", false)]);
    }

    #[test]
    fn clear_completed_is_idempotent() {
        let todos = vec![todo(1, "a", true), todo(2, "b", false), todo(3, "c", true)];
        let once = clear_completed(&todos);
        let twice = clear_completed(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn get_all_is_identity() {
        let todos = vec![todo(1, "a", false)];

        assert_eq!(get_all(&todos), &todos[..]);
        assert!(get_all(&[]).is_empty());
    }

    #[test]
    fn filter_by_status_selects_matching_flag() {
        let todos = vec![todo(1, "a", true), todo(2, "b", false)];

        assert_eq!(filter_by_status(&todos, true), vec![todo(1, "a", true)]);
        assert_eq!(filter_by_status(&todos, false), vec![todo(2, "b", false)]);
    }

    #[test]
    fn set_all_completion_touches_every_flag() {
        let todos = vec![todo(1, "a", false), todo(2, "b", true)];

        let done = set_all_completion(&todos, true);
        assert!(done.iter().all(|t| t.completed));
        assert_eq!(done[0].task, "a");
        assert_eq!(done[1].id, TodoId::new(2));

        let open = set_all_completion(&todos, false);
        assert!(open.iter().all(|t| !t.completed));
    }
}
