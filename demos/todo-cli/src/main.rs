//! Command-line walkthrough of the todo store.
//!
//! Demonstrates the caller side of the contract: a single `Vec<Todo>` is
//! owned here and threaded through every store operation, with each call's
//! return value replacing the previous collection. Task text is validated at
//! this boundary; the store itself never fails.

use todo_store::{Todo, TodoId, ops, validate_task};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Prints the collection with a right-aligned id column, so the layout
/// holds once ids grow past one digit.
fn render(todos: &[Todo]) {
    if todos.is_empty() {
        println!("  (no todos)");
        return;
    }
    for todo in todos {
        let status = if todo.completed { "x" } else { " " };
        println!("  {:>3} [{}] {}", todo.id, status, todo.task);
    }
}

/// Validates task text before it reaches the store; rejected input leaves
/// the collection as-is.
fn add_checked(todos: &[Todo], task: &str) -> Vec<Todo> {
    match validate_task(task) {
        Ok(()) => {
            tracing::debug!(task, "adding todo");
            ops::add(todos, task)
        }
        Err(error) => {
            tracing::warn!(%error, task, "rejected task text");
            todos.to_vec()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_cli=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Todo Store Demo ===\n");

    let mut todos: Vec<Todo> = Vec::new();

    println!("Adding todos...");
    todos = add_checked(&todos, "Buy milk");
    todos = add_checked(&todos, "Write documentation");
    todos = add_checked(&todos, "Deploy to production");
    // Blank text never reaches the store.
    todos = add_checked(&todos, "   ");
    render(&todos);

    println!("\nCompleting 'Buy milk'...");
    todos = ops::toggle_completed(&todos, TodoId::new(1));
    render(&todos);

    println!("\nRewording todo 2...");
    todos = ops::edit(&todos, TodoId::new(2), "Write the user guide");
    render(&todos);

    println!("\nStill open:");
    render(&ops::filter_by_status(&todos, false));

    println!("\nDeleting todo 3...");
    todos = ops::delete(&todos, TodoId::new(3));
    render(&todos);

    // Deleting the same id again is a harmless no-op.
    todos = ops::delete(&todos, TodoId::new(3));

    println!("\nMarking everything done...");
    todos = ops::set_all_completion(&todos, true);
    render(&todos);

    println!("\nClearing completed...");
    todos = ops::clear_completed(&todos);
    println!("Remaining: {}", ops::get_all(&todos).len());

    todos = add_checked(&todos, "Plan next sprint");

    println!("\nFinal snapshot:");
    println!("{}", serde_json::to_string_pretty(&todos)?);

    println!("\n=== Demo Complete ===");
    Ok(())
}
