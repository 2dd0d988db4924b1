//! # Actions
//!
//! Everything that can happen in Tido becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The fetch task finishes? That's `Action::TodosFetched(todos)`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state in place. I/O never happens here: when a step needs
//! the network, `update()` returns an `Effect` and the event loop spawns
//! the task.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply an action, assert on the state
//! and the returned effect.

use log::debug;

use crate::api::Todo;
use crate::core::state::App;

/// Everything that can happen in the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// User submitted a new title from the input box.
    Submit(String),
    /// User toggled the completed flag of the todo with this id.
    Toggle(String),
    /// User deleted the todo with this id.
    Delete(String),
    /// User asked for a re-fetch (also issued once at startup).
    Refresh,
    /// A fetch task finished; the list is replaced with the response.
    TodosFetched(Vec<Todo>),
    /// A fetch task failed. Details were already logged at the spawn site.
    FetchFailed,
    /// User asked to quit.
    Quit,
}

/// I/O the event loop must perform after a reducer step.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Spawn a background fetch for up to `App::fetch_limit` items.
    SpawnFetch,
    /// Spawn a background create for this todo.
    SpawnCreate(Todo),
    Quit,
}

/// Applies `action` to `state` and returns the effect the loop must run.
pub fn update(state: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Submit(title) => {
            // Blank titles are a no-op; the stored title keeps its raw form.
            if title.trim().is_empty() {
                return Effect::None;
            }
            let todo = Todo::new(title);
            state.todos.push(todo.clone());
            state.status_message = format!("Added \"{}\"", todo.title.trim());
            Effect::SpawnCreate(todo)
        }
        Action::Toggle(id) => {
            if let Some(todo) = state.todos.iter_mut().find(|t| t.id == id) {
                todo.completed = !todo.completed;
            }
            Effect::None
        }
        Action::Delete(id) => {
            state.todos.retain(|t| t.id != id);
            Effect::None
        }
        Action::Refresh => {
            if state.is_loading {
                return Effect::None;
            }
            state.is_loading = true;
            Effect::SpawnFetch
        }
        Action::TodosFetched(todos) => {
            state.is_loading = false;
            state.status_message = format!("Fetched {} todos", todos.len());
            state.todos = todos;
            Effect::None
        }
        Action::FetchFailed => {
            // The list stays as it was and the user sees no error.
            state.is_loading = false;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
