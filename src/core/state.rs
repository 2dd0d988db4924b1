//! # Application State
//!
//! Core business state for Tido. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── store: Arc<dyn RemoteStore>   // remote endpoint handle
//! ├── todos: Vec<Todo>              // the list, insertion order
//! ├── status_message: String        // title bar text
//! ├── is_loading: bool              // a fetch is in flight
//! └── fetch_limit: u32              // _limit for fetches
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::api::{RemoteStore, Todo};

pub struct App {
    pub store: Arc<dyn RemoteStore>,
    pub todos: Vec<Todo>,
    pub status_message: String,
    pub is_loading: bool,
    pub fetch_limit: u32,
}

impl App {
    pub fn new(store: Arc<dyn RemoteStore>, fetch_limit: u32) -> Self {
        Self {
            store,
            todos: Vec::new(),
            status_message: String::new(),
            is_loading: false,
            fetch_limit,
        }
    }

    /// Number of completed todos.
    pub fn done_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }
}
