//! # TUI Components
//!
//! Components follow two patterns, mirroring each other the way React
//! components do:
//!
//! - **Stateless (props-based)**: `TitleBar` receives all data as fields
//!   and just renders it.
//! - **Stateful (event-driven)**: `InputBox` owns its text buffer and
//!   emits `InputEvent`s; `TodoList` wraps persistent selection state
//!   owned by `TuiState`.
//!
//! Each component file co-locates its state types, event types, rendering
//! logic, and tests.

mod input_box;
mod title_bar;
mod todo_list;

pub use input_box::{InputBox, InputEvent};
pub use title_bar::TitleBar;
pub use todo_list::{TodoList, TodoListState};
