//! # TodoList Component
//!
//! Scrollable, selectable view of the todo rows.
//!
//! ## Architecture
//!
//! `TodoList` is a transient component (created each frame) that wraps
//! `&'a mut TodoListState` (persistent state, owned by `TuiState`) and the
//! todo slice (props). Rows are fixed height, so scrolling is delegated to
//! ratatui's `ListState` rather than a hand-rolled layout cache.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::api::Todo;
use crate::tui::component::Component;

/// Selection and scroll state for the todo list.
/// Must be persisted in the parent TuiState.
pub struct TodoListState {
    pub list_state: ListState,
}

impl Default for TodoListState {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoListState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Move the selection down one row, stopping at the last.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    /// Move the selection up one row, stopping at the first.
    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let prev = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => len - 1,
        };
        self.list_state.select(Some(prev));
    }

    pub fn select_last(&mut self, len: usize) {
        self.list_state.select(if len == 0 { None } else { Some(len - 1) });
    }

    pub fn clear_selection(&mut self) {
        self.list_state.select(None);
    }

    /// Keep the selection valid after rows were removed or replaced.
    pub fn clamp(&mut self, len: usize) {
        match self.list_state.selected() {
            Some(_) if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }
}

/// The list of todo rows.
///
/// # Props
///
/// - `todos`: The rows to render, in display order
/// - `active`: Whether the list currently has keyboard focus
pub struct TodoList<'a> {
    pub todos: &'a [Todo],
    pub state: &'a mut TodoListState,
    pub active: bool,
}

fn row_line(todo: &Todo) -> Line<'_> {
    let (checkbox, style) = if todo.completed {
        (
            "[x] ",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        ("[ ] ", Style::default().fg(Color::Cyan))
    };
    Line::from(vec![
        Span::styled(checkbox, Style::default().fg(Color::DarkGray)),
        Span::styled(todo.title.as_str(), style),
    ])
}

impl Component for TodoList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.todos.is_empty() {
            let hint = Paragraph::new("No todos — type a title and press Enter")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(hint, area);
            return;
        }

        let items: Vec<ListItem> = self.todos.iter().map(|t| ListItem::new(row_line(t))).collect();

        let highlight = if self.active {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        let list = List::new(items)
            .highlight_style(highlight)
            .highlight_symbol("› ");

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_todos;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(todos: &[Todo], state: &mut TodoListState, active: bool) -> String {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                TodoList {
                    todos,
                    state,
                    active,
                }
                .render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_rows_with_checkboxes() {
        let todos = sample_todos();
        let mut state = TodoListState::new();
        let text = render_to_text(&todos, &mut state, false);

        assert!(text.contains("[ ] A"));
        assert!(text.contains("[x] B"));
        assert!(text.contains("[ ] C"));
    }

    #[test]
    fn test_renders_empty_hint() {
        let mut state = TodoListState::new();
        let text = render_to_text(&[], &mut state, false);
        assert!(text.contains("No todos"));
    }

    #[test]
    fn test_selection_marker_when_active() {
        let todos = sample_todos();
        let mut state = TodoListState::new();
        state.select_next(todos.len());
        let text = render_to_text(&todos, &mut state, true);
        assert!(text.contains("› "));
    }

    #[test]
    fn test_select_next_stops_at_last() {
        let mut state = TodoListState::new();
        state.select_next(2);
        assert_eq!(state.selected(), Some(0));
        state.select_next(2);
        assert_eq!(state.selected(), Some(1));
        state.select_next(2);
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_select_prev_stops_at_first() {
        let mut state = TodoListState::new();
        state.select_prev(3);
        assert_eq!(state.selected(), Some(2), "starts from the bottom");
        state.select_prev(3);
        assert_eq!(state.selected(), Some(1));
        state.select_prev(3);
        assert_eq!(state.selected(), Some(0));
        state.select_prev(3);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_selection_noop_on_empty_list() {
        let mut state = TodoListState::new();
        state.select_next(0);
        assert_eq!(state.selected(), None);
        state.select_prev(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_clamp_after_delete() {
        let mut state = TodoListState::new();
        state.select_last(3);
        assert_eq!(state.selected(), Some(2));

        state.clamp(2);
        assert_eq!(state.selected(), Some(1));

        state.clamp(0);
        assert_eq!(state.selected(), None);
    }
}
