//! # TitleBar Component
//!
//! Top status bar showing list progress and transient status text.
//!
//! Stateless: all three props come from elsewhere (`item_count` and
//! `done_count` from core App state, `status_message` from App state) and
//! the bar just renders what it's given.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component.
///
/// # Props
///
/// - `item_count`: Total todos in the list
/// - `done_count`: How many are completed
/// - `status_message`: Transient status (e.g. "Fetched 10 todos")
pub struct TitleBar {
    pub item_count: usize,
    pub done_count: usize,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(item_count: usize, done_count: usize, status_message: String) -> Self {
        Self {
            item_count,
            done_count,
            status_message,
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line with conditional formatting.
    ///
    /// 1. **With items**: `"Tido (3/10 done) | Fetched 10 todos"`
    /// 2. **Empty list**: `"Tido | <status>"`
    /// 3. **Nothing to say**: `"Tido"`
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut title_text = if self.item_count > 0 {
            format!("Tido ({}/{} done)", self.done_count, self.item_count)
        } else {
            String::from("Tido")
        };
        if !self.status_message.is_empty() {
            title_text.push_str(" | ");
            title_text.push_str(&self.status_message);
        }

        frame.render_widget(Span::raw(title_text), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
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
    fn test_title_bar_shows_counts() {
        let mut title_bar = TitleBar::new(10, 3, String::new());
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Tido (3/10 done)"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_title_bar_shows_status_message() {
        let mut title_bar = TitleBar::new(2, 0, "Fetched 2 todos".to_string());
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Tido (0/2 done)"));
        assert!(text.contains("| Fetched 2 todos"));
    }

    #[test]
    fn test_title_bar_empty_list() {
        let mut title_bar = TitleBar::new(0, 0, String::new());
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Tido"));
        assert!(!text.contains("done"));
    }
}
