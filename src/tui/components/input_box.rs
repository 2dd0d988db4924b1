//! # InputBox Component
//!
//! Single-line input for the pending todo title.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter) — blank buffers are never submitted
//!
//! The buffer is internal state and is cleared when a submission is
//! emitted. `dimmed` is a prop from the parent: it marks the box inactive
//! while the list has focus.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed, buffer not blank)
    Submit(String),
    /// Text content changed (optional, if parent needs to know)
    ContentChanged,
}

/// Text input component for the pending title.
pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Inactive styling while the list has focus (Prop)
    pub dimmed: bool,
    /// Byte offset of the cursor within `buffer`
    cursor_pos: usize,
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            dimmed: false,
            cursor_pos: 0,
        }
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

/// Largest char boundary strictly before `pos`.
fn prev_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos - 1;
    while !s.is_char_boundary(p) {
        p -= 1;
    }
    p
}

/// Smallest char boundary strictly after `pos`.
fn next_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos + 1;
    while p < s.len() && !s.is_char_boundary(p) {
        p += 1;
    }
    p
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.dimmed {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Green)
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(style)
            .title("New todo");

        // Keep the cursor inside the inner width by scrolling the line.
        let inner_width = area.width.saturating_sub(2) as usize;
        let cursor_col = self.buffer[..self.cursor_pos].chars().count();
        let scroll = cursor_col.saturating_sub(inner_width.saturating_sub(1));

        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .scroll((0, scroll as u16));
        frame.render_widget(input, area);

        if !self.dimmed {
            let x = area.x + 1 + (cursor_col - scroll) as u16;
            let y = area.y + 1;
            frame.set_cursor_position((x, y));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor_pos, *c);
                self.cursor_pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Titles are single-line; flatten pasted newlines.
                let flat = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor_pos, &flat);
                self.cursor_pos += flat.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor_pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor_pos);
                    self.buffer.drain(prev..self.cursor_pos);
                    self.cursor_pos = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor_pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor_pos);
                    self.buffer.drain(self.cursor_pos..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor_pos > 0 {
                    self.cursor_pos = prev_char_boundary(&self.buffer, self.cursor_pos);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor_pos < self.buffer.len() {
                    self.cursor_pos = next_char_boundary(&self.buffer, self.cursor_pos);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor_pos != 0).then(|| {
                self.cursor_pos = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor_pos != self.buffer.len()).then(|| {
                self.cursor_pos = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                if !self.buffer.trim().is_empty() {
                    let text = std::mem::take(&mut self.buffer);
                    self.cursor_pos = 0;
                    Some(InputEvent::Submit(text))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}
