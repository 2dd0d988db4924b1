use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{TitleBar, TodoList};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [title_area, list_area, input_area] = layout.areas(frame.area());

    let status = if app.is_loading {
        format!(
            "{} Fetching...",
            SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()]
        )
    } else {
        app.status_message.clone()
    };

    let mut title_bar = TitleBar::new(app.todos.len(), app.done_count(), status);
    title_bar.render(frame, title_area);

    TodoList {
        todos: &app.todos,
        state: &mut tui.todo_list,
        active: matches!(tui.input_mode, crate::tui::InputMode::List),
    }
    .render(frame, list_area);

    tui.input_box.render(frame, input_area);
}
