//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms so the fetch spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor
//! because ratatui's `set_cursor_position` resets the terminal's blink
//! timer on every `draw()` call, making blinking cursors appear erratic
//! during continuous redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::api::{HttpStore, RemoteStore, Todo};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, TodoListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Text editing in the input box. Esc switches to List.
    Input,
    /// Navigate rows with arrow keys. Typing auto-switches to Input.
    List,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub todo_list: TodoListState,
    pub input_box: InputBox,
    // Modal input mode
    pub input_mode: InputMode,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            todo_list: TodoListState::new(),
            input_box: InputBox::new(),
            input_mode: InputMode::Input, // User expects to type immediately
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let store: Arc<dyn RemoteStore> = Arc::new(HttpStore::new(config.base_url.clone()));
    let mut app = App::new(store, config.fetch_limit);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut should_quit = false;

    // Initial load: one read request before the first frame.
    let effect = update(&mut app, Action::Refresh);
    run_effect(effect, &app, &tx, &mut should_quit);

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync InputBox props with TUI state
        tui.input_box.dimmed = matches!(tui.input_mode, InputMode::List);

        // The spinner animates while a fetch is in flight
        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                let effect = update(&mut app, Action::Quit);
                run_effect(effect, &app, &tx, &mut should_quit);
                continue;
            }

            // Ctrl+R re-fetches in either mode
            if matches!(event, TuiEvent::Refresh) {
                let effect = update(&mut app, Action::Refresh);
                run_effect(effect, &app, &tx, &mut should_quit);
                continue;
            }

            // Modal event dispatch
            match tui.input_mode {
                InputMode::Input => {
                    // Esc → switch to List mode, selecting the last row
                    if matches!(event, TuiEvent::Escape) {
                        tui.input_mode = InputMode::List;
                        tui.todo_list.select_last(app.todos.len());
                        continue;
                    }

                    // InputBox handles everything else
                    if let Some(InputEvent::Submit(text)) = tui.input_box.handle_event(&event) {
                        let effect = update(&mut app, Action::Submit(text));
                        run_effect(effect, &app, &tx, &mut should_quit);
                    }
                }
                InputMode::List => match event {
                    // Esc in List mode is a no-op
                    TuiEvent::Escape => {}
                    // Enter switches back to Input mode
                    TuiEvent::Submit => {
                        tui.input_mode = InputMode::Input;
                        tui.todo_list.clear_selection();
                    }
                    TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                        tui.todo_list.select_prev(app.todos.len());
                    }
                    TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                        tui.todo_list.select_next(app.todos.len());
                    }
                    // Space toggles the selected row, local only
                    TuiEvent::InputChar(' ') => {
                        if let Some(id) = selected_id(&app, &tui) {
                            let effect = update(&mut app, Action::Toggle(id));
                            run_effect(effect, &app, &tx, &mut should_quit);
                        }
                    }
                    // d/Delete/Backspace removes the selected row, local only
                    TuiEvent::InputChar('d') | TuiEvent::Delete | TuiEvent::Backspace => {
                        if let Some(id) = selected_id(&app, &tui) {
                            let effect = update(&mut app, Action::Delete(id));
                            run_effect(effect, &app, &tx, &mut should_quit);
                            tui.todo_list.clamp(app.todos.len());
                        }
                    }
                    TuiEvent::InputChar('r') => {
                        let effect = update(&mut app, Action::Refresh);
                        run_effect(effect, &app, &tx, &mut should_quit);
                    }
                    TuiEvent::InputChar('q') => {
                        let effect = update(&mut app, Action::Quit);
                        run_effect(effect, &app, &tx, &mut should_quit);
                    }
                    // Typing auto-switches to Input mode and forwards the event
                    TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                        tui.input_mode = InputMode::Input;
                        tui.todo_list.clear_selection();
                        tui.input_box.handle_event(&event);
                    }
                    _ => {}
                },
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (fetch completions)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            run_effect(effect, &app, &tx, &mut should_quit);
            // A replaced list can be shorter than the current selection
            tui.todo_list.clamp(app.todos.len());
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Id of the currently selected row, if any.
fn selected_id(app: &App, tui: &TuiState) -> Option<String> {
    tui.todo_list
        .selected()
        .and_then(|idx| app.todos.get(idx))
        .map(|todo| todo.id.clone())
}

/// Executes the I/O an `update()` step asked for.
fn run_effect(effect: Effect, app: &App, tx: &mpsc::Sender<Action>, should_quit: &mut bool) {
    match effect {
        Effect::None => {}
        Effect::Quit => *should_quit = true,
        Effect::SpawnFetch => spawn_fetch(app, tx.clone()),
        Effect::SpawnCreate(todo) => spawn_create(app, todo),
    }
}

/// Fetch in the background; the outcome re-enters the loop as an Action.
fn spawn_fetch(app: &App, tx: mpsc::Sender<Action>) {
    info!("Spawning fetch (limit={})", app.fetch_limit);

    let store = app.store.clone();
    let limit = app.fetch_limit;

    tokio::spawn(async move {
        match store.fetch(limit).await {
            Ok(todos) => {
                if tx.send(Action::TodosFetched(todos)).is_err() {
                    warn!("Failed to send fetched todos: receiver dropped");
                }
            }
            Err(e) => {
                // Log-only: the list stays as it is, no retry, no user-facing error.
                warn!("Fetch failed: {}", e);
                if tx.send(Action::FetchFailed).is_err() {
                    warn!("Failed to send fetch failure: receiver dropped");
                }
            }
        }
    });
}

/// Create in the background. The local list was already updated; a failure
/// is logged and never rolls it back.
fn spawn_create(app: &App, todo: Todo) {
    info!("Spawning create for todo {}", todo.id);

    let store = app.store.clone();

    tokio::spawn(async move {
        match store.create(&todo).await {
            Ok(()) => debug!("Create acknowledged for {}", todo.id),
            Err(e) => warn!("Create failed for {}: {}", todo.id, e),
        }
    });
}
