// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, fetch outcomes)
// - Layered key dispatch to modals, global keys and the focused panel

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod search_input;
pub mod theme;
pub mod traits;
pub mod views;

use crate::client::PassengerClient;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, FetchOutcome, Focus};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use theme::Theme;
use tokio::sync::mpsc;
use traits::Handled;

/// Outstanding fetch outcomes the channel can hold before senders wait
const OUTCOME_CHANNEL_SIZE: usize = 32;

/// Run the TUI
///
/// Sets up the terminal, fetches all passengers once, runs the event loop
/// and restores the terminal when done.
pub async fn run_tui(
    client: PassengerClient,
    theme: Theme,
    log_buffer: LogBuffer,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (outcome_tx, mut outcome_rx) = mpsc::channel(OUTCOME_CHANNEL_SIZE);
    let mut app = App::new(client, theme, log_buffer, outcome_tx);

    // Initial load: empty search lists everyone
    app.submit_search();

    let result = run_event_loop(&mut terminal, &mut app, &mut outcome_rx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Handles three kinds of events:
/// 1. Keyboard input
/// 2. Timer ticks (spinner animation, toast expiry)
/// 3. Fetch outcomes from spawned request tasks
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    outcome_rx: &mut mpsc::Receiver<FetchOutcome>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some(outcome) = outcome_rx.recv() => {
                app.apply_outcome(outcome);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Ctrl+C → Modal → Search input → Global → Focus action → Component
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Layer 0: Ctrl+C quits from anywhere, even while typing
    if key_event.code == KeyCode::Char('c')
        && key_event.modifiers.contains(KeyModifiers::CONTROL)
    {
        app.should_quit = true;
        return;
    }

    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: the search input takes printable keys before global shortcuts
    if app.is_focused(Focus::Search) {
        handle_search_input(app, key_event);
        return;
    }

    // Layer 3: Global keys
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 4: Actions that depend on focus
    if handle_focus_action(app, &key_event) {
        return;
    }

    // Layer 5: Focused component
    if app.handle_key_press(key_event.code) {
        app.dispatch_to_focused(key_event);
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => {
            if app.handle_key_press(key_event.code) {
                app.close_modal();
            }
        }
        ModalAction::Copy => {
            if app.handle_key_press(key_event.code) {
                app.copy_detail();
            }
        }
        ModalAction::Refresh => app.refresh_detail(),
    }

    true
}

/// Keys while the search input has focus
///
/// Printable characters are text here, so `q`, `t` and `?` do not act as
/// shortcuts until focus leaves the input.
fn handle_search_input(app: &mut App, key_event: KeyEvent) {
    match key_event.code {
        KeyCode::Enter => {
            if app.handle_key_press(KeyCode::Enter) {
                app.submit_search();
            }
        }
        KeyCode::Esc => app.focused = Focus::Table,
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        _ => {
            if app.dispatch_to_focused(key_event) == Handled::No {
                tracing::trace!(key = ?key_event.code, "Unhandled key in search input");
            }
        }
    }
}

/// Handle global keys - returns true if handled
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let key = key_event.code;

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.modal = Some(Modal::help());
            }
            true
        }
        KeyCode::Char('t') => {
            if app.handle_key_press(key) {
                app.toggle_theme();
            }
            true
        }
        KeyCode::Char('/') => {
            app.focused = Focus::Search;
            true
        }
        KeyCode::Tab => {
            app.focus_next();
            true
        }
        KeyCode::BackTab => {
            app.focus_prev();
            true
        }
        _ => false,
    }
}

/// Enter/Space on the button searches, Enter on the table opens a row
fn handle_focus_action(app: &mut App, key_event: &KeyEvent) -> bool {
    let key = key_event.code;
    match (app.focused, key) {
        (Focus::Button, KeyCode::Enter | KeyCode::Char(' ')) => {
            if app.handle_key_press(key) {
                app.submit_search();
            }
            true
        }
        (Focus::Table, KeyCode::Enter) => {
            if app.handle_key_press(key) {
                app.open_detail();
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use crate::logging::LogBuffer;

    fn test_app() -> App {
        let client = PassengerClient::new(&ClientConfig {
            base_url: "http://127.0.0.1:9".into(),
            timeout: Duration::from_secs(1),
        })
        .unwrap();
        let (tx, _rx) = mpsc::channel(1);
        App::new(client, Theme::dark(), LogBuffer::new(), tx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_q_is_text_in_search_input() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.search_bar.value(), "q");
    }

    #[test]
    fn test_q_quits_outside_search_input() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.focused, Focus::Table);
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut app = test_app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
        assert_eq!(app.search_bar.value(), "");
    }

    #[test]
    fn test_tab_cycles_and_slash_returns_to_search() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focused, Focus::Button);
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focused, Focus::Chart);
        handle_key_event(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.focused, Focus::Button);
        handle_key_event(&mut app, key(KeyCode::Char('/')));
        assert_eq!(app.focused, Focus::Search);
    }

    #[test]
    fn test_help_modal_captures_input() {
        let mut app = test_app();
        app.focused = Focus::Chart;
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert_eq!(app.modal, Some(Modal::Help));

        handle_key_event(&mut app, key(KeyCode::Right));
        assert_eq!(app.chart.active(), 0, "modal swallows navigation");

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_chart_navigation_routes_to_component() {
        let mut app = test_app();
        app.focused = Focus::Chart;
        handle_key_event(&mut app, key(KeyCode::Right));
        assert_eq!(app.chart.active(), 1);
    }
}
