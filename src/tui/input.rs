// Key debouncing for action keys
//
// Most terminals never send key release events, so a held Enter arrives as a
// stream of presses. Action keys (Enter on the Search button, quit, theme
// toggle) are debounced so one physical press triggers one search. Navigation
// keys pass straight through and rely on the terminal's own autorepeat.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between two triggers of the same action key
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// Defines how a key should behave when pressed/held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Trigger at most once per debounce window, or once per press when the
    /// terminal reports releases
    StateChange,
    /// Trigger on every press event
    Repeatable,
}

#[derive(Debug, Default)]
struct KeyState {
    is_pressed: bool,
    last_triggered: Option<Instant>,
}

pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
    debounce: Duration,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
            debounce: ACTION_DEBOUNCE,
        }
    }

    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.key_behaviors.insert(*key, behavior);
        }
    }

    /// Handle a key press event. Returns true if the action should trigger.
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.handle_key_press_at(key, Instant::now())
    }

    fn handle_key_press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::Repeatable);

        if behavior == KeyBehavior::Repeatable {
            return true;
        }

        let state = self.key_states.entry(key).or_default();
        let fresh_press = !state.is_pressed;
        let window_passed = state
            .last_triggered
            .map_or(true, |last| now.duration_since(last) >= self.debounce);

        state.is_pressed = true;
        if fresh_press || window_passed {
            state.last_triggered = Some(now);
            true
        } else {
            false
        }
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            state.is_pressed = false;
        }
    }

    /// Action keys debounced, everything else repeatable
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();
        handler.configure_keys(
            &[
                KeyCode::Enter,
                KeyCode::Esc,
                KeyCode::Char('q'),
                KeyCode::Char('Q'),
                KeyCode::Char('t'),
                KeyCode::Char('y'),
                KeyCode::Char('?'),
            ],
            KeyBehavior::StateChange,
        );
        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_change_debounces_held_key() {
        let mut handler = InputHandler::new();
        handler.configure_keys(&[KeyCode::Enter], KeyBehavior::StateChange);
        let start = Instant::now();

        assert!(handler.handle_key_press_at(KeyCode::Enter, start));
        // Autorepeat without release inside the window is swallowed
        assert!(!handler.handle_key_press_at(KeyCode::Enter, start + Duration::from_millis(30)));
        assert!(!handler.handle_key_press_at(KeyCode::Enter, start + Duration::from_millis(100)));
        // Past the window it fires again
        assert!(handler.handle_key_press_at(KeyCode::Enter, start + Duration::from_millis(300)));
    }

    #[test]
    fn test_release_allows_immediate_press() {
        let mut handler = InputHandler::new();
        handler.configure_keys(&[KeyCode::Enter], KeyBehavior::StateChange);
        let start = Instant::now();

        assert!(handler.handle_key_press_at(KeyCode::Enter, start));
        handler.handle_key_release(KeyCode::Enter);
        assert!(handler.handle_key_press_at(KeyCode::Enter, start + Duration::from_millis(10)));
    }

    #[test]
    fn test_navigation_keys_always_trigger() {
        let mut handler = InputHandler::with_default_config();
        for _ in 0..5 {
            assert!(handler.handle_key_press(KeyCode::Down));
        }
    }
}
