//! Interactive trait for components that handle keyboard input
//!
//! The App routes keys to the focused component after global keys and
//! focus-specific actions (Enter to search, Enter to open a row) are handled.

use super::Component;
use crossterm::event::KeyEvent;

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// Trait for components that handle keyboard input
///
/// # Event Flow
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// App (modal, global keys: Ctrl+C, Tab, ?, /)
///    │
///    ▼
/// App (focus actions: Enter)
///    │
///    │ if not handled
///    ▼
/// Focused Component (via Interactive trait)
/// ```
pub trait Interactive: Component {
    /// `item_count` is the number of rows the component is navigating, for
    /// components whose data lives in the view rather than in themselves
    fn handle_key(&mut self, key: KeyEvent, item_count: usize) -> Handled;

    /// Keybind hints shown in the status bar when focused
    fn focus_hint(&self) -> &'static str;
}
