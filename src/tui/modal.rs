// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    Close,
    /// Copy the shown passenger as JSON
    Copy,
    /// Re-fetch the shown passenger from the API
    Refresh,
}

/// Available modal types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Keyboard shortcuts
    Help,
    /// Full record of one passenger
    Detail {
        passenger_id: i64,
        /// A single-passenger fetch is outstanding
        loading: bool,
        /// Last refresh failure, if any
        error: Option<String>,
    },
}

impl Modal {
    pub fn help() -> Self {
        Modal::Help
    }

    /// Detail modal that is already fetching a fresh copy of the record
    pub fn detail(passenger_id: i64) -> Self {
        Modal::Detail {
            passenger_id,
            loading: true,
            error: None,
        }
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Detail { .. } => match key {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => ModalAction::Close,
                KeyCode::Char('y') => ModalAction::Copy,
                KeyCode::Char('r') => ModalAction::Refresh,
                _ => ModalAction::None,
            },
        }
    }

    /// Id of the passenger shown, if this is a detail modal
    pub fn passenger_id(&self) -> Option<i64> {
        match self {
            Modal::Detail { passenger_id, .. } => Some(*passenger_id),
            Modal::Help => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_closes_on_toggle_key() {
        let mut modal = Modal::help();
        assert_eq!(modal.handle_input(KeyCode::Char('?')), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('x')), ModalAction::None);
    }

    #[test]
    fn test_detail_actions() {
        let mut modal = Modal::detail(12);
        assert_eq!(modal.passenger_id(), Some(12));
        assert_eq!(modal.handle_input(KeyCode::Char('y')), ModalAction::Copy);
        assert_eq!(modal.handle_input(KeyCode::Char('r')), ModalAction::Refresh);
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
    }
}
