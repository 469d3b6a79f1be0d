//! Core component trait - the foundation of the UI system
//!
//! Every panel that draws passenger data implements `Component`.

use crate::tui::app::Focus;
use crate::tui::theme::Theme;
use crate::view::PassengerView;
use ratatui::{layout::Rect, Frame};

/// Immutable context passed to components during rendering
///
/// Components read the view state through this instead of reaching into
/// `App`, so rendering never mutates passengers or buckets.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub theme: &'a Theme,

    /// Which panel currently has focus
    pub focus: Focus,

    /// Animation frame counter (for the fetch spinner)
    pub animation_frame: usize,

    /// Current search, passengers and buckets
    pub view: &'a PassengerView,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        theme: &'a Theme,
        focus: Focus,
        animation_frame: usize,
        view: &'a PassengerView,
    ) -> Self {
        Self {
            theme,
            focus,
            animation_frame,
            view,
        }
    }

    pub fn is_focused(&self, target: Focus) -> bool {
        self.focus == target
    }

    /// Spinner character for the current animation frame
    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}

/// Base trait for all UI components
///
/// `render` takes `&mut self` because stateful widgets (the table's
/// selection and scroll offset) update their state while drawing.
pub trait Component {
    /// Focus target this component answers to
    fn focus_target(&self) -> Focus;

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext);

    fn has_focus(&self, ctx: &RenderContext) -> bool {
        ctx.is_focused(self.focus_target())
    }
}
