//! Search bar component
//!
//! A text input next to a `[ Search ]` button. Typing only edits the input;
//! the App reads [`SearchBar::value`] when Enter or the button confirms.

use crate::tui::app::Focus;
use crate::tui::search_input::TextInput;
use crate::tui::traits::{Component, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

const BUTTON_WIDTH: u16 = 12;

#[derive(Debug, Default)]
pub struct SearchBar {
    input: TextInput,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }
}

/// Slice of `text` that fits in `width` cells with the cursor visible,
/// plus the cursor column relative to the slice start
fn visible_window(text: &str, cursor: usize, width: usize) -> (String, usize) {
    let chars: Vec<char> = text.chars().collect();
    let cell = |c: &char| c.width().unwrap_or(0);

    // Leave one cell for the cursor at end of text
    let room = width.saturating_sub(1);
    let mut start = 0;
    let mut prefix: usize = chars[..cursor].iter().map(cell).sum();
    while prefix > room && start < cursor {
        prefix -= cell(&chars[start]);
        start += 1;
    }

    let mut used = 0;
    let visible: String = chars[start..]
        .iter()
        .take_while(|c| {
            used += cell(*c);
            used <= width
        })
        .collect();

    (visible, prefix)
}

impl Component for SearchBar {
    fn focus_target(&self) -> Focus {
        Focus::Search
    }

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
            .split(area);

        let input_focused = self.has_focus(ctx);
        let inner_width = chunks[0].width.saturating_sub(2) as usize;
        let (visible, cursor_x) =
            visible_window(self.input.value(), self.input.cursor(), inner_width);

        let input = Paragraph::new(visible)
            .style(Style::default().fg(theme.foreground))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(theme.panel_border(input_focused))
                    .title(" Search by name "),
            );
        f.render_widget(input, chunks[0]);

        if input_focused {
            f.set_cursor_position((chunks[0].x + 1 + cursor_x as u16, chunks[0].y + 1));
        }

        let button_focused = ctx.is_focused(Focus::Button);
        let label_style = if button_focused {
            theme.selected_row()
        } else {
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD)
        };
        let button = Paragraph::new("Search")
            .alignment(Alignment::Center)
            .style(label_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(theme.panel_border(button_focused)),
            );
        f.render_widget(button, chunks[1]);
    }
}

impl Interactive for SearchBar {
    fn handle_key(&mut self, key: KeyEvent, _item_count: usize) -> Handled {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => self.input.clear(),
            KeyCode::Char('a') if ctrl => self.input.move_home(),
            KeyCode::Char('e') if ctrl => self.input.move_end(),
            KeyCode::Char(c) if !ctrl => self.input.insert(c),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> &'static str {
        "Enter:search  Ctrl+U:clear  Esc:leave"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(bar: &mut SearchBar, code: KeyCode) -> Handled {
        bar.handle_key(KeyEvent::new(code, KeyModifiers::NONE), 0)
    }

    #[test]
    fn test_typing_edits_value() {
        let mut bar = SearchBar::new();
        for c in "Smiht".chars() {
            press(&mut bar, KeyCode::Char(c));
        }
        press(&mut bar, KeyCode::Backspace);
        press(&mut bar, KeyCode::Backspace);
        press(&mut bar, KeyCode::Char('t'));
        press(&mut bar, KeyCode::Char('h'));
        assert_eq!(bar.value(), "Smith");
    }

    #[test]
    fn test_action_keys_are_not_consumed() {
        let mut bar = SearchBar::new();
        assert_eq!(press(&mut bar, KeyCode::Enter), Handled::No);
        assert_eq!(press(&mut bar, KeyCode::Tab), Handled::No);
        assert_eq!(press(&mut bar, KeyCode::Esc), Handled::No);
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut bar = SearchBar::new();
        press(&mut bar, KeyCode::Char('x'));
        let handled = bar.handle_key(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            0,
        );
        assert_eq!(handled, Handled::Yes);
        assert_eq!(bar.value(), "");
    }

    #[test]
    fn test_visible_window_fits() {
        assert_eq!(visible_window("Smith", 5, 20), ("Smith".to_string(), 5));
        assert_eq!(visible_window("Smith", 0, 20), ("Smith".to_string(), 0));
    }

    #[test]
    fn test_visible_window_scrolls_to_cursor() {
        // width 5: room for 4 chars before the cursor cell
        let (visible, x) = visible_window("abcdefgh", 8, 5);
        assert_eq!(visible, "efgh");
        assert_eq!(x, 4);

        let (visible, x) = visible_window("abcdefgh", 2, 5);
        assert_eq!(visible, "abcde");
        assert_eq!(x, 2);
    }
}
