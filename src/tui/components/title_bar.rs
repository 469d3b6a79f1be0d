// Title bar component
//
// Renders the app title, the API being viewed and a spinner while a search
// is in flight.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let fetching = if app.view.is_fetching() {
        format!(" {} fetching", app.spinner_char())
    } else {
        String::new()
    };

    let title_text = format!(
        " 🚢 Titanic Passengers{} ──── {}",
        fetching,
        app.base_url()
    );

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
