// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Help modal: keyboard shortcuts and current theme
// - Detail modal: every field of one passenger

use crate::model::{Passenger, COLUMNS};
use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Detail {
            passenger_id,
            loading,
            error,
        } => render_detail(f, app, *passenger_id, *loading, error.as_deref()),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_help(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let key_style = Style::default().fg(theme.highlight);
    let desc_style = Style::default().fg(theme.foreground);
    let header_style = Style::default()
        .fg(theme.title)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(theme.border);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Search", header_style)),
        kb("/", "Focus search input"),
        kb("Enter", "Run search"),
        kb("Ctrl+U", "Clear input"),
        kb("Esc", "Leave input"),
        Line::raw(""),
        Line::from(Span::styled("  Navigation", header_style)),
        kb("Tab", "Next panel"),
        kb("Shift+Tab", "Previous panel"),
        kb("←/→", "Inspect class (chart)"),
        kb("↑/↓, j/k", "Select row (table)"),
        kb("PgUp/PgDn", "Page through rows"),
        kb("Enter", "Passenger details"),
        Line::raw(""),
        Line::from(Span::styled("  Details", header_style)),
        kb("y", "Copy as JSON"),
        kb("r", "Refresh from API"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("t", "Toggle theme"),
        kb("?", "Toggle this help"),
        kb("q, Ctrl+C", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(theme.kind.name(), key_style),
        ]),
    ]);

    let area = centered_rect(44, 30, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.highlight))
                .border_type(theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

/// "Label: value" lines for every column, empty values shown as "-"
fn detail_lines(passenger: &Passenger) -> Vec<(&'static str, String)> {
    COLUMNS
        .iter()
        .zip(passenger.cells())
        .map(|(label, value)| {
            let value = if value.is_empty() {
                "-".to_string()
            } else {
                value
            };
            (*label, value)
        })
        .collect()
}

fn render_detail(
    f: &mut Frame,
    app: &App,
    passenger_id: i64,
    loading: bool,
    error: Option<&str>,
) {
    let theme = &app.theme;
    let label_style = Style::default()
        .fg(theme.muted)
        .add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(theme.foreground);

    let mut lines = vec![Line::raw("")];
    if let Some(passenger) = app.detail.as_ref() {
        lines.extend(detail_lines(passenger).into_iter().map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("  {:<20}", label), label_style),
                Span::styled(value, value_style),
            ])
        }));
    }

    lines.push(Line::raw(""));
    if loading {
        lines.push(Line::styled(
            format!("  {} refreshing…", app.spinner_char()),
            Style::default().fg(theme.fetching),
        ));
    }
    if let Some(reason) = error {
        lines.push(Line::styled(
            format!("  ✗ {}", reason),
            Style::default().fg(theme.error),
        ));
    }

    let area = centered_rect(64, 19, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(Text::from(lines))
        .style(Style::default().bg(theme.background))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.highlight))
                .border_type(theme.border_type)
                .title(format!(" Passenger #{} ", passenger_id))
                .title_bottom(Line::from(" y:copy  r:refresh  Esc:close ").centered()),
        );

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(64, 19, area);
        assert_eq!(rect, Rect::new(0, 0, 40, 10));

        let rect = centered_rect(20, 4, area);
        assert_eq!(rect, Rect::new(10, 3, 20, 4));
    }

    #[test]
    fn test_detail_lines_cover_every_column() {
        let passenger = Passenger {
            passenger_id: 1,
            name: "Braund, Mr. Owen Harris".into(),
            fare: Some(7.25),
            ..Default::default()
        };
        let lines = detail_lines(&passenger);
        assert_eq!(lines.len(), COLUMNS.len());
        assert_eq!(lines[0], ("Passenger ID", "1".to_string()));
        assert_eq!(lines[1], ("Class", "-".to_string()));
        assert_eq!(lines[8], ("Fare", "7.25".to_string()));
    }
}
