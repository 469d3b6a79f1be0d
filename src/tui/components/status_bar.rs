// Status bar component
//
// Renders the fetch state, the confirmed search and the skipped-record count,
// followed by key hints for the focused panel.

use super::formatters::format_number;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::view::FetchStatus;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Fetch state as shown to the user
fn status_label(status: &FetchStatus, spinner: char) -> String {
    match status {
        FetchStatus::Idle => "idle".to_string(),
        FetchStatus::Fetching { .. } => format!("{} fetching…", spinner),
        FetchStatus::Loaded { count } => match count {
            1 => "1 passenger".to_string(),
            n => format!("{} passengers", format_number(*n as u64)),
        },
        FetchStatus::Failed { reason } => format!("✗ {}", reason),
    }
}

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: search text and focus hints included
/// - Narrow: fetch state and skipped count only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let view = &app.view;
    let bp = Breakpoint::from_width(area.width);

    let state_style = match view.status() {
        FetchStatus::Failed { .. } => Style::default().fg(theme.error),
        FetchStatus::Fetching { .. } => Style::default().fg(theme.fetching),
        _ => Style::default().fg(theme.status_bar),
    };

    let mut spans = vec![Span::styled(
        format!(" {}", status_label(view.status(), app.spinner_char())),
        state_style,
    )];

    if bp.at_least(Breakpoint::Normal) {
        let search = if view.search().is_empty() {
            "(all)".to_string()
        } else {
            format!("\"{}\"", view.search())
        };
        spans.push(Span::styled(
            format!(" │ 🔍 {}", search),
            Style::default().fg(theme.status_bar),
        ));
    }

    let skipped = view.breakdown().skipped;
    if skipped > 0 {
        spans.push(Span::styled(
            format!(" │ ⚠ {} not charted", skipped),
            Style::default().fg(theme.log_warn),
        ));
    }

    if bp.at_least(Breakpoint::Wide) {
        spans.push(Span::styled(
            format!(" │ {}", app.focus_hint()),
            Style::default().fg(theme.muted),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(&FetchStatus::Idle, '◐'), "idle");
        assert_eq!(
            status_label(&FetchStatus::Loaded { count: 1 }, '◐'),
            "1 passenger"
        );
        assert_eq!(
            status_label(&FetchStatus::Loaded { count: 1309 }, '◐'),
            "1,309 passengers"
        );
        assert_eq!(
            status_label(
                &FetchStatus::Fetching {
                    search: "Smith".into()
                },
                '◓'
            ),
            "◓ fetching…"
        );
        assert_eq!(
            status_label(
                &FetchStatus::Failed {
                    reason: "timed out".into()
                },
                '◐'
            ),
            "✗ timed out"
        );
    }
}
