//! Logs panel component
//!
//! Shows the tail of the in-memory log buffer. The buffer is shared with the
//! tracing layer, so the panel reads it fresh every frame instead of owning it.

use crate::logging::{LogEntry, LogLevel};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn render_entries(f: &mut Frame, area: Rect, entries: &[LogEntry], total: usize, theme: &Theme) {
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let mut style = theme.log_style(entry.level);
            if entry.level == LogLevel::Error {
                style = style.add_modifier(Modifier::BOLD);
            }
            ListItem::new(format_log_entry(entry)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" System Logs ({}) ", total)),
    );

    f.render_widget(list, area);
}

/// Render the most recent entries that fit in `area`
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let height = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.tail(height);
    render_entries(f, area, &entries, app.log_buffer.len(), &app.theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_log_entry() {
        let entry = LogEntry {
            timestamp: chrono::Utc.with_ymd_and_hms(1912, 4, 15, 2, 20, 0).unwrap(),
            level: LogLevel::Warn,
            target: "titanic_viewer::client".into(),
            message: "Search failed status=500".into(),
        };
        assert_eq!(
            format_log_entry(&entry),
            "[02:20:00] WARN  Search failed status=500"
        );
    }
}
