// Views module - screen-level rendering logic
//
// There is a single screen: search bar on top, chart and table in the
// content area, logs and status below. Modals and toasts overlay it.

mod modal;

use super::app::App;
use super::layout::Breakpoint;
use super::traits::{Component, RenderContext};
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Height of the chart when stacked above the table
const STACKED_CHART_HEIGHT: u16 = 14;

/// Split the content area into (chart, table)
///
/// Wide terminals put the chart beside the table; narrower ones stack it
/// above so the table keeps its columns.
fn content_layout(area: Rect) -> (Rect, Rect) {
    if Breakpoint::from_width(area.width).at_least(Breakpoint::Wide) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(area);
        (chunks[0], chunks[1])
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(STACKED_CHART_HEIGHT),
                Constraint::Min(5),
            ])
            .split(area);
        (chunks[0], chunks[1])
    }
}

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Length(3), // search
            Constraint::Min(10),   // chart + table
            Constraint::Length(6), // logs
            Constraint::Length(2), // status
        ])
        .split(f.area());

    components::render_title(f, chunks[0], app);

    {
        let frame = app.animation_frame();
        let ctx = RenderContext::new(&app.theme, app.focused, frame, &app.view);
        let (chart_area, table_area) = content_layout(chunks[2]);

        app.search_bar.render(f, chunks[1], &ctx);
        app.chart.render(f, chart_area, &ctx);
        app.table.render(f, table_area, &ctx);
    }

    components::render_logs_panel(f, chunks[3], app);
    components::render_status(f, chunks[4], app);

    if let Some(ref modal_state) = app.modal {
        modal::render(f, modal_state, app);
    }

    // Toast sits on top of modals too
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    app.clear_expired_toast();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::COLUMNS;

    #[test]
    fn test_wide_layout_is_side_by_side() {
        let (chart, table) = content_layout(Rect::new(0, 0, 160, 30));
        assert_eq!(chart.y, table.y);
        assert!(chart.x < table.x);
    }

    #[test]
    fn test_table_shows_every_column_at_common_widths() {
        for width in [80, 120, 160, 200] {
            let (_, table) = content_layout(Rect::new(0, 0, width, 40));
            let columns = Breakpoint::from_width(table.width).table_columns();
            assert_eq!(columns.len(), COLUMNS.len(), "terminal {width} cols");
        }
    }

    #[test]
    fn test_narrow_layout_stacks_chart_above_table() {
        let (chart, table) = content_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(chart.height, STACKED_CHART_HEIGHT);
        assert_eq!(chart.x, table.x);
        assert!(chart.y < table.y);
    }
}
