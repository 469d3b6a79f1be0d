//! Passenger table component
//!
//! One row per passenger in response order. Columns follow the terminal
//! width via [`Breakpoint::table_columns`]; missing values show as empty cells.

use super::formatters::truncate;
use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::model::{Passenger, COLUMNS};
use crate::tui::app::Focus;
use crate::tui::layout::Breakpoint;
use crate::tui::traits::{Component, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

/// Fixed width per column; Name (index 2) takes what is left
const COLUMN_WIDTHS: [u16; 11] = [5, 5, 0, 6, 4, 4, 4, 10, 7, 6, 6];
const NAME_COLUMN: usize = 2;
const MIN_NAME_WIDTH: u16 = 10;
const COLUMN_SPACING: u16 = 1;

#[derive(Debug, Default)]
pub struct PassengerTable {
    state: TableState,
    /// Data rows visible in the last frame, used for paging
    viewport: usize,
}

impl PassengerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// New search results arrived: select the first row, if any
    pub fn reset(&mut self, row_count: usize) {
        self.state = TableState::default().with_selected((row_count > 0).then_some(0));
    }

    fn page(&self) -> usize {
        self.viewport.max(1)
    }

    fn select_clamped(&mut self, idx: usize, row_count: usize) {
        if row_count == 0 {
            self.state.select(None);
        } else {
            self.state.select(Some(idx.min(row_count - 1)));
        }
    }
}

/// Width of the Name column given the other visible columns
fn name_width(columns: &[usize], total: u16) -> u16 {
    let fixed: u16 = columns
        .iter()
        .filter(|&&c| c != NAME_COLUMN)
        .map(|&c| COLUMN_WIDTHS[c])
        .sum();
    let spacing = COLUMN_SPACING * columns.len().saturating_sub(1) as u16;
    total
        .saturating_sub(fixed + spacing)
        .max(MIN_NAME_WIDTH)
}

fn column_width(column: usize, name: u16) -> u16 {
    if column == NAME_COLUMN {
        name
    } else {
        COLUMN_WIDTHS[column]
    }
}

/// Cell texts for the visible columns, each truncated to its column
fn row_cells(passenger: &Passenger, columns: &[usize], name: u16) -> Vec<String> {
    let cells = passenger.cells();
    columns
        .iter()
        .map(|&c| truncate(&cells[c], column_width(c, name) as usize))
        .collect()
}

impl Component for PassengerTable {
    fn focus_target(&self) -> Focus {
        Focus::Table
    }

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = self.has_focus(ctx);
        let passengers = ctx.view.passengers();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.panel_border(focused))
            .title(format!(" Passengers ({}) ", passengers.len()));

        if passengers.is_empty() {
            let placeholder = Paragraph::new("No passengers match this search")
                .style(Style::default().fg(theme.muted))
                .block(block);
            f.render_widget(placeholder, area);
            self.viewport = 0;
            return;
        }

        // Results may have shrunk since the selection was made
        if let Some(idx) = self.state.selected() {
            self.select_clamped(idx, passengers.len());
        }

        let inner_width = area.width.saturating_sub(2);
        let columns = Breakpoint::from_width(area.width).table_columns();
        let name = name_width(columns, inner_width);

        let header = Row::new(
            columns
                .iter()
                .map(|&c| Cell::from(truncate(COLUMNS[c], column_width(c, name) as usize))),
        )
        .style(
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        );

        let rows = passengers.iter().map(|p| {
            Row::new(row_cells(p, columns, name).into_iter().map(Cell::from))
                .style(Style::default().fg(theme.foreground))
        });

        let widths: Vec<Constraint> = columns
            .iter()
            .map(|&c| Constraint::Length(column_width(c, name)))
            .collect();

        let highlight = if focused {
            theme.selected_row()
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .row_highlight_style(highlight)
            .block(block);

        f.render_stateful_widget(table, area, &mut self.state);

        // Borders and header row
        self.viewport = area.height.saturating_sub(3) as usize;
        render_scrollbar(
            f,
            area,
            passengers.len(),
            self.viewport,
            self.state.offset(),
            ScrollbarStyle::Minimal,
        );
    }
}

impl Interactive for PassengerTable {
    fn handle_key(&mut self, key: KeyEvent, item_count: usize) -> Handled {
        let current = self.state.selected();
        let target = match key.code {
            KeyCode::Up | KeyCode::Char('k') => current.map_or(0, |i| i.saturating_sub(1)),
            KeyCode::Down | KeyCode::Char('j') => current.map_or(0, |i| i + 1),
            KeyCode::PageUp => current.map_or(0, |i| i.saturating_sub(self.page())),
            KeyCode::PageDown => current.map_or(0, |i| i + self.page()),
            KeyCode::Home => 0,
            KeyCode::End => item_count.saturating_sub(1),
            _ => return Handled::No,
        };
        self.select_clamped(target, item_count);
        Handled::Yes
    }

    fn focus_hint(&self) -> &'static str {
        "↑↓:select  PgUp/PgDn:page  Enter:details"
    }
}
