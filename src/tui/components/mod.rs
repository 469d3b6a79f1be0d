// Components module - reusable UI building blocks
//
// Shell components are rendered around the main content:
// - Title bar: App name, fetch spinner, API base URL
// - Status bar: Fetch state, search, skipped records, key hints
// - Logs panel: System log entries
//
// Content components own their interaction state and implement the
// Component / Interactive traits:
// - Search bar: text input and Search button
// - Class chart: grouped male/female bars per class
// - Passenger table: one row per passenger

pub mod class_chart;
pub mod formatters;
pub mod logs_panel;
pub mod passenger_table;
pub mod scrollbar;
pub mod search_bar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use class_chart::ClassChart;
pub use passenger_table::PassengerTable;
pub use search_bar::SearchBar;
pub use toast::Toast;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}

/// Render the logs panel (convenience wrapper)
pub fn render_logs_panel(f: &mut Frame, area: Rect, app: &App) {
    logs_panel::render(f, area, app);
}
