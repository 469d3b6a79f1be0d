/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds: which table columns fit and
/// whether the chart sits beside the table or above it.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 80 cols: essentials only
    Compact,
    /// 80-139 cols: every column, chart stacked above the table
    Normal,
    /// 140+ cols: every column, chart beside the table
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=79 => Breakpoint::Compact,
            80..=139 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }

    /// Indices into `model::COLUMNS` shown at this width
    pub fn table_columns(&self) -> &'static [usize] {
        match self {
            // ID, Class, Name, Sex, Age
            Breakpoint::Compact => &[0, 1, 2, 3, 4],
            Breakpoint::Normal | Breakpoint::Wide => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
        }
    }
}
