// Theme system for the TUI
//
// Two built-in themes, selected by name from config and switchable at
// runtime with `t`. The chart series colors are the same in both themes so
// male/female stay recognizable.

use crate::logging::LogLevel;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Male series fill
pub const MALE: Color = Color::Rgb(0x88, 0x84, 0xd8);
/// Female series fill
pub const FEMALE: Color = Color::Rgb(0x82, 0xca, 0x9d);
/// Highlighted male bar
pub const MALE_ACTIVE: Color = Color::Rgb(0xff, 0xc0, 0xcb);
/// Highlighted female bar
pub const FEMALE_ACTIVE: Color = Color::Rgb(0x00, 0x00, 0xff);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Parse a theme name from config; unknown names fall back to dark
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            _ => ThemeKind::Dark,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub kind: ThemeKind,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    /// Border of the focused panel
    pub highlight: Color,
    pub border_type: BorderType,

    // Title and status
    pub title: Color,
    pub status_bar: Color,
    pub error: Color,
    pub fetching: Color,

    // Selection
    pub selection: Color,
    pub selection_fg: Color,

    // Chart series
    pub male: Color,
    pub female: Color,
    pub male_active: Color,
    pub female_active: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn by_name(name: &str) -> Self {
        ThemeKind::from_name(name).theme()
    }

    pub fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,
            background: Color::Reset,
            foreground: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
            highlight: Color::Cyan,
            border_type: BorderType::Rounded,

            title: Color::Cyan,
            status_bar: Color::Green,
            error: Color::Red,
            fetching: Color::Yellow,

            selection: Color::DarkGray,
            selection_fg: Color::Yellow,

            male: MALE,
            female: FEMALE,
            male_active: MALE_ACTIVE,
            female_active: FEMALE_ACTIVE,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
        }
    }

    pub fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
            background: Color::White,
            foreground: Color::Black,
            muted: Color::DarkGray,
            border: Color::Gray,
            highlight: Color::Blue,
            border_type: BorderType::Plain,

            title: Color::Blue,
            status_bar: Color::DarkGray,
            error: Color::Red,
            fetching: Color::Rgb(184, 134, 11), // Dark goldenrod

            selection: Color::LightBlue,
            selection_fg: Color::Black,

            male: MALE,
            female: FEMALE,
            male_active: MALE_ACTIVE,
            female_active: FEMALE_ACTIVE,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11),
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
        }
    }

    /// Border color for a panel given its focus
    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.highlight)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn selected_row(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection)
            .add_modifier(Modifier::BOLD)
    }

    pub fn log_style(&self, level: LogLevel) -> Style {
        let color = match level {
            LogLevel::Error => self.log_error,
            LogLevel::Warn => self.log_warn,
            LogLevel::Info => self.log_info,
            LogLevel::Debug | LogLevel::Trace => self.log_debug,
        };
        Style::default().fg(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_by_name() {
        assert_eq!(Theme::by_name("LIGHT").kind, ThemeKind::Light);
        assert_eq!(Theme::by_name("solarized").kind, ThemeKind::Dark);
    }

    #[test]
    fn test_series_colors_are_distinct() {
        for theme in [Theme::dark(), Theme::light()] {
            assert_ne!(theme.male, theme.female);
            assert_ne!(theme.male, theme.male_active);
            assert_ne!(theme.female, theme.female_active);
        }
    }
}
