//! Grouped bar chart of passengers per class, split by sex
//!
//! One `BarGroup` per ticket class, each with a male and a female bar. When
//! the chart has focus, Left/Right pick an active class whose bars switch to
//! the highlight colors and whose counts appear in the tooltip line.

use crate::chart::{ChartBucket, CLASSES};
use crate::tui::app::Focus;
use crate::tui::theme::Theme;
use crate::tui::traits::{Component, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

const BAR_GAP: u16 = 1;
const GROUP_GAP: u16 = 3;
const MAX_BAR_WIDTH: u16 = 9;

#[derive(Debug, Default)]
pub struct ClassChart {
    /// Index into the three buckets
    active: usize,
}

impl ClassChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> usize {
        self.active
    }
}

/// Widest bars that still fit three groups of two in `width` cells
fn bar_width_for(width: u16) -> u16 {
    let groups = CLASSES.len() as u16;
    let per_group = width.saturating_sub(GROUP_GAP * (groups - 1)) / groups;
    (per_group.saturating_sub(BAR_GAP) / 2).clamp(1, MAX_BAR_WIDTH)
}

/// (male, female) fill colors for a group
fn bar_colors(theme: &Theme, active: bool) -> (Color, Color) {
    if active {
        (theme.male_active, theme.female_active)
    } else {
        (theme.male, theme.female)
    }
}

fn tooltip(bucket: &ChartBucket) -> String {
    format!(
        "Class {}  male: {}  female: {}  total: {}",
        bucket.p_class,
        bucket.male,
        bucket.female,
        bucket.total()
    )
}

fn bar(value: u64, fill: Color, theme: &Theme) -> Bar<'static> {
    Bar::default()
        .value(value)
        .style(Style::default().fg(fill))
        .value_style(Style::default().fg(theme.background).bg(fill))
}

impl Component for ClassChart {
    fn focus_target(&self) -> Focus {
        Focus::Chart
    }

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = self.has_focus(ctx);
        let breakdown = ctx.view.breakdown();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.panel_border(focused))
            .title(format!(" Passengers by Class ({} charted) ", breakdown.total()));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let mut chart = BarChart::default()
            .bar_width(bar_width_for(chunks[0].width))
            .bar_gap(BAR_GAP)
            .group_gap(GROUP_GAP)
            // A zero max would make every bar full height
            .max(breakdown.max_count().max(1))
            .style(Style::default().fg(theme.foreground));

        for (idx, bucket) in breakdown.buckets.iter().enumerate() {
            let (male, female) = bar_colors(theme, focused && idx == self.active);
            let group = BarGroup::default()
                .label(Line::from(format!("Class {}", bucket.p_class)).centered())
                .bars(&[bar(bucket.male, male, theme), bar(bucket.female, female, theme)]);
            chart = chart.data(group);
        }
        f.render_widget(chart, chunks[0]);

        let legend = Line::from(vec![
            Span::styled("■ ", Style::default().fg(theme.male)),
            Span::styled("male   ", Style::default().fg(theme.foreground)),
            Span::styled("■ ", Style::default().fg(theme.female)),
            Span::styled("female", Style::default().fg(theme.foreground)),
        ])
        .centered();
        f.render_widget(Paragraph::new(legend), chunks[1]);

        let active = breakdown.bucket(CLASSES[self.active]).filter(|_| focused);
        let info = if let Some(bucket) = active {
            Line::styled(tooltip(bucket), Style::default().fg(theme.highlight))
        } else {
            Line::styled("Tab here, ←/→ to inspect a class", Style::default().fg(theme.muted))
        };
        f.render_widget(Paragraph::new(info.centered()), chunks[2]);
    }
}

impl Interactive for ClassChart {
    fn handle_key(&mut self, key: KeyEvent, _item_count: usize) -> Handled {
        let last = CLASSES.len() - 1;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.active = self.active.saturating_sub(1),
            KeyCode::Right | KeyCode::Char('l') => self.active = (self.active + 1).min(last),
            KeyCode::Home => self.active = 0,
            KeyCode::End => self.active = last,
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> &'static str {
        "←/→:class  Tab:next"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(chart: &mut ClassChart, code: KeyCode) -> Handled {
        chart.handle_key(KeyEvent::new(code, KeyModifiers::NONE), 0)
    }

    #[test]
    fn test_active_class_is_clamped() {
        let mut chart = ClassChart::new();
        press(&mut chart, KeyCode::Left);
        assert_eq!(chart.active(), 0);

        press(&mut chart, KeyCode::Right);
        press(&mut chart, KeyCode::Right);
        press(&mut chart, KeyCode::Right);
        assert_eq!(chart.active(), 2);

        press(&mut chart, KeyCode::Home);
        assert_eq!(chart.active(), 0);
        assert_eq!(press(&mut chart, KeyCode::Up), Handled::No);
    }

    #[test]
    fn test_active_group_uses_highlight_colors() {
        let theme = Theme::dark();
        assert_eq!(bar_colors(&theme, false), (theme.male, theme.female));
        assert_eq!(
            bar_colors(&theme, true),
            (theme.male_active, theme.female_active)
        );
    }

    #[test]
    fn test_tooltip() {
        let bucket = ChartBucket {
            p_class: 1,
            male: 1,
            female: 1,
        };
        assert_eq!(tooltip(&bucket), "Class 1  male: 1  female: 1  total: 2");
    }

    #[test]
    fn test_bar_width_fits_three_groups() {
        for width in [10u16, 40, 80, 200] {
            let bw = bar_width_for(width);
            let used = 3 * (2 * bw + BAR_GAP) + 2 * GROUP_GAP;
            assert!(bw >= 1 && bw <= MAX_BAR_WIDTH);
            if width >= 30 {
                assert!(used <= width, "width {width}: bars need {used}");
            }
        }
    }
}
