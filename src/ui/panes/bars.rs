//! Bar chart pane rendering
//!
//! Draws one recorded step as a bar chart: bar heights follow the array
//! values, with the comparison pair, the swap pair and the settled indices
//! tinted from the theme. Before any trace exists the raw input data is
//! drawn instead.

use crate::trace::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Render one algorithm's chart. `step` is the snapshot at the playback
/// cursor, or `None` to fall back to the unmodified input; `action` is
/// shown along the bottom border when present.
pub fn render_chart_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    step: Option<&Step>,
    fallback: &[i64],
    action: Option<&str>,
) {
    let mut block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if let Some(action) = action {
        block = block.title_bottom(
            Line::from(format!(" {} ", action)).style(Style::default().fg(DEFAULT_THEME.comment)),
        );
    }

    let values: &[i64] = match step {
        Some(step) => &step.array,
        None => fallback,
    };

    if values.is_empty() {
        let paragraph = Paragraph::new("(no data) press e to enter values")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    // Negative values are drawn relative to the minimum so every bar has a
    // non-negative height; labels keep the real value
    let min = values.iter().copied().min().unwrap_or(0).min(0);
    let max_height = values
        .iter()
        .map(|&value| (value - min) as u64)
        .max()
        .unwrap_or(0);

    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let color = bar_color(index, step);
            Bar::default()
                .value((value - min) as u64)
                .text_value(value.to_string())
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(color).add_modifier(Modifier::REVERSED))
        })
        .collect();

    let inner_width = area.width.saturating_sub(2) as usize;
    let n = values.len();
    let bar_width = (inner_width.saturating_sub(n - 1) / n).clamp(1, 8) as u16;

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(max_height.max(1));

    frame.render_widget(chart, area);
}

fn bar_color(index: usize, step: Option<&Step>) -> ratatui::style::Color {
    let Some(step) = step else {
        return DEFAULT_THEME.bar;
    };

    if pair_contains(step.swapping, index) {
        DEFAULT_THEME.swapping
    } else if pair_contains(step.comparing, index) {
        DEFAULT_THEME.comparing
    } else if step.sorted.contains(&index) {
        DEFAULT_THEME.success
    } else {
        DEFAULT_THEME.bar
    }
}

fn pair_contains(pair: Option<(usize, usize)>, index: usize) -> bool {
    pair.is_some_and(|(a, b)| a == index || b == index)
}
