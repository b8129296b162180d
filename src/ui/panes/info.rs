//! Algorithm info pane rendering

use crate::algorithms::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the description of the active algorithm and the narrative for
/// the step under the cursor.
pub fn render_info_pane(frame: &mut Frame, area: Rect, algorithm: &dyn Algorithm, action: &str) {
    let block = Block::default()
        .title(format!(" {} ", algorithm.name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let mut lines = Vec::new();

    for (index, description_line) in algorithm.description().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}. ", index + 1),
                Style::default().fg(DEFAULT_THEME.primary),
            ),
            Span::styled(*description_line, Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            "▌ ",
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(action.to_string(), Style::default().fg(DEFAULT_THEME.secondary)),
    ]));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
