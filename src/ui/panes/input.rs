//! Input data pane rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the input data pane. While editing, `buffer` holds the text
/// being typed and the pane border highlights to show it has focus.
pub fn render_input_pane(frame: &mut Frame, area: Rect, data: &[i64], buffer: Option<&str>) {
    let is_editing = buffer.is_some();

    let border_style = if is_editing {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Input Data ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    let mut lines = Vec::new();

    if let Some(buffer) = buffer {
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled(buffer.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(
                "▏",
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            "enter: apply  esc: cancel",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    } else {
        let values = if data.is_empty() {
            String::from("(empty)")
        } else {
            data.iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        lines.push(Line::from(Span::styled(
            values,
            Style::default().fg(DEFAULT_THEME.fg),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} value(s)", data.len()),
            Style::default().fg(DEFAULT_THEME.comment),
        )));
        lines.push(Line::from(Span::styled(
            "press e to edit",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
