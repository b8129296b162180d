//! Status bar rendering with keybindings and state indicators

use crate::playback::{PlaybackState, Speed};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
#[allow(clippy::too_many_arguments)]
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    current_step: usize,
    last_step: usize,
    state: PlaybackState,
    speed: Speed,
    is_editing: bool,
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Left side: step progress and the latest message
    let left_spans = vec![
        Span::styled(
            format!(" Step {}/{} ", current_step, last_step),
            Style::default()
                .bg(if is_editing {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", speed),
            Style::default()
                .bg(DEFAULT_THEME.comment)
                .fg(Color::Black),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" → ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" r ", key_style),
        Span::styled(" restart ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" 1-4 ", key_style),
        Span::styled(" speed ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" a ", key_style),
        Span::styled(" algo ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" m ", key_style),
        Span::styled(" mode ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    // State badge on the far right
    if is_editing {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ⌨ INPUT ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        match state {
            PlaybackState::Running => {
                right_spans.push(Span::styled("│", sep_style));
                right_spans.push(Span::styled(
                    " ▶ PLAYING ",
                    Style::default()
                        .bg(DEFAULT_THEME.secondary)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            PlaybackState::Paused => {
                right_spans.push(Span::styled("│", sep_style));
                right_spans.push(Span::styled(
                    " ⏸ PAUSED ",
                    Style::default()
                        .bg(DEFAULT_THEME.primary)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            PlaybackState::Finished => {
                right_spans.push(Span::styled("│", sep_style));
                right_spans.push(Span::styled(
                    " END ",
                    Style::default()
                        .bg(DEFAULT_THEME.error)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            PlaybackState::Idle => {
                right_spans.push(Span::styled("│", sep_style));
                right_spans.push(Span::styled(
                    " START ",
                    Style::default()
                        .bg(DEFAULT_THEME.success)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ));
            }
        }
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
