//! Main TUI application state and logic

use crate::algorithms::{self, Algorithm};
use crate::comparison::{self, ComparisonMode, TraceSet};
use crate::playback::{PlaybackController, PlaybackSignal, PlaybackState, Speed, StepOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
    backend::Backend,
};
use std::io;
use std::time::{Duration, Instant};

/// Parse whitespace- or comma-separated integers. Returns the first token
/// that fails to parse, so callers can point at the bad value.
pub fn parse_values(text: &str) -> Result<Vec<i64>, String> {
    let mut values = Vec::new();
    for token in text.split([',', ' ']).filter(|token| !token.is_empty()) {
        match token.parse::<i64>() {
            Ok(value) => values.push(value),
            Err(_) => return Err(token.to_string()),
        }
    }
    Ok(values)
}

/// The main application state
pub struct App {
    /// The fixed algorithm list, in display order
    registry: Vec<Box<dyn Algorithm>>,

    /// The data being sorted
    data: Vec<i64>,

    /// Index into the registry for single mode
    selected: usize,

    /// How many algorithms are shown at once
    mode: ComparisonMode,

    /// Cursor state machine over the generated traces
    playback: PlaybackController,

    /// Edit buffer while the user is typing new data
    input: Option<String>,

    /// Status message to display
    status_message: String,

    /// Whether the app should quit
    should_quit: bool,
}

impl App {
    /// Create a new app over the given data and generate the first trace.
    pub fn new(data: Vec<i64>) -> Self {
        let mut app = App {
            registry: algorithms::registry(),
            data,
            selected: 0,
            mode: ComparisonMode::Single,
            playback: PlaybackController::new(TraceSet::empty()),
            input: None,
            status_message: String::from("Ready!"),
            should_quit: false,
        };
        app.regenerate();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            match self.playback.tick(now) {
                Some(PlaybackSignal::Completed) => {
                    self.status_message = String::from("Sorting complete!");
                }
                Some(PlaybackSignal::Advanced) | None => {}
            }

            // Wake early enough for the next cadence fire, but keep a
            // bounded poll so key events stay responsive
            let poll_timeout = self
                .playback
                .time_until_tick(now)
                .map_or(Duration::from_millis(50), |until| {
                    until.min(Duration::from_millis(50))
                });

            if event::poll(poll_timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// The algorithms the current comparison mode visualizes.
    fn active_algorithms(&self) -> Vec<&dyn Algorithm> {
        match self.mode {
            ComparisonMode::Single => vec![self.registry[self.selected].as_ref()],
            ComparisonMode::Dual => self
                .registry
                .iter()
                .take(2)
                .map(|algorithm| algorithm.as_ref())
                .collect(),
            ComparisonMode::All => self
                .registry
                .iter()
                .map(|algorithm| algorithm.as_ref())
                .collect(),
        }
    }

    /// Regenerate every active trace from the current data and reset
    /// playback. Traces are replaced wholesale on any change.
    fn regenerate(&mut self) {
        let result = comparison::generate_traces(self.active_algorithms(), &self.data);
        match result {
            Ok(traces) => {
                self.playback.replace_traces(traces);
                if self.data.is_empty() {
                    self.status_message = String::from("Add values to begin");
                }
            }
            Err(error) => {
                // Stale traces would not match the data on screen
                self.playback.replace_traces(TraceSet::empty());
                self.status_message = error.to_string();
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let content_area = main_chunks[0];
        let status_area = main_chunks[1];

        match self.mode {
            ComparisonMode::Single => self.render_single(frame, content_area),
            ComparisonMode::Dual | ComparisonMode::All => {
                self.render_comparison(frame, content_area)
            }
        }

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.playback.cursor(),
            self.playback.last_index(),
            self.playback.state(),
            self.playback.speed(),
            self.input.is_some(),
        );
    }

    fn render_single(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(area);

        let side_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(columns[0]);

        super::panes::render_input_pane(frame, side_rows[0], &self.data, self.input.as_deref());

        let algorithm = self.registry[self.selected].as_ref();
        let step = self.playback.current_step(algorithm.name());
        let action = step
            .map(|step| step.action.as_str())
            .unwrap_or("Ready to start sorting");

        super::panes::render_info_pane(frame, side_rows[1], algorithm, action);
        super::panes::render_chart_pane(frame, columns[1], algorithm.name(), step, &self.data, None);
    }

    fn render_comparison(&self, frame: &mut Frame, area: Rect) {
        let names: Vec<String> = self
            .playback
            .traces()
            .iter()
            .map(|(name, _)| name.to_string())
            .collect();

        if names.is_empty() {
            super::panes::render_chart_pane(frame, area, "Input Data", None, &self.data, None);
            return;
        }

        // Up to four charts per row
        let per_row = names.len().min(4);
        let row_count = names.len().div_ceil(per_row);

        let row_constraints: Vec<Constraint> = (0..row_count)
            .map(|_| Constraint::Ratio(1, row_count as u32))
            .collect();
        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(row_constraints)
            .split(area);

        for (row_index, row_names) in names.chunks(per_row).enumerate() {
            let column_constraints: Vec<Constraint> = (0..row_names.len())
                .map(|_| Constraint::Ratio(1, row_names.len() as u32))
                .collect();
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(column_constraints)
                .split(row_areas[row_index]);

            for (column_index, name) in row_names.iter().enumerate() {
                let step = self.playback.current_step(name);
                let action = step
                    .map(|step| step.action.as_str())
                    .unwrap_or("Waiting to start...");
                super::panes::render_chart_pane(
                    frame,
                    columns[column_index],
                    name,
                    step,
                    &self.data,
                    Some(action),
                );
            }
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.input.is_some() {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                // Stop the cadence before tearing the terminal down
                self.playback.pause();
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                if !self.playback.has_steps() {
                    self.status_message = String::from("Add values to begin");
                    return;
                }
                self.playback.toggle(Instant::now());
                self.status_message = match self.playback.state() {
                    PlaybackState::Running => String::from("Playing..."),
                    _ => String::from("Paused"),
                };
            }
            KeyCode::Right | KeyCode::Char('n') => match self.playback.step_forward() {
                StepOutcome::Advanced => {
                    self.status_message = String::from("Stepped forward");
                }
                StepOutcome::AtEnd => {
                    self.status_message = String::from("Already at the last step");
                }
                StepOutcome::Ignored => {
                    self.status_message = String::from("Pause before stepping");
                }
            },
            KeyCode::Char('r') => {
                self.playback.restart();
                self.status_message = String::from("Visualization restarted");
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c.to_digit(10).unwrap_or(1) as usize - 1;
                let speed = Speed::ALL[index];
                self.playback.set_speed(speed, Instant::now());
                self.status_message = format!("Speed set to {}", speed);
            }
            KeyCode::Char('a') | KeyCode::Tab => {
                self.selected = (self.selected + 1) % self.registry.len();
                self.mode = ComparisonMode::Single;
                self.status_message =
                    format!("Switched to {}", self.registry[self.selected].name());
                self.regenerate();
            }
            KeyCode::Char('m') => {
                self.mode = self.mode.next();
                self.status_message = format!("Comparison mode: {}", self.mode.label());
                self.regenerate();
            }
            KeyCode::Char('e') => {
                if self.mode == ComparisonMode::Single {
                    self.playback.pause();
                    let prefill = self
                        .data
                        .iter()
                        .map(|value| value.to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    self.input = Some(prefill);
                    self.status_message = String::from("Editing input data");
                } else {
                    self.status_message = String::from("Switch to single mode to edit data");
                }
            }
            _ => {}
        }
    }

    /// Handle keys while the edit buffer is open
    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input = None;
                self.status_message = String::from("Edit cancelled");
            }
            KeyCode::Enter => {
                let buffer = self.input.take().unwrap_or_default();
                match parse_values(&buffer) {
                    Ok(values) => {
                        self.data = values;
                        self.status_message = format!("Data updated ({} values)", self.data.len());
                        self.regenerate();
                    }
                    Err(token) => {
                        self.status_message = format!("'{}' is not a valid integer", token);
                        self.input = Some(buffer);
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some(buffer) = self.input.as_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == ',' || c == ' ' || c == '-' => {
                if let Some(buffer) = self.input.as_mut() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values_accepts_commas_and_spaces() {
        assert_eq!(parse_values("3, 1 2,5"), Ok(vec![3, 1, 2, 5]));
        assert_eq!(parse_values("-4, 0"), Ok(vec![-4, 0]));
        assert_eq!(parse_values(""), Ok(vec![]));
    }

    #[test]
    fn test_parse_values_reports_bad_token() {
        assert_eq!(parse_values("3, x, 2"), Err(String::from("x")));
    }
}
