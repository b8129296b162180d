//! Playback state machine

use crate::comparison::TraceSet;
use crate::trace::Step;
use std::fmt;
use std::time::{Duration, Instant};

use super::cadence::Cadence;

/// Where the playback cursor is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Cursor at 0, not advancing.
    Idle,
    /// Cursor advances on the cadence.
    Running,
    /// Cursor frozen mid-trace, resumable.
    Paused,
    /// Cursor at the last index; play restarts from 0.
    Finished,
}

/// Playback speed multiplier. The cadence interval is 1000 ms divided by
/// the multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speed {
    X1,
    X2,
    X5,
    X10,
}

impl Speed {
    pub const ALL: [Speed; 4] = [Speed::X1, Speed::X2, Speed::X5, Speed::X10];

    pub fn multiplier(self) -> u64 {
        match self {
            Speed::X1 => 1,
            Speed::X2 => 2,
            Speed::X5 => 5,
            Speed::X10 => 10,
        }
    }

    pub fn interval(self) -> Duration {
        Duration::from_millis(1000 / self.multiplier())
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.multiplier())
    }
}

/// What a cadence tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackSignal {
    /// The cursor moved forward one step.
    Advanced,
    /// The cursor reached the last step; fired exactly once per run.
    Completed,
}

/// Result of a manual step request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced,
    /// Already at the last step; callers should show a notice.
    AtEnd,
    /// Stepping is unavailable while playback is running.
    Ignored,
}

/// A time-paced cursor over one or more traces.
///
/// The controller owns the trace set and the cursor; callers read both
/// through accessors and mutate them only through the transition methods.
/// All timing flows through the `now` parameters, so the controller never
/// consults the clock itself.
#[derive(Debug)]
pub struct PlaybackController {
    traces: TraceSet,
    cursor: usize,
    state: PlaybackState,
    speed: Speed,
    cadence: Cadence,
}

impl PlaybackController {
    pub fn new(traces: TraceSet) -> Self {
        PlaybackController {
            traces,
            cursor: 0,
            state: PlaybackState::Idle,
            speed: Speed::X1,
            cadence: Cadence::new(Speed::X1.interval()),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn traces(&self) -> &TraceSet {
        &self.traces
    }

    /// Highest cursor value; 0 when no trace has any steps.
    pub fn last_index(&self) -> usize {
        self.traces.max_len().saturating_sub(1)
    }

    /// Whether any trace has at least one step.
    pub fn has_steps(&self) -> bool {
        self.traces.max_len() > 0
    }

    /// The named trace's step at the cursor, clamped to its own last step
    /// so traces that finished early keep showing their final state.
    pub fn current_step(&self, name: &str) -> Option<&Step> {
        self.traces.get(name).and_then(|trace| trace.get_clamped(self.cursor))
    }

    /// Swap in freshly generated traces and reset to idle. The old traces
    /// are discarded wholesale.
    pub fn replace_traces(&mut self, traces: TraceSet) {
        self.traces = traces;
        self.restart();
    }

    /// Begin advancing on the cadence. From the last index (or finished)
    /// the cursor first resets to 0, folding restart into play. A running
    /// controller and an empty trace set are both left untouched.
    pub fn play(&mut self, now: Instant) {
        if self.state == PlaybackState::Running || !self.has_steps() {
            return;
        }
        if self.cursor >= self.last_index() {
            self.cursor = 0;
        }
        self.state = PlaybackState::Running;
        // Arming replaces any stale deadline, keeping a single timer
        self.cadence.start(now);
    }

    /// Freeze the cursor, resumable with play.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Running {
            self.state = PlaybackState::Paused;
            self.cadence.cancel();
        }
    }

    /// Play/pause toggle for the controls surface.
    pub fn toggle(&mut self, now: Instant) {
        if self.state == PlaybackState::Running {
            self.pause();
        } else {
            self.play(now);
        }
    }

    /// Advance the cursor by one while not running, clamped to the last
    /// index.
    pub fn step_forward(&mut self) -> StepOutcome {
        if self.state == PlaybackState::Running {
            return StepOutcome::Ignored;
        }
        if self.has_steps() && self.cursor < self.last_index() {
            self.cursor += 1;
            StepOutcome::Advanced
        } else {
            StepOutcome::AtEnd
        }
    }

    /// Return to idle with the cursor at 0, cancelling any armed cadence.
    pub fn restart(&mut self) {
        self.state = PlaybackState::Idle;
        self.cursor = 0;
        self.cadence.cancel();
    }

    /// Select a playback speed. While running, the cadence is re-armed
    /// with the new interval; the cursor is untouched.
    pub fn set_speed(&mut self, speed: Speed, now: Instant) {
        self.speed = speed;
        self.cadence.set_interval(speed.interval(), now);
    }

    /// Drive the cadence. Advances the cursor at most once per call;
    /// reaching the last index transitions to finished, cancels the
    /// cadence and reports completion exactly once.
    pub fn tick(&mut self, now: Instant) -> Option<PlaybackSignal> {
        if self.state != PlaybackState::Running {
            return None;
        }
        if !self.cadence.poll(now) {
            return None;
        }

        self.cursor += 1;
        if self.cursor >= self.last_index() {
            self.cursor = self.last_index();
            self.state = PlaybackState::Finished;
            self.cadence.cancel();
            return Some(PlaybackSignal::Completed);
        }
        Some(PlaybackSignal::Advanced)
    }

    /// Time until the next cadence fire while running.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.cadence.time_until_due(now)
    }
}
