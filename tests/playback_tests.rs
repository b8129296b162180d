// Playback controller and cadence behavior

use sortty::comparison::TraceSet;
use sortty::playback::{PlaybackController, PlaybackSignal, PlaybackState, Speed, StepOutcome};
use sortty::trace::{Trace, TraceBuilder};
use std::time::{Duration, Instant};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Build a synthetic trace with exactly `len` steps.
fn trace_of_len(len: usize) -> Trace {
    assert!(len >= 1);
    let mut builder = TraceBuilder::new(&[2, 1]);
    for index in 0..len - 1 {
        builder.snapshot(format!("step {}", index));
    }
    builder.finish("done")
}

fn controller_with_len(len: usize) -> PlaybackController {
    PlaybackController::new(TraceSet::single("Bubble Sort", trace_of_len(len)))
}

#[test]
fn test_running_playback_advances_on_the_cadence_and_completes_once() {
    let mut playback = controller_with_len(5);
    let t0 = Instant::now();

    playback.set_speed(Speed::X2, t0);
    playback.play(t0);
    assert_eq!(playback.state(), PlaybackState::Running);
    assert_eq!(playback.cursor(), 0);

    // Speed x2 means one advance every 500 time units
    assert_eq!(playback.tick(t0 + ms(499)), None);
    assert_eq!(playback.cursor(), 0);

    assert_eq!(playback.tick(t0 + ms(500)), Some(PlaybackSignal::Advanced));
    assert_eq!(playback.cursor(), 1);
    assert_eq!(playback.tick(t0 + ms(1000)), Some(PlaybackSignal::Advanced));
    assert_eq!(playback.tick(t0 + ms(1500)), Some(PlaybackSignal::Advanced));
    assert_eq!(playback.cursor(), 3);

    // The fourth tick lands on the last index
    assert_eq!(playback.tick(t0 + ms(2000)), Some(PlaybackSignal::Completed));
    assert_eq!(playback.cursor(), 4);
    assert_eq!(playback.state(), PlaybackState::Finished);

    // No further cadence ticks occur
    assert_eq!(playback.tick(t0 + ms(2500)), None);
    assert_eq!(playback.tick(t0 + ms(9000)), None);
    assert_eq!(playback.cursor(), 4);
}

#[test]
fn test_completion_signal_fires_exactly_once() {
    let mut playback = controller_with_len(3);
    let t0 = Instant::now();
    playback.play(t0);

    let mut completions = 0;
    for elapsed in (1..=20u64).map(|i| ms(1000 * i)) {
        if playback.tick(t0 + elapsed) == Some(PlaybackSignal::Completed) {
            completions += 1;
        }
    }
    assert_eq!(completions, 1);
}

#[test]
fn test_play_at_the_end_restarts_from_zero() {
    let mut playback = controller_with_len(3);
    let t0 = Instant::now();

    playback.play(t0);
    playback.tick(t0 + ms(1000));
    playback.tick(t0 + ms(2000));
    assert_eq!(playback.state(), PlaybackState::Finished);
    assert_eq!(playback.cursor(), 2);

    // Restart semantics fold into play when already finished
    playback.play(t0 + ms(3000));
    assert_eq!(playback.state(), PlaybackState::Running);
    assert_eq!(playback.cursor(), 0);
}

#[test]
fn test_pause_freezes_and_play_resumes_without_reset() {
    let mut playback = controller_with_len(5);
    let t0 = Instant::now();

    playback.play(t0);
    playback.tick(t0 + ms(1000));
    assert_eq!(playback.cursor(), 1);

    playback.pause();
    assert_eq!(playback.state(), PlaybackState::Paused);
    assert_eq!(playback.tick(t0 + ms(5000)), None);
    assert_eq!(playback.cursor(), 1);

    playback.play(t0 + ms(6000));
    assert_eq!(playback.state(), PlaybackState::Running);
    assert_eq!(playback.cursor(), 1);
    assert_eq!(playback.tick(t0 + ms(7000)), Some(PlaybackSignal::Advanced));
    assert_eq!(playback.cursor(), 2);
}

#[test]
fn test_changing_speed_while_running_reschedules_without_skipping() {
    let mut playback = controller_with_len(5);
    let t0 = Instant::now();

    playback.play(t0);
    assert_eq!(playback.tick(t0 + ms(999)), None);

    // Switch to x10: the next advance is one new interval out
    playback.set_speed(Speed::X10, t0 + ms(999));
    assert_eq!(playback.cursor(), 0);
    assert_eq!(playback.tick(t0 + ms(1098)), None);
    assert_eq!(playback.tick(t0 + ms(1099)), Some(PlaybackSignal::Advanced));
    assert_eq!(playback.cursor(), 1);
}

#[test]
fn test_step_forward_clamps_at_the_last_index() {
    let mut playback = controller_with_len(3);

    assert_eq!(playback.step_forward(), StepOutcome::Advanced);
    assert_eq!(playback.step_forward(), StepOutcome::Advanced);
    assert_eq!(playback.cursor(), 2);
    assert_eq!(playback.state(), PlaybackState::Idle);

    // Past the end: a notice, not a fault
    assert_eq!(playback.step_forward(), StepOutcome::AtEnd);
    assert_eq!(playback.cursor(), 2);
}

#[test]
fn test_step_forward_is_unavailable_while_running() {
    let mut playback = controller_with_len(3);
    let t0 = Instant::now();
    playback.play(t0);

    assert_eq!(playback.step_forward(), StepOutcome::Ignored);
    assert_eq!(playback.cursor(), 0);
}

#[test]
fn test_restart_returns_to_idle_from_any_state() {
    let mut playback = controller_with_len(5);
    let t0 = Instant::now();

    playback.play(t0);
    playback.tick(t0 + ms(1000));
    playback.restart();
    assert_eq!(playback.state(), PlaybackState::Idle);
    assert_eq!(playback.cursor(), 0);
    assert_eq!(playback.tick(t0 + ms(2000)), None);

    playback.step_forward();
    playback.restart();
    assert_eq!(playback.cursor(), 0);
}

#[test]
fn test_empty_trace_set_stays_idle() {
    let mut playback = PlaybackController::new(TraceSet::empty());
    let t0 = Instant::now();

    playback.play(t0);
    assert_eq!(playback.state(), PlaybackState::Idle);
    assert_eq!(playback.tick(t0 + ms(1000)), None);
    assert_eq!(playback.step_forward(), StepOutcome::AtEnd);
}

#[test]
fn test_empty_generated_trace_stays_idle() {
    // An empty input produces a zero-step trace for every algorithm
    let playback = PlaybackController::new(TraceSet::single("Bubble Sort", Trace::default()));
    assert!(!playback.has_steps());
    assert!(playback.current_step("Bubble Sort").is_none());
}

#[test]
fn test_shorter_traces_clamp_at_their_own_last_step() {
    let set = TraceSet::new(vec![
        (String::from("short"), trace_of_len(3)),
        (String::from("long"), trace_of_len(5)),
    ]);
    let mut playback = PlaybackController::new(set);

    assert_eq!(playback.last_index(), 4);
    for _ in 0..4 {
        playback.step_forward();
    }
    assert_eq!(playback.cursor(), 4);

    // The finished trace keeps showing its final step
    let short_step = playback.current_step("short").expect("short trace step");
    assert_eq!(short_step.action, "done");

    let long_step = playback.current_step("long").expect("long trace step");
    assert_eq!(long_step.action, "done");
}

#[test]
fn test_single_step_trace_completes_on_the_first_tick() {
    let mut playback = controller_with_len(1);
    let t0 = Instant::now();

    playback.play(t0);
    assert_eq!(playback.state(), PlaybackState::Running);
    assert_eq!(playback.tick(t0 + ms(1000)), Some(PlaybackSignal::Completed));
    assert_eq!(playback.cursor(), 0);
    assert_eq!(playback.state(), PlaybackState::Finished);
}

#[test]
fn test_replace_traces_resets_playback() {
    let mut playback = controller_with_len(5);
    let t0 = Instant::now();

    playback.play(t0);
    playback.tick(t0 + ms(1000));
    assert_eq!(playback.cursor(), 1);

    playback.replace_traces(TraceSet::single("Merge Sort", trace_of_len(2)));
    assert_eq!(playback.state(), PlaybackState::Idle);
    assert_eq!(playback.cursor(), 0);
    assert_eq!(playback.last_index(), 1);

    // The cadence from the old run was cancelled
    assert_eq!(playback.tick(t0 + ms(2000)), None);
}
