//! # Introduction
//!
//! Sortty replays sorting algorithms step by step.  Each algorithm records
//! every comparison, swap and write over a working copy of the input as a
//! [`trace::Step`], and the resulting trace is navigated through a terminal
//! UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input array → Trace generators → Traces → Playback cursor → TUI
//! ```
//!
//! 1. [`trace`] — the step snapshot model and the builder algorithms use
//!    to record events.
//! 2. [`algorithms`] — seven trace generators (bubble, selection,
//!    insertion, quick, merge, shell, radix) behind one capability trait.
//! 3. [`comparison`] — eager batch generation over independent input
//!    copies for side-by-side playback.
//! 4. [`playback`] — the cadence timer and the finite-state cursor that
//!    paces replay.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! Trace generation is pure: the same input and algorithm always produce
//! the same step sequence, so traces can be regenerated at will and are
//! replaced wholesale whenever the data or the selection changes.

pub mod algorithms;
pub mod comparison;
pub mod playback;
pub mod trace;
pub mod ui;
