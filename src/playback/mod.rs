//! Trace playback
//!
//! This module paces replay of generated traces:
//! - [`cadence`]: a cancellable repeating deadline with a mutable interval
//! - [`controller`]: the finite-state cursor over one or more traces
//!
//! # Timing model
//!
//! Playback is single-threaded and cooperative. The controller never runs
//! a timer of its own; the owning event loop passes the current instant
//! into [`PlaybackController::tick`] and the armed [`Cadence`] decides
//! whether the cursor advances. At most one deadline is armed per
//! controller, so ticks can never overlap.

pub mod cadence;
pub mod controller;

pub use cadence::Cadence;
pub use controller::{PlaybackController, PlaybackSignal, PlaybackState, Speed, StepOutcome};
