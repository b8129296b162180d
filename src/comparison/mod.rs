//! Side-by-side trace generation
//!
//! Runs a selection of algorithms over independent copies of the same
//! input, eagerly and synchronously, and collects the results in a
//! [`TraceSet`] the playback controller can drive from one shared cursor.
//! Traces may have different lengths; nothing here synchronizes the
//! algorithms' internal pacing.

use crate::algorithms::{Algorithm, TraceError};
use crate::trace::Trace;

/// How many algorithms are visualized at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonMode {
    /// The selected algorithm alone.
    Single,
    /// The first two algorithms in the registry, side by side.
    Dual,
    /// Every registered algorithm.
    All,
}

impl ComparisonMode {
    /// Cycle to the next mode.
    pub fn next(self) -> Self {
        match self {
            ComparisonMode::Single => ComparisonMode::Dual,
            ComparisonMode::Dual => ComparisonMode::All,
            ComparisonMode::All => ComparisonMode::Single,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComparisonMode::Single => "single",
            ComparisonMode::Dual => "dual",
            ComparisonMode::All => "all",
        }
    }
}

/// An ordered mapping from algorithm name to its generated trace.
#[derive(Debug, Clone, Default)]
pub struct TraceSet {
    entries: Vec<(String, Trace)>,
    max_len: usize,
}

impl TraceSet {
    pub fn new(entries: Vec<(String, Trace)>) -> Self {
        let max_len = entries.iter().map(|(_, trace)| trace.len()).max().unwrap_or(0);
        TraceSet { entries, max_len }
    }

    pub fn empty() -> Self {
        TraceSet::default()
    }

    pub fn single(name: impl Into<String>, trace: Trace) -> Self {
        TraceSet::new(vec![(name.into(), trace)])
    }

    pub fn get(&self, name: &str) -> Option<&Trace> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, trace)| trace)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Trace)> {
        self.entries.iter().map(|(name, trace)| (name.as_str(), trace))
    }

    /// Number of traces in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the longest trace; the playback cursor ranges over this.
    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

/// Generate a trace per algorithm over independent copies of `input`.
///
/// Generation is eager: every trace exists before playback can begin. The
/// first validation failure aborts the whole batch.
pub fn generate_traces<'a, I>(algorithms: I, input: &[i64]) -> Result<TraceSet, TraceError>
where
    I: IntoIterator<Item = &'a dyn Algorithm>,
{
    let mut entries = Vec::new();
    for algorithm in algorithms {
        let trace = algorithm.generate_trace(input)?;
        entries.push((algorithm.name().to_string(), trace));
    }
    Ok(TraceSet::new(entries))
}
