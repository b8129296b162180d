//! Shell sort trace generation

use crate::algorithms::Algorithm;
use crate::trace::TraceBuilder;

/// Gapped insertion sort with a halving gap sequence. Nothing is marked
/// sorted until the final gap-1 pass completes; the terminal step marks
/// the whole array at once.
pub struct ShellSort;

impl Algorithm for ShellSort {
    fn name(&self) -> &'static str {
        "Shell Sort"
    }

    fn description(&self) -> &'static [&'static str] {
        &[
            "Start with a large gap and compare elements that far apart",
            "Shift gapped elements right until each one is in order, like a coarse insertion sort",
            "Halve the gap each round until a final pass with gap 1 finishes the sort",
        ]
    }

    fn sort(&self, trace: &mut TraceBuilder) {
        let n = trace.len();
        let mut gap = n / 2;

        while gap > 0 {
            for i in gap..n {
                let current = trace.value(i);
                trace.compare(
                    i,
                    i - gap,
                    format!("Comparing elements {} positions apart", gap),
                );

                let mut j = i;
                while j >= gap && trace.value(j - gap) > current {
                    trace.shift(j, j - gap, "Shifting element one gap to the right");
                    j -= gap;
                }

                trace.store(j, current);
            }

            trace.snapshot(format!("Completing the pass with gap {}", gap));
            gap /= 2;
        }
    }
}
