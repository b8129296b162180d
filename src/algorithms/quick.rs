//! Quick sort trace generation

use crate::algorithms::Algorithm;
use crate::trace::TraceBuilder;

/// Last-element pivot partitioning. Subranges are processed from an
/// explicit work-stack rather than recursion, so worst-case inputs cannot
/// exhaust the call stack; the step order matches the recursive
/// formulation because the right subrange is pushed first.
pub struct QuickSort;

impl Algorithm for QuickSort {
    fn name(&self) -> &'static str {
        "Quick Sort"
    }

    fn description(&self) -> &'static [&'static str] {
        &[
            "Select a 'pivot' element from the array",
            "Partition the array so elements less than the pivot are on the left, greater on the right",
            "Recursively apply the steps to the sub-arrays",
        ]
    }

    fn sort(&self, trace: &mut TraceBuilder) {
        let n = trace.len();
        let mut ranges = vec![(0usize, n - 1)];

        while let Some((low, high)) = ranges.pop() {
            if low == high {
                // Single-element subrange, settled without a step
                trace.mark_sorted(low);
                continue;
            }

            let pivot_index = partition(trace, low, high);

            if pivot_index < high {
                ranges.push((pivot_index + 1, high));
            }
            if pivot_index > low {
                ranges.push((low, pivot_index - 1));
            }
        }
    }
}

/// Partition `[low, high]` around the last element, recording every
/// comparison and swap. Returns the pivot's resting index, which is marked
/// sorted immediately.
fn partition(trace: &mut TraceBuilder, low: usize, high: usize) -> usize {
    let pivot = trace.value(high);
    trace.snapshot(format!("Selecting pivot element: {}", pivot));

    let mut slot = low;
    for j in low..high {
        let value = trace.value(j);
        trace.compare(
            j,
            high,
            format!("Comparing element {} with pivot {}", value, pivot),
        );

        if value < pivot {
            trace.swap(
                slot,
                j,
                format!("Moving smaller element {} to the left partition", value),
            );
            slot += 1;
        }
    }

    trace.swap(
        slot,
        high,
        format!("Placing pivot {} in its final position", pivot),
    );
    trace.mark_sorted(slot);
    slot
}
