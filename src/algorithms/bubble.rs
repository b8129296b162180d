//! Bubble sort trace generation

use crate::algorithms::Algorithm;
use crate::trace::TraceBuilder;

/// Adjacent-pair comparison sweeps. After a pass with no swap the
/// remaining indices are already in place, so generation stops early.
pub struct BubbleSort;

impl Algorithm for BubbleSort {
    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn description(&self) -> &'static [&'static str] {
        &[
            "Compare adjacent elements, swapping them if they are in the wrong order",
            "Repeat until no more swaps are needed",
            "The largest elements 'bubble' to the end with each pass",
        ]
    }

    fn sort(&self, trace: &mut TraceBuilder) {
        let n = trace.len();

        for i in 0..n {
            let mut swapped = false;

            for j in 0..n - i - 1 {
                trace.compare(j, j + 1, "Comparing adjacent elements in the array");

                if trace.value(j) > trace.value(j + 1) {
                    trace.swap(j, j + 1, "Swapping elements if they are in the wrong order");
                    swapped = true;
                    trace.snapshot("Moving to the next pair of elements");
                }
            }

            // The largest element of the pass has settled at the end
            trace.mark_sorted(n - i - 1);

            // A clean pass means everything left is already in order
            if !swapped {
                for k in 0..n - i - 1 {
                    trace.mark_sorted(k);
                }
                break;
            }

            trace.snapshot("Completing a pass through the array");
        }
    }
}
