//! Selection sort trace generation

use crate::algorithms::Algorithm;
use crate::trace::TraceBuilder;

/// Scans the unsorted portion for its minimum, then commits at most one
/// swap per boundary position.
pub struct SelectionSort;

impl Algorithm for SelectionSort {
    fn name(&self) -> &'static str {
        "Selection Sort"
    }

    fn description(&self) -> &'static [&'static str] {
        &[
            "Find the minimum element in the unsorted portion",
            "Swap it with the first element in the unsorted portion",
            "Move the boundary of the sorted portion one element to the right",
        ]
    }

    fn sort(&self, trace: &mut TraceBuilder) {
        let n = trace.len();

        for i in 0..n - 1 {
            let mut min_index = i;

            for j in i + 1..n {
                trace.compare(
                    min_index,
                    j,
                    "Finding the minimum element in the unsorted portion",
                );

                if trace.value(j) < trace.value(min_index) {
                    min_index = j;
                }
            }

            if min_index != i {
                trace.swap(
                    i,
                    min_index,
                    "Swapping the minimum element with the first element in the unsorted portion",
                );
            }

            trace.mark_sorted(i);
            trace.snapshot("Moving the boundary of the sorted portion one element to the right");
        }
    }
}
