//! Insertion sort trace generation

use crate::algorithms::Algorithm;
use crate::trace::TraceBuilder;

/// Grows a sorted prefix by shifting each new element left one position at
/// a time until its slot is found. Index 0 starts pre-marked sorted.
pub struct InsertionSort;

impl Algorithm for InsertionSort {
    fn name(&self) -> &'static str {
        "Insertion Sort"
    }

    fn description(&self) -> &'static [&'static str] {
        &[
            "Iterate through the array, starting from the second element",
            "For each element, compare it with elements to its left",
            "Insert the element in the correct position in the sorted portion",
        ]
    }

    fn sort(&self, trace: &mut TraceBuilder) {
        let n = trace.len();
        trace.mark_sorted(0);

        for i in 1..n {
            let current = trace.value(i);
            trace.compare(
                i,
                i - 1,
                "Considering next element to insert into the sorted portion",
            );

            let mut j = i;
            while j > 0 && trace.value(j - 1) > current {
                trace.shift(j, j - 1, "Moving elements to make space for insertion");
                j -= 1;
            }

            // The held element drops into the gap the shifts opened
            trace.store(j, current);

            trace.mark_sorted(i);
            trace.snapshot("Element inserted into correct position in the sorted portion");
        }
    }
}
