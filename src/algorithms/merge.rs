//! Merge sort trace generation

use crate::algorithms::Algorithm;
use crate::trace::TraceBuilder;

/// Divide and conquer with an explicit step when each merge begins and one
/// write step per element placed into the merged range. Merged ranges are
/// marked sorted in bulk when the merge completes; recursion depth is
/// logarithmic in the input length.
pub struct MergeSort;

impl Algorithm for MergeSort {
    fn name(&self) -> &'static str {
        "Merge Sort"
    }

    fn description(&self) -> &'static [&'static str] {
        &[
            "Divide the array into two halves",
            "Recursively sort both halves",
            "Merge the sorted halves to produce the final sorted array",
        ]
    }

    fn sort(&self, trace: &mut TraceBuilder) {
        let n = trace.len();
        sort_range(trace, 0, n - 1);
    }
}

fn sort_range(trace: &mut TraceBuilder, left: usize, right: usize) {
    if left == right {
        // Single element, settled without a step
        trace.mark_sorted(left);
        return;
    }

    let middle = (left + right) / 2;
    sort_range(trace, left, middle);
    sort_range(trace, middle + 1, right);
    merge(trace, left, middle, right);
}

/// Merge the sorted halves `[left, middle]` and `[middle + 1, right]`.
fn merge(trace: &mut TraceBuilder, left: usize, middle: usize, right: usize) {
    let left_run = trace.values()[left..=middle].to_vec();
    let right_run = trace.values()[middle + 1..=right].to_vec();

    trace.snapshot("Dividing the array into subarrays for merging");

    let mut i = 0;
    let mut j = 0;
    let mut k = left;

    while i < left_run.len() && j < right_run.len() {
        trace.compare(
            left + i,
            middle + 1 + j,
            "Comparing elements from left and right subarrays",
        );

        if left_run[i] <= right_run[j] {
            trace.write(
                k,
                left_run[i],
                "Placing element in the correct position of the merged array",
            );
            i += 1;
        } else {
            trace.write(
                k,
                right_run[j],
                "Placing element in the correct position of the merged array",
            );
            j += 1;
        }
        k += 1;
    }

    while i < left_run.len() {
        trace.write(k, left_run[i], "Copying remaining elements from left subarray");
        i += 1;
        k += 1;
    }

    while j < right_run.len() {
        trace.write(k, right_run[j], "Copying remaining elements from right subarray");
        j += 1;
        k += 1;
    }

    for index in left..=right {
        trace.mark_sorted(index);
    }
}
