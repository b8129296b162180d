//! Radix sort trace generation

use crate::algorithms::{Algorithm, TraceError};
use crate::trace::TraceBuilder;

/// Least-significant-digit radix sort using a stable counting sort per
/// decimal place. Requires non-negative input; digit passes stop once the
/// maximum value has no digit left at the current place. Nothing is marked
/// sorted until the terminal step.
pub struct RadixSort;

impl Algorithm for RadixSort {
    fn name(&self) -> &'static str {
        "Radix Sort"
    }

    fn description(&self) -> &'static [&'static str] {
        &[
            "Group values into buckets by their least significant digit",
            "Rebuild the array from the buckets, keeping equal digits in their original order",
            "Repeat for each higher digit place until the largest value runs out of digits",
        ]
    }

    fn validate(&self, input: &[i64]) -> Result<(), TraceError> {
        for (index, &value) in input.iter().enumerate() {
            if value < 0 {
                return Err(TraceError::NegativeInput {
                    algorithm: self.name(),
                    index,
                    value,
                });
            }
        }
        Ok(())
    }

    fn sort(&self, trace: &mut TraceBuilder) {
        let max = trace.values().iter().copied().max().unwrap_or(0);

        let mut place: i64 = 1;
        while max / place > 0 {
            digit_pass(trace, place);
            place = match place.checked_mul(10) {
                Some(next) => next,
                None => break,
            };
        }
    }
}

/// One stable counting-sort pass over a single decimal place.
fn digit_pass(trace: &mut TraceBuilder, place: i64) {
    let n = trace.len();

    let mut counts = [0usize; 10];
    for index in 0..n {
        counts[digit_at(trace.value(index), place)] += 1;
    }
    trace.snapshot(format!("Counting digits in the {}s place", place));

    for digit in 1..10 {
        counts[digit] += counts[digit - 1];
    }
    trace.snapshot("Accumulating digit counts into bucket positions");

    // Walk backwards so equal digits keep their relative order
    let mut output = vec![0i64; n];
    for index in (0..n).rev() {
        let value = trace.value(index);
        let digit = digit_at(value, place);
        counts[digit] -= 1;
        output[counts[digit]] = value;
        trace.snapshot(format!("Queueing {} into bucket {}", value, digit));
    }

    for (index, &value) in output.iter().enumerate() {
        trace.write(
            index,
            value,
            format!("Rewriting position {} from the {}s-place buckets", index, place),
        );
    }
}

fn digit_at(value: i64, place: i64) -> usize {
    ((value / place) % 10) as usize
}
