// Invariant checks over every algorithm and a fixed input corpus

use rustc_hash::FxHashSet;
use sortty::algorithms::{registry, Algorithm};
use sortty::trace::Trace;

const CORPUS: &[&[i64]] = &[
    &[3, 7, 4, 5, 13, 10, 6, 8, 1],
    &[3, 1, 2],
    &[2, 1],
    &[1, 2, 3, 4],
    &[9, 8, 7, 6, 5],
    &[4, 4, 4, 1],
    &[5, 5, 5, 5],
    &[170, 45, 75, 90, 802, 24, 2, 66],
    &[0, 1000000, 7, 0],
];

fn assert_trace_invariants(name: &str, input: &[i64], trace: &Trace) {
    let n = input.len();

    if n == 0 {
        assert!(trace.is_empty(), "{}: empty input must yield an empty trace", name);
        return;
    }
    assert!(!trace.is_empty(), "{}: no steps for {:?}", name, input);

    let mut previous_sorted: Option<&FxHashSet<usize>> = None;
    for (step_index, step) in trace.steps().iter().enumerate() {
        assert_eq!(
            step.array.len(),
            n,
            "{}: array length changed at step {} for {:?}",
            name,
            step_index,
            input
        );

        if let Some((i, j)) = step.comparing {
            assert!(i < n && j < n, "{}: comparing out of bounds at step {}", name, step_index);
            assert_ne!(i, j, "{}: comparing equal indices at step {}", name, step_index);
        }
        if let Some((i, j)) = step.swapping {
            assert!(i < n && j < n, "{}: swapping out of bounds at step {}", name, step_index);
        }
        for &index in &step.sorted {
            assert!(index < n, "{}: sorted index out of bounds at step {}", name, step_index);
        }

        if let Some(previous) = previous_sorted {
            assert!(
                previous.is_subset(&step.sorted),
                "{}: sorted set shrank at step {} for {:?}",
                name,
                step_index,
                input
            );
        }
        previous_sorted = Some(&step.sorted);
    }

    let mut expected = input.to_vec();
    expected.sort_unstable();

    let last = trace.last().expect("trace has a last step");
    assert_eq!(
        last.array, expected,
        "{}: final array is not the ascending sort of {:?}",
        name, input
    );
    assert_eq!(
        last.sorted.len(),
        n,
        "{}: final sorted set does not cover the array for {:?}",
        name,
        input
    );
}

#[test]
fn test_every_trace_upholds_the_invariants() {
    for algorithm in registry() {
        for input in CORPUS {
            let trace = algorithm
                .generate_trace(input)
                .expect("generation failed on non-negative input");
            assert_trace_invariants(algorithm.name(), input, &trace);
        }
    }
}

#[test]
fn test_comparison_algorithms_sort_negative_values() {
    let inputs: &[&[i64]] = &[&[-3, 1, -2], &[0, -1], &[-5, -5, -9, 4]];

    for algorithm in registry() {
        if algorithm.name() == "Radix Sort" {
            continue;
        }
        for input in inputs {
            let trace = algorithm
                .generate_trace(input)
                .expect("comparison sorts accept negative values");
            assert_trace_invariants(algorithm.name(), input, &trace);
        }
    }
}

#[test]
fn test_trace_generation_is_deterministic() {
    for algorithm in registry() {
        for input in CORPUS {
            let first = algorithm.generate_trace(input).expect("generation failed");
            let second = algorithm.generate_trace(input).expect("generation failed");
            assert_eq!(
                first,
                second,
                "{}: regenerating {:?} produced a different trace",
                algorithm.name(),
                input
            );
        }
    }
}

#[test]
fn test_empty_input_yields_empty_trace() {
    for algorithm in registry() {
        let trace = algorithm.generate_trace(&[]).expect("generation failed");
        assert_eq!(trace.len(), 0, "{}", algorithm.name());
    }
}

#[test]
fn test_single_element_yields_one_terminal_step() {
    for algorithm in registry() {
        let trace = algorithm.generate_trace(&[7]).expect("generation failed");
        assert_eq!(trace.len(), 1, "{}", algorithm.name());

        let step = trace.last().expect("one step");
        assert_eq!(step.array, vec![7]);
        assert!(step.sorted.contains(&0));
        assert_eq!(step.sorted.len(), 1);
        assert_eq!(step.comparing, None);
        assert_eq!(step.swapping, None);
    }
}
