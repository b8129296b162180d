// Step trace recording for sorting playback

use rustc_hash::FxHashSet;

/// One recorded snapshot of the working array plus the annotations for a
/// single algorithmic event.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Array contents at this point; always the input length.
    pub array: Vec<i64>,
    /// Two distinct indices currently being compared, if any.
    pub comparing: Option<(usize, usize)>,
    /// Two indices being exchanged. A pair of equal indices marks a
    /// positional write rather than a true swap.
    pub swapping: Option<(usize, usize)>,
    /// Indices known to be in final position as of this step.
    pub sorted: FxHashSet<usize>,
    /// Narrative description of the event, for display only.
    pub action: String,
}

/// The complete ordered sequence of steps produced by running one
/// algorithm to completion on one input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Get the step at `index`, clamped to the last step. A trace that has
    /// already finished keeps showing its final state while a longer trace
    /// plays on.
    pub fn get_clamped(&self, index: usize) -> Option<&Step> {
        if self.steps.is_empty() {
            None
        } else {
            Some(&self.steps[index.min(self.steps.len() - 1)])
        }
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }
}

/// Records steps while an algorithm mutates its working copy of the input.
///
/// Algorithms receive a `&mut TraceBuilder` and drive it with the event
/// verbs below; the builder owns the working array and the growing sorted
/// set, so recursive and iterative generators share one mutation path
/// instead of closing over outer state.
#[derive(Debug)]
pub struct TraceBuilder {
    array: Vec<i64>,
    sorted: FxHashSet<usize>,
    steps: Vec<Step>,
}

impl TraceBuilder {
    /// Create a builder over an independent copy of `input`.
    pub fn new(input: &[i64]) -> Self {
        TraceBuilder {
            array: input.to_vec(),
            sorted: FxHashSet::default(),
            steps: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn value(&self, index: usize) -> i64 {
        self.array[index]
    }

    pub fn values(&self) -> &[i64] {
        &self.array
    }

    fn push(
        &mut self,
        comparing: Option<(usize, usize)>,
        swapping: Option<(usize, usize)>,
        action: String,
    ) {
        self.steps.push(Step {
            array: self.array.clone(),
            comparing,
            swapping,
            sorted: self.sorted.clone(),
            action,
        });
    }

    /// Record a plain snapshot with no comparison or swap annotation.
    pub fn snapshot(&mut self, action: impl Into<String>) {
        self.push(None, None, action.into());
    }

    /// Record a comparison between two distinct indices.
    pub fn compare(&mut self, i: usize, j: usize, action: impl Into<String>) {
        debug_assert!(i != j, "comparison needs two distinct indices");
        self.push(Some((i, j)), None, action.into());
    }

    /// Record a swap with the pre-swap array, then exchange the elements.
    pub fn swap(&mut self, i: usize, j: usize, action: impl Into<String>) {
        self.push(None, Some((i, j)), action.into());
        self.array.swap(i, j);
    }

    /// Record a shift (comparison plus move in one event) with the
    /// pre-shift array, then copy `src` into `dst`.
    pub fn shift(&mut self, dst: usize, src: usize, action: impl Into<String>) {
        debug_assert!(dst != src, "shift needs two distinct indices");
        self.push(Some((dst, src)), Some((dst, src)), action.into());
        self.array[dst] = self.array[src];
    }

    /// Store `value` at `index`, then record the post-write array as a
    /// write event (equal index pair).
    pub fn write(&mut self, index: usize, value: i64, action: impl Into<String>) {
        self.array[index] = value;
        self.push(None, Some((index, index)), action.into());
    }

    /// Store without recording a step.
    pub fn store(&mut self, index: usize, value: i64) {
        self.array[index] = value;
    }

    /// Mark an index as settled in its final position.
    pub fn mark_sorted(&mut self, index: usize) {
        debug_assert!(index < self.array.len());
        self.sorted.insert(index);
    }

    pub fn mark_all_sorted(&mut self) {
        for index in 0..self.array.len() {
            self.sorted.insert(index);
        }
    }

    /// Mark every index sorted and record the terminal step. An empty
    /// input yields an empty trace with no terminal step.
    pub fn finish(mut self, action: impl Into<String>) -> Trace {
        if self.array.is_empty() {
            return Trace { steps: self.steps };
        }
        self.mark_all_sorted();
        self.snapshot(action);
        Trace { steps: self.steps }
    }
}
