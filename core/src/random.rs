use crate::Number;

/// Source of uniform choices consumed by ticket generation and the draw pool.
///
/// Every [`rand::Rng`] is a `RandomSource`; tests can plug in scripted sources.
pub trait RandomSource {
    /// Uniform index in `0..bound`. Callers never pass a zero bound.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Uniform number in `min..=max`.
    fn next_number(&mut self, min: Number, max: Number) -> Number {
        let span = usize::from(max - min) + 1;
        // span <= 90, index fits back into a Number
        min + self.next_index(span) as Number
    }
}

impl<R: rand::Rng> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}
