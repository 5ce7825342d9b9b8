//! Uniform random draws behind a swappable source.
//!
//! Engines own a `RandomSource` handed in at construction. Production code
//! uses a seeded [`StdRng`]; tests can substitute a [`ScriptedSource`] that
//! replays a fixed sequence.

use rand::Rng;
use rand::rngs::StdRng;

/// A uniform random generator.
pub trait RandomSource {
    /// A uniformly distributed index in `0..len`.
    ///
    /// `len` must be greater than zero.
    fn index(&mut self, len: usize) -> usize;

    /// A uniformly distributed integer in `low..=high`.
    fn between(&mut self, low: u32, high: u32) -> u32 {
        debug_assert!(low <= high);
        let span = (high - low) as usize + 1;
        low + self.index(span) as u32
    }

    /// `amount` distinct indices drawn uniformly from `0..len`, in draw order.
    ///
    /// Returns at most `len` indices.
    fn sample(&mut self, len: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(len);
        let mut pool: Vec<usize> = (0..len).collect();
        for i in 0..amount {
            let j = i + self.index(len - i);
            pool.swap(i, j);
        }
        pool.truncate(amount);
        pool
    }
}

impl RandomSource for StdRng {
    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }
}

/// Pick one element uniformly, or `None` if the slice is empty.
pub fn choose<'a, T, R: RandomSource + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[rng.index(items.len())])
    }
}

/// A deterministic source that replays a fixed sequence.
///
/// Each draw takes the next value modulo the requested bound and the sequence
/// wraps when exhausted. An empty script always yields index 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source that replays `values`.
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let value = if self.values.is_empty() {
            0
        } else {
            self.values[self.cursor % self.values.len()]
        };
        self.cursor += 1;
        value % len
    }
}
