//! Random sources for the move engine.
//!
//! Strategies never touch a global RNG. They draw through [`RandomSource`]
//! so callers can plug in entropy, a fixed seed, or a scripted sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies uniform choices to the strategies.
pub trait RandomSource {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<StdRng> {
    /// A generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// A reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Replays a fixed list of picks, cycling when it runs out.
///
/// Each pick is reduced modulo `len`, so `ScriptedRandom::new([0])` always
/// takes the first candidate.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Creates a source that replays `picks` in order.
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        let picks: Vec<usize> = picks.into_iter().collect();
        Self {
            picks: if picks.is_empty() { vec![0] } else { picks },
            cursor: 0,
        }
    }

    /// How many picks have been drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        let pick = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        pick % len
    }
}

/// Picks one item uniformly, or `None` from an empty slice.
pub(crate) fn choose<T: Copy>(items: &[T], rng: &mut dyn RandomSource) -> Option<T> {
    if items.is_empty() {
        None
    } else {
        Some(items[rng.pick_index(items.len())])
    }
}
