//! Random index sources for the allocator.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Uniform integer in `[0, len - 1]`. Callers never ask with `len == 0`.
pub trait IndexSource {
    fn next_index(&mut self, len: usize) -> usize;
}

impl<T: IndexSource + ?Sized> IndexSource for &mut T {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

/// Draws from any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngIndex<R>(R);

impl<R: Rng> RngIndex<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngIndex<ThreadRng> {
    /// Per-thread generator, used by the web handlers.
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl RngIndex<StdRng> {
    /// Reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> IndexSource for RngIndex<R> {
    fn next_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Replays a fixed sequence of indices (wrapping around), reduced modulo `len`.
///
/// An empty script always yields 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedIndex {
    script: Vec<usize>,
    pos: usize,
}

impl ScriptedIndex {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, pos: 0 }
    }

    /// How many indices have been handed out.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl IndexSource for ScriptedIndex {
    fn next_index(&mut self, len: usize) -> usize {
        if self.script.is_empty() {
            self.pos += 1;
            return 0;
        }
        let raw = self.script[self.pos % self.script.len()];
        self.pos += 1;
        raw % len
    }
}
