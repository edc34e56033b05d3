//! Random selection of the computer's choice.
//!
//! ## Key Features
//!
//! - **Injectable**: `Match` draws through the [`ChoiceSource`] capability,
//!   never through a global generator.
//! - **Deterministic when asked**: `GameRng::new(seed)` replays the same
//!   sequence; `ScriptedSource` replays fixed indices for tests.
//! - **Forkable**: each match in a session gets its own independent stream.
//!
//! ```
//! use rpsls::core::{ChoiceSource, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let mut again = GameRng::new(42);
//! assert_eq!(rng.pick(5), again.pick(5));
//!
//! // A fork has its own sequence, but forking is deterministic too.
//! let fork = rng.fork();
//! let fork_again = again.fork();
//! assert_eq!(fork.seed(), fork_again.seed());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Capability of picking one of `n` options.
///
/// Implementations must return an index in `0..n` for any `n > 0`.
/// Production sources draw i.i.d. uniformly.
pub trait ChoiceSource {
    fn pick(&mut self, n: usize) -> usize;
}

impl<S: ChoiceSource + ?Sized> ChoiceSource for &mut S {
    fn pick(&mut self, n: usize) -> usize {
        (**self).pick(n)
    }
}

impl<S: ChoiceSource + ?Sized> ChoiceSource for Box<S> {
    fn pick(&mut self, n: usize) -> usize {
        (**self).pick(n)
    }
}

/// Seeded uniform RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

impl ChoiceSource for GameRng {
    fn pick(&mut self, n: usize) -> usize {
        let index = self.gen_range_usize(0..n);
        log::trace!("drew index {} of {}", index, n);
        index
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
///
/// Indices are reduced modulo `n`, so a script written for one alphabet
/// stays in range for a smaller one. An empty script always picks 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    script: Vec<usize>,
    position: usize,
}

impl ScriptedSource {
    /// Create a source replaying `script` in order.
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            position: 0,
        }
    }

    /// A source that always picks the same index.
    #[must_use]
    pub fn always(index: usize) -> Self {
        Self::new(vec![index])
    }

    /// Number of picks made so far.
    #[must_use]
    pub fn picks(&self) -> usize {
        self.position
    }
}

impl ChoiceSource for ScriptedSource {
    fn pick(&mut self, n: usize) -> usize {
        if self.script.is_empty() || n == 0 {
            self.position += 1;
            return 0;
        }
        let index = self.script[self.position % self.script.len()] % n;
        self.position += 1;
        index
    }
}
