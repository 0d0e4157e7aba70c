//! Injected randomness for reel stops
//!
//! Every reel draws from a [`SharedRng`] handed to it at construction.
//! Clones share one ChaCha stream behind a lock, so concurrent spins are
//! serialized and a fixed seed reproduces the same stop sequence.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Cloneable handle to a single, lock-protected generator
#[derive(Clone)]
pub struct SharedRng {
    inner: Arc<Mutex<ChaCha8Rng>>,
}

impl SharedRng {
    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self::from_rng(ChaCha8Rng::from_os_rng())
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rng)),
        }
    }

    /// Uniform index in `[0, max_inclusive]`
    pub fn start_index(&self, max_inclusive: usize) -> usize {
        self.inner.lock().random_range(0..=max_inclusive)
    }

    /// Independent generator seeded from this stream
    ///
    /// Use one fork per execution context when lock contention matters.
    pub fn fork(&self) -> Self {
        let seed: u64 = self.inner.lock().random();
        Self::seeded(seed)
    }

    /// Do both handles draw from the same stream?
    pub fn shares_stream_with(&self, other: &SharedRng) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl fmt::Debug for SharedRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedRng")
            .field("handles", &Arc::strong_count(&self.inner))
            .finish()
    }
}
