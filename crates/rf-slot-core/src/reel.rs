//! Reels and spin windows

use std::sync::Arc;

use crate::error::SlotError;
use crate::rng::SharedRng;
use crate::symbols::Symbol;

/// Symbols visible per reel after a spin
pub const WINDOW_SIZE: usize = 3;

/// Anything that can produce a spin window
pub trait Reel: Send + Sync {
    /// Draw one window of `window_size()` contiguous symbols
    fn spin(&self) -> Result<Vec<Symbol>, SlotError>;

    /// Length of the windows this reel produces
    fn window_size(&self) -> usize {
        WINDOW_SIZE
    }
}

/// A fixed reel strip with a uniformly random stop
///
/// The strip never wraps: the window always lies fully inside it, so a
/// strip of length n has n - 2 distinct stops.
#[derive(Debug, Clone)]
pub struct StripReel {
    symbols: Arc<[Symbol]>,
    rng: SharedRng,
}

impl StripReel {
    /// Create a reel over `symbols`, drawing stops from `rng`
    pub fn new(symbols: impl Into<Vec<Symbol>>, rng: SharedRng) -> Self {
        let symbols: Vec<Symbol> = symbols.into();
        Self {
            symbols: symbols.into(),
            rng,
        }
    }

    /// The full strip in order
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Reel for StripReel {
    fn spin(&self) -> Result<Vec<Symbol>, SlotError> {
        if self.symbols.len() < WINDOW_SIZE {
            return Err(SlotError::InvalidReelConfiguration {
                symbols: self.symbols.to_vec(),
                required: WINDOW_SIZE,
            });
        }

        let start = self.rng.start_index(self.symbols.len() - WINDOW_SIZE);
        log::trace!("Reel stop {} of {}", start, self.symbols.len() - WINDOW_SIZE);

        Ok(self.symbols[start..start + WINDOW_SIZE].to_vec())
    }
}
