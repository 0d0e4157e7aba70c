//! Slot engine: one round per call

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RoundError, SlotError, check_bet};
use crate::grid::{GridShape, ResultGrid};
use crate::paytable::PayTable;
use crate::reel::Reel;

/// Successful round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Assembled grid (window rows × reels)
    pub grid: ResultGrid,
    /// Bet amount
    pub bet: f64,
    /// Total payout
    pub win_amount: f64,
    /// Win-to-bet ratio
    pub win_ratio: f64,
}

impl RoundResult {
    /// Check if this is a win
    pub fn is_win(&self) -> bool {
        self.win_amount > 0.0
    }
}

/// Reel-strip slot engine
///
/// Owns an ordered set of reels (reel index = grid column) and one pay
/// table. Both are immutable after construction; randomness lives in the
/// reels' injected generators, so `play` takes `&self` and may be shared
/// across threads.
pub struct SlotEngine {
    reels: Vec<Box<dyn Reel>>,
    paytable: Box<dyn PayTable>,
    shape: GridShape,
}

impl SlotEngine {
    /// Build an engine, validating the grid shape up front
    ///
    /// Fails when there are no reels, when reels disagree on window size, or
    /// when the pay table references cells outside the resulting grid.
    pub fn new(
        reels: Vec<Box<dyn Reel>>,
        paytable: impl PayTable + 'static,
    ) -> Result<Self, SlotError> {
        let rows = reels.first().ok_or(SlotError::NoReels)?.window_size();

        if let Some((reel_index, reel)) = reels
            .iter()
            .enumerate()
            .find(|(_, r)| r.window_size() != rows)
        {
            return Err(SlotError::WindowSizeMismatch {
                reel_index,
                expected: rows,
                found: reel.window_size(),
            });
        }

        let shape = GridShape::new(rows, reels.len());
        paytable.validate_shape(shape)?;

        log::debug!("Slot engine ready: {} grid", shape);

        Ok(Self {
            reels,
            paytable: Box::new(paytable),
            shape,
        })
    }

    /// Grid shape (window size × reel count)
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn reel_count(&self) -> usize {
        self.reels.len()
    }

    /// Play one round
    ///
    /// On failure the returned [`RoundError`] holds a blank grid (bad bet,
    /// reel failure) or the fully assembled grid (pay table failure).
    pub fn play(&self, bet: f64) -> Result<RoundResult, RoundError> {
        if let Err(error) = check_bet(bet) {
            log::warn!("Round rejected: {}", error);
            return Err(RoundError::new(error, ResultGrid::blank(self.shape)));
        }

        let grid = self.spin_all().map_err(|error| {
            log::warn!("Round aborted: {}", error);
            // Partially filled columns are discarded
            RoundError::new(error, ResultGrid::blank(self.shape))
        })?;

        match self.paytable.calculate_payout(&grid, bet) {
            Ok(win_amount) => {
                log::debug!("Round complete: bet {} won {}", bet, win_amount);
                Ok(RoundResult {
                    grid,
                    bet,
                    win_amount,
                    win_ratio: win_amount / bet,
                })
            }
            Err(source) => {
                let error = SlotError::PayoutCalculationFailure {
                    source: Box::new(source),
                };
                log::warn!("Round payout failed: {}", error);
                Err(RoundError::new(error, grid))
            }
        }
    }

    fn spin_all(&self) -> Result<ResultGrid, SlotError> {
        let mut grid = ResultGrid::blank(self.shape);

        for (reel_index, reel) in self.reels.iter().enumerate() {
            let spin_failure = |source: SlotError| SlotError::SpinFailure {
                reel_index,
                source: Box::new(source),
            };

            let window = reel.spin().map_err(spin_failure)?;
            grid.set_column(reel_index, &window).map_err(spin_failure)?;
        }

        Ok(grid)
    }
}

impl fmt::Debug for SlotEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotEngine")
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}
