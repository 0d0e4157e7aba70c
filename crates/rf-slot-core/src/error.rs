//! Error types

use crate::grid::{Coordinate, GridShape, ResultGrid};
use crate::symbols::Symbol;

/// Slot engine errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SlotError {
    #[error("Bet must be greater than 0 (got {bet})")]
    InvalidBet { bet: f64 },

    #[error("Reel must have at least {required} symbols, found {}", .symbols.len())]
    InvalidReelConfiguration {
        /// The reel's full strip, echoed back unchanged
        symbols: Vec<Symbol>,
        required: usize,
    },

    #[error("Spin failed on reel {reel_index}: {source}")]
    SpinFailure {
        reel_index: usize,
        source: Box<SlotError>,
    },

    #[error("Payout calculation failed: {source}")]
    PayoutCalculationFailure { source: Box<SlotError> },

    #[error("Coordinate {coordinate} is outside the {shape} grid")]
    CoordinateOutOfBounds {
        coordinate: Coordinate,
        shape: GridShape,
    },

    #[error("Grid shape mismatch: expected {expected}, found {found}")]
    GridShapeMismatch { expected: GridShape, found: GridShape },

    #[error("Reel {reel_index} window size mismatch: expected {expected}, found {found}")]
    WindowSizeMismatch {
        reel_index: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid pattern {pattern_index}: {reason}")]
    InvalidPattern { pattern_index: usize, reason: String },

    #[error("Invalid multiplier {multiplier} for symbol {symbol}")]
    InvalidMultiplier { symbol: Symbol, multiplier: f64 },

    #[error("Engine requires at least one reel")]
    NoReels,
}

/// Closed set of error kinds, for matching without message text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotErrorKind {
    InvalidBet,
    InvalidReelConfiguration,
    SpinFailure,
    PayoutCalculationFailure,
    CoordinateOutOfBounds,
    GridShapeMismatch,
    WindowSizeMismatch,
    InvalidPattern,
    InvalidMultiplier,
    NoReels,
}

impl SlotError {
    /// Kind of this error
    pub fn kind(&self) -> SlotErrorKind {
        match self {
            Self::InvalidBet { .. } => SlotErrorKind::InvalidBet,
            Self::InvalidReelConfiguration { .. } => SlotErrorKind::InvalidReelConfiguration,
            Self::SpinFailure { .. } => SlotErrorKind::SpinFailure,
            Self::PayoutCalculationFailure { .. } => SlotErrorKind::PayoutCalculationFailure,
            Self::CoordinateOutOfBounds { .. } => SlotErrorKind::CoordinateOutOfBounds,
            Self::GridShapeMismatch { .. } => SlotErrorKind::GridShapeMismatch,
            Self::WindowSizeMismatch { .. } => SlotErrorKind::WindowSizeMismatch,
            Self::InvalidPattern { .. } => SlotErrorKind::InvalidPattern,
            Self::InvalidMultiplier { .. } => SlotErrorKind::InvalidMultiplier,
            Self::NoReels => SlotErrorKind::NoReels,
        }
    }

    /// Kind of the innermost error, looking through propagation wrappers
    pub fn root_kind(&self) -> SlotErrorKind {
        match self {
            Self::SpinFailure { source, .. } | Self::PayoutCalculationFailure { source } => {
                source.root_kind()
            }
            other => other.kind(),
        }
    }

    /// Window returned alongside a too-short reel failure (the strip itself)
    pub fn echoed_window(&self) -> Option<&[Symbol]> {
        match self {
            Self::InvalidReelConfiguration { symbols, .. } => Some(symbols.as_slice()),
            Self::SpinFailure { source, .. } => source.echoed_window(),
            _ => None,
        }
    }
}

/// Reject bets that are not strictly positive
pub(crate) fn check_bet(bet: f64) -> Result<(), SlotError> {
    // NaN fails the comparison and is rejected with the rest
    if bet > 0.0 && bet.is_finite() {
        Ok(())
    } else {
        Err(SlotError::InvalidBet { bet })
    }
}

/// Failed round
///
/// Carries the engine's degenerate result: a blank grid when the bet or a
/// spin failed, or the assembled grid when only the payout failed. The win
/// amount of a failed round is always 0.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{error}")]
pub struct RoundError {
    #[source]
    pub error: SlotError,
    pub grid: ResultGrid,
}

impl RoundError {
    pub fn new(error: SlotError, grid: ResultGrid) -> Self {
        Self { error, grid }
    }

    pub fn kind(&self) -> SlotErrorKind {
        self.error.kind()
    }

    pub fn root_kind(&self) -> SlotErrorKind {
        self.error.root_kind()
    }

    /// Always 0 for a failed round
    pub fn win_amount(&self) -> f64 {
        0.0
    }
}
