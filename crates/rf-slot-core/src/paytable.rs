//! Paytable and win calculation

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{SlotError, check_bet};
use crate::grid::{Coordinate, GridShape, ResultGrid};
use crate::symbols::Symbol;

/// A payline: ordered grid coordinates
///
/// The first coordinate's symbol is the line's reference symbol. It decides
/// both what the other cells must match and which multiplier pays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern {
    coordinates: Vec<Coordinate>,
}

impl Pattern {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }

    /// One row index per reel (e.g., [0, 1, 2, 1] for a "V" on 4 reels)
    pub fn from_row_positions(rows: &[usize]) -> Self {
        Self {
            coordinates: rows
                .iter()
                .enumerate()
                .map(|(col, &row)| Coordinate::new(row, col))
                .collect(),
        }
    }

    /// Create a straight line (same row across all reels)
    pub fn straight(row: usize, reel_count: usize) -> Self {
        Self::from_row_positions(&vec![row; reel_count])
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Reference coordinate
    pub fn first(&self) -> Option<Coordinate> {
        self.coordinates.first().copied()
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

impl From<Vec<Coordinate>> for Pattern {
    fn from(coordinates: Vec<Coordinate>) -> Self {
        Self::new(coordinates)
    }
}

/// One straight line per row, top row first
pub fn standard_lines(shape: GridShape) -> Vec<Pattern> {
    (0..shape.rows)
        .map(|row| Pattern::straight(row, shape.reels))
        .collect()
}

/// Anything that can price a result grid
pub trait PayTable: Send + Sync {
    /// Total payout of `grid` for `bet`
    fn calculate_payout(&self, grid: &ResultGrid, bet: f64) -> Result<f64, SlotError>;

    /// Check that this table can evaluate grids of `shape`
    fn validate_shape(&self, _shape: GridShape) -> Result<(), SlotError> {
        Ok(())
    }
}

/// A win on a single pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineWin {
    /// Index of the matched pattern
    pub pattern_index: usize,
    /// Reference symbol (first cell of the line)
    pub symbol: Symbol,
    /// Multiplier of the reference symbol
    pub multiplier: f64,
    /// Win amount (bet × multiplier)
    pub win_amount: f64,
}

/// Result of evaluating a grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Matched patterns, in pattern order
    pub line_wins: Vec<LineWin>,
    /// Total win amount
    pub total_win: f64,
}

impl EvaluationResult {
    /// Check if this is a winning grid
    pub fn is_win(&self) -> bool {
        self.total_win > 0.0
    }

    /// Number of matched patterns (zero-multiplier matches included)
    pub fn win_count(&self) -> usize {
        self.line_wins.len()
    }
}

/// Multiplier table plus paylines
#[derive(Debug, Clone)]
pub struct LinePayTable {
    multipliers: HashMap<Symbol, f64>,
    patterns: Vec<Pattern>,
    wild: Symbol,
}

impl LinePayTable {
    /// Create a pay table with the conventional wild ("X")
    ///
    /// Rejects empty patterns and multipliers that are negative or not finite.
    /// Coordinates are checked against the grid when the engine is built.
    pub fn new(
        multipliers: impl IntoIterator<Item = (Symbol, f64)>,
        patterns: Vec<Pattern>,
    ) -> Result<Self, SlotError> {
        let multipliers: HashMap<Symbol, f64> = multipliers.into_iter().collect();

        if let Some((symbol, &multiplier)) = multipliers
            .iter()
            .find(|&(_, &m)| !(m >= 0.0 && m.is_finite()))
        {
            return Err(SlotError::InvalidMultiplier {
                symbol: symbol.clone(),
                multiplier,
            });
        }

        if let Some(pattern_index) = patterns.iter().position(Pattern::is_empty) {
            return Err(SlotError::InvalidPattern {
                pattern_index,
                reason: "pattern has no coordinates".into(),
            });
        }

        Ok(Self {
            multipliers,
            patterns,
            wild: Symbol::wild(),
        })
    }

    /// Use a different wild token
    pub fn with_wild(mut self, wild: impl Into<Symbol>) -> Self {
        self.wild = wild.into();
        self
    }

    /// Multiplier for a symbol (0 when unmapped)
    pub fn multiplier(&self, symbol: &Symbol) -> f64 {
        self.multipliers.get(symbol).copied().unwrap_or(0.0)
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn wild(&self) -> &Symbol {
        &self.wild
    }

    /// Evaluate every pattern on a grid
    pub fn evaluate(&self, grid: &ResultGrid, bet: f64) -> Result<EvaluationResult, SlotError> {
        check_bet(bet)?;

        let mut line_wins = Vec::new();
        for (pattern_index, pattern) in self.patterns.iter().enumerate() {
            if let Some(win) = self.evaluate_line(grid, pattern_index, pattern, bet)? {
                line_wins.push(win);
            }
        }

        let total_win = line_wins.iter().map(|w| w.win_amount).sum();

        Ok(EvaluationResult {
            line_wins,
            total_win,
        })
    }

    fn evaluate_line(
        &self,
        grid: &ResultGrid,
        pattern_index: usize,
        pattern: &Pattern,
        bet: f64,
    ) -> Result<Option<LineWin>, SlotError> {
        let line = pattern
            .coordinates
            .iter()
            .map(|&c| grid.get(c))
            .collect::<Result<Vec<&Symbol>, SlotError>>()?;

        let Some(&reference) = line.first() else {
            return Ok(None);
        };

        // The reference is the literal first symbol, even when it is the wild
        let matched = line
            .iter()
            .all(|&symbol| *symbol == self.wild || symbol == reference);
        if !matched {
            return Ok(None);
        }

        let multiplier = self.multiplier(reference);
        Ok(Some(LineWin {
            pattern_index,
            symbol: reference.clone(),
            multiplier,
            win_amount: multiplier * bet,
        }))
    }
}

impl PayTable for LinePayTable {
    fn calculate_payout(&self, grid: &ResultGrid, bet: f64) -> Result<f64, SlotError> {
        Ok(self.evaluate(grid, bet)?.total_win)
    }

    fn validate_shape(&self, shape: GridShape) -> Result<(), SlotError> {
        for (pattern_index, pattern) in self.patterns.iter().enumerate() {
            if let Some(coordinate) = pattern.coordinates.iter().find(|&&c| !shape.contains(c)) {
                return Err(SlotError::InvalidPattern {
                    pattern_index,
                    reason: format!("coordinate {coordinate} is outside the {shape} grid"),
                });
            }
        }
        Ok(())
    }
}
