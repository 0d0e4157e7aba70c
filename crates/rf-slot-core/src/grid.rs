//! Result grid and coordinates

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SlotError;
use crate::symbols::Symbol;

/// A cell position: row = window position, col = reel index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Grid dimensions (window size × reel count)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridShape {
    /// Visible rows per reel (spin window size)
    pub rows: usize,
    /// Number of reels (columns)
    pub reels: usize,
}

impl GridShape {
    pub const fn new(rows: usize, reels: usize) -> Self {
        Self { rows, reels }
    }

    /// Total grid positions
    pub fn total_positions(&self) -> usize {
        self.rows * self.reels
    }

    /// Is the coordinate inside this shape?
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.rows && coordinate.col < self.reels
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.reels)
    }
}

/// Symbols visible after one round, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct ResultGrid {
    shape: GridShape,
    cells: Vec<Symbol>,
}

/// Unchecked serde form of [`ResultGrid`]
#[derive(Deserialize)]
struct RawGrid {
    shape: GridShape,
    cells: Vec<Symbol>,
}

impl TryFrom<RawGrid> for ResultGrid {
    type Error = SlotError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let expected = raw.shape.total_positions();
        if raw.cells.len() != expected {
            return Err(SlotError::GridShapeMismatch {
                expected: raw.shape,
                found: GridShape::new(raw.cells.len().div_ceil(raw.shape.reels.max(1)), raw.shape.reels),
            });
        }
        Ok(Self {
            shape: raw.shape,
            cells: raw.cells,
        })
    }
}

impl ResultGrid {
    /// Zero-value grid: every cell holds the blank symbol
    pub fn blank(shape: GridShape) -> Self {
        Self {
            shape,
            cells: vec![Symbol::default(); shape.total_positions()],
        }
    }

    /// Build from row vectors (top row first)
    pub fn from_rows(rows: Vec<Vec<Symbol>>) -> Result<Self, SlotError> {
        let reels = rows.first().map(Vec::len).unwrap_or(0);
        let shape = GridShape::new(rows.len(), reels);

        if let Some(ragged) = rows.iter().find(|r| r.len() != reels) {
            return Err(SlotError::GridShapeMismatch {
                expected: shape,
                found: GridShape::new(rows.len(), ragged.len()),
            });
        }

        Ok(Self {
            shape,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Write a spin window into column `col`: window position i lands in row i
    pub fn set_column(&mut self, col: usize, window: &[Symbol]) -> Result<(), SlotError> {
        if col >= self.shape.reels {
            return Err(SlotError::CoordinateOutOfBounds {
                coordinate: Coordinate::new(0, col),
                shape: self.shape,
            });
        }
        if window.len() != self.shape.rows {
            return Err(SlotError::WindowSizeMismatch {
                reel_index: col,
                expected: self.shape.rows,
                found: window.len(),
            });
        }

        for (row, symbol) in window.iter().enumerate() {
            let idx = self.index(Coordinate::new(row, col));
            self.cells[idx] = symbol.clone();
        }
        Ok(())
    }

    /// Bounds-checked cell access
    pub fn get(&self, coordinate: Coordinate) -> Result<&Symbol, SlotError> {
        if !self.shape.contains(coordinate) {
            return Err(SlotError::CoordinateOutOfBounds {
                coordinate,
                shape: self.shape,
            });
        }
        Ok(&self.cells[self.index(coordinate)])
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    pub fn reels(&self) -> usize {
        self.shape.reels
    }

    /// One row, left to right
    pub fn row(&self, row: usize) -> Option<&[Symbol]> {
        if row >= self.shape.rows {
            return None;
        }
        let start = row * self.shape.reels;
        Some(&self.cells[start..start + self.shape.reels])
    }

    /// One reel's window, top to bottom
    pub fn column(&self, col: usize) -> Option<Vec<Symbol>> {
        if col >= self.shape.reels {
            return None;
        }
        Some(
            (0..self.shape.rows)
                .map(|row| self.cells[self.index(Coordinate::new(row, col))].clone())
                .collect(),
        )
    }

    /// All rows, top first
    pub fn to_rows(&self) -> Vec<Vec<Symbol>> {
        if self.shape.reels == 0 {
            return vec![Vec::new(); self.shape.rows];
        }
        self.cells
            .chunks(self.shape.reels)
            .map(<[Symbol]>::to_vec)
            .collect()
    }

    fn index(&self, coordinate: Coordinate) -> usize {
        coordinate.row * self.shape.reels + coordinate.col
    }
}

impl fmt::Display for ResultGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.shape.rows {
            let line = self
                .row(row)
                .unwrap_or_default()
                .iter()
                .map(Symbol::as_str)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SlotErrorKind;
    use crate::symbols::symbols;

    #[test]
    fn test_blank_grid() {
        let grid = ResultGrid::blank(GridShape::new(3, 4));
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.reels(), 4);
        assert!(grid.get(Coordinate::new(2, 3)).unwrap().is_blank());
    }

    #[test]
    fn test_set_column_maps_window_to_rows() {
        let mut grid = ResultGrid::blank(GridShape::new(3, 2));
        grid.set_column(1, &symbols(&["A", "K", "Q"])).unwrap();

        assert_eq!(grid.get(Coordinate::new(0, 1)).unwrap(), "A");
        assert_eq!(grid.get(Coordinate::new(1, 1)).unwrap(), "K");
        assert_eq!(grid.get(Coordinate::new(2, 1)).unwrap(), "Q");
        assert!(grid.get(Coordinate::new(0, 0)).unwrap().is_blank());
        assert_eq!(grid.column(1), Some(symbols(&["A", "K", "Q"])));
    }

    #[test]
    fn test_set_column_rejects_bad_window() {
        let mut grid = ResultGrid::blank(GridShape::new(3, 2));

        let err = grid.set_column(0, &symbols(&["A", "K"])).unwrap_err();
        assert_eq!(err.kind(), SlotErrorKind::WindowSizeMismatch);

        let err = grid.set_column(2, &symbols(&["A", "K", "Q"])).unwrap_err();
        assert_eq!(err.kind(), SlotErrorKind::CoordinateOutOfBounds);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = ResultGrid::blank(GridShape::new(3, 4));

        for coordinate in [Coordinate::new(3, 0), Coordinate::new(0, 4)] {
            let err = grid.get(coordinate).unwrap_err();
            assert_eq!(err.kind(), SlotErrorKind::CoordinateOutOfBounds);
        }
    }

    #[test]
    fn test_from_rows() {
        let grid = ResultGrid::from_rows(vec![
            symbols(&["K", "A", "J", "10"]),
            symbols(&["A", "A", "A", "A"]),
            symbols(&["Q", "Q", "J", "J"]),
        ])
        .unwrap();

        assert_eq!(grid.shape(), GridShape::new(3, 4));
        assert_eq!(grid.get(Coordinate::new(0, 3)).unwrap(), "10");
        assert_eq!(grid.row(1), Some(&symbols(&["A", "A", "A", "A"])[..]));
        assert_eq!(grid.to_rows()[2], symbols(&["Q", "Q", "J", "J"]));
        assert_eq!(grid.to_string(), "K A J 10\nA A A A\nQ Q J J\n");
    }

    #[test]
    fn test_json_roundtrip_keeps_shape() {
        let mut grid = ResultGrid::blank(GridShape::new(3, 2));
        grid.set_column(0, &symbols(&["A", "K", "Q"])).unwrap();

        let json = serde_json::to_string(&grid).unwrap();
        let parsed: ResultGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, grid);
    }

    #[test]
    fn test_json_rejects_cells_not_matching_shape() {
        let short = r#"{"shape":{"rows":3,"reels":4},"cells":["A"]}"#;
        let err = serde_json::from_str::<ResultGrid>(short).unwrap_err();
        assert!(err.to_string().contains("3x4"));

        let long = r#"{"shape":{"rows":1,"reels":1},"cells":["A","K"]}"#;
        assert!(serde_json::from_str::<ResultGrid>(long).is_err());
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = ResultGrid::from_rows(vec![symbols(&["A", "A"]), symbols(&["A"])]).unwrap_err();
        assert_eq!(err.kind(), SlotErrorKind::GridShapeMismatch);
    }
}
