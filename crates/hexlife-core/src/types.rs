//! Core type definitions for the automaton.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    Alive,
    #[default]
    Dead,
}

impl CellState {
    pub const ALIVE_SYMBOL: char = 'X';
    pub const DEAD_SYMBOL: char = '.';

    /// Any symbol other than `X` reads as dead.
    pub fn from_symbol(symbol: char) -> Self {
        if symbol == Self::ALIVE_SYMBOL {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            CellState::Alive => Self::ALIVE_SYMBOL,
            CellState::Dead => Self::DEAD_SYMBOL,
        }
    }

    pub fn is_alive(&self) -> bool {
        matches!(self, CellState::Alive)
    }

    pub fn from_alive(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Row/column position on the board.
///
/// Signed so that neighbor offsets can step past the edges before being
/// filtered against the board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn offset(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// True when both components lie in `[0, size)`
    pub fn in_bounds(&self, size: usize) -> bool {
        let size = size as i64;
        (0..size).contains(&(self.row as i64)) && (0..size).contains(&(self.col as i64))
    }

    /// Odd rows are shifted half a cell in the hex layouts
    pub fn is_odd_row(&self) -> bool {
        self.row.rem_euclid(2) == 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A neighbor relation: where the neighbor sits and how much it counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    coordinate: Coordinate,
    weight: f64,
}

impl Cell {
    pub fn new(coordinate: Coordinate, weight: f64) -> Self {
        Self { coordinate, weight }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// `cell[0]` is the row, `cell[1]` the column.
impl Index<usize> for Cell {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        match index {
            0 => &self.coordinate.row,
            1 => &self.coordinate.col,
            _ => panic!("cell index out of range: {} (expected 0 or 1)", index),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.coordinate, self.weight)
    }
}

/// Neighborhood topology, identified on the command line and in config
/// files by its neighbor count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TopologyKind {
    /// Rectangular board, Moore neighborhood
    Rect8,
    /// Staggered hex board, six adjacent cells
    #[default]
    Hex6,
    /// Staggered hex board, six adjacent cells plus six second-ring cells
    Hex12,
}

impl TopologyKind {
    pub fn neighbor_count(&self) -> u8 {
        match self {
            TopologyKind::Rect8 => 8,
            TopologyKind::Hex6 => 6,
            TopologyKind::Hex12 => 12,
        }
    }

    pub fn is_hex(&self) -> bool {
        !matches!(self, TopologyKind::Rect8)
    }

    pub fn all() -> [TopologyKind; 3] {
        [TopologyKind::Rect8, TopologyKind::Hex6, TopologyKind::Hex12]
    }
}

impl TryFrom<u8> for TopologyKind {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            8 => Ok(TopologyKind::Rect8),
            6 => Ok(TopologyKind::Hex6),
            12 => Ok(TopologyKind::Hex12),
            other => Err(Error::InvalidConfiguration(format!(
                "unsupported neighbor count {} (expected 6, 8 or 12)",
                other
            ))),
        }
    }
}

impl From<TopologyKind> for u8 {
    fn from(kind: TopologyKind) -> u8 {
        kind.neighbor_count()
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologyKind::Rect8 => write!(f, "rect8"),
            TopologyKind::Hex6 => write!(f, "hex6"),
            TopologyKind::Hex12 => write!(f, "hex12"),
        }
    }
}
