//! Neighbor enumeration for the supported board topologies.
//!
//! Hex boards are stored in an ordinary square array with every odd row
//! shifted half a cell to the right, so which diagonal cells touch a given
//! cell depends on the parity of its row.

use hexlife_core::{Cell, Coordinate, TopologyKind};
use std::fmt::Debug;

/// Weight of directly adjacent neighbors
pub const INNER_WEIGHT: f64 = 1.0;
/// Weight of the second-ring Hex12 neighbors that are not on the row axis
pub const OUTER_WEIGHT: f64 = 0.3;

/// A neighbor-enumeration strategy.
///
/// Implementations are pure functions of the board size and coordinate and
/// never yield a coordinate outside `[0, size)²`.
pub trait Topology: Debug + Send + Sync {
    /// Append the neighbors of `at` to `out`.
    fn neighbors_into(&self, size: usize, at: Coordinate, out: &mut Vec<Cell>);

    /// Upper bound on the number of neighbors of any cell
    fn max_neighbors(&self) -> usize;

    fn neighbors(&self, size: usize, at: Coordinate) -> Vec<Cell> {
        let mut out = Vec::with_capacity(self.max_neighbors());
        self.neighbors_into(size, at, &mut out);
        out
    }
}

/// Push every in-range `at + offset` with the given weight.
fn push_offsets(
    size: usize,
    at: Coordinate,
    offsets: &[(i32, i32)],
    weight: f64,
    out: &mut Vec<Cell>,
) {
    for &(d_row, d_col) in offsets {
        let coordinate = at.offset(d_row, d_col);
        if coordinate.in_bounds(size) {
            out.push(Cell::new(coordinate, weight));
        }
    }
}

/// Rectangular board with the Moore neighborhood
#[derive(Debug, Clone, Copy, Default)]
pub struct Rect8;

impl Rect8 {
    const OFFSETS: [(i32, i32); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];
}

impl Topology for Rect8 {
    fn neighbors_into(&self, size: usize, at: Coordinate, out: &mut Vec<Cell>) {
        push_offsets(size, at, &Self::OFFSETS, INNER_WEIGHT, out);
    }

    fn max_neighbors(&self) -> usize {
        8
    }
}

/// Hex board, six touching cells
#[derive(Debug, Clone, Copy, Default)]
pub struct Hex6;

impl Hex6 {
    const COMMON: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
    const EVEN_ROW: [(i32, i32); 2] = [(-1, -1), (1, -1)];
    const ODD_ROW: [(i32, i32); 2] = [(-1, 1), (1, 1)];
}

impl Topology for Hex6 {
    fn neighbors_into(&self, size: usize, at: Coordinate, out: &mut Vec<Cell>) {
        push_offsets(size, at, &Self::COMMON, INNER_WEIGHT, out);
        let diagonals = if at.is_odd_row() {
            &Self::ODD_ROW
        } else {
            &Self::EVEN_ROW
        };
        push_offsets(size, at, diagonals, INNER_WEIGHT, out);
    }

    fn max_neighbors(&self) -> usize {
        6
    }
}

/// Hex board, the six touching cells plus six cells of the second ring.
///
/// The two cells two rows straight up and down count fully; the four
/// remaining second-ring cells count with [`OUTER_WEIGHT`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Hex12 {
    inner: Hex6,
}

impl Hex12 {
    const FAR_AXIAL: [(i32, i32); 2] = [(-2, 0), (2, 0)];
    const EVEN_ROW: [(i32, i32); 4] = [(-1, -2), (-1, 1), (1, 1), (1, -2)];
    const ODD_ROW: [(i32, i32); 4] = [(-1, 2), (-1, -1), (1, -1), (1, 2)];
}

impl Topology for Hex12 {
    fn neighbors_into(&self, size: usize, at: Coordinate, out: &mut Vec<Cell>) {
        self.inner.neighbors_into(size, at, out);
        push_offsets(size, at, &Self::FAR_AXIAL, INNER_WEIGHT, out);
        let outer = if at.is_odd_row() {
            &Self::ODD_ROW
        } else {
            &Self::EVEN_ROW
        };
        push_offsets(size, at, outer, OUTER_WEIGHT, out);
    }

    fn max_neighbors(&self) -> usize {
        12
    }
}

/// Topology implementation for a kind
pub fn topology_for(kind: TopologyKind) -> Box<dyn Topology> {
    match kind {
        TopologyKind::Rect8 => Box::new(Rect8),
        TopologyKind::Hex6 => Box::new(Hex6),
        TopologyKind::Hex12 => Box::new(Hex12::default()),
    }
}
