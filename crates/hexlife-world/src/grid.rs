//! Dense square board and its generation update.

use crate::rules::{rule_set_for, RuleSet};
use crate::topology::{topology_for, Topology};
use hexlife_core::{
    validate_probability, validate_size, Cell, CellState, Coordinate, Layout, LayoutWarning,
    Result, TopologyKind,
};
use rand::Rng;
use std::fmt;
use std::path::Path;
use tracing::{debug, trace};

/// A `size × size` board bound to one topology and its rule.
///
/// Cell states are double-buffered: `update` fills `next` from the frozen
/// `cells` snapshot and then swaps the two, so no cell ever sees a
/// neighbor's next-generation value.
#[derive(Debug)]
pub struct Grid {
    kind: TopologyKind,
    size: usize,
    cells: Vec<CellState>,
    next: Vec<CellState>,
    topology: Box<dyn Topology>,
    rules: Box<dyn RuleSet>,
    warnings: Vec<LayoutWarning>,
}

impl Grid {
    /// All-dead board
    pub fn new(kind: TopologyKind, size: usize) -> Result<Self> {
        validate_size(size)?;
        Ok(Self::with_cells(
            kind,
            size,
            vec![CellState::Dead; size * size],
            Vec::new(),
        ))
    }

    /// Seed every cell independently, alive with the given probability
    pub fn random<R: Rng + ?Sized>(
        kind: TopologyKind,
        size: usize,
        probability: f64,
        rng: &mut R,
    ) -> Result<Self> {
        validate_size(size)?;
        validate_probability(probability)?;

        let cells = (0..size * size)
            .map(|_| CellState::from_alive(rng.gen_bool(probability)))
            .collect();

        Ok(Self::with_cells(kind, size, cells, Vec::new()))
    }

    /// Build from a parsed layout; its warnings stay available via [`Grid::warnings`].
    pub fn from_layout(kind: TopologyKind, layout: Layout) -> Self {
        let (size, cells, warnings) = layout.into_parts();
        Self::with_cells(kind, size, cells, warnings)
    }

    pub fn from_text(kind: TopologyKind, text: &str) -> Result<Self> {
        Ok(Self::from_layout(kind, Layout::parse(text)?))
    }

    pub fn from_file(kind: TopologyKind, path: &Path) -> Result<Self> {
        Ok(Self::from_layout(kind, Layout::from_file(path)?))
    }

    fn with_cells(
        kind: TopologyKind,
        size: usize,
        cells: Vec<CellState>,
        warnings: Vec<LayoutWarning>,
    ) -> Self {
        assert!(size > 0 && cells.len() == size * size, "cells do not form a square board");
        Self {
            kind,
            size,
            next: vec![CellState::Dead; cells.len()],
            cells,
            topology: topology_for(kind),
            rules: rule_set_for(kind),
            warnings,
        }
    }

    pub fn kind(&self) -> TopologyKind {
        self.kind
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Rows of the source layout that had to be padded or truncated
    pub fn warnings(&self) -> &[LayoutWarning] {
        &self.warnings
    }

    /// State at a coordinate.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the board.
    pub fn cell_at(&self, at: Coordinate) -> CellState {
        self.cells[self.index_of(at)]
    }

    /// # Panics
    ///
    /// Panics if the coordinate lies outside the board.
    pub fn set(&mut self, at: Coordinate, state: CellState) {
        let index = self.index_of(at);
        self.cells[index] = state;
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn neighbors(&self, at: Coordinate) -> Vec<Cell> {
        self.topology.neighbors(self.size, at)
    }

    /// Weighted count of live neighbors
    pub fn neighbor_score(&self, at: Coordinate) -> f64 {
        self.score(&self.neighbors(at))
    }

    fn score(&self, neighbors: &[Cell]) -> f64 {
        neighbors
            .iter()
            .filter(|n| self.cell_at(n.coordinate()).is_alive())
            .map(|n| n.weight())
            .sum()
    }

    /// Advance the whole board by one generation
    pub fn update(&mut self) {
        let mut neighbors = Vec::with_capacity(self.topology.max_neighbors());

        for index in 0..self.cells.len() {
            let at = self.index_to_coordinate(index);
            neighbors.clear();
            self.topology.neighbors_into(self.size, at, &mut neighbors);

            let score = self.score(&neighbors);
            let current = self.cells[index];
            let alive = self.rules.is_alive(current, score);
            trace!(row = at.row, col = at.col, score, alive, "cell evaluated");

            self.next[index] = CellState::from_alive(alive);
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        debug!(population = self.population(), "generation updated");
    }

    /// Text snapshot: raw rows for Rect8, spaced and staggered rows for the hex boards
    pub fn render(&self) -> String {
        self.rows()
            .enumerate()
            .map(|(row, cells)| {
                let symbols = cells.iter().map(CellState::symbol);
                if self.kind.is_hex() {
                    let joined = symbols.map(String::from).collect::<Vec<_>>().join(" ");
                    if row % 2 == 1 {
                        format!(" {}", joined)
                    } else {
                        joined
                    }
                } else {
                    symbols.collect()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Iterator over all coordinates in row-major order
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.cells.len()).map(move |i| self.index_to_coordinate(i))
    }

    fn index_of(&self, at: Coordinate) -> usize {
        assert!(
            at.in_bounds(self.size),
            "coordinate {} is outside a {}x{} grid",
            at,
            self.size,
            self.size
        );
        at.row as usize * self.size + at.col as usize
    }

    fn index_to_coordinate(&self, index: usize) -> Coordinate {
        Coordinate::new((index / self.size) as i32, (index % self.size) as i32)
    }
}

impl Clone for Grid {
    fn clone(&self) -> Self {
        Self::with_cells(self.kind, self.size, self.cells.clone(), self.warnings.clone())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
