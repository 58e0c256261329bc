//! Cellular automaton engine.
//!
//! This crate implements the square board, the Rect8/Hex6/Hex12 neighbor
//! topologies with their rules, and the generation driver.

pub mod grid;
pub mod rules;
pub mod simulation;
pub mod topology;

pub use grid::Grid;
pub use rules::{rule_set_for, ConwayRule, HexRule, RuleSet};
pub use simulation::{RunObserver, Simulation, SimulationResult, Snapshot};
pub use topology::{topology_for, Hex12, Hex6, Rect8, Topology};
