//! Survival and birth rules.

use hexlife_core::{CellState, TopologyKind};
use std::fmt::Debug;

/// Decides a cell's next state from its current state and weighted neighbor score.
pub trait RuleSet: Debug + Send + Sync {
    fn is_alive(&self, current: CellState, neighbor_score: f64) -> bool;
}

/// Conway's Life (B3/S23), used for the Rect8 and Hex6 boards.
///
/// Every neighbor weighs 1.0 there, so the score is an exact integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConwayRule;

impl RuleSet for ConwayRule {
    fn is_alive(&self, current: CellState, neighbor_score: f64) -> bool {
        match current {
            CellState::Alive => neighbor_score == 2.0 || neighbor_score == 3.0,
            CellState::Dead => neighbor_score == 3.0,
        }
    }
}

/// Weighted hex rule for the Hex12 board (http://www.well.com/~dgb/hexrules.html).
#[derive(Debug, Clone, Copy, Default)]
pub struct HexRule;

impl HexRule {
    pub const SURVIVE_MIN: f64 = 2.0;
    pub const SURVIVE_MAX: f64 = 3.3;
    pub const BIRTH_MIN: f64 = 2.3;
    pub const BIRTH_MAX: f64 = 2.9;
}

impl RuleSet for HexRule {
    fn is_alive(&self, current: CellState, neighbor_score: f64) -> bool {
        match current {
            CellState::Alive => {
                Self::SURVIVE_MIN < neighbor_score && neighbor_score < Self::SURVIVE_MAX
            }
            CellState::Dead => Self::BIRTH_MIN < neighbor_score && neighbor_score < Self::BIRTH_MAX,
        }
    }
}

/// Rule implementation paired with a topology
pub fn rule_set_for(kind: TopologyKind) -> Box<dyn RuleSet> {
    match kind {
        TopologyKind::Rect8 | TopologyKind::Hex6 => Box::new(ConwayRule),
        TopologyKind::Hex12 => Box::new(HexRule),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexlife_core::CellState::{Alive, Dead};

    #[test]
    fn test_conway_survival() {
        let rule = ConwayRule;
        assert!(!rule.is_alive(Alive, 0.0));
        assert!(!rule.is_alive(Alive, 1.0));
        assert!(rule.is_alive(Alive, 2.0));
        assert!(rule.is_alive(Alive, 3.0));
        assert!(!rule.is_alive(Alive, 4.0));
        assert!(!rule.is_alive(Alive, 8.0));
    }

    #[test]
    fn test_conway_birth() {
        let rule = ConwayRule;
        assert!(!rule.is_alive(Dead, 2.0));
        assert!(rule.is_alive(Dead, 3.0));
        assert!(!rule.is_alive(Dead, 4.0));
    }

    #[test]
    fn test_hex_rule_survival_window() {
        let rule = HexRule;
        assert!(!rule.is_alive(Alive, 2.0));
        assert!(rule.is_alive(Alive, 2.3));
        assert!(rule.is_alive(Alive, 3.0));
        assert!(rule.is_alive(Alive, 3.2));
        assert!(!rule.is_alive(Alive, 3.6));
    }

    #[test]
    fn test_hex_rule_birth_window() {
        let rule = HexRule;
        assert!(!rule.is_alive(Dead, 2.0));
        assert!(!rule.is_alive(Dead, 2.3));
        assert!(rule.is_alive(Dead, 2.6));
        assert!(!rule.is_alive(Dead, 2.9));
        assert!(!rule.is_alive(Dead, 3.0));
    }

    #[test]
    fn test_rule_set_for_kind() {
        // Three full neighbors give birth under Conway but not under the hex rule
        assert!(rule_set_for(TopologyKind::Rect8).is_alive(Dead, 3.0));
        assert!(rule_set_for(TopologyKind::Hex6).is_alive(Dead, 3.0));
        assert!(!rule_set_for(TopologyKind::Hex12).is_alive(Dead, 3.0));
    }
}
