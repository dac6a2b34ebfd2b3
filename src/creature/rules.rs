//! Creature operation set: ordering, category, and effectiveness scoring.
//!
//! ## Effective Attack
//!
//! A side loses 10 attack points when its own type is weak to the
//! opponent's type, or when the opponent's type is strong against it.
//! Both conditions together still cost only 10. Effective attack never
//! drops below zero.

use std::cmp::Ordering;
use std::fmt;

use crate::creature::{Creature, TypeChart};
use crate::types::{BattleError, ElementOps, Score};

/// Attack penalty for a type disadvantage
pub const DISADVANTAGE_PENALTY: i32 = 10;

/// `ElementOps` for [`Creature`], backed by a [`TypeChart`].
#[derive(Debug, Clone, Default)]
pub struct CreatureRules {
    chart: TypeChart,
}

impl CreatureRules {
    /// Create rules over a chart
    pub fn new(chart: TypeChart) -> Self {
        Self { chart }
    }

    /// The type chart
    #[inline]
    pub fn chart(&self) -> &TypeChart {
        &self.chart
    }

    /// Whether `defender`'s type is at a disadvantage against `attacker`'s
    fn disadvantaged(&self, defender: &str, attacker: &str) -> bool {
        let weak = self
            .chart
            .get(defender)
            .is_some_and(|entry| entry.is_weak_to(attacker));
        let countered = self
            .chart
            .get(attacker)
            .is_some_and(|entry| entry.is_strong_against(defender));
        weak || countered
    }

    fn effective_attack(&self, creature: &Creature, opponent: &Creature) -> i32 {
        let penalty = if self.disadvantaged(&creature.kind, &opponent.kind) {
            DISADVANTAGE_PENALTY
        } else {
            0
        };
        (creature.attack - penalty).max(0)
    }
}

impl ElementOps for CreatureRules {
    type Element = Creature;

    fn duplicate(&self, element: &Creature) -> Result<Creature, BattleError> {
        Ok(element.clone())
    }

    fn compare(&self, a: &Creature, b: &Creature) -> Ordering {
        a.attack.cmp(&b.attack)
    }

    fn category_of<'e>(&self, element: &'e Creature) -> Option<&'e str> {
        Some(element.kind.as_str())
    }

    fn score(&self, candidate: &Creature, challenger: &Creature) -> Score {
        Score::new(
            self.effective_attack(candidate, challenger),
            self.effective_attack(challenger, candidate),
        )
    }

    fn render(&self, element: &Creature, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{element}")
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::Relation;

    fn rules() -> CreatureRules {
        let mut chart = TypeChart::from_csv("Fire,Water,Grass,Normal");
        chart.relate("Fire", Relation::WeakTo, "Water").unwrap();
        chart.relate("Water", Relation::StrongAgainst, "Fire").unwrap();
        chart.relate("Grass", Relation::WeakTo, "Fire").unwrap();
        CreatureRules::new(chart)
    }

    fn creature(attack: i32, kind: &str) -> Creature {
        Creature::new("x", "y", 1.0, 1.0, attack, kind)
    }

    #[test]
    fn test_score_without_relations() {
        let score = rules().score(&creature(50, "Normal"), &creature(40, "Normal"));

        assert_eq!(score, Score::new(50, 40));
        assert_eq!(score.diff, 10);
    }

    #[test]
    fn test_double_disadvantage_costs_ten() {
        // Fire is weak to Water and Water is strong against Fire
        let score = rules().score(&creature(50, "Fire"), &creature(45, "Water"));

        assert_eq!(score.candidate_attack, 40);
        assert_eq!(score.challenger_attack, 45);
        assert_eq!(score.diff, -5);
    }

    #[test]
    fn test_challenger_penalised() {
        let score = rules().score(&creature(30, "Fire"), &creature(35, "Grass"));

        assert_eq!(score.candidate_attack, 30);
        assert_eq!(score.challenger_attack, 25);
        assert_eq!(score.diff, 5);
    }

    #[test]
    fn test_attack_floor_is_zero() {
        let score = rules().score(&creature(4, "Grass"), &creature(4, "Fire"));

        assert_eq!(score.candidate_attack, 0);
        assert_eq!(score.diff, -4);
    }

    #[test]
    fn test_unknown_kind_has_no_modifier() {
        let score = rules().score(&creature(20, "Ghost"), &creature(20, "Fire"));
        assert_eq!(score.diff, 0);
    }

    #[test]
    fn test_compare_and_category() {
        let rules = rules();
        let strong = creature(60, "Fire");
        let weak = creature(10, "Water");

        assert_eq!(rules.compare(&strong, &weak), Ordering::Greater);
        assert_eq!(rules.compare(&weak, &strong), Ordering::Less);
        assert_eq!(rules.compare(&weak, &weak), Ordering::Equal);
        assert_eq!(rules.category_of(&strong), Some("Fire"));
    }

    #[test]
    fn test_duplicate_is_independent() {
        let rules = rules();
        let mut original = creature(60, "Fire");
        let copy = rules.duplicate(&original).unwrap();

        original.attack = 1;
        assert_eq!(copy.attack, 60);
    }
}
