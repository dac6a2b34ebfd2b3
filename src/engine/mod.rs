//! Matching engine module for the battle center.
//!
//! ## Design Principles
//!
//! The matching engine is designed for:
//!
//! 1. **Determinism**: Same contents and challenger always select the same opponent
//! 2. **Owned Storage**: Every stored element is a deep copy
//! 3. **Synchronous Execution**: Every operation runs to completion
//! 4. **Declared-Order Priority**: Earlier categories win score ties
//!
//! ## Matching Rules
//!
//! - Each category contributes its strongest element as a candidate
//! - The candidate with the greatest score diff is selected
//! - The first non-empty category is always a valid baseline, even if it loses
//! - `fight` never removes elements
//!
//! ## Example
//!
//! ```
//! use battle_center::creature::{Creature, CreatureRules, TypeChart};
//! use battle_center::engine::MatchingEngine;
//! use battle_center::types::Verdict;
//!
//! let rules = CreatureRules::new(TypeChart::from_csv("Fire,Water"));
//! let mut engine = MatchingEngine::new(10, 2, "Fire,Water", rules).unwrap();
//!
//! engine.insert(&Creature::new("Charmander", "Lizard", 0.6, 8.5, 52, "Fire")).unwrap();
//!
//! let challenger = Creature::new("Squirtle", "Turtle", 0.5, 9.0, 48, "Water");
//! let outcome = engine.fight(&challenger).unwrap();
//! let fight = outcome.fight().unwrap();
//!
//! assert_eq!(fight.candidate.name, "Charmander");
//! assert_eq!(fight.verdict, Verdict::CandidateWins);
//! ```

pub mod config;
pub mod matcher;

pub use config::{category_tokens, EngineConfig, CATEGORY_SEPARATOR};
pub use matcher::MatchingEngine;
