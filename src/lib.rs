//! # Battle Center
//!
//! Category-partitioned max-heap matching engine.
//!
//! ## Architecture
//!
//! The engine consists of:
//! - **Types**: Operation set trait, scores, fight results, errors
//! - **Heap**: Fixed-capacity max-heap per category
//! - **Index**: Slab-backed category index in declared order
//! - **Engine**: Insert, remove-strongest and cross-category fight
//! - **Creature**: Reference element domain with type effectiveness
//! - **Loader**: Roster file reader feeding the engine
//!
//! ## Design Principles
//!
//! 1. **Owned Copies**: Every stored element is a deep copy; callers keep their own
//! 2. **Fixed Capacity**: Containers never grow past their configured size
//! 3. **Declared Order**: Category scan order comes from the category list, never a map
//! 4. **Synchronous Execution**: No async, no background work

// ============================================================================
// Module declarations
// ============================================================================

/// Core types: ElementOps, Score, FightOutcome, BattleError
pub mod types;

/// Fixed-capacity max-heap
pub mod heap;

/// Category index with slab-based storage
pub mod index;

/// Matching engine: insert, remove, fight
pub mod engine;

/// Creatures, type chart and their operation set
pub mod creature;

/// Roster file loader
pub mod loader;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{BattleError, ElementOps, Fight, FightOutcome, Score, Verdict};
pub use heap::PriorityContainer;
pub use index::CategoryIndex;
pub use engine::{EngineConfig, MatchingEngine};
pub use creature::{Creature, CreatureRules, TypeChart};
pub use loader::{load_roster, load_roster_file, LoadError};
