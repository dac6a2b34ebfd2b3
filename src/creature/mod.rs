//! Reference element domain: creatures grouped by type.
//!
//! ## Types
//!
//! - [`Creature`]: The stored record
//! - [`TypeChart`]: Types and their effectiveness relations
//! - [`CreatureRules`]: The `ElementOps` implementation for creatures
//!
//! A creature's type is its category; creatures are ordered by base
//! attack and fight with type-adjusted attack.

mod chart;
mod record;
mod rules;

pub use chart::{Relation, TypeChart, TypeEntry, TypeSummary};
pub use record::Creature;
pub use rules::{CreatureRules, DISADVANTAGE_PENALTY};
