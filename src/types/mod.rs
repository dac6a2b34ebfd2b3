//! Core types shared by the containers and the engine.
//!
//! ## Types
//!
//! - [`ElementOps`]: Operation set for an opaque element type
//! - [`Score`]: Effective attack pair and their difference
//! - [`BattleError`]: Error taxonomy
//! - [`FightOutcome`], [`Fight`], [`Verdict`]: Result of a fight

mod error;
mod fight;
mod ops;

// Re-export all types at module level
pub use error::BattleError;
pub use fight::{Fight, FightOutcome, Transcript, Verdict};
pub use ops::{ElementOps, Rendered, Score};
