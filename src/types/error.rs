//! Error taxonomy for the battle engine.
//!
//! | Variant | Meaning | Recoverable |
//! |---------|---------|-------------|
//! | `InvalidInput` | A required argument was empty or malformed | yes |
//! | `CapacityExceeded` | Insert into a full category | yes |
//! | `Allocation` | A copy or reservation failed | no |
//! | `NotFound` | Category lookup miss | yes |
//! | `DuplicateCategory` | Category declared twice | no |
//! | `Output` | The output sink rejected a write while rendering | no |
//!
//! An empty container is not an error: pop and peek return `None`.

use std::fmt;

use thiserror::Error;

/// Errors returned by containers, the category index and the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    /// A required argument was absent or malformed
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The target container already holds `capacity` elements
    #[error("category {category:?} is at full capacity ({capacity})")]
    CapacityExceeded { category: String, capacity: usize },

    /// Copying an element or reserving storage failed
    #[error("allocation failed: {0}")]
    Allocation(String),

    /// No category with this name exists
    #[error("category {0:?} not found")]
    NotFound(String),

    /// The category list names the same category twice
    #[error("category {0:?} declared more than once")]
    DuplicateCategory(String),

    /// Writing rendered output failed
    #[error("failed to write output")]
    Output(#[from] fmt::Error),
}

impl BattleError {
    /// Shorthand for an allocation failure
    pub fn allocation(context: impl Into<String>) -> Self {
        BattleError::Allocation(context.into())
    }

    /// Whether the caller can report this as a declined operation and carry on.
    ///
    /// Allocation failures and configuration errors are fatal to a load.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BattleError::InvalidInput(_)
                | BattleError::CapacityExceeded { .. }
                | BattleError::NotFound(_)
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
