//! Engine configuration.
//!
//! The category list is kept verbatim: it is parsed once when the engine
//! is built and parsed again, identically, on every fight.

use crate::types::BattleError;

/// Separator between category names in the category list
pub const CATEGORY_SEPARATOR: char = ',';

/// Split a category list into names.
///
/// Empty tokens are skipped (`"A,,B"` yields `A`, `B`); names are not trimmed.
///
/// # Example
///
/// ```
/// use battle_center::engine::category_tokens;
///
/// let names: Vec<&str> = category_tokens("Fire,,Water,").collect();
/// assert_eq!(names, vec!["Fire", "Water"]);
/// ```
pub fn category_tokens(categories: &str) -> impl Iterator<Item = &str> + '_ {
    categories
        .split(CATEGORY_SEPARATOR)
        .filter(|token| !token.is_empty())
}

/// Immutable configuration of a [`MatchingEngine`](crate::engine::MatchingEngine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of elements per category
    pub capacity: usize,

    /// Expected number of categories (pre-sizes the index)
    pub category_hint: usize,

    /// Comma-separated category names, in scan order
    pub categories: String,
}

impl EngineConfig {
    /// Create a configuration
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of elements per category
    /// * `category_hint` - Expected number of categories
    /// * `categories` - Comma-separated category list, e.g. `"Fire,Water"`
    pub fn new(capacity: usize, category_hint: usize, categories: impl Into<String>) -> Self {
        Self {
            capacity,
            category_hint,
            categories: categories.into(),
        }
    }

    /// Category names in declared order
    pub fn category_names(&self) -> impl Iterator<Item = &str> + '_ {
        category_tokens(&self.categories)
    }

    /// Check the configuration before building an engine
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - the list names no category
    /// * `DuplicateCategory` - a name appears twice
    pub fn validate(&self) -> Result<(), BattleError> {
        let mut seen = Vec::new();
        for name in self.category_names() {
            if seen.contains(&name) {
                return Err(BattleError::DuplicateCategory(name.to_owned()));
            }
            seen.push(name);
        }

        if seen.is_empty() {
            return Err(BattleError::InvalidInput(format!(
                "category list {:?} names no category",
                self.categories
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
