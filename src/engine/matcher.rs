//! Category-partitioned matching engine.
//!
//! ## Structure
//!
//! ```text
//! MatchingEngine
//!   ├── EngineConfig   (capacity, declared category list)
//!   ├── Arc<O>         (operation set, shared with every container)
//!   └── CategoryIndex
//!         ├── "Fire"  -> PriorityContainer (max-heap)
//!         ├── "Water" -> PriorityContainer (max-heap)
//!         └── ...
//! ```
//!
//! ## Opponent Selection
//!
//! `fight` walks the declared categories in order and scores the top of
//! each non-empty container against the challenger:
//!
//! 1. The first category with a top element becomes the best candidate,
//!    whatever its score.
//! 2. A later category replaces it only with a strictly greater diff, so
//!    the earliest declared category wins ties.
//! 3. If every container is empty the result is `NoOpponent`.
//!
//! Nothing is removed from any container.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::engine::{category_tokens, EngineConfig};
use crate::heap::PriorityContainer;
use crate::index::CategoryIndex;
use crate::types::{BattleError, ElementOps, Fight, FightOutcome};

/// Matching engine holding one max-heap per declared category.
pub struct MatchingEngine<O: ElementOps> {
    /// Immutable configuration, including the raw category list
    config: EngineConfig,

    /// Containers by category, in declared order
    index: CategoryIndex<O>,

    /// Operation set shared with every container
    ops: Arc<O>,
}

impl<O: ElementOps> MatchingEngine<O> {
    /// Create an engine with one empty container per category
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of elements per category
    /// * `category_hint` - Expected number of categories
    /// * `categories` - Comma-separated category list; its order is the scan order
    /// * `ops` - Operation set for the stored elements
    ///
    /// # Errors
    ///
    /// Any failure drops the containers created so far before returning.
    ///
    /// # Example
    ///
    /// ```
    /// use battle_center::creature::{CreatureRules, TypeChart};
    /// use battle_center::engine::MatchingEngine;
    ///
    /// let rules = CreatureRules::new(TypeChart::from_csv("Fire,Water"));
    /// let engine = MatchingEngine::new(5, 2, "Fire,Water", rules).unwrap();
    ///
    /// assert_eq!(engine.categories().collect::<Vec<_>>(), vec!["Fire", "Water"]);
    /// assert_eq!(engine.count_in("Fire"), 0);
    /// ```
    pub fn new(
        capacity: usize,
        category_hint: usize,
        categories: &str,
        ops: O,
    ) -> Result<Self, BattleError> {
        Self::from_config(EngineConfig::new(capacity, category_hint, categories), ops)
    }

    /// Create an engine from a prepared configuration
    pub fn from_config(config: EngineConfig, ops: O) -> Result<Self, BattleError> {
        config.validate()?;

        let ops = Arc::new(ops);
        let mut index = CategoryIndex::with_capacity(config.category_hint);
        for name in config.category_names() {
            let container = PriorityContainer::new(name, config.capacity, Arc::clone(&ops))?;
            index.append(container)?;
        }

        info!(
            categories = index.len(),
            capacity = config.capacity,
            "matching engine ready"
        );

        Ok(Self { config, index, ops })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The engine configuration
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Maximum number of elements per category
    #[inline]
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// The shared operation set
    #[inline]
    pub fn ops(&self) -> &O {
        &self.ops
    }

    /// Category names in declared order
    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.index.names()
    }

    /// Read-only view of one category's container
    #[inline]
    pub fn category(&self, name: &str) -> Option<&PriorityContainer<O>> {
        self.index.find(name)
    }

    /// Number of elements in a category, or 0 if the category does not exist
    pub fn count_in(&self, category: &str) -> usize {
        self.index.find(category).map_or(0, PriorityContainer::len)
    }

    /// Total number of elements across all categories
    pub fn total_len(&self) -> usize {
        self.index.total_len()
    }

    // ========================================================================
    // Element Management
    // ========================================================================

    /// Store a deep copy of `element` in its category
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - the element has no category
    /// * `NotFound` - the element's category is not declared
    /// * `CapacityExceeded` - the category is full
    /// * `Allocation` - copying the element failed
    pub fn insert(&mut self, element: &O::Element) -> Result<(), BattleError> {
        let category = self
            .ops
            .category_of(element)
            .ok_or_else(|| BattleError::InvalidInput("element has no category".into()))?;

        let Some(container) = self.index.find_mut(category) else {
            warn!(category, "insert into unknown category");
            return Err(BattleError::NotFound(category.to_owned()));
        };

        match container.insert(element) {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(category, error = %err, "insert declined");
                Err(err)
            }
        }
    }

    /// Remove and return the strongest element of a category
    ///
    /// # Returns
    ///
    /// The removed element (now owned by the caller), or `None` if the
    /// category is empty or does not exist
    pub fn remove_strongest(&mut self, category: &str) -> Option<O::Element> {
        self.index.find_mut(category)?.pop_max()
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Pick the best opponent for `challenger` across all categories
    ///
    /// # Returns
    ///
    /// * `FightOutcome::NoOpponent` - every category is empty
    /// * `FightOutcome::Decided` - the selected candidate, its score and the verdict
    ///
    /// # Errors
    ///
    /// `NotFound` if a declared category has no container.
    pub fn fight(&self, challenger: &O::Element) -> Result<FightOutcome<'_, O::Element>, BattleError> {
        let mut total = 0;
        let mut best: Option<Fight<'_, O::Element>> = None;

        for name in category_tokens(&self.config.categories) {
            let container = self
                .index
                .find(name)
                .ok_or_else(|| BattleError::NotFound(name.to_owned()))?;

            total += container.len();

            let Some(top) = container.peek_max() else {
                continue;
            };

            let score = self.ops.score(top, challenger);
            let improves = match &best {
                None => true,
                Some(current) => score.diff > current.score.diff,
            };
            if improves {
                best = Some(Fight::new(top, container.name(), score));
            }
        }

        match best {
            Some(fight) if total > 0 => {
                debug!(
                    category = fight.category,
                    diff = fight.score.diff,
                    verdict = ?fight.verdict,
                    "opponent selected"
                );
                Ok(FightOutcome::Decided(fight))
            }
            _ => Ok(FightOutcome::NoOpponent),
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Write every category, strongest element first, in declared order
    ///
    /// # Errors
    ///
    /// * `Allocation` - a category snapshot could not be copied
    /// * `Output` - `out` rejected a write
    pub fn render_to<W: fmt::Write>(&self, out: &mut W) -> Result<(), BattleError> {
        self.index.render_to(out)
    }

    /// Render into a new string; see [`render_to`](Self::render_to)
    pub fn try_render(&self) -> Result<String, BattleError> {
        self.index.try_render()
    }
}

impl<O: ElementOps> fmt::Debug for MatchingEngine<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchingEngine")
            .field("config", &self.config)
            .field("index", &self.index)
            .finish()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
