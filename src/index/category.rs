//! Ordered, name-keyed index of per-category containers.
//!
//! ## Architecture
//!
//! - **Slab**: Storage for the containers, one slot per category
//! - **HashMap**: Category name to slab key mapping for O(1) lookup
//! - **Vec**: Slab keys in insertion order
//!
//! The insertion order is significant: the engine scans categories in
//! exactly this order when picking an opponent, so it must never be
//! derived from map iteration.
//!
//! ## Memory Model
//!
//! Per slab docs (https://docs.rs/slab/0.4.11):
//! - `Slab::with_capacity(n)` pre-allocates n slots
//! - O(1) insert and lookup
//!
//! Categories are only ever appended; nothing is removed until the whole
//! index is dropped.

use std::collections::HashMap;
use std::fmt;

use slab::Slab;

use crate::heap::PriorityContainer;
use crate::types::{BattleError, ElementOps};

/// Index of priority containers, unique by name, in insertion order.
pub struct CategoryIndex<O: ElementOps> {
    /// Container storage
    /// Key: slab index, Value: PriorityContainer
    containers: Slab<PriorityContainer<O>>,

    /// Category name to slab key mapping
    by_name: HashMap<String, usize>,

    /// Slab keys in insertion order
    order: Vec<usize>,
}

impl<O: ElementOps> Default for CategoryIndex<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: ElementOps> CategoryIndex<O> {
    /// Create a new empty index
    pub fn new() -> Self {
        Self {
            containers: Slab::new(),
            by_name: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create an index with room for `categories` containers
    pub fn with_capacity(categories: usize) -> Self {
        Self {
            containers: Slab::with_capacity(categories),
            by_name: HashMap::with_capacity(categories),
            order: Vec::with_capacity(categories),
        }
    }

    // ========================================================================
    // Size
    // ========================================================================

    /// Number of categories
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the index has no categories
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // ========================================================================
    // Entry Management
    // ========================================================================

    /// Append a container at the end of the scan order
    ///
    /// # Arguments
    ///
    /// * `container` - The container to take ownership of
    ///
    /// # Returns
    ///
    /// The slab key of the stored container
    ///
    /// # Errors
    ///
    /// `DuplicateCategory` if a container with the same name exists; the
    /// index is left unchanged.
    pub fn append(&mut self, container: PriorityContainer<O>) -> Result<usize, BattleError> {
        if self.by_name.contains_key(container.name()) {
            return Err(BattleError::DuplicateCategory(container.id()));
        }

        let name = container.id();
        let key = self.containers.insert(container);
        self.by_name.insert(name, key);
        self.order.push(key);

        Ok(key)
    }

    /// Look up the live container for a category
    #[inline]
    pub fn find(&self, name: &str) -> Option<&PriorityContainer<O>> {
        let key = *self.by_name.get(name)?;
        self.containers.get(key)
    }

    /// Look up the live container for a category (mutable)
    #[inline]
    pub fn find_mut(&mut self, name: &str) -> Option<&mut PriorityContainer<O>> {
        let key = *self.by_name.get(name)?;
        self.containers.get_mut(key)
    }

    /// Check if a category exists
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    // ========================================================================
    // Ordered Traversal
    // ========================================================================

    /// Containers in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &PriorityContainer<O>> + '_ {
        self.order.iter().filter_map(|&key| self.containers.get(key))
    }

    /// Category names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(PriorityContainer::name)
    }

    /// Total number of elements across all categories
    pub fn total_len(&self) -> usize {
        self.iter().map(PriorityContainer::len).sum()
    }

    /// Write every container in insertion order
    ///
    /// Stops at the first failure; containers already written stay in `out`.
    pub fn render_to<W: fmt::Write>(&self, out: &mut W) -> Result<(), BattleError> {
        for container in self.iter() {
            container.render_to(out)?;
        }
        Ok(())
    }

    /// Render into a new string
    pub fn try_render(&self) -> Result<String, BattleError> {
        let mut out = String::new();
        self.render_to(&mut out)?;
        Ok(out)
    }
}

impl<O: ElementOps> fmt::Debug for CategoryIndex<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Score;
    use std::cmp::Ordering;
    use std::sync::Arc;

    struct Numbers;

    impl ElementOps for Numbers {
        type Element = i32;

        fn duplicate(&self, element: &i32) -> Result<i32, BattleError> {
            Ok(*element)
        }

        fn compare(&self, a: &i32, b: &i32) -> Ordering {
            a.cmp(b)
        }

        fn category_of<'e>(&self, _element: &'e i32) -> Option<&'e str> {
            None
        }

        fn score(&self, candidate: &i32, challenger: &i32) -> Score {
            Score::new(*candidate, *challenger)
        }

        fn render(&self, element: &i32, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            writeln!(f, "{element}")
        }
    }

    fn container(name: &str) -> PriorityContainer<Numbers> {
        PriorityContainer::new(name, 4, Arc::new(Numbers)).unwrap()
    }

    #[test]
    fn test_index_new() {
        let index: CategoryIndex<Numbers> = CategoryIndex::new();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.find("Fire").is_none());
        assert_eq!(index.total_len(), 0);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut index = CategoryIndex::with_capacity(3);
        index.append(container("Water")).unwrap();
        index.append(container("Fire")).unwrap();
        index.append(container("Grass")).unwrap();

        assert_eq!(index.len(), 3);
        let names: Vec<&str> = index.names().collect();
        assert_eq!(names, vec!["Water", "Fire", "Grass"]);
    }

    #[test]
    fn test_append_rejects_duplicate() {
        let mut index = CategoryIndex::new();
        index.append(container("Fire")).unwrap();

        let err = index.append(container("Fire")).unwrap_err();
        assert_eq!(err, BattleError::DuplicateCategory("Fire".into()));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_find_returns_live_container() {
        let mut index = CategoryIndex::new();
        index.append(container("Fire")).unwrap();
        index.append(container("Water")).unwrap();

        index.find_mut("Water").unwrap().insert(&12).unwrap();

        assert_eq!(index.find("Water").map(|c| c.len()), Some(1));
        assert_eq!(index.find("Fire").map(|c| c.len()), Some(0));
        assert_eq!(index.total_len(), 1);
        assert!(index.contains("Water"));
        assert!(!index.contains("Ice"));
        assert!(index.find_mut("Ice").is_none());
    }

    #[test]
    fn test_render_in_order() {
        let mut index = CategoryIndex::new();
        index.append(container("B")).unwrap();
        index.append(container("A")).unwrap();
        index.find_mut("A").unwrap().insert(&3).unwrap();

        assert_eq!(index.try_render().unwrap(), "B:\nNo elements.\n\nA:\n1. 3\n");
    }
}
