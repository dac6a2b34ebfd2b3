//! Fixed-capacity max-heap over an opaque element type.
//!
//! ## Design
//!
//! A `PriorityContainer` owns a dense buffer of elements reserved once at
//! creation. The buffer never grows: an insert into a full container is
//! rejected with `CapacityExceeded`.
//!
//! ## Heap Layout
//!
//! ```text
//! index:     0
//!          /   \
//!         1     2        children of i: 2i+1, 2i+2
//!        / \   / \       parent of i:   (i-1)/2
//!       3   4 5   6
//! ```
//!
//! For every node the stored element compares "not less than" each of its
//! children under `ElementOps::compare`.
//!
//! ## Tie Handling
//!
//! - Sift-up only swaps when the new element is strictly greater than its
//!   parent, so equal elements settle where they land.
//! - Sift-down prefers the left child; the right child must be strictly
//!   greater than the left to be chosen.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::types::{BattleError, ElementOps, Rendered};

/// A named max-heap holding at most `capacity` owned elements.
pub struct PriorityContainer<O: ElementOps> {
    /// Container identity (the category name)
    name: String,

    /// Heap-ordered elements; `len()` is the current size
    elements: Vec<O::Element>,

    /// Fixed maximum number of elements
    capacity: usize,

    /// Shared operation set
    ops: Arc<O>,
}

impl<O: ElementOps> PriorityContainer<O> {
    /// Create an empty container
    ///
    /// # Arguments
    ///
    /// * `name` - Identity of the container (must not be empty)
    /// * `capacity` - Maximum number of elements, fixed for the container's lifetime
    /// * `ops` - Operation set shared with the owning engine
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an empty name, `Allocation` if the buffer cannot
    /// be reserved.
    pub fn new(name: &str, capacity: usize, ops: Arc<O>) -> Result<Self, BattleError> {
        if name.is_empty() {
            return Err(BattleError::InvalidInput("container name is empty".into()));
        }

        let mut elements = Vec::new();
        elements
            .try_reserve_exact(capacity)
            .map_err(|e| BattleError::allocation(format!("heap {name:?}: {e}")))?;

        Ok(Self {
            name: name.to_owned(),
            elements,
            capacity,
            ops,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Borrow the container name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owned copy of the container name
    #[inline]
    pub fn id(&self) -> String {
        self.name.clone()
    }

    /// Current number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the container holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Check if another insert would be rejected
    #[inline]
    pub fn is_full(&self) -> bool {
        self.elements.len() == self.capacity
    }

    /// Fixed maximum number of elements
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The operation set this container was created with
    #[inline]
    pub fn ops(&self) -> &Arc<O> {
        &self.ops
    }

    // ========================================================================
    // Heap Operations
    // ========================================================================

    /// Insert a deep copy of `element`
    ///
    /// The copy is made before anything else changes, so a failed copy
    /// leaves the container exactly as it was.
    ///
    /// # Errors
    ///
    /// * `CapacityExceeded` - the container is full
    /// * `Allocation` - `ops.duplicate` failed
    pub fn insert(&mut self, element: &O::Element) -> Result<(), BattleError> {
        if self.is_full() {
            return Err(BattleError::CapacityExceeded {
                category: self.name.clone(),
                capacity: self.capacity,
            });
        }

        let owned = self.ops.duplicate(element)?;
        self.elements.push(owned);
        self.sift_up(self.elements.len() - 1);

        debug!(heap = %self.name, size = self.elements.len(), "inserted element");
        Ok(())
    }

    /// Remove and return the strongest element
    ///
    /// # Returns
    ///
    /// The previous root, or `None` if the container is empty
    pub fn pop_max(&mut self) -> Option<O::Element> {
        if self.elements.is_empty() {
            return None;
        }

        // Move the last element into the root slot and restore the heap
        let max = self.elements.swap_remove(0);
        if !self.elements.is_empty() {
            self.sift_down(0);
        }

        debug!(heap = %self.name, size = self.elements.len(), "popped max");
        Some(max)
    }

    /// Borrow the strongest element without removing it
    #[inline]
    pub fn peek_max(&self) -> Option<&O::Element> {
        self.elements.first()
    }

    /// Deep-copy the whole container
    ///
    /// # Errors
    ///
    /// `Allocation` if any element copy fails; the partial copy is dropped.
    pub fn try_clone(&self) -> Result<Self, BattleError> {
        let mut copy = Self::new(&self.name, self.capacity, Arc::clone(&self.ops))?;
        for element in &self.elements {
            copy.elements.push(self.ops.duplicate(element)?);
        }
        Ok(copy)
    }

    /// Validate the max-heap property over the current contents
    pub fn is_heap(&self) -> bool {
        (1..self.elements.len()).all(|i| {
            let parent = (i - 1) / 2;
            self.compare(parent, i) != Ordering::Less
        })
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Write the elements from strongest to weakest by draining a snapshot
    ///
    /// ```text
    /// Fire:
    /// 1. <strongest>
    /// 2. <next>
    /// ```
    ///
    /// An empty container writes `No elements.` followed by a blank line.
    /// The live container is never consumed.
    ///
    /// # Errors
    ///
    /// * `Allocation` - the snapshot copy failed; nothing is written
    /// * `Output` - `out` rejected a write
    pub fn render_to<W: fmt::Write>(&self, out: &mut W) -> Result<(), BattleError> {
        let mut snapshot = self.try_clone()?;

        writeln!(out, "{}:", snapshot.name)?;
        if snapshot.is_empty() {
            writeln!(out, "No elements.")?;
            writeln!(out)?;
            return Ok(());
        }

        let mut rank = 1;
        while let Some(element) = snapshot.pop_max() {
            write!(out, "{}. {}", rank, Rendered::new(self.ops.as_ref(), &element))?;
            rank += 1;
        }
        Ok(())
    }

    /// Render into a new string; see [`render_to`](Self::render_to)
    pub fn try_render(&self) -> Result<String, BattleError> {
        let mut out = String::new();
        self.render_to(&mut out)?;
        Ok(out)
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    #[inline]
    fn compare(&self, a: usize, b: usize) -> Ordering {
        self.ops.compare(&self.elements[a], &self.elements[b])
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.compare(index, parent) != Ordering::Greater {
                break;
            }
            self.elements.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.elements.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut largest = index;

            if left < len && self.compare(left, largest) == Ordering::Greater {
                largest = left;
            }
            if right < len && self.compare(right, largest) == Ordering::Greater {
                largest = right;
            }

            if largest == index {
                break;
            }

            self.elements.swap(index, largest);
            index = largest;
        }
    }
}

impl<O: ElementOps> fmt::Debug for PriorityContainer<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityContainer")
            .field("name", &self.name)
            .field("len", &self.elements.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
