//! Capability interface for the elements stored in the engine.
//!
//! ## Design
//!
//! The engine never looks inside an element. Everything it needs to do
//! with one (copy it, order it, find its category, score it against a
//! challenger, print it) goes through a single `ElementOps` value that is
//! supplied once at construction and shared by every container.
//!
//! Releasing an element is plain `Drop`.

use std::cmp::Ordering;
use std::fmt;

use crate::types::BattleError;

/// Effective attack values computed for one candidate/challenger pairing.
///
/// `diff` is always `candidate_attack - challenger_attack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    /// Candidate's attack minus the challenger's attack
    pub diff: i32,

    /// Effective attack of the stored candidate
    pub candidate_attack: i32,

    /// Effective attack of the challenger
    pub challenger_attack: i32,
}

impl Score {
    /// Build a score from the two effective attack values
    ///
    /// # Example
    ///
    /// ```
    /// use battle_center::types::Score;
    ///
    /// let score = Score::new(40, 55);
    /// assert_eq!(score.diff, -15);
    /// ```
    pub fn new(candidate_attack: i32, challenger_attack: i32) -> Self {
        Self {
            diff: candidate_attack - challenger_attack,
            candidate_attack,
            challenger_attack,
        }
    }
}

/// Operation set for an opaque element type.
///
/// ## Ownership
///
/// Containers store the result of [`ElementOps::duplicate`], never the
/// caller's value. A failed duplicate must be reported as
/// [`BattleError::Allocation`]; the container then leaves its state
/// unchanged.
pub trait ElementOps {
    /// The element type managed by this operation set
    type Element;

    /// Produce an independent deep copy of `element`
    fn duplicate(&self, element: &Self::Element) -> Result<Self::Element, BattleError>;

    /// Three-way comparison used for the max-heap ordering
    fn compare(&self, a: &Self::Element, b: &Self::Element) -> Ordering;

    /// Category key of `element`, or `None` if it has none
    fn category_of<'e>(&self, element: &'e Self::Element) -> Option<&'e str>;

    /// Score a stored `candidate` against a `challenger`
    fn score(&self, candidate: &Self::Element, challenger: &Self::Element) -> Score;

    /// Write a human-readable form of `element`
    fn render(&self, element: &Self::Element, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Display adapter pairing an element with the operation set that knows
/// how to print it.
pub struct Rendered<'a, O: ElementOps> {
    ops: &'a O,
    element: &'a O::Element,
}

impl<'a, O: ElementOps> Rendered<'a, O> {
    /// Wrap `element` for display through `ops`
    #[inline]
    pub fn new(ops: &'a O, element: &'a O::Element) -> Self {
        Self { ops, element }
    }
}

impl<O: ElementOps> fmt::Display for Rendered<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ops.render(self.element, f)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
