//! Result types for a cross-category fight.
//!
//! A fight is a pure probe: it borrows the strongest stored element of
//! the winning category and never removes anything.

use std::fmt;

use crate::types::{ElementOps, Rendered, Score};

/// Decision of a fight, seen from the stored candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Candidate's effective attack is higher
    CandidateWins,
    /// Challenger's effective attack is higher
    ChallengerWins,
    /// Equal effective attack
    Draw,
}

impl Verdict {
    /// Classify a score difference
    ///
    /// # Example
    ///
    /// ```
    /// use battle_center::types::Verdict;
    ///
    /// assert_eq!(Verdict::from_diff(5), Verdict::CandidateWins);
    /// assert_eq!(Verdict::from_diff(-5), Verdict::ChallengerWins);
    /// assert_eq!(Verdict::from_diff(0), Verdict::Draw);
    /// ```
    pub fn from_diff(diff: i32) -> Self {
        match diff {
            d if d > 0 => Verdict::CandidateWins,
            d if d < 0 => Verdict::ChallengerWins,
            _ => Verdict::Draw,
        }
    }
}

/// The selected opponent and the decision against the challenger.
#[derive(Debug)]
pub struct Fight<'a, E> {
    /// Strongest element of the selected category (still stored)
    pub candidate: &'a E,

    /// Category the candidate was taken from
    pub category: &'a str,

    /// Effective attacks and their difference
    pub score: Score,

    /// Outcome derived from `score.diff`
    pub verdict: Verdict,
}

impl<'a, E> Fight<'a, E> {
    /// Build a fight result; the verdict follows from the score
    pub fn new(candidate: &'a E, category: &'a str, score: Score) -> Self {
        Self {
            candidate,
            category,
            score,
            verdict: Verdict::from_diff(score.diff),
        }
    }

    /// The winning element: the candidate on a win or a draw, otherwise
    /// the challenger.
    pub fn winner<'c>(&self, challenger: &'c E) -> &'c E
    where
        'a: 'c,
    {
        match self.verdict {
            Verdict::ChallengerWins => challenger,
            Verdict::CandidateWins | Verdict::Draw => self.candidate,
        }
    }

    /// Display adapter for the battle transcript
    pub fn transcript<'f, O>(&'f self, ops: &'f O, challenger: &'f E) -> Transcript<'f, 'a, O>
    where
        O: ElementOps<Element = E>,
    {
        Transcript {
            fight: self,
            ops,
            challenger,
        }
    }
}

/// Outcome of [`MatchingEngine::fight`](crate::engine::MatchingEngine::fight)
#[derive(Debug)]
pub enum FightOutcome<'a, E> {
    /// No category holds any element
    NoOpponent,
    /// An opponent was selected
    Decided(Fight<'a, E>),
}

impl<'a, E> FightOutcome<'a, E> {
    /// The decided fight, if any
    pub fn fight(&self) -> Option<&Fight<'a, E>> {
        match self {
            FightOutcome::Decided(fight) => Some(fight),
            FightOutcome::NoOpponent => None,
        }
    }

    /// Check for the no-opponent sentinel
    #[inline]
    pub fn is_no_opponent(&self) -> bool {
        matches!(self, FightOutcome::NoOpponent)
    }
}

/// Human-readable battle transcript.
pub struct Transcript<'f, 'a, O: ElementOps> {
    fight: &'f Fight<'a, O::Element>,
    ops: &'f O,
    challenger: &'f O::Element,
}

impl<O: ElementOps> fmt::Display for Transcript<'_, '_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fight = self.fight;
        writeln!(f, "The final battle between:")?;
        write!(f, "{}", Rendered::new(self.ops, self.challenger))?;
        writeln!(f, "In this battle his attack is :{}", fight.score.challenger_attack)?;
        writeln!(f)?;
        write!(f, "against {}", Rendered::new(self.ops, fight.candidate))?;
        writeln!(f, "In this battle his attack is :{}", fight.score.candidate_attack)?;
        writeln!(f)?;
        match fight.verdict {
            Verdict::Draw => writeln!(f, "IT IS A DRAW."),
            _ => {
                writeln!(f, "THE WINNER IS:")?;
                write!(f, "{}", Rendered::new(self.ops, fight.winner(self.challenger)))
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
