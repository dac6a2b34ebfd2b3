//! Type-effectiveness chart.
//!
//! ## Relations
//!
//! Each type keeps two lists of other types:
//!
//! - `weak_to`: types whose moves are super-effective against this type
//! - `strong_against`: types this type's moves are super-effective against
//!
//! The lists are independent; declaring `Fire weak_to Water` does not
//! imply `Water strong_against Fire`.

use std::fmt;

use crate::types::BattleError;

/// One type and its effectiveness relations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntry {
    pub name: String,
    pub weak_to: Vec<String>,
    pub strong_against: Vec<String>,
}

impl TypeEntry {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            weak_to: Vec::new(),
            strong_against: Vec::new(),
        }
    }

    /// Check if `other`'s moves are super-effective against this type
    #[inline]
    pub fn is_weak_to(&self, other: &str) -> bool {
        self.weak_to.iter().any(|t| t == other)
    }

    /// Check if this type's moves are super-effective against `other`
    #[inline]
    pub fn is_strong_against(&self, other: &str) -> bool {
        self.strong_against.iter().any(|t| t == other)
    }

    /// Display adapter including the number of creatures of this type
    pub fn summary(&self, count: usize) -> TypeSummary<'_> {
        TypeSummary { entry: self, count }
    }
}

/// Which list of a [`TypeEntry`] an edit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `effective-against-me`
    WeakTo,
    /// `effective-against-other`
    StrongAgainst,
}

/// Ordered set of types with their effectiveness relations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeChart {
    entries: Vec<TypeEntry>,
}

impl TypeChart {
    /// Create an empty chart
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chart with one entry per comma-separated name
    ///
    /// Empty names and repeated names are skipped.
    pub fn from_csv(names: &str) -> Self {
        let mut chart = Self::new();
        for name in crate::engine::category_tokens(names) {
            chart.add_type(name);
        }
        chart
    }

    /// Add a type; returns `false` if it already exists
    pub fn add_type(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.entries.push(TypeEntry::new(name));
        true
    }

    /// Number of types
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the chart has no types
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if a type exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Look up a type
    pub fn get(&self, name: &str) -> Option<&TypeEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Types in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &TypeEntry> + '_ {
        self.entries.iter()
    }

    /// Comma-separated type names in declaration order
    pub fn to_csv(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    // ========================================================================
    // Relation Editing
    // ========================================================================

    /// Add `other` to one of `name`'s relation lists
    ///
    /// Adding an existing relation is a no-op.
    ///
    /// # Errors
    ///
    /// `NotFound` if either type is not in the chart.
    pub fn relate(&mut self, name: &str, relation: Relation, other: &str) -> Result<(), BattleError> {
        if !self.contains(other) {
            return Err(BattleError::NotFound(other.to_owned()));
        }
        let entry = self.get_mut(name)?;
        let list = match relation {
            Relation::WeakTo => &mut entry.weak_to,
            Relation::StrongAgainst => &mut entry.strong_against,
        };
        if !list.iter().any(|t| t == other) {
            list.push(other.to_owned());
        }
        Ok(())
    }

    /// Remove `other` from one of `name`'s relation lists
    ///
    /// # Errors
    ///
    /// `NotFound` if `name` is unknown or `other` is not in the list.
    pub fn unrelate(&mut self, name: &str, relation: Relation, other: &str) -> Result<(), BattleError> {
        let entry = self.get_mut(name)?;
        let list = match relation {
            Relation::WeakTo => &mut entry.weak_to,
            Relation::StrongAgainst => &mut entry.strong_against,
        };
        let position = list
            .iter()
            .position(|t| t == other)
            .ok_or_else(|| BattleError::NotFound(other.to_owned()))?;
        list.remove(position);
        Ok(())
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut TypeEntry, BattleError> {
        self.entries
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| BattleError::NotFound(name.to_owned()))
    }
}

/// Display adapter for one chart entry and its population.
///
/// ```text
/// Type Fire -- 2 pokemons
/// 	These types are super-effective against Fire:Water ,Rock
/// 	Fire moves are super-effective against:Grass
/// ```
/// followed by a blank line. Empty relation lists are omitted.
pub struct TypeSummary<'a> {
    entry: &'a TypeEntry,
    count: usize,
}

impl fmt::Display for TypeSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = self.entry;
        writeln!(f, "Type {} -- {} pokemons", entry.name, self.count)?;
        if !entry.weak_to.is_empty() {
            writeln!(
                f,
                "\tThese types are super-effective against {}:{}",
                entry.name,
                entry.weak_to.join(" ,")
            )?;
        }
        if !entry.strong_against.is_empty() {
            writeln!(
                f,
                "\t{} moves are super-effective against:{}",
                entry.name,
                entry.strong_against.join(" ,")
            )?;
        }
        writeln!(f)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> TypeChart {
        TypeChart::from_csv("Fire,Water,Grass")
    }

    #[test]
    fn test_from_csv() {
        let chart = TypeChart::from_csv("Fire,,Water,Fire");

        assert_eq!(chart.len(), 2);
        assert_eq!(chart.to_csv(), "Fire,Water");
        assert!(chart.contains("Water"));
        assert!(!chart.contains("Ice"));
    }

    #[test]
    fn test_relate_and_query() {
        let mut chart = chart();
        chart.relate("Fire", Relation::WeakTo, "Water").unwrap();
        chart.relate("Fire", Relation::StrongAgainst, "Grass").unwrap();
        chart.relate("Fire", Relation::WeakTo, "Water").unwrap();

        let fire = chart.get("Fire").unwrap();
        assert_eq!(fire.weak_to, vec!["Water"]);
        assert!(fire.is_weak_to("Water"));
        assert!(fire.is_strong_against("Grass"));
        assert!(!fire.is_strong_against("Water"));
    }

    #[test]
    fn test_relate_unknown_type() {
        let mut chart = chart();

        assert_eq!(
            chart.relate("Ice", Relation::WeakTo, "Fire"),
            Err(BattleError::NotFound("Ice".into()))
        );
        assert_eq!(
            chart.relate("Fire", Relation::WeakTo, "Ice"),
            Err(BattleError::NotFound("Ice".into()))
        );
    }

    #[test]
    fn test_unrelate() {
        let mut chart = chart();
        chart.relate("Grass", Relation::WeakTo, "Fire").unwrap();

        chart.unrelate("Grass", Relation::WeakTo, "Fire").unwrap();
        assert!(chart.get("Grass").unwrap().weak_to.is_empty());

        assert!(chart.unrelate("Grass", Relation::WeakTo, "Fire").is_err());
    }

    #[test]
    fn test_summary_format() {
        let mut chart = chart();
        chart.relate("Fire", Relation::WeakTo, "Water").unwrap();
        chart.relate("Fire", Relation::WeakTo, "Grass").unwrap();
        chart.relate("Fire", Relation::StrongAgainst, "Grass").unwrap();

        let shown = chart.get("Fire").unwrap().summary(2).to_string();
        assert_eq!(
            shown,
            "Type Fire -- 2 pokemons\n\
             \tThese types are super-effective against Fire:Water ,Grass\n\
             \tFire moves are super-effective against:Grass\n\n"
        );

        let water = chart.get("Water").unwrap().summary(0).to_string();
        assert_eq!(water, "Type Water -- 0 pokemons\n\n");
    }
}
