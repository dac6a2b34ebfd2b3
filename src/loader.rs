//! Roster file loader.
//!
//! ## Format
//!
//! ```text
//! Types
//! Fire,Water,Grass
//! 	Fire effective-against-me:Water
//! 	Grass effective-against-other:Water
//! Pokemons
//! Charmander,Lizard Pokemon,0.6,8.5,52,Fire
//! ```
//!
//! 1. A header line (ignored)
//! 2. The comma-separated type list; it becomes the engine's category list
//! 3. Effectiveness lines, leading blanks allowed:
//!    `<type> effective-against-me:<t1>,<t2>` or
//!    `<type> effective-against-other:<t1>,<t2>`
//! 4. The `Pokemons` marker, then one creature per line:
//!    `name,species,height,weight,attack,type`
//!
//! Every creature is inserted through [`MatchingEngine::insert`]. Any
//! failure stops the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::creature::{Creature, CreatureRules, Relation, TypeChart};
use crate::engine::{EngineConfig, MatchingEngine};
use crate::types::BattleError;

/// Marker line that starts the creature section
pub const CREATURES_MARKER: &str = "Pokemons";

const WEAK_TO: &str = "effective-against-me";
const STRONG_AGAINST: &str = "effective-against-other";

/// Errors raised while reading a roster
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("roster ended before the {0}")]
    MissingSection(&'static str),

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("line {line}: unknown type {name:?}")]
    UnknownType { line: usize, name: String },

    #[error("line {line}: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: BattleError,
    },

    #[error("failed to build engine: {0}")]
    Engine(#[from] BattleError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    TypeList,
    Relations,
    Creatures,
}

/// Load a roster file into a new engine
///
/// # Arguments
///
/// * `path` - Roster file
/// * `capacity` - Maximum number of creatures per type
/// * `category_hint` - Expected number of types
pub fn load_roster_file(
    path: impl AsRef<Path>,
    capacity: usize,
    category_hint: usize,
) -> Result<MatchingEngine<CreatureRules>, LoadError> {
    let file = File::open(path.as_ref())?;
    load_roster(BufReader::new(file), capacity, category_hint)
}

/// Load a roster from any buffered reader into a new engine
///
/// # Example
///
/// ```
/// use battle_center::loader::load_roster;
///
/// let roster = "Types\nFire,Water\n\tFire effective-against-me:Water\nPokemons\n\
///               Charmander,Lizard,0.6,8.5,52,Fire\n";
/// let engine = load_roster(roster.as_bytes(), 4, 2).unwrap();
///
/// assert_eq!(engine.count_in("Fire"), 1);
/// assert!(engine.ops().chart().get("Fire").unwrap().is_weak_to("Water"));
/// ```
pub fn load_roster<R: BufRead>(
    reader: R,
    capacity: usize,
    category_hint: usize,
) -> Result<MatchingEngine<CreatureRules>, LoadError> {
    let mut section = Section::Header;
    let mut categories = String::new();
    let mut chart = TypeChart::new();
    let mut engine: Option<MatchingEngine<CreatureRules>> = None;
    let mut loaded = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let line = line.trim_end_matches('\r');

        match section {
            Section::Header => section = Section::TypeList,
            Section::TypeList => {
                categories = line.to_owned();
                chart = TypeChart::from_csv(line);
                section = Section::Relations;
            }
            Section::Relations => {
                if line == CREATURES_MARKER {
                    let config = EngineConfig::new(capacity, category_hint, categories.as_str());
                    let rules = CreatureRules::new(std::mem::take(&mut chart));
                    engine = Some(MatchingEngine::from_config(config, rules)?);
                    section = Section::Creatures;
                } else if !line.trim().is_empty() {
                    parse_relation(&mut chart, line, line_no)?;
                }
            }
            Section::Creatures => {
                if line.trim().is_empty() {
                    continue;
                }
                let Some(engine) = engine.as_mut() else {
                    return Err(LoadError::MissingSection("creature marker"));
                };
                let creature = parse_creature(line, line_no)?;
                if !engine.ops().chart().contains(&creature.kind) {
                    return Err(LoadError::UnknownType {
                        line: line_no,
                        name: creature.kind,
                    });
                }
                engine
                    .insert(&creature)
                    .map_err(|source| LoadError::Rejected { line: line_no, source })?;
                loaded += 1;
            }
        }
    }

    match section {
        Section::Header | Section::TypeList => Err(LoadError::MissingSection("type list")),
        Section::Relations => Err(LoadError::MissingSection("creature marker")),
        Section::Creatures => {
            let engine = engine.ok_or(LoadError::MissingSection("creature marker"))?;
            info!(
                types = engine.ops().chart().len(),
                creatures = loaded,
                "roster loaded"
            );
            Ok(engine)
        }
    }
}

/// `<type> <relation>:<t1>,<t2>,...`
fn parse_relation(chart: &mut TypeChart, line: &str, line_no: usize) -> Result<(), LoadError> {
    let malformed = |reason: &str| LoadError::Malformed {
        line: line_no,
        reason: reason.to_owned(),
    };

    let line = line.trim_start_matches([' ', '\t']);
    let (name, rest) = line
        .split_once(' ')
        .ok_or_else(|| malformed("expected `<type> <relation>:<types>`"))?;
    let (relation, targets) = rest
        .split_once(':')
        .ok_or_else(|| malformed("missing `:` after relation"))?;

    let relation = match relation {
        WEAK_TO => Relation::WeakTo,
        STRONG_AGAINST => Relation::StrongAgainst,
        other => {
            warn!(line = line_no, relation = other, "ignoring unknown relation");
            return Ok(());
        }
    };

    if !chart.contains(name) {
        return Err(LoadError::UnknownType {
            line: line_no,
            name: name.to_owned(),
        });
    }
    for target in crate::engine::category_tokens(targets) {
        chart.relate(name, relation, target).map_err(|_| LoadError::UnknownType {
            line: line_no,
            name: target.to_owned(),
        })?;
    }
    Ok(())
}

/// `name,species,height,weight,attack,type`
fn parse_creature(line: &str, line_no: usize) -> Result<Creature, LoadError> {
    let malformed = |reason: String| LoadError::Malformed { line: line_no, reason };

    let fields: Vec<&str> = line.split(',').collect();
    let &[name, species, height, weight, attack, kind] = fields.as_slice() else {
        return Err(malformed(format!("expected 6 fields, found {}", fields.len())));
    };

    let height: f64 = height
        .trim()
        .parse()
        .map_err(|_| malformed(format!("bad height {height:?}")))?;
    let weight: f64 = weight
        .trim()
        .parse()
        .map_err(|_| malformed(format!("bad weight {weight:?}")))?;
    let attack: i32 = attack
        .trim()
        .parse()
        .map_err(|_| malformed(format!("bad attack {attack:?}")))?;

    Ok(Creature::new(name, species, height, weight, attack, kind))
}

// ============================================================================
// Unit Tests
// ============================================================================
