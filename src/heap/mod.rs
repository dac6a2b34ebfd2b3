//! Per-category priority storage.
//!
//! ## Components
//!
//! - [`PriorityContainer`]: Fixed-capacity max-heap owning deep copies of
//!   its elements
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Insert | O(log n) |
//! | Pop max | O(log n) |
//! | Peek max | O(1) |
//! | Clone | O(n) |
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use battle_center::creature::{Creature, CreatureRules, TypeChart};
//! use battle_center::heap::PriorityContainer;
//!
//! let rules = Arc::new(CreatureRules::new(TypeChart::from_csv("Fire")));
//! let mut heap = PriorityContainer::new("Fire", 2, rules).unwrap();
//!
//! heap.insert(&Creature::new("Charmander", "Lizard", 0.6, 8.5, 52, "Fire")).unwrap();
//! heap.insert(&Creature::new("Vulpix", "Fox", 0.6, 9.9, 41, "Fire")).unwrap();
//!
//! assert_eq!(heap.peek_max().map(|c| c.attack), Some(52));
//! assert!(heap.is_full());
//! ```

pub mod container;

pub use container::PriorityContainer;
