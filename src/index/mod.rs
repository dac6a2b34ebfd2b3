//! Category index for the battle engine.
//!
//! ## Components
//!
//! - [`CategoryIndex`]: Containers keyed by category name, in declared order
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Append | O(1) |
//! | Find by name | O(1) |
//! | Ordered scan | O(k) |

pub mod category;

pub use category::CategoryIndex;
