//! Allocation and collection types.
//!
//! - Re-exports of hash collections using AHash
//! - [`SparseSet`], a generational slot arena whose stale handles resolve to `None`

pub mod sparse_set;

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
pub use sparse_set::{IndexSlot, SparseSet};
