//! Two independent general-purpose structures: a [`FenwickTree`] for prefix
//! sums with point updates and inverse search, and a [`DisjointSet`] for
//! union-find over arbitrary keys.

pub mod equivalence;
pub mod error;
pub mod groups;

mod fenwick_tree;
mod union_find;

pub use equivalence::{ByKey, Equivalence, Natural};
pub use error::{Error, Result};
pub use fenwick_tree::FenwickTree;
pub use groups::{AbelianGroup, Additive, CommutativeMonoid, Xor};
pub use union_find::{DisjointSet, Group, Groups, Members};
