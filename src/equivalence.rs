//! Pluggable key equality for [`DisjointSet`](crate::DisjointSet).
//!
//! A set never asks its keys for `Eq` or `Hash` directly; it goes through an
//! [`Equivalence`] supplied at construction. Two keys that are `equivalent`
//! must have the same `hash_of`.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub trait Equivalence<K: ?Sized> {
    fn equivalent(&self, lhs: &K, rhs: &K) -> bool;

    fn hash_of(&self, key: &K) -> u64;
}

/// The key type's own `Eq` and `Hash`.
#[derive(Clone, Copy, Default, Debug)]
pub struct Natural;

impl<K: Eq + Hash + ?Sized> Equivalence<K> for Natural {
    #[inline]
    fn equivalent(&self, lhs: &K, rhs: &K) -> bool {
        lhs == rhs
    }

    fn hash_of(&self, key: &K) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }
}

/// Keys are equivalent when their projections are equal.
///
/// ```
/// use dstruct_core::{ByKey, DisjointSet};
///
/// let mut names = DisjointSet::with_equivalence(ByKey(|s: &String| s.to_lowercase()));
/// names.union("Alice".to_string(), "Bob".to_string());
/// assert!(names.is_union(&"ALICE".to_string(), &"bob".to_string()));
/// ```
#[derive(Clone, Copy, Default, Debug)]
pub struct ByKey<F>(pub F);

impl<K, Q, F> Equivalence<K> for ByKey<F>
where
    F: Fn(&K) -> Q,
    Q: Eq + Hash,
{
    #[inline]
    fn equivalent(&self, lhs: &K, rhs: &K) -> bool {
        (self.0)(lhs) == (self.0)(rhs)
    }

    fn hash_of(&self, key: &K) -> u64 {
        Natural.hash_of(&(self.0)(key))
    }
}
