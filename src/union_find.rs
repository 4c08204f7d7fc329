use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::slice;

use crate::equivalence::{Equivalence, Natural};

/// Union-find over arbitrary keys, with path compression and union by size.
///
/// Keys are stored the first time they are passed to [`union`](Self::union).
/// A key that was never unioned is treated as a singleton group of its own
/// and is never stored: [`find`](Self::find) returns `None` for it and
/// [`size_of`](Self::size_of) returns 0.
///
/// Key equality comes from the [`Equivalence`] `E`, [`Natural`] by default.
#[derive(Clone, Debug)]
pub struct DisjointSet<K, E = Natural> {
    equivalence: E,
    keys: Vec<K>,
    parents: Vec<usize>,
    // `Some` exactly at roots. The root itself is always the first member.
    members: Vec<Option<Vec<usize>>>,
    index: HashMap<u64, Vec<usize>>,
    group_count: usize,
}

impl<K: Eq + Hash> DisjointSet<K> {
    #[inline]
    pub fn new() -> Self {
        Self::with_equivalence(Natural)
    }
}

impl<K, E> DisjointSet<K, E> {
    pub fn with_equivalence(equivalence: E) -> Self {
        Self {
            equivalence,
            keys: Vec::new(),
            parents: Vec::new(),
            members: Vec::new(),
            index: HashMap::new(),
            group_count: 0,
        }
    }

    /// Number of distinct keys stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of groups with at least two keys, the same groups [`groups`]
    /// yields. Keys that were never stored, such as `x` after a lone
    /// `union(x, x)`, are singletons that neither count nor appear in
    /// [`groups`].
    ///
    /// [`groups`]: Self::groups
    #[inline]
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    #[inline]
    pub fn equivalence(&self) -> &E {
        &self.equivalence
    }

    /// Every group, in no particular order.
    ///
    /// Each call walks the current state, so an iterator taken after more
    /// unions sees them.
    pub fn groups(&self) -> Groups<'_, K> {
        Groups {
            keys: &self.keys,
            members: self.members.iter(),
            remaining: self.group_count,
        }
    }

    fn root(&self, mut i: usize) -> usize {
        while self.parents[i] != i {
            i = self.parents[i];
        }
        i
    }

    fn find_root(&mut self, mut i: usize) -> usize {
        let root = self.root(i);

        while i != root {
            let parent = self.parents[i];
            self.parents[i] = root;
            i = parent;
        }

        root
    }

    #[inline]
    fn size_unchecked(&self, root: usize) -> usize {
        self.members[root].as_ref().map_or(0, Vec::len)
    }

    fn group_at(&self, root: usize) -> Group<'_, K> {
        Group {
            keys: &self.keys,
            members: self.members[root].as_deref().unwrap_or(&[]),
        }
    }
}

impl<K, E: Equivalence<K>> DisjointSet<K, E> {
    fn lookup(&self, key: &K) -> Option<usize> {
        let bucket = self.index.get(&self.equivalence.hash_of(key))?;
        bucket
            .iter()
            .copied()
            .find(|&i| self.equivalence.equivalent(&self.keys[i], key))
    }

    fn insert(&mut self, key: K) -> usize {
        let i = self.keys.len();
        self.index
            .entry(self.equivalence.hash_of(&key))
            .or_default()
            .push(i);
        self.keys.push(key);
        self.parents.push(i);
        self.members.push(None);
        i
    }

    fn attach(&mut self, root: usize, key: K) {
        let i = self.insert(key);
        self.parents[i] = root;
        self.members[root].get_or_insert_with(Vec::new).push(i);
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.lookup(key).is_some()
    }

    /// The representative of `key`'s group, compressing the path to it.
    ///
    /// Amortized O(α(n))
    pub fn find(&mut self, key: &K) -> Option<&K> {
        let i = self.lookup(key)?;
        let root = self.find_root(i);
        Some(&self.keys[root])
    }

    /// Merges the groups of `u` and `v`, storing whichever of them is new.
    ///
    /// Returns `false` if they were already in the same group, including
    /// when `u` and `v` are equivalent. On a merge the smaller group moves
    /// under the larger one's representative; on a tie `u`'s group wins.
    pub fn union(&mut self, u: K, v: K) -> bool {
        match (self.lookup(&u), self.lookup(&v)) {
            (None, None) => {
                if self.equivalence.equivalent(&u, &v) {
                    return false;
                }
                let root = self.insert(u);
                let i = self.insert(v);
                self.parents[i] = root;
                self.members[root] = Some(vec![root, i]);
                self.group_count += 1;
            }
            (Some(i), None) => {
                let root = self.find_root(i);
                self.attach(root, v);
            }
            (None, Some(j)) => {
                let root = self.find_root(j);
                self.attach(root, u);
            }
            (Some(i), Some(j)) => {
                let (i, j) = (self.find_root(i), self.find_root(j));
                if i == j {
                    return false;
                }

                let (big, small) = if self.size_unchecked(i) < self.size_unchecked(j) {
                    (j, i)
                } else {
                    (i, j)
                };
                self.parents[small] = big;
                let moved = self.members[small].take().unwrap_or_default();
                self.members[big]
                    .get_or_insert_with(Vec::new)
                    .extend(moved);
                self.group_count -= 1;
            }
        }
        true
    }

    /// Whether `u` and `v` are in the same group. Equivalent keys always are,
    /// stored or not.
    pub fn is_union(&mut self, u: &K, v: &K) -> bool {
        if self.equivalence.equivalent(u, v) {
            return true;
        }
        match (self.lookup(u), self.lookup(v)) {
            (Some(i), Some(j)) => self.find_root(i) == self.find_root(j),
            _ => false,
        }
    }

    /// Size of `key`'s group, 0 if `key` was never unioned.
    pub fn size_of(&self, key: &K) -> usize {
        self.lookup(key)
            .map_or(0, |i| self.size_unchecked(self.root(i)))
    }

    /// The members of `key`'s group, empty if `key` was never unioned.
    /// The representative comes first.
    pub fn group_of(&self, key: &K) -> Group<'_, K> {
        match self.lookup(key) {
            Some(i) => self.group_at(self.root(i)),
            None => Group {
                keys: &self.keys,
                members: &[],
            },
        }
    }
}

impl<K, E: Default> Default for DisjointSet<K, E> {
    fn default() -> Self {
        Self::with_equivalence(E::default())
    }
}

impl<K, E: Equivalence<K>> Extend<(K, K)> for DisjointSet<K, E> {
    fn extend<I: IntoIterator<Item = (K, K)>>(&mut self, iter: I) {
        for (u, v) in iter {
            self.union(u, v);
        }
    }
}

impl<K, E: Equivalence<K> + Default> FromIterator<(K, K)> for DisjointSet<K, E> {
    fn from_iter<I: IntoIterator<Item = (K, K)>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

/// A read-only view of one group's members, representative first.
pub struct Group<'a, K> {
    keys: &'a [K],
    members: &'a [usize],
}

impl<'a, K> Group<'a, K> {
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn representative(&self) -> Option<&'a K> {
        self.members.first().map(|&i| &self.keys[i])
    }

    pub fn iter(&self) -> Members<'a, K> {
        Members {
            keys: self.keys,
            members: self.members.iter(),
        }
    }

    pub fn to_vec(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<K> Clone for Group<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Group<'_, K> {}

impl<K: fmt::Debug> fmt::Debug for Group<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, K> IntoIterator for Group<'a, K> {
    type Item = &'a K;
    type IntoIter = Members<'a, K>;

    fn into_iter(self) -> Members<'a, K> {
        self.iter()
    }
}

impl<'a, K> IntoIterator for &Group<'a, K> {
    type Item = &'a K;
    type IntoIter = Members<'a, K>;

    fn into_iter(self) -> Members<'a, K> {
        self.iter()
    }
}

/// Iterator over the keys of a [`Group`].
pub struct Members<'a, K> {
    keys: &'a [K],
    members: slice::Iter<'a, usize>,
}

impl<'a, K> Iterator for Members<'a, K> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<&'a K> {
        self.members.next().map(|&i| &self.keys[i])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.members.size_hint()
    }
}

impl<'a, K> DoubleEndedIterator for Members<'a, K> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a K> {
        self.members.next_back().map(|&i| &self.keys[i])
    }
}

impl<K> ExactSizeIterator for Members<'_, K> {}
impl<K> FusedIterator for Members<'_, K> {}

/// Iterator over every [`Group`] of a [`DisjointSet`].
pub struct Groups<'a, K> {
    keys: &'a [K],
    members: slice::Iter<'a, Option<Vec<usize>>>,
    remaining: usize,
}

impl<'a, K> Iterator for Groups<'a, K> {
    type Item = Group<'a, K>;

    fn next(&mut self) -> Option<Group<'a, K>> {
        let keys = self.keys;
        let members = self.members.by_ref().find_map(|m| m.as_deref())?;
        self.remaining -= 1;
        Some(Group { keys, members })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Groups<'_, K> {}
impl<K> FusedIterator for Groups<'_, K> {}
