use std::ops::{Bound, RangeBounds};

use crate::error::{Error, Result};
use crate::groups::{AbelianGroup, Additive, CommutativeMonoid};

#[inline]
fn lsb(n: usize) -> usize {
    n & n.wrapping_neg()
}

/// A fixed-length binary indexed tree over the abelian group `G`.
///
/// Slot `i` holds the fold of the values in `range_start(i)..=i`, the range
/// ending at `i` whose length is the lowest set bit of `i + 1`. The length is
/// fixed at construction; values change only through [`add`](Self::add) and
/// [`set`](Self::set).
///
/// Index-taking operations panic on a bad index, like slice indexing. Each of
/// them has a `try_` twin that reports an [`Error`] instead.
#[derive(Clone, Debug)]
pub struct FenwickTree<G: CommutativeMonoid> {
    group: G,
    data: Vec<G::Elem>,
    // Largest power of two <= len, the first step of `find`.
    lift: usize,
}

impl<G: CommutativeMonoid> FenwickTree<G> {
    /// Builds a tree whose point values are `values`, in order.
    ///
    /// O(n)
    pub fn from_values<I: IntoIterator<Item = G::Elem>>(group: G, values: I) -> Self {
        let values = values.into_iter();
        let capacity = match values.size_hint() {
            (_, Some(len)) => len,
            (len, None) => len,
        };

        let mut tree = Self {
            group,
            data: Vec::with_capacity(capacity),
            lift: 0,
        };
        for x in values {
            tree.push(x);
        }
        tree.lift = (tree.len() + 1).next_power_of_two() >> 1;
        tree
    }

    /// A tree of `len` identity values.
    ///
    /// O(n)
    pub fn with_len(group: G, len: usize) -> Self {
        let mut data = Vec::with_capacity(len);
        data.resize_with(len, || group.id());
        Self {
            group,
            data,
            lift: (len + 1).next_power_of_two() >> 1,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn group(&self) -> &G {
        &self.group
    }

    #[inline]
    fn range_start(mut i: usize) -> usize {
        i += 1;
        i - lsb(i)
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds {
                index,
                len: self.len(),
            })
        }
    }

    /// Only used while building: the new slot folds the slots it covers.
    ///
    /// Avg: O(1), Worst case: O(log n)
    fn push(&mut self, mut x: G::Elem) {
        let bottom = Self::range_start(self.len());

        let mut i = self.len();
        while bottom < i {
            x = self.group.add(self.data[i - 1].clone(), x);
            i -= lsb(i); // i is going to the left of `x`
        }

        self.data.push(x);
    }

    /// Fold of the first `end` values. `end` must be `<= len`.
    fn sum_before(&self, mut end: usize) -> G::Elem {
        let mut ps = self.group.id();
        while end != 0 {
            ps = self.group.add(self.data[end - 1].clone(), ps);
            end -= lsb(end);
        }
        ps
    }

    /// O(log n)
    pub fn try_add(&mut self, index: usize, delta: G::Elem) -> Result<()> {
        self.check_index(index)?;

        let mut i = index;
        while i < self.len() {
            self.data[i] = self.group.add(self.data[i].clone(), delta.clone());
            i |= i + 1;
        }
        Ok(())
    }

    /// Adds `delta` to the value at `index`.
    ///
    /// # Panics
    ///
    /// If `index >= len`.
    pub fn add(&mut self, index: usize, delta: G::Elem) {
        if let Err(err) = self.try_add(index, delta) {
            panic!("{}", err);
        }
    }

    /// O(log n)
    pub fn try_prefix_sum(&self, index: usize) -> Result<G::Elem> {
        self.check_index(index)?;
        Ok(self.sum_before(index + 1))
    }

    /// Fold of the values at `0..=index`. The empty prefix is `sum(..0)`.
    ///
    /// # Panics
    ///
    /// If `index >= len`.
    pub fn prefix_sum(&self, index: usize) -> G::Elem {
        self.try_prefix_sum(index)
            .unwrap_or_else(|err| panic!("{}", err))
    }

    /// Fold of every value. O(log n)
    pub fn total(&self) -> G::Elem {
        self.sum_before(self.len())
    }
}

impl<G: AbelianGroup> FenwickTree<G> {
    /// Avg: O(1), Worst case: O(log i)
    fn point(&self, mut i: usize) -> G::Elem {
        let mut x = self.data[i].clone();
        let bottom = Self::range_start(i);
        while bottom < i {
            x = self.group.sub(x, self.data[i - 1].clone());
            i -= lsb(i);
        }
        x
    }

    pub fn try_get(&self, index: usize) -> Result<G::Elem> {
        self.check_index(index)?;
        Ok(self.point(index))
    }

    /// The value at `index`, recovered from the tree without a shadow copy.
    ///
    /// # Panics
    ///
    /// If `index >= len`.
    pub fn get(&self, index: usize) -> G::Elem {
        self.try_get(index).unwrap_or_else(|err| panic!("{}", err))
    }

    /// O(log n)
    pub fn try_sub(&mut self, index: usize, delta: G::Elem) -> Result<()> {
        self.check_index(index)?;

        let mut i = index;
        while i < self.len() {
            self.data[i] = self.group.sub(self.data[i].clone(), delta.clone());
            i |= i + 1;
        }
        Ok(())
    }

    /// Subtracts `delta` from the value at `index`.
    ///
    /// # Panics
    ///
    /// If `index >= len`.
    pub fn sub(&mut self, index: usize, delta: G::Elem) {
        if let Err(err) = self.try_sub(index, delta) {
            panic!("{}", err);
        }
    }

    /// `add` should be preferred over this, because it doesn't call `get`.
    ///
    /// Lowering a value walks the tree with `sub`, so unsigned elements never
    /// go through a negative delta.
    ///
    /// O(log n)
    pub fn try_set(&mut self, index: usize, value: G::Elem) -> Result<()>
    where
        G::Elem: PartialOrd,
    {
        let old = self.try_get(index)?;
        if value < old {
            let delta = self.group.sub(old, value);
            self.try_sub(index, delta)
        } else {
            let delta = self.group.sub(value, old);
            self.try_add(index, delta)
        }
    }

    /// # Panics
    ///
    /// If `index >= len`.
    pub fn set(&mut self, index: usize, value: G::Elem)
    where
        G::Elem: PartialOrd,
    {
        if let Err(err) = self.try_set(index, value) {
            panic!("{}", err);
        }
    }

    /// Fold of the values in `range`.
    ///
    /// O(log n)
    pub fn try_sum<R: RangeBounds<usize>>(&self, range: R) -> Result<G::Elem> {
        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => i.saturating_add(1),
            Bound::Excluded(&i) => i,
            Bound::Unbounded => self.len(),
        };
        if start > end || end > self.len() {
            return Err(Error::InvalidRange {
                start,
                end,
                len: self.len(),
            });
        }

        Ok(self
            .group
            .sub(self.sum_before(end), self.sum_before(start)))
    }

    /// # Panics
    ///
    /// If `range` is reversed or reaches past `len`.
    pub fn sum<R: RangeBounds<usize>>(&self, range: R) -> G::Elem {
        self.try_sum(range).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Inclusive on both ends.
    pub fn try_range_sum(&self, left: usize, right: usize) -> Result<G::Elem> {
        self.check_index(right)?;
        if left > right {
            return Err(Error::InvalidRange {
                start: left,
                end: right + 1,
                len: self.len(),
            });
        }
        self.try_sum(left..=right)
    }

    /// Fold of the values at `left..=right`.
    ///
    /// # Panics
    ///
    /// If `right >= len` or `left > right`.
    pub fn range_sum(&self, left: usize, right: usize) -> G::Elem {
        self.try_range_sum(left, right)
            .unwrap_or_else(|err| panic!("{}", err))
    }

    /// Every point value, in order. O(n) in total.
    pub fn values(&self) -> impl Iterator<Item = G::Elem> + '_ {
        (0..self.len()).map(move |i| self.point(i))
    }

    /// Every prefix sum, in order. O(n) in total.
    pub fn prefix_sums(&self) -> impl Iterator<Item = G::Elem> + '_ {
        self.values().scan(self.group.id(), move |ps, x| {
            *ps = self.group.add(ps.clone(), x);
            Some(ps.clone())
        })
    }
}

impl<T: num::Num + PartialOrd + Clone> FenwickTree<Additive<T>> {
    /// Searches for the smallest index whose prefix sum equals `target`.
    ///
    /// Works like [`slice::binary_search`] over the prefix sums: `Ok(k)` if
    /// `prefix_sum(k) == target`, otherwise `Err(p)` where `p` is the number
    /// of prefix sums less than `target`. The prefix sums must be
    /// non-decreasing, i.e. every value must be non-negative. Only ordered
    /// additive trees have such prefix sums, so this isn't offered for other
    /// groups.
    ///
    /// ```
    /// use dstruct_core::{Additive, FenwickTree};
    ///
    /// let ft: FenwickTree<Additive<i32>> = vec![1, 2, 3, 4].into_iter().collect();
    /// assert_eq!(ft.find(&6), Ok(2));
    /// assert_eq!(ft.find(&7), Err(3));
    /// ```
    ///
    /// O(log n)
    pub fn find(&self, target: &T) -> std::result::Result<usize, usize> {
        let mut pos = 0;
        let mut rest = target.clone();
        let mut step = self.lift;
        while step != 0 {
            // `data[pos + step - 1]` covers exactly `pos..pos + step`.
            let next = pos + step;
            if next <= self.len() && self.data[next - 1] < rest {
                rest = rest - self.data[next - 1].clone();
                pos = next;
            }
            step >>= 1;
        }

        if pos < self.len() && self.point(pos) == rest {
            Ok(pos)
        } else {
            Err(pos)
        }
    }
}

impl<T: num::Num + Clone> FromIterator<T> for FenwickTree<Additive<T>> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(Additive::new(), iter)
    }
}
