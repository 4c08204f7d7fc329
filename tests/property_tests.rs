use std::collections::HashSet;

use dstruct_core::{Additive, DisjointSet, FenwickTree};
use proptest::prelude::*;

fn tree(values: &[i64]) -> FenwickTree<Additive<i64>> {
    values.iter().cloned().collect()
}

proptest! {
    #[test]
    fn prefix_sums_follow_updates(
        mut values in prop::collection::vec(-1000i64..1000, 1..200),
        updates in prop::collection::vec((any::<prop::sample::Index>(), -1000i64..1000), 0..100),
    ) {
        let mut ft = tree(&values);

        for (at, delta) in updates {
            let i = at.index(values.len());
            ft.add(i, delta);
            values[i] += delta;

            let mut expected = 0;
            for (k, &x) in values.iter().enumerate() {
                expected += x;
                prop_assert_eq!(ft.prefix_sum(k), expected);
            }
        }
    }

    #[test]
    fn range_sums_are_additive(
        values in prop::collection::vec(-1000i64..1000, 2..200),
        cuts in any::<[prop::sample::Index; 3]>(),
    ) {
        let ft = tree(&values);
        let n = values.len();

        prop_assert_eq!(ft.range_sum(0, n - 1), values.iter().sum::<i64>());

        let mut cuts: Vec<usize> = cuts.iter().map(|c| c.index(n)).collect();
        cuts.sort_unstable();
        let (a, b, c) = (cuts[0], cuts[1], cuts[2]);
        if b < c {
            prop_assert_eq!(ft.range_sum(a, b) + ft.range_sum(b + 1, c), ft.range_sum(a, c));
        }
    }

    #[test]
    fn add_changes_only_its_point(
        values in prop::collection::vec(-1000i64..1000, 1..200),
        at in any::<prop::sample::Index>(),
        delta in -1000i64..1000,
    ) {
        let mut ft = tree(&values);
        let k = at.index(values.len());
        let before: Vec<i64> = ft.values().collect();

        ft.add(k, delta);

        for (i, x) in ft.values().enumerate() {
            if i == k {
                prop_assert_eq!(x, before[i] + delta);
            } else {
                prop_assert_eq!(x, before[i]);
            }
        }
    }

    #[test]
    fn find_inverts_prefix_sum(values in prop::collection::vec(0i64..50, 1..300)) {
        let ft = tree(&values);

        let mut ps = 0;
        for (k, &x) in values.iter().enumerate() {
            ps += x;
            // Only the first index reaching a given prefix sum is reported.
            if x > 0 || k == 0 {
                prop_assert_eq!(ft.find(&ps), Ok(k));
            }
            prop_assert!(ft.find(&ps).map_or(false, |j| j <= k));
        }
        prop_assert_eq!(ft.find(&(ps + 1)), Err(values.len()));
    }

    #[test]
    fn groups_partition_the_unioned_keys(
        pairs in prop::collection::vec((0u16..64, 0u16..64), 0..150),
    ) {
        let mut set = DisjointSet::new();
        let mut unioned = HashSet::new();

        for &(u, v) in &pairs {
            let (su, sv) = (set.size_of(&u).max(1), set.size_of(&v).max(1));
            let was_union = set.is_union(&u, &v);

            let merged = set.union(u, v);
            prop_assert_eq!(merged, !was_union);
            prop_assert!(set.is_union(&u, &v));
            prop_assert!(set.is_union(&v, &u));
            if merged {
                prop_assert_eq!(set.size_of(&u), su + sv);
            }
            if u != v {
                unioned.insert(u);
                unioned.insert(v);
            }
        }

        let mut seen = HashSet::new();
        let mut total = 0;
        for group in set.groups() {
            total += group.len();
            for &key in group.iter() {
                prop_assert!(seen.insert(key));
            }
        }
        prop_assert_eq!(total, unioned.len());
        prop_assert_eq!(seen, unioned);
        prop_assert_eq!(set.groups().count(), set.group_count());
    }
}
