//! Pair iteration over the body collection
//!
//! Every interaction in the engine is pairwise and O(n^2). These helpers
//! replace hand-written nested index loops.

/// All ordered pairs `(i, j)` with `i != j`, row by row
pub fn ordered_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (0..n).filter(move |&j| j != i).map(move |j| (i, j)))
}

/// All unordered pairs `(i, j)` with `i < j`
pub fn unordered_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| ((i + 1)..n).map(move |j| (i, j)))
}

/// Mutable references to two distinct elements, `i < j`
pub(crate) fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    assert!(i < j, "pair_mut needs i < j, got ({i}, {j})");
    let (left, right) = items.split_at_mut(j);
    (&mut left[i], &mut right[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_pairs_skip_self() {
        let pairs: Vec<_> = ordered_pairs(3).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)]);
    }

    #[test]
    fn unordered_pairs_are_upper_triangle() {
        let pairs: Vec<_> = unordered_pairs(4).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert_eq!(unordered_pairs(1).count(), 0);
        assert_eq!(unordered_pairs(0).count(), 0);
    }

    #[test]
    fn pair_mut_gives_disjoint_refs() {
        let mut v = vec![1, 2, 3, 4];
        let (a, b) = pair_mut(&mut v, 1, 3);
        std::mem::swap(a, b);
        assert_eq!(v, vec![1, 4, 3, 2]);
    }
}
