//! Preview slicing
//!
//! Dashboard previews show the first `n` records in their existing order.
//! [`top_n`] is that positional prefix. [`top_n_by_key`] is an explicit
//! opt-in that ranks first; the dashboards do not use it.

/// First `n` items in their existing order
#[inline]
#[must_use]
pub fn top_n<T>(items: &[T], n: usize) -> &[T] {
    &items[..n.min(items.len())]
}

/// First `n` items after a stable sort by `key`
///
/// Items with equal keys keep their relative order.
#[must_use]
pub fn top_n_by_key<T, K, F>(items: &[T], n: usize, mut key: F) -> Vec<&T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut ranked: Vec<&T> = items.iter().collect();
    ranked.sort_by_key(|item| key(item));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_keeps_order() {
        let items = [5, 1, 4, 2, 3, 9, 7];
        assert_eq!(top_n(&items, 5), &[5, 1, 4, 2, 3]);
    }

    #[test]
    fn prefix_shorter_than_n() {
        let items = [1, 2];
        assert_eq!(top_n(&items, 6), &[1, 2]);
        assert!(top_n(&items, 0).is_empty());
        assert!(top_n::<u8>(&[], 3).is_empty());
    }

    #[test]
    fn ranked_selection_is_stable() {
        let items = [("b", 2), ("a", 1), ("c", 1), ("d", 3)];
        let ranked = top_n_by_key(&items, 3, |(_, rank)| *rank);
        let names: Vec<_> = ranked.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["a", "c", "b"]);
    }
}
