//! Chained sort levels and the index comparer built from them.
//!
//! A [`SortLevel`] is a type-erased (key selector, comparator, direction)
//! triple. Before sorting, every level turns the materialized source into a
//! closure that compares two source indexes by their precomputed keys; the
//! [`ElementComparer`] walks those closures in priority order and falls back
//! to the indexes themselves, which is what makes the sort stable.

use std::cmp::Ordering;
use std::rc::Rc;

/// Compares two source indexes by one level's precomputed keys.
type IndexComparer<'a> = Box<dyn Fn(usize, usize) -> Ordering + 'a>;

/// Computes one level's keys for a source slice.
type KeyMaterializer<'a, T> = dyn Fn(&[T]) -> IndexComparer<'a> + 'a;

/// Sort direction of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Smallest key first.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

impl Direction {
    /// Apply this direction to a comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// One level of a chained ordering.
pub(crate) struct SortLevel<'a, T> {
    materialize: Rc<KeyMaterializer<'a, T>>,
    direction: Direction,
}

// Manual impl: cloning shares the immutable materializer, T need not be Clone.
impl<T> Clone for SortLevel<'_, T> {
    fn clone(&self) -> Self {
        Self {
            materialize: Rc::clone(&self.materialize),
            direction: self.direction,
        }
    }
}

impl<'a, T> SortLevel<'a, T> {
    pub(crate) fn new<K, F, C>(key_selector: F, compare: C, direction: Direction) -> Self
    where
        K: 'a,
        F: Fn(&T) -> K + 'a,
        C: Fn(&K, &K) -> Ordering + 'a,
    {
        let compare = Rc::new(compare);
        let materialize = move |source: &[T]| -> IndexComparer<'a> {
            // One call per element per level, never one per comparison
            let keys: Vec<K> = source.iter().map(&key_selector).collect();
            let compare = Rc::clone(&compare);
            Box::new(move |left, right| compare(&keys[left], &keys[right]))
        };

        Self {
            materialize: Rc::new(materialize),
            direction,
        }
    }
}

/// Compares source indexes through every level of a chain.
pub(crate) struct ElementComparer<'a> {
    levels: Vec<(IndexComparer<'a>, Direction)>,
}

impl<'a> ElementComparer<'a> {
    /// Compute the sort keys of every level for `source`.
    pub(crate) fn new<T>(levels: &[SortLevel<'a, T>], source: &[T]) -> Self {
        let levels = levels
            .iter()
            .map(|level| ((level.materialize)(source), level.direction))
            .collect();
        Self { levels }
    }

    /// Compare the elements at two source indexes.
    ///
    /// Only returns `Equal` when `left == right`.
    pub(crate) fn compare(&self, left: usize, right: usize) -> Ordering {
        for (compare, direction) in &self.levels {
            let ordering = compare(left, right);
            if ordering != Ordering::Equal {
                return direction.apply(ordering);
            }
        }

        // Tied on every level: original position decides
        left.cmp(&right)
    }
}
