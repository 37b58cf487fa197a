//! Lazily sorted sequences.
//!
//! An [`OrderedSequence`] only records the source and the chain of levels.
//! Sorting starts when it is turned into an iterator, and proceeds as an
//! iterative quicksort over an index permutation: ranges are partitioned
//! around a random pivot until they hold at most
//! [`INSERTION_SORT_THRESHOLD`] elements, then insertion sorted and yielded.
//! Left ranges are always finished before right ones, so elements come out in
//! final order and a caller that stops early never pays for partitioning the
//! ranges it did not reach.
//!
//! What is paid up front: the source is collected and every level's keys are
//! computed for every element when the iterator is created, and the path
//! from the full range down to the first small range is partitioned before
//! the first element is produced.

use crate::comparer::{Direction, ElementComparer, SortLevel};
use crate::rng::PivotRng;
use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::ops::Range;

/// Ranges of at most this many elements are insertion sorted.
pub const INSERTION_SORT_THRESHOLD: usize = 9;

/// A sequence with a chained, stable ordering that sorts on demand.
///
/// Built with [`order_by`](crate::order_by) and friends or the
/// [`LazyOrderExt`](crate::LazyOrderExt) methods, extended with `then_by*`,
/// and consumed by iterating.
pub struct OrderedSequence<'a, I>
where
    I: IntoIterator,
{
    source: I,
    levels: Vec<SortLevel<'a, I::Item>>,
    seed: Option<u64>,
}

impl<I> Clone for OrderedSequence<'_, I>
where
    I: IntoIterator + Clone,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            levels: self.levels.clone(),
            seed: self.seed,
        }
    }
}

impl<'a, I> OrderedSequence<'a, I>
where
    I: IntoIterator,
{
    pub(crate) fn new(source: I, level: SortLevel<'a, I::Item>) -> Self {
        Self {
            source,
            levels: vec![level],
            seed: None,
        }
    }

    /// Number of levels in the ordering.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Fix the seed used to pick partition pivots.
    ///
    /// The output order never depends on the seed; only the sequence of
    /// comparisons does.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Break ties with an ascending key.
    pub fn then_by<K, F>(self, key_selector: F) -> Self
    where
        K: Ord + 'a,
        F: Fn(&I::Item) -> K + 'a,
    {
        self.then_by_with(key_selector, K::cmp)
    }

    /// Break ties with a descending key.
    pub fn then_by_descending<K, F>(self, key_selector: F) -> Self
    where
        K: Ord + 'a,
        F: Fn(&I::Item) -> K + 'a,
    {
        self.then_by_descending_with(key_selector, K::cmp)
    }

    /// Break ties with an ascending key under a custom comparator.
    pub fn then_by_with<K, F, C>(self, key_selector: F, compare: C) -> Self
    where
        K: 'a,
        F: Fn(&I::Item) -> K + 'a,
        C: Fn(&K, &K) -> Ordering + 'a,
    {
        self.push_level(SortLevel::new(key_selector, compare, Direction::Ascending))
    }

    /// Break ties with a descending key under a custom comparator.
    pub fn then_by_descending_with<K, F, C>(self, key_selector: F, compare: C) -> Self
    where
        K: 'a,
        F: Fn(&I::Item) -> K + 'a,
        C: Fn(&K, &K) -> Ordering + 'a,
    {
        self.push_level(SortLevel::new(key_selector, compare, Direction::Descending))
    }

    fn push_level(mut self, level: SortLevel<'a, I::Item>) -> Self {
        // Appended at the tail: earlier levels keep their precedence
        self.levels.push(level);
        self
    }
}

impl<'a, I> IntoIterator for OrderedSequence<'a, I>
where
    I: IntoIterator,
{
    type Item = I::Item;
    type IntoIter = Sorted<'a, I::Item>;

    fn into_iter(self) -> Self::IntoIter {
        let source: Vec<I::Item> = self.source.into_iter().collect();
        let comparer = ElementComparer::new(&self.levels, &source);
        let rng = match self.seed {
            Some(seed) => PivotRng::with_seed(seed),
            None => PivotRng::from_time(),
        };
        Sorted::new(source, comparer, rng)
    }
}

/// Iterator over an [`OrderedSequence`] in sorted order.
///
/// Single pass: to sort again, build a new sequence.
pub struct Sorted<'a, T> {
    items: Vec<Option<T>>,
    indexes: Vec<usize>,
    comparer: ElementComparer<'a>,
    rng: PivotRng,
    /// Half-open ranges of `indexes` still to sort, processed LIFO.
    stack: Vec<Range<usize>>,
    /// Sorted positions of `indexes` not yet yielded.
    ready: Range<usize>,
    remaining: usize,
}

impl<'a, T> Sorted<'a, T> {
    fn new(source: Vec<T>, comparer: ElementComparer<'a>, rng: PivotRng) -> Self {
        let len = source.len();
        Self {
            items: source.into_iter().map(Some).collect(),
            indexes: (0..len).collect(),
            comparer,
            rng,
            stack: vec![0..len],
            ready: 0..0,
            remaining: len,
        }
    }

    /// Stable insertion sort of `indexes[range]`.
    fn insertion_sort(&mut self, range: Range<usize>) {
        for index in range.start + 1..range.end {
            let value = self.indexes[index];
            let mut insert = index;
            while insert > range.start
                && self.comparer.compare(self.indexes[insert - 1], value) == Ordering::Greater
            {
                self.indexes[insert] = self.indexes[insert - 1];
                insert -= 1;
            }
            self.indexes[insert] = value;
        }
    }

    /// Partition `indexes[range]` around a random pivot; returns the pivot's
    /// final position.
    fn partition(&mut self, range: Range<usize>) -> usize {
        let last = range.end - 1;
        let pivot_slot = self.rng.next_index(range.start, range.end);
        self.indexes.swap(pivot_slot, last);
        let pivot = self.indexes[last];

        let mut store = range.start;
        for index in range.start..last {
            if self.comparer.compare(self.indexes[index], pivot) != Ordering::Greater {
                self.indexes.swap(index, store);
                store += 1;
            }
        }

        self.indexes.swap(store, last);
        store
    }
}

impl<T> Iterator for Sorted<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(position) = self.ready.next() {
                let item = self.items[self.indexes[position]].take();
                if item.is_some() {
                    self.remaining -= 1;
                    return item;
                }
                continue;
            }

            let range = self.stack.pop()?;
            if range.len() <= INSERTION_SORT_THRESHOLD {
                debug_assert_eq!(range.start, self.items.len() - self.remaining);
                self.insertion_sort(range.clone());
                self.ready = range;
            } else {
                let pivot = self.partition(range.clone());

                // Pushed in reverse: left range pops first, then pivot, then right
                self.stack.push(pivot + 1..range.end);
                self.stack.push(pivot..pivot + 1);
                self.stack.push(range.start..pivot);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Sorted<'_, T> {}

impl<T> FusedIterator for Sorted<'_, T> {}
