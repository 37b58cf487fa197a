//! # OxiUtil-Sort: Lazy Stable Multi-Key Ordering
//!
//! Orders any sequence by a chain of keys, computing the sorted output
//! prefix-first so that consumers who stop early skip work on the rest.
//!
//! ## Features
//!
//! - **Stable**: elements tied on every key keep their input order
//! - **Chained keys**: `order_by` then any number of `then_by` levels, each
//!   ascending or descending, with `Ord` or a custom comparator
//! - **Keys computed once**: each key selector runs once per element
//! - **Iterative**: quicksort driven by an explicit range stack, so recursion
//!   depth never depends on the input
//! - **Lazy**: ranges beyond the consumed prefix are never partitioned
//!
//! ## Example
//!
//! ```rust
//! use oxiutil_sort::LazyOrderExt;
//!
//! let people = vec![("bob", 30), ("alice", 25), ("carol", 30), ("dave", 25)];
//!
//! let sorted: Vec<_> = people
//!     .iter()
//!     .lazy_order_by_descending(|p| p.1)
//!     .then_by(|p| p.0)
//!     .into_iter()
//!     .map(|p| p.0)
//!     .collect();
//!
//! assert_eq!(sorted, ["bob", "carol", "alice", "dave"]);
//! ```
//!
//! Taking a prefix only sorts as much as it needs:
//!
//! ```rust
//! use oxiutil_sort::order_by;
//!
//! let data: Vec<u32> = (0..100_000).rev().collect();
//! let smallest: Vec<u32> = order_by(data, |x| *x).into_iter().take(3).collect();
//! assert_eq!(smallest, [0, 1, 2]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod comparer;
mod ordered;
mod rng;

pub use comparer::Direction;
pub use ordered::{INSERTION_SORT_THRESHOLD, OrderedSequence, Sorted};

use comparer::SortLevel;
use std::cmp::Ordering;

/// Order `source` by an ascending key.
pub fn order_by<'a, I, K, F>(source: I, key_selector: F) -> OrderedSequence<'a, I>
where
    I: IntoIterator,
    K: Ord + 'a,
    F: Fn(&I::Item) -> K + 'a,
{
    order_by_with(source, key_selector, K::cmp)
}

/// Order `source` by a descending key.
pub fn order_by_descending<'a, I, K, F>(source: I, key_selector: F) -> OrderedSequence<'a, I>
where
    I: IntoIterator,
    K: Ord + 'a,
    F: Fn(&I::Item) -> K + 'a,
{
    order_by_descending_with(source, key_selector, K::cmp)
}

/// Order `source` by an ascending key under a custom comparator.
pub fn order_by_with<'a, I, K, F, C>(
    source: I,
    key_selector: F,
    compare: C,
) -> OrderedSequence<'a, I>
where
    I: IntoIterator,
    K: 'a,
    F: Fn(&I::Item) -> K + 'a,
    C: Fn(&K, &K) -> Ordering + 'a,
{
    OrderedSequence::new(
        source,
        SortLevel::new(key_selector, compare, Direction::Ascending),
    )
}

/// Order `source` by a descending key under a custom comparator.
pub fn order_by_descending_with<'a, I, K, F, C>(
    source: I,
    key_selector: F,
    compare: C,
) -> OrderedSequence<'a, I>
where
    I: IntoIterator,
    K: 'a,
    F: Fn(&I::Item) -> K + 'a,
    C: Fn(&K, &K) -> Ordering + 'a,
{
    OrderedSequence::new(
        source,
        SortLevel::new(key_selector, compare, Direction::Descending),
    )
}

/// Method-call forms of the `order_by*` functions for any [`IntoIterator`].
pub trait LazyOrderExt: IntoIterator + Sized {
    /// See [`order_by`].
    fn lazy_order_by<'a, K, F>(self, key_selector: F) -> OrderedSequence<'a, Self>
    where
        K: Ord + 'a,
        F: Fn(&Self::Item) -> K + 'a,
    {
        order_by(self, key_selector)
    }

    /// See [`order_by_descending`].
    fn lazy_order_by_descending<'a, K, F>(self, key_selector: F) -> OrderedSequence<'a, Self>
    where
        K: Ord + 'a,
        F: Fn(&Self::Item) -> K + 'a,
    {
        order_by_descending(self, key_selector)
    }

    /// See [`order_by_with`].
    fn lazy_order_by_with<'a, K, F, C>(
        self,
        key_selector: F,
        compare: C,
    ) -> OrderedSequence<'a, Self>
    where
        K: 'a,
        F: Fn(&Self::Item) -> K + 'a,
        C: Fn(&K, &K) -> Ordering + 'a,
    {
        order_by_with(self, key_selector, compare)
    }

    /// See [`order_by_descending_with`].
    fn lazy_order_by_descending_with<'a, K, F, C>(
        self,
        key_selector: F,
        compare: C,
    ) -> OrderedSequence<'a, Self>
    where
        K: 'a,
        F: Fn(&Self::Item) -> K + 'a,
        C: Fn(&K, &K) -> Ordering + 'a,
    {
        order_by_descending_with(self, key_selector, compare)
    }
}

impl<I: IntoIterator> LazyOrderExt for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_is_stable() {
        let data = vec![(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd')];
        let sorted: Vec<_> = order_by_descending(data, |p| p.0).into_iter().collect();
        assert_eq!(sorted, vec![(2, 'b'), (2, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn test_custom_comparator() {
        let words = vec!["Banana", "apple", "cherry", "Apple"];
        let sorted: Vec<_> = words
            .lazy_order_by_with(
                |w| w.to_string(),
                |a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase()),
            )
            .into_iter()
            .collect();
        assert_eq!(sorted, vec!["apple", "Apple", "Banana", "cherry"]);
    }

    #[test]
    fn test_descending_custom_comparator() {
        let by_magnitude = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
        let sorted: Vec<i32> = order_by_descending_with(vec![3, -4, 1, -2], |x| *x, by_magnitude)
            .into_iter()
            .collect();
        assert_eq!(sorted, vec![-4, 3, -2, 1]);
    }
}
