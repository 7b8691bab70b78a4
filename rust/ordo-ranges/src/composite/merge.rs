//! The sort/merge engine that brings an arbitrary sequence of ranges into the
//! canonical form of a composite range.
//!
//! Each stage is represented by a witness type that can only be produced by
//! performing the stage (or, for internal hot paths, by an `assume_*`
//! constructor whose precondition is checked in debug builds):
//!
//! - [`NonEmptyRanges`]: empty ranges discarded.
//! - [`SortedRanges`]: non-empty, sorted by `from`, ties broken by `to`.
//! - [`MergedRanges`]: sorted, with no two ranges overlapping or adjoining.

use std::cmp::Ordering;

use itertools::Itertools;

use crate::{
    boundary::{self, BoundaryFrom, BoundaryTo},
    range::{NoKey, Range},
};

/// Ordering of ranges within a composite: by `from`, then by `to`.
pub(crate) fn cmp_ranges<T: Ord, K1, K2>(a: &Range<T, K1>, b: &Range<T, K2>) -> Ordering {
    a.from()
        .total_cmp(b.from())
        .then_with(|| a.to().total_cmp(b.to()))
}

pub(crate) fn is_sorted<T: Ord, K>(ranges: &[Range<T, K>]) -> bool {
    ranges.iter().all(|r| !r.is_empty())
        && ranges
            .iter()
            .tuple_windows()
            .all(|(a, b)| cmp_ranges(a, b).is_le())
}

/// Returns `true` if sorted `ranges` have no overlapping or adjoining neighbours.
///
/// Checking neighbours is enough: if a range overlaps any later one, it also
/// reaches the start of its immediate successor.
pub(crate) fn is_merged_sorted<T: Ord, K>(ranges: &[Range<T, K>]) -> bool {
    ranges
        .iter()
        .tuple_windows()
        .all(|(a, b)| !boundary::adjoins(a.to(), b.from()))
}

/// Ranges with all empty entries removed.
pub(crate) struct NonEmptyRanges<T, K>(Vec<Range<T, K>>);

impl<T: Ord, K> NonEmptyRanges<T, K> {
    pub(crate) fn collect<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = Range<T, K>>,
    {
        NonEmptyRanges(ranges.into_iter().filter(|r| !r.is_empty()).collect())
    }

    /// Wraps ranges the caller knows to be non-empty.
    pub(crate) fn assume_non_empty(ranges: Vec<Range<T, K>>) -> Self {
        debug_assert!(ranges.iter().all(|r| !r.is_empty()));
        NonEmptyRanges(ranges)
    }

    /// Stable sort by `from`, then by `to`, so nested ranges with equal starts
    /// end up adjacent.
    pub(crate) fn sort(self) -> SortedRanges<T, K> {
        let mut ranges = self.0;
        ranges.sort_by(|a, b| cmp_ranges(a, b));
        SortedRanges(ranges)
    }
}

/// Non-empty ranges in composite order.
pub(crate) struct SortedRanges<T, K>(Vec<Range<T, K>>);

impl<T: Ord, K> SortedRanges<T, K> {
    /// Wraps ranges the caller knows to be non-empty and sorted.
    pub(crate) fn assume_sorted(ranges: Vec<Range<T, K>>) -> Self {
        debug_assert!(is_sorted(&ranges));
        SortedRanges(ranges)
    }

    pub(crate) fn as_slice(&self) -> &[Range<T, K>] {
        &self.0
    }

    pub(crate) fn into_vec(self) -> Vec<Range<T, K>> {
        self.0
    }
}

/// Sorted ranges with no two of them overlapping or adjoining.
pub(crate) struct MergedRanges<T>(Vec<Range<T>>);

impl<T: Ord> MergedRanges<T> {
    /// Wraps ranges the caller knows to be in canonical merged form.
    pub(crate) fn assume_merged(ranges: Vec<Range<T>>) -> Self {
        debug_assert!(is_sorted(&ranges));
        debug_assert!(is_merged_sorted(&ranges));
        MergedRanges(ranges)
    }

    pub(crate) fn into_vec(self) -> Vec<Range<T>> {
        self.0
    }
}

/// Coalesces sorted ranges into canonical form, dropping their keys.
///
/// Sweeps left to right and folds a range into the accumulator whenever the
/// accumulator reaches or touches its start: `[1..2]` and `(2..3]` merge into
/// `[1..3]`, while `[1..2)` and `(2..3]` stay apart.
pub(crate) fn merge_sorted<T, K>(ranges: &[Range<T, K>]) -> MergedRanges<T>
where
    T: Ord + Clone,
{
    debug_assert!(is_sorted(ranges));

    let mut merged = Vec::with_capacity(ranges.len());
    let mut iter = ranges.iter();
    let Some(first) = iter.next() else {
        return MergedRanges(merged);
    };

    let mut from: BoundaryFrom<T> = first.from().clone();
    let mut to: BoundaryTo<T> = first.to().clone();
    for r in iter {
        if boundary::adjoins(&to, r.from()) {
            if r.to().total_cmp(&to).is_gt() {
                to = r.to().clone();
            }
        } else {
            let next_from = r.from().clone();
            let next_to = r.to().clone();
            merged.push(Range::new_unchecked(
                std::mem::replace(&mut from, next_from),
                std::mem::replace(&mut to, next_to),
                NoKey,
            ));
        }
    }
    merged.push(Range::new_unchecked(from, to, NoKey));

    log::trace!(
        "merged {} sub-ranges into {}",
        ranges.len(),
        merged.len()
    );
    MergedRanges(merged)
}
