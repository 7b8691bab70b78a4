//! `CompositeRange`: an immutable, sorted collection of ranges representing a
//! (possibly disconnected) subset of an ordered domain.
//!
//! Construction discards empty ranges and sorts the rest by `from` (ties broken
//! by `to`). Overlapping sub-ranges are kept as given, which is what
//! [`get_intersections`](CompositeRange::get_intersections) enumerates;
//! [`merge`](CompositeRange::merge) coalesces them into canonical form. The set
//! algebra (`union`, `intersect`, `except`, `complement`) always returns merged
//! composites.

use std::{fmt, sync::Arc};

use itertools::Itertools;

use crate::{
    boundary::{BoundaryFrom, BoundaryTo},
    range::{NoKey, Range, RangeKey},
};

pub mod intersections;
pub(crate) mod merge;
mod set_ops;

pub use intersections::{RangeIntersection, RangeIntersections};

use merge::{MergedRanges, NonEmptyRanges, SortedRanges};

/// An immutable, cheaply cloneable collection of sorted sub-ranges.
///
/// Invariants:
/// - `sub_ranges` holds no empty range and is sorted by `from`, then `to`.
/// - `containing_range` is the smallest range enclosing all sub-ranges
///   (`∅` for an empty composite).
/// - `merged` is `true` iff no two sub-ranges overlap or adjoin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeRange<T, K = NoKey> {
    sub_ranges: Arc<[Range<T, K>]>,
    containing_range: Range<T>,
    merged: bool,
}

impl<T> CompositeRange<T> {
    /// The composite covering the whole domain.
    pub fn infinite() -> Self {
        CompositeRange {
            sub_ranges: Arc::from(vec![Range::infinite()]),
            containing_range: Range::infinite(),
            merged: true,
        }
    }
}

impl<T, K> CompositeRange<T, K> {
    pub fn empty() -> Self {
        CompositeRange {
            sub_ranges: Arc::from(Vec::new()),
            containing_range: Range::empty(),
            merged: true,
        }
    }

    #[inline]
    pub fn sub_ranges(&self) -> &[Range<T, K>] {
        &self.sub_ranges
    }

    /// The smallest range enclosing every sub-range.
    #[inline]
    pub fn containing_range(&self) -> &Range<T> {
        &self.containing_range
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sub_ranges.is_empty()
    }

    /// Returns `true` if no two sub-ranges overlap or adjoin.
    #[inline]
    pub fn is_merged(&self) -> bool {
        self.merged
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sub_ranges.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Range<T, K>> {
        self.sub_ranges.iter()
    }
}

impl<T: Ord + Clone, K> CompositeRange<T, K> {
    /// Builds a composite from an arbitrary sequence of ranges: empty ranges
    /// are discarded and the rest sorted. Overlapping ranges are kept.
    pub fn new<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = Range<T, K>>,
    {
        Self::from_sorted(NonEmptyRanges::collect(ranges).sort())
    }

    pub(crate) fn from_sorted(ranges: SortedRanges<T, K>) -> Self {
        let merged = merge::is_merged_sorted(ranges.as_slice());
        let containing_range = match ranges.as_slice().first() {
            None => Range::empty(),
            Some(first) => {
                // The last sub-range need not end last when sub-ranges overlap.
                let to = ranges
                    .as_slice()
                    .iter()
                    .map(|r| r.to())
                    .max_by(|a, b| a.total_cmp(b))
                    .unwrap_or(first.to());
                Range::new_unchecked(first.from().clone(), to.clone(), NoKey)
            }
        };
        CompositeRange {
            sub_ranges: Arc::from(ranges.into_vec()),
            containing_range,
            merged,
        }
    }

    /// Coalesces overlapping and adjoining sub-ranges into canonical form.
    ///
    /// Keys cannot survive coalescing, so the result is unkeyed.
    pub fn merge(&self) -> CompositeRange<T> {
        CompositeRange::from_merged(merge::merge_sorted(&self.sub_ranges))
    }

    /// Returns `true` if `value` lies within any sub-range.
    pub fn contains(&self, value: &T) -> bool {
        self.containing_range.contains(value)
            && self
                .sub_ranges
                .iter()
                .take_while(|r| !r.starts_after(value))
                .any(|r| r.contains(value))
    }

    /// Returns `true` if every value of `range` lies within the composite.
    pub fn contains_range<K2>(&self, range: &Range<T, K2>) -> bool {
        if range.is_empty() {
            return true;
        }
        if !self.containing_range.contains_range(range) {
            return false;
        }
        if self.merged {
            self.sub_ranges.iter().any(|r| r.contains_range(range))
        } else {
            self.merge().contains_range(range)
        }
    }

    /// Returns `true` if any sub-range shares a value with `range`.
    pub fn has_intersection<K2>(&self, range: &Range<T, K2>) -> bool {
        self.containing_range.has_intersection(range)
            && self
                .sub_ranges
                .iter()
                .take_while(|r| !r.starts_after_range(range))
                .any(|r| r.has_intersection(range))
    }
}

impl<T: Ord + Clone, K: Clone> CompositeRange<T, K> {
    /// Drops the keys of all sub-ranges.
    pub fn without_keys(&self) -> CompositeRange<T> {
        CompositeRange {
            sub_ranges: self
                .sub_ranges
                .iter()
                .map(|r| r.clone().without_key())
                .collect(),
            containing_range: self.containing_range.clone(),
            merged: self.merged,
        }
    }

    /// Moves the start of the composite outwards to `from`. Only the sub-ranges
    /// starting at the current start are extended.
    pub fn extend_from(&self, from: BoundaryFrom<T>) -> Self {
        if self.is_empty()
            || from.is_empty()
            || from.total_cmp(self.containing_range.from()).is_ge()
        {
            return self.clone();
        }
        let start = self.containing_range.from();
        let ranges = self
            .sub_ranges
            .iter()
            .map(|r| {
                if r.from() == start {
                    r.extend_from(from.clone())
                } else {
                    r.clone()
                }
            })
            .collect();
        Self::from_sorted(SortedRanges::assume_sorted(ranges))
    }

    /// Moves the end of the composite outwards to `to`. Only the sub-ranges
    /// ending at the current end are extended.
    pub fn extend_to(&self, to: BoundaryTo<T>) -> Self {
        if self.is_empty()
            || to.is_empty()
            || to.total_cmp(self.containing_range.to()).is_le()
        {
            return self.clone();
        }
        let end = self.containing_range.to();
        let ranges = self
            .sub_ranges
            .iter()
            .map(|r| {
                if r.to() == end {
                    r.extend_to(to.clone())
                } else {
                    r.clone()
                }
            })
            .collect();
        Self::from_sorted(SortedRanges::assume_sorted(ranges))
    }

    /// Moves the start of the composite inwards to `from`, trimming the
    /// sub-ranges starting before it and dropping those left empty.
    pub fn trim_from(&self, from: BoundaryFrom<T>) -> Self {
        if self.is_empty()
            || from.is_empty()
            || from.total_cmp(self.containing_range.from()).is_le()
        {
            return self.clone();
        }
        Self::new(self.sub_ranges.iter().map(|r| r.trim_from(from.clone())))
    }

    /// Moves the end of the composite inwards to `to`, trimming the sub-ranges
    /// ending after it and dropping those left empty.
    pub fn trim_to(&self, to: BoundaryTo<T>) -> Self {
        if self.is_empty()
            || to.is_empty()
            || to.total_cmp(self.containing_range.to()).is_ge()
        {
            return self.clone();
        }
        Self::new(self.sub_ranges.iter().map(|r| r.trim_to(to.clone())))
    }
}

impl<T: Ord + Clone> CompositeRange<T> {
    pub(crate) fn from_merged(ranges: MergedRanges<T>) -> Self {
        let ranges = ranges.into_vec();
        let containing_range = match (ranges.first(), ranges.last()) {
            (Some(first), Some(last)) => {
                Range::new_unchecked(first.from().clone(), last.to().clone(), NoKey)
            }
            _ => Range::empty(),
        };
        CompositeRange {
            sub_ranges: Arc::from(ranges),
            containing_range,
            merged: true,
        }
    }

    /// `self` if already merged (a cheap clone), the merged form otherwise.
    pub(crate) fn to_merged(&self) -> Self {
        if self.merged {
            self.clone()
        } else {
            self.merge()
        }
    }
}

impl<T: Ord + Clone, K> From<Range<T, K>> for CompositeRange<T, K> {
    fn from(range: Range<T, K>) -> Self {
        CompositeRange::new(std::iter::once(range))
    }
}

impl<T: Ord + Clone, K> FromIterator<Range<T, K>> for CompositeRange<T, K> {
    fn from_iter<I: IntoIterator<Item = Range<T, K>>>(iter: I) -> Self {
        CompositeRange::new(iter)
    }
}

impl<'a, T, K> IntoIterator for &'a CompositeRange<T, K> {
    type Item = &'a Range<T, K>;
    type IntoIter = std::slice::Iter<'a, Range<T, K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sub_ranges.iter()
    }
}

impl<T: fmt::Display, K: RangeKey> fmt::Display for CompositeRange<T, K> {
    /// Renders `[1..12]: { [1..5]; [10..12] }`; the empty composite renders
    /// as `∅`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.containing_range, f)?;
        if self.is_empty() {
            return Ok(());
        }
        f.write_str(": { ")?;
        fmt::Display::fmt(&self.sub_ranges.iter().format("; "), f)?;
        f.write_str(" }")
    }
}
