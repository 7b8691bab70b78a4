//! Overlap structure of a composite range.
//!
//! [`RangeIntersections`] is a sweep-line over the sorted sub-ranges. It keeps
//! the sub-ranges overlapping the sweep position ("active") ordered by their
//! `to` boundary. At each step the next event is either the start of the next
//! sub-range or the earliest end among the active ones:
//!
//! - a start inside the active span closes the region preceding it and joins
//!   the active set;
//! - an end closes the region up to it and retires every active sub-range
//!   ending there.
//!
//! Every yielded region is maximal and labelled with exactly the sub-ranges
//! covering it. The sweep does not partition the whole domain: gaps between
//! sub-ranges and the unbounded tails beyond them are covered by no sub-range
//! and are omitted, so a value outside every yielded region overlaps zero
//! sub-ranges. Use [`CompositeRange::get_intersection`] for a point query that
//! reports an empty contributor list instead.

use std::fmt;

use itertools::Itertools;

use super::CompositeRange;
use crate::{
    boundary::{self, BoundaryFrom, BoundaryTo},
    range::{NoKey, Range, RangeKey},
};

/// A region of the domain and the sub-ranges covering it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeIntersection<T, K = NoKey> {
    intersection_range: Range<T>,
    ranges: Vec<Range<T, K>>,
}

impl<T, K> RangeIntersection<T, K> {
    pub(crate) fn new(intersection_range: Range<T>, ranges: Vec<Range<T, K>>) -> Self {
        RangeIntersection {
            intersection_range,
            ranges,
        }
    }

    /// The region the sub-ranges have in common.
    pub fn intersection_range(&self) -> &Range<T> {
        &self.intersection_range
    }

    /// The sub-ranges covering the region, in composite order.
    pub fn ranges(&self) -> &[Range<T, K>] {
        &self.ranges
    }

    /// Returns `true` if no sub-range covers the region.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn into_parts(self) -> (Range<T>, Vec<Range<T, K>>) {
        (self.intersection_range, self.ranges)
    }
}

impl<T: fmt::Display, K: RangeKey> fmt::Display for RangeIntersection<T, K> {
    /// Renders `[3..5]: { [1..5]; [3..8] }`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.intersection_range, f)?;
        if self.ranges.is_empty() {
            return f.write_str(": { }");
        }
        f.write_str(": { ")?;
        fmt::Display::fmt(&self.ranges.iter().format("; "), f)?;
        f.write_str(" }")
    }
}

/// Lazy sweep-line over the sub-ranges of a composite; see the module docs.
///
/// The iterator is finite and holds no state shared with other iterators:
/// every call to [`CompositeRange::get_intersections`] starts a fresh sweep.
#[derive(Debug, Clone)]
pub struct RangeIntersections<'a, T, K = NoKey> {
    ranges: &'a [Range<T, K>],
    /// Index of the next sub-range to enter the sweep.
    next_index: usize,
    /// Indices of the sub-ranges covering the sweep position, ordered by `to`.
    active: Vec<usize>,
    /// Start of the region not yet yielded; `None` while nothing is active.
    cursor: Option<BoundaryFrom<T>>,
}

impl<'a, T: Ord + Clone, K: Clone> RangeIntersections<'a, T, K> {
    fn new(ranges: &'a [Range<T, K>]) -> Self {
        RangeIntersections {
            ranges,
            next_index: 0,
            active: Vec::new(),
            cursor: None,
        }
    }

    fn activate_next(&mut self) {
        let ranges = self.ranges;
        let index = self.next_index;
        let to = ranges[index].to();
        let pos = self
            .active
            .partition_point(|&i| ranges[i].to().total_cmp(to).is_le());
        self.active.insert(pos, index);
        self.next_index += 1;
    }

    /// Retires the active sub-ranges ending at `end` and moves the cursor past it.
    fn retire(&mut self, end: &BoundaryTo<T>) {
        let ranges = self.ranges;
        let count = self
            .active
            .iter()
            .take_while(|&&i| ranges[i].to() == end)
            .count();
        self.active.drain(..count);
        self.cursor = if self.active.is_empty() {
            None
        } else {
            end.complement().ok()
        };
    }

    /// Builds the item for `cursor..to` from the active set, if that region is
    /// not empty.
    fn region(&self, to: BoundaryTo<T>) -> Option<RangeIntersection<T, K>> {
        let from = self.cursor.clone()?;
        let range = Range::try_new(from, to);
        if range.is_empty() {
            return None;
        }
        let ranges = self
            .active
            .iter()
            .copied()
            .sorted_unstable()
            .map(|i| self.ranges[i].clone())
            .collect();
        Some(RangeIntersection::new(range, ranges))
    }
}

impl<T: Ord + Clone, K: Clone> Iterator for RangeIntersections<'_, T, K> {
    type Item = RangeIntersection<T, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let ranges = self.ranges;
        loop {
            let start = ranges.get(self.next_index).map(|r| r.from());
            let end = self.active.first().map(|&i| ranges[i].to());
            match (start, end) {
                (None, None) => return None,
                (Some(start), None) => {
                    self.cursor = Some(start.clone());
                    self.activate_next();
                }
                (Some(start), Some(end)) if boundary::spans(start, end) => {
                    // The next sub-range starts inside the active span: close
                    // the region before it.
                    let item = match &self.cursor {
                        Some(cursor) if cursor != start => start
                            .complement()
                            .ok()
                            .and_then(|to| self.region(to)),
                        _ => None,
                    };
                    self.cursor = Some(start.clone());
                    self.activate_next();
                    if item.is_some() {
                        return item;
                    }
                }
                (_, Some(end)) => {
                    let item = self.region(end.clone());
                    self.retire(end);
                    if item.is_some() {
                        return item;
                    }
                }
            }
        }
    }
}

impl<T: Ord + Clone, K: Clone> CompositeRange<T, K> {
    /// Enumerates the maximal regions covered by at least one sub-range, each
    /// with the exact set of sub-ranges covering it.
    ///
    /// For sub-ranges `[1..5]` and `[3..8]` this yields `[1..3)` (first only),
    /// `[3..5]` (both) and `(5..8]` (second only). Values covered by no
    /// sub-range fall in no yielded region.
    pub fn get_intersections(&self) -> RangeIntersections<'_, T, K> {
        RangeIntersections::new(self.sub_ranges())
    }

    /// Returns the sub-ranges containing `value`, labelled with the point
    /// range `[value..value]`.
    pub fn get_intersection(&self, value: &T) -> RangeIntersection<T, K> {
        let point = Range::new_unchecked(
            BoundaryFrom::Inclusive(value.clone()),
            BoundaryTo::Inclusive(value.clone()),
            NoKey,
        );
        if !self.containing_range().contains(value) {
            return RangeIntersection::new(point, Vec::new());
        }
        let ranges = self
            .sub_ranges()
            .iter()
            .take_while(|r| !r.starts_after(value))
            .filter(|r| r.contains(value))
            .cloned()
            .collect();
        RangeIntersection::new(point, ranges)
    }

    /// Returns the sub-ranges sharing a value with `range`, labelled with
    /// `range` itself.
    pub fn get_intersection_range<K2: Clone>(
        &self,
        range: &Range<T, K2>,
    ) -> RangeIntersection<T, K> {
        let label = range.clone().without_key();
        if !self.containing_range().has_intersection(range) {
            return RangeIntersection::new(label, Vec::new());
        }
        let ranges = self
            .sub_ranges()
            .iter()
            .take_while(|r| !r.starts_after_range(range))
            .filter(|r| r.has_intersection(range))
            .cloned()
            .collect();
        RangeIntersection::new(label, ranges)
    }
}
