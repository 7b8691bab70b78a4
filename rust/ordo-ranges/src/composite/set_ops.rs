//! Set algebra over composite ranges.
//!
//! Every operation accepts composites in any form and returns a merged one.
//! Unmerged inputs are merged first; merged inputs are used as is.

use itertools::Itertools;

use super::{
    CompositeRange,
    merge::{self, MergedRanges, NonEmptyRanges},
};
use crate::{
    boundary::{self, BoundaryFrom, BoundaryTo},
    range::{NoKey, Range},
};

impl<T: Ord + Clone> CompositeRange<T> {
    /// The set of values lying in `self` or in `other`.
    pub fn union(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.to_merged();
        }
        if self.is_empty() {
            return other.to_merged();
        }

        if self.is_merged() && other.is_merged() {
            // A gap between the containing ranges: concatenation is canonical.
            if !boundary::adjoins(self.containing_range.to(), other.containing_range.from()) {
                return Self::concat_merged(self, other);
            }
            if !boundary::adjoins(other.containing_range.to(), self.containing_range.from()) {
                return Self::concat_merged(other, self);
            }
        }

        let ranges = self
            .sub_ranges
            .iter()
            .chain(other.sub_ranges.iter())
            .cloned()
            .collect();
        let sorted = NonEmptyRanges::assume_non_empty(ranges).sort();
        Self::from_merged(merge::merge_sorted(sorted.as_slice()))
    }

    fn concat_merged(first: &Self, second: &Self) -> Self {
        log::trace!(
            "union: concatenating {} and {} sub-ranges",
            first.len(),
            second.len()
        );
        let ranges = first
            .sub_ranges
            .iter()
            .chain(second.sub_ranges.iter())
            .cloned()
            .collect();
        Self::from_merged(MergedRanges::assume_merged(ranges))
    }

    /// The set of values lying in both `self` and `other`.
    pub fn intersect(&self, other: &Self) -> Self {
        if self.is_empty()
            || other.is_empty()
            || !self.containing_range.has_intersection(&other.containing_range)
        {
            return Self::empty();
        }

        let a = self.to_merged();
        let b = other.to_merged();
        let others = b.sub_ranges();
        let mut result = Vec::with_capacity(a.len() + b.len());
        let mut first = 0;
        for range in a.sub_ranges() {
            while first < others.len() && others[first].ends_before_range(range) {
                first += 1;
            }
            for other in &others[first..] {
                if other.starts_after_range(range) {
                    break;
                }
                let intersection = range.intersect(other);
                if !intersection.is_empty() {
                    result.push(intersection);
                }
            }
        }
        Self::from_merged(MergedRanges::assume_merged(result))
    }

    /// The set of values lying in `self` but not in `other`.
    pub fn except(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.to_merged();
        }
        self.intersect(&other.complement())
    }

    /// The set of values of the domain not lying in `self`.
    ///
    /// The complement of the empty composite is the whole domain and vice
    /// versa.
    pub fn complement(&self) -> Self {
        if self.is_empty() {
            return Self::infinite();
        }

        let merged = self.to_merged();
        let ranges = merged.sub_ranges();
        let mut result = Vec::with_capacity(ranges.len() + 1);

        if let Some(first) = ranges.first()
            && let Ok(to) = first.from().complement()
        {
            result.push(Range::new_unchecked(BoundaryFrom::Infinite, to, NoKey));
        }
        for (prev, next) in ranges.iter().tuple_windows() {
            // Neighbours in merged form leave a non-empty gap with finite ends.
            if let (Ok(from), Ok(to)) = (prev.to().complement(), next.from().complement()) {
                result.push(Range::new_unchecked(from, to, NoKey));
            }
        }
        if let Some(last) = ranges.last()
            && let Ok(from) = last.to().complement()
        {
            result.push(Range::new_unchecked(from, BoundaryTo::Infinite, NoKey));
        }

        Self::from_merged(MergedRanges::assume_merged(result))
    }

    /// Returns `true` if every value of `other` lies within `self`.
    pub fn contains_composite(&self, other: &Self) -> bool {
        other.except(self).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{
        create, create_exclusive, create_exclusive_from, create_exclusive_to, try_create,
    };

    fn composite(ranges: &[(i32, i32)]) -> CompositeRange<i32> {
        ranges.iter().map(|&(a, b)| try_create(a, b)).collect()
    }

    fn strings(c: &CompositeRange<i32>) -> Vec<String> {
        c.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn test_merge_scenario() {
        let c = composite(&[(1, 3), (2, 5), (10, 12)]);
        assert!(!c.is_merged());
        let merged = c.merge();
        assert!(merged.is_merged());
        assert_eq!(strings(&merged), vec!["[1..5]", "[10..12]"]);
        assert_eq!(merged.containing_range(), &create(1, 12).unwrap());
        assert_eq!(merged.to_string(), "[1..12]: { [1..5]; [10..12] }");
    }

    #[test]
    fn test_complement() {
        let c = composite(&[(1, 5), (10, 12)]);
        let complement = c.complement();
        assert_eq!(strings(&complement), vec!["(-∞..1)", "(5..10)", "(12..+∞)"]);
        assert_eq!(complement.complement(), c.merge());

        assert_eq!(CompositeRange::<i32>::empty().complement(), CompositeRange::infinite());
        assert!(CompositeRange::<i32>::infinite().complement().is_empty());

        let half = CompositeRange::from(Range::try_new(
            BoundaryFrom::Infinite,
            BoundaryTo::Exclusive(0),
        ));
        assert_eq!(strings(&half.complement()), vec!["[0..+∞)"]);
    }

    #[test]
    fn test_complement_of_unmerged() {
        let c = composite(&[(1, 3), (2, 5)]);
        assert_eq!(strings(&c.complement()), vec!["(-∞..1)", "(5..+∞)"]);
    }

    #[test]
    fn test_union() {
        let a = composite(&[(1, 3), (8, 9)]);
        let b = composite(&[(2, 5), (20, 21)]);
        let u = a.union(&b);
        assert!(u.is_merged());
        assert_eq!(strings(&u), vec!["[1..5]", "[8..9]", "[20..21]"]);
        assert_eq!(u, b.union(&a));

        assert_eq!(a.union(&CompositeRange::empty()), a.merge());
        assert_eq!(CompositeRange::empty().union(&a), a.merge());
    }

    #[test]
    fn test_union_concatenation_path() {
        let a = composite(&[(1, 2), (4, 5)]).merge();
        let b = composite(&[(7, 8), (10, 11)]).merge();
        assert_eq!(
            strings(&b.union(&a)),
            vec!["[1..2]", "[4..5]", "[7..8]", "[10..11]"]
        );

        // Touching containing ranges must go through the merge.
        let a = CompositeRange::from(create_exclusive_to(1, 5).unwrap());
        let b = CompositeRange::from(create(5, 8).unwrap());
        assert_eq!(strings(&a.union(&b)), vec!["[1..8]"]);
        assert_eq!(strings(&b.union(&a)), vec!["[1..8]"]);
    }

    #[test]
    fn test_intersect() {
        let a = composite(&[(1, 5), (10, 12)]);
        let b = composite(&[(3, 11)]);
        let i = a.intersect(&b);
        assert!(i.is_merged());
        assert_eq!(strings(&i), vec!["[3..5]", "[10..11]"]);
        assert_eq!(i, b.intersect(&a));

        let open = CompositeRange::from(create_exclusive(5, 10).unwrap());
        assert!(composite(&[(1, 5), (10, 12)]).intersect(&open).is_empty());
        assert!(a.intersect(&CompositeRange::empty()).is_empty());
        assert_eq!(a.intersect(&CompositeRange::infinite()), a.merge());
    }

    #[test]
    fn test_intersect_single_points() {
        let a = composite(&[(1, 5)]);
        let b = composite(&[(5, 8), (0, 1)]);
        assert_eq!(strings(&a.intersect(&b)), vec!["[1..1]", "[5..5]"]);
    }

    #[test]
    fn test_except() {
        let a = composite(&[(1, 10)]);
        let b = composite(&[(3, 4), (8, 20)]);
        let d = a.except(&b);
        assert_eq!(strings(&d), vec!["[1..3)", "(4..8)"]);
        assert!(a.except(&a).is_empty());
        assert_eq!(a.except(&CompositeRange::empty()), a);
        assert!(CompositeRange::empty().except(&a).is_empty());

        let with_hole = a.except(&CompositeRange::from(create_exclusive_from(4, 5).unwrap()));
        assert_eq!(strings(&with_hole), vec!["[1..4]", "(5..10]"]);
    }

    #[test]
    fn test_contains_composite() {
        let a = composite(&[(1, 10), (20, 30)]);
        assert!(a.contains_composite(&composite(&[(2, 3), (25, 30)])));
        assert!(a.contains_composite(&CompositeRange::empty()));
        assert!(!a.contains_composite(&composite(&[(2, 3), (15, 16)])));
        assert!(!a.contains_composite(&composite(&[(5, 25)])));
        assert!(CompositeRange::infinite().contains_composite(&a));
    }
}
