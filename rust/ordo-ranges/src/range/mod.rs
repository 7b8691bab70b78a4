//! The `Range` value type: an immutable pair of `From`/`To` boundaries with an
//! optional key.

use std::fmt;

use ordo_common::{Result, result::verify_arg};

use crate::boundary::{self, BoundaryFrom, BoundaryTo};

pub mod key;
mod ops;

pub use key::{NoKey, RangeKey};

/// An immutable range over an ordered domain.
///
/// A range is either the empty range (both boundaries `Empty`) or a pair of
/// non-empty boundaries with `from <= to`. Values outside `[from, to]` are not
/// contained; exclusive boundaries exclude their own value.
///
/// The key is carried along by every operation that produces a range from this
/// one. Unkeyed ranges use [`NoKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<T, K = NoKey> {
    from: BoundaryFrom<T>,
    to: BoundaryTo<T>,
    key: K,
}

impl<T> Range<T> {
    /// The empty range `∅`.
    pub const fn empty() -> Self {
        Range {
            from: BoundaryFrom::Empty,
            to: BoundaryTo::Empty,
            key: NoKey,
        }
    }

    /// The range covering the whole domain, `(-∞..+∞)`.
    pub const fn infinite() -> Self {
        Range {
            from: BoundaryFrom::Infinite,
            to: BoundaryTo::Infinite,
            key: NoKey,
        }
    }
}

impl<T: Ord> Range<T> {
    /// Creates a range, failing with an invalid-argument error if the boundaries
    /// do not form a valid range.
    pub fn new(from: BoundaryFrom<T>, to: BoundaryTo<T>) -> Result<Self> {
        Self::new_keyed(from, to, NoKey)
    }

    /// Creates a range, returning [`Range::empty`] if the boundaries do not form
    /// a valid range.
    pub fn try_new(from: BoundaryFrom<T>, to: BoundaryTo<T>) -> Self {
        Self::try_new_keyed(from, to, NoKey)
    }
}

impl<T, K> Range<T, K> {
    /// The empty range carrying `key`.
    pub const fn empty_keyed(key: K) -> Self {
        Range {
            from: BoundaryFrom::Empty,
            to: BoundaryTo::Empty,
            key,
        }
    }

    /// Builds a range from boundaries the caller has already validated.
    #[inline]
    pub(crate) fn new_unchecked(from: BoundaryFrom<T>, to: BoundaryTo<T>, key: K) -> Self {
        Range { from, to, key }
    }

    #[inline]
    pub fn from(&self) -> &BoundaryFrom<T> {
        &self.from
    }

    #[inline]
    pub fn to(&self) -> &BoundaryTo<T> {
        &self.to
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn into_parts(self) -> (BoundaryFrom<T>, BoundaryTo<T>, K) {
        (self.from, self.to, self.key)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.from.is_empty()
    }

    /// Returns `true` if both boundaries are infinite.
    pub fn is_infinite(&self) -> bool {
        self.from.is_infinite() && self.to.is_infinite()
    }

    /// Replaces the key, keeping the boundaries.
    pub fn with_key<K2>(self, key: K2) -> Range<T, K2> {
        Range {
            from: self.from,
            to: self.to,
            key,
        }
    }

    pub fn without_key(self) -> Range<T> {
        self.with_key(NoKey)
    }
}

impl<T: Ord, K> Range<T, K> {
    /// Creates a keyed range, failing with an invalid-argument error naming the
    /// offending boundary if the boundaries do not form a valid range.
    pub fn new_keyed(from: BoundaryFrom<T>, to: BoundaryTo<T>, key: K) -> Result<Self> {
        verify_arg(
            !from.is_empty() || to.is_empty(),
            "from",
            "from boundary is empty but to boundary is not",
        )?;
        verify_arg(
            !to.is_empty() || from.is_empty(),
            "to",
            "to boundary is empty but from boundary is not",
        )?;
        verify_arg(
            from.is_empty() || boundary::spans(&from, &to),
            "to",
            "to boundary is less than from boundary",
        )?;
        Ok(Range { from, to, key })
    }

    /// Creates a keyed range, returning the empty range with `key` if the
    /// boundaries do not form a valid range. Never fails.
    pub fn try_new_keyed(from: BoundaryFrom<T>, to: BoundaryTo<T>, key: K) -> Self {
        if boundary::spans(&from, &to) {
            Range { from, to, key }
        } else {
            Self::empty_keyed(key)
        }
    }

    /// Returns `true` if the range holds exactly one value, `[v..v]`.
    pub fn is_single_point(&self) -> bool {
        match (&self.from, &self.to) {
            (BoundaryFrom::Inclusive(a), BoundaryTo::Inclusive(b)) => a == b,
            _ => false,
        }
    }

    /// Returns `true` if `value` lies within the range. The empty range
    /// contains nothing.
    pub fn contains(&self, value: &T) -> bool {
        self.from.admits(value) && self.to.admits(value)
    }

    /// Returns `true` if every value of `other` lies within this range.
    ///
    /// The empty range is contained in every range, including itself.
    pub fn contains_range<K2>(&self, other: &Range<T, K2>) -> bool {
        if other.is_empty() {
            return true;
        }
        !self.is_empty()
            && self.from.total_cmp(&other.from).is_le()
            && other.to.total_cmp(&self.to).is_le()
    }

    /// Returns `true` if the ranges share at least one value. The empty range
    /// intersects nothing.
    pub fn has_intersection<K2>(&self, other: &Range<T, K2>) -> bool {
        boundary::spans(&self.from, &other.to) && boundary::spans(&other.from, &self.to)
    }

    /// Returns `true` if the range starts strictly after `value`.
    pub fn starts_after(&self, value: &T) -> bool {
        self.from.is_after(value)
    }

    /// Returns `true` if the range starts strictly after the `from` boundary.
    pub fn starts_after_boundary(&self, from: &BoundaryFrom<T>) -> bool {
        !self.is_empty() && !from.is_empty() && self.from.total_cmp(from).is_gt()
    }

    /// Returns `true` if the range starts strictly after `other` ends.
    pub fn starts_after_range<K2>(&self, other: &Range<T, K2>) -> bool {
        !self.is_empty() && !other.is_empty() && !boundary::spans(&self.from, &other.to)
    }

    /// Returns `true` if the range ends strictly before `value`.
    pub fn ends_before(&self, value: &T) -> bool {
        self.to.is_before(value)
    }

    /// Returns `true` if the range ends strictly before the `to` boundary.
    pub fn ends_before_boundary(&self, to: &BoundaryTo<T>) -> bool {
        !self.is_empty() && !to.is_empty() && self.to.total_cmp(to).is_lt()
    }

    /// Returns `true` if the range ends strictly before `other` starts.
    pub fn ends_before_range<K2>(&self, other: &Range<T, K2>) -> bool {
        !self.is_empty() && !other.is_empty() && !boundary::spans(&other.from, &self.to)
    }
}

impl<T: Ord> From<std::ops::Range<T>> for Range<T> {
    /// Converts a half-open `start..end` into `[start..end)`. A reversed or
    /// empty std range converts into the empty range.
    fn from(r: std::ops::Range<T>) -> Self {
        Range::try_new(BoundaryFrom::Inclusive(r.start), BoundaryTo::Exclusive(r.end))
    }
}

impl<T: Ord> From<std::ops::RangeInclusive<T>> for Range<T> {
    fn from(r: std::ops::RangeInclusive<T>) -> Self {
        let (start, end) = r.into_inner();
        Range::try_new(BoundaryFrom::Inclusive(start), BoundaryTo::Inclusive(end))
    }
}

impl<T: fmt::Display, K: RangeKey> fmt::Display for Range<T, K> {
    /// Renders `[1..5)`, `(-∞..+∞)`, `∅`, or `'key':[1..5]` for keyed ranges.
    /// Formatter flags apply to each boundary value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.key.fmt_key(f)?;
        if self.is_empty() {
            return f.write_str("∅");
        }
        fmt::Display::fmt(&self.from, f)?;
        f.write_str("..")?;
        fmt::Display::fmt(&self.to, f)
    }
}
