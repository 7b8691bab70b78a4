//! Range transformations. Every operation returns a new range carrying the key
//! of `self`.

use ordo_common::{Error, Result, result::verify_state};

use super::Range;
use crate::boundary::{BoundaryFrom, BoundaryTo};

impl<T: Ord + Clone, K: Clone> Range<T, K> {
    /// Returns the enclosing range `[min(from)..max(to)]`.
    ///
    /// This is not a set union: `[1..2]` and `[4..5]` produce `[1..5]`, which
    /// includes values found in neither input. Use
    /// [`CompositeRange`](crate::CompositeRange) to represent disjoint unions.
    /// The empty range is the identity.
    pub fn union<K2>(&self, other: &Range<T, K2>) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return Range::new_unchecked(other.from.clone(), other.to.clone(), self.key.clone());
        }
        let from = if other.from.total_cmp(&self.from).is_lt() {
            &other.from
        } else {
            &self.from
        };
        let to = if other.to.total_cmp(&self.to).is_gt() {
            &other.to
        } else {
            &self.to
        };
        Range::new_unchecked(from.clone(), to.clone(), self.key.clone())
    }

    /// Returns `[max(from)..min(to)]`, or the empty range if the ranges do not
    /// intersect.
    pub fn intersect<K2>(&self, other: &Range<T, K2>) -> Self {
        if !self.has_intersection(other) {
            return Range::empty_keyed(self.key.clone());
        }
        let from = if other.from.total_cmp(&self.from).is_gt() {
            &other.from
        } else {
            &self.from
        };
        let to = if other.to.total_cmp(&self.to).is_lt() {
            &other.to
        } else {
            &self.to
        };
        Range::new_unchecked(from.clone(), to.clone(), self.key.clone())
    }

    /// Moves the `from` boundary outwards if `from` lies before it.
    ///
    /// No-op for the empty range and for an empty `from`.
    pub fn extend_from(&self, from: BoundaryFrom<T>) -> Self {
        if self.is_empty() || from.is_empty() || from.total_cmp(&self.from).is_ge() {
            return self.clone();
        }
        Range::new_unchecked(from, self.to.clone(), self.key.clone())
    }

    /// Moves the `to` boundary outwards if `to` lies after it.
    ///
    /// No-op for the empty range and for an empty `to`.
    pub fn extend_to(&self, to: BoundaryTo<T>) -> Self {
        if self.is_empty() || to.is_empty() || to.total_cmp(&self.to).is_le() {
            return self.clone();
        }
        Range::new_unchecked(self.from.clone(), to, self.key.clone())
    }

    /// Moves the `from` boundary inwards if `from` lies after it. Returns the
    /// empty range if nothing is left.
    ///
    /// No-op for the empty range and for an empty `from`.
    pub fn trim_from(&self, from: BoundaryFrom<T>) -> Self {
        if self.is_empty() || from.is_empty() || from.total_cmp(&self.from).is_le() {
            return self.clone();
        }
        Range::try_new_keyed(from, self.to.clone(), self.key.clone())
    }

    /// Moves the `to` boundary inwards if `to` lies before it. Returns the
    /// empty range if nothing is left.
    ///
    /// No-op for the empty range and for an empty `to`.
    pub fn trim_to(&self, to: BoundaryTo<T>) -> Self {
        if self.is_empty() || to.is_empty() || to.total_cmp(&self.to).is_ge() {
            return self.clone();
        }
        Range::try_new_keyed(self.from.clone(), to, self.key.clone())
    }

    /// Projects `value` into the range.
    ///
    /// A value inside the range is returned unchanged and never fails, even
    /// when a boundary is exclusive. Fails with an invalid-state error if the
    /// range is empty, or if `value` lies beyond an exclusive boundary: there
    /// is no representable value at exactly that edge.
    pub fn clamp(&self, value: T) -> Result<T> {
        verify_state(!self.is_empty(), "cannot clamp to an empty range")?;
        if !self.from.admits(&value) {
            return match &self.from {
                BoundaryFrom::Inclusive(v) => Ok(v.clone()),
                _ => Err(Error::invalid_state(
                    "cannot clamp to an exclusive from boundary",
                )),
            };
        }
        if !self.to.admits(&value) {
            return match &self.to {
                BoundaryTo::Inclusive(v) => Ok(v.clone()),
                _ => Err(Error::invalid_state(
                    "cannot clamp to an exclusive to boundary",
                )),
            };
        }
        Ok(value)
    }

    /// Converts exclusive boundaries into inclusive ones.
    ///
    /// `from_fn` maps an exclusive `from` value to the first value after it and
    /// `to_fn` maps an exclusive `to` value to the last value before it (`v + 1`
    /// and `v - 1` for integers). Inclusive and infinite boundaries are kept.
    /// Returns the empty range if the conversion leaves nothing.
    pub fn make_inclusive<F, G>(&self, from_fn: F, to_fn: G) -> Self
    where
        F: FnOnce(T) -> T,
        G: FnOnce(T) -> T,
    {
        if self.is_empty() {
            return self.clone();
        }
        let from = match &self.from {
            BoundaryFrom::Exclusive(v) => BoundaryFrom::Inclusive(from_fn(v.clone())),
            other => other.clone(),
        };
        let to = match &self.to {
            BoundaryTo::Exclusive(v) => BoundaryTo::Inclusive(to_fn(v.clone())),
            other => other.clone(),
        };
        Range::try_new_keyed(from, to, self.key.clone())
    }

    /// Converts inclusive boundaries into exclusive ones.
    ///
    /// `from_fn` maps an inclusive `from` value to the last value before it and
    /// `to_fn` maps an inclusive `to` value to the first value after it (`v - 1`
    /// and `v + 1` for integers). Exclusive and infinite boundaries are kept.
    /// Returns the empty range if the conversion leaves nothing.
    pub fn make_exclusive<F, G>(&self, from_fn: F, to_fn: G) -> Self
    where
        F: FnOnce(T) -> T,
        G: FnOnce(T) -> T,
    {
        if self.is_empty() {
            return self.clone();
        }
        let from = match &self.from {
            BoundaryFrom::Inclusive(v) => BoundaryFrom::Exclusive(from_fn(v.clone())),
            other => other.clone(),
        };
        let to = match &self.to {
            BoundaryTo::Inclusive(v) => BoundaryTo::Exclusive(to_fn(v.clone())),
            other => other.clone(),
        };
        Range::try_new_keyed(from, to, self.key.clone())
    }
}
