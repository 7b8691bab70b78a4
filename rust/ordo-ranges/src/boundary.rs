//! Range boundaries: the `From` and `To` edges of a range, their ordering and
//! complementation.
//!
//! A boundary is one of four kinds:
//!
//! - `Empty`: one side of the empty range. Carries no value and has no ordering
//!   relation to non-empty boundaries (`compare` returns `None`).
//! - `Infinite`: `-∞` for a `From` boundary, `+∞` for a `To` boundary.
//! - `Exclusive(v)`: the range does not include `v` but includes values strictly
//!   beyond it in the boundary's direction.
//! - `Inclusive(v)`: the range includes `v`.
//!
//! At equal values an inclusive `From` sorts before an exclusive one (`[v` admits
//! `v`, `(v` starts just after it), while an inclusive `To` sorts after an exclusive
//! one (`v]` admits `v`, `v)` stops just before it).

use std::{cmp::Ordering, fmt, ops::Bound};

use ordo_common::{Error, Result};

/// Kind of a range boundary, independent of the side it is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    Empty,
    Infinite,
    Exclusive,
    Inclusive,
}

/// The lower edge of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryFrom<T> {
    Empty,
    /// Negative infinity.
    Infinite,
    Exclusive(T),
    Inclusive(T),
}

/// The upper edge of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryTo<T> {
    Empty,
    /// Positive infinity.
    Infinite,
    Exclusive(T),
    Inclusive(T),
}

/// Accessors shared by both sides. The two boundary types differ only in
/// ordering, complementation and rendering.
macro_rules! impl_boundary_common {
    ($ty:ident, $side:literal) => {
        impl<T> $ty<T> {
            pub fn kind(&self) -> BoundaryKind {
                match self {
                    $ty::Empty => BoundaryKind::Empty,
                    $ty::Infinite => BoundaryKind::Infinite,
                    $ty::Exclusive(_) => BoundaryKind::Exclusive,
                    $ty::Inclusive(_) => BoundaryKind::Inclusive,
                }
            }

            #[inline]
            pub fn is_empty(&self) -> bool {
                matches!(self, $ty::Empty)
            }

            #[inline]
            pub fn is_infinite(&self) -> bool {
                matches!(self, $ty::Infinite)
            }

            #[inline]
            pub fn is_inclusive(&self) -> bool {
                matches!(self, $ty::Inclusive(_))
            }

            #[inline]
            pub fn is_exclusive(&self) -> bool {
                matches!(self, $ty::Exclusive(_))
            }

            /// Returns `true` for inclusive and exclusive boundaries.
            #[inline]
            pub fn has_value(&self) -> bool {
                self.value_opt().is_some()
            }

            /// Returns the boundary value.
            ///
            /// Fails with an invalid-operation error for `Empty` and `Infinite`
            /// boundaries, which carry no value.
            pub fn value(&self) -> Result<&T> {
                match self {
                    $ty::Exclusive(v) | $ty::Inclusive(v) => Ok(v),
                    $ty::Empty => Err(Error::invalid_operation(concat!(
                        "value of an empty ",
                        $side,
                        " boundary"
                    ))),
                    $ty::Infinite => Err(Error::invalid_operation(concat!(
                        "value of an infinite ",
                        $side,
                        " boundary"
                    ))),
                }
            }

            #[inline]
            pub fn value_opt(&self) -> Option<&T> {
                match self {
                    $ty::Exclusive(v) | $ty::Inclusive(v) => Some(v),
                    $ty::Empty | $ty::Infinite => None,
                }
            }

            pub fn into_value(self) -> Option<T> {
                match self {
                    $ty::Exclusive(v) | $ty::Inclusive(v) => Some(v),
                    $ty::Empty | $ty::Infinite => None,
                }
            }

            /// Transforms the boundary value, keeping the boundary kind.
            /// `Empty` and `Infinite` boundaries are returned unchanged.
            pub fn map<U, F>(self, f: F) -> $ty<U>
            where
                F: FnOnce(T) -> U,
            {
                match self {
                    $ty::Empty => $ty::Empty,
                    $ty::Infinite => $ty::Infinite,
                    $ty::Exclusive(v) => $ty::Exclusive(f(v)),
                    $ty::Inclusive(v) => $ty::Inclusive(f(v)),
                }
            }
        }

        impl<T> From<Bound<T>> for $ty<T> {
            fn from(bound: Bound<T>) -> Self {
                match bound {
                    Bound::Unbounded => $ty::Infinite,
                    Bound::Excluded(v) => $ty::Exclusive(v),
                    Bound::Included(v) => $ty::Inclusive(v),
                }
            }
        }

        impl<T: Ord> $ty<T> {
            /// Orders two boundaries of the same side.
            ///
            /// Returns `None` only when exactly one of them is `Empty`: the
            /// empty boundary is comparable to itself and to nothing else.
            pub fn compare(&self, other: &Self) -> Option<Ordering> {
                if self.is_empty() != other.is_empty() {
                    None
                } else {
                    Some(self.total_cmp(other))
                }
            }
        }

        impl<T: Ord> PartialOrd for $ty<T> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                self.compare(other)
            }
        }
    };
}

impl_boundary_common!(BoundaryFrom, "from");
impl_boundary_common!(BoundaryTo, "to");

impl<T: Ord> BoundaryFrom<T> {
    /// Total order over `From` boundaries used for sorting.
    ///
    /// `Empty` sorts first; callers that need the partial order of the boundary
    /// model should use `compare`.
    pub(crate) fn total_cmp(&self, other: &Self) -> Ordering {
        use BoundaryFrom::*;
        match (self, other) {
            (Empty, Empty) | (Infinite, Infinite) => Ordering::Equal,
            (Empty, _) => Ordering::Less,
            (_, Empty) => Ordering::Greater,
            (Infinite, _) => Ordering::Less,
            (_, Infinite) => Ordering::Greater,
            (Inclusive(a), Inclusive(b)) | (Exclusive(a), Exclusive(b)) => a.cmp(b),
            (Inclusive(a), Exclusive(b)) => a.cmp(b).then(Ordering::Less),
            (Exclusive(a), Inclusive(b)) => a.cmp(b).then(Ordering::Greater),
        }
    }

    /// Returns `true` if a range starting at this boundary includes `value`
    /// as far as the lower edge is concerned.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            BoundaryFrom::Empty => false,
            BoundaryFrom::Infinite => true,
            BoundaryFrom::Exclusive(v) => v < value,
            BoundaryFrom::Inclusive(v) => v <= value,
        }
    }

    /// Returns `true` if this boundary starts strictly after `value`.
    pub fn is_after(&self, value: &T) -> bool {
        self.has_value() && !self.admits(value)
    }
}

impl<T: Ord> BoundaryTo<T> {
    /// Total order over `To` boundaries used for sorting.
    ///
    /// `Empty` sorts first, `Infinite` (`+∞`) last.
    pub(crate) fn total_cmp(&self, other: &Self) -> Ordering {
        use BoundaryTo::*;
        match (self, other) {
            (Empty, Empty) | (Infinite, Infinite) => Ordering::Equal,
            (Empty, _) => Ordering::Less,
            (_, Empty) => Ordering::Greater,
            (Infinite, _) => Ordering::Greater,
            (_, Infinite) => Ordering::Less,
            (Inclusive(a), Inclusive(b)) | (Exclusive(a), Exclusive(b)) => a.cmp(b),
            (Inclusive(a), Exclusive(b)) => a.cmp(b).then(Ordering::Greater),
            (Exclusive(a), Inclusive(b)) => a.cmp(b).then(Ordering::Less),
        }
    }

    /// Returns `true` if a range ending at this boundary includes `value`
    /// as far as the upper edge is concerned.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            BoundaryTo::Empty => false,
            BoundaryTo::Infinite => true,
            BoundaryTo::Exclusive(v) => value < v,
            BoundaryTo::Inclusive(v) => value <= v,
        }
    }

    /// Returns `true` if this boundary ends strictly before `value`.
    pub fn is_before(&self, value: &T) -> bool {
        self.has_value() && !self.admits(value)
    }
}

impl<T: Clone> BoundaryFrom<T> {
    /// Returns the `To` boundary of everything strictly before this boundary:
    /// `[v` becomes `v)` and `(v` becomes `v]`.
    ///
    /// `Empty` and `Infinite` boundaries have no complementation.
    pub fn complement(&self) -> Result<BoundaryTo<T>> {
        match self {
            BoundaryFrom::Inclusive(v) => Ok(BoundaryTo::Exclusive(v.clone())),
            BoundaryFrom::Exclusive(v) => Ok(BoundaryTo::Inclusive(v.clone())),
            BoundaryFrom::Empty => Err(Error::invalid_complementation("empty from")),
            BoundaryFrom::Infinite => Err(Error::invalid_complementation("infinite from")),
        }
    }
}

impl<T: Clone> BoundaryTo<T> {
    /// Returns the `From` boundary of everything strictly after this boundary:
    /// `v]` becomes `(v` and `v)` becomes `[v`.
    ///
    /// `Empty` and `Infinite` boundaries have no complementation.
    pub fn complement(&self) -> Result<BoundaryFrom<T>> {
        match self {
            BoundaryTo::Inclusive(v) => Ok(BoundaryFrom::Exclusive(v.clone())),
            BoundaryTo::Exclusive(v) => Ok(BoundaryFrom::Inclusive(v.clone())),
            BoundaryTo::Empty => Err(Error::invalid_complementation("empty to")),
            BoundaryTo::Infinite => Err(Error::invalid_complementation("infinite to")),
        }
    }
}

/// Returns `true` if `from..to` is a valid non-empty span: `from <= to` under the
/// mixed ordering of the boundary model. Equal values are only valid when both
/// sides are inclusive.
pub(crate) fn spans<T: Ord>(from: &BoundaryFrom<T>, to: &BoundaryTo<T>) -> bool {
    if from.is_empty() || to.is_empty() {
        return false;
    }
    match (from.value_opt(), to.value_opt()) {
        (Some(a), Some(b)) => match a.cmp(b) {
            Ordering::Less => true,
            Ordering::Equal => from.is_inclusive() && to.is_inclusive(),
            Ordering::Greater => false,
        },
        _ => true,
    }
}

/// Returns `true` if a range ending at `to` and a range starting at `from` leave
/// no gap between them, i.e. `from <= complement(to)`.
///
/// `1]` adjoins `(1` and `[1`; `1)` adjoins `[1` but not `(1`.
pub(crate) fn adjoins<T: Ord>(to: &BoundaryTo<T>, from: &BoundaryFrom<T>) -> bool {
    if from.is_empty() || to.is_empty() {
        return false;
    }
    match (to.value_opt(), from.value_opt()) {
        (Some(a), Some(b)) => match a.cmp(b) {
            Ordering::Greater => true,
            Ordering::Equal => !(to.is_exclusive() && from.is_exclusive()),
            Ordering::Less => false,
        },
        _ => true,
    }
}

impl<T: fmt::Display> fmt::Display for BoundaryFrom<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryFrom::Empty => f.write_str("∅"),
            BoundaryFrom::Infinite => f.write_str("(-∞"),
            BoundaryFrom::Exclusive(v) => {
                f.write_str("(")?;
                v.fmt(f)
            }
            BoundaryFrom::Inclusive(v) => {
                f.write_str("[")?;
                v.fmt(f)
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for BoundaryTo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryTo::Empty => f.write_str("∅"),
            BoundaryTo::Infinite => f.write_str("+∞)"),
            BoundaryTo::Exclusive(v) => {
                v.fmt(f)?;
                f.write_str(")")
            }
            BoundaryTo::Inclusive(v) => {
                v.fmt(f)?;
                f.write_str("]")
            }
        }
    }
}
