//! Factory functions for boundaries and ranges.
//!
//! The `create*` family validates its input and fails with an invalid-argument
//! error; use it where a bad range is a programming error. The `try_create*`
//! family never fails and returns the empty range instead; use it for computed
//! or untrusted boundaries.

use ordo_common::Result;

use crate::{
    boundary::{BoundaryFrom, BoundaryTo},
    range::Range,
};

/// Inclusive `From` boundary, `[value`.
pub fn boundary_from<T>(value: T) -> BoundaryFrom<T> {
    BoundaryFrom::Inclusive(value)
}

/// Exclusive `From` boundary, `(value`.
pub fn boundary_from_exclusive<T>(value: T) -> BoundaryFrom<T> {
    BoundaryFrom::Exclusive(value)
}

/// The `-∞` boundary.
pub fn boundary_from_infinity<T>() -> BoundaryFrom<T> {
    BoundaryFrom::Infinite
}

/// Inclusive `To` boundary, `value]`.
pub fn boundary_to<T>(value: T) -> BoundaryTo<T> {
    BoundaryTo::Inclusive(value)
}

/// Exclusive `To` boundary, `value)`.
pub fn boundary_to_exclusive<T>(value: T) -> BoundaryTo<T> {
    BoundaryTo::Exclusive(value)
}

/// The `+∞` boundary.
pub fn boundary_to_infinity<T>() -> BoundaryTo<T> {
    BoundaryTo::Infinite
}

/// `[from..to]`
pub fn create<T: Ord>(from: T, to: T) -> Result<Range<T>> {
    Range::new(boundary_from(from), boundary_to(to))
}

/// `(from..to)`
pub fn create_exclusive<T: Ord>(from: T, to: T) -> Result<Range<T>> {
    Range::new(boundary_from_exclusive(from), boundary_to_exclusive(to))
}

/// `(from..to]`
pub fn create_exclusive_from<T: Ord>(from: T, to: T) -> Result<Range<T>> {
    Range::new(boundary_from_exclusive(from), boundary_to(to))
}

/// `[from..to)`
pub fn create_exclusive_to<T: Ord>(from: T, to: T) -> Result<Range<T>> {
    Range::new(boundary_from(from), boundary_to_exclusive(to))
}

/// `[from..to]` carrying `key`.
pub fn create_keyed<T: Ord, K>(from: T, to: T, key: K) -> Result<Range<T, K>> {
    Range::new_keyed(boundary_from(from), boundary_to(to), key)
}

/// `[from..to]`, or `∅` if `to < from`.
pub fn try_create<T: Ord>(from: T, to: T) -> Range<T> {
    Range::try_new(boundary_from(from), boundary_to(to))
}

/// `(from..to)`, or `∅` if the range would be invalid.
pub fn try_create_exclusive<T: Ord>(from: T, to: T) -> Range<T> {
    Range::try_new(boundary_from_exclusive(from), boundary_to_exclusive(to))
}

/// `(from..to]`, or `∅` if the range would be invalid.
pub fn try_create_exclusive_from<T: Ord>(from: T, to: T) -> Range<T> {
    Range::try_new(boundary_from_exclusive(from), boundary_to(to))
}

/// `[from..to)`, or `∅` if the range would be invalid.
pub fn try_create_exclusive_to<T: Ord>(from: T, to: T) -> Range<T> {
    Range::try_new(boundary_from(from), boundary_to_exclusive(to))
}

/// `[from..to]` carrying `key`, or the empty range carrying `key`.
pub fn try_create_keyed<T: Ord, K>(from: T, to: T, key: K) -> Range<T, K> {
    Range::try_new_keyed(boundary_from(from), boundary_to(to), key)
}
