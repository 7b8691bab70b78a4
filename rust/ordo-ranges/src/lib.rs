//! Interval algebra over arbitrary totally ordered domains.
//!
//! This crate models ranges whose ends may each be inclusive, exclusive or
//! infinite, and sets of such ranges. It offers:
//!
//! - **Boundaries**: typed `From`/`To` edges with a total order that respects
//!   inclusivity, and complementation (`[v` ↔ `v)`, `(v` ↔ `v]`)
//! - **Ranges**: immutable values with containment, intersection, enclosing
//!   union, extension, trimming and clamping, optionally carrying a key
//! - **Composite ranges**: sorted, cheaply cloneable collections of ranges with
//!   set algebra and enumeration of their overlap structure
//!
//! # Key Types
//!
//! - [`Range`] - A single range, `Range<T, K = NoKey>`
//! - [`CompositeRange`] - A (possibly disconnected) subset of the domain
//! - [`RangeIntersections`] - Lazy sweep over the overlapping regions of a composite
//!
//! Floating-point domains are supported through a totally ordered wrapper such
//! as `ordered_float::OrderedFloat`.

pub mod boundary;
pub mod composite;
pub mod factory;
pub mod range;

#[cfg(test)]
mod tests;

pub use boundary::{BoundaryFrom, BoundaryKind, BoundaryTo};
pub use composite::{CompositeRange, RangeIntersection, RangeIntersections};
pub use range::{NoKey, Range, RangeKey};
