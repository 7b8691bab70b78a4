//! Range keys.

use std::fmt;

/// Key of an unkeyed range.
///
/// `Range<T>` is `Range<T, NoKey>`: the keyed and unkeyed ranges share one
/// implementation, and the zero-sized key costs nothing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoKey;

/// Renders the key prefix of a range.
///
/// Keys that implement `Display` render as `'key':`; `NoKey` renders nothing.
pub trait RangeKey {
    fn fmt_key(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl RangeKey for NoKey {
    #[inline]
    fn fmt_key(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl<K: fmt::Display> RangeKey for K {
    fn fmt_key(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{self}':")
    }
}
