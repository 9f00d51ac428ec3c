//! The ring-position capability.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::ring::RowPosition;
use crate::token::Token;

/// A point on the cyclic key space.
///
/// Ordering is total and linear; it never wraps. Bounds code is generic over
/// this trait, so both position kinds must keep the same sentinel contract:
/// [`is_minimum`](Self::is_minimum) is true exactly for the ring origin, and
/// the origin on the right edge of a bounds means "no upper bound".
///
/// # Concurrency Model
///
/// Positions are plain values: `Clone` to hand copies around, `Send + Sync`
/// so planners on any thread can share them.
pub trait RingPosition: Clone + Ord + Hash + Send + Sync + Debug + Display + 'static {
    /// The ring origin.
    ///
    /// # Invariant
    ///
    /// `Self::min_value().is_minimum()` must always be `true`.
    fn min_value() -> Self;

    /// The greatest position on the ring.
    fn max_value() -> Self;

    /// Checks if this is the ring origin.
    fn is_minimum(&self) -> bool;

    /// The next position in linear order, `None` past the top of the ring.
    fn successor(&self) -> Option<Self>;

    /// The token this position sits on.
    fn token(&self) -> Token;

    /// Row position to use when this position is the left edge of a bounds.
    ///
    /// An included left edge starts at the first row at or after the
    /// position, an excluded one at the first row strictly after it.
    fn lower_row_bound(&self, inclusive: bool) -> RowPosition;

    /// Row position to use when this position is the right edge of a bounds.
    fn upper_row_bound(&self, inclusive: bool) -> RowPosition;

    /// Evenly spaced positions strictly between `left` and `right` (the top
    /// of the ring when `right` is `None`), cutting the span into `parts`.
    fn interior_points(left: &Self, right: Option<&Self>, parts: usize) -> Vec<Self>;
}
