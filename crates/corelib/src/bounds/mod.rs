//! Bounds over the ring.
//!
//! One value type, [`AbstractBounds`], covers all four interval shapes; the
//! [`BoundsKind`] tag selects the endpoint inclusion from a fixed table. Only
//! a `Range` may wrap through the ring origin, so the wrap branches of
//! [`contains`](AbstractBounds::contains) and
//! [`unwrap`](AbstractBounds::unwrap) are the only variant-specific logic.
//!
//! ```text
//!  Range(10, 5] on a 0..16 ring
//!
//!  |=====]---------(==========|
//!  0     5         10        16
//! ```

pub mod convert;
pub mod kind;
pub mod wire;

pub use kind::BoundsKind;
pub use wire::WireBounds;

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ring::{RingPosition, RowPosition};
use crate::token::Token;

/// Bounds over token space.
pub type TokenBounds = AbstractBounds<Token>;

/// Bounds over row space.
pub type RowBounds = AbstractBounds<RowPosition>;

/// An immutable interval over the ring.
///
/// # Invariants
///
/// - `right` is `None` when the bounds has no upper edge. A minimum sentinel
///   passed as the right endpoint is stored as `None`, so "ring origin" and
///   "unbounded" never alias.
/// - For every variant except `Range`, `left < right` whenever `right` is
///   bounded. Construction fails otherwise.
/// - A `Range` with `right == None` runs through the top of the ring and
///   includes the origin itself.
///
/// Equality is structural: two bounds are equal only when variant, left and
/// right all match.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(
    try_from = "WireBounds<T>",
    into = "WireBounds<T>",
    bound(
        serialize = "T: RingPosition + Serialize",
        deserialize = "T: RingPosition + Deserialize<'de>"
    )
)]
pub struct AbstractBounds<T> {
    kind: BoundsKind,
    left: T,
    right: Option<T>,
}

impl<T: RingPosition> AbstractBounds<T> {
    /// Builds bounds of the given variant.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRange`] if the variant cannot wrap, `right` is not the
    /// minimum sentinel, and `left >= right`.
    pub fn new(kind: BoundsKind, left: T, right: T) -> Result<Self> {
        let right = upper_edge(right);
        if let Some(right) = &right {
            if !kind.may_wrap() && left >= *right {
                return Err(Error::invalid_range(kind, &left, right));
            }
        }
        Ok(Self { kind, left, right })
    }

    /// `(left, right]`. Any pair of positions is a valid range.
    pub fn range(left: T, right: T) -> Self {
        Self {
            kind: BoundsKind::Range,
            left,
            right: upper_edge(right),
        }
    }

    /// `[left, right]`.
    pub fn bounds(left: T, right: T) -> Result<Self> {
        Self::new(BoundsKind::Bounds, left, right)
    }

    /// `(left, right)`.
    pub fn excluding(left: T, right: T) -> Result<Self> {
        Self::new(BoundsKind::ExcludingBounds, left, right)
    }

    /// `[left, right)`.
    pub fn including_excluding(left: T, right: T) -> Result<Self> {
        Self::new(BoundsKind::IncludingExcludingBounds, left, right)
    }

    /// Bounds of the given variant with no upper edge.
    pub fn unbounded_above(kind: BoundsKind, left: T) -> Self {
        Self::from_parts(kind, left, None)
    }

    /// The entire ring, `(origin, origin]`.
    pub fn full_ring() -> Self {
        Self::range(T::min_value(), T::min_value())
    }

    /// Trusted constructor for pieces derived from already valid bounds.
    pub(crate) fn from_parts(kind: BoundsKind, left: T, right: Option<T>) -> Self {
        let right = right.and_then(upper_edge);
        debug_assert!(
            kind.may_wrap() || right.as_ref().map_or(true, |r| left < *r),
            "{kind} built with left {left} not before right"
        );
        Self { kind, left, right }
    }

    #[inline]
    pub fn kind(&self) -> BoundsKind {
        self.kind
    }

    #[inline]
    pub fn left(&self) -> &T {
        &self.left
    }

    /// The right endpoint, with the minimum sentinel standing in for "no
    /// upper edge".
    pub fn right(&self) -> T {
        self.right.clone().unwrap_or_else(T::min_value)
    }

    /// The right endpoint, or `None` when unbounded above.
    #[inline]
    pub fn upper(&self) -> Option<&T> {
        self.right.as_ref()
    }

    #[inline]
    pub fn is_unbounded_above(&self) -> bool {
        self.right.is_none()
    }

    #[inline]
    pub fn left_inclusive(&self) -> bool {
        self.kind.left_inclusive()
    }

    #[inline]
    pub fn right_inclusive(&self) -> bool {
        self.kind.right_inclusive()
    }

    /// True for a `Range` with `left >= right`, counting an unbounded right
    /// as the origin.
    pub fn is_wrap_around(&self) -> bool {
        self.kind.may_wrap()
            && match &self.right {
                None => true,
                Some(right) => self.left >= *right,
            }
    }

    /// True for a `Range` whose endpoints coincide.
    pub fn is_full_ring(&self) -> bool {
        self.kind.may_wrap()
            && match &self.right {
                None => self.left.is_minimum(),
                Some(right) => self.left == *right,
            }
    }

    /// True when no position lies inside. Only an `ExcludingBounds` whose
    /// right edge directly follows its left can be empty.
    pub fn is_empty(&self) -> bool {
        self.kind == BoundsKind::ExcludingBounds && self.left.successor() == self.right
    }

    /// Whether `position` lies inside the bounds.
    pub fn contains(&self, position: &T) -> bool {
        if self.kind.may_wrap() {
            match &self.right {
                // Through the top of the ring and onto the origin.
                None => return *position > self.left || position.is_minimum(),
                Some(right) if self.left >= *right => {
                    return self.left == *right || *position > self.left || *position <= *right;
                }
                Some(_) => {}
            }
        }
        self.left_admits(position) && self.right_admits(position)
    }

    fn left_admits(&self, position: &T) -> bool {
        if self.kind.left_inclusive() {
            *position >= self.left
        } else {
            *position > self.left
        }
    }

    fn right_admits(&self, position: &T) -> bool {
        match &self.right {
            None => true,
            Some(right) if self.kind.right_inclusive() => *position <= *right,
            Some(right) => *position < *right,
        }
    }

    /// Splits the bounds at `position`.
    ///
    /// Returns `Ok(None)` when `position` is an endpoint and there is nothing
    /// to split. Otherwise the left piece keeps this bounds' left inclusion
    /// and ends at `position` inclusive; the right piece starts just after
    /// `position` and keeps this bounds' right edge. The pieces are disjoint
    /// and together cover exactly this bounds.
    ///
    /// # Errors
    ///
    /// [`Error::PositionNotInRange`] if `position` is neither contained nor
    /// the left endpoint.
    pub fn split(&self, position: &T) -> Result<Option<(Self, Self)>> {
        if *position == self.left {
            return Ok(None);
        }
        if !self.contains(position) {
            return Err(Error::PositionNotInRange {
                position: position.to_string(),
                bounds: self.to_string(),
            });
        }
        if *position == self.right() {
            return Ok(None);
        }

        let lower = Self::from_parts(
            BoundsKind::from_inclusion(self.kind.left_inclusive(), true),
            self.left.clone(),
            Some(position.clone()),
        );
        let upper_kind = match self.right {
            // Only a range may carry the origin past the top of the ring.
            None if !self.kind.may_wrap() => BoundsKind::ExcludingBounds,
            _ => BoundsKind::from_inclusion(false, self.kind.right_inclusive()),
        };
        let upper = Self::from_parts(upper_kind, position.clone(), self.right.clone());
        Ok(Some((lower, upper)))
    }

    /// Decomposes the bounds into non-wrapping pieces.
    ///
    /// A wrapping `Range(l, r]` becomes `(l, origin]` and `(origin, r]`.
    /// Everything else, including the full ring and ranges already ending at
    /// the origin, comes back as a single piece equal to `self`.
    pub fn unwrap(&self) -> Vec<Self> {
        match &self.right {
            Some(right) if self.kind.may_wrap() && self.left > *right => vec![
                Self::from_parts(BoundsKind::Range, self.left.clone(), None),
                Self::from_parts(BoundsKind::Range, T::min_value(), Some(right.clone())),
            ],
            _ => vec![self.clone()],
        }
    }
}

/// The minimum sentinel on the right edge means "no upper edge".
fn upper_edge<T: RingPosition>(right: T) -> Option<T> {
    (!right.is_minimum()).then_some(right)
}

impl<T: RingPosition> PartialOrd for AbstractBounds<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered by left, then right (unbounded last), then variant.
impl<T: RingPosition> Ord for AbstractBounds<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.left
            .cmp(&other.left)
            .then_with(|| match (&self.right, &other.right) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
            .then_with(|| self.kind.cmp(&other.kind))
    }
}

impl<T: RingPosition> fmt::Display for AbstractBounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{},{}{}",
            self.kind.opening(),
            self.left,
            self.right(),
            self.kind.closing()
        )
    }
}
