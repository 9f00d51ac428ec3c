//! Operations over collections of bounds.
//!
//! - [`normalize`] reduces possibly overlapping, possibly wrapping bounds to
//!   the minimal equivalent covering set, so a scatter/gather planner never
//!   scans the same arc twice.
//! - [`split_for_parallelism`] cuts one bounds into independent sub-ranges
//!   for concurrent scans.
//!
//! Both are pure functions; any caching of their results belongs to the
//! caller.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::bounds::{AbstractBounds, BoundsKind};
use crate::error::Result;
use crate::ring::RingPosition;

/// One endpoint of a non-wrapping span.
#[derive(Clone, Debug)]
struct Edge<T> {
    at: T,
    inclusive: bool,
}

/// A non-wrapping stretch of the ring. `hi == None` runs to the top.
#[derive(Clone, Debug)]
struct Span<T> {
    lo: Edge<T>,
    hi: Option<Edge<T>>,
}

impl<T: RingPosition> Span<T> {
    fn of(piece: &AbstractBounds<T>) -> Self {
        Span {
            lo: Edge {
                at: piece.left().clone(),
                inclusive: piece.left_inclusive(),
            },
            hi: piece.upper().map(|right| Edge {
                at: right.clone(),
                inclusive: piece.right_inclusive(),
            }),
        }
    }

    /// Order of left edges: by position, an included edge starting first.
    fn cmp_lo(&self, other: &Self) -> Ordering {
        self.lo
            .at
            .cmp(&other.lo.at)
            .then_with(|| other.lo.inclusive.cmp(&self.lo.inclusive))
    }

    fn starts_at_origin(&self) -> bool {
        self.lo.at.is_minimum()
    }

    /// Runs off the top of the ring from an excluded left edge, the shape of
    /// a range that can carry the origin.
    fn is_open_top(&self) -> bool {
        self.hi.is_none() && !self.lo.inclusive
    }

    /// Whether `next`, starting no earlier than `self`, overlaps or abuts it
    /// with no uncovered point in between.
    fn touches(&self, next: &Self) -> bool {
        match &self.hi {
            None => true,
            Some(hi) => match hi.at.cmp(&next.lo.at) {
                Ordering::Greater => true,
                Ordering::Equal => hi.inclusive || next.lo.inclusive,
                Ordering::Less => false,
            },
        }
    }

    /// Extends `self` to also cover `next`, keeping the more permissive right edge.
    fn absorb(&mut self, next: Span<T>) {
        let extend = match (&self.hi, &next.hi) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(a), Some(b)) => match a.at.cmp(&b.at) {
                Ordering::Less => true,
                Ordering::Equal => b.inclusive && !a.inclusive,
                Ordering::Greater => false,
            },
        };
        if extend {
            self.hi = next.hi;
        }
    }

    fn into_bounds(self) -> AbstractBounds<T> {
        match self.hi {
            Some(hi) => AbstractBounds::from_parts(
                BoundsKind::from_inclusion(self.lo.inclusive, hi.inclusive),
                self.lo.at,
                Some(hi.at),
            ),
            None => {
                let kind = if self.lo.inclusive {
                    BoundsKind::Bounds
                } else {
                    BoundsKind::ExcludingBounds
                };
                AbstractBounds::unbounded_above(kind, self.lo.at)
            }
        }
    }
}

/// Where the ring origin ends up when a range through the top covered it.
enum Origin {
    Covered,
    OnTopRange,
    OwnPoint,
}

/// Reduces `ranges` to the minimal equivalent covering set, sorted in ring
/// order.
///
/// Empty inputs are dropped. Every other input is unwrapped, then pieces
/// whose arcs overlap or share an endpoint are merged. A shared boundary point stays covered if either side
/// included it. Each merged arc comes back as the variant matching its
/// endpoint inclusion, except that an arc running off the top of the ring
/// comes back as a `Range` through the origin when the inputs covered the
/// origin. Coverage of the whole ring is returned as
/// [`AbstractBounds::full_ring`].
pub fn normalize<T, I>(ranges: I) -> Vec<AbstractBounds<T>>
where
    T: RingPosition,
    I: IntoIterator<Item = AbstractBounds<T>>,
{
    let ranges: Vec<AbstractBounds<T>> = ranges.into_iter().collect();
    if ranges.is_empty() {
        return Vec::new();
    }
    if ranges.iter().any(AbstractBounds::is_full_ring) {
        debug!(inputs = ranges.len(), "normalized to the full ring");
        return vec![AbstractBounds::full_ring()];
    }

    // A range running off the top of the ring also holds the origin, which
    // sits at the other end of the linear order.
    let mut holds_origin = false;
    let mut spans = Vec::with_capacity(ranges.len() * 2);
    for range in ranges.iter().filter(|range| !range.is_empty()) {
        for piece in range.unwrap() {
            holds_origin |= piece.kind().may_wrap() && piece.is_unbounded_above();
            spans.push(Span::of(&piece));
        }
    }
    spans.sort_by(Span::cmp_lo);

    let mut merged: Vec<Span<T>> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if last.touches(&span) => {
                trace!(lo = %span.lo.at, "merging touching arc");
                last.absorb(span);
            }
            _ => merged.push(span),
        }
    }

    let (Some(first), Some(last)) = (merged.first(), merged.last()) else {
        return Vec::new();
    };
    let covers_all = merged.len() == 1
        && first.starts_at_origin()
        && first.hi.is_none()
        && (first.lo.inclusive || holds_origin);
    if covers_all {
        debug!(inputs = ranges.len(), "normalized to the full ring");
        return vec![AbstractBounds::full_ring()];
    }

    let origin = if !holds_origin || (first.starts_at_origin() && first.lo.inclusive) {
        Origin::Covered
    } else if last.is_open_top() {
        Origin::OnTopRange
    } else if first.starts_at_origin() {
        merged[0].lo.inclusive = true;
        Origin::Covered
    } else {
        Origin::OwnPoint
    };

    let top = merged.len() - 1;
    let mut out: Vec<AbstractBounds<T>> = Vec::with_capacity(merged.len() + 1);
    for (i, span) in merged.into_iter().enumerate() {
        match origin {
            Origin::OnTopRange if i == top => {
                out.push(AbstractBounds::range(span.lo.at, T::min_value()));
            }
            _ => out.push(span.into_bounds()),
        }
    }
    if let Origin::OwnPoint = origin {
        // (max, origin] holds the origin and nothing else.
        out.push(AbstractBounds::range(T::max_value(), T::min_value()));
    }
    out.sort();

    debug!(inputs = ranges.len(), outputs = out.len(), "normalized ranges");
    out
}

/// Splits `bounds` into roughly equal, independent sub-ranges.
///
/// The bounds is unwrapped (a full ring is cut at the origin) and every
/// piece is split at `parts - 1` evenly spaced interior positions. Pieces too
/// narrow to cut yield fewer sub-ranges, and `parts` is capped at
/// [`MAX_SPLIT_PARTS`](crate::MAX_SPLIT_PARTS). The sub-ranges are disjoint and
/// together cover exactly `bounds`.
pub fn split_for_parallelism<T: RingPosition>(
    bounds: &AbstractBounds<T>,
    parts: usize,
) -> Result<Vec<AbstractBounds<T>>> {
    let pieces = if bounds.is_full_ring() && !bounds.left().is_minimum() {
        vec![
            AbstractBounds::range(bounds.left().clone(), T::min_value()),
            AbstractBounds::range(T::min_value(), bounds.left().clone()),
        ]
    } else {
        bounds.unwrap()
    };

    let mut out = Vec::new();
    for piece in pieces {
        let mut rest = piece;
        for point in T::interior_points(rest.left(), rest.upper(), parts) {
            if let Some((lower, upper)) = rest.split(&point)? {
                out.push(lower);
                rest = upper;
            }
        }
        out.push(rest);
    }

    debug!(%bounds, parts, pieces = out.len(), "split bounds for parallel scan");
    Ok(out)
}
