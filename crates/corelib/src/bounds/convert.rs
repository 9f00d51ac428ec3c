//! Mapping bounds between token space and row space.
//!
//! Endpoint inclusion decides which key bound a token widens to:
//!
//! | endpoint | included | excluded |
//! |---|---|---|
//! | left | `min_key_bound` | `max_key_bound` |
//! | right | `max_key_bound` | `min_key_bound` |
//!
//! Both directions are no-ops on bounds already in the target space. Going
//! from rows back to tokens can tighten an endpoint's inclusion, since row
//! edges may sit between the rows of a token.

use crate::bounds::{AbstractBounds, BoundsKind, RowBounds, TokenBounds};
use crate::error::{Error, Result};
use crate::ring::{RingPosition, RowPosition};
use crate::token::Token;

impl<T: RingPosition> AbstractBounds<T> {
    /// The same variant over row positions, covering every row whose token
    /// these bounds contain.
    pub fn to_row_bounds(&self) -> RowBounds {
        let left = self.left().lower_row_bound(self.left_inclusive());
        let right = self
            .upper()
            .map(|right| right.upper_row_bound(self.right_inclusive()));
        AbstractBounds::from_parts(self.kind(), left, right)
    }

    /// The smallest token bounds holding every real row these bounds contain.
    ///
    /// Each endpoint keeps its token; its inclusion follows whether a row on
    /// that token falls inside. Non-wrapping variants take the variant
    /// matching those inclusions. A `Range` keeps its shape by moving an
    /// included left edge, or an excluded right edge, one token down.
    ///
    /// # Errors
    ///
    /// [`InvalidRange`](crate::Error::InvalidRange) when both endpoints sit on
    /// the same token (unless the bounds is the full ring), when a bounded
    /// right edge sits on the origin token, or when a non-wrapping range
    /// holds no row at all.
    pub fn to_token_bounds(&self) -> Result<TokenBounds> {
        let rows = self.to_row_bounds();
        let left = rows.left().token();
        if rows.is_full_ring() {
            return Ok(AbstractBounds::range(left, left));
        }

        // No real row hashes to the origin.
        let left_inclusive = if left.is_minimum() {
            rows.left_inclusive()
        } else {
            left_edge_admits_row(rows.left(), rows.left_inclusive())
        };
        let (right, right_inclusive) = match rows.upper() {
            None => (None, rows.right_inclusive()),
            Some(edge) => {
                let right = edge.token();
                if right == left || right.is_minimum() {
                    return Err(Error::invalid_range(rows.kind(), rows.left(), edge));
                }
                (Some(right), right_edge_admits_row(edge, rows.right_inclusive()))
            }
        };

        if !rows.kind().may_wrap() {
            let kind = BoundsKind::from_inclusion(left_inclusive, right_inclusive);
            return match right {
                Some(right) => AbstractBounds::new(kind, left, right),
                None => Ok(AbstractBounds::unbounded_above(kind, left)),
            };
        }

        // left is never the origin here: a range's left edge is excluded.
        let lower = if left_inclusive { Token(left.0 - 1) } else { left };
        let upper = match right {
            Some(right) if !right_inclusive => Some(Token(right.0 - 1)),
            other => other,
        };
        if let Some(upper) = upper {
            if !rows.is_wrap_around() && lower >= upper {
                return Err(Error::invalid_range(rows.kind(), rows.left(), &rows.right()));
            }
        }
        Ok(AbstractBounds::from_parts(BoundsKind::Range, lower, upper))
    }
}

/// Whether a row on `edge`'s token lies inside a left edge at `edge`.
fn left_edge_admits_row(edge: &RowPosition, inclusive: bool) -> bool {
    let row = RowPosition::key(edge.token());
    if inclusive {
        row >= *edge
    } else {
        row > *edge
    }
}

/// Whether a row on `edge`'s token lies inside a right edge at `edge`.
fn right_edge_admits_row(edge: &RowPosition, inclusive: bool) -> bool {
    let row = RowPosition::key(edge.token());
    if inclusive {
        row <= *edge
    } else {
        row < *edge
    }
}
