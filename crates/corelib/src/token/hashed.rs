//! Hashed token over the `u64` ring.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ring::{RingPosition, RowKind, RowPosition};

/// Most sub-ranges one span is ever cut into.
pub const MAX_SPLIT_PARTS: usize = 1 << 16;

/// A hashed position on the ring.
///
/// Tokens compare by raw numeric order and never wrap by themselves; wrap
/// semantics live in the bounds. `Token::MIN` is both the ring origin and,
/// on the right edge of a bounds, the "no upper bound" sentinel.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(pub u64);

impl Token {
    /// The ring origin.
    pub const MIN: Token = Token(0);

    /// The greatest token on the ring.
    pub const MAX: Token = Token(u64::MAX);

    #[inline]
    pub const fn new(value: u64) -> Self {
        Token(value)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The row position ordered before every row hashing to this token.
    #[inline]
    pub const fn min_key_bound(&self) -> RowPosition {
        RowPosition::new(*self, RowKind::Min)
    }

    /// The row position ordered after every row hashing to this token.
    ///
    /// For the origin this is `RowPosition::MIN`: after the origin comes the
    /// end of the ring, which keeps unbounded right edges unbounded in row
    /// space.
    #[inline]
    pub const fn max_key_bound(&self) -> RowPosition {
        if self.0 == Token::MIN.0 {
            return self.min_key_bound();
        }
        RowPosition::new(*self, RowKind::Max)
    }

    /// Evenly spaced tokens strictly inside `(left, right)`, cutting the
    /// span into `parts` pieces. `None` for `right` means the top of the ring.
    ///
    /// Fewer than `parts - 1` tokens come back when the span is too narrow.
    /// `parts` is capped at [`MAX_SPLIT_PARTS`].
    pub fn split_evenly(left: Token, right: Option<Token>, parts: usize) -> Vec<Token> {
        let lo = u128::from(left.0);
        let hi = right.map_or(1u128 << 64, |r| u128::from(r.0));
        if parts < 2 || hi <= lo {
            return Vec::new();
        }

        let width = hi - lo;
        // More parts than tokens in the span would only repeat points.
        let parts = (parts.min(MAX_SPLIT_PARTS) as u128).min(width);
        let mut points: Vec<Token> = (1..parts)
            .map(|i| lo + width * i / parts)
            .filter(|&p| p > lo && p < hi)
            // p < hi <= 2^64
            .map(|p| Token(p as u64))
            .collect();
        points.dedup();
        points
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Token {
    fn from(value: u64) -> Self {
        Token(value)
    }
}

impl RingPosition for Token {
    fn min_value() -> Self {
        Token::MIN
    }

    fn max_value() -> Self {
        Token::MAX
    }

    fn is_minimum(&self) -> bool {
        *self == Token::MIN
    }

    fn successor(&self) -> Option<Self> {
        self.0.checked_add(1).map(Token)
    }

    fn token(&self) -> Token {
        *self
    }

    fn lower_row_bound(&self, inclusive: bool) -> RowPosition {
        if inclusive {
            self.min_key_bound()
        } else {
            self.max_key_bound()
        }
    }

    fn upper_row_bound(&self, inclusive: bool) -> RowPosition {
        if inclusive {
            self.max_key_bound()
        } else {
            self.min_key_bound()
        }
    }

    fn interior_points(left: &Self, right: Option<&Self>, parts: usize) -> Vec<Self> {
        Token::split_evenly(*left, right.copied(), parts)
    }
}
