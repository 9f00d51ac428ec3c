//! Row positions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ring::RingPosition;
use crate::token::Token;

/// Where a row position sits relative to the real rows of its token.
///
/// Declaration order is the tie-break order for equal tokens.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RowKind {
    /// Just before every row hashing to the token.
    Min,
    /// Exactly at a row hashing to the token.
    RowKey,
    /// Just after every row hashing to the token.
    Max,
}

/// A position in row space: a token plus a tie-break marker.
///
/// Several real keys can share a token, so a token alone cannot say whether
/// a row exactly at it lies left or right of a cut. Ordering follows the
/// token first and [`RowKind`] second.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct RowPosition {
    token: Token,
    kind: RowKind,
}

impl RowPosition {
    /// The ring origin in row space.
    pub const MIN: RowPosition = RowPosition::new(Token::MIN, RowKind::Min);

    /// The last position in row space.
    pub const MAX: RowPosition = RowPosition::new(Token::MAX, RowKind::Max);

    #[inline]
    pub const fn new(token: Token, kind: RowKind) -> Self {
        Self { token, kind }
    }

    /// Position of a stored row hashing to `token`.
    #[inline]
    pub const fn key(token: Token) -> Self {
        Self::new(token, RowKind::RowKey)
    }

    #[inline]
    pub const fn kind(&self) -> RowKind {
        self.kind
    }
}

impl fmt::Display for RowPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RowKind::Min => write!(f, "min({})", self.token),
            RowKind::RowKey => write!(f, "key({})", self.token),
            RowKind::Max => write!(f, "max({})", self.token),
        }
    }
}

impl RingPosition for RowPosition {
    fn min_value() -> Self {
        RowPosition::MIN
    }

    fn max_value() -> Self {
        RowPosition::MAX
    }

    fn is_minimum(&self) -> bool {
        self.kind == RowKind::Min && self.token.is_minimum()
    }

    fn successor(&self) -> Option<Self> {
        match self.kind {
            RowKind::Min => Some(Self::key(self.token)),
            RowKind::RowKey => Some(Self::new(self.token, RowKind::Max)),
            RowKind::Max => self.token.successor().map(|t| t.min_key_bound()),
        }
    }

    fn token(&self) -> Token {
        self.token
    }

    fn lower_row_bound(&self, _inclusive: bool) -> RowPosition {
        *self
    }

    fn upper_row_bound(&self, _inclusive: bool) -> RowPosition {
        *self
    }

    /// Cuts land on `max_key_bound` of evenly spaced tokens, so every piece
    /// owns whole tokens.
    fn interior_points(left: &Self, right: Option<&Self>, parts: usize) -> Vec<Self> {
        Token::split_evenly(left.token, right.map(|r| r.token), parts)
            .into_iter()
            .map(|t| t.max_key_bound())
            .filter(|p| p > left && right.map_or(true, |r| p < r))
            .collect()
    }
}
