//! The four bounds variants and their endpoint-inclusion table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Variant tag of an [`AbstractBounds`](super::AbstractBounds).
///
/// | variant | left | right | may wrap | delimiters |
/// |---|---|---|---|---|
/// | `Range` | excluded | included | yes | `(` `]` |
/// | `Bounds` | included | included | no | `[` `]` |
/// | `ExcludingBounds` | excluded | excluded | no | `(` `)` |
/// | `IncludingExcludingBounds` | included | excluded | no | `[` `)` |
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum BoundsKind {
    #[serde(rename = "RANGE")]
    Range,
    #[serde(rename = "BOUNDS")]
    Bounds,
    #[serde(rename = "EXCLUDING")]
    ExcludingBounds,
    #[serde(rename = "INCLUDING_EXCLUDING")]
    IncludingExcludingBounds,
}

impl BoundsKind {
    pub const ALL: [BoundsKind; 4] = [
        BoundsKind::Range,
        BoundsKind::Bounds,
        BoundsKind::ExcludingBounds,
        BoundsKind::IncludingExcludingBounds,
    ];

    /// The variant with the given endpoint inclusion.
    #[inline]
    pub const fn from_inclusion(left_inclusive: bool, right_inclusive: bool) -> Self {
        match (left_inclusive, right_inclusive) {
            (false, true) => BoundsKind::Range,
            (true, true) => BoundsKind::Bounds,
            (false, false) => BoundsKind::ExcludingBounds,
            (true, false) => BoundsKind::IncludingExcludingBounds,
        }
    }

    #[inline]
    pub const fn left_inclusive(self) -> bool {
        matches!(self, BoundsKind::Bounds | BoundsKind::IncludingExcludingBounds)
    }

    #[inline]
    pub const fn right_inclusive(self) -> bool {
        matches!(self, BoundsKind::Range | BoundsKind::Bounds)
    }

    /// Only a `Range` may wrap through the ring origin.
    #[inline]
    pub const fn may_wrap(self) -> bool {
        matches!(self, BoundsKind::Range)
    }

    pub const fn opening(self) -> char {
        if self.left_inclusive() {
            '['
        } else {
            '('
        }
    }

    pub const fn closing(self) -> char {
        if self.right_inclusive() {
            ']'
        } else {
            ')'
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            BoundsKind::Range => "Range",
            BoundsKind::Bounds => "Bounds",
            BoundsKind::ExcludingBounds => "ExcludingBounds",
            BoundsKind::IncludingExcludingBounds => "IncludingExcludingBounds",
        }
    }
}

impl fmt::Display for BoundsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
