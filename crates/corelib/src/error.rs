//! Error types for the core library.

use crate::bounds::BoundsKind;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core library.
///
/// Every failure is reported synchronously to the caller; no partially
/// constructed bounds are ever observable.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A non-wrapping variant was built with `left >= right` and a bounded right.
    #[error("invalid {kind} bounds: left {left} must precede right {right}")]
    InvalidRange {
        kind: BoundsKind,
        left: String,
        right: String,
    },

    /// `split` was called with a position outside the bounds.
    #[error("position {position} is not in range {bounds}")]
    PositionNotInRange { position: String, bounds: String },

    /// Binary wire encoding or decoding failed.
    #[error("wire codec failure: {0}")]
    Codec(#[from] bincode::Error),
}

impl Error {
    pub(crate) fn invalid_range(
        kind: BoundsKind,
        left: &impl std::fmt::Display,
        right: &impl std::fmt::Display,
    ) -> Self {
        Error::InvalidRange {
            kind,
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}
