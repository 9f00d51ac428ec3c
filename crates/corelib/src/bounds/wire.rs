//! Wire representation of bounds.
//!
//! A bounds travels as the tuple `{ kind, left, right }` where `kind` is one
//! of `RANGE`, `BOUNDS`, `EXCLUDING`, `INCLUDING_EXCLUDING` and an unbounded
//! right edge is sent as the minimum sentinel. Decoding goes through the
//! validating constructor, so a tuple that violates the variant's invariant
//! is rejected rather than materialized. Framing and transport belong to the
//! messaging layer.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::bounds::{AbstractBounds, BoundsKind};
use crate::error::{Error, Result};
use crate::ring::RingPosition;

/// The `{ kind, left, right }` tuple as shipped between coordinators.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct WireBounds<T> {
    pub kind: BoundsKind,
    pub left: T,
    pub right: T,
}

impl<T: RingPosition> From<AbstractBounds<T>> for WireBounds<T> {
    fn from(bounds: AbstractBounds<T>) -> Self {
        WireBounds {
            kind: bounds.kind(),
            right: bounds.right(),
            left: bounds.left,
        }
    }
}

impl<T: RingPosition> TryFrom<WireBounds<T>> for AbstractBounds<T> {
    type Error = Error;

    fn try_from(wire: WireBounds<T>) -> Result<Self> {
        AbstractBounds::new(wire.kind, wire.left, wire.right)
    }
}

/// Encodes bounds into the compact binary wire form.
pub fn encode<T>(bounds: &AbstractBounds<T>) -> Result<Vec<u8>>
where
    T: RingPosition + Serialize,
{
    Ok(bincode::serialize(bounds)?)
}

/// Decodes bounds from the compact binary wire form.
///
/// # Errors
///
/// [`Error::Codec`] for malformed bytes, including tuples that describe
/// invalid bounds.
pub fn decode<T>(bytes: &[u8]) -> Result<AbstractBounds<T>>
where
    T: RingPosition + DeserializeOwned,
{
    Ok(bincode::deserialize(bytes)?)
}
