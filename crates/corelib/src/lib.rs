//! Core library for the ring partition-range algebra.
//!
//! This crate provides immutable interval types over the cyclic token ring:
//! - Tokens and row positions (the ring-position capability)
//! - The bounds family: `Range`, `Bounds`, `ExcludingBounds`,
//!   `IncludingExcludingBounds`
//! - Mapping bounds between token space and row space
//! - Normalizing sets of bounds and splitting them for parallel scans
//! - The wire tuple for shipping bounds to remote coordinators
//!
//! Every operation is a pure function over values; nothing here performs
//! I/O or keeps shared state, so results can be computed and shared on any
//! thread.

pub mod bounds;
pub mod error;
pub mod range_set;
pub mod ring;
pub mod token;

pub use bounds::{AbstractBounds, BoundsKind, RowBounds, TokenBounds};
pub use error::{Error, Result};
pub use range_set::{normalize, split_for_parallelism};
pub use ring::{RingPosition, RowKind, RowPosition};
pub use token::{Token, MAX_SPLIT_PARTS};
