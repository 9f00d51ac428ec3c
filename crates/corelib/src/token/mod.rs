//! Token abstraction module.
//!
//! Tokens are hashed positions on the ring. They are produced upstream (by
//! hashing a partition key) and only consumed here: ordered, compared against
//! the origin sentinel, and widened into row-space key bounds.

pub mod hashed;

pub use hashed::{Token, MAX_SPLIT_PARTS};
