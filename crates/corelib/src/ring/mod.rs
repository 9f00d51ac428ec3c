//! Positions on the ring.
//!
//! Two position kinds share one capability: [`Token`](crate::token::Token),
//! the hashed point, and [`RowPosition`], which adds a tie-break marker so
//! that row-space bounds can say which side of a cut a row at that token
//! falls on.

pub mod position;
pub mod row;

pub use position::RingPosition;
pub use row::{RowKind, RowPosition};
