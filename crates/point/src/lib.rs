//! An immutable two-dimensional point
//!
//! Points are plain values: they compare by their coordinates and every
//! operation returns a new point instead of modifying the receiver.

mod error;
mod point;

pub use error::Error;
pub use point::Point;
