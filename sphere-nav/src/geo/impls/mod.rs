//! Point types provided by the crate.

mod point;

pub use point::Coordinate;
