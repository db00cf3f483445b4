//! Points in geographic coordinates (latitude and longitude): the [`GeoPoint`] abstraction used by
//! the formulas and the validated [`Coordinate`] value type.

pub mod impls;
mod traits;

pub use impls::Coordinate;
pub use traits::point::{GeoPoint, NewGeoPoint};
