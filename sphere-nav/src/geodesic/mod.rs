//! Great-circle formulas on a spherical body.
//!
//! Every formula is a method of [`Sphere`]; the functions of this module evaluate them on
//! [`Sphere::EARTH`]. Angles are [`Radians`](crate::Radians), distances are kilometres.

mod along_vector;
mod destination;
mod distance;
mod halfway;
mod heading;

use crate::geo::GeoPoint;
use crate::sphere::Sphere;

pub use halfway::midpoint;
pub use heading::bearing;

/// Haversine distance between two points on the Earth in kilometres.
pub fn distance_haversine(p1: &impl GeoPoint, p2: &impl GeoPoint) -> f64 {
    Sphere::EARTH.distance_haversine(p1, p2)
}

/// Spherical law of cosines distance between two points on the Earth in kilometres.
pub fn distance_cosine_law(p1: &impl GeoPoint, p2: &impl GeoPoint) -> f64 {
    Sphere::EARTH.distance_cosine_law(p1, p2)
}
