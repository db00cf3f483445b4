//! Great-circle navigation on a spherical Earth.
//!
//! The crate provides a validated [`Coordinate`] type, distance, bearing, midpoint and
//! destination formulas on a [`Sphere`], and parsing and formatting of
//! degree/minute/second text.
//!
//! ```
//! use sphere_nav::{bearing, distance_haversine, dms, Coordinate};
//!
//! let from = Coordinate::new("512839N", "0002741W").unwrap();
//! let to = Coordinate::new("48°38′57″N", "2°21′47″E").unwrap();
//!
//! let distance = distance_haversine(&from, &to);
//! assert!((distance - 373.5).abs() < 0.1);
//!
//! let heading = bearing(&from, &to);
//! assert_eq!(dms::radians_to_bearing_text(heading), "146°14′48″");
//!
//! let arrival = from.destination_point(heading, distance).unwrap();
//! assert_eq!(arrival.to_string(), "048°38′57″N, 002°21′47″E");
//! ```
//!
//! All formulas assume a sphere, so distances differ from ellipsoidal ones by up to about
//! 0.5%.

mod angle;
pub mod dms;
pub mod error;
pub mod geo;
pub mod geodesic;
mod input;
mod sphere;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use angle::{Degrees, Radians};
pub use error::SphereNavError;
pub use geo::{Coordinate, GeoPoint, NewGeoPoint};
pub use geodesic::{bearing, distance_cosine_law, distance_haversine, midpoint};
pub use input::AngleInput;
pub use sphere::Sphere;
