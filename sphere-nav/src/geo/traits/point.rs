use crate::angle::{Degrees, Radians};
use crate::sphere::Sphere;

/// Point on the surface of a sphere, given by latitude and longitude.
///
/// Positive latitude is north, positive longitude is east.
pub trait GeoPoint {
    /// Latitude in radians.
    fn lat_rad(&self) -> Radians;
    /// Longitude in radians.
    fn lon_rad(&self) -> Radians;

    /// Latitude in degrees.
    fn lat(&self) -> Degrees {
        self.lat_rad().to_degrees()
    }

    /// Longitude in degrees.
    fn lon(&self) -> Degrees {
        self.lon_rad().to_degrees()
    }

    /// Great-circle (haversine) distance to `other` in kilometres.
    fn distance(&self, other: &impl GeoPoint, sphere: &Sphere) -> f64
    where
        Self: Sized,
    {
        sphere.distance_haversine(self, other)
    }

    /// Initial bearing of the great circle from this point to `other`.
    fn bearing_to(&self, other: &impl GeoPoint) -> Radians
    where
        Self: Sized,
    {
        crate::geodesic::bearing(self, other)
    }
}

/// Point type that can be constructed from latitude and longitude.
pub trait NewGeoPoint: GeoPoint + Sized {
    /// Creates a point from latitude and longitude in radians.
    fn latlon_rad(lat: Radians, lon: Radians) -> Self;

    /// Creates a point from latitude and longitude in degrees.
    fn latlon(lat: Degrees, lon: Degrees) -> Self {
        Self::latlon_rad(lat.to_radians(), lon.to_radians())
    }
}
