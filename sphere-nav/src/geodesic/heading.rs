use std::f64::consts::PI;

use crate::angle::Radians;
use crate::error::SphereNavError;
use crate::geo::{Coordinate, GeoPoint};
use crate::input::AngleInput;
use crate::sphere::Sphere;

const COINCIDENT_ANGLE: f64 = 1e-12;

/// Initial bearing of the great circle from `p1` to `p2`.
///
/// The result is in `(-π, π]`, measured clockwise from north; call
/// [`Radians::normalized`] to get a compass bearing. The bearing back from `p2` to `p1` is in
/// general not the reverse of this one.
pub fn bearing(p1: &impl GeoPoint, p2: &impl GeoPoint) -> Radians {
    let (lat1, lat2) = (p1.lat_rad().value(), p2.lat_rad().value());
    let d_lon = p2.lon_rad().value() - p1.lon_rad().value();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    Radians(y.atan2(x))
}

impl Sphere {
    /// Heading of travel on arrival at the point reached from `origin` by following the great
    /// circle with the given initial `heading` for `distance_km`. Result is in `[0, 2π)`.
    ///
    /// When the destination coincides with the origin the initial heading is returned.
    pub fn final_heading(
        &self,
        origin: &Coordinate,
        heading: impl Into<AngleInput>,
        distance_km: f64,
    ) -> Result<Radians, SphereNavError> {
        let heading = heading.into().to_heading()?;
        let destination = self.destination_point(origin, heading, distance_km)?;

        // bearing between coincident points is atan2(0, 0)
        if self.distance_haversine(&destination, origin) <= self.radius_km() * COINCIDENT_ANGLE {
            return Ok(heading.normalized());
        }

        Ok((bearing(&destination, origin) + Radians(PI)).normalized())
    }
}
