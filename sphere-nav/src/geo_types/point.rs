use geo_types::point;

use crate::angle::{Degrees, Radians};
use crate::geo::{GeoPoint, NewGeoPoint};

/// `x` is longitude and `y` is latitude, both in degrees.
impl GeoPoint for geo_types::Point<f64> {
    fn lat_rad(&self) -> Radians {
        Degrees(self.y()).to_radians()
    }

    fn lon_rad(&self) -> Radians {
        Degrees(self.x()).to_radians()
    }
}

impl NewGeoPoint for geo_types::Point<f64> {
    fn latlon_rad(lat: Radians, lon: Radians) -> Self {
        point!(x: lon.to_degrees().value(), y: lat.to_degrees().value())
    }
}
