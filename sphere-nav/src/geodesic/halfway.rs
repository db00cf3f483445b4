use crate::angle::Radians;
use crate::geo::{Coordinate, GeoPoint};

/// Point half-way along the great circle between `p1` and `p2`.
///
/// For antipodal points the great circle is not unique and the result is one of the possible
/// midpoints.
pub fn midpoint(p1: &Coordinate, p2: &Coordinate) -> Coordinate {
    let (lat1, lon1) = (p1.lat_rad().value(), p1.lon_rad().value());
    let lat2 = p2.lat_rad().value();
    let d_lon = p2.lon_rad().value() - lon1;

    let bx = lat2.cos() * d_lon.cos();
    let by = lat2.cos() * d_lon.sin();

    let lat3 = (lat1.sin() + lat2.sin()).atan2(((lat1.cos() + bx).powi(2) + by * by).sqrt());
    let lon3 = lon1 + by.atan2(lat1.cos() + bx);

    Coordinate::from_formula(Radians(lat3), Radians(lon3))
}
