use crate::angle::Radians;
use crate::error::SphereNavError;
use crate::geo::{Coordinate, GeoPoint};
use crate::input::AngleInput;
use crate::sphere::Sphere;

impl Sphere {
    /// Point reached by travelling `distance_km` from `origin` along the great circle with the
    /// given initial `heading`.
    ///
    /// The heading can be decimal degrees, [`Radians`] or heading text (decimal degrees or
    /// DMS fields without a compass letter). Negative distances travel backwards.
    pub fn destination_point(
        &self,
        origin: &Coordinate,
        heading: impl Into<AngleInput>,
        distance_km: f64,
    ) -> Result<Coordinate, SphereNavError> {
        let heading = heading.into().to_heading()?;
        if !distance_km.is_finite() {
            return Err(SphereNavError::NonFinite("distance"));
        }

        let delta = distance_km / self.radius_km();
        if !delta.is_finite() {
            return Err(SphereNavError::NonFinite("distance"));
        }

        let lat1 = origin.lat_rad().value();
        let lon1 = origin.lon_rad().value();

        let sin_lat2 = lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * heading.cos();
        let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
        let lon2 = lon1
            + (heading.sin() * delta.sin() * lat1.cos())
                .atan2(delta.cos() - lat1.sin() * lat2.sin());

        Ok(Coordinate::from_formula(Radians(lat2), Radians(lon2)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::Degrees;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    #[test]
    fn along_equator() {
        let origin = Coordinate::from_degrees(0.0, 0.0).unwrap();
        let quarter = std::f64::consts::FRAC_PI_2 * 6371.0;
        let dest = Sphere::EARTH.destination_point(&origin, 90.0, quarter).unwrap();

        assert_abs_diff_eq!(dest.lat(), Degrees(0.0), epsilon = 1e-9);
        assert_abs_diff_eq!(dest.lon(), Degrees(90.0), epsilon = 1e-9);
    }

    #[test]
    fn known_destination() {
        let origin = Coordinate::new("512839N", "0002741W").unwrap();
        let dest = Sphere::EARTH
            .destination_point(&origin, "110°00′00″", 400.0)
            .unwrap();

        assert_abs_diff_eq!(dest.lat(), Degrees(50.1261), epsilon = 1e-3);
        assert_abs_diff_eq!(dest.lon(), Degrees(4.8153), epsilon = 1e-3);
    }

    #[test]
    fn travels_back_to_origin() {
        let origin = Coordinate::from_degrees(-33.8568, 151.2153).unwrap();
        let dest = Sphere::EARTH.destination_point(&origin, 45.0, 250.0).unwrap();
        let distance = Sphere::EARTH.distance_haversine(&origin, &dest);
        assert_abs_diff_eq!(distance, 250.0, epsilon = 1e-6);
    }

    #[test]
    fn longitude_is_wrapped() {
        let origin = Coordinate::from_degrees(0.0, 179.0).unwrap();
        let dest = Sphere::EARTH.destination_point(&origin, 90.0, 333.0).unwrap();
        assert!(dest.lon().value() < 0.0);
        assert!(dest.lon().value() >= -180.0);
    }

    #[test]
    fn invalid_heading_or_distance() {
        let origin = Coordinate::from_degrees(0.0, 0.0).unwrap();
        assert_matches!(
            Sphere::EARTH.destination_point(&origin, "east", 10.0),
            Err(SphereNavError::InvalidAngleFormat { .. })
        );
        assert_matches!(
            Sphere::EARTH.destination_point(&origin, 10.0, f64::INFINITY),
            Err(SphereNavError::NonFinite("distance"))
        );
    }

    #[test]
    fn distance_overflowing_the_radius() {
        let tiny = Sphere::new(1e-300).unwrap();
        let origin = Coordinate::from_degrees(10.0, 10.0).unwrap();
        assert_matches!(
            tiny.destination_point(&origin, 45.0, 1e10),
            Err(SphereNavError::NonFinite("distance"))
        );
    }
}
