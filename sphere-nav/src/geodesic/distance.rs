use crate::geo::GeoPoint;
use crate::sphere::Sphere;

impl Sphere {
    /// Great-circle distance between two points in kilometres, computed with the haversine
    /// formula. Stable for both short and long distances.
    pub fn distance_haversine(&self, p1: &impl GeoPoint, p2: &impl GeoPoint) -> f64 {
        let (lat1, lat2) = (p1.lat_rad().value(), p2.lat_rad().value());
        let d_lat = lat2 - lat1;
        let d_lon = p2.lon_rad().value() - p1.lon_rad().value();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        self.radius_km() * c
    }

    /// Great-circle distance between two points in kilometres, computed with the spherical law
    /// of cosines.
    ///
    /// Loses precision for nearly coincident and nearly antipodal points; prefer
    /// [`Sphere::distance_haversine`].
    pub fn distance_cosine_law(&self, p1: &impl GeoPoint, p2: &impl GeoPoint) -> f64 {
        let (lat1, lat2) = (p1.lat_rad().value(), p2.lat_rad().value());
        let d_lon = p2.lon_rad().value() - p1.lon_rad().value();

        let cos_c = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * d_lon.cos();
        if !(-1.0..=1.0).contains(&cos_c) {
            log::trace!("Clamping law of cosines argument {cos_c}");
        }

        self.radius_km() * cos_c.clamp(-1.0, 1.0).acos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn point(lat: f64, lon: f64) -> Coordinate {
        Coordinate::from_degrees(lat, lon).unwrap()
    }

    #[test]
    fn haversine_known_distance() {
        let greenwich = Coordinate::new("512839N", "0002741W").unwrap();
        let paris = Coordinate::new("483857N", "0022147E").unwrap();

        assert_abs_diff_eq!(
            Sphere::EARTH.distance_haversine(&greenwich, &paris),
            373.5,
            epsilon = 0.1
        );
    }

    #[test]
    fn quarter_of_equator() {
        let d = Sphere::EARTH.distance_haversine(&point(0.0, 0.0), &point(0.0, 90.0));
        assert_relative_eq!(d, std::f64::consts::FRAC_PI_2 * 6371.0, max_relative = 1e-12);
    }

    #[test]
    fn radius_scales_distance() {
        let unit = Sphere::new(1.0).unwrap();
        let d = unit.distance_haversine(&point(0.0, 0.0), &point(0.0, 180.0));
        assert_abs_diff_eq!(d, std::f64::consts::PI, epsilon = 1e-12);
    }

    #[test]
    fn cosine_law_degenerate_points() {
        let p = point(12.34567, 98.76543);
        assert_abs_diff_eq!(Sphere::EARTH.distance_cosine_law(&p, &p), 0.0, epsilon = 1e-3);

        let antipode = point(-12.34567, 98.76543 - 180.0);
        let d = Sphere::EARTH.distance_cosine_law(&p, &antipode);
        assert!(d.is_finite());
        assert_relative_eq!(d, std::f64::consts::PI * 6371.0, max_relative = 1e-6);
    }

    #[test]
    fn cosine_law_agrees_with_haversine() {
        let p1 = point(50.0, 5.0);
        let p2 = point(52.0, 9.5);
        let haversine = Sphere::EARTH.distance_haversine(&p1, &p2);
        let cosine = Sphere::EARTH.distance_cosine_law(&p1, &p2);
        assert_relative_eq!(haversine, cosine, max_relative = 1e-3);
    }
}
