use crate::angle::Radians;
use crate::geo::GeoPoint;
use crate::sphere::Sphere;

use super::bearing;

impl Sphere {
    /// Distance from `point` to `origin` projected onto `direction`, in kilometres.
    ///
    /// Uses the haversine distance and the initial bearing from `point` to `origin`, then
    /// projects as if the surface were a plane: `distance * cos(bearing - direction)`. The flat
    /// approximation only holds for distances that are small relative to the radius.
    pub fn along_vector_distance(
        &self,
        point: &impl GeoPoint,
        origin: &impl GeoPoint,
        direction: Radians,
    ) -> f64 {
        let distance = self.distance_haversine(point, origin);
        let bearing = bearing(point, origin);

        distance * (bearing - direction).cos()
    }
}
