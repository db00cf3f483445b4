use crate::error::SphereNavError;

/// Sphere used to approximate the shape of a celestial body.
///
/// All great-circle formulas of the crate are methods of this type. The crate level functions
/// use [`Sphere::EARTH`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSphere"))]
pub struct Sphere {
    radius_km: f64,
}

impl Sphere {
    /// Earth with the mean radius of 6371 km.
    pub const EARTH: Self = Sphere { radius_km: 6371.0 };

    /// Creates a sphere with the given radius in kilometres.
    pub fn new(radius_km: f64) -> Result<Self, SphereNavError> {
        if radius_km.is_finite() && radius_km > 0.0 {
            Ok(Self { radius_km })
        } else {
            Err(SphereNavError::InvalidRadius(radius_km))
        }
    }

    /// Radius in kilometres.
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::EARTH
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSphere {
    radius_km: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSphere> for Sphere {
    type Error = SphereNavError;

    fn try_from(value: RawSphere) -> Result<Self, Self::Error> {
        Self::new(value.radius_km)
    }
}
