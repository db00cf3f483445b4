use std::f64::consts::FRAC_PI_2;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::angle::Radians;
use crate::dms;
use crate::error::SphereNavError;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};
use crate::input::{AngleInput, Axis};
use crate::sphere::Sphere;

// Slack for latitudes that land a rounding error past a pole after conversion.
const POLE_TOLERANCE: f64 = 1e-12;

/// Validated point on the surface of the sphere.
///
/// Latitude is always in `[-π/2, π/2]`, longitude in `[-π, π]` and both fields are finite, so
/// every formula applied to a `Coordinate` yields a finite result. Longitudes outside the range
/// are wrapped on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCoordinate"))]
pub struct Coordinate {
    lat: Radians,
    lon: Radians,
}

impl Coordinate {
    /// Creates a coordinate from two angle inputs.
    ///
    /// Each input is either decimal degrees, radians or DMS text ending with a compass letter.
    /// Strings that parse as plain numbers are read as decimal degrees.
    ///
    /// ```
    /// use sphere_nav::Coordinate;
    ///
    /// let greenwich = Coordinate::new("512839N", "0000000E").unwrap();
    /// let decimal = Coordinate::new(53.123, "-1.987").unwrap();
    /// assert!(Coordinate::new("512839E", "0000000E").is_err());
    /// ```
    pub fn new(
        lat: impl Into<AngleInput>,
        lon: impl Into<AngleInput>,
    ) -> Result<Self, SphereNavError> {
        let lat = lat.into().to_axis(Axis::Latitude)?;
        let lon = lon.into().to_axis(Axis::Longitude)?;
        Self::from_radians(lat, lon)
    }

    /// Creates a coordinate from decimal degrees.
    pub fn from_degrees(lat: f64, lon: f64) -> Result<Self, SphereNavError> {
        Self::new(AngleInput::Degrees(lat), AngleInput::Degrees(lon))
    }

    /// Creates a coordinate from two DMS strings, e.g. `"51°28′39″N"` and `"0002741W"`.
    pub fn from_dms(lat: &str, lon: &str) -> Result<Self, SphereNavError> {
        Self::new(
            AngleInput::Text(lat.to_string()),
            AngleInput::Text(lon.to_string()),
        )
    }

    /// Creates a coordinate from radians. The longitude is wrapped into `[-π, π]`.
    pub fn from_radians(lat: Radians, lon: Radians) -> Result<Self, SphereNavError> {
        if !lat.is_finite() {
            return Err(SphereNavError::NonFinite("latitude"));
        }
        if !lon.is_finite() {
            return Err(SphereNavError::NonFinite("longitude"));
        }
        if lat.value().abs() > FRAC_PI_2 + POLE_TOLERANCE {
            return Err(SphereNavError::LatitudeOutOfRange(lat.to_degrees().value()));
        }

        let lat = Radians(lat.value().clamp(-FRAC_PI_2, FRAC_PI_2));
        Ok(Self {
            lat,
            lon: lon.wrapped_signed(),
        })
    }

    /// Creates a coordinate from any other point type.
    pub fn from_point(other: &impl GeoPoint) -> Result<Self, SphereNavError> {
        Self::from_radians(other.lat_rad(), other.lon_rad())
    }

    /// Converts the coordinate into another point type.
    pub fn to_point<P: NewGeoPoint>(&self) -> P {
        P::latlon_rad(self.lat, self.lon)
    }

    /// Used for formula results, which are finite and in range by construction.
    pub(crate) fn from_formula(lat: Radians, lon: Radians) -> Self {
        debug_assert!(lat.is_finite() && lon.is_finite());
        Self {
            lat: Radians(lat.value().clamp(-FRAC_PI_2, FRAC_PI_2)),
            lon: lon.wrapped_signed(),
        }
    }

    /// Haversine distance along the great circle from `origin` to this point, projected onto
    /// `direction`, in kilometres.
    ///
    /// The projection treats the surface as flat around the two points and is only meaningful
    /// for distances that are small compared with the radius of the Earth.
    pub fn along_vector_distance(&self, origin: &impl GeoPoint, direction: Radians) -> f64 {
        Sphere::EARTH.along_vector_distance(self, origin, direction)
    }

    /// Point reached by travelling `distance_km` from this point along the great circle with
    /// the given initial heading. The heading may be given in degrees, radians or DMS text.
    pub fn destination_point(
        &self,
        heading: impl Into<AngleInput>,
        distance_km: f64,
    ) -> Result<Coordinate, SphereNavError> {
        Sphere::EARTH.destination_point(self, heading, distance_km)
    }

    /// Heading of travel on arrival at [`Coordinate::destination_point`], in `[0, 2π)`.
    pub fn final_heading(
        &self,
        heading: impl Into<AngleInput>,
        distance_km: f64,
    ) -> Result<Radians, SphereNavError> {
        Sphere::EARTH.final_heading(self, heading, distance_km)
    }

    /// Latitude as `DDD°MM′SS″N` or `DDD°MM′SS″S`.
    pub fn latitude_text(&self) -> String {
        dms::format_latitude(self.lat)
    }

    /// Longitude as `DDD°MM′SS″E` or `DDD°MM′SS″W`.
    pub fn longitude_text(&self) -> String {
        dms::format_longitude(self.lon)
    }
}

impl GeoPoint for Coordinate {
    fn lat_rad(&self) -> Radians {
        self.lat
    }

    fn lon_rad(&self) -> Radians {
        self.lon
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude_text(), self.longitude_text())
    }
}

/// Parses a latitude followed by a longitude, e.g. the output of [`Display`].
///
/// The two parts are separated by `;`, or by `,` between plain decimal numbers. A DMS latitude
/// ends at its `N`/`S` letter, so its fields may themselves be separated by commas:
/// `"51, 28, 39N, 0, 27, 41W"`.
impl FromStr for Coordinate {
    type Err = SphereNavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = split_lat_lon(s)
            .map(|(lat, lon)| (lat.trim(), lon.trim()))
            .filter(|(lat, lon)| !lat.is_empty() && !lon.is_empty())
            .ok_or_else(|| {
                crate::error::invalid_format(s, "expected a latitude followed by a longitude")
            })?;

        Self::new(lat, lon)
    }
}

fn split_lat_lon(s: &str) -> Option<(&str, &str)> {
    if let Some(pair) = s.split_once(';') {
        return Some(pair);
    }

    if let Some(letter) = s.find(['N', 'S', 'n', 's']) {
        // compass letters are ASCII
        let (lat, rest) = s.split_at(letter + 1);
        let rest = rest.trim_start();
        return Some((lat, rest.strip_prefix(',').unwrap_or(rest)));
    }

    s.split_once(',')
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCoordinate {
    lat: Radians,
    lon: Radians,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCoordinate> for Coordinate {
    type Error = SphereNavError;

    fn try_from(value: RawCoordinate) -> Result<Self, Self::Error> {
        Self::from_radians(value.lat, value.lon)
    }
}
