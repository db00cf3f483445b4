//! Angle values as supplied by callers, before they are checked and converted to [`Radians`].

use crate::angle::{Degrees, Radians};
use crate::dms;
use crate::error::SphereNavError;

/// Angle supplied by a caller for a latitude, longitude or heading.
#[derive(Debug, Clone, PartialEq)]
pub enum AngleInput {
    /// Decimal degrees.
    Degrees(f64),
    /// Already converted radians.
    Radians(Radians),
    /// DMS text. For latitudes and longitudes it must end with a compass letter.
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn name(self) -> &'static str {
        match self {
            Axis::Latitude => "latitude",
            Axis::Longitude => "longitude",
        }
    }
}

impl AngleInput {
    /// Decides how to read `text`: anything that parses as a plain number is taken as decimal
    /// degrees, everything else is kept as DMS text.
    pub fn classify(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(value) => Self::Degrees(value),
            Err(_) => Self::Text(text.to_string()),
        }
    }

    /// Reads the input as a heading. Text may be DMS fields or decimal degrees without a compass
    /// letter.
    pub fn to_heading(&self) -> Result<Radians, SphereNavError> {
        let heading = match self {
            Self::Degrees(value) => Degrees(*value).to_radians(),
            Self::Radians(value) => *value,
            Self::Text(text) => dms::parse_heading(text)?,
        };

        if heading.is_finite() {
            Ok(heading)
        } else {
            Err(SphereNavError::NonFinite("heading"))
        }
    }

    pub(crate) fn to_axis(&self, axis: Axis) -> Result<Radians, SphereNavError> {
        match self {
            Self::Degrees(value) => Ok(Degrees(*value).to_radians()),
            Self::Radians(value) => Ok(*value),
            Self::Text(text) => {
                let (value, direction) = dms::parse_directed(text)?;
                if direction.is_latitude() != (axis == Axis::Latitude) {
                    log::debug!(
                        "Compass direction {} cannot be used for {}",
                        direction.as_char(),
                        axis.name()
                    );
                    return Err(SphereNavError::AxisMismatch {
                        input: text.clone(),
                        expected: axis.name(),
                    });
                }

                Ok(value)
            }
        }
    }
}

impl From<f64> for AngleInput {
    fn from(value: f64) -> Self {
        Self::Degrees(value)
    }
}

impl From<Degrees> for AngleInput {
    fn from(value: Degrees) -> Self {
        Self::Degrees(value.value())
    }
}

impl From<Radians> for AngleInput {
    fn from(value: Radians) -> Self {
        Self::Radians(value)
    }
}

impl From<&str> for AngleInput {
    fn from(value: &str) -> Self {
        Self::classify(value)
    }
}

impl From<String> for AngleInput {
    fn from(value: String) -> Self {
        Self::classify(&value)
    }
}
