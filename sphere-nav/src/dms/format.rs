use std::fmt::{Display, Formatter};

use crate::angle::Radians;
use crate::dms::{Direction, DEGREE_SIGN, DOUBLE_PRIME, PRIME};

/// Magnitude of an angle split into whole degrees, minutes and rounded seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Dms {
    degrees: u64,
    minutes: u64,
    seconds: u64,
}

impl Dms {
    const ZERO: Self = Self {
        degrees: 0,
        minutes: 0,
        seconds: 0,
    };

    /// `None` for values that are not finite or have too many degrees to count in a `u64`.
    fn from_radians(value: Radians) -> Option<Self> {
        let decimal = value.abs().to_degrees().value();
        if !decimal.is_finite() || decimal >= u64::MAX as f64 {
            return None;
        }

        let degrees = decimal.floor();
        let minutes = ((decimal - degrees) * 60.0).floor();
        let seconds = ((decimal - degrees - minutes / 60.0) * 3600.0).round();

        let mut dms = Self {
            degrees: degrees as u64,
            minutes: minutes as u64,
            seconds: seconds as u64,
        };

        if dms.seconds >= 60 {
            dms.seconds -= 60;
            dms.minutes += 1;
        }
        if dms.minutes >= 60 {
            dms.minutes -= 60;
            dms.degrees += 1;
        }

        Some(dms)
    }
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:03}{DEGREE_SIGN}{:02}{PRIME}{:02}{DOUBLE_PRIME}",
            self.degrees, self.minutes, self.seconds
        )
    }
}

/// Formats an angle as `DDD°MM′SS″`, prefixed with `-` when negative.
///
/// Angles that round to zero are never signed. Values that cannot be split into degrees,
/// minutes and seconds are rendered as plain numbers.
pub fn radians_to_deg_min_sec(value: Radians) -> String {
    let Some(dms) = Dms::from_radians(value) else {
        return value.value().to_string();
    };

    if value.value() < 0.0 && dms != Dms::ZERO {
        format!("-{dms}")
    } else {
        dms.to_string()
    }
}

/// Formats a bearing as compass `DDD°MM′SS″` in `[000°00′00″, 359°59′59″]`.
pub fn radians_to_bearing_text(value: Radians) -> String {
    if !value.is_finite() {
        return value.value().to_string();
    }

    let Some(mut dms) = Dms::from_radians(value.normalized()) else {
        return value.value().to_string();
    };
    if dms.degrees >= 360 {
        dms.degrees -= 360;
    }

    dms.to_string()
}

/// Formats a latitude as `DDD°MM′SS″N` or `DDD°MM′SS″S`.
pub fn format_latitude(value: Radians) -> String {
    let direction = if value.value() >= 0.0 {
        Direction::North
    } else {
        Direction::South
    };
    format_directed(value, direction)
}

/// Formats a longitude as `DDD°MM′SS″E` or `DDD°MM′SS″W`. Zero is east.
pub fn format_longitude(value: Radians) -> String {
    let direction = if value.value() >= 0.0 {
        Direction::East
    } else {
        Direction::West
    };
    format_directed(value, direction)
}

fn format_directed(value: Radians, direction: Direction) -> String {
    match Dms::from_radians(value) {
        Some(dms) => format!("{dms}{}", direction.as_char()),
        None => value.value().to_string(),
    }
}
