//! Degree/minute/second text: parsing into [`Radians`](crate::Radians) and formatting back.
//!
//! Accepted coordinate text ends with a compass letter and is either separated into three
//! fields or written as a fixed-width numeral:
//!
//! ```
//! use sphere_nav::dms;
//!
//! let separated = dms::parse_dms("51°28'39\"N").unwrap();
//! let fixed = dms::parse_dms("512839N").unwrap();
//! assert!((separated.value() - fixed.value()).abs() < 1e-12);
//! assert_eq!(dms::format_latitude(fixed), "051°28′39″N");
//! ```

mod format;
mod parse;

pub use format::{
    format_latitude, format_longitude, radians_to_bearing_text, radians_to_deg_min_sec,
};
pub use parse::{parse_directed, parse_dms, parse_heading};

/// Degree sign used in formatted output.
pub const DEGREE_SIGN: char = '°';
/// Prime (minutes) sign used in formatted output.
pub const PRIME: char = '′';
/// Double prime (seconds) sign used in formatted output.
pub const DOUBLE_PRIME: char = '″';

/// Compass letter terminating a DMS coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `N`, positive latitude.
    North,
    /// `S`, negative latitude.
    South,
    /// `E`, positive longitude.
    East,
    /// `W`, negative longitude.
    West,
}

impl Direction {
    /// Reads a compass letter, ignoring case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// Upper-case letter of the direction.
    pub fn as_char(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }

    /// `true` for `N` and `S`.
    pub fn is_latitude(self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    /// `true` for `S` and `W`.
    pub fn is_negative(self) -> bool {
        matches!(self, Self::South | Self::West)
    }
}
