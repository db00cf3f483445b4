//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SphereNavError {
    /// Angle text could not be read as degrees, DMS or a fixed-width numeral.
    #[error("invalid angle format {input:?}: {reason}")]
    InvalidAngleFormat {
        /// Text that was rejected.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },
    /// DMS text does not end with one of `N`, `S`, `E`, `W`.
    #[error("invalid compass direction {found:?} in {input:?}")]
    InvalidDirection {
        /// Text that was rejected.
        input: String,
        /// Last character of the text, if any.
        found: Option<char>,
    },
    /// Latitude given with an `E`/`W` suffix or longitude with an `N`/`S` suffix.
    #[error("{input:?} is not a {expected}")]
    AxisMismatch {
        /// Text that was rejected.
        input: String,
        /// Axis the value was supplied for.
        expected: &'static str,
    },
    /// Latitude outside of `[-90°, 90°]`.
    #[error("latitude {0}° is out of range")]
    LatitudeOutOfRange(f64),
    /// NaN or infinite value.
    #[error("{0} is not a finite number")]
    NonFinite(&'static str),
    /// Sphere radius must be positive.
    #[error("invalid sphere radius {0} km")]
    InvalidRadius(f64),
}

pub(crate) fn invalid_format(input: &str, reason: &'static str) -> SphereNavError {
    log::debug!("Rejected angle text {input:?}: {reason}");
    SphereNavError::InvalidAngleFormat {
        input: input.to_string(),
        reason,
    }
}
