use crate::angle::{Degrees, Radians};
use crate::dms::Direction;
use crate::error::{invalid_format, SphereNavError};

const SEPARATORS: &[char] = &[':', ',', '°', 'º', '\'', '′', '"', '″'];

fn is_separator(c: char) -> bool {
    c.is_whitespace() || SEPARATORS.contains(&c)
}

fn split_fields(body: &str) -> Vec<&str> {
    body.split(is_separator)
        .filter(|field| !field.is_empty())
        .collect()
}

/// Parses a coordinate written in DMS notation and terminated by a compass letter.
///
/// `S` and `W` values are negative. See [`parse_directed`] for the accepted layouts.
pub fn parse_dms(text: &str) -> Result<Radians, SphereNavError> {
    parse_directed(text).map(|(angle, _)| angle)
}

/// Parses a coordinate written in DMS notation and returns it together with its compass letter.
///
/// The body before the letter is split on whitespace, `:`, `,`, degree signs, primes and
/// quotes. Three fields are read as degrees, minutes and seconds. Anything else is read as a
/// fixed-width numeral `DDDMMSS[.s]`; for `N`/`S` values a leading zero is added first, so
/// `512839N` reads as 51°28′39″. Minutes and seconds of the fixed-width form are not range
/// checked.
pub fn parse_directed(text: &str) -> Result<(Radians, Direction), SphereNavError> {
    let trimmed = text.trim();
    let last = trimmed.chars().next_back();
    let Some(direction) = last.and_then(Direction::from_char) else {
        log::debug!("Angle text {text:?} has no compass direction");
        return Err(SphereNavError::InvalidDirection {
            input: text.to_string(),
            found: last,
        });
    };

    // compass letters are ASCII, so the body ends one byte before the end
    let body = &trimmed[..trimmed.len() - 1];
    let fields = split_fields(body);
    let magnitude = if fields.len() == 3 {
        for field in &fields {
            if field.starts_with(['-', '+']) {
                return Err(invalid_format(text, "sign must come from the compass direction"));
            }
        }
        from_fields(text, &fields)?
    } else {
        parse_fixed_width(text, body.trim(), direction)?
    };

    let degrees = if direction.is_negative() {
        -magnitude
    } else {
        magnitude
    };

    Ok((degrees.to_radians(), direction))
}

/// Parses a heading given either as DMS fields or as a plain decimal number of degrees.
///
/// Unlike [`parse_dms`] the text carries no compass letter. A sign on the degrees field negates
/// the whole angle, so `-45 30 0` is -45.5°; minutes and seconds must be unsigned.
pub fn parse_heading(text: &str) -> Result<Radians, SphereNavError> {
    let fields = split_fields(text);
    let degrees = match fields.len() {
        3 => from_fields(text, &fields)?,
        1 => Degrees(parse_number(text, fields[0])?),
        0 => return Err(invalid_format(text, "empty heading")),
        _ => return Err(invalid_format(text, "expected a number or three DMS fields")),
    };

    Ok(degrees.to_radians())
}

fn from_fields(input: &str, fields: &[&str]) -> Result<Degrees, SphereNavError> {
    let [degrees, minutes, seconds] = fields else {
        return Err(invalid_format(input, "expected three DMS fields"));
    };
    if minutes.starts_with(['-', '+']) || seconds.starts_with(['-', '+']) {
        return Err(invalid_format(input, "only the degrees field may carry a sign"));
    }

    Ok(Degrees::from_dms(
        parse_number(input, degrees)?,
        parse_number(input, minutes)?,
        parse_number(input, seconds)?,
    ))
}

fn parse_fixed_width(
    input: &str,
    body: &str,
    direction: Direction,
) -> Result<Degrees, SphereNavError> {
    if body.is_empty() {
        return Err(invalid_format(input, "no numeral before the compass direction"));
    }
    if !body.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(invalid_format(input, "unexpected character in numeral"));
    }

    let padded = if direction.is_latitude() {
        format!("0{body}")
    } else {
        body.to_string()
    };

    if padded.len() < 5 {
        return Err(invalid_format(input, "numeral too short for degrees and minutes"));
    }

    let (degrees, rest) = padded.split_at(3);
    let (minutes, seconds) = rest.split_at(2);
    if !degrees.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid_format(input, "degrees and minutes must be digits"));
    }

    let seconds = if seconds.is_empty() {
        0.0
    } else {
        parse_number(input, seconds)?
    };

    Ok(Degrees::from_dms(
        parse_number(input, degrees)?,
        parse_number(input, minutes)?,
        seconds,
    ))
}

fn parse_number(input: &str, field: &str) -> Result<f64, SphereNavError> {
    match field.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(invalid_format(input, "value is not finite")),
        Err(_) => Err(invalid_format(input, "not a number")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    const ARCSECOND: f64 = 4.85e-6;

    fn deg(value: f64) -> Radians {
        Degrees(value).to_radians()
    }

    #[test]
    fn separated_fields() {
        let expected = deg(51.0 + 28.0 / 60.0 + 39.0 / 3600.0);
        for text in [
            "51 28 39N",
            "51:28:39N",
            "51,28,39 N",
            "51°28'39\"N",
            "51°28′39″N",
            "051°28′39″n",
        ] {
            assert_abs_diff_eq!(parse_dms(text).unwrap(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn fixed_width_matches_separated() {
        assert_abs_diff_eq!(
            parse_dms("512839N").unwrap(),
            parse_dms("51°28'39\"N").unwrap(),
            epsilon = ARCSECOND
        );
    }

    #[test]
    fn fixed_width_longitude_is_not_padded() {
        let expected = -deg(27.0 / 60.0 + 41.0 / 3600.0);
        assert_abs_diff_eq!(parse_dms("0002741W").unwrap(), expected, epsilon = 1e-12);
        assert_abs_diff_eq!(
            parse_dms("0022147E").unwrap(),
            deg(2.0 + 21.0 / 60.0 + 47.0 / 3600.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn fixed_width_fractional_and_missing_seconds() {
        assert_abs_diff_eq!(
            parse_dms("512839.5S").unwrap(),
            -deg(51.0 + 28.0 / 60.0 + 39.5 / 3600.0),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            parse_dms("5128N").unwrap(),
            deg(51.0 + 28.0 / 60.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn fixed_width_minutes_are_not_range_checked() {
        assert_abs_diff_eq!(
            parse_dms("0017500E").unwrap(),
            deg(1.0 + 75.0 / 60.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn south_and_west_are_negative() {
        let (angle, direction) = parse_directed("10 30 0 s").unwrap();
        assert_eq!(direction, Direction::South);
        assert_abs_diff_eq!(angle, deg(-10.5), epsilon = 1e-12);

        let (angle, direction) = parse_directed("10 30 0 W").unwrap();
        assert_eq!(direction, Direction::West);
        assert_abs_diff_eq!(angle, deg(-10.5), epsilon = 1e-12);
    }

    #[test]
    fn missing_direction() {
        assert_matches!(
            parse_dms("512839"),
            Err(SphereNavError::InvalidDirection {
                found: Some('9'),
                ..
            })
        );
        assert_matches!(
            parse_dms(""),
            Err(SphereNavError::InvalidDirection { found: None, .. })
        );
        assert_matches!(
            parse_dms("51 28 39 X"),
            Err(SphereNavError::InvalidDirection {
                found: Some('X'),
                ..
            })
        );
    }

    #[test]
    fn malformed_body() {
        assert_matches!(
            parse_dms("51 xx 39N"),
            Err(SphereNavError::InvalidAngleFormat { .. })
        );
        assert_matches!(
            parse_dms("51.5N"),
            Err(SphereNavError::InvalidAngleFormat { .. })
        );
        assert_matches!(parse_dms("N"), Err(SphereNavError::InvalidAngleFormat { .. }));
        assert_matches!(
            parse_dms("12E"),
            Err(SphereNavError::InvalidAngleFormat { .. })
        );
        assert_matches!(
            parse_dms("-51 28 39N"),
            Err(SphereNavError::InvalidAngleFormat { .. })
        );
    }

    #[test]
    fn heading_decimal_and_dms() {
        assert_abs_diff_eq!(parse_heading("90").unwrap(), deg(90.0), epsilon = 1e-12);
        assert_abs_diff_eq!(parse_heading(" 45.5° ").unwrap(), deg(45.5), epsilon = 1e-12);
        assert_abs_diff_eq!(parse_heading("-45").unwrap(), deg(-45.0), epsilon = 1e-12);
        assert_abs_diff_eq!(
            parse_heading("045°30′36″").unwrap(),
            deg(45.51),
            epsilon = 1e-12
        );
    }

    #[test]
    fn signed_dms_heading() {
        assert_abs_diff_eq!(parse_heading("-45 30 0").unwrap(), deg(-45.5), epsilon = 1e-12);
        assert_abs_diff_eq!(parse_heading("+45 30 0").unwrap(), deg(45.5), epsilon = 1e-12);
        assert_abs_diff_eq!(parse_heading("-0 30 0").unwrap(), deg(-0.5), epsilon = 1e-12);
        assert_matches!(
            parse_heading("-45 -30 0"),
            Err(SphereNavError::InvalidAngleFormat { .. })
        );
        assert_matches!(
            parse_heading("45 30 +10"),
            Err(SphereNavError::InvalidAngleFormat { .. })
        );
    }

    #[test]
    fn heading_rejects_garbage() {
        assert_matches!(
            parse_heading("north"),
            Err(SphereNavError::InvalidAngleFormat { .. })
        );
        assert_matches!(parse_heading(""), Err(SphereNavError::InvalidAngleFormat { .. }));
        assert_matches!(
            parse_heading("10 20"),
            Err(SphereNavError::InvalidAngleFormat { .. })
        );
        assert_matches!(
            parse_heading("inf"),
            Err(SphereNavError::InvalidAngleFormat { .. })
        );
    }
}
