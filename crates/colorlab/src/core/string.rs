use crate::error::ColorFormatError;
use crate::Float;

/// Parse a 24-bit color in hexadecimal format. If successful, this function
/// returns the three coordinates as unsigned bytes.
///
/// The leading `#` is optional. Six digits are always accepted, three digits
/// only if `allow_short` is set, in which case each digit is doubled. Case
/// does not matter.
pub(crate) fn parse_hex(s: &str, allow_short: bool) -> Result<[u8; 3], ColorFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 && !(allow_short && digits.len() == 3) {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        // from_str_radix tolerates a leading plus sign, hex digits do not.
        if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorFormatError::MalformedHex);
        }
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

// --------------------------------------------------------------------------------------------------------------------

/// The functional notations recognized by the strict parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Notation {
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    Cmyk,
    Hsv,
}

/// The lexical form of a single coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Unit {
    /// A bare integer.
    Integer,
    /// An integer followed by a mandatory `%`.
    Percent,
    /// An integer followed by an optional `°`.
    Degree,
    /// A decimal number.
    Alpha,
}

impl Notation {
    // Longer names come first, since `rgb` is a prefix of `rgba`.
    const ALL: [(&'static str, Notation); 6] = [
        ("rgba", Notation::Rgba),
        ("rgb", Notation::Rgb),
        ("hsla", Notation::Hsla),
        ("hsl", Notation::Hsl),
        ("cmyk", Notation::Cmyk),
        ("hsv", Notation::Hsv),
    ];

    fn units(&self) -> &'static [Unit] {
        use Unit::*;

        match *self {
            Self::Rgb => &[Integer, Integer, Integer],
            Self::Rgba => &[Integer, Integer, Integer, Alpha],
            Self::Hsl => &[Degree, Percent, Percent],
            Self::Hsla => &[Degree, Percent, Percent, Alpha],
            Self::Cmyk => &[Percent, Percent, Percent, Percent],
            Self::Hsv => &[Degree, Percent, Percent],
        }
    }
}

fn parse_coordinate(s: Option<&str>, unit: Unit) -> Result<Float, ColorFormatError> {
    let t = s.map(str::trim).ok_or(ColorFormatError::MissingCoordinate)?;
    if t.is_empty() {
        return Err(ColorFormatError::MissingCoordinate);
    }

    let digits = match unit {
        Unit::Alpha => {
            return t.parse().map_err(|_| ColorFormatError::MalformedNumber);
        }
        Unit::Integer => t,
        Unit::Percent => t.strip_suffix('%').ok_or(ColorFormatError::MissingUnit)?,
        Unit::Degree => t.strip_suffix('°').unwrap_or(t).trim_end(),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ColorFormatError::MalformedNumber);
    } else if 3 < digits.len() {
        return Err(ColorFormatError::OversizedCoordinate);
    }

    digits
        .parse::<u16>()
        .map(Float::from)
        .map_err(|_| ColorFormatError::MalformedNumber)
}

/// Parse a color in functional notation.
///
/// This function recognizes `rgb()`, `rgba()`, `hsl()`, `hsla()`, `cmyk()`,
/// and `hsv()` with comma-separated arguments. Integer coordinates have one to
/// three digits, saturation, lightness, value, and all CMYK components carry a
/// `%`, the hue may carry a `°`, and alpha is a decimal number. The string must
/// already be trimmed and lowercased. Coordinates are returned as written,
/// i.e., without clamping.
pub(crate) fn parse_function(s: &str) -> Result<(Notation, Vec<Float>), ColorFormatError> {
    // Munge function name
    let (notation, rest) = Notation::ALL
        .iter()
        .find_map(|&(name, notation)| s.strip_prefix(name).map(|r| (notation, r)))
        .ok_or(ColorFormatError::UnknownFormat)?;

    // Munge parentheses after trimming leading whitespace
    let body = rest
        .trim_start()
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)
        .and_then(|rest| {
            rest.strip_suffix(')')
                .ok_or(ColorFormatError::NoClosingParenthesis)
        })?;

    // Munge coordinates
    let mut iter = body.split(',');
    let coordinates = notation
        .units()
        .iter()
        .map(|unit| parse_coordinate(iter.next(), *unit))
        .collect::<Result<Vec<_>, _>>()?;
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    Ok((notation, coordinates))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse_function, parse_hex, ColorFormatError, Notation};

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("#1e88e5", false)?, [0x1e, 0x88, 0xe5]);
        assert_eq!(parse_hex("1E88E5", false)?, [0x1e, 0x88, 0xe5]);
        assert_eq!(parse_hex("#123", true)?, [0x11, 0x22, 0x33]);
        assert_eq!(
            parse_hex("#123", false),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hex("#1e88e", false),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hex("##1e88e5", false),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hex("#💩00", true),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(parse_hex("#0g0", true), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("+1+2+3", false), Err(ColorFormatError::MalformedHex));

        Ok(())
    }

    #[test]
    fn test_parse_function() {
        assert_eq!(
            parse_function("rgb(30, 136, 229)"),
            Ok((Notation::Rgb, vec![30.0, 136.0, 229.0]))
        );
        assert_eq!(
            parse_function("rgba(30,136,229,0.5)"),
            Ok((Notation::Rgba, vec![30.0, 136.0, 229.0, 0.5]))
        );
        assert_eq!(
            parse_function("hsl (210, 82%, 51%)"),
            Ok((Notation::Hsl, vec![210.0, 82.0, 51.0]))
        );
        assert_eq!(
            parse_function("hsla(210, 82%, 51%, .25)"),
            Ok((Notation::Hsla, vec![210.0, 82.0, 51.0, 0.25]))
        );
        assert_eq!(
            parse_function("cmyk(87%, 41%, 0%, 10%)"),
            Ok((Notation::Cmyk, vec![87.0, 41.0, 0.0, 10.0]))
        );
        assert_eq!(
            parse_function("hsv(210°, 87%, 90%)"),
            Ok((Notation::Hsv, vec![210.0, 87.0, 90.0]))
        );

        assert_eq!(
            parse_function("lab(1, 2, 3)"),
            Err(ColorFormatError::UnknownFormat)
        );
        assert_eq!(
            parse_function("rgb 1, 2, 3)"),
            Err(ColorFormatError::NoOpeningParenthesis)
        );
        assert_eq!(
            parse_function("rgb(1, 2, 3"),
            Err(ColorFormatError::NoClosingParenthesis)
        );
        assert_eq!(
            parse_function("rgb(1, 2)"),
            Err(ColorFormatError::MissingCoordinate)
        );
        assert_eq!(
            parse_function("rgb(1, , 3)"),
            Err(ColorFormatError::MissingCoordinate)
        );
        assert_eq!(
            parse_function("rgb(1, 2, 3, 4)"),
            Err(ColorFormatError::TooManyCoordinates)
        );
        assert_eq!(
            parse_function("rgb(1234, 2, 3)"),
            Err(ColorFormatError::OversizedCoordinate)
        );
        assert_eq!(
            parse_function("rgb(1.5, 2, 3)"),
            Err(ColorFormatError::MalformedNumber)
        );
        assert_eq!(
            parse_function("hsl(210, 82, 51%)"),
            Err(ColorFormatError::MissingUnit)
        );
        assert_eq!(
            parse_function("rgba(1, 2, 3, 0..5)"),
            Err(ColorFormatError::MalformedNumber)
        );
    }
}
