//! Utility module for detecting the format of free-form color input.
//!
//! Unlike the strict [`ColorValue`] parser, [`detect`] is forgiving: It looks
//! for a format's name anywhere in the input and then picks up numbers as they
//! come. It also recognizes bare hexadecimal digits, comma-separated RGB
//! triplets, and a handful of color names.
//!
//! ```
//! # use colorlab::{detect::{detect, ColorFormat}, ColorFormatError, Rgb};
//! let detection = detect("HSL 0, 100, 50")?;
//! assert_eq!(detection.format(), ColorFormat::Hsl);
//! assert_eq!(detection.rgb(), Rgb::new(255, 0, 0));
//! assert_eq!(detection.to_string(), "Detected HSL format: hsl(0, 100%, 50%)");
//! # Ok::<(), ColorFormatError>(())
//! ```
use std::sync::LazyLock;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use regex::Regex;

use crate::core::{clamp_alpha, parse_hex};
use crate::error::ColorFormatError;
use crate::{Cmyk, ColorValue, Float, Hsl, Hsla, Hsv, Rgb, Rgba};

/// Numeric tokens, with or without decimal point.
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d*\.?\d+").expect("number regex should compile"));

/// The color names recognized by [`detect`].
pub const NAMED_COLORS: [(&str, Rgb); 15] = [
    ("red", Rgb::new(255, 0, 0)),
    ("green", Rgb::new(0, 255, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("black", Rgb::new(0, 0, 0)),
    ("white", Rgb::new(255, 255, 255)),
    ("gray", Rgb::new(128, 128, 128)),
    ("purple", Rgb::new(128, 0, 128)),
    ("orange", Rgb::new(255, 165, 0)),
    ("pink", Rgb::new(255, 192, 203)),
    ("brown", Rgb::new(165, 42, 42)),
    ("teal", Rgb::new(0, 128, 128)),
    ("navy", Rgb::new(0, 0, 128)),
];

/// The format of a successfully detected color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    Hex,
    Hsl,
    Hsla,
    Rgb,
    Rgba,
    Cmyk,
    Hsv,
    /// Three comma-separated integers without function name.
    RgbValues,
    /// One of the [`NAMED_COLORS`].
    Name,
}

impl ColorFormat {
    /// Get this format's human-readable name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Hex => "HEX",
            Self::Hsl => "HSL",
            Self::Hsla => "HSLA",
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::Cmyk => "CMYK",
            Self::Hsv => "HSV",
            Self::RgbValues => "RGB values",
            Self::Name => "color name",
        }
    }
}

/// The result of successful detection.
///
/// Displaying a detection produces a message suitable for users, e.g.,
/// `Detected RGB format: rgb(30, 136, 229)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detection {
    format: ColorFormat,
    value: ColorValue,
    name: Option<&'static str>,
}

impl Detection {
    fn new(format: ColorFormat, value: ColorValue) -> Self {
        Self {
            format,
            value,
            name: None,
        }
    }

    /// Get the detected format.
    pub const fn format(&self) -> ColorFormat {
        self.format
    }

    /// Get the detected value, after clamping.
    pub const fn value(&self) -> ColorValue {
        self.value
    }

    /// Get the detected color. Any alpha is ignored.
    pub fn rgb(&self) -> Rgb {
        self.value.to_rgb()
    }

    /// Get the detected alpha, if any.
    pub fn alpha(&self) -> Option<Float> {
        self.value.alpha()
    }
}

impl std::fmt::Display for Detection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.format, self.name) {
            (ColorFormat::Name, Some(name)) => write!(f, "Detected color name: {}", name),
            (ColorFormat::RgbValues, _) => {
                let rgb = self.rgb();
                write!(
                    f,
                    "Detected RGB values: {}, {}, {}",
                    rgb.r(),
                    rgb.g(),
                    rgb.b()
                )
            }
            (format, _) => write!(f, "Detected {} format: {}", format.name(), self.value),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

fn numbers(s: &str) -> Vec<Float> {
    NUMBER
        .find_iter(s)
        .filter_map(|m| m.as_str().parse::<Float>().ok())
        .collect()
}

#[inline]
fn int(n: Float) -> i64 {
    n.round() as i64
}

fn detect_hex(s: &str) -> Option<Detection> {
    let bare = (3..=6).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_hexdigit());
    if !s.starts_with('#') && !bare {
        return None;
    }

    parse_hex(s, true)
        .ok()
        .map(|c| Detection::new(ColorFormat::Hex, ColorValue::Hex(Rgb::from(c))))
}

fn detect_function(s: &str) -> Option<Detection> {
    let n = numbers(s);

    if s.contains("hsla") {
        if let [h, sat, l, alpha, ..] = n[..] {
            let hsl = Hsl::clamped(int(h), int(sat), int(l));
            let value = ColorValue::Hsla(Hsla::new(hsl, clamp_alpha(alpha)));
            return Some(Detection::new(ColorFormat::Hsla, value));
        }
    } else if s.contains("hsl") {
        if let [h, sat, l, ..] = n[..] {
            let value = ColorValue::Hsl(Hsl::clamped(int(h), int(sat), int(l)));
            return Some(Detection::new(ColorFormat::Hsl, value));
        }
    }

    if s.contains("rgba") {
        if let [r, g, b, alpha, ..] = n[..] {
            let rgb = Rgb::clamped(int(r), int(g), int(b));
            let value = ColorValue::Rgba(Rgba::new(rgb, clamp_alpha(alpha)));
            return Some(Detection::new(ColorFormat::Rgba, value));
        }
    } else if s.contains("rgb") {
        if let [r, g, b, ..] = n[..] {
            let value = ColorValue::Rgb(Rgb::clamped(int(r), int(g), int(b)));
            return Some(Detection::new(ColorFormat::Rgb, value));
        }
    }

    if s.contains("cmyk") {
        if let [c, m, y, k, ..] = n[..] {
            let value = ColorValue::Cmyk(Cmyk::clamped(int(c), int(m), int(y), int(k)));
            return Some(Detection::new(ColorFormat::Cmyk, value));
        }
    }

    if s.contains("hsv") {
        if let [h, sat, v, ..] = n[..] {
            let value = ColorValue::Hsv(Hsv::clamped(int(h), int(sat), int(v)));
            return Some(Detection::new(ColorFormat::Hsv, value));
        }
    }

    None
}

fn detect_triplet(s: &str) -> Option<Detection> {
    if !s.contains(',') {
        return None;
    }

    let parts = s
        .split(',')
        .map(|part| part.trim().parse::<u8>().ok())
        .collect::<Option<Vec<_>>>()?;
    if let [r, g, b] = parts[..] {
        let value = ColorValue::Rgb(Rgb::new(r, g, b));
        Some(Detection::new(ColorFormat::RgbValues, value))
    } else {
        None
    }
}

fn detect_name(s: &str) -> Option<Detection> {
    NAMED_COLORS
        .iter()
        .find(|&&(name, _)| name == s)
        .map(|&(name, rgb)| Detection {
            format: ColorFormat::Name,
            value: ColorValue::Hex(rgb),
            name: Some(name),
        })
}

/// Detect the format of the given color input.
///
/// This function trims and lowercases the input before trying, in order, hex
/// notation with three or six digits, a function name (`hsla`, `hsl`, `rgba`,
/// `rgb`, `cmyk`, or `hsv`) contained anywhere in the input followed by enough
/// numbers, three comma-separated integers in `0..=255`, and one of the
/// [`NAMED_COLORS`]. Numbers are clamped to their ranges. If nothing matches,
/// this function returns [`ColorFormatError::UnknownFormat`].
pub fn detect(input: &str) -> Result<Detection, ColorFormatError> {
    let value = input.trim().to_lowercase();
    if value.is_empty() {
        log::debug!("empty color input");
        return Err(ColorFormatError::EmptyInput);
    }

    let detection = detect_hex(&value)
        .or_else(|| detect_function(&value))
        .or_else(|| detect_triplet(&value))
        .or_else(|| detect_name(&value));

    let Some(detection) = detection else {
        log::debug!("unknown color format {:?}", input);
        return Err(ColorFormatError::UnknownFormat);
    };

    log::debug!("{} from {:?}", detection, input);
    Ok(detection)
}

/// Detect the color in the given input and return it as hexadecimal string.
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "detect")]
pub fn py_detect(input: &str) -> Result<String, ColorFormatError> {
    detect(input).map(|detection| detection.rgb().to_string())
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{detect, ColorFormat};
    use crate::error::ColorFormatError;
    use crate::Rgb;

    #[test]
    fn test_detect_hex() -> Result<(), ColorFormatError> {
        let detection = detect("#1E88E5")?;
        assert_eq!(detection.format(), ColorFormat::Hex);
        assert_eq!(detection.rgb(), Rgb::new(30, 136, 229));
        assert_eq!(detection.to_string(), "Detected HEX format: #1e88e5");

        assert_eq!(detect("abc")?.rgb(), Rgb::new(0xaa, 0xbb, 0xcc));
        assert_eq!(detect("  1e88e5 ")?.rgb(), Rgb::new(30, 136, 229));
        assert_eq!(detect("bad")?.format(), ColorFormat::Hex);
        Ok(())
    }

    #[test]
    fn test_detect_functions() -> Result<(), ColorFormatError> {
        let detection = detect("rgb(30, 136, 229)")?;
        assert_eq!(detection.format(), ColorFormat::Rgb);
        assert_eq!(detection.rgb().to_string(), "#1e88e5");
        assert_eq!(detection.alpha(), None);

        let detection = detect("rgba(30,136,229,0.5)")?;
        assert_eq!(detection.format(), ColorFormat::Rgba);
        assert_eq!(detection.rgb().to_string(), "#1e88e5");
        assert_eq!(detection.alpha(), Some(0.5));
        assert_eq!(
            detection.to_string(),
            "Detected RGBA format: rgba(30, 136, 229, 0.50)"
        );

        let detection = detect("hsla(0, 100%, 50%, .25)")?;
        assert_eq!(detection.format(), ColorFormat::Hsla);
        assert_eq!(detection.rgb(), Rgb::new(255, 0, 0));
        assert_eq!(detection.alpha(), Some(0.25));

        assert_eq!(detect("rgb(300, 0, 0)")?.rgb(), Rgb::new(255, 0, 0));
        assert_eq!(
            detect("cmyk(0%, 100%, 100%, 0%)")?.rgb(),
            Rgb::new(255, 0, 0)
        );
        assert_eq!(detect("hsv(120°, 100%, 100%)")?.rgb(), Rgb::new(0, 255, 0));
        assert_eq!(detect("HSL 0 0 100")?.rgb(), Rgb::new(255, 255, 255));
        Ok(())
    }

    #[test]
    fn test_detect_other() -> Result<(), ColorFormatError> {
        let detection = detect("30, 136, 229")?;
        assert_eq!(detection.format(), ColorFormat::RgbValues);
        assert_eq!(detection.rgb(), Rgb::new(30, 136, 229));
        assert_eq!(detection.to_string(), "Detected RGB values: 30, 136, 229");

        let detection = detect("Teal")?;
        assert_eq!(detection.format(), ColorFormat::Name);
        assert_eq!(detection.rgb(), Rgb::new(0, 128, 128));
        assert_eq!(detection.to_string(), "Detected color name: teal");
        Ok(())
    }

    #[test]
    fn test_detect_failure() {
        assert_eq!(detect(""), Err(ColorFormatError::EmptyInput));
        assert_eq!(detect("   "), Err(ColorFormatError::EmptyInput));
        assert_eq!(detect("notacolor"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(detect("#ggg"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(detect("rgb(1, 2)"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(detect("1, 2, 256"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(detect("1, 2, 3, 4"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(
            detect("notacolor").map_err(|e| e.to_string()),
            Err("could not detect the color format, please try a different format".to_string())
        );
    }
}
