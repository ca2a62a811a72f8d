//! Utility module implementing the integer color models of design tools.
//!
//! Unlike high-resolution color libraries, design tools display and edit
//! colors as small integers: 8-bit RGB channels, hue in whole degrees, and
//! everything else in whole percent. This module provides one value type per
//! model, [`Rgb`], [`Rgba`], [`Hsl`], [`Hsla`], [`Cmyk`], and [`Hsv`], with
//! `From` conversions between [`Rgb`] and every other model. Constructors
//! clamp their arguments, so values are always within range. The
//! [`ColorValue`] enumeration combines all of them as the result of parsing a
//! string.
use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    clamp_alpha, clamp_to, cmyk_to_rgb, hsl_to_rgb, hsv_to_rgb, parse_function, parse_hex,
    rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv, to_contrast_ratio, to_relative_luminance, Notation,
};
use crate::error::ColorFormatError;
use crate::Float;

/// Normalize a hue in degrees, clamping to `0..=360` and treating 360 as 0.
#[inline]
fn clamp_hue(h: i64) -> u16 {
    (h.clamp(0, 360) % 360) as u16
}

// ====================================================================================================================
// Rgb
// ====================================================================================================================

/// A 24-bit RGB color.
///
/// This is the hub of all conversions: Every other color model converts from
/// and to `Rgb`. Displaying an RGB color produces the lowercase hashed
/// hexadecimal format, e.g., `#1e88e5`. Parsing a string with
/// [`Rgb::from_hex`] or [`str::parse`] accepts exactly six hexadecimal digits
/// with an optional leading `#`.
///
/// ```
/// # use colorlab::{ColorFormatError, Rgb};
/// let blue: Rgb = "#1E88E5".parse()?;
/// assert_eq!(blue, Rgb::new(30, 136, 229));
/// assert_eq!(blue.to_string(), "#1e88e5");
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "colorlab"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Create a new RGB color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Create a new RGB color from possibly out-of-range coordinates, clamping
    /// each to `0..=255`.
    pub fn clamped(r: i64, g: i64, b: i64) -> Self {
        Self([clamp_to(r, 255), clamp_to(g, 255), clamp_to(b, 255)])
    }

    /// Parse a color in hexadecimal format.
    ///
    /// The string must have exactly six hexadecimal digits, optionally
    /// preceded by `#`. Case does not matter.
    pub fn from_hex(s: &str) -> Result<Self, ColorFormatError> {
        parse_hex(s, false).map(Self)
    }

    /// Get the red coordinate.
    pub const fn r(&self) -> u8 {
        self.0[0]
    }

    /// Get the green coordinate.
    pub const fn g(&self) -> u8 {
        self.0[1]
    }

    /// Get the blue coordinate.
    pub const fn b(&self) -> u8 {
        self.0[2]
    }

    /// Compute this color's WCAG relative luminance, which ranges `0..=1`.
    pub fn relative_luminance(&self) -> Float {
        to_relative_luminance(&self.0)
    }

    /// Compute the WCAG contrast ratio between this and the other color.
    ///
    /// The ratio is symmetric and ranges from 1 for identical luminance to 21
    /// for black and white.
    pub fn contrast_ratio(&self, other: &Rgb) -> Float {
        to_contrast_ratio(self.relative_luminance(), other.relative_luminance())
    }

    /// Compute the squared Euclidian distance between this and the other color
    /// in RGB space.
    pub fn distance_squared(&self, other: &Rgb) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(c1, c2)| {
                let delta = c1.abs_diff(*c2) as u32;
                delta * delta
            })
            .sum()
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Rgb {
    /// Create a new RGB color from its coordinates. <i
    /// class=python-only>Python only!</i>
    #[new]
    pub const fn py_new(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b)
    }

    /// Parse a color in hexadecimal format. <i class=python-only>Python
    /// only!</i>
    #[staticmethod]
    #[pyo3(name = "from_hex")]
    pub fn py_from_hex(s: &str) -> Result<Self, ColorFormatError> {
        Self::from_hex(s)
    }

    /// Access this color's coordinates. <i class=python-only>Python only!</i>
    pub fn coordinates(&self) -> [u8; 3] {
        self.0
    }

    /// Compute the WCAG contrast ratio. <i class=python-only>Python only!</i>
    #[pyo3(name = "contrast_ratio")]
    pub fn py_contrast_ratio(&self, other: &Rgb) -> Float {
        self.contrast_ratio(other)
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("Rgb({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }

    /// Convert this color to hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl FromStr for Rgb {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

#[cfg(feature = "state")]
impl serde::Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "state")]
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ====================================================================================================================
// Rgba
// ====================================================================================================================

/// A 24-bit RGB color with alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    rgb: Rgb,
    alpha: Float,
}

impl Rgba {
    /// Create a new RGBA color. The alpha is clamped to `0..=1`.
    pub fn new(rgb: Rgb, alpha: Float) -> Self {
        Self {
            rgb,
            alpha: clamp_alpha(alpha),
        }
    }

    /// Get the opaque color.
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Get the alpha.
    pub const fn alpha(&self) -> Float {
        self.alpha
    }
}

impl From<Rgb> for Rgba {
    fn from(value: Rgb) -> Self {
        Self::new(value, 1.0)
    }
}

impl From<Rgba> for Rgb {
    fn from(value: Rgba) -> Self {
        value.rgb
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.rgb.0;
        write!(f, "rgba({}, {}, {}, {:.2})", r, g, b, self.alpha)
    }
}

// ====================================================================================================================
// Hsl
// ====================================================================================================================

/// An HSL color with hue in degrees and saturation and lightness in percent.
///
/// ```
/// # use colorlab::{Hsl, Rgb};
/// let hsl = Hsl::from(Rgb::new(30, 136, 229));
/// assert_eq!(hsl.to_string(), "hsl(208, 79%, 51%)");
/// assert_eq!(Rgb::from(Hsl::new(0, 100, 50)), Rgb::new(255, 0, 0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hsl {
    h: u16,
    s: u8,
    l: u8,
}

impl Hsl {
    /// Create a new HSL color. The hue wraps around at 360 degrees, saturation
    /// and lightness are capped at 100.
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h % 360,
            s: if s > 100 { 100 } else { s },
            l: if l > 100 { 100 } else { l },
        }
    }

    /// Create a new HSL color from possibly out-of-range coordinates. The hue
    /// is clamped to `0..=360`, with 360 denoting the same hue as 0, and
    /// saturation and lightness to `0..=100`.
    pub fn clamped(h: i64, s: i64, l: i64) -> Self {
        Self {
            h: clamp_hue(h),
            s: clamp_to(s, 100),
            l: clamp_to(l, 100),
        }
    }

    /// Get the hue.
    pub const fn h(&self) -> u16 {
        self.h
    }

    /// Get the saturation.
    pub const fn s(&self) -> u8 {
        self.s
    }

    /// Get the lightness.
    pub const fn l(&self) -> u8 {
        self.l
    }

    /// Rotate the hue by the given number of degrees, which may be negative.
    #[must_use = "method returns a new color and does not mutate the original value"]
    pub fn rotate(&self, degrees: i64) -> Self {
        Self {
            h: ((self.h as i64 + degrees.rem_euclid(360)) % 360) as u16,
            ..*self
        }
    }

    /// Replace the lightness, clamping it to `0..=100`.
    #[must_use = "method returns a new color and does not mutate the original value"]
    pub fn with_lightness(&self, l: i64) -> Self {
        Self {
            l: clamp_to(l, 100),
            ..*self
        }
    }

    fn coordinates(&self) -> [Float; 3] {
        [self.h as Float, self.s as Float, self.l as Float]
    }
}

impl From<Rgb> for Hsl {
    fn from(value: Rgb) -> Self {
        let [h, s, l] = rgb_to_hsl(&value.0);
        Self::clamped(h.round() as i64, s.round() as i64, l.round() as i64)
    }
}

impl From<Hsl> for Rgb {
    fn from(value: Hsl) -> Self {
        Self(hsl_to_rgb(&value.coordinates()))
    }
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

// ====================================================================================================================
// Hsla
// ====================================================================================================================

/// An HSL color with alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    hsl: Hsl,
    alpha: Float,
}

impl Hsla {
    /// Create a new HSLA color. The alpha is clamped to `0..=1`.
    pub fn new(hsl: Hsl, alpha: Float) -> Self {
        Self {
            hsl,
            alpha: clamp_alpha(alpha),
        }
    }

    /// Get the opaque color.
    pub const fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// Get the alpha.
    pub const fn alpha(&self) -> Float {
        self.alpha
    }
}

impl From<Hsla> for Rgb {
    fn from(value: Hsla) -> Self {
        Rgb::from(value.hsl)
    }
}

impl std::fmt::Display for Hsla {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Hsl { h, s, l } = self.hsl;
        write!(f, "hsla({}, {}%, {}%, {:.2})", h, s, l, self.alpha)
    }
}

// ====================================================================================================================
// Cmyk
// ====================================================================================================================

/// A CMYK color with all components in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cmyk {
    c: u8,
    m: u8,
    y: u8,
    k: u8,
}

impl Cmyk {
    /// Create a new CMYK color from possibly out-of-range components, clamping
    /// each to `0..=100`.
    pub fn clamped(c: i64, m: i64, y: i64, k: i64) -> Self {
        Self {
            c: clamp_to(c, 100),
            m: clamp_to(m, 100),
            y: clamp_to(y, 100),
            k: clamp_to(k, 100),
        }
    }

    /// Get the components in cyan, magenta, yellow, key order.
    pub const fn components(&self) -> [u8; 4] {
        [self.c, self.m, self.y, self.k]
    }
}

impl From<Rgb> for Cmyk {
    fn from(value: Rgb) -> Self {
        let [c, m, y, k] = rgb_to_cmyk(&value.0).map(|c| c.round() as i64);
        Self::clamped(c, m, y, k)
    }
}

impl From<Cmyk> for Rgb {
    fn from(value: Cmyk) -> Self {
        Self(cmyk_to_rgb(&value.components().map(Float::from)))
    }
}

impl std::fmt::Display for Cmyk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cmyk({}%, {}%, {}%, {}%)",
            self.c, self.m, self.y, self.k
        )
    }
}

// ====================================================================================================================
// Hsv
// ====================================================================================================================

/// An HSV color with hue in degrees and saturation and value in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hsv {
    h: u16,
    s: u8,
    v: u8,
}

impl Hsv {
    /// Create a new HSV color from possibly out-of-range coordinates. The hue
    /// is clamped to `0..=360`, with 360 denoting the same hue as 0, and
    /// saturation and value to `0..=100`.
    pub fn clamped(h: i64, s: i64, v: i64) -> Self {
        Self {
            h: clamp_hue(h),
            s: clamp_to(s, 100),
            v: clamp_to(v, 100),
        }
    }

    /// Get the hue.
    pub const fn h(&self) -> u16 {
        self.h
    }

    /// Get the saturation.
    pub const fn s(&self) -> u8 {
        self.s
    }

    /// Get the value.
    pub const fn v(&self) -> u8 {
        self.v
    }
}

impl From<Rgb> for Hsv {
    fn from(value: Rgb) -> Self {
        let [h, s, v] = rgb_to_hsv(&value.0);
        Self::clamped(h.round() as i64, s.round() as i64, v.round() as i64)
    }
}

impl From<Hsv> for Rgb {
    fn from(value: Hsv) -> Self {
        Self(hsv_to_rgb(&[
            value.h as Float,
            value.s as Float,
            value.v as Float,
        ]))
    }
}

impl std::fmt::Display for Hsv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hsv({}°, {}%, {}%)", self.h, self.s, self.v)
    }
}

// ====================================================================================================================
// ColorValue
// ====================================================================================================================

/// A color written in one of the supported formats.
///
/// Parsing a color value is strict: The string must be a hashed hexadecimal
/// color with three or six digits or one of the functional notations
/// `rgb()`, `rgba()`, `hsl()`, `hsla()`, `cmyk()`, and `hsv()` with
/// comma-separated arguments. Saturation, lightness, value, and CMYK
/// components require a `%`, the hue of `hsv()` may carry a `°`. Numbers
/// outside their ranges are clamped. Displaying a color value produces the
/// same format again. For free-form input, use [`detect`](crate::detect::detect)
/// instead.
///
/// ```
/// # use colorlab::{ColorFormatError, ColorValue, Rgb};
/// let value: ColorValue = "hsla(0, 100%, 50%, 0.5)".parse()?;
/// assert_eq!(value.to_rgb(), Rgb::new(255, 0, 0));
/// assert_eq!(value.alpha(), Some(0.5));
/// assert_eq!(value.to_string(), "hsla(0, 100%, 50%, 0.50)");
/// # Ok::<(), ColorFormatError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorValue {
    Hex(Rgb),
    Rgb(Rgb),
    Rgba(Rgba),
    Hsl(Hsl),
    Hsla(Hsla),
    Cmyk(Cmyk),
    Hsv(Hsv),
}

impl ColorValue {
    /// Convert this color value to an opaque RGB color.
    pub fn to_rgb(&self) -> Rgb {
        match *self {
            Self::Hex(rgb) | Self::Rgb(rgb) => rgb,
            Self::Rgba(rgba) => rgba.into(),
            Self::Hsl(hsl) => hsl.into(),
            Self::Hsla(hsla) => hsla.into(),
            Self::Cmyk(cmyk) => cmyk.into(),
            Self::Hsv(hsv) => hsv.into(),
        }
    }

    /// Get the alpha, if this color value has one.
    pub fn alpha(&self) -> Option<Float> {
        match *self {
            Self::Rgba(rgba) => Some(rgba.alpha()),
            Self::Hsla(hsla) => Some(hsla.alpha()),
            _ => None,
        }
    }
}

impl FromStr for ColorValue {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
        let s = lowercase.as_str();

        if s.is_empty() {
            return Err(ColorFormatError::EmptyInput);
        } else if s.starts_with('#') {
            return parse_hex(s, true).map(|c| Self::Hex(Rgb(c)));
        }

        let (notation, coordinates) = parse_function(s)?;
        // Integral coordinates have at most three digits and convert exactly.
        let n = |index: usize| coordinates[index] as i64;

        Ok(match notation {
            Notation::Rgb => Self::Rgb(Rgb::clamped(n(0), n(1), n(2))),
            Notation::Rgba => Self::Rgba(Rgba::new(
                Rgb::clamped(n(0), n(1), n(2)),
                coordinates[3],
            )),
            Notation::Hsl => Self::Hsl(Hsl::clamped(n(0), n(1), n(2))),
            Notation::Hsla => Self::Hsla(Hsla::new(
                Hsl::clamped(n(0), n(1), n(2)),
                coordinates[3],
            )),
            Notation::Cmyk => Self::Cmyk(Cmyk::clamped(n(0), n(1), n(2), n(3))),
            Notation::Hsv => Self::Hsv(Hsv::clamped(n(0), n(1), n(2))),
        })
    }
}

impl std::fmt::Display for ColorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Hex(rgb) => write!(f, "{}", rgb),
            Self::Rgb(rgb) => write!(f, "rgb({}, {}, {})", rgb.r(), rgb.g(), rgb.b()),
            Self::Rgba(rgba) => write!(f, "{}", rgba),
            Self::Hsl(hsl) => write!(f, "{}", hsl),
            Self::Hsla(hsla) => write!(f, "{}", hsla),
            Self::Cmyk(cmyk) => write!(f, "{}", cmyk),
            Self::Hsv(hsv) => write!(f, "{}", hsv),
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Cmyk, ColorValue, Hsl, Hsla, Hsv, Rgb, Rgba};
    use crate::core::assert_within_one;
    use crate::error::ColorFormatError;
    use crate::assert_close_enough;

    #[test]
    fn test_hex() -> Result<(), ColorFormatError> {
        assert_eq!(Rgb::from_hex("#1E88E5")?, Rgb::new(30, 136, 229));
        assert_eq!(Rgb::from_hex("1e88e5")?, Rgb::new(30, 136, 229));
        assert_eq!(
            Rgb::from_hex("#fff"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert!(Rgb::from_hex("#zzzzzz").is_err());
        assert!(Rgb::from_hex("").is_err());

        assert_eq!(Rgb::new(0, 0, 0).to_string(), "#000000");
        assert_eq!(Rgb::new(1, 2, 255).to_string(), "#0102ff");
        Ok(())
    }

    #[test]
    fn test_clamping() {
        assert_eq!(Rgb::clamped(-10, 300, 128), Rgb::new(0, 255, 128));
        assert_eq!(Hsl::clamped(400, 120, -1), Hsl::new(0, 100, 0));
        assert_eq!(Hsl::new(360, 200, 50), Hsl::new(0, 100, 50));
        assert_eq!(Hsv::clamped(360, 50, 50).h(), 0);
        assert_eq!(Cmyk::clamped(101, -1, 50, 50).components(), [100, 0, 50, 50]);
        assert_close_enough!(Rgba::new(Rgb::default(), 7.0).alpha(), 1.0);
    }

    #[test]
    fn test_conversions() {
        let blue = Rgb::new(30, 136, 229);
        assert_eq!(Hsl::from(blue), Hsl::new(208, 79, 51));
        assert_eq!(Hsv::from(blue).to_string(), "hsv(208°, 87%, 90%)");
        assert_eq!(Cmyk::from(blue).to_string(), "cmyk(87%, 41%, 0%, 10%)");
        assert_eq!(Cmyk::from(Rgb::new(0, 0, 0)).components(), [0, 0, 0, 100]);

        assert_within_one!(Rgb::from(Hsl::from(blue)), blue);
        assert_within_one!(Rgb::from(Hsv::from(blue)), blue);
        assert_within_one!(Rgb::from(Cmyk::from(blue)), blue);
    }

    #[test]
    fn test_rotate() {
        let hsl = Hsl::new(350, 50, 50);
        assert_eq!(hsl.rotate(30).h(), 20);
        assert_eq!(hsl.rotate(-360).h(), 350);
        assert_eq!(Hsl::new(10, 50, 50).rotate(-30).h(), 340);
        assert_eq!(hsl.rotate(i64::MAX).h(), 357);
        assert_eq!(hsl.rotate(i64::MIN).h(), 342);
        assert_eq!(hsl.with_lightness(120).l(), 100);
    }

    #[test]
    fn test_contrast() {
        let white = Rgb::new(255, 255, 255);
        let black = Rgb::new(0, 0, 0);
        assert_close_enough!(white.contrast_ratio(&black), 21.0);
        assert_close_enough!(black.contrast_ratio(&white), 21.0);
        assert_close_enough!(white.contrast_ratio(&white), 1.0);
    }

    #[test]
    fn test_color_value() -> Result<(), ColorFormatError> {
        assert_eq!(
            "rgb(30, 136, 229)".parse::<ColorValue>()?.to_rgb(),
            Rgb::new(30, 136, 229)
        );
        assert_eq!(
            " RGB(300, 0, 0) ".parse::<ColorValue>()?,
            ColorValue::Rgb(Rgb::new(255, 0, 0))
        );
        assert_eq!(
            "#abc".parse::<ColorValue>()?,
            ColorValue::Hex(Rgb::new(0xaa, 0xbb, 0xcc))
        );
        assert_eq!(
            "cmyk(0%, 100%, 100%, 0%)".parse::<ColorValue>()?.to_rgb(),
            Rgb::new(255, 0, 0)
        );
        assert_eq!("hsv(120, 100%, 100%)".parse::<ColorValue>()?.alpha(), None);
        assert_eq!("".parse::<ColorValue>(), Err(ColorFormatError::EmptyInput));
        assert_eq!(
            "notacolor".parse::<ColorValue>(),
            Err(ColorFormatError::UnknownFormat)
        );

        // Displayed values parse back into the same value.
        let values = [
            ColorValue::Hex(Rgb::new(1, 2, 3)),
            ColorValue::Rgb(Rgb::new(30, 136, 229)),
            ColorValue::Rgba(Rgba::new(Rgb::new(30, 136, 229), 0.25)),
            ColorValue::Hsl(Hsl::new(208, 79, 51)),
            ColorValue::Hsla(Hsla::new(Hsl::new(208, 79, 51), 1.0)),
            ColorValue::Cmyk(Cmyk::clamped(87, 41, 0, 10)),
            ColorValue::Hsv(Hsv::clamped(208, 87, 90)),
        ];
        for value in values {
            assert_eq!(value.to_string().parse::<ColorValue>()?, value);
        }

        Ok(())
    }
}
