//! Utility module for colors derived from a base color.
//!
//! This module generates tint and shade palettes as well as color harmonies
//! and finds the closest among a small table of named colors. All derived
//! colors are computed in HSL and hence subject to its integer rounding.
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::{Hsl, Rgb};

/// The number of colors in a palette.
pub const PALETTE_SIZE: usize = 19;

/// The index of the base color in a palette.
pub const PALETTE_BASE: usize = 9;

/// Generate the palette for the given base color.
///
/// The palette starts with nine tints, whose HSL lightness exceeds the base
/// color's by 45, 40, …, 5 percentage points but is capped at 95. It continues
/// with the base color itself. It ends with nine shades, whose lightness is
/// lower by 5, 10, …, 45 points but at least 5. Hence palettes run from light
/// to dark.
pub fn generate_palette(base: Rgb) -> [Rgb; PALETTE_SIZE] {
    let hsl = Hsl::from(base);
    let lightness = hsl.l() as i64;
    let mut palette = [base; PALETTE_SIZE];

    for step in 1..=9 {
        let delta = 5 * step as i64;
        palette[PALETTE_BASE - step] = hsl.with_lightness((lightness + delta).min(95)).into();
        palette[PALETTE_BASE + step] = hsl.with_lightness((lightness - delta).max(5)).into();
    }

    palette
}

/// Generate the palette for the given hexadecimal color.
///
/// This function returns the palette's colors in lowercase hashed hexadecimal
/// notation. If the color does not have exactly six hexadecimal digits, it
/// returns an empty vector.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn generate_palette_hex(hex: &str) -> Vec<String> {
    Rgb::from_hex(hex).map_or_else(
        |_| Vec::new(),
        |base| {
            generate_palette(base)
                .iter()
                .map(ToString::to_string)
                .collect()
        },
    )
}

// --------------------------------------------------------------------------------------------------------------------

/// A color harmony.
///
/// Each harmony derives a small set of colors from a base color by rotating
/// its hue or, in the case of [`Harmony::Monochromatic`], by changing its
/// lightness. The base color is always part of the result.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "colorlab")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Harmony {
    Complementary,
    Analogous,
    Triadic,
    Tetradic,
    SplitComplementary,
    Monochromatic,
}

impl Harmony {
    /// All harmonies.
    pub const ALL: [Harmony; 6] = [
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::Tetradic,
        Self::SplitComplementary,
        Self::Monochromatic,
    ];
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Harmony {
    /// Get this harmony's name in kebab case.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::SplitComplementary => "split-complementary",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Generate this harmony's colors for the given base color.
    pub fn colors(&self, base: Rgb) -> Vec<Rgb> {
        let hsl = Hsl::from(base);
        let rotate = |degrees: i64| Rgb::from(hsl.rotate(degrees));

        match *self {
            Self::Complementary => vec![base, rotate(180)],
            Self::Analogous => vec![rotate(-30), base, rotate(30)],
            Self::Triadic => vec![base, rotate(120), rotate(240)],
            Self::Tetradic => vec![base, rotate(90), rotate(180), rotate(270)],
            Self::SplitComplementary => vec![base, rotate(150), rotate(210)],
            Self::Monochromatic => {
                let l = hsl.l() as i64;
                let light = |delta: i64| Rgb::from(hsl.with_lightness(l + delta));
                vec![light(-30), light(-15), base, light(15), light(30)]
            }
        }
    }
}

impl std::str::FromStr for Harmony {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|harmony| harmony.name() == s)
            .ok_or_else(|| format!("unknown color harmony {:?}", s))
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The named colors considered by [`closest_color_name`].
pub const COLOR_NAMES: [(Rgb, &str); 18] = [
    (Rgb::new(255, 0, 0), "Red"),
    (Rgb::new(0, 255, 0), "Green"),
    (Rgb::new(0, 0, 255), "Blue"),
    (Rgb::new(255, 255, 0), "Yellow"),
    (Rgb::new(255, 0, 255), "Magenta"),
    (Rgb::new(0, 255, 255), "Cyan"),
    (Rgb::new(0, 0, 0), "Black"),
    (Rgb::new(255, 255, 255), "White"),
    (Rgb::new(128, 128, 128), "Gray"),
    (Rgb::new(128, 0, 0), "Maroon"),
    (Rgb::new(128, 128, 0), "Olive"),
    (Rgb::new(0, 128, 0), "Dark Green"),
    (Rgb::new(128, 0, 128), "Purple"),
    (Rgb::new(0, 128, 128), "Teal"),
    (Rgb::new(0, 0, 128), "Navy"),
    (Rgb::new(255, 165, 0), "Orange"),
    (Rgb::new(165, 42, 42), "Brown"),
    (Rgb::new(255, 192, 203), "Pink"),
];

/// Find the name of the named color closest to the given color.
///
/// Closeness is Euclidian distance in RGB. When two named colors are equally
/// close, the one listed first in [`COLOR_NAMES`] wins.
pub fn closest_color_name(color: Rgb) -> &'static str {
    COLOR_NAMES
        .iter()
        .min_by_key(|entry| color.distance_squared(&entry.0))
        .map_or("Unknown", |entry| entry.1)
}

/// Find the name of the named color closest to the given hexadecimal color.
///
/// If the color does not have exactly six hexadecimal digits, this function
/// returns `Unknown`.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn find_closest_color_name(hex: &str) -> &'static str {
    Rgb::from_hex(hex).map_or("Unknown", closest_color_name)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{
        closest_color_name, find_closest_color_name, generate_palette, generate_palette_hex,
        Harmony, PALETTE_BASE,
    };
    use crate::{Hsl, Rgb};

    #[test]
    fn test_palette() {
        let base = Rgb::new(30, 136, 229);
        let palette = generate_palette(base);
        assert_eq!(palette[PALETTE_BASE], base);

        let lightness = palette.map(|c| Hsl::from(c).l());
        for pair in lightness.windows(2) {
            assert!(pair[1] <= pair[0] + 1, "{:?}", lightness);
        }
        assert_eq!(lightness[0], 95);
        assert_eq!(lightness[18], 6);

        let hex = generate_palette_hex("#1E88E5");
        assert_eq!(hex.len(), 19);
        assert_eq!(hex[9], "#1e88e5");
        assert!(hex.iter().all(|h| h.len() == 7 && h == &h.to_lowercase()));

        assert!(generate_palette_hex("#zzzzzz").is_empty());
        assert!(generate_palette_hex("#abc").is_empty());
    }

    #[test]
    fn test_palette_extremes() {
        let white = generate_palette(Rgb::new(255, 255, 255));
        assert_eq!(white[PALETTE_BASE], Rgb::new(255, 255, 255));
        assert_eq!(white[0], Rgb::from(Hsl::new(0, 0, 95)));
        assert_eq!(white[PALETTE_BASE + 1], Rgb::from(Hsl::new(0, 0, 95)));

        let black = generate_palette(Rgb::new(0, 0, 0));
        assert_eq!(black[PALETTE_BASE + 9], Rgb::from(Hsl::new(0, 0, 5)));
    }

    #[test]
    fn test_harmony() {
        let red = Rgb::new(255, 0, 0);
        assert_eq!(
            Harmony::Complementary.colors(red),
            vec![red, Rgb::new(0, 255, 255)]
        );
        assert_eq!(
            Harmony::Triadic.colors(red),
            vec![red, Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)]
        );
        assert_eq!(Harmony::Analogous.colors(red)[1], red);
        assert_eq!(Harmony::Analogous.colors(red)[0], Rgb::from(Hsl::new(330, 100, 50)));
        assert_eq!(Harmony::Tetradic.colors(red).len(), 4);
        assert_eq!(Harmony::SplitComplementary.colors(red).len(), 3);

        let mono = Harmony::Monochromatic.colors(red);
        assert_eq!(mono.len(), 5);
        assert_eq!(mono[2], red);
        assert_eq!(mono[0], Rgb::from(Hsl::new(0, 100, 20)));
        assert_eq!(mono[4], Rgb::from(Hsl::new(0, 100, 80)));

        for harmony in Harmony::ALL {
            assert_eq!(harmony.name().parse::<Harmony>(), Ok(harmony));
        }
        assert!("clashing".parse::<Harmony>().is_err());
    }

    #[test]
    fn test_closest_name() {
        assert_eq!(closest_color_name(Rgb::new(250, 5, 5)), "Red");
        assert_eq!(closest_color_name(Rgb::new(0, 120, 5)), "Dark Green");
        assert_eq!(closest_color_name(Rgb::new(30, 136, 229)), "Teal");
        assert_eq!(closest_color_name(Rgb::new(250, 190, 200)), "Pink");
        assert_eq!(find_closest_color_name("#000001"), "Black");
        assert_eq!(find_closest_color_name("not a color"), "Unknown");
    }
}
