//! CSS snippets for colors, layered box shadows, and gradients.
//!
//! This module renders values as the CSS (and Tailwind) text that design tools
//! hand to their users for copying:
//!
//!   * [`ColorFormats`] holds the seven notations of one color.
//!   * [`BoxShadow`] combines [`ShadowLayer`]s into a `box-shadow` value and a
//!     Tailwind arbitrary value class.
//!   * [`Gradient`] renders linear, radial, and conic two-color gradients.
//!
//!
//! # Examples
//!
//! Fluently assemble a shadow with two layers:
//! ```
//! # use colorlab::css::{BoxShadow, ShadowLayer};
//! # use colorlab::Rgb;
//! let shadow = BoxShadow::new(vec![
//!     ShadowLayer::new(0, 1, 3, 0).with_opacity(10),
//!     ShadowLayer::new(0, 1, 2, -1)
//!         .with_color(Rgb::new(17, 17, 26))
//!         .with_opacity(100)
//!         .inset(),
//! ]);
//!
//! assert_eq!(
//!     shadow.to_css(),
//!     "0px 1px 3px 0px rgba(0, 0, 0, 0.1), inset 0px 1px 2px -1px rgba(17, 17, 26, 1)"
//! );
//! assert_eq!(
//!     shadow.to_tailwind(),
//!     "shadow-[0px_1px_3px_0px_rgba(0,0,0,0.1),inset_0px_1px_2px_-1px_#11111a]"
//! );
//! ```

mod gradient;
mod shadow;

pub use gradient::{Gradient, GradientKind};
pub use shadow::{BoxShadow, ShadowLayer};

use crate::{Cmyk, ColorValue, Float, Hsl, Hsla, Hsv, Rgb, Rgba};

/// The seven notations of a color.
///
/// All strings use the canonical formats also accepted by the strict
/// [`ColorValue`] parser: `#1e88e5`, `rgb(30, 136, 229)`,
/// `rgba(30, 136, 229, 1.00)`, `hsl(208, 79%, 51%)`,
/// `hsla(208, 79%, 51%, 1.00)`, `cmyk(87%, 41%, 0%, 10%)`, and
/// `hsv(208°, 87%, 90%)`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "state", derive(serde::Serialize))]
pub struct ColorFormats {
    /// The hexadecimal notation.
    pub hex: String,
    /// The `rgb()` notation.
    pub rgb: String,
    /// The `rgba()` notation, with two decimals for alpha.
    pub rgba: String,
    /// The `hsl()` notation.
    pub hsl: String,
    /// The `hsla()` notation, with two decimals for alpha.
    pub hsla: String,
    /// The `cmyk()` notation.
    pub cmyk: String,
    /// The `hsv()` notation, with a degree sign for the hue.
    pub hsv: String,
}

impl ColorFormats {
    /// Render the notations for the given color and alpha.
    pub fn new(color: Rgb, alpha: Float) -> Self {
        let hsl = Hsl::from(color);

        Self {
            hex: color.to_string(),
            rgb: ColorValue::Rgb(color).to_string(),
            rgba: Rgba::new(color, alpha).to_string(),
            hsl: hsl.to_string(),
            hsla: Hsla::new(hsl, alpha).to_string(),
            cmyk: Cmyk::from(color).to_string(),
            hsv: Hsv::from(color).to_string(),
        }
    }

    /// Get labelled notations in display order.
    pub fn labelled(&self) -> [(&'static str, &str); 7] {
        [
            ("HEX", &self.hex),
            ("RGB", &self.rgb),
            ("RGBA", &self.rgba),
            ("HSL", &self.hsl),
            ("HSLA", &self.hsla),
            ("CMYK", &self.cmyk),
            ("HSV", &self.hsv),
        ]
    }
}

impl From<Rgb> for ColorFormats {
    fn from(value: Rgb) -> Self {
        Self::new(value, 1.0)
    }
}
