//! # Color 🎨 Lab
//!
//! Colorlab is the computational core of a suite of visual design tools.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Enable the `pyffi` feature for a version that also covers Python
integration."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Colorlab's main abstractions are:
//!
//!   * The **color models** [`Rgb`], [`Rgba`], [`Hsl`], [`Hsla`], [`Cmyk`],
//!     and [`Hsv`], which are small, immutable values with integer
//!     coordinates. Their constructors clamp out-of-range coordinates, and
//!     conversions between them use `From`. [`ColorValue`] is the union of
//!     all models and doubles as strict parser for CSS-like notation.
//!   * The [`detect`] module offers a **forgiving detector** for free-form
//!     color input, as users paste it into a text field.
//!   * The [`palette`], [`wcag`], and [`vision`] modules derive **tint and
//!     shade palettes**, **color harmonies**, **the closest named color**,
//!     **WCAG contrast ratios**, and **color vision deficiency simulations**.
//!   * The [`theme`] and [`css`] modules render **shadcn-style themes**,
//!     **box shadows**, and **gradients** as CSS and Tailwind snippets.
//!   * The [`path`] module turns **SVG path data** into editable points and
//!     back again.
#![cfg_attr(
    feature = "state",
    doc = "  * The optional [`state`] module holds **application state**, i.e.,
    color history, favorites, and saved shadows, and loads and saves it through
    a key-value store."
)]
#![cfg_attr(
    not(feature = "state"),
    doc = "  * The optional `state` module holds **application state**, i.e.,
    color history, favorites, and saved shadows, and loads and saves it through
    a key-value store."
)]
//!
//!
//! ## 2. From Input to Insight
//!
//! First, turn user input into a color. [`detect::detect`] accepts just about
//! anything that looks like a color, whereas parsing a [`ColorValue`] insists
//! on well-formed notation:
//!
//! ```
//! # use colorlab::{detect::detect, ColorFormatError, ColorValue, Rgb};
//! let blue = detect("rgb 30 136 229")?.rgb();
//! assert_eq!(blue, Rgb::new(30, 136, 229));
//!
//! let value: ColorValue = "hsl(208, 79%, 51%)".parse()?;
//! assert_eq!(value.to_rgb(), Rgb::new(31, 137, 229));
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//! Second, derive whatever the tool needs to show:
//!
//! ```
//! # use colorlab::{palette::{closest_color_name, generate_palette, Harmony}, Rgb};
//! # use colorlab::wcag::{AccessibilityLevel, ContrastReport};
//! let blue = Rgb::new(30, 136, 229);
//! let palette = generate_palette(blue);
//! assert_eq!(palette[9], blue);
//! assert_eq!(Harmony::Complementary.colors(blue).len(), 2);
//! assert_eq!(closest_color_name(blue), "Teal");
//!
//! let report = ContrastReport::new(Rgb::new(255, 255, 255), blue);
//! assert_eq!(report.level(), AccessibilityLevel::AALarge);
//! ```
//!
//! Third, render the result as CSS:
//!
//! ```
//! # use colorlab::{css::{ColorFormats, Gradient}, theme::ThemePair, Rgb};
//! let blue = Rgb::new(30, 136, 229);
//! assert_eq!(ColorFormats::from(blue).hsv, "hsv(208°, 87%, 90%)");
//! assert_eq!(
//!     Gradient::linear(blue, Rgb::new(255, 255, 255), 90).to_string(),
//!     "linear-gradient(90deg, #1e88e5, #ffffff)"
//! );
//! assert!(ThemePair::generate(blue).to_css().starts_with(":root {"));
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Colorlab supports three feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`state`** controls the `state` module and serialization with
//!     [serde](https://serde.rs). This feature is enabled by default.
//!   - **`pyffi`** controls colorlab's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Colorlab logs through the [log](https://docs.rs/log) facade but never
//! installs a logger.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod css;
pub mod detect;
pub mod error;
mod model;
pub mod palette;
pub mod path;
#[cfg(feature = "state")]
pub mod state;
pub mod theme;
pub mod vision;
pub mod wcag;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use error::ColorFormatError;
pub use model::{Cmyk, ColorValue, Hsl, Hsla, Hsv, Rgb, Rgba};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
#[cfg(feature = "pyffi")]
use pyo3::types::PyDict;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn colorlab(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let modcolorlab_name = m.name()?;
    let modcolorlab_name = modcolorlab_name.to_str()?;
    let modtheme_name = format!("{}.theme", modcolorlab_name);

    // ------------------------------------------------------------------------ colorlab
    m.add_function(wrap_pyfunction!(detect::py_detect, m)?)?;
    m.add_function(wrap_pyfunction!(palette::generate_palette_hex, m)?)?;
    m.add_function(wrap_pyfunction!(palette::find_closest_color_name, m)?)?;
    m.add_function(wrap_pyfunction!(path::normalize_svg_path, m)?)?;
    m.add_function(wrap_pyfunction!(wcag::contrast_ratio, m)?)?;

    m.add_class::<Rgb>()?;
    m.add_class::<palette::Harmony>()?;
    m.add_class::<vision::Deficiency>()?;
    m.add_class::<wcag::AccessibilityLevel>()?;

    // ------------------------------------------------------------------ colorlab.theme
    let modtheme = PyModule::new(m.py(), "theme")?;
    modtheme.add("__package__", modcolorlab_name)?;
    modtheme.add_class::<theme::Theme>()?;
    modtheme.add_class::<theme::ThemeEntry>()?;
    modtheme.add_class::<theme::ThemeEntryIterator>()?;
    modtheme.add_class::<theme::ThemePair>()?;
    m.add_submodule(&modtheme)?;

    // Only change __name__ attribute after submodule has been added.
    modtheme.setattr("__name__", &modtheme_name)?;

    // -------------------------------------------------------------------- sys.modules
    let py_modules: Bound<'_, PyDict> = PyModule::import(m.py(), "sys")?
        .getattr("modules")?
        .downcast_into()?;
    py_modules.set_item(&modtheme_name, modtheme)?;

    Ok(())
}
