//! Utility module implementing UI color themes.
//!
//! A [`Theme`] assigns an HSL color to each of the [`ThemeEntry::COUNT`]
//! semantic roles of a component library in the style of shadcn/ui, e.g.,
//! background, primary, or ring. [`ThemePair::generate`] derives a light and
//! a dark theme from a single base color, which can then be rendered as CSS
//! custom properties, a complete stylesheet, a Tailwind v4 stylesheet, or
//! paired with the matching Tailwind v3 configuration.
//!
//! ```
//! # use colorlab::{theme::{ThemeEntry, ThemePair}, Hsl, Rgb};
//! let themes = ThemePair::generate(Rgb::new(30, 136, 229));
//! assert_eq!(themes.light()[ThemeEntry::Primary], Hsl::new(208, 79, 50));
//! assert_eq!(themes.dark()[ThemeEntry::Primary], Hsl::new(208, 79, 51));
//! assert!(themes.to_css().starts_with(":root {\n  --background: 0 0% 100%;\n"));
//! ```
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::{Hsl, Rgb};

/// A color theme.
///
/// A theme is a container with [`ThemeEntry::COUNT`] colors, indexed by
/// [`ThemeEntry`], plus an optional border radius. Displaying a theme produces
/// its CSS custom properties, one per line and indented by two spaces, with
/// colors written as bare `h s% l%` triples.
#[cfg_attr(feature = "pyffi", pyclass(module = "colorlab.theme"))]
#[derive(Clone, PartialEq, Eq)]
pub struct Theme {
    inner: [Hsl; ThemeEntry::COUNT],
    radius: Option<&'static str>,
}

impl Theme {
    /// Create a new color theme with the given colors and no radius.
    pub const fn with_array(colors: [Hsl; ThemeEntry::COUNT]) -> Self {
        Self {
            inner: colors,
            radius: None,
        }
    }

    /// Set the border radius.
    #[must_use = "method returns a new theme and does not mutate the original value"]
    pub fn with_radius(&self, radius: &'static str) -> Self {
        Self {
            radius: Some(radius),
            ..self.clone()
        }
    }

    /// Get the border radius, if any.
    pub const fn radius(&self) -> Option<&'static str> {
        self.radius
    }

    /// Derive the light theme for the given base color.
    pub fn light(base: Hsl) -> Self {
        let (h, s, l) = (base.h(), base.s(), base.l());
        let white = Hsl::new(0, 0, 100);
        let near_white = Hsl::new(0, 0, 98);
        let foreground = Hsl::new(h, s.max(5), l.clamp(5, 15));
        let primary = Hsl::new(h, s.clamp(50, 90), l.clamp(40, 50));
        let secondary = Hsl::new(h, s.clamp(5, 30), (100 - l).clamp(90, 96));
        let border = Hsl::new(h, s.clamp(5, 20), 90);

        Self::with_array([
            white,
            foreground,
            white,
            foreground,
            white,
            foreground,
            primary,
            near_white,
            secondary,
            primary,
            Hsl::new(h, s.clamp(0, 10), (100 - l).clamp(90, 96)),
            Hsl::new(h, s.clamp(10, 30), l.clamp(30, 40)),
            secondary,
            primary,
            Hsl::new(0, 84, 60),
            near_white,
            border,
            border,
            primary,
        ])
        .with_radius("0.5rem")
    }

    /// Derive the dark theme for the given base color.
    pub fn dark(base: Hsl) -> Self {
        let (h, s, l) = (base.h(), base.s(), base.l());
        let near_white = Hsl::new(0, 0, 98);
        let background = Hsl::new(h, s.clamp(5, 10), l.clamp(5, 10));
        let primary = Hsl::new(h, s.clamp(50, 90), l.clamp(50, 60));
        let secondary = Hsl::new(h, s.clamp(15, 30), l.clamp(15, 25));
        let border = Hsl::new(h, s.clamp(10, 20), l.clamp(15, 25));

        Self::with_array([
            background,
            near_white,
            background,
            near_white,
            background,
            near_white,
            primary,
            near_white,
            secondary,
            near_white,
            secondary,
            Hsl::new(h, s.clamp(10, 20), (100 - l).clamp(60, 70)),
            secondary,
            near_white,
            Hsl::new(0, 62, 30),
            near_white,
            border,
            border,
            primary,
        ])
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Theme {
    /// Get the CSS value for the given theme entry. <i
    /// class=python-only>Python only!</i>
    pub fn __getitem__(&self, index: ThemeEntry) -> String {
        css_value(&self[index])
    }

    /// Get the border radius. <i class=python-only>Python only!</i>
    #[pyo3(name = "radius")]
    pub fn py_radius(&self) -> Option<&'static str> {
        self.radius
    }

    /// Convert this theme to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this theme to its CSS declarations. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

/// Format an HSL color as the bare triple used by CSS custom properties.
fn css_value(color: &Hsl) -> String {
    format!("{} {}% {}%", color.h(), color.s(), color.l())
}

impl AsRef<[Hsl]> for Theme {
    fn as_ref(&self) -> &[Hsl] {
        &self.inner
    }
}

impl std::ops::Index<ThemeEntry> for Theme {
    type Output = Hsl;

    fn index(&self, index: ThemeEntry) -> &Self::Output {
        &self.inner[index as usize]
    }
}

impl std::ops::IndexMut<ThemeEntry> for Theme {
    fn index_mut(&mut self, index: ThemeEntry) -> &mut Self::Output {
        &mut self.inner[index as usize]
    }
}

impl std::fmt::Debug for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debugger = f.debug_struct("Theme");
        for entry in ThemeEntry::all() {
            debugger.field(&entry.name().replace('-', "_"), &self[entry]);
        }
        debugger.field("radius", &self.radius);
        debugger.finish()
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for entry in ThemeEntry::all() {
            if !first {
                f.write_str("\n")?;
            }
            first = false;
            write!(f, "  --{}: {};", entry.name(), css_value(&self[entry]))?;
        }
        if let Some(radius) = self.radius {
            write!(f, "\n  --radius: {};", radius)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color theme entry.
///
/// The entries are listed in canonical order, which also is the order of
/// custom properties in generated stylesheets. Displaying a theme entry
/// produces its kebab-case name, e.g., `card-foreground`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, ord, module = "colorlab.theme")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeEntry {
    Background,
    Foreground,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,
    Destructive,
    DestructiveForeground,
    Border,
    Input,
    Ring,
}

impl ThemeEntry {
    /// The total number of theme entries.
    pub const COUNT: usize = 19;

    const ALL: [ThemeEntry; Self::COUNT] = [
        Self::Background,
        Self::Foreground,
        Self::Card,
        Self::CardForeground,
        Self::Popover,
        Self::PopoverForeground,
        Self::Primary,
        Self::PrimaryForeground,
        Self::Secondary,
        Self::SecondaryForeground,
        Self::Muted,
        Self::MutedForeground,
        Self::Accent,
        Self::AccentForeground,
        Self::Destructive,
        Self::DestructiveForeground,
        Self::Border,
        Self::Input,
        Self::Ring,
    ];

    /// Create a new iterator over all theme entries in canonical order.
    pub fn all() -> ThemeEntryIterator {
        ThemeEntryIterator::new()
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ThemeEntry {
    /// Create a new iterator over all theme entries in canonical order.
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "all")]
    #[staticmethod]
    pub fn py_all() -> ThemeEntryIterator {
        ThemeEntryIterator::new()
    }

    /// Get this theme entry's kebab-case name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Card => "card",
            Self::CardForeground => "card-foreground",
            Self::Popover => "popover",
            Self::PopoverForeground => "popover-foreground",
            Self::Primary => "primary",
            Self::PrimaryForeground => "primary-foreground",
            Self::Secondary => "secondary",
            Self::SecondaryForeground => "secondary-foreground",
            Self::Muted => "muted",
            Self::MutedForeground => "muted-foreground",
            Self::Accent => "accent",
            Self::AccentForeground => "accent-foreground",
            Self::Destructive => "destructive",
            Self::DestructiveForeground => "destructive-foreground",
            Self::Border => "border",
            Self::Input => "input",
            Self::Ring => "ring",
        }
    }

    /// Render a debug representation for this theme entry. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Render this theme entry's name. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl std::fmt::Display for ThemeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An iterator over theme entries.
///
/// [`ThemeEntry::all`] returns this iterator, which produces all theme entries
/// in the canonical order. It is fused, i.e., after returning `None` once, it
/// will keep returning `None`. It also is exact, i.e., its `size_hint()`
/// returns the exact number of remaining items.
#[cfg_attr(feature = "pyffi", pyclass(module = "colorlab.theme"))]
#[derive(Debug)]
pub struct ThemeEntryIterator {
    index: usize,
}

impl ThemeEntryIterator {
    fn new() -> Self {
        Self { index: 0 }
    }
}

impl Iterator for ThemeEntryIterator {
    type Item = ThemeEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let item = ThemeEntry::ALL.get(self.index).copied();
        if item.is_some() {
            self.index += 1;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = ThemeEntry::COUNT - self.index;
        (remaining, Some(remaining))
    }
}

impl std::iter::ExactSizeIterator for ThemeEntryIterator {
    fn len(&self) -> usize {
        ThemeEntry::COUNT - self.index
    }
}

impl std::iter::FusedIterator for ThemeEntryIterator {}

#[cfg(feature = "pyffi")]
#[pymethods]
impl ThemeEntryIterator {
    /// Get the number of remaining theme entries. <i class=python-only>Python
    /// only!</i>
    pub fn __len__(&self) -> usize {
        self.len()
    }

    /// Return this iterator. <i class=python-only>Python only!</i>
    pub fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    /// Return the next theme entry. <i class=python-only>Python only!</i>
    pub fn __next__(mut slf: PyRefMut<'_, Self>) -> Option<ThemeEntry> {
        slf.next()
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A light and a dark theme derived from the same base color.
#[cfg_attr(feature = "pyffi", pyclass(module = "colorlab.theme"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemePair {
    light: Theme,
    dark: Theme,
}

impl ThemePair {
    /// Generate the themes for the given base color.
    pub fn generate(base: Rgb) -> Self {
        let hsl = Hsl::from(base);
        Self {
            light: Theme::light(hsl),
            dark: Theme::dark(hsl),
        }
    }

    /// Generate the themes for the given hexadecimal color. If the color does
    /// not have exactly six hexadecimal digits, this method returns `None`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        Rgb::from_hex(hex).ok().map(Self::generate)
    }

    /// Get the light theme.
    pub const fn light(&self) -> &Theme {
        &self.light
    }

    /// Get the dark theme.
    pub const fn dark(&self) -> &Theme {
        &self.dark
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ThemePair {
    /// Render the stylesheet with a `:root` rule for the light theme and a
    /// `.dark` rule for the dark theme.
    pub fn to_css(&self) -> String {
        format!(":root {{\n{}\n}}\n\n.dark {{\n{}\n}}\n", self.light, self.dark)
    }

    /// Render the stylesheet for Tailwind v4, which adds the dark variant and
    /// maps every entry into Tailwind's color namespace.
    pub fn to_css_v4(&self) -> String {
        let mut mapping = String::new();
        for entry in ThemeEntry::all() {
            mapping.push_str(&format!(
                "  --color-{0}: hsl(var(--{0}));\n",
                entry.name()
            ));
        }

        format!(
            "\n// global.css\n\n@import \"tailwindcss\";\n\n\
             @custom-variant dark (&:where(.dark, .dark *));\n\n\
             {}\n@theme inline {{\n{}  --radius: var(--radius);\n}}\n",
            self.to_css(),
            mapping
        )
    }

    /// Render the Tailwind v3 configuration that goes with the stylesheet.
    pub fn tailwind_config(&self) -> String {
        TAILWIND_CONFIG.to_string()
    }
}

/// The Tailwind v3 configuration for themes. It refers to the custom
/// properties only and hence is the same for all themes.
const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  darkMode: ["class"],
  content: [
    './pages/**/*.{ts,tsx}',
    './components/**/*.{ts,tsx}',
    './app/**/*.{ts,tsx}',
    './src/**/*.{ts,tsx}',
  ],
  theme: {
    container: {
      center: true,
      padding: "2rem",
      screens: {
        "2xl": "1400px",
      },
    },
    extend: {
      colors: {
        border: "hsl(var(--border))",
        input: "hsl(var(--input))",
        ring: "hsl(var(--ring))",
        background: "hsl(var(--background))",
        foreground: "hsl(var(--foreground))",
        primary: {
          DEFAULT: "hsl(var(--primary))",
          foreground: "hsl(var(--primary-foreground))",
        },
        secondary: {
          DEFAULT: "hsl(var(--secondary))",
          foreground: "hsl(var(--secondary-foreground))",
        },
        destructive: {
          DEFAULT: "hsl(var(--destructive))",
          foreground: "hsl(var(--destructive-foreground))",
        },
        muted: {
          DEFAULT: "hsl(var(--muted))",
          foreground: "hsl(var(--muted-foreground))",
        },
        accent: {
          DEFAULT: "hsl(var(--accent))",
          foreground: "hsl(var(--accent-foreground))",
        },
        popover: {
          DEFAULT: "hsl(var(--popover))",
          foreground: "hsl(var(--popover-foreground))",
        },
        card: {
          DEFAULT: "hsl(var(--card))",
          foreground: "hsl(var(--card-foreground))",
        },
      },
      borderRadius: {
        lg: "var(--radius)",
        md: "calc(var(--radius) - 2px)",
        sm: "calc(var(--radius) - 4px)",
      },
      keyframes: {
        "accordion-down": {
          from: { height: 0 },
          to: { height: "var(--radix-accordion-content-height)" },
        },
        "accordion-up": {
          from: { height: "var(--radix-accordion-content-height)" },
          to: { height: 0 },
        },
      },
      animation: {
        "accordion-down": "accordion-down 0.2s ease-out",
        "accordion-up": "accordion-up 0.2s ease-out",
      },
    },
  },
  plugins: [require("tailwindcss-animate")],
}"#;

// ====================================================================================================================
