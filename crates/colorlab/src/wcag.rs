//! Utility module for WCAG 2.0 contrast checking.
//!
//! ```
//! # use colorlab::{wcag::{AccessibilityLevel, ContrastReport}, Rgb};
//! let report = ContrastReport::new(Rgb::new(255, 255, 255), Rgb::new(30, 136, 229));
//! assert_eq!(report.level(), AccessibilityLevel::AALarge);
//! assert!(report.passes_large_aa());
//! assert!(!report.passes_normal_aa());
//! ```
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::{Float, Rgb};

/// Compute the WCAG contrast ratio between two colors.
///
/// The result is symmetric and ranges from 1 to 21.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn contrast_ratio(color1: Rgb, color2: Rgb) -> Float {
    color1.contrast_ratio(&color2)
}

/// The WCAG accessibility level achieved by a contrast ratio.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, ord, module = "colorlab")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(clippy::upper_case_acronyms)]
pub enum AccessibilityLevel {
    Fail,
    /// Sufficient for large text only.
    AALarge,
    AA,
    AAA,
}

impl AccessibilityLevel {
    /// Classify the given contrast ratio.
    pub fn from_ratio(ratio: Float) -> Self {
        if ratio >= 7.0 {
            Self::AAA
        } else if ratio >= 4.5 {
            Self::AA
        } else if ratio >= 3.0 {
            Self::AALarge
        } else {
            Self::Fail
        }
    }

    /// Get this level's name as used in the guidelines.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Fail => "Fail",
            Self::AALarge => "AA Large",
            Self::AA => "AA",
            Self::AAA => "AAA",
        }
    }
}

impl std::fmt::Display for AccessibilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The contrast between a foreground and a background color.
///
/// Normal text needs a ratio of 4.5 for AA and 7 for AAA, large text one of 3
/// for AA and 4.5 for AAA. Displaying a report shows the ratio and level, e.g.,
/// `21.00:1 (AAA)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContrastReport {
    foreground: Rgb,
    background: Rgb,
    ratio: Float,
}

impl ContrastReport {
    /// Check the contrast of the given foreground and background colors.
    pub fn new(foreground: Rgb, background: Rgb) -> Self {
        Self {
            foreground,
            background,
            ratio: contrast_ratio(foreground, background),
        }
    }

    /// Get the foreground color.
    pub const fn foreground(&self) -> Rgb {
        self.foreground
    }

    /// Get the background color.
    pub const fn background(&self) -> Rgb {
        self.background
    }

    /// Get the contrast ratio.
    pub const fn ratio(&self) -> Float {
        self.ratio
    }

    /// Get the accessibility level.
    pub fn level(&self) -> AccessibilityLevel {
        AccessibilityLevel::from_ratio(self.ratio)
    }

    /// Swap foreground and background. The ratio stays the same.
    #[must_use = "method returns a new report and does not mutate the original value"]
    pub fn swap(&self) -> Self {
        Self {
            foreground: self.background,
            background: self.foreground,
            ratio: self.ratio,
        }
    }

    /// Determine whether normal text meets AA, i.e., the ratio is at least 4.5.
    pub fn passes_normal_aa(&self) -> bool {
        self.ratio >= 4.5
    }

    /// Determine whether normal text meets AAA, i.e., the ratio is at least 7.
    pub fn passes_normal_aaa(&self) -> bool {
        self.ratio >= 7.0
    }

    /// Determine whether large text meets AA, i.e., the ratio is at least 3.
    pub fn passes_large_aa(&self) -> bool {
        self.ratio >= 3.0
    }

    /// Determine whether large text meets AAA, i.e., the ratio is at least 4.5.
    pub fn passes_large_aaa(&self) -> bool {
        self.ratio >= 4.5
    }
}

impl std::fmt::Display for ContrastReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}:1 ({})", self.ratio, self.level())
    }
}
