//! Utility module simulating color vision deficiencies.
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{from_24bit, to_24bit};
use crate::{Float, Rgb};

/// The matrix from linear RGB to LMS cone responses.
const RGB_TO_LMS: [[Float; 3]; 3] = [
    [0.31399022, 0.63951294, 0.04649755],
    [0.15537241, 0.75789446, 0.08670142],
    [0.01775239, 0.10944209, 0.87256922],
];

/// The matrix from LMS cone responses back to linear RGB.
const LMS_TO_RGB: [[Float; 3]; 3] = [
    [5.47221206, -4.6419601, 0.16963708],
    [-1.1252419, 2.29317094, -0.1678952],
    [0.02980165, -0.19318073, 1.16364789],
];

#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [v1, v2, v3] = *vector;
    matrix.map(|[m1, m2, m3]| m1.mul_add(v1, m2.mul_add(v2, m3 * v3)))
}

/// A color vision deficiency.
///
/// Protanopia, deuteranopia, and tritanopia each lack one of the three cone
/// types and are simulated by projecting LMS cone responses onto the remaining
/// two. Achromatopsia lacks color vision altogether and is simulated by luma.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "colorlab")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Deficiency {
    #[default]
    Normal,
    Protanopia,
    Deuteranopia,
    Tritanopia,
    Achromatopsia,
}

impl Deficiency {
    /// All deficiencies, starting with normal vision.
    pub const ALL: [Deficiency; 5] = [
        Self::Normal,
        Self::Protanopia,
        Self::Deuteranopia,
        Self::Tritanopia,
        Self::Achromatopsia,
    ];
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Deficiency {
    /// Get this deficiency's human-readable name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Normal => "Normal",
            Self::Protanopia => "Protanopia",
            Self::Deuteranopia => "Deuteranopia",
            Self::Tritanopia => "Tritanopia",
            Self::Achromatopsia => "Achromatopsia",
        }
    }

    /// Simulate how the given color appears with this deficiency.
    pub fn simulate(&self, color: Rgb) -> Rgb {
        if let Self::Achromatopsia = *self {
            let [r, g, b] = *color.as_ref();
            let gray = 0.299 * r as Float + 0.587 * g as Float + 0.114 * b as Float;
            let gray = gray.round().clamp(0.0, 255.0) as u8;
            return Rgb::new(gray, gray, gray);
        }

        let [l, m, s] = multiply(&RGB_TO_LMS, &from_24bit(color.as_ref()));
        let lms = match *self {
            Self::Protanopia => [1.05118294 * m - 0.05116099 * s, m, s],
            Self::Deuteranopia => [l, 0.9513092 * l + 0.04866992 * s, s],
            Self::Tritanopia => [l, m, -0.86744736 * l + 1.86727089 * m],
            _ => [l, m, s],
        };

        Rgb::from(to_24bit(&multiply(&LMS_TO_RGB, &lms)))
    }
}
