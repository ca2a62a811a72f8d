use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two colors differ by at most one unit per
/// channel.
///
/// Conversions through HSL, HSV, and CMYK round and hence may drift by one
/// unit.
///
/// # Panics
///
/// This macro panics if any channel differs by more than one.
#[cfg(test)]
macro_rules! assert_within_one {
    ($c1:expr, $c2:expr $(,)?) => {
        let (c1, c2): ($crate::Rgb, $crate::Rgb) = ($c1, $c2);
        for index in 0..3 {
            assert!(
                c1[index].abs_diff(c2[index]) <= 1,
                "colors differ by more than one unit:\n{:?}\n{:?}",
                c1,
                c2
            );
        }
    };
}

#[cfg(test)]
pub(crate) use assert_within_one;

// --------------------------------------------------------------------------------------------------------------------

/// The factor for reducing precision before comparing floating point numbers.
#[cfg(feature = "f64")]
const ROUNDING_FACTOR: Float = 1e10;
/// The factor for reducing precision before comparing floating point numbers.
#[cfg(not(feature = "f64"))]
const ROUNDING_FACTOR: Float = 1e4;

/// Helper function to normalize a floating point number before equality
/// testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

/// Clamp an alpha value to the unit range. Not-a-number means fully opaque.
#[inline]
pub(crate) fn clamp_alpha(alpha: Float) -> Float {
    if alpha.is_nan() {
        1.0
    } else {
        alpha.clamp(0.0, 1.0)
    }
}

/// Clamp a signed or oversized integer to the given inclusive upper bound and
/// zero.
#[inline]
pub(crate) fn clamp_to(value: i64, max: u8) -> u8 {
    value.clamp(0, max as i64) as u8
}
