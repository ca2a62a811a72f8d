use crate::Float;

/// The coefficients for computing the WCAG relative luminance of sRGB
/// coordinates.
const WCAG_LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// The linearization threshold of WCAG 2.0, not the `0.04045` of sRGB proper.
const WCAG_THRESHOLD: Float = 0.03928;

/// Compute the WCAG relative luminance for the given 24-bit sRGB coordinates.
///
/// The result ranges from 0 for black to 1 for white.
pub(crate) fn to_relative_luminance(rgb: &[u8; 3]) -> Float {
    #[inline]
    fn linearize(value: u8) -> Float {
        let value = value as Float / 255.0;
        if value <= WCAG_THRESHOLD {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    let [c1, c2, c3] = *WCAG_LUMINANCE;
    let [r, g, b] = *rgb;

    linearize(r).mul_add(c1, linearize(g).mul_add(c2, linearize(b) * c3))
}

/// Compute the WCAG contrast ratio for the two relative luminance values.
///
/// Unlike perceptual contrast metrics, the ratio is symmetric: The lighter
/// luminance always ends up in the numerator. The result ranges `1..=21`.
pub(crate) fn to_contrast_ratio(luminance1: Float, luminance2: Float) -> Float {
    let (lighter, darker) = if luminance1 >= luminance2 {
        (luminance1, luminance2)
    } else {
        (luminance2, luminance1)
    };

    (lighter + 0.05) / (darker + 0.05)
}

#[cfg(test)]
mod test {
    use super::{to_contrast_ratio, to_relative_luminance};
    use crate::assert_close_enough;

    #[test]
    fn test_luminance() {
        assert_close_enough!(to_relative_luminance(&[0, 0, 0]), 0.0);
        assert_close_enough!(to_relative_luminance(&[255, 255, 255]), 1.0);
        assert_close_enough!(to_relative_luminance(&[255, 0, 0]), 0.2126);
        assert_close_enough!(to_relative_luminance(&[0, 255, 0]), 0.7152);
        assert_close_enough!(to_relative_luminance(&[0, 0, 255]), 0.0722);
    }

    #[test]
    fn test_contrast_ratio() {
        assert_close_enough!(to_contrast_ratio(1.0, 0.0), 21.0);
        assert_close_enough!(to_contrast_ratio(0.0, 1.0), 21.0);
        assert_close_enough!(to_contrast_ratio(0.5, 0.5), 1.0);
    }
}
