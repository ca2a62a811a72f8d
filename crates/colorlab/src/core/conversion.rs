use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(rgb: &[u8; 3]) -> [Float; 3] {
    let [r, g, b] = *rgb;
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert a unit-range coordinate to an 8-bit integer.
///
/// Coordinates outside the unit range are clamped to `0x00..=0xff`.
#[inline]
pub(crate) fn to_8bit(value: Float) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert unit-range coordinates to 24-bit representation.
#[inline]
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = *coordinates;
    [to_8bit(r), to_8bit(g), to_8bit(b)]
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine the hue in degrees for unit-range RGB coordinates.
///
/// The caller must ensure that `max` is the largest coordinate and that
/// `delta`, the difference between largest and smallest coordinate, is not
/// zero. A negative sector for a red maximum wraps around by a full turn.
fn to_hue(coordinates: &[Float; 3], max: Float, delta: Float) -> Float {
    let [r, g, b] = *coordinates;

    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    sector * 60.0
}

#[inline]
fn max_min(coordinates: &[Float; 3]) -> (Float, Float) {
    let [r, g, b] = *coordinates;
    (r.max(g).max(b), r.min(g).min(b))
}

/// Convert 24-bit RGB to HSL. The hue is in degrees, saturation and lightness
/// are in percent. None of the results are rounded.
pub(crate) fn rgb_to_hsl(rgb: &[u8; 3]) -> [Float; 3] {
    let coordinates = from_24bit(rgb);
    let (max, min) = max_min(&coordinates);
    let lightness = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, lightness * 100.0];
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    [
        to_hue(&coordinates, max, delta),
        saturation * 100.0,
        lightness * 100.0,
    ]
}

/// Convert HSL to 24-bit RGB. The hue is in degrees, saturation and lightness
/// are in percent.
pub(crate) fn hsl_to_rgb(hsl: &[Float; 3]) -> [u8; 3] {
    let [h, s, l] = *hsl;
    let (h, s, l) = (h / 360.0, s / 100.0, l / 100.0);

    if s == 0.0 {
        return to_24bit(&[l, l, l]);
    }

    #[inline]
    fn hue_to_channel(p: Float, q: Float, t: Float) -> Float {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    to_24bit(&[
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ])
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert 24-bit RGB to HSV. The hue is in degrees, saturation and value are
/// in percent. None of the results are rounded.
pub(crate) fn rgb_to_hsv(rgb: &[u8; 3]) -> [Float; 3] {
    let coordinates = from_24bit(rgb);
    let (max, min) = max_min(&coordinates);
    let delta = max - min;
    let saturation = if max == 0.0 { 0.0 } else { delta / max };
    let hue = if max == min {
        0.0
    } else {
        to_hue(&coordinates, max, delta)
    };

    [hue, saturation * 100.0, max * 100.0]
}

/// Convert HSV to 24-bit RGB. The hue is in degrees, saturation and value are
/// in percent.
///
/// This function splits the hue circle into six sectors and, within each
/// sector, blends between the value and the three intermediates `p`, `q`, and
/// `t`.
pub(crate) fn hsv_to_rgb(hsv: &[Float; 3]) -> [u8; 3] {
    let [h, s, v] = *hsv;
    let (h, s, v) = (h / 360.0, s / 100.0, v / 100.0);

    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let coordinates = match (sector as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    };

    to_24bit(&coordinates)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert 24-bit RGB to CMYK in percent. None of the results are rounded.
///
/// Pure black has a key of 100% and, instead of dividing by zero, zero cyan,
/// magenta, and yellow.
pub(crate) fn rgb_to_cmyk(rgb: &[u8; 3]) -> [Float; 4] {
    let [r, g, b] = from_24bit(rgb);
    let k = 1.0 - r.max(g).max(b);

    if k == 1.0 {
        return [0.0, 0.0, 0.0, 100.0];
    }

    let scale = 1.0 - k;
    [
        (1.0 - r - k) / scale * 100.0,
        (1.0 - g - k) / scale * 100.0,
        (1.0 - b - k) / scale * 100.0,
        k * 100.0,
    ]
}

/// Convert CMYK in percent to 24-bit RGB.
pub(crate) fn cmyk_to_rgb(cmyk: &[Float; 4]) -> [u8; 3] {
    let [c, m, y, k] = *cmyk;
    let key = 1.0 - k / 100.0;

    to_24bit(&[
        (1.0 - c / 100.0) * key,
        (1.0 - m / 100.0) * key,
        (1.0 - y / 100.0) * key,
    ])
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{cmyk_to_rgb, hsl_to_rgb, hsv_to_rgb, rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv};
    use crate::Float;
    use proptest::prelude::*;

    fn within_one(c1: [u8; 3], c2: [u8; 3]) -> bool {
        c1.iter().zip(c2.iter()).all(|(a, b)| a.abs_diff(*b) <= 1)
    }

    fn rounded<const N: usize>(coordinates: [Float; N]) -> [i64; N] {
        coordinates.map(|c| c.round() as i64)
    }

    #[test]
    fn test_hsl() {
        assert_eq!(rounded(rgb_to_hsl(&[30, 136, 229])), [208, 79, 51]);
        assert_eq!(rounded(rgb_to_hsl(&[255, 0, 0])), [0, 100, 50]);
        assert_eq!(rounded(rgb_to_hsl(&[0, 255, 0])), [120, 100, 50]);
        assert_eq!(rounded(rgb_to_hsl(&[0, 0, 255])), [240, 100, 50]);
        assert_eq!(rounded(rgb_to_hsl(&[128, 128, 128])), [0, 0, 50]);

        // Red maximum with blue above green wraps around.
        assert_eq!(rounded(rgb_to_hsl(&[255, 0, 128])), [330, 100, 50]);

        assert_eq!(hsl_to_rgb(&[0.0, 100.0, 50.0]), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(&[120.0, 100.0, 50.0]), [0, 255, 0]);
        assert_eq!(hsl_to_rgb(&[240.0, 100.0, 50.0]), [0, 0, 255]);
        assert_eq!(hsl_to_rgb(&[0.0, 0.0, 100.0]), [255, 255, 255]);
        assert_eq!(hsl_to_rgb(&[42.0, 0.0, 0.0]), [0, 0, 0]);
    }

    #[test]
    fn test_hsv() {
        assert_eq!(rounded(rgb_to_hsv(&[30, 136, 229])), [208, 87, 90]);
        assert_eq!(rounded(rgb_to_hsv(&[0, 0, 0])), [0, 0, 0]);
        assert_eq!(rounded(rgb_to_hsv(&[255, 255, 255])), [0, 0, 100]);

        assert_eq!(hsv_to_rgb(&[0.0, 100.0, 100.0]), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(&[60.0, 100.0, 100.0]), [255, 255, 0]);
        assert_eq!(hsv_to_rgb(&[180.0, 100.0, 100.0]), [0, 255, 255]);
        assert_eq!(hsv_to_rgb(&[300.0, 100.0, 100.0]), [255, 0, 255]);
        assert_eq!(hsv_to_rgb(&[360.0, 100.0, 100.0]), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(&[0.0, 0.0, 50.0]), [128, 128, 128]);
    }

    #[test]
    fn test_cmyk() {
        assert_eq!(rounded(rgb_to_cmyk(&[0, 0, 0])), [0, 0, 0, 100]);
        assert_eq!(rounded(rgb_to_cmyk(&[255, 255, 255])), [0, 0, 0, 0]);
        assert_eq!(rounded(rgb_to_cmyk(&[30, 136, 229])), [87, 41, 0, 10]);

        assert_eq!(cmyk_to_rgb(&[0.0, 0.0, 0.0, 100.0]), [0, 0, 0]);
        assert_eq!(cmyk_to_rgb(&[0.0, 100.0, 100.0, 0.0]), [255, 0, 0]);
        assert_eq!(cmyk_to_rgb(&[0.0, 0.0, 0.0, 0.0]), [255, 255, 255]);
    }

    proptest! {
        #[test]
        fn test_hsl_round_trip(rgb in any::<[u8; 3]>()) {
            prop_assert!(within_one(hsl_to_rgb(&rgb_to_hsl(&rgb)), rgb));
        }

        #[test]
        fn test_hsv_round_trip(rgb in any::<[u8; 3]>()) {
            prop_assert!(within_one(hsv_to_rgb(&rgb_to_hsv(&rgb)), rgb));
        }

        #[test]
        fn test_cmyk_round_trip(rgb in any::<[u8; 3]>()) {
            prop_assert!(within_one(cmyk_to_rgb(&rgb_to_cmyk(&rgb)), rgb));
        }
    }
}
