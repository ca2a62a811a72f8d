mod contrast;
mod conversion;
mod equality;
mod string;

// contrast
pub(crate) use contrast::{to_contrast_ratio, to_relative_luminance};

// conversion
pub(crate) use conversion::{
    cmyk_to_rgb, from_24bit, hsl_to_rgb, hsv_to_rgb, rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv,
    to_24bit,
};

// equality
#[cfg(test)]
pub(crate) use equality::assert_within_one;
pub use equality::to_eq_bits;
pub(crate) use equality::{clamp_alpha, clamp_to};

// string
pub(crate) use string::{parse_function, parse_hex, Notation};
