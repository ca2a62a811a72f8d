//! Utility module with colorlab's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous color format.
///
/// Both the permissive [`detect`](crate::detect::detect) function and the
/// strict [`ColorValue`](crate::ColorValue) parser report failure with this
/// enumeration. Out-of-range numbers are not errors; they are clamped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that is empty or consists of white space only.
    EmptyInput,

    /// A color format that does not start with a known prefix such as `#` or
    /// `rgb`, is not a comma-separated triplet, and is not a known color name.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    UnexpectedCharacters,

    /// A functional color format without the opening parenthesis. For
    /// example, `rgb 0, 0, 0)` is missing the opening parenthesis.
    NoOpeningParenthesis,

    /// A functional color format without the closing parenthesis. For
    /// example, `hsl(1, 2%, 3%` is missing the closing parenthesis.
    NoClosingParenthesis,

    /// A color format that is missing a coordinate. For example, `rgb(0, 0)`
    /// is missing the third coordinate, whereas `rgb(0, , 0)` is missing the
    /// second coordinate only.
    MissingCoordinate,

    /// A color format that has too many digits in a coordinate. For example,
    /// `rgb(1234, 0, 0)` has too many digits in the first coordinate.
    OversizedCoordinate,

    /// A color format that has a malformed hexadecimal number. For example,
    /// `#efg` has a malformed third coordinate.
    MalformedHex,

    /// A color format that has a malformed decimal number as coordinate. For
    /// example, `rgba(0, 0, 0, 0..5)` has a malformed alpha.
    MalformedNumber,

    /// A color format with a coordinate that lacks its mandatory unit. For
    /// example, `hsl(210, 82, 51%)` is missing the percent sign after the
    /// saturation.
    MissingUnit,

    /// A color format with more coordinates than expected. For example,
    /// `rgb(1, 2, 3, 4)` has one coordinate too many.
    TooManyCoordinates,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match *self {
            EmptyInput => f.write_str("color format should not be empty"),
            UnknownFormat => f.write_str(
                "could not detect the color format, please try a different format",
            ),
            UnexpectedCharacters => {
                f.write_str("color format should contain only valid ASCII characters")
            }
            NoOpeningParenthesis => {
                f.write_str("color format should include an opening parenthesis but has none")
            }
            NoClosingParenthesis => {
                f.write_str("color format should include a closing parenthesis but has none")
            }
            MissingCoordinate => {
                f.write_str("color format should have more coordinates but is missing one")
            }
            OversizedCoordinate => {
                f.write_str("color format coordinates should have 1-3 digits but one has more")
            }
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
            MalformedNumber => {
                f.write_str("color format coordinates should be decimal numbers but are not")
            }
            MissingUnit => {
                f.write_str("color format coordinate should have a unit such as `%` but has none")
            }
            TooManyCoordinates => {
                f.write_str("color format has more coordinates than expected")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An error while loading or saving application state.
///
/// The storage collaborator itself is infallible, so the only thing that can
/// go wrong is the conversion between state and its JSON payload.
#[cfg(feature = "state")]
#[derive(Debug)]
pub struct StateError {
    key: String,
    source: serde_json::Error,
}

#[cfg(feature = "state")]
impl StateError {
    /// Create a new state error for the given storage key.
    pub fn new(key: &str, source: serde_json::Error) -> Self {
        Self {
            key: key.to_owned(),
            source,
        }
    }

    /// Get the storage key whose payload could not be processed.
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(feature = "state")]
impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "could not process stored state for key `{}`", self.key)
    }
}

#[cfg(feature = "state")]
impl std::error::Error for StateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(all(feature = "state", feature = "pyffi"))]
impl From<StateError> for PyErr {
    fn from(value: StateError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
