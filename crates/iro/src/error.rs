//! Utility module with iro's errors.

use thiserror::Error;

/// The errors raised while constructing style elements and documents.
///
/// All errors are raised synchronously by the constructor or method that
/// detects them. Rendering itself cannot fail.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A color channel or palette index outside `0..=255`.
    #[error("{value} does not fit into color range 0..=255")]
    InvalidColorValue { value: i64 },

    /// A font number outside `0..=10`.
    #[error("{0} does not fit into font range 0..=10")]
    InvalidFontNumber(i64),

    /// A hexadecimal color code without exactly six digits after the optional
    /// leading `#`.
    #[error("hex color code should have 6 digits but `{0}` does not")]
    InvalidHexLength(String),

    /// A hexadecimal color code with the right length but a character that is
    /// not a hexadecimal digit.
    #[error("hex color code should contain only hexadecimal digits but `{0}` does not")]
    InvalidHexDigit(String),

    /// A request for an escape sequence that the element does not have, e.g.,
    /// the open sequence of an off directive.
    #[error("{element} has no {operation} sequence")]
    UnsupportedOperation {
        element: String,
        operation: &'static str,
    },

    /// An attempt to concatenate a document with something other than text or
    /// another document.
    #[error("documents can only be concatenated with text or other documents")]
    UnsupportedConcatenation,
}

impl Error {
    pub(crate) fn color_value(value: impl Into<i64>) -> Self {
        Self::InvalidColorValue {
            value: value.into(),
        }
    }
}
