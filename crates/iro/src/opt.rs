//! Helper module with the options for rendering documents.
//!
//! This module provides the options for a document and the corresponding
//! builder.
//!
//!
//! # Example
//!
//! ```
//! # use iro::opt::{Options, Separator};
//! # use iro::style::Fidelity;
//! let options = Options::builder()
//!     .disable_rgb_output(true)
//!     .separator(" ")
//!     .collect_styles_first(false)
//!     .build();
//!
//! assert_eq!(options.fidelity(), Fidelity::EightBit);
//! assert_eq!(options.separator(), Some(&Separator::from(" ")));
//! assert!(!options.collect_styles_first());
//! ```

use crate::document::Document;
use crate::style::Fidelity;

/// A separator inserted between consecutive visible items of a scope.
///
/// A text separator is inserted as is. A document separator is painted with
/// the style active at its position, which is restored right after.
#[derive(Clone, Debug, PartialEq)]
pub enum Separator {
    Text(String),
    Document(Box<Document>),
}

impl From<&str> for Separator {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Separator {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Document> for Separator {
    fn from(value: Document) -> Self {
        Self::Document(Box::new(value))
    }
}

#[derive(Clone, Debug, PartialEq)]
struct OptionData {
    fidelity: Fidelity,
    separator: Option<Separator>,
    collect_styles_first: bool,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            fidelity: Fidelity::TwentyFourBit,
            separator: None,
            collect_styles_first: true,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the color fidelity.
    pub fn fidelity(&mut self, fidelity: Fidelity) -> &mut Self {
        self.0.fidelity = fidelity;
        self
    }

    /// Force 24-bit colors to be rendered as their closest 8-bit colors.
    pub fn disable_rgb_output(&mut self, disabled: bool) -> &mut Self {
        self.0.fidelity = Fidelity::with_rgb_disabled(disabled);
        self
    }

    /// Set the separator.
    pub fn separator(&mut self, separator: impl Into<Separator>) -> &mut Self {
        self.0.separator = Some(separator.into());
        self
    }

    /// Clear the separator.
    pub fn no_separator(&mut self) -> &mut Self {
        self.0.separator = None;
        self
    }

    /// Collect all of a scope's style elements before painting its first item
    /// or apply each element at its position.
    pub fn collect_styles_first(&mut self, collect: bool) -> &mut Self {
        self.0.collect_styles_first = collect;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug, PartialEq)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Create a new builder initialized with these options.
    pub fn to_builder(&self) -> OptionBuilder {
        OptionBuilder(self.0.clone())
    }

    /// Instantiate the default options but with the given separator.
    pub fn with_separator(separator: impl Into<Separator>) -> Options {
        Self::builder().separator(separator).build()
    }

    /// Get the color fidelity.
    ///
    /// Only the fidelity of the document being rendered matters. Nested
    /// documents are rendered with the same fidelity.
    pub fn fidelity(&self) -> Fidelity {
        self.0.fidelity
    }

    /// Determine whether 24-bit colors are rendered as 8-bit colors.
    pub fn is_rgb_output_disabled(&self) -> bool {
        self.0.fidelity < Fidelity::TwentyFourBit
    }

    /// Get the separator.
    pub fn separator(&self) -> Option<&Separator> {
        self.0.separator.as_ref()
    }

    /// Determine whether style elements are collected before painting.
    pub fn collect_styles_first(&self) -> bool {
        self.0.collect_styles_first
    }
}
