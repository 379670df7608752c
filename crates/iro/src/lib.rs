//! # Iro
//!
//! Iro renders nested, styled text into strings with minimal ANSI escape
//! sequences.
//!
//!
//! ## 1. Overview
//!
//! Iro's main abstractions are:
//!
//!   * The [`termco`] module offers the **terminal color formats**
//!     [`AnsiColor`](termco::AnsiColor), [`EightBitColor`](termco::EightBitColor),
//!     and [`Rgb`](termco::Rgb), as well as the wrapper
//!     [`Colorant`](termco::Colorant). It also includes the 256-color palette
//!     for finding the 8-bit color closest to a 24-bit color.
//!   * The [`style`] module defines **style elements**, such as
//!     [`Attribute`](style::Attribute)s and [`Color`](style::Color)s, and the
//!     composite [`Style`](style::Style). A style has one slot per independent
//!     category and computes the escape sequences for switching to another
//!     style.
//!   * The [`document`] module defines **documents**, i.e., trees of text,
//!     style elements, and nested scopes. Rendering a document emits the text
//!     in order, interleaved with the escape sequences for each change of
//!     style. When a nested scope ends, the enclosing scope's style is
//!     restored.
//!   * The [`opt`] module defines the rendering [`Options`](opt::Options) for
//!     documents, notably the separator between visible items and whether
//!     24-bit colors are rendered as is.
//!
//!
//! ## 2. Example
//!
//! ```
//! # use iro::document::Document;
//! # use iro::nodes;
//! # use iro::opt::Options;
//! # use iro::style::{Attribute, Color};
//! # use iro::termco::AnsiColor;
//! let doc = Document::with_options(
//!     nodes![
//!         Color::foreground(AnsiColor::Red),
//!         "red",
//!         nodes![Color::foreground(AnsiColor::Blue), Attribute::Bold, "bold blue"],
//!         "red",
//!     ],
//!     Options::with_separator(" "),
//! );
//!
//! assert_eq!(
//!     doc.to_string(),
//!     "\x1b[31mred \x1b[1m\x1b[34mbold blue\x1b[22m\x1b[31m red\x1b[0m"
//! );
//! ```
//!
//! Rendering always ends with the reset sequence, so that the terminal's
//! default appearance is restored afterwards.
//!
//!
//! ## 3. Logging
//!
//! Iro emits diagnostics through the [`log`](https://docs.rs/log) facade. The
//! painter traces every scope it enters and color capping is logged at debug
//! level. No logger is installed by the library.

pub mod document;
pub mod error;
pub mod opt;
mod paint;
pub mod style;
pub mod termco;
