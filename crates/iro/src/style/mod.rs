//! Terminal-specific style elements and composite styles.
//!
//! This module supports styling terminal appearance with ANSI SGR escape
//! sequences through two abstractions:
//!
//!   * An [`Element`] is an atomic style directive, i.e., a reset, an
//!     [`Attribute`] being enabled, a [`Disable`] directive, a [`Color`], or a
//!     [`Font`].
//!   * A [`Style`] is a composite of independent categories, such as
//!     intensity, underline, foreground color, and font. Applying an element to
//!     a style yields a new style, and diffing two styles yields the escape
//!     sequences for switching between them.
//!
//! It also defines [`Layer`] to distinguish between foreground and background
//! colors as well as [`Fidelity`] to capture whether 24-bit colors are
//! rendered as is.
//!
//!
//! # Example
//!
//! Switch from red underlined text to blue bold text and back again:
//! ```
//! # use iro::style::{Attribute, Color, Disable, Style};
//! # use iro::termco::AnsiColor;
//! let red = Style::default()
//!     .apply(Color::foreground(AnsiColor::Red))
//!     .apply(Attribute::Underline);
//! let blue = red
//!     .apply(Disable::Underline)
//!     .apply(Attribute::Bold)
//!     .apply(Color::foreground(AnsiColor::Blue));
//!
//! assert_eq!(red.diff(&blue), "\x1b[1m\x1b[24m\x1b[34m");
//! assert_eq!(blue.diff(&red), "\x1b[22m\x1b[4m\x1b[31m");
//! assert_eq!(blue.diff(&Style::default()), "\x1b[0m");
//! ```

mod context;
mod element;
mod state;

pub use context::{Fidelity, Layer};
pub use element::{Attribute, Color, Disable, Element, Font};
pub use state::{Blink, Intensity, Style};

pub(crate) use element::RESET;
