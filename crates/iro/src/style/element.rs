use super::{Fidelity, Layer};
use crate::error::Error;
use crate::termco::Colorant;

/// The escape sequence resetting all styles.
pub(crate) const RESET: &str = "\x1b[0m";

/// The escape sequence for a single SGR parameter.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Sgr(pub u8);

impl std::fmt::Display for Sgr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\x1b[{}m", self.0)
    }
}

/// The escape sequence for a colorant on a layer.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ColorSgr(pub Layer, pub Colorant);

impl std::fmt::Display for ColorSgr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("\x1b[")?;
        self.1.write_sgr_params(self.0, f)?;
        f.write_str("m")
    }
}

/// A text attribute other than regular.
///
/// Each attribute belongs to exactly one category of the composite
/// [`Style`](super::Style). Bold and dim share the intensity category, but can
/// be active at the same time. Slow and rapid blinking share the blink
/// category and replace each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Bold,
    Dim,
    Italic,
    Underline,
    SlowBlink,
    RapidBlink,
    Invert,
    Hide,
    Strike,
    Gothic,
    DoublyUnderline,
    Overline,
}

impl Attribute {
    /// Get the SGR parameter for enabling this attribute.
    pub const fn enable_sgr(&self) -> u8 {
        use self::Attribute::*;

        match *self {
            Bold => 1,
            Dim => 2,
            Italic => 3,
            Underline => 4,
            SlowBlink => 5,
            RapidBlink => 6,
            Invert => 7,
            Hide => 8,
            Strike => 9,
            Gothic => 20,
            DoublyUnderline => 21,
            Overline => 53,
        }
    }

    /// Get the SGR parameter for disabling this attribute.
    pub const fn disable_sgr(&self) -> u8 {
        use self::Attribute::*;

        match *self {
            Bold | Dim => 22,
            Italic => 23,
            Underline | DoublyUnderline => 24,
            SlowBlink | RapidBlink => 25,
            Invert => 27,
            Hide => 28,
            Strike => 29,
            Gothic => 10,
            Overline => 55,
        }
    }
}

/// The off directives.
///
/// Each variant clears exactly one category of the composite
/// [`Style`](super::Style), with the exception of [`Disable::Bold`] and
/// [`Disable::Dim`], which clear only their half of the intensity category.
/// Off directives have neither open nor close sequence of their own; their
/// effect is computed by diffing styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Disable {
    Intensity,
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Invert,
    Hide,
    Strike,
    Overline,
    Gothic,
    DoublyUnderline,
    Font,
    Foreground,
    Background,
}

/// An alternative font.
///
/// Font 0 is the default font, fonts 1 through 10 are alternative fonts.
/// Selecting font 0 has the same effect as [`Disable::Font`].
///
/// ```
/// # use iro::error::Error;
/// # use iro::style::Font;
/// assert_eq!(Font::new(2)?.open(), "\x1b[12m");
/// assert_eq!(Font::new(2)?.close(), "\x1b[10m");
/// assert_eq!(Font::new(11), Err(Error::InvalidFontNumber(11)));
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Font(u8);

impl Font {
    /// Create a new font.
    pub const fn new(number: u8) -> Result<Self, Error> {
        if number <= 10 {
            Ok(Self(number))
        } else {
            Err(Error::InvalidFontNumber(number as i64))
        }
    }

    /// Get the font number.
    pub const fn number(&self) -> u8 {
        self.0
    }

    /// Determine whether this font is the default font.
    pub const fn is_default(&self) -> bool {
        self.0 == 0
    }

    /// Get the escape sequence selecting this font.
    pub fn open(&self) -> String {
        Sgr(self.0 + 10).to_string()
    }

    /// Get the escape sequence restoring the default font.
    pub fn close(&self) -> String {
        Sgr(10).to_string()
    }
}

impl TryFrom<i32> for Font {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| Error::InvalidFontNumber(value.into()))
            .and_then(Font::new)
    }
}

/// A color for either foreground or background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    layer: Layer,
    colorant: Colorant,
}

impl Color {
    /// Create a new color for the given layer.
    pub fn new(layer: Layer, colorant: impl Into<Colorant>) -> Self {
        Self {
            layer,
            colorant: colorant.into(),
        }
    }

    /// Create a new foreground color.
    pub fn foreground(colorant: impl Into<Colorant>) -> Self {
        Self::new(Layer::Foreground, colorant)
    }

    /// Create a new background color.
    pub fn background(colorant: impl Into<Colorant>) -> Self {
        Self::new(Layer::Background, colorant)
    }

    /// Get this color's layer.
    pub const fn layer(&self) -> Layer {
        self.layer
    }

    /// Get this color's colorant.
    pub const fn colorant(&self) -> &Colorant {
        &self.colorant
    }

    /// Get the escape sequence for this color, capped to the given fidelity.
    pub fn open(&self, fidelity: Fidelity) -> String {
        ColorSgr(self.layer, self.colorant.cap(fidelity)).to_string()
    }

    /// Get the escape sequence restoring this layer's default color.
    pub fn close(&self) -> String {
        Sgr(Colorant::default_sgr(self.layer)).to_string()
    }
}

/// A style element, i.e., an atomic style directive.
///
/// Elements are immutable values. Each knows its category within the
/// composite [`Style`](super::Style) and, where they exist, its open and close
/// sequences.
///
/// ```
/// # use iro::error::Error;
/// # use iro::style::{Attribute, Color, Disable, Element};
/// # use iro::termco::AnsiColor;
/// assert_eq!(Element::from(Attribute::Bold).open()?, "\x1b[1m");
/// assert_eq!(Element::from(Attribute::Bold).close()?, "\x1b[22m");
/// assert_eq!(Element::from(Color::background(AnsiColor::Red)).open()?, "\x1b[41m");
/// assert!(Element::from(Disable::Bold).open().is_err());
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    /// Reset all categories.
    Reset,
    /// Enable an attribute.
    Enable(Attribute),
    /// Disable a category or half the intensity category.
    Disable(Disable),
    /// Set the foreground or background color.
    Color(Color),
    /// Select a font.
    Font(Font),
}

impl Element {
    /// Determine whether this element is the reset directive.
    pub const fn is_reset(&self) -> bool {
        matches!(*self, Self::Reset)
    }

    fn unsupported(&self, operation: &'static str) -> Error {
        Error::UnsupportedOperation {
            element: format!("{:?}", self),
            operation,
        }
    }

    /// Get this element's open sequence.
    ///
    /// 24-bit colors are returned as is. Off directives have no open sequence.
    pub fn open(&self) -> Result<String, Error> {
        match *self {
            Self::Reset => Ok(RESET.to_string()),
            Self::Enable(ref attr) => Ok(Sgr(attr.enable_sgr()).to_string()),
            Self::Disable(_) => Err(self.unsupported("open")),
            Self::Color(ref color) => Ok(color.open(Fidelity::TwentyFourBit)),
            Self::Font(ref font) => Ok(font.open()),
        }
    }

    /// Get this element's close sequence.
    ///
    /// Neither the reset directive nor off directives have a close sequence.
    pub fn close(&self) -> Result<String, Error> {
        match *self {
            Self::Reset => Err(self.unsupported("close")),
            Self::Enable(ref attr) => Ok(Sgr(attr.disable_sgr()).to_string()),
            Self::Disable(_) => Err(self.unsupported("close")),
            Self::Color(ref color) => Ok(color.close()),
            Self::Font(ref font) => Ok(font.close()),
        }
    }
}

impl From<Attribute> for Element {
    fn from(value: Attribute) -> Self {
        Self::Enable(value)
    }
}

impl From<Disable> for Element {
    fn from(value: Disable) -> Self {
        Self::Disable(value)
    }
}

impl From<Color> for Element {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<Font> for Element {
    fn from(value: Font) -> Self {
        Self::Font(value)
    }
}
