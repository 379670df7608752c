use std::fmt;

use super::element::{ColorSgr, Sgr, RESET};
use super::{Attribute, Disable, Element, Fidelity, Font, Layer};
use crate::termco::Colorant;

/// The intensity category: bold, dim, or both.
///
/// Bold and dim have their own open sequences but share one close sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intensity {
    Bold,
    Dim,
    BoldDim,
}

impl Intensity {
    /// Add bold or dim to an optional intensity.
    const fn with(before: Option<Intensity>, attr: Attribute) -> Intensity {
        match (before, attr) {
            (Some(Self::Dim), Attribute::Bold) | (Some(Self::Bold), Attribute::Dim) => {
                Self::BoldDim
            }
            (Some(Self::BoldDim), _) => Self::BoldDim,
            (_, Attribute::Dim) => Self::Dim,
            _ => Self::Bold,
        }
    }

    /// Remove bold or dim from an optional intensity.
    const fn without(before: Option<Intensity>, attr: Attribute) -> Option<Intensity> {
        match (before, attr) {
            (Some(Self::Bold), Attribute::Bold) | (Some(Self::Dim), Attribute::Dim) => None,
            (Some(Self::BoldDim), Attribute::Bold) => Some(Self::Dim),
            (Some(Self::BoldDim), Attribute::Dim) => Some(Self::Bold),
            _ => before,
        }
    }

    fn write_open(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Bold => write!(f, "{}", Sgr(Attribute::Bold.enable_sgr())),
            Self::Dim => write!(f, "{}", Sgr(Attribute::Dim.enable_sgr())),
            Self::BoldDim => write!(
                f,
                "{}{}",
                Sgr(Attribute::Bold.enable_sgr()),
                Sgr(Attribute::Dim.enable_sgr())
            ),
        }
    }

    /// Write the sequence switching from the previous intensity to this one.
    ///
    /// Adding the missing half of bold+dim only requires that half's open
    /// sequence. Every other change from a non-empty intensity needs the
    /// shared close sequence first.
    fn write_open_from(&self, before: Option<Intensity>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (*self, before) {
            (Self::BoldDim, Some(Self::Dim)) => write!(f, "{}", Sgr(Attribute::Bold.enable_sgr())),
            (Self::BoldDim, Some(Self::Bold)) => write!(f, "{}", Sgr(Attribute::Dim.enable_sgr())),
            (_, None) | (Self::BoldDim, _) => self.write_open(f),
            _ => {
                write!(f, "{}", Sgr(Attribute::Bold.disable_sgr()))?;
                self.write_open(f)
            }
        }
    }
}

/// The blink category: slow or rapid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Blink {
    Slow,
    Rapid,
}

impl Blink {
    const fn attribute(&self) -> Attribute {
        match *self {
            Self::Slow => Attribute::SlowBlink,
            Self::Rapid => Attribute::RapidBlink,
        }
    }
}

/// A composite terminal style.
///
/// A style has one slot per independent category. Every slot is empty by
/// default, i.e., [`Style::default`] denotes the terminal's default
/// appearance. Styles are immutable values: [`Style::apply`] returns a new
/// style and [`Style::diff`] computes the escape sequences for switching from
/// one style to another.
///
/// ```
/// # use iro::style::{Attribute, Disable, Style};
/// let style = Style::default()
///     .apply(Attribute::Bold)
///     .apply(Attribute::Underline);
/// assert_eq!(Style::default().diff(&style), "\x1b[1m\x1b[4m");
///
/// let plain = style.apply(Disable::Bold);
/// assert_eq!(style.diff(&plain), "\x1b[22m");
/// assert_eq!(plain.diff(&Style::default()), "\x1b[0m");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    intensity: Option<Intensity>,
    italic: bool,
    underline: bool,
    blink: Option<Blink>,
    invert: bool,
    hide: bool,
    strike: bool,
    overline: bool,
    gothic: bool,
    doubly_underline: bool,
    foreground: Option<Colorant>,
    background: Option<Colorant>,
    font: Option<Font>,
}

impl Style {
    /// Determine whether this style is the default style.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Get the intensity.
    pub const fn intensity(&self) -> Option<Intensity> {
        self.intensity
    }

    /// Get the blink speed.
    pub const fn blink(&self) -> Option<Blink> {
        self.blink
    }

    /// Get the foreground colorant.
    pub const fn foreground(&self) -> Option<&Colorant> {
        self.foreground.as_ref()
    }

    /// Get the background colorant.
    pub const fn background(&self) -> Option<&Colorant> {
        self.background.as_ref()
    }

    /// Get the font.
    pub const fn font(&self) -> Option<Font> {
        self.font
    }

    /// Determine whether the given attribute is active.
    pub const fn has(&self, attr: Attribute) -> bool {
        use Attribute::*;

        match attr {
            Bold => matches!(self.intensity, Some(Intensity::Bold | Intensity::BoldDim)),
            Dim => matches!(self.intensity, Some(Intensity::Dim | Intensity::BoldDim)),
            Italic => self.italic,
            Underline => self.underline,
            SlowBlink => matches!(self.blink, Some(Blink::Slow)),
            RapidBlink => matches!(self.blink, Some(Blink::Rapid)),
            Invert => self.invert,
            Hide => self.hide,
            Strike => self.strike,
            Gothic => self.gothic,
            DoublyUnderline => self.doubly_underline,
            Overline => self.overline,
        }
    }

    fn flag(&mut self, attr: Attribute) -> Option<&mut bool> {
        use Attribute::*;

        match attr {
            Italic => Some(&mut self.italic),
            Underline => Some(&mut self.underline),
            Invert => Some(&mut self.invert),
            Hide => Some(&mut self.hide),
            Strike => Some(&mut self.strike),
            Gothic => Some(&mut self.gothic),
            DoublyUnderline => Some(&mut self.doubly_underline),
            Overline => Some(&mut self.overline),
            Bold | Dim | SlowBlink | RapidBlink => None,
        }
    }

    /// Create a new style that reflects the given element.
    ///
    /// Reset clears every category. An on directive sets its category, with
    /// bold and dim combining into bold+dim. An off directive clears only its
    /// category, with disabling bold or dim from bold+dim leaving the other
    /// half. A color replaces the entire color slot of its layer. Font 0 clears
    /// the font slot.
    pub fn apply(&self, element: impl Into<Element>) -> Self {
        let mut style = *self;

        match element.into() {
            Element::Reset => return Self::default(),
            Element::Enable(attr) => match attr {
                Attribute::Bold | Attribute::Dim => {
                    style.intensity = Some(Intensity::with(self.intensity, attr));
                }
                Attribute::SlowBlink => style.blink = Some(Blink::Slow),
                Attribute::RapidBlink => style.blink = Some(Blink::Rapid),
                _ => {
                    if let Some(flag) = style.flag(attr) {
                        *flag = true;
                    }
                }
            },
            Element::Disable(disable) => match disable {
                Disable::Intensity => style.intensity = None,
                Disable::Bold => style.intensity = Intensity::without(self.intensity, Attribute::Bold),
                Disable::Dim => style.intensity = Intensity::without(self.intensity, Attribute::Dim),
                Disable::Blink => style.blink = None,
                Disable::Italic => style.italic = false,
                Disable::Underline => style.underline = false,
                Disable::Invert => style.invert = false,
                Disable::Hide => style.hide = false,
                Disable::Strike => style.strike = false,
                Disable::Overline => style.overline = false,
                Disable::Gothic => style.gothic = false,
                Disable::DoublyUnderline => style.doubly_underline = false,
                Disable::Font => style.font = None,
                Disable::Foreground => style.foreground = None,
                Disable::Background => style.background = None,
            },
            Element::Color(color) => match color.layer() {
                Layer::Foreground => style.foreground = Some(*color.colorant()),
                Layer::Background => style.background = Some(*color.colorant()),
            },
            Element::Font(font) => style.font = (!font.is_default()).then_some(font),
        }

        style
    }

    /// Compute the escape sequences switching from this style to the other
    /// style, emitting 24-bit colors as is.
    pub fn diff(&self, after: &Style) -> String {
        self.diff_with(after, Fidelity::TwentyFourBit)
    }

    /// Compute the escape sequences switching from this style to the other
    /// style with colors capped to the given fidelity.
    ///
    /// The categories are compared one by one. Unchanged categories contribute
    /// nothing, newly set or changed categories contribute the new value's open
    /// sequence, and cleared categories contribute the old value's close
    /// sequence. Intensity changes are computed relative to the previous
    /// intensity. If the other style is the default style, a non-empty result
    /// collapses into the reset sequence.
    pub fn diff_with(&self, after: &Style, fidelity: Fidelity) -> String {
        Transition {
            before: self,
            after,
            fidelity,
        }
        .to_string()
    }
}

/// The escape sequences switching between two styles.
///
/// Every category that differs contributes at least one sequence. Hence the
/// transition is empty exactly when both styles are equal.
struct Transition<'a> {
    before: &'a Style,
    after: &'a Style,
    fidelity: Fidelity,
}

impl Transition<'_> {
    fn write_flag(&self, attr: Attribute, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.before.has(attr), self.after.has(attr)) {
            (false, true) => write!(f, "{}", Sgr(attr.enable_sgr())),
            (true, false) => write!(f, "{}", Sgr(attr.disable_sgr())),
            _ => Ok(()),
        }
    }

    fn write_color(
        &self,
        layer: Layer,
        before: Option<&Colorant>,
        after: Option<&Colorant>,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if before == after {
            return Ok(());
        }

        match (before, after) {
            (_, Some(colorant)) => write!(f, "{}", ColorSgr(layer, colorant.cap(self.fidelity))),
            (Some(_), None) => write!(f, "{}", Sgr(Colorant::default_sgr(layer))),
            (None, None) => Ok(()),
        }
    }
}

impl fmt::Display for Transition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (before, after) = (self.before, self.after);
        if before == after {
            return Ok(());
        } else if after.is_default() {
            return f.write_str(RESET);
        }

        if before.intensity != after.intensity {
            match (before.intensity, after.intensity) {
                (_, Some(intensity)) => intensity.write_open_from(before.intensity, f)?,
                (Some(_), None) => write!(f, "{}", Sgr(Attribute::Bold.disable_sgr()))?,
                (None, None) => (),
            }
        }

        self.write_flag(Attribute::Italic, f)?;
        self.write_flag(Attribute::Underline, f)?;

        if before.blink != after.blink {
            match (before.blink, after.blink) {
                (_, Some(blink)) => write!(f, "{}", Sgr(blink.attribute().enable_sgr()))?,
                (Some(blink), None) => write!(f, "{}", Sgr(blink.attribute().disable_sgr()))?,
                (None, None) => (),
            }
        }

        for attr in [
            Attribute::Invert,
            Attribute::Hide,
            Attribute::Strike,
            Attribute::Overline,
            Attribute::Gothic,
            Attribute::DoublyUnderline,
        ] {
            self.write_flag(attr, f)?;
        }

        self.write_color(
            Layer::Foreground,
            before.foreground.as_ref(),
            after.foreground.as_ref(),
            f,
        )?;
        self.write_color(
            Layer::Background,
            before.background.as_ref(),
            after.background.as_ref(),
            f,
        )?;

        match (before.font, after.font) {
            (Some(old), Some(new)) if old == new => Ok(()),
            (_, Some(font)) => f.write_str(&font.open()),
            (Some(font), None) => f.write_str(&font.close()),
            (None, None) => Ok(()),
        }
    }
}
