//! Terminal color representations.
//!
//! This module offers a choice of [`AnsiColor`], [`EightBitColor`], and
//! [`Rgb`] as the color representations understood by terminals. All three can
//! be wrapped as [`Colorant`]s, which know how to write their SGR parameters
//! for either [`Layer`].
//!
//! When a terminal cannot display 24-bit colors, [`Rgb::to_closest_8bit`]
//! finds the closest entry of the 256-color [`PALETTE`].
use crate::error::Error;
use crate::style::{Fidelity, Layer};

// ====================================================================================================================
// Ansi Color
// ====================================================================================================================

/// The 16 extended ANSI colors.
///
/// Unlike an [`EightBitColor`] with the same index, an ANSI color is written
/// with its dedicated SGR parameter, i.e., `30–37` and `90–97` for the
/// foreground as well as `40–47` and `100–107` for the background.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnsiColor {
    #[default]
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColor {
    /// Determine whether this ANSI color is bright.
    pub const fn is_bright(&self) -> bool {
        8 <= *self as u8
    }

    /// Get the base version of this ANSI color.
    ///
    /// If this color is bright, this method returns its non-bright version.
    /// Otherwise, it returns the same color.
    pub const fn to_base(&self) -> AnsiColor {
        use AnsiColor::*;

        match *self {
            BrightBlack => Black,
            BrightRed => Red,
            BrightGreen => Green,
            BrightYellow => Yellow,
            BrightBlue => Blue,
            BrightMagenta => Magenta,
            BrightCyan => Cyan,
            BrightWhite => White,
            _ => *self,
        }
    }

    /// Get the SGR parameter for this ANSI color on the given layer.
    pub const fn sgr(&self, layer: Layer) -> u8 {
        let base = if self.is_bright() { 90 } else { 30 };
        base + layer.offset() + self.to_base() as u8
    }
}

// ====================================================================================================================
// The 256-Color Palette
// ====================================================================================================================

/// The 24-bit values of the 256-color palette.
///
/// The first 16 entries are xterm's default ANSI colors, the next 216 entries
/// form the 6x6x6 RGB cube, and the last 24 entries are the gray gradient.
pub const PALETTE: [[u8; 3]; 256] = build_palette();

const ANSI_VALUES: [[u8; 3]; 16] = [
    [0x00, 0x00, 0x00],
    [0x80, 0x00, 0x00],
    [0x00, 0x80, 0x00],
    [0x80, 0x80, 0x00],
    [0x00, 0x00, 0x80],
    [0x80, 0x00, 0x80],
    [0x00, 0x80, 0x80],
    [0xc0, 0xc0, 0xc0],
    [0x80, 0x80, 0x80],
    [0xff, 0x00, 0x00],
    [0x00, 0xff, 0x00],
    [0xff, 0xff, 0x00],
    [0x00, 0x00, 0xff],
    [0xff, 0x00, 0xff],
    [0x00, 0xff, 0xff],
    [0xff, 0xff, 0xff],
];

const CUBE_LEVELS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

const fn build_palette() -> [[u8; 3]; 256] {
    let mut palette = [[0_u8; 3]; 256];

    let mut index = 0;
    while index < 16 {
        palette[index] = ANSI_VALUES[index];
        index += 1;
    }

    while index < 232 {
        let cube = index - 16;
        palette[index] = [
            CUBE_LEVELS[cube / 36],
            CUBE_LEVELS[(cube / 6) % 6],
            CUBE_LEVELS[cube % 6],
        ];
        index += 1;
    }

    while index < 256 {
        let level = 8 + 10 * (index - 232) as u8;
        palette[index] = [level, level, level];
        index += 1;
    }

    palette
}

// ====================================================================================================================
// Eight-Bit Color
// ====================================================================================================================

/// An 8-bit indexed color, i.e., an index into the 256-color [`PALETTE`].
///
/// Rust code creates an 8-bit color from a `u8` with [`EightBitColor::new`],
/// which cannot fail, or from a wider integer with [`EightBitColor as
/// TryFrom<i32>`](struct.EightBitColor.html#impl-TryFrom%3Ci32%3E-for-EightBitColor),
/// which fails for indices outside `0..=255`.
///
/// ```
/// # use iro::error::Error;
/// # use iro::termco::EightBitColor;
/// let blue = EightBitColor::try_from(12)?;
/// assert_eq!(blue.to_24bit(), [0x00, 0x00, 0xff]);
/// assert_eq!(
///     EightBitColor::try_from(256),
///     Err(Error::InvalidColorValue { value: 256 })
/// );
/// # Ok::<(), Error>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EightBitColor(u8);

impl EightBitColor {
    /// Create a new 8-bit color.
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get this color's index.
    pub const fn index(&self) -> u8 {
        self.0
    }

    /// Look up this color's 24-bit value in the palette.
    pub const fn to_24bit(&self) -> [u8; 3] {
        PALETTE[self.0 as usize]
    }
}

impl TryFrom<i32> for EightBitColor {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Self)
            .map_err(|_| Error::color_value(value))
    }
}

impl From<u8> for EightBitColor {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

// ====================================================================================================================
// Rgb ("True Color")
// ====================================================================================================================

/// A "true," 24-bit RGB color.
///
/// An RGB color can be created from `u8` coordinates with [`Rgb::new`], from
/// wider integers with [`Rgb as
/// TryFrom<[i32; 3]>`](struct.Rgb.html#impl-TryFrom%3C%5Bi32;+3%5D%3E-for-Rgb),
/// and from a hexadecimal color code with [`Rgb as
/// FromStr`](struct.Rgb.html#impl-FromStr-for-Rgb). It formats itself in
/// hashed hexadecimal notation.
///
/// ```
/// # use iro::error::Error;
/// # use iro::termco::Rgb;
/// let sand: Rgb = "#eedcad".parse()?;
/// assert_eq!(sand, Rgb::new(0xee, 0xdc, 0xad));
/// assert_eq!(format!("{}", sand), "#eedcad");
/// assert_eq!(sand[1], 0xdc);
/// # Ok::<(), Error>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Create a new true color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Calculate the weighted Euclidian distance between the two colors.
    ///
    /// The red, green, and blue deltas are weighted by 2, 4, and 3,
    /// respectively. Since the distance only serves for comparisons, this
    /// method omits the square root.
    pub fn weighted_euclidian_distance(&self, other: &Rgb) -> u32 {
        let [r1, g1, b1] = self.0.map(i32::from);
        let [r2, g2, b2] = other.0.map(i32::from);

        let r_delta = r1 - r2;
        let g_delta = g1 - g2;
        let b_delta = b1 - b2;

        (2 * r_delta * r_delta + 4 * g_delta * g_delta + 3 * b_delta * b_delta) as u32
    }

    /// Find the 8-bit color that comes closest to this color.
    ///
    /// This method linearly scans the [`PALETTE`] in index order and returns
    /// the first entry with minimal [`Rgb::weighted_euclidian_distance`].
    ///
    /// ```
    /// # use iro::termco::{EightBitColor, Rgb};
    /// assert_eq!(Rgb::new(0, 0xff, 0).to_closest_8bit(), EightBitColor::new(10));
    /// assert_eq!(Rgb::new(0xd0, 0x5e, 0x84).to_closest_8bit(), EightBitColor::new(168));
    /// ```
    pub fn to_closest_8bit(&self) -> EightBitColor {
        let mut min_distance = u32::MAX;
        let mut min_index = 0;

        for (index, entry) in PALETTE.iter().enumerate() {
            let distance = self.weighted_euclidian_distance(&Rgb(*entry));
            if distance < min_distance {
                min_distance = distance;
                min_index = index;
            }
        }

        EightBitColor(min_index as u8)
    }
}

impl std::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<EightBitColor> for Rgb {
    fn from(value: EightBitColor) -> Self {
        Self(value.to_24bit())
    }
}

impl TryFrom<[i32; 3]> for Rgb {
    type Error = Error;

    fn try_from(value: [i32; 3]) -> Result<Self, Self::Error> {
        let mut coordinates = [0_u8; 3];
        for (target, source) in coordinates.iter_mut().zip(value) {
            *target = u8::try_from(source).map_err(|_| Error::color_value(source))?;
        }
        Ok(Self(coordinates))
    }
}

impl std::str::FromStr for Rgb {
    type Err = Error;

    /// Parse a hexadecimal color code such as `#0f7f3c` or `0f7f3c`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim_start_matches('#');
        if digits.chars().count() != 6 {
            return Err(Error::InvalidHexLength(s.to_string()));
        } else if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHexDigit(s.to_string()));
        }

        let parse = |index: usize| {
            u8::from_str_radix(&digits[index..index + 2], 16)
                .map_err(|_| Error::InvalidHexDigit(s.to_string()))
        };

        Ok(Self([parse(0)?, parse(2)?, parse(4)?]))
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

// ====================================================================================================================
// Colorant
// ====================================================================================================================

/// A colorant combines all of iro's color representations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Colorant {
    Ansi(AnsiColor),
    EightBit(EightBitColor),
    Rgb(Rgb),
}

impl Colorant {
    /// Cap this colorant to the given fidelity.
    ///
    /// Only 24-bit colors are affected: When the fidelity is
    /// [`Fidelity::EightBit`], they are replaced by the closest 8-bit color.
    pub fn cap(&self, fidelity: Fidelity) -> Self {
        match *self {
            Self::Rgb(ref rgb) if fidelity < Fidelity::TwentyFourBit => {
                let capped = rgb.to_closest_8bit();
                log::debug!("capping {} to 8-bit color {}", rgb, capped.index());
                Self::EightBit(capped)
            }
            other => other,
        }
    }

    /// Write the colorant's SGR parameters for the given layer.
    pub fn write_sgr_params(
        &self,
        layer: Layer,
        f: &mut impl std::fmt::Write,
    ) -> std::fmt::Result {
        match *self {
            Self::Ansi(ref c) => write!(f, "{}", c.sgr(layer)),
            Self::EightBit(ref c) => write!(f, "{};5;{}", 38 + layer.offset(), c.index()),
            Self::Rgb(ref c) => write!(f, "{};2;{};{};{}", 38 + layer.offset(), c[0], c[1], c[2]),
        }
    }

    /// Get the SGR parameter that restores the default color for the given
    /// layer.
    pub const fn default_sgr(layer: Layer) -> u8 {
        39 + layer.offset()
    }
}

impl From<AnsiColor> for Colorant {
    fn from(value: AnsiColor) -> Self {
        Self::Ansi(value)
    }
}

impl From<EightBitColor> for Colorant {
    fn from(value: EightBitColor) -> Self {
        Self::EightBit(value)
    }
}

impl From<Rgb> for Colorant {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}
