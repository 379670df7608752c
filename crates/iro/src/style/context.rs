/// The targeted display layer: Foreground or background.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The foreground or text layer.
    #[default]
    Foreground,
    /// The background layer.
    Background,
}

impl Layer {
    /// Determine whether this layer is the foreground.
    pub const fn is_foreground(&self) -> bool {
        matches!(*self, Self::Foreground)
    }

    /// Determine whether this layer is the background.
    pub const fn is_background(&self) -> bool {
        matches!(*self, Self::Background)
    }

    /// Determine the offset for this layer.
    ///
    /// The offset is added to the SGR parameter values for foreground colors
    /// and therefore zero for [`Layer::Foreground`].
    pub const fn offset(&self) -> u8 {
        match *self {
            Self::Foreground => 0,
            Self::Background => 10,
        }
    }
}

/// The color fidelity of rendered output.
///
/// Named ANSI colors and 8-bit colors are always written as is. But 24-bit
/// colors are written as is only for [`Fidelity::TwentyFourBit`]. For
/// [`Fidelity::EightBit`], they are replaced by the closest 8-bit color
/// instead.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Fidelity {
    /// 8-bit indexed colors including ANSI colors
    EightBit,
    /// 24-bit RGB color.
    #[default]
    TwentyFourBit,
}

impl Fidelity {
    /// Determine the fidelity for the given RGB switch.
    pub const fn with_rgb_disabled(disabled: bool) -> Self {
        if disabled {
            Self::EightBit
        } else {
            Self::TwentyFourBit
        }
    }
}
