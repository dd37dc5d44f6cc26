// Copyright 2025 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// The color of a run of text.
///
/// Besides the sixteen named colors there are two sentinels: [`TextColor::None`] means no
/// explicit color (inherit from the parent), and [`TextColor::Reset`] asks for any inherited
/// color to be cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TextColor {
    /// No explicit color.
    #[default]
    None = 0,
    /// Black.
    Black = 1,
    /// Dark blue.
    DarkBlue = 2,
    /// Dark green.
    DarkGreen = 3,
    /// Dark aqua.
    DarkAqua = 4,
    /// Dark red.
    DarkRed = 5,
    /// Dark purple.
    DarkPurple = 6,
    /// Gold.
    Gold = 7,
    /// Gray.
    Gray = 8,
    /// Dark gray.
    DarkGray = 9,
    /// Blue.
    Blue = 10,
    /// Green.
    Green = 11,
    /// Aqua.
    Aqua = 12,
    /// Red.
    Red = 13,
    /// Light purple.
    LightPurple = 14,
    /// Yellow.
    Yellow = 15,
    /// White.
    White = 16,
    /// Clears the inherited color.
    Reset = 17,
    // NOTICE: If a new value is added, be sure to modify `MAX_VALUE`.
}

impl TextColor {
    /// Returns the maximum numeric value for known variants.
    pub const MAX_VALUE: u8 = Self::Reset as u8;

    /// Returns `true` for [`TextColor::None`].
    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` for [`TextColor::Reset`].
    #[inline]
    pub const fn is_reset(self) -> bool {
        matches!(self, Self::Reset)
    }

    /// Returns `true` for any color other than the two sentinels.
    #[inline]
    pub const fn is_named(self) -> bool {
        !self.is_none() && !self.is_reset()
    }

    /// Returns a stable, lowercase identifier for this color.
    ///
    /// ```
    /// use text_format::TextColor;
    ///
    /// assert_eq!(TextColor::LightPurple.name(), "light_purple");
    /// assert_eq!(TextColor::None.to_string(), "none");
    /// ```
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Black => "black",
            Self::DarkBlue => "dark_blue",
            Self::DarkGreen => "dark_green",
            Self::DarkAqua => "dark_aqua",
            Self::DarkRed => "dark_red",
            Self::DarkPurple => "dark_purple",
            Self::Gold => "gold",
            Self::Gray => "gray",
            Self::DarkGray => "dark_gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Red => "red",
            Self::LightPurple => "light_purple",
            Self::Yellow => "yellow",
            Self::White => "white",
            Self::Reset => "reset",
        }
    }

    /// Returns a slice containing all color variants, in discriminant order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::None,
            Self::Black,
            Self::DarkBlue,
            Self::DarkGreen,
            Self::DarkAqua,
            Self::DarkRed,
            Self::DarkPurple,
            Self::Gold,
            Self::Gray,
            Self::DarkGray,
            Self::Blue,
            Self::Green,
            Self::Aqua,
            Self::Red,
            Self::LightPurple,
            Self::Yellow,
            Self::White,
            Self::Reset,
        ]
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
