// Copyright 2025 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{TextColor, TextStyle};

/// An immutable color and style pair applied to a text node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextFormat {
    color: TextColor,
    style: TextStyle,
}

impl TextFormat {
    /// No color and no style.
    pub const NONE: Self = Self::new(TextColor::None, TextStyle::NONE);

    /// Creates a format from a color and a style.
    #[inline]
    pub const fn new(color: TextColor, style: TextStyle) -> Self {
        Self { color, style }
    }

    /// Returns the color.
    #[inline]
    pub const fn color(self) -> TextColor {
        self.color
    }

    /// Returns the style.
    #[inline]
    pub const fn style(self) -> TextStyle {
        self.style
    }

    /// Returns a copy with the color replaced.
    #[inline]
    pub const fn with_color(self, color: TextColor) -> Self {
        Self::new(color, self.style)
    }

    /// Returns a copy with the style replaced.
    #[inline]
    pub const fn with_style(self, style: TextStyle) -> Self {
        Self::new(self.color, style)
    }

    /// Layers `overlay` on top of `self`.
    ///
    /// For the color, [`TextColor::None`] in the overlay inherits `self`'s color,
    /// [`TextColor::Reset`] clears it to `None`, and any named color overrides it. Styles are
    /// composed with [`TextStyle::and`].
    ///
    /// ```
    /// use text_format::{TextColor, TextFormat, TextStyle};
    ///
    /// let parent = TextFormat::new(TextColor::Red, TextStyle::BOLD);
    /// let child = TextFormat::new(TextColor::None, TextStyle::ITALIC);
    /// let merged = parent.merge(child);
    /// assert_eq!(merged.color(), TextColor::Red);
    /// assert_eq!(merged.style(), TextStyle::BOLD | TextStyle::ITALIC);
    ///
    /// let cleared = parent.merge(TextColor::Reset.into());
    /// assert_eq!(cleared.color(), TextColor::None);
    /// ```
    pub fn merge(self, overlay: Self) -> Self {
        let color = match overlay.color {
            TextColor::None => self.color,
            TextColor::Reset => TextColor::None,
            color => color,
        };
        Self::new(color, self.style.and(&[overlay.style]))
    }

    /// Returns `true` if there is no color and no style flag set.
    pub fn is_empty(self) -> bool {
        self.color.is_none() && self.style.is_empty()
    }
}

impl From<TextColor> for TextFormat {
    fn from(color: TextColor) -> Self {
        Self::NONE.with_color(color)
    }
}

impl From<TextStyle> for TextFormat {
    fn from(style: TextStyle) -> Self {
        Self::NONE.with_style(style)
    }
}

#[cfg(test)]
mod tests {
    use crate::{TextColor, TextFormat, TextStyle};

    #[test]
    fn merge_colors() {
        let none = TextFormat::from(TextColor::None);
        let red = TextFormat::from(TextColor::Red);
        let blue = TextFormat::from(TextColor::Blue);
        let reset = TextFormat::from(TextColor::Reset);

        assert_eq!(none.merge(red).color(), TextColor::Red);
        assert_eq!(red.merge(reset).color(), TextColor::None);
        assert_eq!(red.merge(none).color(), TextColor::Red);
        assert_eq!(red.merge(blue).color(), TextColor::Blue);
        assert_eq!(none.merge(reset).color(), TextColor::None);
    }

    #[test]
    fn merge_composes_styles() {
        let parent = TextFormat::new(TextColor::Gold, TextStyle::BOLD);
        let child = TextFormat::from(TextStyle::UNDERLINE);
        assert_eq!(
            parent.merge(child),
            TextFormat::new(TextColor::Gold, TextStyle::BOLD.underline(true))
        );
        // A style can only gain flags through a merge.
        assert_eq!(parent.merge(TextFormat::NONE).style(), TextStyle::BOLD);
    }

    #[test]
    fn emptiness() {
        assert!(TextFormat::NONE.is_empty());
        assert!(TextFormat::default().is_empty());
        assert!(TextFormat::from(TextStyle::RESET).is_empty());
        assert!(!TextFormat::from(TextColor::Reset).is_empty());
        assert!(!TextFormat::from(TextColor::Aqua).is_empty());
        assert!(!TextFormat::from(TextStyle::STRIKETHROUGH).is_empty());
    }

    #[test]
    fn with_replaces_one_half() {
        let format = TextFormat::new(TextColor::Green, TextStyle::ITALIC);
        assert_eq!(
            format.with_color(TextColor::White),
            TextFormat::new(TextColor::White, TextStyle::ITALIC)
        );
        assert_eq!(
            format.with_style(TextStyle::NONE),
            TextFormat::from(TextColor::Green)
        );
    }
}
