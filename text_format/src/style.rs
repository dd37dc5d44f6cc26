// Copyright 2025 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{BitOr, BitOrAssign, Not};

/// An immutable set of five boolean text style flags.
///
/// Every "setter" returns a modified copy; a `TextStyle` is never changed in place.
///
/// The with-ers such as [`bold`](Self::bold) take the new flag value explicitly; pass `true` to
/// turn a flag on. To combine several set flags, the single-flag constants and `|` are usually
/// shorter: `TextStyle::BOLD | TextStyle::ITALIC`.
///
/// ```
/// use text_format::TextStyle;
///
/// let style = TextStyle::NONE.bold(true).italic(true);
/// assert!(style.contains(&[TextStyle::BOLD]));
/// assert!(!style.contains(&[TextStyle::UNDERLINE]));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextStyle {
    bold: bool,
    italic: bool,
    underline: bool,
    strikethrough: bool,
    obfuscated: bool,
}

impl TextStyle {
    /// No flags set.
    pub const NONE: Self = Self::new(false, false, false, false, false);

    /// Only the bold flag set.
    pub const BOLD: Self = Self::NONE.bold(true);

    /// Only the italic flag set.
    pub const ITALIC: Self = Self::NONE.italic(true);

    /// Only the underline flag set.
    pub const UNDERLINE: Self = Self::NONE.underline(true);

    /// Only the strikethrough flag set.
    pub const STRIKETHROUGH: Self = Self::NONE.strikethrough(true);

    /// Only the obfuscated flag set.
    pub const OBFUSCATED: Self = Self::NONE.obfuscated(true);

    /// The style that clears inherited flags.
    ///
    /// This has no flags set and is therefore equal to [`TextStyle::NONE`].
    pub const RESET: Self = Self::new(false, false, false, false, false);

    /// Creates a style from all five flags.
    pub const fn new(
        bold: bool,
        italic: bool,
        underline: bool,
        strikethrough: bool,
        obfuscated: bool,
    ) -> Self {
        Self {
            bold,
            italic,
            underline,
            strikethrough,
            obfuscated,
        }
    }

    /// Returns `true` if the bold flag is set.
    #[inline]
    pub const fn is_bold(self) -> bool {
        self.bold
    }

    /// Returns `true` if the italic flag is set.
    #[inline]
    pub const fn is_italic(self) -> bool {
        self.italic
    }

    /// Returns `true` if the underline flag is set.
    #[inline]
    pub const fn is_underline(self) -> bool {
        self.underline
    }

    /// Returns `true` if the strikethrough flag is set.
    #[inline]
    pub const fn is_strikethrough(self) -> bool {
        self.strikethrough
    }

    /// Returns `true` if the obfuscated flag is set.
    #[inline]
    pub const fn is_obfuscated(self) -> bool {
        self.obfuscated
    }

    /// Returns a copy with the bold flag set to `value`.
    #[inline]
    pub const fn bold(mut self, value: bool) -> Self {
        self.bold = value;
        self
    }

    /// Returns a copy with the italic flag set to `value`.
    #[inline]
    pub const fn italic(mut self, value: bool) -> Self {
        self.italic = value;
        self
    }

    /// Returns a copy with the underline flag set to `value`.
    #[inline]
    pub const fn underline(mut self, value: bool) -> Self {
        self.underline = value;
        self
    }

    /// Returns a copy with the strikethrough flag set to `value`.
    #[inline]
    pub const fn strikethrough(mut self, value: bool) -> Self {
        self.strikethrough = value;
        self
    }

    /// Returns a copy with the obfuscated flag set to `value`.
    #[inline]
    pub const fn obfuscated(mut self, value: bool) -> Self {
        self.obfuscated = value;
        self
    }

    /// Returns `true` if no flag is set.
    ///
    /// ```
    /// use text_format::TextStyle;
    ///
    /// assert!(TextStyle::NONE.is_empty());
    /// assert!(!TextStyle::ITALIC.is_empty());
    /// ```
    pub fn is_empty(self) -> bool {
        self.flags() == [false; 5]
    }

    /// Returns `true` if this style equals [`TextStyle::RESET`].
    ///
    /// Since `RESET` carries no flags, this holds for every empty style, including
    /// [`TextStyle::NONE`].
    pub fn is_reset(self) -> bool {
        self == Self::RESET
    }

    /// Returns `true` if every flag set in any of `styles` is also set in `self`.
    ///
    /// Flags that are unset in a query are ignored, so `contains(&[TextStyle::NONE])` is always
    /// `true`, as is a query with no styles at all.
    pub fn contains(self, styles: &[Self]) -> bool {
        let own = self.flags();
        styles.iter().all(|style| {
            own.iter()
                .zip(style.flags())
                .all(|(&have, want)| !want || have)
        })
    }

    /// Returns the style with every flag flipped.
    #[inline]
    pub const fn negate(self) -> Self {
        Self::new(
            !self.bold,
            !self.italic,
            !self.underline,
            !self.strikethrough,
            !self.obfuscated,
        )
    }

    /// Composes `self` with each of `styles`, in order.
    ///
    /// A flag is set in the result if it is set in `self` or in any of `styles`; despite the
    /// name this is a union, not an intersection.
    ///
    /// ```
    /// use text_format::TextStyle;
    ///
    /// let style = TextStyle::BOLD.and(&[TextStyle::ITALIC, TextStyle::BOLD]);
    /// assert_eq!(style, TextStyle::NONE.bold(true).italic(true));
    /// ```
    pub fn and(self, styles: &[Self]) -> Self {
        self.compose(styles.iter().copied())
    }

    /// Composes `self` with the negation of each of `styles`, in order.
    ///
    /// A flag is set in the result if it is set in `self` or *unset* in any of `styles`.
    pub fn and_not(self, styles: &[Self]) -> Self {
        self.compose(styles.iter().map(|style| style.negate()))
    }

    fn compose(self, styles: impl Iterator<Item = Self>) -> Self {
        let mut flags = self.flags();
        for style in styles {
            for (acc, next) in flags.iter_mut().zip(style.flags()) {
                *acc = compose_flag(*acc, next);
            }
        }
        Self::from_flags(flags)
    }

    const fn flags(self) -> [bool; 5] {
        [
            self.bold,
            self.italic,
            self.underline,
            self.strikethrough,
            self.obfuscated,
        ]
    }

    const fn from_flags(flags: [bool; 5]) -> Self {
        let [bold, italic, underline, strikethrough, obfuscated] = flags;
        Self::new(bold, italic, underline, strikethrough, obfuscated)
    }
}

/// An unset accumulator takes the next value, a set one is kept.
#[inline]
const fn compose_flag(acc: bool, next: bool) -> bool {
    acc || next
}

impl Not for TextStyle {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.negate()
    }
}

impl BitOr for TextStyle {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self.and(&[rhs])
    }
}

impl BitOrAssign for TextStyle {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::TextStyle;

    const ALL: TextStyle = TextStyle::new(true, true, true, true, true);

    fn every_style() -> impl Iterator<Item = TextStyle> {
        (0_u8..32).map(|bits| {
            TextStyle::new(
                bits & 1 != 0,
                bits & 2 != 0,
                bits & 4 != 0,
                bits & 8 != 0,
                bits & 16 != 0,
            )
        })
    }

    #[test]
    fn setters_override_one_flag() {
        let style = TextStyle::BOLD.underline(true);
        assert!(style.is_bold() && style.is_underline());
        assert!(!style.is_italic() && !style.is_strikethrough() && !style.is_obfuscated());

        let cleared = style.bold(false);
        assert_eq!(cleared, TextStyle::UNDERLINE);
        assert_eq!(ALL.obfuscated(false).negate(), TextStyle::OBFUSCATED);
    }

    #[test]
    fn passing_true_matches_constants() {
        assert_eq!(TextStyle::NONE.bold(true), TextStyle::BOLD);
        assert_eq!(TextStyle::NONE.strikethrough(true), TextStyle::STRIKETHROUGH);
        assert_eq!(
            TextStyle::NONE.bold(true).italic(true),
            TextStyle::BOLD | TextStyle::ITALIC
        );
    }

    #[test]
    fn double_negation_is_identity() {
        for style in every_style() {
            assert_eq!(style.negate().negate(), style, "{style:?}");
            assert_eq!(!!style, style, "{style:?}");
        }
        assert_eq!(TextStyle::NONE.negate(), ALL);
    }

    #[test]
    fn contains_ignores_unset_query_flags() {
        assert!(TextStyle::BOLD.contains(&[TextStyle::NONE.bold(true)]));
        assert!(!TextStyle::BOLD.contains(&[TextStyle::ITALIC]));
        assert!(TextStyle::BOLD.contains(&[TextStyle::NONE]));
        assert!(TextStyle::NONE.contains(&[]));

        let style = TextStyle::BOLD | TextStyle::ITALIC;
        assert!(style.contains(&[TextStyle::BOLD, TextStyle::ITALIC]));
        assert!(!style.contains(&[TextStyle::BOLD, TextStyle::UNDERLINE]));
        assert!(!TextStyle::BOLD.contains(&[style]));
    }

    #[test]
    fn and_is_a_union() {
        assert_eq!(TextStyle::NONE.and(&[TextStyle::BOLD]), TextStyle::BOLD);
        assert_eq!(TextStyle::BOLD.and(&[TextStyle::BOLD]), TextStyle::BOLD);
        assert_eq!(TextStyle::BOLD.and(&[]), TextStyle::BOLD);
        assert_eq!(
            TextStyle::BOLD.and(&[TextStyle::ITALIC, TextStyle::STRIKETHROUGH]),
            TextStyle::new(true, true, false, true, false)
        );
        // Nothing set in the receiver can be cleared by composition.
        for style in every_style() {
            assert_eq!(style.and(&[TextStyle::NONE]), style, "{style:?}");
            assert_eq!(style.and(&[ALL]), ALL, "{style:?}");
        }
    }

    #[test]
    fn and_not_unions_the_negations() {
        assert_eq!(TextStyle::NONE.and_not(&[ALL]), TextStyle::NONE);
        assert_eq!(TextStyle::NONE.and_not(&[TextStyle::NONE]), ALL);
        assert_eq!(
            TextStyle::BOLD.and_not(&[ALL.italic(false)]),
            TextStyle::BOLD.italic(true)
        );
    }

    #[test]
    fn bit_or_assign_composes() {
        let mut style = TextStyle::UNDERLINE;
        style |= TextStyle::OBFUSCATED;
        assert_eq!(style, TextStyle::UNDERLINE.obfuscated(true));
    }

    #[test]
    fn reset_is_indistinguishable_from_none() {
        assert_eq!(TextStyle::RESET, TextStyle::NONE);
        assert!(TextStyle::NONE.is_reset());
        assert!(TextStyle::NONE.is_empty());
        assert!(!TextStyle::BOLD.is_reset());
        assert!(!TextStyle::BOLD.is_empty());
        assert_eq!(TextStyle::default(), TextStyle::NONE);
    }
}
