// Copyright 2025 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional `bytemuck` trait impls.

#![allow(
    unsafe_code,
    reason = "The `bytemuck` marker traits are `unsafe` and require `unsafe impl`."
)]

use crate::TextColor;
use bytemuck::{Contiguous, NoUninit, Zeroable, checked::CheckedBitPattern};

// Safety: The enum is `repr(u8)` and has only fieldless variants.
unsafe impl NoUninit for TextColor {}

// Safety: The enum is `repr(u8)` and `0` is a valid value (`TextColor::None`).
unsafe impl Zeroable for TextColor {}

// Safety: The enum is `repr(u8)`.
unsafe impl CheckedBitPattern for TextColor {
    type Bits = u8;

    fn is_valid_bit_pattern(bits: &u8) -> bool {
        *bits <= Self::MAX_VALUE
    }
}

// Safety: The enum is `repr(u8)` with contiguous discriminants from `None` to `Reset`.
unsafe impl Contiguous for TextColor {
    type Int = u8;
    const MIN_VALUE: u8 = Self::None as u8;
    #[allow(
        clippy::use_self,
        reason = "Using `Self::MAX_VALUE` here would refer to `Contiguous::MAX_VALUE` (self-reference)."
    )]
    const MAX_VALUE: u8 = TextColor::MAX_VALUE;
}

#[cfg(test)]
mod tests {
    use super::TextColor;
    use bytemuck::{Contiguous, Zeroable, checked::try_from_bytes};
    use core::ptr;

    #[test]
    fn checked_bit_pattern() {
        let valid = bytemuck::bytes_of(&13_u8);
        let invalid = bytemuck::bytes_of(&18_u8);

        assert_eq!(Ok(&TextColor::Red), try_from_bytes::<TextColor>(valid));
        assert!(try_from_bytes::<TextColor>(invalid).is_err());
    }

    #[test]
    fn contiguous() {
        for color in TextColor::all() {
            assert_eq!(Some(*color), TextColor::from_integer(color.into_integer()));
        }
        assert_eq!(None, TextColor::from_integer(255));
    }

    #[test]
    fn zeroable() {
        assert_eq!(TextColor::zeroed(), TextColor::None);
    }

    /// Checks at compile time that every value up to `MAX_VALUE` is a valid [`TextColor`] tag.
    const _: () = {
        let mut value = 0;
        while value <= TextColor::MAX_VALUE {
            // Safety: In a const context, so an invalid TextColor is a compile error.
            let it: TextColor = unsafe { ptr::read((&raw const value).cast()) };
            if it as u8 != value {
                unreachable!();
            }
            value += 1;
        }
    };
}

#[cfg(doctest)]
/// Doctests aren't collected under `cfg(test)`; we can use `cfg(doctest)` instead.
mod doctests {
    /// A value one past `TextColor::MAX_VALUE` must not be a valid tag, so adding a color
    /// without moving `MAX_VALUE` fails here.
    ///
    /// ```compile_fail,E0080
    /// use text_format::TextColor;
    /// const {
    ///     let value = TextColor::MAX_VALUE + 1;
    ///     // Safety: In a const context, so an invalid TextColor is a compile error.
    ///     let it: TextColor = unsafe { core::ptr::read((&raw const value).cast()) };
    ///     if it as u8 != value {
    ///         unreachable!();
    ///     }
    /// }
    /// ```
    const _TEXT_COLOR: () = {};
}
