// Copyright 2025 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Formatting values for rich text.
//!
//! This crate is a small, `no_std` vocabulary layer shared by text trees and the renderers that
//! consume them. It defines three immutable value types:
//!
//! - [`TextStyle`]: five boolean flags (bold, italic, underline, strikethrough, obfuscated) with a
//!   composition algebra.
//! - [`TextColor`]: a named color, or one of the `None` / `Reset` sentinels.
//! - [`TextFormat`]: a color and a style, with [`TextFormat::merge`] for layering a child format on
//!   top of its parent's.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//! - `bytemuck`: Implement traits from `bytemuck` on [`TextColor`].
//!
//! ## Example
//!
//! ```
//! use text_format::{TextColor, TextFormat, TextStyle};
//!
//! let heading = TextFormat::new(TextColor::Gold, TextStyle::BOLD);
//! let emphasis = TextFormat::from(TextStyle::ITALIC);
//!
//! let resolved = heading.merge(emphasis);
//! assert_eq!(resolved.color(), TextColor::Gold);
//! assert!(resolved.style().contains(&[TextStyle::BOLD, TextStyle::ITALIC]));
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

mod color;
mod format;
#[cfg(feature = "bytemuck")]
mod impl_bytemuck;
mod style;

pub use color::TextColor;
pub use format::TextFormat;
pub use style::TextStyle;
