// Copyright 2025 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable trees of formatted text, built through mutable builders.
//!
//! - [`Text`] is an immutable node: a [`TextFormat`], an ordered list of children, and
//!   variant-specific content ([`LiteralText`] carries a string).
//! - [`TextBuilder`] is the mutable side. Builders are created fresh or from an existing node via
//!   [`Text::rebuild`], edited, and turned into a new node with [`TextBuilder::build`].
//! - [`ApplyFormat`] lets a [`TextColor`], [`TextStyle`] or [`TextFormat`] write itself into a
//!   builder, and [`TextRepresentable`] covers anything that can produce a [`Text`].
//!
//! Formatting values come from [`text_format`] and are re-exported here.
//!
//! ## Scope
//!
//! This crate models text and formatting only. It does not parse markup, lay text out, or
//! serialize trees to any wire or display format. Renderers are expected to walk the tree in
//! pre-order, layering each child's format over its parent's with [`TextFormat::merge`].
//!
//! ## Interning
//!
//! Building an empty node always returns [`LiteralText::EMPTY`], and building an unformatted,
//! childless node holding exactly `"\n"` returns [`LiteralText::NEW_LINE`]. These results are
//! identical, not just equal, which [`Text::ptr_eq`] observes.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use rich_text::{LiteralTextBuilder, Text, TextBuilder, TextColor, TextFormat, TextStyle};
//!
//! let mut builder = LiteralTextBuilder::new();
//! builder
//!     .apply(&TextFormat::new(TextColor::Yellow, TextStyle::BOLD))
//!     .append(&[Text::EMPTY, Text::literal("[server] "), Text::literal("restarting"), Text::EMPTY])
//!     .trim();
//! let message = builder.build();
//! assert_eq!(message.children().len(), 2);
//!
//! // Edit a copy; the original is untouched.
//! let mut edit = message.rebuild();
//! edit.set_color(TextColor::Red);
//! let alert = edit.build();
//! assert_eq!(message.color(), TextColor::Yellow);
//! assert_eq!(alert.color(), TextColor::Red);
//! assert_eq!(alert.children(), message.children());
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

extern crate alloc;

mod apply;
mod builder;
mod error;
mod literal;
mod text;


pub use crate::apply::ApplyFormat;
pub use crate::builder::{LiteralTextBuilder, TextBuilder};
pub use crate::error::{Error, ErrorKind};
pub use crate::literal::LiteralText;
pub use crate::text::{Text, TextRepresentable};

pub use text_format::{self, TextColor, TextFormat, TextStyle};
