// Copyright 2025 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;

use text_format::{TextColor, TextFormat, TextStyle};

use crate::{LiteralText, LiteralTextBuilder, TextBuilder};

/// An immutable node in a tree of formatted text.
///
/// Every node has a [`TextFormat`] and an ordered list of children; the variant decides what
/// content the node itself carries. Nodes never change after construction. To edit one, call
/// [`rebuild`](Self::rebuild), change the returned builder, and build a new node.
///
/// Equality, hashing and ordering are structural. The order is total and consistent with
/// equality but carries no meaning beyond that.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Text {
    /// A node with a literal string payload.
    Literal(LiteralText),
}

impl Text {
    /// The shared empty node; see [`LiteralText::EMPTY`].
    pub const EMPTY: Self = Self::Literal(LiteralText::EMPTY);

    /// The shared newline node; see [`LiteralText::NEW_LINE`].
    pub const NEW_LINE: Self = Self::Literal(LiteralText::NEW_LINE);

    /// Creates an unformatted literal node with no children.
    pub fn literal(content: impl Into<String>) -> Self {
        Self::Literal(LiteralText::new(content))
    }

    /// Creates a literal node from its content, format and children.
    ///
    /// ```
    /// use rich_text::Text;
    /// use text_format::{TextColor, TextFormat};
    ///
    /// let empty = Text::of("", TextFormat::NONE, []);
    /// assert!(empty.ptr_eq(&Text::EMPTY));
    ///
    /// let line = Text::of("", TextColor::Gray.into(), [Text::literal("a"), Text::NEW_LINE]);
    /// assert_eq!(line.children().len(), 2);
    /// ```
    pub fn of<I>(content: impl Into<String>, format: TextFormat, children: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Literal(LiteralText::with_children(content, format, children))
    }

    /// Returns the format of this node.
    pub fn format(&self) -> TextFormat {
        match self {
            Self::Literal(text) => text.format(),
        }
    }

    /// Returns the color of this node.
    #[inline]
    pub fn color(&self) -> TextColor {
        self.format().color()
    }

    /// Returns the style of this node.
    #[inline]
    pub fn style(&self) -> TextStyle {
        self.format().style()
    }

    /// Returns the children of this node, in order.
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Literal(text) => text.children(),
        }
    }

    /// Returns `true` if this node has no format, no children and no content of its own.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Literal(text) => text.is_empty(),
        }
    }

    /// Returns the literal node, if this is one.
    pub fn as_literal(&self) -> Option<&LiteralText> {
        match self {
            Self::Literal(text) => Some(text),
        }
    }

    /// Returns a new builder seeded with everything this node carries.
    pub fn rebuild(&self) -> Box<dyn TextBuilder> {
        match self {
            Self::Literal(text) => Box::new(text.rebuild()),
        }
    }

    /// Returns a builder holding this node with `other` appended as a child.
    ///
    /// The result is a builder, not a node:
    ///
    /// ```
    /// use rich_text::{Text, TextBuilder};
    ///
    /// let greeting = Text::literal("Hello, ");
    /// let text = greeting.concat(&Text::literal("world")).build();
    /// assert_eq!(text.children(), &[Text::literal("world")]);
    /// ```
    pub fn concat(&self, other: &Self) -> Box<dyn TextBuilder> {
        let mut builder = self.rebuild();
        builder.append(core::slice::from_ref(other));
        builder
    }

    /// Returns a copy of this node with empty children removed from both ends.
    ///
    /// See [`TextBuilder::trim`].
    pub fn trim(&self) -> Self {
        self.rebuild().trim().build()
    }

    /// Returns `true` if `self` and `other` are the same node, not just equal ones.
    ///
    /// Interned nodes such as [`Text::EMPTY`] are always identical to themselves.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a.ptr_eq(b),
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<LiteralText> for Text {
    fn from(text: LiteralText) -> Self {
        Self::Literal(text)
    }
}

impl From<&str> for Text {
    fn from(content: &str) -> Self {
        Self::literal(content)
    }
}

impl From<String> for Text {
    fn from(content: String) -> Self {
        Self::literal(content)
    }
}

impl From<LiteralTextBuilder> for Text {
    fn from(builder: LiteralTextBuilder) -> Self {
        builder.build()
    }
}

/// A value that can produce a [`Text`] on demand.
///
/// Nodes return themselves and builders return the result of [`TextBuilder::build`].
pub trait TextRepresentable {
    /// Returns this value as a text node.
    fn to_text(&self) -> Text;
}

impl TextRepresentable for Text {
    fn to_text(&self) -> Text {
        self.clone()
    }
}

impl<T: TextRepresentable + ?Sized> TextRepresentable for Box<T> {
    fn to_text(&self) -> Text {
        (**self).to_text()
    }
}
