// Copyright 2025 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use text_format::{TextColor, TextFormat, TextStyle};

use crate::{ApplyFormat, Error, LiteralText, Text, TextRepresentable};

/// Mutable staging area for a [`Text`] node.
///
/// A builder owns its own list of children, independent of any node it was seeded from. Calling
/// [`build`](TextBuilder::build) snapshots the current state into a new immutable node and leaves
/// the builder usable for further edits.
///
/// The editing methods return `&mut Self` so they can be chained. They require `Self: Sized`,
/// but are still available on `Box<dyn TextBuilder>` (as returned by [`Text::rebuild`]) through
/// the blanket implementation for boxes.
pub trait TextBuilder: TextRepresentable {
    /// Returns the format the built node will carry.
    fn format(&self) -> TextFormat;

    /// Replaces the format.
    fn set_format(&mut self, format: TextFormat);

    /// Returns the staged children, in order.
    fn children(&self) -> &[Text];

    /// Returns the staged children for direct editing.
    fn children_mut(&mut self) -> &mut Vec<Text>;

    /// Builds a new immutable node from the current state.
    fn build(&self) -> Text;

    /// Returns `true` if building now would produce an empty node.
    fn is_empty(&self) -> bool {
        self.format().is_empty() && self.children().is_empty()
    }

    /// Returns the color of the staged format.
    fn color(&self) -> TextColor {
        self.format().color()
    }

    /// Replaces the color of the staged format, keeping its style.
    fn set_color(&mut self, color: TextColor) {
        let format = self.format().with_color(color);
        self.set_format(format);
    }

    /// Returns the style of the staged format.
    fn style(&self) -> TextStyle {
        self.format().style()
    }

    /// Replaces the style of the staged format, keeping its color.
    fn set_style(&mut self, style: TextStyle) {
        let format = self.format().with_style(style);
        self.set_format(format);
    }

    /// Appends `children` after the existing ones, in order.
    fn append(&mut self, children: &[Text]) -> &mut Self
    where
        Self: Sized,
    {
        self.children_mut().extend_from_slice(children);
        self
    }

    /// Inserts `children` at position `index`, in order.
    ///
    /// Fails with [`ErrorKind::OutOfRange`](crate::ErrorKind::OutOfRange) if `index` is greater
    /// than the current number of children, leaving the builder unchanged.
    fn insert(&mut self, index: usize, children: &[Text]) -> Result<&mut Self, Error>
    where
        Self: Sized,
    {
        let len = self.children().len();
        if index > len {
            log::trace!("rejected insert at {index} into {len} children");
            return Err(Error::out_of_range(index, len));
        }
        let staged = self.children_mut();
        let tail = staged.split_off(index);
        staged.extend_from_slice(children);
        staged.extend(tail);
        Ok(self)
    }

    /// Removes every child equal to any of `children`.
    fn remove(&mut self, children: &[Text]) -> &mut Self
    where
        Self: Sized,
    {
        self.children_mut().retain(|child| !children.contains(child));
        self
    }

    /// Removes all children.
    fn clear(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.children_mut().clear();
        self
    }

    /// Removes empty children from both ends.
    ///
    /// Leading empty children are removed up to the first non-empty one, then trailing empty
    /// children back to the last non-empty one. Empty children between non-empty ones are kept.
    ///
    /// ```
    /// use rich_text::{LiteralTextBuilder, Text, TextBuilder};
    ///
    /// let mut builder = LiteralTextBuilder::new();
    /// builder.append(&[Text::EMPTY, Text::literal("a"), Text::EMPTY, Text::literal("b"), Text::EMPTY]);
    /// builder.trim();
    /// assert_eq!(
    ///     builder.children(),
    ///     &[Text::literal("a"), Text::EMPTY, Text::literal("b")]
    /// );
    /// ```
    fn trim(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        let staged = self.children_mut();
        let leading = staged.iter().take_while(|child| child.is_empty()).count();
        staged.drain(..leading);
        let kept = staged
            .iter()
            .rposition(|child| !child.is_empty())
            .map_or(0, |last| last + 1);
        staged.truncate(kept);
        self
    }

    /// Lets `element` overwrite its part of the staged format.
    fn apply<E>(&mut self, element: &E) -> &mut Self
    where
        Self: Sized,
        E: ApplyFormat + ?Sized,
    {
        element.apply_to(self);
        self
    }
}

impl<B: TextBuilder + ?Sized> TextBuilder for Box<B> {
    fn format(&self) -> TextFormat {
        (**self).format()
    }

    fn set_format(&mut self, format: TextFormat) {
        (**self).set_format(format);
    }

    fn children(&self) -> &[Text] {
        (**self).children()
    }

    fn children_mut(&mut self) -> &mut Vec<Text> {
        (**self).children_mut()
    }

    fn build(&self) -> Text {
        (**self).build()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

/// Builder for [`LiteralText`] nodes.
///
/// ```
/// use rich_text::{LiteralText, LiteralTextBuilder, Text, TextBuilder};
/// use text_format::{TextColor, TextStyle};
///
/// let mut builder = LiteralTextBuilder::with_content("Warning: ");
/// builder
///     .apply(&TextColor::Red)
///     .apply(&TextStyle::BOLD)
///     .append(&[Text::literal("disk almost full")]);
/// let text = builder.build();
///
/// assert_eq!(text.color(), TextColor::Red);
/// assert_eq!(text.children().len(), 1);
///
/// // Empty builds share one node.
/// assert!(LiteralTextBuilder::new().build_literal().ptr_eq(&LiteralText::EMPTY));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiteralTextBuilder {
    content: String,
    format: TextFormat,
    children: Vec<Text>,
}

impl LiteralTextBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with the given content, no format and no children.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Creates a builder from all of its parts.
    pub fn from_parts<I>(content: impl Into<String>, format: TextFormat, children: I) -> Self
    where
        I: IntoIterator<Item = Text>,
    {
        Self {
            content: content.into(),
            format,
            children: children.into_iter().collect(),
        }
    }

    /// Returns the staged content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replaces the staged content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Appends `s` to the staged content.
    pub fn push_str(&mut self, s: &str) -> &mut Self {
        self.content.push_str(s);
        self
    }

    /// Builds a [`LiteralText`] from the current state.
    ///
    /// An empty builder yields [`LiteralText::EMPTY`] and an unformatted, childless builder
    /// holding exactly `"\n"` yields [`LiteralText::NEW_LINE`]; otherwise a new node is
    /// allocated with a copy of the staged children.
    pub fn build_literal(&self) -> LiteralText {
        if self.is_empty() {
            log::trace!("built literal text interned as EMPTY");
            return LiteralText::EMPTY;
        }
        if self.format.is_empty() && self.children.is_empty() && self.content == "\n" {
            log::trace!("built literal text interned as NEW_LINE");
            return LiteralText::NEW_LINE;
        }
        LiteralText::from_parts(self.content.clone(), self.format, self.children.clone())
    }
}

impl TextBuilder for LiteralTextBuilder {
    fn format(&self) -> TextFormat {
        self.format
    }

    fn set_format(&mut self, format: TextFormat) {
        self.format = format;
    }

    fn children(&self) -> &[Text] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Text> {
        &mut self.children
    }

    fn build(&self) -> Text {
        Text::Literal(self.build_literal())
    }

    fn is_empty(&self) -> bool {
        self.format.is_empty() && self.children.is_empty() && self.content.is_empty()
    }
}

impl TextRepresentable for LiteralTextBuilder {
    fn to_text(&self) -> Text {
        self.build()
    }
}

impl From<LiteralText> for LiteralTextBuilder {
    fn from(text: LiteralText) -> Self {
        text.rebuild()
    }
}
