// Copyright 2025 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use text_format::{TextColor, TextFormat, TextStyle};

use crate::{LiteralTextBuilder, Text, TextBuilder, TextRepresentable};

/// An immutable text node carrying a string payload.
///
/// Nodes are reference counted, so cloning is cheap and clones share the same content and
/// children. Equality, hashing and ordering are structural; use [`LiteralText::ptr_eq`] to
/// compare identities.
///
/// Literal nodes can only be created through a [`LiteralTextBuilder`] (the constructors on this
/// type use one internally), which replaces empty and newline-only results with the shared
/// [`LiteralText::EMPTY`] and [`LiteralText::NEW_LINE`] nodes.
#[derive(Clone)]
pub struct LiteralText {
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    Empty,
    NewLine,
    Node(Arc<Node>),
}

struct Node {
    content: String,
    format: TextFormat,
    children: Box<[Text]>,
}

impl Drop for Node {
    // Unlinks uniquely owned descendants iteratively so deep trees don't overflow the stack.
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let mut pending: Vec<Text> = core::mem::take(&mut self.children).into_vec();
        while let Some(text) = pending.pop() {
            match text {
                Text::Literal(literal) => {
                    if let Repr::Node(node) = literal.repr {
                        if let Some(mut node) = Arc::into_inner(node) {
                            pending.extend(core::mem::take(&mut node.children).into_vec());
                        }
                    }
                }
            }
        }
    }
}

impl LiteralText {
    /// The shared node with no content, no format and no children.
    pub const EMPTY: Self = Self { repr: Repr::Empty };

    /// The shared node holding a single `"\n"` with no format and no children.
    pub const NEW_LINE: Self = Self {
        repr: Repr::NewLine,
    };

    /// Creates an unformatted node with the given content.
    pub fn new(content: impl Into<String>) -> Self {
        LiteralTextBuilder::with_content(content).build_literal()
    }

    /// Creates a node with the given content and format.
    pub fn with_format(content: impl Into<String>, format: TextFormat) -> Self {
        LiteralTextBuilder::from_parts(content, format, core::iter::empty()).build_literal()
    }

    /// Creates a node with the given content, format and children.
    pub fn with_children<I>(content: impl Into<String>, format: TextFormat, children: I) -> Self
    where
        I: IntoIterator<Item = Text>,
    {
        LiteralTextBuilder::from_parts(content, format, children).build_literal()
    }

    /// Allocates a node without checking for the shared singletons.
    pub(crate) fn from_parts(content: String, format: TextFormat, children: Vec<Text>) -> Self {
        Self {
            repr: Repr::Node(Arc::new(Node {
                content,
                format,
                children: children.into_boxed_slice(),
            })),
        }
    }

    /// Returns the string payload of this node, excluding children.
    pub fn content(&self) -> &str {
        match &self.repr {
            Repr::Empty => "",
            Repr::NewLine => "\n",
            Repr::Node(node) => &node.content,
        }
    }

    /// Returns the format of this node.
    pub fn format(&self) -> TextFormat {
        match &self.repr {
            Repr::Empty | Repr::NewLine => TextFormat::NONE,
            Repr::Node(node) => node.format,
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
    pub fn children(&self) -> &[Text] {
        match &self.repr {
            Repr::Empty | Repr::NewLine => &[],
            Repr::Node(node) => &node.children,
        }
    }

    /// Returns `true` if this node has no format, no children and no content.
    pub fn is_empty(&self) -> bool {
        self.format().is_empty() && self.children().is_empty() && self.content().is_empty()
    }

    /// Returns a new builder seeded with the content, format and children of this node.
    ///
    /// The node itself is left untouched; edits made through the builder only show up in the
    /// nodes it builds.
    pub fn rebuild(&self) -> LiteralTextBuilder {
        LiteralTextBuilder::from_parts(
            self.content(),
            self.format(),
            self.children().iter().cloned(),
        )
    }

    /// Returns a builder holding this node with `other` appended as a child.
    ///
    /// The result is not built; call [`TextBuilder::build`] to get a node.
    pub fn concat(&self, other: &Text) -> LiteralTextBuilder {
        let mut builder = self.rebuild();
        builder.append(core::slice::from_ref(other));
        builder
    }

    /// Returns a copy of this node with empty children removed from both ends.
    ///
    /// See [`TextBuilder::trim`].
    pub fn trim(&self) -> Self {
        self.rebuild().trim().build_literal()
    }

    /// Returns `true` if `self` and `other` are the same node, not just equal ones.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Empty, Repr::Empty) | (Repr::NewLine, Repr::NewLine) => true,
            (Repr::Node(a), Repr::Node(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    fn key(&self) -> (TextFormat, &str, &[Text]) {
        (self.format(), self.content(), self.children())
    }
}

impl Default for LiteralText {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl PartialEq for LiteralText {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.key() == other.key()
    }
}

impl Eq for LiteralText {}

impl Hash for LiteralText {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for LiteralText {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LiteralText {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.ptr_eq(other) {
            return Ordering::Equal;
        }
        self.key().cmp(&other.key())
    }
}

impl fmt::Debug for LiteralText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Empty => f.write_str("LiteralText::EMPTY"),
            Repr::NewLine => f.write_str("LiteralText::NEW_LINE"),
            Repr::Node(node) => f
                .debug_struct("LiteralText")
                .field("content", &node.content)
                .field("format", &node.format)
                .field("children", &node.children)
                .finish(),
        }
    }
}

impl TextRepresentable for LiteralText {
    fn to_text(&self) -> Text {
        Text::Literal(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::LiteralText;
    use crate::{Text, TextBuilder};
    use alloc::format;
    use text_format::{TextColor, TextFormat, TextStyle};

    #[test]
    fn singletons_have_expected_parts() {
        assert_eq!(LiteralText::EMPTY.content(), "");
        assert!(LiteralText::EMPTY.is_empty());
        assert_eq!(LiteralText::NEW_LINE.content(), "\n");
        assert!(!LiteralText::NEW_LINE.is_empty());
        assert_eq!(LiteralText::NEW_LINE.format(), TextFormat::NONE);
        assert!(LiteralText::NEW_LINE.children().is_empty());
        assert!(LiteralText::default().ptr_eq(&LiteralText::EMPTY));
    }

    #[test]
    fn constructors_intern() {
        assert!(LiteralText::new("").ptr_eq(&LiteralText::EMPTY));
        assert!(LiteralText::new("\n").ptr_eq(&LiteralText::NEW_LINE));
        assert!(LiteralText::with_format("", TextFormat::NONE).ptr_eq(&LiteralText::EMPTY));

        let red = LiteralText::with_format("\n", TextColor::Red.into());
        assert!(!red.ptr_eq(&LiteralText::NEW_LINE));
        assert_eq!(red.color(), TextColor::Red);
    }

    #[test]
    fn equality_is_structural() {
        let a = LiteralText::new("hello");
        let b = LiteralText::new("hello");
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
        assert!(a.ptr_eq(&a.clone()));

        let bold = LiteralText::with_format("hello", TextStyle::BOLD.into());
        assert_ne!(a, bold);
        assert_eq!(bold.style(), TextStyle::BOLD);
    }

    #[test]
    fn rebuild_does_not_touch_original() {
        let child = Text::literal("child");
        let parent = LiteralText::with_children("parent", TextFormat::NONE, [child.clone()]);

        let mut builder = parent.rebuild();
        builder.clear().set_content("changed");
        assert_eq!(parent.content(), "parent");
        assert_eq!(parent.children(), &[child]);

        let rebuilt = builder.build_literal();
        assert_eq!(rebuilt.content(), "changed");
        assert!(rebuilt.children().is_empty());
    }

    #[test]
    fn concat_returns_unbuilt_builder() {
        let base = LiteralText::new("a");
        let builder = base.concat(&Text::literal("b"));
        assert_eq!(builder.content(), "a");
        assert_eq!(builder.children(), &[Text::literal("b")]);
        assert!(base.children().is_empty());
    }

    #[test]
    fn debug_output() {
        assert_eq!(format!("{:?}", LiteralText::EMPTY), "LiteralText::EMPTY");
        let text = format!("{:?}", LiteralText::new("hi"));
        assert!(text.starts_with("LiteralText {"));
        assert!(text.contains("\"hi\""));
    }
}
