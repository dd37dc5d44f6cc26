// Copyright 2025 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use text_format::{TextColor, TextFormat, TextStyle};

use crate::TextBuilder;

/// A formatting value that can write itself into a builder.
///
/// Each implementation overwrites its own part of the staged format outright; no merging
/// happens at this level (see [`TextFormat::merge`] for that).
pub trait ApplyFormat {
    /// Writes this value into `builder`.
    fn apply_to(&self, builder: &mut dyn TextBuilder);
}

/// Replaces the color.
impl ApplyFormat for TextColor {
    fn apply_to(&self, builder: &mut dyn TextBuilder) {
        builder.set_color(*self);
    }
}

/// Replaces the style.
impl ApplyFormat for TextStyle {
    fn apply_to(&self, builder: &mut dyn TextBuilder) {
        builder.set_style(*self);
    }
}

/// Replaces the whole format.
impl ApplyFormat for TextFormat {
    fn apply_to(&self, builder: &mut dyn TextBuilder) {
        builder.set_format(*self);
    }
}

#[cfg(test)]
mod tests {
    use crate::{ApplyFormat, LiteralTextBuilder, TextBuilder};
    use text_format::{TextColor, TextFormat, TextStyle};

    fn seeded() -> LiteralTextBuilder {
        let mut builder = LiteralTextBuilder::with_content("x");
        builder.set_format(TextFormat::new(TextColor::Gold, TextStyle::BOLD));
        builder
    }

    #[test]
    fn color_replaces_only_color() {
        let mut builder = seeded();
        TextColor::Reset.apply_to(&mut builder);
        assert_eq!(
            builder.format(),
            TextFormat::new(TextColor::Reset, TextStyle::BOLD)
        );
    }

    #[test]
    fn style_replaces_without_composing() {
        let mut builder = seeded();
        builder.apply(&TextStyle::ITALIC);
        assert_eq!(
            builder.format(),
            TextFormat::new(TextColor::Gold, TextStyle::ITALIC)
        );
    }

    #[test]
    fn format_replaces_everything() {
        let mut builder = seeded();
        builder.apply(&TextFormat::NONE);
        assert!(builder.format().is_empty());
        assert_eq!(builder.content(), "x");
    }

    #[test]
    fn dyn_elements() {
        let elements: [&dyn ApplyFormat; 2] = [&TextColor::Aqua, &TextStyle::UNDERLINE];
        let mut builder = LiteralTextBuilder::new();
        for element in elements {
            builder.apply(element);
        }
        assert_eq!(
            builder.format(),
            TextFormat::new(TextColor::Aqua, TextStyle::UNDERLINE)
        );
    }
}
