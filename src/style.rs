//! Rich text styles and the segments that carry them.
//!
//! Styles arrive from the editor store as JSON (camelCase keys). Missing
//! fields fall back to the editor defaults so a partially-filled style still
//! lays out.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use serde::{Deserialize, Serialize};

/// Vertical rhythm preset for a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphSpacing {
    Small,
    #[default]
    Medium,
    Large,
}

impl ParagraphSpacing {
    /// Line-height multiplier for ordinary text boxes.
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Small => 1.0,
            Self::Medium => 1.2,
            Self::Large => 1.5,
        }
    }

    /// Line-height multiplier for boxes drawn with ruled guide lines.
    ///
    /// Larger than [`Self::multiplier`] so handwriting-style fonts clear the
    /// line below.
    #[must_use]
    pub fn ruled_multiplier(self) -> f64 {
        match self {
            Self::Small => 1.5,
            Self::Medium => 1.8,
            Self::Large => 2.2,
        }
    }
}

/// Horizontal alignment of a line within its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Which line-height table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineHeightTable {
    #[default]
    Text,
    Ruled,
}

/// Style applied to a span of rich text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RichTextStyle {
    /// Font size in box units. Must be positive.
    pub font_size: f64,
    pub font_family: String,
    pub font_bold: bool,
    pub font_italic: bool,
    /// CSS color string.
    pub font_color: String,
    /// Opacity in `[0, 1]`.
    pub font_opacity: f64,
    pub paragraph_spacing: ParagraphSpacing,
    pub align: TextAlign,
}

impl Default for RichTextStyle {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            font_family: "Arial".to_owned(),
            font_bold: false,
            font_italic: false,
            font_color: "#1F1A17".to_owned(),
            font_opacity: 1.0,
            paragraph_spacing: ParagraphSpacing::Medium,
            align: TextAlign::Left,
        }
    }
}

impl RichTextStyle {
    /// Convenience constructor for a plain style of the given size.
    #[must_use]
    pub fn sized(font_size: f64) -> Self {
        Self { font_size, ..Self::default() }
    }

    /// CSS font shorthand, e.g. `"italic bold 16px Arial"`.
    #[must_use]
    pub fn font_descriptor(&self) -> String {
        let mut out = String::new();
        if self.font_italic {
            out.push_str("italic ");
        }
        if self.font_bold {
            out.push_str("bold ");
        }
        out.push_str(&format!("{}px {}", self.font_size, self.font_family));
        out
    }

    /// Height of one line of this style under the given table.
    #[must_use]
    pub fn line_height_in(&self, table: LineHeightTable) -> f64 {
        let multiplier = match table {
            LineHeightTable::Text => self.paragraph_spacing.multiplier(),
            LineHeightTable::Ruled => self.paragraph_spacing.ruled_multiplier(),
        };
        self.font_size * multiplier
    }
}

/// Height of one line of `style` in an ordinary text box.
#[must_use]
pub fn line_height(style: &RichTextStyle) -> f64 {
    style.line_height_in(LineHeightTable::Text)
}

/// A caller-supplied span of text sharing one style, prior to wrapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledTextSegment {
    pub text: String,
    pub style: RichTextStyle,
}

impl StyledTextSegment {
    #[must_use]
    pub fn new(text: impl Into<String>, style: RichTextStyle) -> Self {
        Self { text: text.into(), style }
    }
}
