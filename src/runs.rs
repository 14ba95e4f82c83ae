//! Rich run layout: styled segments → positioned text runs inside a padded box.
//!
//! Layout happens in two passes. [`Flow`] packs tokens into lines greedily
//! (breaking only between words, never inside one), then [`place`] stacks the
//! lines vertically, applies per-line alignment, and emits one [`TextRun`] per
//! contiguous same-style span plus one [`LinePosition`] per line.
//!
//! Words that touch across a segment boundary (`"bo"` + `"ld"` with different
//! styles) form a single unbreakable chunk, so a style change inside a word
//! never introduces a line break.

#[cfg(test)]
#[path = "runs_test.rs"]
mod runs_test;

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::geom::Rect;
use crate::measure::{MeasureSurface, aligned_x, measure_text_with};
use crate::style::{LineHeightTable, RichTextStyle, StyledTextSegment};
use crate::wrap::paragraphs;

/// A contiguous span of text sharing one style, placed at `(x, y)`.
///
/// `y` is the baseline, local to the laid-out box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub style: RichTextStyle,
}

/// Anchor for one ruled guide line, just below a text baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinePosition {
    pub y: f64,
    pub line_height: f64,
    pub style: RichTextStyle,
}

/// Output of a text layout pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    pub runs: Vec<TextRun>,
    pub content_height: f64,
    pub line_positions: Vec<LinePosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_area: Option<Rect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_area: Option<Rect>,
}

/// Box geometry for a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunBox {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    /// Line-height table; `Ruled` when the box draws guide lines.
    #[serde(default)]
    pub line_heights: LineHeightTable,
}

impl RunBox {
    #[must_use]
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self { width, height, padding, line_heights: LineHeightTable::Text }
    }

    #[must_use]
    pub fn ruled(mut self) -> Self {
        self.line_heights = LineHeightTable::Ruled;
        self
    }

    /// Width available for text after padding. Never negative.
    #[must_use]
    pub fn available_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }
}

/// Lay out `segments` inside `bx`.
///
/// An empty segment list (or one whose text is all empty) yields no runs and
/// `content_height = 2 · padding`. Boxes too small for their content still
/// produce runs; clipping is the caller's concern.
#[must_use]
pub fn layout_rich_runs(
    segments: &[StyledTextSegment],
    bx: &RunBox,
    surface: Option<&dyn MeasureSurface>,
) -> LayoutResult {
    layout_rich_runs_with(segments, bx, surface, &RenderConfig::DEFAULT)
}

/// [`layout_rich_runs`] with an explicit config.
#[must_use]
pub fn layout_rich_runs_with(
    segments: &[StyledTextSegment],
    bx: &RunBox,
    surface: Option<&dyn MeasureSurface>,
    config: &RenderConfig,
) -> LayoutResult {
    let mut tokens = Vec::new();
    tokenize(segments, Source::Body, &mut tokens);
    layout_tokens(&tokens, bx, surface, config).result
}

// =============================================================
// Tokens
// =============================================================

/// Which text source a token came from. QnA layouts tag question and answer
/// tokens so guide lines can be attributed to a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Source {
    Body,
    Question,
    Answer,
}

impl Source {
    pub(crate) fn bit(self) -> u8 {
        match self {
            Self::Body => 0b001,
            Self::Question => 0b010,
            Self::Answer => 0b100,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Token<'a> {
    Word { text: &'a str, style: &'a RichTextStyle, source: Source },
    Space { style: &'a RichTextStyle },
    /// Explicit newline inside a segment.
    Break { style: &'a RichTextStyle, source: Source },
    /// Horizontal gap before the next chunk; dropped at the start of a line.
    Gap(f64),
    /// Forced new line with extra space above it.
    RowBreak { extra: f64 },
}

/// Append the tokens of `segments` to `out`.
pub(crate) fn tokenize<'a>(segments: &'a [StyledTextSegment], source: Source, out: &mut Vec<Token<'a>>) {
    for segment in segments {
        let style = &segment.style;
        for (i, paragraph) in paragraphs(&segment.text).enumerate() {
            if i > 0 {
                out.push(Token::Break { style, source });
            }
            let mut rest = paragraph;
            while !rest.is_empty() {
                let ws_len = rest.len() - rest.trim_start().len();
                if ws_len > 0 {
                    out.push(Token::Space { style });
                    rest = &rest[ws_len..];
                    continue;
                }
                let word_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
                out.push(Token::Word { text: &rest[..word_len], style, source });
                rest = &rest[word_len..];
            }
        }
    }
}

/// True when `segments` contain anything that would produce a line.
#[must_use]
pub(crate) fn has_content(segments: &[StyledTextSegment]) -> bool {
    segments.iter().any(|s| !s.text.is_empty())
}

// =============================================================
// Flow (line breaking)
// =============================================================

struct Item<'a> {
    text: String,
    x: f64,
    style: &'a RichTextStyle,
}

struct FlowLine<'a> {
    items: Vec<Item<'a>>,
    width: f64,
    extra_top: f64,
    /// Style that sizes the line while it has no items.
    fallback: &'a RichTextStyle,
    sources: u8,
    /// Whether the next same-style text may extend the last item.
    mergeable: bool,
}

impl<'a> FlowLine<'a> {
    fn new(fallback: &'a RichTextStyle, sources: u8, extra_top: f64) -> Self {
        Self { items: Vec::new(), width: 0.0, extra_top, fallback, sources, mergeable: false }
    }

    fn push_text(&mut self, text: &str, width: f64, style: &'a RichTextStyle) {
        match self.items.last_mut() {
            Some(last) if self.mergeable && *last.style == *style => last.text.push_str(text),
            _ => self.items.push(Item { text: text.to_owned(), x: self.width, style }),
        }
        self.width += width;
        self.mergeable = true;
    }

    fn styles(&self) -> impl Iterator<Item = &'a RichTextStyle> + '_ {
        let fallback = std::iter::once(self.fallback).filter(|_| self.items.is_empty());
        self.items.iter().map(|i| i.style).chain(fallback)
    }

    /// The style with the tallest line on this line.
    fn dominant_style(&self, table: LineHeightTable) -> &'a RichTextStyle {
        let mut best = self.items.first().map_or(self.fallback, |i| i.style);
        for style in self.styles() {
            if style.line_height_in(table) > best.line_height_in(table) {
                best = style;
            }
        }
        best
    }

    fn height(&self, table: LineHeightTable) -> f64 {
        self.styles().map(|s| s.line_height_in(table)).fold(0.0, f64::max)
    }

    fn max_font_size(&self) -> f64 {
        self.styles().map(|s| s.font_size).fold(0.0, f64::max)
    }
}

struct Flow<'a, 's> {
    lines: Vec<FlowLine<'a>>,
    open: Option<FlowLine<'a>>,
    available: f64,
    surface: Option<&'s dyn MeasureSurface>,
    config: &'s RenderConfig,
    pending_space: Option<&'a RichTextStyle>,
    pending_gap: f64,
    pending_extra: f64,
}

impl<'a, 's> Flow<'a, 's> {
    fn new(available: f64, surface: Option<&'s dyn MeasureSurface>, config: &'s RenderConfig) -> Self {
        Self {
            lines: Vec::new(),
            open: None,
            available,
            surface,
            config,
            pending_space: None,
            pending_gap: 0.0,
            pending_extra: 0.0,
        }
    }

    fn measure(&self, text: &str, style: &RichTextStyle) -> f64 {
        measure_text_with(text, style, self.surface, self.config)
    }

    fn run(mut self, tokens: &[Token<'a>]) -> Vec<FlowLine<'a>> {
        let mut i = 0;
        while i < tokens.len() {
            match tokens[i] {
                Token::Word { .. } => {
                    let start = i;
                    while i < tokens.len() && matches!(tokens[i], Token::Word { .. }) {
                        i += 1;
                    }
                    self.place_chunk(&tokens[start..i]);
                    continue;
                }
                Token::Space { style } => {
                    if self.open.as_ref().is_some_and(|l| !l.items.is_empty()) {
                        self.pending_space = Some(style);
                    }
                }
                Token::Gap(width) => self.pending_gap += width,
                Token::Break { style, source } => self.break_line(style, source),
                Token::RowBreak { extra } => self.row_break(extra),
            }
            i += 1;
        }
        if let Some(line) = self.open.take() {
            self.lines.push(line);
        }
        self.lines
    }

    fn place_chunk(&mut self, pieces: &[Token<'a>]) {
        let pieces: Vec<(&'a str, &'a RichTextStyle, Source)> = pieces
            .iter()
            .filter_map(|t| match *t {
                Token::Word { text, style, source } => Some((text, style, source)),
                _ => None,
            })
            .collect();
        let Some(&(_, first_style, first_source)) = pieces.first() else {
            return;
        };
        let widths: Vec<f64> = pieces.iter().map(|(text, style, _)| self.measure(text, style)).collect();
        let chunk_width: f64 = widths.iter().sum();

        let space = self.pending_space.take();
        let gap = std::mem::take(&mut self.pending_gap);
        let extra = std::mem::take(&mut self.pending_extra);
        let mut line = self
            .open
            .take()
            .unwrap_or_else(|| FlowLine::new(first_style, first_source.bit(), extra));

        if !line.items.is_empty() {
            let space_width = space.map_or(0.0, |s| self.measure(" ", s));
            if line.width + space_width + gap + chunk_width > self.available {
                self.lines.push(line);
                line = FlowLine::new(first_style, first_source.bit(), 0.0);
            } else {
                if let Some(style) = space {
                    line.push_text(" ", space_width, style);
                }
                if gap > 0.0 {
                    line.width += gap;
                    line.mergeable = false;
                }
            }
        }

        for ((text, style, source), width) in pieces.into_iter().zip(widths) {
            line.push_text(text, width, style);
            line.sources |= source.bit();
        }
        self.open = Some(line);
    }

    fn break_line(&mut self, style: &'a RichTextStyle, source: Source) {
        self.pending_space = None;
        self.pending_gap = 0.0;
        let extra = std::mem::take(&mut self.pending_extra);
        let line = self
            .open
            .take()
            .unwrap_or_else(|| FlowLine::new(style, source.bit(), extra));
        self.lines.push(line);
        self.open = Some(FlowLine::new(style, source.bit(), 0.0));
    }

    fn row_break(&mut self, extra: f64) {
        self.pending_space = None;
        self.pending_gap = 0.0;
        match self.open.take() {
            Some(line) if !line.items.is_empty() => {
                self.lines.push(line);
                self.pending_extra += extra;
            }
            Some(mut line) => {
                line.extra_top += extra;
                self.open = Some(line);
            }
            None => self.pending_extra += extra,
        }
    }
}

// =============================================================
// Placement
// =============================================================

/// A laid-out token stream plus the sources that contributed to each line.
pub(crate) struct TokenLayout {
    pub(crate) result: LayoutResult,
    pub(crate) line_sources: Vec<u8>,
}

/// Flow and place `tokens` inside `bx`.
pub(crate) fn layout_tokens(
    tokens: &[Token<'_>],
    bx: &RunBox,
    surface: Option<&dyn MeasureSurface>,
    config: &RenderConfig,
) -> TokenLayout {
    let available = bx.available_width();
    let lines = Flow::new(available, surface, config).run(tokens);
    place(&lines, bx, config)
}

fn place(lines: &[FlowLine<'_>], bx: &RunBox, config: &RenderConfig) -> TokenLayout {
    let table = bx.line_heights;
    let available = bx.available_width();
    let mut runs = Vec::new();
    let mut line_positions = Vec::with_capacity(lines.len());
    let mut line_sources = Vec::with_capacity(lines.len());
    let mut cursor = bx.padding;

    for line in lines {
        let top = cursor + line.extra_top;
        let height = line.height(table);
        let baseline = top + height - config.descent_ratio * line.max_font_size();
        cursor = top + height;

        let align = line.items.first().map_or(line.fallback.align, |i| i.style.align);
        let left = aligned_x(align, bx.padding, available, line.width);
        for item in &line.items {
            runs.push(TextRun {
                text: item.text.clone(),
                x: left + item.x,
                y: baseline,
                style: item.style.clone(),
            });
        }

        line_positions.push(LinePosition {
            y: baseline + config.guide_gap,
            line_height: height,
            style: line.dominant_style(table).clone(),
        });
        line_sources.push(line.sources);
    }

    let result = LayoutResult {
        runs,
        content_height: cursor + bx.padding,
        line_positions,
        question_area: None,
        answer_area: None,
    };
    TokenLayout { result, line_sources }
}
