//! Question/answer text boxes.
//!
//! A QnA element holds two rich-text sides. The **inline** variant flows the
//! question and the answer through one wrap, separated by a horizontal gap or
//! pushed onto a new row. The **block** variant splits the box into a
//! question area and an answer area, lays each out on its own, and
//! translates the results into box space.
//!
//! Either variant can report [`RuledArea`]s describing where guide lines
//! should be drawn for the side(s) selected by [`RuledLinesTarget`].

#[cfg(test)]
#[path = "qna_test.rs"]
mod qna_test;

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::consts::{DEFAULT_QNA_HORIZONTAL_GAP, DEFAULT_QNA_VERTICAL_GAP, QUESTION_WIDTH_MAX_PCT, QUESTION_WIDTH_MIN_PCT};
use crate::geom::Rect;
use crate::measure::MeasureSurface;
use crate::ruled::RuledArea;
use crate::runs::{LayoutResult, LinePosition, RunBox, Source, Token, TokenLayout, has_content, layout_tokens, tokenize};
use crate::style::{RichTextStyle, StyledTextSegment};

/// Question share used when the configured one is not a number.
const DEFAULT_QUESTION_WIDTH_PCT: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    /// Question and answer share one text flow.
    #[default]
    Inline,
    /// Question and answer get separate areas.
    Block,
}

/// Where the question area sits in a block layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionPosition {
    Left,
    Right,
    #[default]
    Top,
    Bottom,
}

/// Which side's lines get ruled guide lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuledLinesTarget {
    Question,
    #[default]
    Answer,
    Both,
}

impl RuledLinesTarget {
    fn includes(self, source: Source) -> bool {
        match self {
            Self::Question => source == Source::Question,
            Self::Answer => source == Source::Answer,
            Self::Both => true,
        }
    }

    fn mask(self) -> u8 {
        match self {
            Self::Question => Source::Question.bit(),
            Self::Answer => Source::Answer.bit(),
            Self::Both => Source::Question.bit() | Source::Answer.bit(),
        }
    }
}

/// A question/answer text element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QnaElement {
    pub question: Vec<StyledTextSegment>,
    pub answer: Vec<StyledTextSegment>,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub layout_variant: LayoutVariant,
    /// Inline only: start the answer on a new line after `vertical_gap`.
    pub answer_in_new_row: bool,
    pub horizontal_gap: f64,
    pub vertical_gap: f64,
    pub question_position: QuestionPosition,
    /// Block only: question share of the split axis, in percent.
    pub question_width: f64,
    /// Block only: padding inside the question area (defaults to `padding`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_padding: Option<f64>,
    /// Block only: padding inside the answer area (defaults to `padding`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_padding: Option<f64>,
    /// Use the ruled line-height table and report ruled areas.
    pub ruled_lines: bool,
    pub ruled_lines_target: RuledLinesTarget,
}

impl Default for QnaElement {
    fn default() -> Self {
        Self {
            question: Vec::new(),
            answer: Vec::new(),
            width: 0.0,
            height: 0.0,
            padding: 0.0,
            layout_variant: LayoutVariant::Inline,
            answer_in_new_row: false,
            horizontal_gap: DEFAULT_QNA_HORIZONTAL_GAP,
            vertical_gap: DEFAULT_QNA_VERTICAL_GAP,
            question_position: QuestionPosition::Top,
            question_width: DEFAULT_QUESTION_WIDTH_PCT,
            question_padding: None,
            answer_padding: None,
            ruled_lines: false,
            ruled_lines_target: RuledLinesTarget::Answer,
        }
    }
}

impl QnaElement {
    /// Element with one plain segment per side.
    #[must_use]
    pub fn from_text(question: &str, answer: &str, style: &RichTextStyle, width: f64, height: f64) -> Self {
        Self {
            question: vec![StyledTextSegment::new(question, style.clone())],
            answer: vec![StyledTextSegment::new(answer, style.clone())],
            width,
            height,
            ..Self::default()
        }
    }

    /// Question share of the split axis as a fraction in `[0.1, 0.9]`.
    #[must_use]
    pub fn question_share(&self) -> f64 {
        let pct = if self.question_width.is_finite() { self.question_width } else { DEFAULT_QUESTION_WIDTH_PCT };
        pct.clamp(QUESTION_WIDTH_MIN_PCT, QUESTION_WIDTH_MAX_PCT) / 100.0
    }

    /// Question and answer areas of a block layout, in box space.
    #[must_use]
    pub fn block_areas(&self) -> (Rect, Rect) {
        let (w, h) = (self.width, self.height);
        let p = self.question_share();
        match self.question_position {
            QuestionPosition::Left => (Rect::new(0.0, 0.0, w * p, h), Rect::new(w * p, 0.0, w * (1.0 - p), h)),
            QuestionPosition::Right => {
                (Rect::new(w * (1.0 - p), 0.0, w * p, h), Rect::new(0.0, 0.0, w * (1.0 - p), h))
            }
            QuestionPosition::Top => (Rect::new(0.0, 0.0, w, h * p), Rect::new(0.0, h * p, w, h * (1.0 - p))),
            QuestionPosition::Bottom => {
                (Rect::new(0.0, h * (1.0 - p), w, h * p), Rect::new(0.0, 0.0, w, h * (1.0 - p)))
            }
        }
    }

    /// Style whose ruled spacing drives guide lines: the answer's first
    /// style, or the question's when the answer is empty.
    fn ruling_style(&self) -> RichTextStyle {
        self.answer
            .first()
            .or_else(|| self.question.first())
            .map(|s| s.style.clone())
            .unwrap_or_default()
    }
}

/// Lays out [`QnaElement`]s against an optional measurement surface.
pub struct QnaLayoutEngine<'s> {
    surface: Option<&'s dyn MeasureSurface>,
    config: &'s RenderConfig,
}

impl<'s> QnaLayoutEngine<'s> {
    #[must_use]
    pub fn new(surface: Option<&'s dyn MeasureSurface>) -> Self {
        Self { surface, config: &RenderConfig::DEFAULT }
    }

    #[must_use]
    pub fn with_config(surface: Option<&'s dyn MeasureSurface>, config: &'s RenderConfig) -> Self {
        Self { surface, config }
    }

    /// Lay out `element`.
    #[must_use]
    pub fn layout(&self, element: &QnaElement) -> LayoutResult {
        self.layout_with_ruled_areas(element).0
    }

    /// Guide-line areas for `element`. Empty unless `ruled_lines` is set.
    #[must_use]
    pub fn ruled_areas(&self, element: &QnaElement) -> Vec<RuledArea> {
        self.layout_with_ruled_areas(element).1
    }

    /// Layout plus its guide-line areas.
    #[must_use]
    pub fn layout_with_ruled_areas(&self, element: &QnaElement) -> (LayoutResult, Vec<RuledArea>) {
        match element.layout_variant {
            LayoutVariant::Inline => self.inline(element),
            LayoutVariant::Block => self.block(element),
        }
    }

    fn run_box(element: &QnaElement, width: f64, height: f64, padding: f64) -> RunBox {
        let bx = RunBox::new(width, height, padding);
        if element.ruled_lines { bx.ruled() } else { bx }
    }

    fn inline(&self, element: &QnaElement) -> (LayoutResult, Vec<RuledArea>) {
        let mut tokens = Vec::new();
        tokenize(&element.question, Source::Question, &mut tokens);
        if has_content(&element.question) && has_content(&element.answer) {
            tokens.push(if element.answer_in_new_row {
                Token::RowBreak { extra: element.vertical_gap }
            } else {
                Token::Gap(element.horizontal_gap)
            });
        }
        tokenize(&element.answer, Source::Answer, &mut tokens);

        let bx = Self::run_box(element, element.width, element.height, element.padding);
        let TokenLayout { result, line_sources } = layout_tokens(&tokens, &bx, self.surface, self.config);
        if !element.ruled_lines {
            return (result, Vec::new());
        }

        let target = element.ruled_lines_target;
        let mask = target.mask();
        let lines: Vec<LinePosition> = result
            .line_positions
            .iter()
            .zip(&line_sources)
            .filter(|(_, sources)| *sources & mask != 0)
            .map(|(line, _)| line.clone())
            .collect();
        // Lines below the question belong to the answer; only extend into
        // them when the answer side is ruled or absent.
        let extend = target != RuledLinesTarget::Question || !has_content(&element.answer);
        let area = RuledArea {
            bounds: Rect::new(0.0, 0.0, element.width, element.height),
            padding: element.padding,
            line_positions: lines,
            style: element.ruling_style(),
            extend,
        };
        (result, vec![area])
    }

    fn block(&self, element: &QnaElement) -> (LayoutResult, Vec<RuledArea>) {
        let (question_area, answer_area) = element.block_areas();
        let sides = [
            (Source::Question, &element.question, question_area, element.question_padding),
            (Source::Answer, &element.answer, answer_area, element.answer_padding),
        ];

        let mut result = LayoutResult {
            question_area: Some(question_area),
            answer_area: Some(answer_area),
            ..LayoutResult::default()
        };
        let mut areas = Vec::new();
        for (source, segments, rect, padding) in sides {
            let padding = padding.unwrap_or(element.padding);
            let mut tokens = Vec::new();
            tokenize(segments, source, &mut tokens);
            let bx = Self::run_box(element, rect.width, rect.height, padding);
            let side = layout_tokens(&tokens, &bx, self.surface, self.config).result;

            result.content_height = result.content_height.max(rect.y + side.content_height);
            result.runs.extend(side.runs.into_iter().map(|mut run| {
                run.x += rect.x;
                run.y += rect.y;
                run
            }));
            let lines: Vec<LinePosition> = side
                .line_positions
                .into_iter()
                .map(|mut line| {
                    line.y += rect.y;
                    line
                })
                .collect();
            result.line_positions.extend(lines.iter().cloned());

            if element.ruled_lines && element.ruled_lines_target.includes(source) {
                areas.push(RuledArea {
                    bounds: rect,
                    padding,
                    line_positions: lines,
                    style: element.ruling_style(),
                    extend: true,
                });
            }
        }
        (result, areas)
    }
}
