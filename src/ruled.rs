//! Ruled guide lines for lined-paper text boxes.
//!
//! Guide lines sit just below each text baseline and continue down the box
//! at the ruled line height of the governing style, so an empty box still
//! looks like lined paper. Each line is an ordinary [`ShapeKind::Line`]
//! drawn through the shape themes, seeded by its own y so hand-drawn themes
//! wobble differently on every line.

#[cfg(test)]
#[path = "ruled_test.rs"]
mod ruled_test;

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::geom::{Point, Rect};
use crate::runs::{LayoutResult, LinePosition};
use crate::shape::{
    DEFAULT_STROKE_COLOR, ShapeDescriptor, ShapeKind, StrokeProps, Theme, generate_path_seeded, stroke_props_with,
};
use crate::style::{LineHeightTable, RichTextStyle};

/// Upper bound on guide lines per area.
const MAX_LINES: usize = 1000;

/// A region to rule, with the text lines already laid out inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuledArea {
    /// Area in box space.
    pub bounds: Rect,
    pub padding: f64,
    /// Guide positions of the text lines in this area, in box space.
    pub line_positions: Vec<LinePosition>,
    /// Style whose ruled line height sets the spacing of added lines.
    pub style: RichTextStyle,
    /// Continue ruling below the last text line down to the bottom padding.
    pub extend: bool,
}

impl RuledArea {
    /// Area covering a whole `width × height` box laid out by [`crate::runs`].
    #[must_use]
    pub fn for_box(width: f64, height: f64, padding: f64, layout: &LayoutResult, style: RichTextStyle) -> Self {
        Self {
            bounds: Rect::new(0.0, 0.0, width, height),
            padding,
            line_positions: layout.line_positions.clone(),
            style,
            extend: true,
        }
    }
}

/// Appearance of ruled lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuledLineStyle {
    /// Line theme. `None` uses the configured ruled-line theme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    pub stroke_color: String,
    pub stroke_width: f64,
    pub stroke_opacity: f64,
    /// Seed offset shared by every line of the element.
    pub base_seed: u64,
    pub zoom: f64,
}

impl Default for RuledLineStyle {
    fn default() -> Self {
        Self {
            theme: None,
            stroke_color: DEFAULT_STROKE_COLOR.to_owned(),
            stroke_width: 1.0,
            stroke_opacity: 0.5,
            base_seed: 1,
            zoom: 1.0,
        }
    }
}

impl RuledLineStyle {
    /// Style with the theme given by identifier. Unknown identifiers rule with
    /// [`Theme::Rough`].
    #[must_use]
    pub fn themed(raw: &str) -> Self {
        Self { theme: Some(Theme::parse_ruled(raw)), ..Self::default() }
    }
}

/// One generated guide line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuledLine {
    pub y: f64,
    pub path: String,
    pub props: StrokeProps,
}

/// Guide line y positions for `area`, ascending.
#[must_use]
pub fn ruled_line_positions(area: &RuledArea) -> Vec<f64> {
    ruled_line_positions_with(area, &RenderConfig::DEFAULT)
}

#[must_use]
pub fn ruled_line_positions_with(area: &RuledArea, config: &RenderConfig) -> Vec<f64> {
    let top = area.bounds.y + area.padding;
    let bottom = area.bounds.bottom() - area.padding;
    if !(top.is_finite() && bottom.is_finite()) || bottom < top {
        return Vec::new();
    }
    let in_range = |y: f64| (top..=bottom).contains(&y);

    let mut ys: Vec<f64> = area.line_positions.iter().map(|l| l.y).filter(|y| in_range(*y)).collect();
    ys.sort_by(f64::total_cmp);
    ys.truncate(MAX_LINES);

    let spacing = area.style.line_height_in(LineHeightTable::Ruled);
    if !area.extend || !(spacing.is_finite() && spacing > 0.0) {
        return ys;
    }

    let mut next = match ys.last() {
        Some(last) => last + spacing,
        None => {
            let baseline_offset = spacing - config.descent_ratio * area.style.font_size;
            top + baseline_offset + config.guide_gap
        }
    };
    while next <= bottom && ys.len() < MAX_LINES {
        if next >= top {
            ys.push(next);
        }
        next += spacing;
    }
    ys
}

/// Seed of the guide line at `y`.
#[must_use]
pub fn line_seed(base_seed: u64, y: f64) -> u64 {
    #[allow(clippy::cast_possible_truncation)]
    let offset = y.round() as i64;
    base_seed.wrapping_add_signed(offset)
}

/// Guide lines for `area`, each spanning the padded width.
#[must_use]
pub fn generate_ruled_lines(area: &RuledArea, style: &RuledLineStyle) -> Vec<RuledLine> {
    generate_ruled_lines_with(area, style, &RenderConfig::DEFAULT)
}

#[must_use]
pub fn generate_ruled_lines_with(area: &RuledArea, style: &RuledLineStyle, config: &RenderConfig) -> Vec<RuledLine> {
    let x0 = area.bounds.x + area.padding;
    let x1 = area.bounds.right() - area.padding;
    let theme = style.theme.unwrap_or(config.ruled_theme);
    ruled_line_positions_with(area, config)
        .into_iter()
        .map(|y| {
            let desc = ShapeDescriptor {
                kind: ShapeKind::Line,
                width: (x1 - x0).max(0.0),
                height: 0.0,
                points: vec![Point::new(x0, y), Point::new(x1, y)],
                stroke_color: style.stroke_color.clone(),
                stroke_width: style.stroke_width,
                stroke_opacity: style.stroke_opacity,
                theme,
                ..ShapeDescriptor::default()
            };
            let seed = line_seed(style.base_seed, y);
            RuledLine {
                y,
                path: generate_path_seeded(&desc, style.zoom, seed, config),
                props: stroke_props_with(&desc, style.zoom, config),
            }
        })
        .collect()
}
