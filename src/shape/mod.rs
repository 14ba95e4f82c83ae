//! Shape path generation.
//!
//! A [`ShapeDescriptor`] plus a zoom level turns into an SVG path string and a
//! [`StrokeProps`] record describing how to paint it. The look is selected by
//! the descriptor's [`Theme`]; every theme is a static [`ThemeStrategy`]
//! record holding its path and props functions, so adding a theme means
//! adding one record, not another branch in every caller.
//!
//! Generation is deterministic. Themes that add randomness draw it from a
//! `StdRng` seeded by the descriptor id (see [`seed`]), so identical inputs
//! produce byte-identical paths in the editor and in the export renderer.
//!
//! A theme that cannot draw a shape returns a [`PathError`]; the caller logs
//! it and falls back to the default theme's exact geometry. Shape kinds this
//! crate does not know produce an empty path and nothing is drawn.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod icons;
pub mod outline;
pub mod path;
pub mod seed;

mod candy;
mod exact;
mod glow;
mod multi;
mod rough;
mod wobbly;
mod zigzag;

use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, warn};

use crate::config::RenderConfig;
use crate::consts::MIN_SCREEN_STROKE_PX;
use crate::geom::Point;

// =============================================================
// Errors
// =============================================================

/// Internal failure of a theme path generator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    /// A size, point or radius was NaN or infinite.
    #[error("non-finite {0}")]
    NonFinite(&'static str),
    /// The outline has too few points to draw.
    #[error("outline needs at least {min} points")]
    DegenerateOutline { min: usize },
    /// The theme has no rendition for this shape kind.
    #[error("{kind} is not supported by the {theme} theme")]
    UnsupportedForTheme { theme: &'static str, kind: &'static str },
}

// =============================================================
// Theme
// =============================================================

/// Decorative rendering style of a shape or ruled line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum Theme {
    /// Exact geometry.
    #[default]
    Default,
    /// Seeded hand-drawn strokes.
    Rough,
    /// Wide translucent stroke with a matching shadow.
    Glow,
    /// Filled dots along the outline.
    Candy,
    /// Faceted outline alternating across the border.
    Zigzag,
    /// Filled ribbon of varying width.
    Wobbly,
    /// Filled base with a wider second outline.
    MultiStrokes,
}

impl Theme {
    pub const ALL: [Theme; 7] = [
        Theme::Default,
        Theme::Rough,
        Theme::Glow,
        Theme::Candy,
        Theme::Zigzag,
        Theme::Wobbly,
        Theme::MultiStrokes,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Rough => "rough",
            Theme::Glow => "glow",
            Theme::Candy => "candy",
            Theme::Zigzag => "zigzag",
            Theme::Wobbly => "wobbly",
            Theme::MultiStrokes => "multi-strokes",
        }
    }

    fn lookup(raw: &str) -> Option<Theme> {
        Theme::ALL.into_iter().find(|t| t.as_str() == raw.trim())
    }

    /// Parse a theme identifier. Unknown identifiers select [`Theme::Default`].
    #[must_use]
    pub fn parse(raw: &str) -> Theme {
        Theme::lookup(raw).unwrap_or_else(|| {
            debug!(theme = raw, "unknown shape theme; using default");
            Theme::Default
        })
    }

    /// Parse a ruled-line theme identifier. Unknown identifiers select [`Theme::Rough`].
    #[must_use]
    pub fn parse_ruled(raw: &str) -> Theme {
        Theme::lookup(raw).unwrap_or_else(|| {
            debug!(theme = raw, "unknown ruled-line theme; using rough");
            Theme::Rough
        })
    }

    fn strategy(self) -> &'static ThemeStrategy {
        match self {
            Theme::Default => &exact::STRATEGY,
            Theme::Rough => &rough::STRATEGY,
            Theme::Glow => &glow::STRATEGY,
            Theme::Candy => &candy::STRATEGY,
            Theme::Zigzag => &zigzag::STRATEGY,
            Theme::Wobbly => &wobbly::STRATEGY,
            Theme::MultiStrokes => &multi::STRATEGY,
        }
    }
}

impl From<String> for Theme {
    fn from(raw: String) -> Self {
        Theme::parse(&raw)
    }
}

impl Serialize for Theme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// =============================================================
// ShapeKind
// =============================================================

/// The kind of a shape element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum ShapeKind {
    /// Axis-aligned rectangle, optionally with rounded corners.
    #[default]
    Rect,
    /// Ellipse inscribed in the box.
    Circle,
    /// Straight segment between two points.
    Line,
    /// Free-form polyline.
    Brush,
    Triangle,
    /// Explicit points, or a regular polygon inscribed in the box.
    Polygon,
    Heart,
    Star,
    SpeechBubble,
    Cloud,
    Flower,
    Cat,
    Dog,
    Smiley,
    /// Any kind this crate does not draw.
    Unsupported,
}

impl ShapeKind {
    const KNOWN: [ShapeKind; 14] = [
        ShapeKind::Rect,
        ShapeKind::Circle,
        ShapeKind::Line,
        ShapeKind::Brush,
        ShapeKind::Triangle,
        ShapeKind::Polygon,
        ShapeKind::Heart,
        ShapeKind::Star,
        ShapeKind::SpeechBubble,
        ShapeKind::Cloud,
        ShapeKind::Flower,
        ShapeKind::Cat,
        ShapeKind::Dog,
        ShapeKind::Smiley,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Rect => "rect",
            ShapeKind::Circle => "circle",
            ShapeKind::Line => "line",
            ShapeKind::Brush => "brush",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Heart => "heart",
            ShapeKind::Star => "star",
            ShapeKind::SpeechBubble => "speech-bubble",
            ShapeKind::Cloud => "cloud",
            ShapeKind::Flower => "flower",
            ShapeKind::Cat => "cat",
            ShapeKind::Dog => "dog",
            ShapeKind::Smiley => "smiley",
            ShapeKind::Unsupported => "unsupported",
        }
    }

    /// Parse a shape type. Unknown types map to [`ShapeKind::Unsupported`].
    #[must_use]
    pub fn parse(raw: &str) -> ShapeKind {
        let raw = raw.trim();
        ShapeKind::KNOWN
            .into_iter()
            .find(|k| k.as_str() == raw)
            .unwrap_or(ShapeKind::Unsupported)
    }

    /// Open shapes are stroked only.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, ShapeKind::Line | ShapeKind::Brush)
    }

    /// Decorative icons drawn from fixed path data.
    #[must_use]
    pub fn is_icon(self) -> bool {
        matches!(
            self,
            ShapeKind::Heart
                | ShapeKind::Star
                | ShapeKind::SpeechBubble
                | ShapeKind::Cloud
                | ShapeKind::Flower
                | ShapeKind::Cat
                | ShapeKind::Dog
                | ShapeKind::Smiley
        )
    }
}

impl From<String> for ShapeKind {
    fn from(raw: String) -> Self {
        ShapeKind::parse(&raw)
    }
}

impl Serialize for ShapeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// =============================================================
// ShapeDescriptor
// =============================================================

/// Strength of the candy theme's dot size jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandyIntensity {
    Weak,
    #[default]
    Middle,
    Strong,
}

impl CandyIntensity {
    #[must_use]
    pub fn parse(raw: &str) -> CandyIntensity {
        match raw.trim() {
            "weak" => CandyIntensity::Weak,
            "strong" => CandyIntensity::Strong,
            _ => CandyIntensity::Middle,
        }
    }
}

/// Options for the candy theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandyOptions {
    /// Vary dot sizes with the element seed.
    pub randomness: bool,
    pub intensity: CandyIntensity,
}

/// Everything needed to draw one shape, in box-local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapeDescriptor {
    /// Element id. Its digits seed the decorative randomness.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub width: f64,
    pub height: f64,
    pub stroke_color: String,
    pub stroke_width: f64,
    pub stroke_opacity: f64,
    pub fill_color: String,
    pub fill_opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roughness: Option<f64>,
    pub theme: Theme,
    /// Line endpoints, brush samples or polygon vertices.
    pub points: Vec<Point>,
    /// Side count for a regular polygon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sides: Option<u32>,
    pub candy: CandyOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zigzag_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zigzag_thickness: Option<f64>,
}

pub const DEFAULT_STROKE_COLOR: &str = "#1F1A17";
pub const DEFAULT_FILL_COLOR: &str = "#D94B4B";

impl Default for ShapeDescriptor {
    fn default() -> Self {
        Self {
            id: String::new(),
            kind: ShapeKind::Rect,
            width: 0.0,
            height: 0.0,
            stroke_color: DEFAULT_STROKE_COLOR.to_owned(),
            stroke_width: 1.0,
            stroke_opacity: 1.0,
            fill_color: DEFAULT_FILL_COLOR.to_owned(),
            fill_opacity: 1.0,
            corner_radius: None,
            roughness: None,
            theme: Theme::Default,
            points: Vec::new(),
            sides: None,
            candy: CandyOptions::default(),
            zigzag_size: None,
            zigzag_thickness: None,
        }
    }
}

impl ShapeDescriptor {
    /// Descriptor of the given kind and size with default styling.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: ShapeKind, width: f64, height: f64) -> Self {
        Self { id: id.into(), kind, width, height, ..Self::default() }
    }

    /// Build a descriptor from an editor element's loose `props` bag.
    #[must_use]
    pub fn from_props(id: &str, kind: &str, width: f64, height: f64, props: &serde_json::Value) -> Self {
        let props = ShapeProps::new(props);
        Self {
            id: id.to_owned(),
            kind: ShapeKind::parse(kind),
            width,
            height,
            stroke_color: props.stroke().to_owned(),
            stroke_width: props.stroke_width(),
            stroke_opacity: props.stroke_opacity(),
            fill_color: props.fill().to_owned(),
            fill_opacity: props.fill_opacity(),
            corner_radius: props.number("cornerRadius"),
            roughness: props.number("roughness"),
            theme: props.theme(),
            points: props.points(),
            sides: props.sides(),
            candy: props.candy(),
            zigzag_size: props.number("zigzagSize"),
            zigzag_thickness: props.number("zigzagThickness"),
        }
    }

    /// Seed for this descriptor's jitter.
    #[must_use]
    pub fn seed(&self) -> u64 {
        seed::seed_from_id(&self.id)
    }
}

/// Typed access to shape fields in an editor `props` JSON value.
pub struct ShapeProps<'a> {
    value: &'a serde_json::Value,
}

impl<'a> ShapeProps<'a> {
    #[must_use]
    pub fn new(value: &'a serde_json::Value) -> Self {
        Self { value }
    }

    fn str_field(&self, keys: &[&str]) -> Option<&'a str> {
        keys.iter().find_map(|k| self.value.get(*k).and_then(serde_json::Value::as_str))
    }

    /// Finite number at `key`, if present.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.value
            .get(key)
            .and_then(serde_json::Value::as_f64)
            .filter(|v| v.is_finite())
    }

    /// Stroke color. Defaults to `"#1F1A17"` when absent.
    #[must_use]
    pub fn stroke(&self) -> &'a str {
        self.str_field(&["strokeColor", "stroke"]).unwrap_or(DEFAULT_STROKE_COLOR)
    }

    /// Fill color. Defaults to `"#D94B4B"` when absent.
    #[must_use]
    pub fn fill(&self) -> &'a str {
        self.str_field(&["fillColor", "fill"]).unwrap_or(DEFAULT_FILL_COLOR)
    }

    /// Stroke width in world units. Defaults to `1.0` when absent.
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.number("strokeWidth").unwrap_or(1.0)
    }

    #[must_use]
    pub fn stroke_opacity(&self) -> f64 {
        self.number("strokeOpacity").unwrap_or(1.0).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn fill_opacity(&self) -> f64 {
        self.number("fillOpacity").unwrap_or(1.0).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.str_field(&["theme"]).map_or(Theme::Default, Theme::parse)
    }

    /// Points from a flat `[x1, y1, x2, y2, ...]` array or a list of
    /// `{x, y}` objects. Incomplete trailing pairs are dropped.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        let Some(items) = self.value.get("points").and_then(serde_json::Value::as_array) else {
            return Vec::new();
        };
        if items.iter().all(serde_json::Value::is_number) {
            let coords: Vec<f64> = items.iter().filter_map(serde_json::Value::as_f64).collect();
            return coords.chunks_exact(2).map(|pair| Point::new(pair[0], pair[1])).collect();
        }
        items
            .iter()
            .filter_map(|item| {
                let x = item.get("x").and_then(serde_json::Value::as_f64)?;
                let y = item.get("y").and_then(serde_json::Value::as_f64)?;
                Some(Point::new(x, y))
            })
            .collect()
    }

    #[must_use]
    pub fn sides(&self) -> Option<u32> {
        self.value
            .get("sides")
            .and_then(serde_json::Value::as_u64)
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
    }

    #[must_use]
    pub fn candy(&self) -> CandyOptions {
        CandyOptions {
            randomness: self
                .value
                .get("candyRandomness")
                .and_then(serde_json::Value::as_bool)
                .unwrap_or(false),
            intensity: self
                .str_field(&["candyIntensity"])
                .map_or(CandyIntensity::Middle, CandyIntensity::parse),
        }
    }
}

// =============================================================
// StrokeProps
// =============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

/// Drop shadow painted under the stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub color: String,
    pub blur: f64,
    pub opacity: f64,
}

/// Second stroke painted over the same path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineStroke {
    pub color: String,
    pub width: f64,
    pub opacity: f64,
}

/// How to paint a generated path.
///
/// `stroke: None` means the path is filled only; `fill: None` means it is
/// stroked only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeProps {
    pub stroke: Option<String>,
    pub stroke_width: f64,
    pub stroke_opacity: f64,
    pub fill: Option<String>,
    pub fill_opacity: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<OutlineStroke>,
}

// =============================================================
// Strategy table
// =============================================================

/// Per-call inputs shared by every theme.
pub(crate) struct GenContext<'c> {
    pub zoom: f64,
    pub seed: u64,
    pub config: &'c RenderConfig,
}

impl<'c> GenContext<'c> {
    fn new(zoom: f64, seed: u64, config: &'c RenderConfig) -> Self {
        Self { zoom: effective_zoom(zoom), seed, config }
    }

    /// Stroke width with the screen-space hairline floor applied.
    pub fn stroke_width(&self, desc: &ShapeDescriptor) -> f64 {
        let floor = MIN_SCREEN_STROKE_PX / self.zoom;
        if desc.stroke_width.is_finite() { desc.stroke_width.max(floor) } else { floor }
    }

    /// Props shared by the themes that paint the shape as given.
    pub fn base_props(&self, desc: &ShapeDescriptor) -> StrokeProps {
        StrokeProps {
            stroke: Some(desc.stroke_color.clone()),
            stroke_width: self.stroke_width(desc),
            stroke_opacity: desc.stroke_opacity,
            fill: (!desc.kind.is_open()).then(|| desc.fill_color.clone()),
            fill_opacity: desc.fill_opacity,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            shadow: None,
            outline: None,
        }
    }
}

type GenerateFn = fn(&ShapeDescriptor, &GenContext<'_>) -> Result<String, PathError>;
type PropsFn = fn(&ShapeDescriptor, &GenContext<'_>) -> StrokeProps;

/// One theme's path and props functions.
pub(crate) struct ThemeStrategy {
    pub theme: Theme,
    /// Whether the theme has its own rendition of a shape kind. Kinds it does
    /// not support are drawn with the default theme.
    pub supports: fn(ShapeKind) -> bool,
    pub generate: GenerateFn,
    pub props: PropsFn,
}

pub(crate) fn supports_all(_kind: ShapeKind) -> bool {
    true
}

pub(crate) fn supports_outlined(kind: ShapeKind) -> bool {
    !kind.is_icon()
}

fn effective_zoom(zoom: f64) -> f64 {
    if zoom.is_finite() && zoom > 0.0 { zoom } else { 1.0 }
}

fn resolve(desc: &ShapeDescriptor) -> &'static ThemeStrategy {
    let strategy = desc.theme.strategy();
    if (strategy.supports)(desc.kind) {
        strategy
    } else {
        debug!(theme = strategy.theme.as_str(), kind = desc.kind.as_str(), "theme does not draw kind; using default");
        Theme::Default.strategy()
    }
}

// =============================================================
// Public API
// =============================================================

/// Path data for `desc` at `zoom`, seeded from the descriptor id.
#[must_use]
pub fn generate_path(desc: &ShapeDescriptor, zoom: f64) -> String {
    generate_path_with(desc, zoom, &RenderConfig::DEFAULT)
}

#[must_use]
pub fn generate_path_with(desc: &ShapeDescriptor, zoom: f64, config: &RenderConfig) -> String {
    generate_path_seeded(desc, zoom, desc.seed(), config)
}

/// Strategy chosen for `desc` and its attempt at the path.
fn attempt(desc: &ShapeDescriptor, ctx: &GenContext<'_>) -> (&'static ThemeStrategy, Result<String, PathError>) {
    let strategy = resolve(desc);
    (strategy, (strategy.generate)(desc, ctx))
}

/// Path data for `desc` with an explicit seed.
///
/// Returns an empty string for [`ShapeKind::Unsupported`], and when neither
/// the theme nor the default geometry can draw the shape.
#[must_use]
pub fn generate_path_seeded(desc: &ShapeDescriptor, zoom: f64, seed: u64, config: &RenderConfig) -> String {
    if desc.kind == ShapeKind::Unsupported {
        return String::new();
    }
    let ctx = GenContext::new(zoom, seed, config);
    match attempt(desc, &ctx) {
        (_, Ok(d)) => d,
        (strategy, Err(err)) if strategy.theme == Theme::Default => {
            warn!(id = %desc.id, kind = desc.kind.as_str(), %err, "shape path failed; skipping");
            String::new()
        }
        (strategy, Err(err)) => {
            warn!(
                id = %desc.id,
                theme = strategy.theme.as_str(),
                kind = desc.kind.as_str(),
                %err,
                "theme path failed; falling back to default geometry"
            );
            exact::path(desc, &ctx).unwrap_or_else(|err| {
                warn!(id = %desc.id, kind = desc.kind.as_str(), %err, "shape path failed; skipping");
                String::new()
            })
        }
    }
}

/// Paint settings for `desc` at `zoom`.
///
/// When the theme cannot draw `desc` the default theme's props are returned,
/// matching the geometry [`generate_path`] falls back to.
#[must_use]
pub fn stroke_props(desc: &ShapeDescriptor, zoom: f64) -> StrokeProps {
    stroke_props_with(desc, zoom, &RenderConfig::DEFAULT)
}

#[must_use]
pub fn stroke_props_with(desc: &ShapeDescriptor, zoom: f64, config: &RenderConfig) -> StrokeProps {
    let ctx = GenContext::new(zoom, desc.seed(), config);
    let strategy = match attempt(desc, &ctx) {
        (strategy, Ok(_)) => strategy,
        (_, Err(_)) => Theme::Default.strategy(),
    };
    (strategy.props)(desc, &ctx)
}
