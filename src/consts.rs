//! Shared numeric constants for the scrapbook crate.

// ── Math ────────────────────────────────────────────────────────

/// π / 5 (36°): angular step for a 10-vertex star polygon.
pub const FRAC_PI_5: f64 = std::f64::consts::PI / 5.0;

/// Inner-to-outer radius ratio for the default 5-point star icon.
pub const STAR_INNER_RATIO: f64 = 0.45;

// ── Text ────────────────────────────────────────────────────────

/// Average glyph advance as a fraction of the font size, used when no
/// measurement surface is available.
pub const AVG_CHAR_WIDTH_RATIO: f64 = 0.6;

/// Descent below the baseline as a fraction of the font size.
pub const DESCENT_RATIO: f64 = 0.2;

/// Distance between a text baseline and its ruled guide line.
pub const GUIDE_GAP: f64 = 4.0;

/// Default horizontal gap between question and answer in inline layouts.
pub const DEFAULT_QNA_HORIZONTAL_GAP: f64 = 8.0;

/// Default vertical gap before an answer placed on its own row.
pub const DEFAULT_QNA_VERTICAL_GAP: f64 = 4.0;

/// Allowed range for the block-layout question share, in percent.
pub const QUESTION_WIDTH_MIN_PCT: f64 = 10.0;
pub const QUESTION_WIDTH_MAX_PCT: f64 = 90.0;

// ── Shapes ──────────────────────────────────────────────────────

/// Number of decimal places kept when serializing path coordinates.
pub const PATH_PRECISION: i32 = 2;

/// Sides used for a polygon without explicit points.
pub const DEFAULT_POLYGON_SIDES: u32 = 6;

/// Upper bound on generated polygon sides.
pub const MAX_POLYGON_SIDES: u32 = 360;

/// Roughness applied when a descriptor does not specify one.
pub const DEFAULT_ROUGHNESS: f64 = 1.0;

/// Screen-space floor for stroke widths so hairlines stay visible when zoomed out.
pub const MIN_SCREEN_STROKE_PX: f64 = 0.5;

/// Target segment length in screen pixels when flattening curves.
pub const FLATTEN_STEP_PX: f64 = 4.0;

/// Bounds on the number of segments used to flatten a full ellipse.
pub const MIN_ELLIPSE_SEGMENTS: usize = 24;
pub const MAX_ELLIPSE_SEGMENTS: usize = 512;
