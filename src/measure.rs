//! Text measurement against an injected surface.
//!
//! Measurement goes through a [`MeasureSurface`] owned by the caller (a
//! Canvas2D context in the browser, a font rasterizer in the exporter). The
//! font is passed on every call, so a surface never has to remember which
//! font the previous caller selected. When no surface is available, widths
//! are estimated from the character count.

#[cfg(test)]
#[path = "measure_test.rs"]
mod measure_test;

use tracing::debug;

use crate::config::RenderConfig;
use crate::style::{RichTextStyle, TextAlign};

/// Something that can report the advance width of a text run.
pub trait MeasureSurface {
    /// Advance width of `text` set in the CSS font shorthand `font`.
    ///
    /// Returns `None` when the surface cannot measure right now.
    fn advance_width(&self, font: &str, text: &str) -> Option<f64>;
}

/// Estimated average advance of one character at `font_size`.
#[must_use]
pub fn avg_char_width_estimate(font_size: f64, config: &RenderConfig) -> f64 {
    font_size * config.avg_char_width_ratio
}

/// Advance width of `text` under `style`.
///
/// Falls back to `chars × avg_char_width_estimate` when `surface` is `None`
/// or cannot measure. Empty text always measures `0`.
#[must_use]
pub fn measure_text(text: &str, style: &RichTextStyle, surface: Option<&dyn MeasureSurface>) -> f64 {
    measure_text_with(text, style, surface, &RenderConfig::DEFAULT)
}

/// [`measure_text`] with an explicit config.
#[must_use]
pub fn measure_text_with(
    text: &str,
    style: &RichTextStyle,
    surface: Option<&dyn MeasureSurface>,
    config: &RenderConfig,
) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    if let Some(surface) = surface {
        let font = style.font_descriptor();
        match surface.advance_width(&font, text) {
            Some(width) if width.is_finite() => return width.max(0.0),
            other => debug!(%font, ?other, "measure: surface miss; using estimate"),
        }
    }
    #[allow(clippy::cast_precision_loss)]
    let chars = text.chars().count() as f64;
    chars * avg_char_width_estimate(style.font_size, config)
}

/// Left edge of `text` aligned per `style.align` within
/// `[origin_x, origin_x + available_width]`.
///
/// Text wider than the available width starts at `origin_x` regardless of
/// alignment, which keeps `left ≤ center ≤ right`.
#[must_use]
pub fn calculate_text_x(
    text: &str,
    style: &RichTextStyle,
    origin_x: f64,
    available_width: f64,
    surface: Option<&dyn MeasureSurface>,
) -> f64 {
    let width = measure_text(text, style, surface);
    aligned_x(style.align, origin_x, available_width, width)
}

/// Left edge of a span of `width` aligned within `[origin_x, origin_x + available_width]`.
#[must_use]
pub fn aligned_x(align: TextAlign, origin_x: f64, available_width: f64, width: f64) -> f64 {
    let slack = (available_width - width).max(0.0);
    match align {
        TextAlign::Left => origin_x,
        TextAlign::Center => origin_x + slack / 2.0,
        TextAlign::Right => origin_x + slack,
    }
}
