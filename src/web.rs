//! Canvas2D adapter for WASM hosts.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It measures text for the layout engines and paints the runs and paths
//! they produce. It never decides geometry itself.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

#[cfg(test)]
#[path = "web_test.rs"]
mod web_test;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, Path2d};

use crate::color::with_alpha;
use crate::measure::MeasureSurface;
use crate::runs::TextRun;
use crate::shape::StrokeProps;
use crate::style::RichTextStyle;

/// Measures text through a 2D context.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    #[must_use]
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl MeasureSurface for CanvasSurface<'_> {
    fn advance_width(&self, font: &str, text: &str) -> Option<f64> {
        self.ctx.set_font(font);
        match self.ctx.measure_text(text) {
            Ok(metrics) => Some(metrics.width()).filter(|w| w.is_finite()),
            Err(_) => None,
        }
    }
}

/// Fill color and global alpha for a run. Opacity always goes through global
/// alpha so named and `rgb()` colors fade like hex ones.
fn run_fill(style: &RichTextStyle) -> (&str, f64) {
    let alpha = if style.font_opacity.is_finite() { style.font_opacity.clamp(0.0, 1.0) } else { 1.0 };
    (style.font_color.trim(), alpha)
}

/// Paint laid-out text runs at their baselines.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_runs(ctx: &CanvasRenderingContext2d, runs: &[TextRun]) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_text_align("left");
    ctx.set_text_baseline("alphabetic");
    for run in runs {
        ctx.set_font(&run.style.font_descriptor());
        let (color, alpha) = run_fill(&run.style);
        ctx.set_global_alpha(alpha);
        ctx.set_fill_style_str(color);
        ctx.fill_text(&run.text, run.x, run.y)?;
    }
    ctx.restore();
    Ok(())
}

/// Paint an SVG path string with the props its theme produced.
///
/// Fill goes first, then the stroke, then the outline stroke on top.
///
/// # Errors
///
/// Returns `Err` if the path string is rejected or a `Canvas2D` call fails.
pub fn draw_shape(ctx: &CanvasRenderingContext2d, path: &str, props: &StrokeProps) -> Result<(), JsValue> {
    if path.is_empty() {
        return Ok(());
    }
    let path = Path2d::new_with_path_string(path)?;

    ctx.save();
    ctx.set_line_cap(props.line_cap.as_str());
    ctx.set_line_join(props.line_join.as_str());

    if let Some(shadow) = &props.shadow {
        ctx.set_shadow_color(&with_alpha(&shadow.color, shadow.opacity));
        ctx.set_shadow_blur(shadow.blur);
    }

    if let Some(fill) = &props.fill {
        ctx.set_global_alpha(props.fill_opacity.clamp(0.0, 1.0));
        ctx.set_fill_style_str(fill);
        ctx.fill_with_path_2d(&path);
    }

    if let Some(stroke) = &props.stroke {
        ctx.set_global_alpha(props.stroke_opacity.clamp(0.0, 1.0));
        ctx.set_stroke_style_str(stroke);
        ctx.set_line_width(props.stroke_width);
        ctx.stroke_with_path(&path);
    }

    if let Some(outline) = &props.outline {
        ctx.set_shadow_blur(0.0);
        ctx.set_global_alpha(outline.opacity.clamp(0.0, 1.0));
        ctx.set_stroke_style_str(&outline.color);
        ctx.set_line_width(outline.width);
        ctx.stroke_with_path(&path);
    }

    ctx.restore();
    Ok(())
}
