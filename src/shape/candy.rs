//! Candy theme: filled dots at even arc-length intervals along the outline.

use crate::config::CandyConfig;

use super::exact::check_finite;
use super::outline::Outline;
use super::path::PathBuilder;
use super::seed::Jitter;
use super::{
    CandyIntensity, GenContext, PathError, ShapeDescriptor, StrokeProps, Theme, ThemeStrategy, supports_outlined,
};

pub(super) static STRATEGY: ThemeStrategy = ThemeStrategy {
    theme: Theme::Candy,
    supports: supports_outlined,
    generate: path,
    props,
};

/// Upper bound on dots per shape.
const MAX_DOTS: usize = 4096;

/// Dots are painted with the stroke color and nothing is stroked.
fn props(desc: &ShapeDescriptor, ctx: &GenContext<'_>) -> StrokeProps {
    let base = ctx.base_props(desc);
    StrokeProps {
        stroke: None,
        fill: Some(desc.stroke_color.clone()),
        fill_opacity: desc.stroke_opacity,
        ..base
    }
}

fn jitter_amplitude(config: &CandyConfig, intensity: CandyIntensity) -> f64 {
    match intensity {
        CandyIntensity::Weak => config.jitter_weak,
        CandyIntensity::Middle => config.jitter_middle,
        CandyIntensity::Strong => config.jitter_strong,
    }
}

/// Number of dots along an outline of length `length`.
///
/// Open outlines get a dot at each end and one every `spacing`; closed
/// outlines get `length / spacing` dots (at least one) spread evenly.
pub(super) fn dot_count(length: f64, spacing: f64, closed: bool) -> usize {
    let raw = (length / spacing).floor();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = if raw.is_finite() && raw > 0.0 { raw as usize } else { 0 };
    let count = if closed { whole.max(1) } else { whole + 1 };
    count.min(MAX_DOTS)
}

fn path(desc: &ShapeDescriptor, ctx: &GenContext<'_>) -> Result<String, PathError> {
    check_finite(desc)?;
    if desc.stroke_width <= 0.0 {
        return Ok(String::new());
    }
    let outline = Outline::for_shape(desc, Theme::Candy.as_str(), ctx.zoom)?;
    let candy = &ctx.config.candy;
    let diameter = candy.diameter_ratio * ctx.stroke_width(desc);
    let spacing = candy.spacing_factor * diameter;
    let length = outline.length();
    let count = dot_count(length, spacing, outline.closed);

    #[allow(clippy::cast_precision_loss)]
    let step = if outline.closed { length / count as f64 } else { spacing };
    let amplitude = jitter_amplitude(candy, desc.candy.intensity);
    let mut jitter = Jitter::new(ctx.seed);
    let mut b = PathBuilder::new();
    for i in 0..count {
        #[allow(clippy::cast_precision_loss)]
        let Some(sample) = outline.sample_at(step * i as f64) else {
            continue;
        };
        let mut radius = diameter / 2.0;
        if desc.candy.randomness {
            radius *= 1.0 + jitter.signed(amplitude);
        }
        b.circle(sample.point, radius);
    }
    Ok(b.finish())
}
