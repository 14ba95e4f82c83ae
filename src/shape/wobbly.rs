//! Wobbly theme: filled ribbons whose width swells and thins along the stroke.
//!
//! Open shapes get one ribbon. Closed shapes are drawn as one ribbon per
//! piece of the border (each polygon edge, or four equal arcs of a smooth
//! outline), every piece seeded on its own and extended past its ends so
//! neighbouring pieces overlap at the corners.

use std::f64::consts::TAU;

use crate::config::WobblyConfig;
use crate::geom::Point;

use super::exact::check_finite;
use super::outline::Outline;
use super::path::PathBuilder;
use super::seed::Jitter;
use super::{GenContext, PathError, ShapeDescriptor, StrokeProps, Theme, ThemeStrategy, supports_outlined};

pub(super) static STRATEGY: ThemeStrategy = ThemeStrategy {
    theme: Theme::Wobbly,
    supports: supports_outlined,
    generate: path,
    props,
};

/// Pieces a smooth closed outline is split into.
const SMOOTH_PIECES: usize = 4;

/// Upper bound on samples along one ribbon.
const MAX_SAMPLES: usize = 2048;

/// Ribbons are filled with the stroke color and nothing is stroked.
fn props(desc: &ShapeDescriptor, ctx: &GenContext<'_>) -> StrokeProps {
    let base = ctx.base_props(desc);
    StrokeProps {
        stroke: None,
        fill: Some(desc.stroke_color.clone()),
        fill_opacity: desc.stroke_opacity,
        ..base
    }
}

/// Closed ribbon around `centerline`, or nothing when it has no length.
fn ribbon(b: &mut PathBuilder, centerline: Vec<Point>, width: f64, seed: u64, step: f64, config: &WobblyConfig) {
    let line = Outline::open(centerline);
    let length = line.length();
    if length <= 0.0 {
        return;
    }
    let raw = (length / step).ceil();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = if raw.is_finite() && raw > 0.0 { raw as usize } else { 0 };
    let n = n.clamp(2, MAX_SAMPLES);
    let samples = line.resample(n + 1);

    let mut jitter = Jitter::new(seed);
    let raw_offsets: Vec<f64> = samples
        .iter()
        .map(|_| jitter.signed(config.centerline_jitter * width))
        .collect();
    // Three-tap moving average keeps the centerline from looking noisy.
    let offsets: Vec<f64> = (0..raw_offsets.len())
        .map(|i| {
            let lo = i.saturating_sub(1);
            let hi = (i + 1).min(raw_offsets.len() - 1);
            let window = &raw_offsets[lo..=hi];
            #[allow(clippy::cast_precision_loss)]
            let len = window.len() as f64;
            window.iter().sum::<f64>() / len
        })
        .collect();
    let phase = jitter.unit() * TAU;

    let mut left = Vec::with_capacity(samples.len());
    let mut right = Vec::with_capacity(samples.len());
    for (i, (sample, offset)) in samples.iter().zip(&offsets).enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let t = i as f64 / n as f64;
        let half = width / 2.0 * config.amplitude.mul_add((TAU * config.periods).mul_add(t, phase).sin(), 1.0);
        let (nx, ny) = sample.normal;
        let center = sample.point.offset(nx, ny, *offset);
        left.push(center.offset(nx, ny, half));
        right.push(center.offset(nx, ny, -half));
    }
    right.reverse();
    left.extend(right);
    b.polygon(&left);
}

/// Arc-length ranges of the border pieces of a closed outline.
#[allow(clippy::cast_precision_loss)]
fn pieces(outline: &Outline) -> Vec<(f64, f64)> {
    let length = outline.length();
    if outline.corners.len() >= 2 {
        let mut bounds = outline.corners.clone();
        bounds.push(length);
        return bounds.windows(2).map(|w| (w[0], w[1])).collect();
    }
    let piece = length / SMOOTH_PIECES as f64;
    (0..SMOOTH_PIECES).map(|i| (piece * i as f64, piece * (i + 1) as f64)).collect()
}

fn path(desc: &ShapeDescriptor, ctx: &GenContext<'_>) -> Result<String, PathError> {
    check_finite(desc)?;
    if desc.stroke_width <= 0.0 {
        return Ok(String::new());
    }
    let outline = Outline::for_shape(desc, Theme::Wobbly.as_str(), ctx.zoom)?;
    let config = &ctx.config.wobbly;
    let width = ctx.stroke_width(desc);
    let step = config.step / ctx.zoom;
    let mut b = PathBuilder::new();
    if outline.closed {
        for (i, (start, end)) in pieces(&outline).into_iter().enumerate() {
            let centerline = outline.slice(start - config.edge_overlap, end + config.edge_overlap);
            let seed = ctx.seed.wrapping_add(i as u64 + 1);
            ribbon(&mut b, centerline, width, seed, step, config);
        }
    } else {
        ribbon(&mut b, outline.points, width, ctx.seed, step, config);
    }
    Ok(b.finish())
}
