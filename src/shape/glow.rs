//! Glow theme: exact geometry under a wide, translucent, blurred stroke.

use super::{GenContext, LineCap, LineJoin, Shadow, ShapeDescriptor, StrokeProps, Theme, ThemeStrategy, exact, supports_all};

pub(super) static STRATEGY: ThemeStrategy = ThemeStrategy {
    theme: Theme::Glow,
    supports: supports_all,
    generate: exact::path,
    props,
};

fn props(desc: &ShapeDescriptor, ctx: &GenContext<'_>) -> StrokeProps {
    let glow = &ctx.config.glow;
    let base = ctx.base_props(desc);
    let width = base.stroke_width;
    StrokeProps {
        stroke_width: width * glow.width_factor,
        stroke_opacity: glow.opacity,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        shadow: Some(Shadow {
            color: desc.stroke_color.clone(),
            blur: width * glow.blur_factor,
            opacity: glow.shadow_opacity,
        }),
        ..base
    }
}
