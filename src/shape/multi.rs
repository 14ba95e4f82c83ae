//! Multi-strokes theme: exact geometry painted as a filled base plus a wider
//! second outline.

use super::{GenContext, OutlineStroke, ShapeDescriptor, StrokeProps, Theme, ThemeStrategy, exact, supports_all};

pub(super) static STRATEGY: ThemeStrategy = ThemeStrategy {
    theme: Theme::MultiStrokes,
    supports: supports_all,
    generate: exact::path,
    props,
};

fn props(desc: &ShapeDescriptor, ctx: &GenContext<'_>) -> StrokeProps {
    let base = ctx.base_props(desc);
    let outline = OutlineStroke {
        color: desc.stroke_color.clone(),
        width: base.stroke_width * ctx.config.outline_factor,
        opacity: desc.stroke_opacity,
    };
    StrokeProps { outline: Some(outline), ..base }
}
