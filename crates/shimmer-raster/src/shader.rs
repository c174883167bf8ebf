//! Conversion of core paint types into tiny-skia equivalents.

use kurbo::{Point, Rect};
use shimmer_core::{BlendMode, Color, LinearShader, MaskLayer, SpreadMode};
use tiny_skia::{GradientStop, LinearGradient, Paint, Pixmap, Shader, Transform};
use tracing::warn;

pub fn color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

pub fn blend_mode(mode: BlendMode) -> tiny_skia::BlendMode {
    match mode {
        BlendMode::SourceIn => tiny_skia::BlendMode::SourceIn,
        BlendMode::SourceOver => tiny_skia::BlendMode::SourceOver,
    }
}

pub fn spread_mode(mode: SpreadMode) -> tiny_skia::SpreadMode {
    match mode {
        SpreadMode::Pad => tiny_skia::SpreadMode::Pad,
        SpreadMode::Repeat => tiny_skia::SpreadMode::Repeat,
        SpreadMode::Reflect => tiny_skia::SpreadMode::Reflect,
    }
}

pub fn rect(rect: Rect) -> Option<tiny_skia::Rect> {
    let rect = rect.abs();
    tiny_skia::Rect::from_xywh(
        rect.x0 as f32,
        rect.y0 as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

fn point(p: Point) -> tiny_skia::Point {
    tiny_skia::Point::from_xy(p.x as f32, p.y as f32)
}

/// Builds the gradient shader, moving it from mask-local coordinates to
/// `origin`.
pub fn linear_gradient(shader: &LinearShader, origin: Point) -> Option<Shader<'static>> {
    let stops = shader
        .stops
        .iter()
        .map(|stop| GradientStop::new(stop.offset, color(stop.color)))
        .collect();
    LinearGradient::new(
        point(shader.start + origin.to_vec2()),
        point(shader.end + origin.to_vec2()),
        stops,
        spread_mode(shader.spread),
        Transform::identity(),
    )
}

/// Fills the layer's mask rectangle on `surface` with its shader and blend
/// rule. Returns false when nothing could be drawn.
pub fn apply_mask(surface: &mut Pixmap, layer: &MaskLayer) -> bool {
    let Some(bounds) = rect(layer.mask_rect) else {
        warn!(mask_rect = ?layer.mask_rect, "mask rect is not drawable");
        return false;
    };
    let Some(shader) = linear_gradient(&layer.shader, layer.mask_rect.origin()) else {
        warn!(
            degenerate = layer.shader.is_degenerate(),
            "could not build shimmer gradient"
        );
        return false;
    };
    let paint = Paint {
        shader,
        blend_mode: blend_mode(layer.blend_mode),
        anti_alias: false,
        ..Paint::default()
    };
    surface.fill_rect(bounds, &paint, Transform::identity(), None);
    true
}
