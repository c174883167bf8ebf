use crate::gradient::LinearShader;
use kurbo::{Point, Rect};

/// Compositing rule used when the mask shader is drawn over painted content.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    /// Keep the shader's color only where the content already has alpha.
    #[default]
    SourceIn,
    /// Plain alpha compositing, used to put an isolated layer back onto the
    /// surface beneath it.
    SourceOver,
}

/// Reusable paint-pipeline object compositing a shader against the alpha of
/// the content painted beneath it.
///
/// The compositor owns exactly one of these and mutates it in place every
/// frame.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskLayer {
    /// Gradient in coordinates local to `mask_rect`'s origin.
    pub shader: LinearShader,
    /// On-screen bounds of the masked content (paint offset + size).
    pub mask_rect: Rect,
    pub blend_mode: BlendMode,
}

/// The host rendering environment seen by the compositor.
///
/// `Child` is whatever the backend knows how to paint; the compositor never
/// looks inside it.
pub trait PaintContext {
    type Child: ?Sized;

    /// Paints `child` at `offset` with no shimmer applied.
    fn paint_child(&mut self, child: &Self::Child, offset: Point);

    /// Paints `child` at `offset` into an isolated layer, draws `layer.shader`
    /// over `layer.mask_rect` with `layer.blend_mode`, and composites the
    /// result back with `BlendMode::SourceOver`.
    fn push_shader_mask(&mut self, layer: &MaskLayer, child: &Self::Child, offset: Point);
}
