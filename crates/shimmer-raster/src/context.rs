//! # Raster Context
//!
//! CPU implementation of `PaintContext` on a tiny-skia pixmap.
//!
//! Masked content is painted into an offscreen surface, the gradient is
//! blended over it with the layer's rule, and the surface is composited back
//! with source-over. The offscreen surface is cached and reused while the
//! target size stays the same.

use crate::error::RasterError;
use crate::shader;
use kurbo::Point;
use shimmer_core::{BlendMode, Color, MaskLayer, PaintContext};
use std::path::Path;
use tiny_skia::{Pixmap, PixmapPaint, Transform};
use tracing::{debug, warn};

/// Anything that can paint itself into a pixmap at an offset.
pub trait RasterContent {
    fn paint(&self, pixmap: &mut Pixmap, offset: Point);
}

pub struct RasterContext {
    pixmap: Pixmap,
    layer_surface: Option<Pixmap>,
    surfaces_allocated: u64,
}

impl RasterContext {
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let pixmap = Pixmap::new(width, height).ok_or(RasterError::InvalidSize { width, height })?;
        Ok(Self {
            pixmap,
            layer_surface: None,
            surfaces_allocated: 0,
        })
    }

    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(shader::color(color));
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Number of offscreen layer surfaces created so far.
    pub fn surfaces_allocated(&self) -> u64 {
        self.surfaces_allocated
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RasterError> {
        self.pixmap
            .encode_png()
            .map_err(|e| RasterError::Encode(e.to_string()))
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RasterError> {
        let path = path.as_ref();
        let data = self.encode_png()?;
        std::fs::write(path, data).map_err(|source| RasterError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn take_layer_surface(&mut self) -> Option<Pixmap> {
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        match self.layer_surface.take() {
            Some(mut surface) if surface.width() == width && surface.height() == height => {
                surface.fill(tiny_skia::Color::TRANSPARENT);
                Some(surface)
            }
            _ => {
                let surface = Pixmap::new(width, height)?;
                self.surfaces_allocated += 1;
                debug!(width, height, "allocated shimmer layer surface");
                Some(surface)
            }
        }
    }
}

impl PaintContext for RasterContext {
    type Child = dyn RasterContent;

    fn paint_child(&mut self, child: &dyn RasterContent, offset: Point) {
        child.paint(&mut self.pixmap, offset);
    }

    fn push_shader_mask(&mut self, layer: &MaskLayer, child: &dyn RasterContent, offset: Point) {
        let Some(mut surface) = self.take_layer_surface() else {
            warn!("no layer surface, painting content unmasked");
            child.paint(&mut self.pixmap, offset);
            return;
        };
        child.paint(&mut surface, offset);
        shader::apply_mask(&mut surface, layer);
        let paint = PixmapPaint {
            blend_mode: shader::blend_mode(BlendMode::SourceOver),
            ..PixmapPaint::default()
        };
        self.pixmap
            .draw_pixmap(0, 0, surface.as_ref(), &paint, Transform::identity(), None);
        self.layer_surface = Some(surface);
    }
}
