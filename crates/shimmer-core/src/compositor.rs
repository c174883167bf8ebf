//! # Shimmer Compositor
//!
//! Turns the driver's progress into one masked paint per frame.
//!
//! ## Responsibilities
//! - **Change tracking**: every mutator reports whether it needs nothing, a
//!   repaint, or a relayout, and skips unchanged values.
//! - **Layout**: records the wrapped content's measured size.
//! - **Paint**: computes the sweep rectangle, updates the held `MaskLayer` in
//!   place and hands it to the `PaintContext`.

use crate::config::ShimmerConfig;
use crate::geometry::Direction;
use crate::gradient::GradientSpec;
use crate::layer::{BlendMode, MaskLayer, PaintContext};
use kurbo::{Point, Rect, Size};
use tracing::{debug, trace};

/// Work implied by a property change, ordered from cheapest to most expensive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Change {
    #[default]
    None,
    /// Recomposite only.
    Repaint,
    /// Geometry changed; lay out again, then repaint.
    Relayout,
}

impl Change {
    pub fn merge(self, other: Change) -> Change {
        self.max(other)
    }

    pub fn is_none(self) -> bool {
        self == Change::None
    }
}

/// Counters for the paint path.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CompositorStats {
    pub layouts: u64,
    pub composites: u64,
    pub passthroughs: u64,
    pub layers_allocated: u64,
    pub layers_released: u64,
}

#[derive(Debug)]
pub struct ShimmerCompositor {
    percent: f64,
    direction: Direction,
    gradient: GradientSpec,
    enabled: bool,
    hide_when_disabled: bool,
    size: Option<Size>,
    layer: Option<MaskLayer>,
    pending: Change,
    stats: CompositorStats,
}

impl ShimmerCompositor {
    /// Creates a compositor at progress 0 that still needs its first layout.
    pub fn new(config: &ShimmerConfig) -> Self {
        Self {
            percent: 0.0,
            direction: config.direction,
            gradient: config.gradient.clone(),
            enabled: config.enabled,
            hide_when_disabled: config.hide_when_disabled,
            size: None,
            layer: None,
            pending: Change::Relayout,
            stats: CompositorStats::default(),
        }
    }

    pub fn set_percent(&mut self, percent: f64) -> Change {
        if percent == self.percent {
            return Change::None;
        }
        self.percent = percent;
        self.mark(Change::Repaint)
    }

    pub fn set_gradient(&mut self, gradient: GradientSpec) -> Change {
        if gradient == self.gradient {
            return Change::None;
        }
        self.gradient = gradient;
        self.mark(Change::Repaint)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Change {
        if direction == self.direction {
            return Change::None;
        }
        self.direction = direction;
        self.mark(Change::Relayout)
    }

    pub fn set_enabled(&mut self, enabled: bool) -> Change {
        if enabled == self.enabled {
            return Change::None;
        }
        self.enabled = enabled;
        self.mark(Change::Repaint)
    }

    pub fn set_hide_when_disabled(&mut self, hide: bool) -> Change {
        if hide == self.hide_when_disabled {
            return Change::None;
        }
        self.hide_when_disabled = hide;
        self.mark(Change::Repaint)
    }

    /// Diffs `config` against the held properties and applies it, returning
    /// the most expensive change any field required.
    pub fn update(&mut self, config: &ShimmerConfig) -> Change {
        self.set_direction(config.direction)
            .merge(self.set_gradient(config.gradient.clone()))
            .merge(self.set_enabled(config.enabled))
            .merge(self.set_hide_when_disabled(config.hide_when_disabled))
    }

    /// Records the measured size of the wrapped content, `None` when absent.
    pub fn layout(&mut self, child_size: Option<Size>) -> Size {
        self.size = child_size;
        self.stats.layouts += 1;
        if self.pending == Change::Relayout {
            self.pending = Change::Repaint;
        }
        child_size.unwrap_or(Size::ZERO)
    }

    /// Paints `child` at `offset` with the shimmer applied.
    ///
    /// Absent or zero-area content releases the held layer and paints nothing.
    pub fn paint<C: PaintContext>(&mut self, ctx: &mut C, offset: Point, child: Option<&C::Child>) {
        self.pending = Change::None;
        let (child, size) = match (child, self.size) {
            (Some(child), Some(size)) if size.width > 0.0 && size.height > 0.0 => (child, size),
            _ => {
                self.release_layer();
                return;
            }
        };

        if self.is_bypassed() {
            ctx.paint_child(child, offset);
            self.stats.passthroughs += 1;
            return;
        }

        let rect = self.direction.sweep_rect(self.percent, size);
        let mask_rect = Rect::from_origin_size(offset, size);
        match self.layer.as_mut() {
            Some(layer) => {
                layer.shader.rebuild(&self.gradient, rect);
                layer.mask_rect = mask_rect;
                layer.blend_mode = BlendMode::SourceIn;
            }
            None => {
                self.layer = Some(MaskLayer {
                    shader: self.gradient.create_shader(rect),
                    mask_rect,
                    blend_mode: BlendMode::SourceIn,
                });
                self.stats.layers_allocated += 1;
                debug!(?size, "shimmer mask layer allocated");
            }
        }
        if let Some(layer) = self.layer.as_ref() {
            trace!(percent = self.percent, ?rect, "shimmer composite");
            ctx.push_shader_mask(layer, child, offset);
            self.stats.composites += 1;
        }
    }

    /// The sweep rectangle for the current progress and size, if laid out.
    pub fn sweep_rect(&self) -> Option<Rect> {
        self.size
            .map(|size| self.direction.sweep_rect(self.percent, size))
    }

    /// True when disabled content is shown without the shimmer.
    pub fn is_bypassed(&self) -> bool {
        !self.enabled && self.hide_when_disabled
    }

    pub fn layer(&self) -> Option<&MaskLayer> {
        self.layer.as_ref()
    }

    pub fn pending_change(&self) -> Change {
        self.pending
    }

    pub fn needs_layout(&self) -> bool {
        self.pending == Change::Relayout
    }

    pub fn needs_paint(&self) -> bool {
        !self.pending.is_none()
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn gradient(&self) -> &GradientSpec {
        &self.gradient
    }

    pub fn size(&self) -> Option<Size> {
        self.size
    }

    pub fn stats(&self) -> CompositorStats {
        self.stats
    }

    fn release_layer(&mut self) {
        if self.layer.take().is_some() {
            self.stats.layers_released += 1;
            debug!("shimmer mask layer released");
        }
    }

    fn mark(&mut self, change: Change) -> Change {
        self.pending = self.pending.merge(change);
        change
    }
}
