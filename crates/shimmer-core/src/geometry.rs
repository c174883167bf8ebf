//! Sweep-rectangle geometry.
//!
//! Each direction maps `(progress, size)` to the rectangle the gradient is
//! generated over. Widths and heights may be negative: an inverted rectangle
//! mirrors the gradient axis. The scale factors and offsets are tuned so the
//! band fully crosses the target between progress 0 and 1, and must not be
//! simplified.

use kurbo::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Travel direction of the highlight band.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
    /// Top to bottom.
    Ttb,
    /// Bottom to top.
    Btt,
    /// Bottom-left towards top-right.
    DiagLeftUp,
    /// Bottom-right towards top-left.
    DiagRightUp,
    /// Top-left towards bottom-right.
    DiagLeftDown,
    /// Top-right towards bottom-left.
    DiagRightDown,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Ltr,
        Direction::Rtl,
        Direction::Ttb,
        Direction::Btt,
        Direction::DiagLeftUp,
        Direction::DiagRightUp,
        Direction::DiagLeftDown,
        Direction::DiagRightDown,
    ];

    /// Computes the sweep rectangle for `progress` over a target of `size`.
    pub fn sweep_rect(self, progress: f64, size: Size) -> Rect {
        let (w, h) = (size.width, size.height);
        let p = progress;
        match self {
            Direction::Ltr => {
                let dx = lerp(-w, w, p);
                xywh(dx - w, 0.0, 3.0 * w, h)
            }
            Direction::Rtl => {
                let dx = lerp(w, -w, p);
                xywh(dx - w, 0.0, 3.0 * w, h)
            }
            Direction::Ttb => {
                let dy = lerp(-h, h, p);
                xywh(0.0, dy - h, w, 3.0 * h)
            }
            Direction::Btt => {
                let dy = lerp(h, -h, p);
                xywh(0.0, dy - h, w, 3.0 * h)
            }
            Direction::DiagLeftUp => {
                let dy = lerp(h, -h, 2.0 * p);
                xywh(w, dy - h, -3.0 * w, 6.0 * h)
            }
            Direction::DiagRightUp => {
                let dx = lerp(w, -w, 1.5 * p);
                let dy = lerp(h, -h, 1.5 * p);
                xywh(dx - w, dy - h, 4.0 * w, 6.0 * h)
            }
            Direction::DiagLeftDown => {
                let dx = lerp(-w, w, 1.5 * p);
                let dy = lerp(-h, h, 1.5 * p);
                xywh(dx - w, dy - h, 2.0 * w, 4.0 * h)
            }
            Direction::DiagRightDown => {
                let dx = lerp(w, -w, 1.5 * p);
                xywh(dx - w, h, 3.0 * w, -4.0 * h)
            }
        }
    }
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Builds a rectangle from origin and signed extent without normalizing it.
fn xywh(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(x, y, x + width, y + height)
}
