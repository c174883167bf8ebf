use crate::context::RasterContent;
use kurbo::{Point, Rect, Size};
use shimmer_core::Color;
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Transform};

/// One opaque placeholder shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Bone {
    Bar { rect: Rect, radius: f64 },
    Circle { center: Point, radius: f64 },
}

impl Bone {
    fn bounds(&self) -> Rect {
        match *self {
            Bone::Bar { rect, .. } => rect,
            Bone::Circle { center, radius } => {
                Rect::new(center.x - radius, center.y - radius, center.x + radius, center.y + radius)
            }
        }
    }

    fn path(&self) -> Option<Path> {
        match *self {
            Bone::Bar { rect, radius } => rounded_rect(rect, radius),
            Bone::Circle { center, radius } => {
                PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32)
            }
        }
    }
}

/// Skeleton placeholder content: flat-colored bars and circles, transparent
/// everywhere else.
#[derive(Clone, Debug, PartialEq)]
pub struct Skeleton {
    pub color: Color,
    pub bones: Vec<Bone>,
}

impl Skeleton {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            bones: Vec::new(),
        }
    }

    pub fn bar(mut self, rect: Rect, radius: f64) -> Self {
        self.bones.push(Bone::Bar { rect, radius });
        self
    }

    pub fn circle(mut self, center: Point, radius: f64) -> Self {
        self.bones.push(Bone::Circle { center, radius });
        self
    }

    /// An avatar circle followed by a title bar and a shorter subtitle bar.
    pub fn list_item(color: Color, width: f64) -> Self {
        let avatar = 24.0;
        let text_x = avatar * 2.0 + 12.0;
        let text_w = (width - text_x).max(0.0);
        Self::new(color)
            .circle(Point::new(avatar, avatar), avatar)
            .bar(Rect::new(text_x, 8.0, text_x + text_w, 22.0), 4.0)
            .bar(Rect::new(text_x, 30.0, text_x + text_w * 0.6, 42.0), 4.0)
    }

    /// Stacks `rows` list items vertically with a gap between them.
    pub fn list(color: Color, width: f64, rows: usize) -> Self {
        let row_height = 64.0;
        let mut skeleton = Self::new(color);
        for row in 0..rows {
            let dy = row as f64 * row_height;
            for bone in Self::list_item(color, width).bones {
                skeleton.bones.push(match bone {
                    Bone::Bar { rect, radius } => Bone::Bar {
                        rect: rect + kurbo::Vec2::new(0.0, dy),
                        radius,
                    },
                    Bone::Circle { center, radius } => Bone::Circle {
                        center: center + kurbo::Vec2::new(0.0, dy),
                        radius,
                    },
                });
            }
        }
        skeleton
    }

    /// Size of the box from the origin to the furthest bone edge.
    pub fn size(&self) -> Size {
        self.bones.iter().fold(Size::ZERO, |size, bone| {
            let b = bone.bounds();
            Size::new(size.width.max(b.x1), size.height.max(b.y1))
        })
    }
}

impl RasterContent for Skeleton {
    fn paint(&self, pixmap: &mut Pixmap, offset: Point) {
        let mut paint = Paint::default();
        paint.set_color(crate::shader::color(self.color));
        paint.anti_alias = true;
        let transform = Transform::from_translate(offset.x as f32, offset.y as f32);
        for bone in &self.bones {
            if let Some(path) = bone.path() {
                pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
            }
        }
    }
}

fn rounded_rect(rect: Rect, radius: f64) -> Option<Path> {
    let rect = rect.abs();
    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0).max(0.0) as f32;
    let (x0, y0, x1, y1) = (rect.x0 as f32, rect.y0 as f32, rect.x1 as f32, rect.y1 as f32);
    if r == 0.0 {
        return Some(PathBuilder::from_rect(tiny_skia::Rect::from_ltrb(x0, y0, x1, y1)?));
    }
    let mut pb = PathBuilder::new();
    pb.move_to(x0 + r, y0);
    pb.line_to(x1 - r, y0);
    pb.quad_to(x1, y0, x1, y0 + r);
    pb.line_to(x1, y1 - r);
    pb.quad_to(x1, y1, x1 - r, y1);
    pb.line_to(x0 + r, y1);
    pb.quad_to(x0, y1, x0, y1 - r);
    pb.line_to(x0, y0 + r);
    pb.quad_to(x0, y0, x0 + r, y0);
    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_item_size() {
        let item = Skeleton::list_item(Color::BLACK, 300.0);
        assert_eq!(item.bones.len(), 3);
        assert_eq!(item.size(), Size::new(300.0, 48.0));
    }

    #[test]
    fn test_list_stacks_rows() {
        let list = Skeleton::list(Color::BLACK, 200.0, 3);
        assert_eq!(list.bones.len(), 9);
        assert_eq!(list.size().height, 2.0 * 64.0 + 48.0);
    }

    #[test]
    fn test_paint_leaves_gaps_transparent() {
        let mut pixmap = Pixmap::new(100, 50).unwrap();
        let bar = Skeleton::new(Color::BLACK).bar(Rect::new(10.0, 10.0, 90.0, 20.0), 0.0);
        bar.paint(&mut pixmap, Point::new(0.0, 5.0));
        assert_eq!(pixmap.pixel(50, 20).unwrap().alpha(), 255);
        assert_eq!(pixmap.pixel(50, 5).unwrap().alpha(), 0);
        assert_eq!(pixmap.pixel(5, 20).unwrap().alpha(), 0);
    }
}
