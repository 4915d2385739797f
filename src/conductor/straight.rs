use svg::node::element::{path::Data, Circle, Path, Rectangle};

use crate::geom::Vec2;

/// A straight blade or slot: an axis-aligned rectangle centered at `at`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Straight {
    pub width: f32,
    pub height: f32,
    pub at: Vec2,
}

impl Straight {
    pub fn draw(&self, color: &str) -> Rectangle {
        Rectangle::new()
            .set("x", self.at.x - self.width / 2.0)
            .set("y", self.at.y - self.height / 2.0)
            .set("width", self.width)
            .set("height", self.height)
            .set("fill", color)
    }
}

/// A round grounding pin.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Pin {
    pub diameter: f32,
    pub at: Vec2,
}

impl Pin {
    pub fn draw(&self, color: &str) -> Circle {
        Circle::new()
            .set("cx", self.at.x)
            .set("cy", self.at.y)
            .set("r", self.diameter / 2.0)
            .set("fill", color)
    }
}

/// A D-shaped hole: a rectangle with one semicircular end.
///
/// The curve sits at the positive end of the longest dimension, or the
/// positive x end when the dimensions are equal; `rotation` (degrees)
/// reorients it from there.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Dee {
    pub width: f32,
    pub height: f32,
    pub at: Vec2,
    pub rotation: f32,
}

impl Dee {
    pub fn draw(&self, color: &str) -> Path {
        let (origin, transform) = if self.rotation == 0.0 {
            (self.at, None)
        } else {
            let Vec2 { x, y } = self.at;
            (Vec2::ZERO, Some(format!("translate({x} {y}) rotate({})", self.rotation)))
        };

        let w = self.width;
        let h = self.height;
        let mut data = Data::new()
            .move_to((origin.x - w / 2.0, origin.y - h / 2.0));

        if w >= h {
            let side = w - h / 2.0;
            data = data
                .horizontal_line_by(side)
                .elliptical_arc_by((h / 2.0, h / 2.0, 0, 1, 1, 0.0, h))
                .horizontal_line_by(-side);
        } else {
            let side = h - w / 2.0;
            data = data
                .vertical_line_by(side)
                .elliptical_arc_by((w / 2.0, w / 2.0, 0, 1, 0, w, 0.0))
                .vertical_line_by(-side);
        }

        let mut path = Path::new()
            .set("fill", color)
            .set("d", data.close());

        if let Some(transform) = transform {
            path = path.set("transform", transform);
        }

        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_rect_is_centered() {
        let rect = Straight { width: 0.25, height: 0.5, at: Vec2::ZERO }
            .draw("black")
            .to_string();
        assert!(rect.contains(r#"x="-0.125""#), "{rect}");
        assert!(rect.contains(r#"y="-0.25""#), "{rect}");
        assert!(rect.contains(r#"width="0.25""#), "{rect}");
        assert!(rect.contains(r#"height="0.5""#), "{rect}");
        assert!(rect.contains(r#"fill="black""#), "{rect}");
    }

    #[test]
    fn pin_uses_half_the_diameter() {
        let circle = Pin { diameter: 0.19, at: Vec2::y(-0.25) }
            .draw("green")
            .to_string();
        assert!(circle.contains(r#"r="0.095""#), "{circle}");
        assert!(circle.contains(r#"cy="-0.25""#), "{circle}");
    }

    #[test]
    fn rotated_dee_draws_at_the_origin() {
        let path = Dee { width: 0.2, height: 0.2, at: Vec2::y(-0.4), rotation: 90.0 }
            .draw("green")
            .to_string();
        assert!(path.contains("translate(0 -0.4) rotate(90)"), "{path}");
        assert!(path.contains("M-0.1,-0.1"), "{path}");
    }

    #[test]
    fn tall_dee_curves_downward() {
        let path = Dee { width: 0.125, height: 0.5, at: Vec2::ZERO, rotation: 0.0 }
            .draw("gray")
            .to_string();
        // vertical sides, then the semicircle across the positive y end
        assert!(path.contains("v0.4375"), "{path}");
        assert!(!path.contains("transform"), "{path}");
    }
}
