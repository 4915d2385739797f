use svg::node::element::{path::Data, Path};

use crate::geom::Vec2;

/// Direction of the fillet joining the two legs of an [`Elbow`], mirroring
/// the sweep flag on SVG elliptical arc commands.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Sweep {
    Positive,
    Negative,
}

impl Sweep {
    fn flag(self) -> i32 {
        match self {
            Sweep::Positive => 1,
            Sweep::Negative => 0,
        }
    }
}

/// An L-shaped blade: two straight legs joined by a quarter-turn fillet.
///
/// `start` and `end` are the far tips of the legs, on the stroke centerline.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Elbow {
    pub width: f32,
    pub start: Vec2,
    pub end: Vec2,
    pub sweep: Sweep,
}

impl Elbow {
    pub fn draw(&self, color: &str) -> Path {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let x_sign = dx.signum();
        let y_sign = dy.signum();
        let x_first = if x_sign == y_sign {
            self.sweep == Sweep::Positive
        } else {
            self.sweep == Sweep::Negative
        };
        let r = self.width / 2.0;

        let data = Data::new().move_to(self.start);
        let data = if x_first {
            data.horizontal_line_by(dx - x_sign * r)
                .elliptical_arc_by((r, r, 0, 0, self.sweep.flag(), x_sign * r, y_sign * r))
                .vertical_line_to(self.end.y)
        } else {
            data.vertical_line_by(dy - y_sign * r)
                .elliptical_arc_by((r, r, 0, 0, self.sweep.flag(), x_sign * r, y_sign * r))
                .horizontal_line_to(self.end.x)
        };

        Path::new()
            .set("fill", "none")
            .set("stroke", color)
            .set("stroke-width", self.width)
            .set("d", data)
    }
}

/// A T-shaped slot: a crossbar with a stem extending toward negative y
/// from the intersection at `at`, reoriented by `rotation` degrees.
///
/// `stem` is measured from the top of the crossbar to the far end.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Tee {
    pub width: f32,
    pub crossbar: f32,
    pub stem: f32,
    pub at: Vec2,
    pub rotation: f32,
}

impl Tee {
    pub fn draw(&self, color: &str) -> Path {
        let mut path = Path::new()
            .set("fill", "none")
            .set("stroke", color)
            .set("stroke-width", self.width);

        if self.rotation != 0.0 {
            path = path.set(
                "transform",
                format!("rotate({} {},{})", self.rotation, self.at.x, self.at.y),
            );
        }

        let data = Data::new()
            .move_to((self.at.x - self.crossbar / 2.0, self.at.y))
            .horizontal_line_by(self.crossbar)
            .move_by((-self.crossbar / 2.0, 0.0))
            .vertical_line_by(-(self.stem - self.width / 2.0));

        path.set("d", data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elbow_runs_horizontal_leg_first() {
        // Both deltas positive with a positive sweep, as on the 1-20 neutral.
        let path = Elbow {
            width: 0.0625,
            start: Vec2::new(-0.5, 0.0),
            end: Vec2::new(-0.25, 0.125),
            sweep: Sweep::Positive,
        }
        .draw("gray")
        .to_string();
        assert!(path.contains("M-0.5,0"), "{path}");
        assert!(path.contains("h0.21875"), "{path}");
        assert!(path.contains("V0.125"), "{path}");
        assert!(path.contains(r#"stroke-width="0.0625""#), "{path}");
    }

    #[test]
    fn tee_strokes_crossbar_then_stem() {
        let path = Tee {
            width: 0.125,
            crossbar: 0.5,
            stem: 0.25,
            at: Vec2::new(0.25, 0.125),
            rotation: 90.0,
        }
        .draw("gray")
        .to_string();
        assert!(path.contains("rotate(90 0.25,0.125)"), "{path}");
        assert!(path.contains("h0.5"), "{path}");
        assert!(path.contains("m-0.25,0"), "{path}");
        assert!(path.contains("v-0.1875"), "{path}");
        assert!(path.contains(r#"fill="none""#), "{path}");
    }
}
