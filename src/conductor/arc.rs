use svg::node::element::{path::Data, Path};

use crate::geom::Vec2;

/// A blade or slot following an arc of a circle concentric with the
/// housing. Angles are in degrees from the positive x axis.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ArcBlade {
    pub width: f32,
    pub radius: f32,
    pub start: f32,
    pub end: f32,
}

impl ArcBlade {
    pub fn draw(&self, color: &str) -> Path {
        let start = Vec2::polar(self.radius, self.start);
        let end = Vec2::polar(self.radius, self.end);
        let sweep = if self.start < self.end { 1 } else { 0 };

        // No WD-6 contact spans more than a half turn, so the small arc
        // always applies.
        let data = Data::new()
            .move_to(start)
            .elliptical_arc_to((self.radius, self.radius, 0, 0, sweep, end.x, end.y));

        Path::new()
            .set("fill", "none")
            .set("stroke", color)
            .set("stroke-width", self.width)
            .set("d", data)
    }
}

/// An arc-shaped grounding contact ending in a rectangular hook that turns
/// back under the arc.
///
/// The hook runs parallel to the ray at `hook_angle` degrees;
/// `hook_outer_offset` is the signed distance from that ray to the hook's
/// outer edge, and `hook_length` is measured inward along the hook's inner
/// edge.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HookedArc {
    pub width: f32,
    pub radius: f32,
    pub start: f32,
    pub hook_angle: f32,
    pub hook_outer_offset: f32,
    pub hook_length: f32,
    pub hook_width: f32,
}

impl HookedArc {
    pub fn draw(&self, color: &str) -> Path {
        let outer_radius = self.radius + self.width / 2.0;
        let inner_radius = self.radius - self.width / 2.0;
        let hook_width = self.hook_width.copysign(self.hook_outer_offset);

        let start_outer = Vec2::polar(outer_radius, self.start);
        let start_inner = Vec2::polar(inner_radius, self.start);

        let outer_skew = (self.hook_outer_offset / outer_radius).asin().to_degrees();
        let end_outer = Vec2::polar(outer_radius, self.hook_angle + outer_skew);
        let inner_skew = ((self.hook_outer_offset - hook_width) / inner_radius)
            .asin()
            .to_degrees();
        let end_inner = Vec2::polar(inner_radius, self.hook_angle + inner_skew);

        let inner_corner = end_inner - Vec2::polar(self.hook_length, self.hook_angle);
        let outer_corner = inner_corner + Vec2::polar(hook_width, self.hook_angle + 90.0);

        let (out_sweep, back_sweep) = if self.hook_outer_offset > 0.0 {
            (1, 0)
        } else {
            (0, 1)
        };

        let data = Data::new()
            .move_to(start_outer)
            .elliptical_arc_to((outer_radius, outer_radius, 0, 0, out_sweep, end_outer.x, end_outer.y))
            .line_to(outer_corner)
            .line_to(inner_corner)
            .line_to(end_inner)
            .elliptical_arc_to((inner_radius, inner_radius, 0, 0, back_sweep, start_inner.x, start_inner.y))
            .close();

        Path::new().set("fill", color).set("d", data)
    }
}
