use std::ops::{Add, AddAssign, Sub, SubAssign, Mul};

use svg::node::element::path::Parameters;

/// A point or offset on a connector face, in inches.
///
/// The origin sits at the center of the housing circle; positive y points
/// toward the bottom of the face, matching SVG conventions.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn x(x: f32) -> Self {
        Self { x, y: 0.0 }
    }

    pub const fn y(y: f32) -> Self {
        Self { x: 0.0, y }
    }

    /// The point `radius` inches from the origin at `angle` degrees,
    /// measured from the positive x axis toward positive y.
    pub fn polar(radius: f32, angle: f32) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        Self { x: radius * cos, y: radius * sin }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Self) -> Self::Output {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl From<Vec2> for Parameters {
    fn from(Vec2 { x, y }: Vec2) -> Self {
        Parameters::from((x, y))
    }
}

pub struct Translate(pub f32, pub f32);

impl From<Vec2> for Translate {
    fn from(Vec2 { x, y }: Vec2) -> Self {
        Self(x, y)
    }
}

impl From<Translate> for svg::node::Value {
    fn from(Translate(x, y): Translate) -> Self {
        Self::from(format!("translate({x} {y})"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    #[test]
    fn polar_covers_the_axes() {
        assert!(close(Vec2::polar(2.0, 0.0), Vec2::x(2.0)));
        assert!(close(Vec2::polar(2.0, 90.0), Vec2::y(2.0)));
        assert!(close(Vec2::polar(2.0, 180.0), Vec2::x(-2.0)));
        assert!(close(Vec2::polar(2.0, -90.0), Vec2::y(-2.0)));
    }

    #[test]
    fn vector_arithmetic() {
        let a = Vec2::new(1.0, -2.0);
        let b = Vec2::new(0.5, 0.5);
        assert_eq!(a + b, Vec2::new(1.5, -1.5));
        assert_eq!(a - b, Vec2::new(0.5, -2.5));
        assert_eq!(a * 2.0, Vec2::new(2.0, -4.0));
    }

    #[test]
    fn translate_renders_as_attribute() {
        let value = svg::node::Value::from(Translate(0.775, 0.775));
        assert_eq!(&*value, "translate(0.775 0.775)");
    }
}
