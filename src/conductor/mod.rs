//! Outline shapes for the blades, pins, and slots of a connector face.
//!
//! Slot outlines follow the *minimum* dimensions given in ANSI/NEMA
//! WD 6-2016; prong outlines follow the *maximum* dimensions. All lengths
//! are in inches and all positions are relative to the housing center.

use std::fmt;

use svg::node::element::Group;

use crate::geom::Vec2;

pub mod straight;
pub mod bent;
pub mod arc;

pub use arc::{ArcBlade, HookedArc};
pub use bent::{Elbow, Sweep, Tee};
pub use straight::{Dee, Pin, Straight};

/// The electrical role of a contact, which fixes its diagram color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    Ground,
    Neutral,
    LineX,
    LineY,
    LineZ,
}

impl Role {
    pub const fn color(self) -> &'static str {
        match self {
            Role::Ground => "green",
            Role::Neutral => "gray",
            Role::LineX => "black",
            Role::LineY => "red",
            Role::LineZ => "blue",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Ground => "Ground",
            Role::Neutral => "Neutral",
            Role::LineX => "Line (X)",
            Role::LineY => "Line (Y)",
            Role::LineZ => "Line (Z)",
        };
        write!(f, "{name}")
    }
}

/// One contact's outline on one face.
#[derive(Clone, PartialEq, Debug)]
pub enum Conductor {
    Straight(Straight),
    Pin(Pin),
    Dee(Dee),
    Elbow(Elbow),
    Tee(Tee),
    Arc(ArcBlade),
    HookedArc(HookedArc),
}

impl Conductor {
    pub fn straight(width: f32, height: f32, at: Vec2) -> Self {
        Self::Straight(Straight { width, height, at })
    }

    pub fn pin(diameter: f32, at: Vec2) -> Self {
        Self::Pin(Pin { diameter, at })
    }

    pub fn dee(width: f32, height: f32, at: Vec2, rotation: f32) -> Self {
        Self::Dee(Dee { width, height, at, rotation })
    }

    pub fn elbow(width: f32, start: Vec2, end: Vec2, sweep: Sweep) -> Self {
        Self::Elbow(Elbow { width, start, end, sweep })
    }

    pub fn tee(width: f32, crossbar: f32, stem: f32, at: Vec2, rotation: f32) -> Self {
        Self::Tee(Tee { width, crossbar, stem, at, rotation })
    }

    pub fn arc(width: f32, radius: f32, start: f32, end: f32) -> Self {
        Self::Arc(ArcBlade { width, radius, start, end })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn hooked_arc(
        width: f32,
        radius: f32,
        start: f32,
        hook_angle: f32,
        hook_outer_offset: f32,
        hook_length: f32,
        hook_width: f32,
    ) -> Self {
        Self::HookedArc(HookedArc {
            width,
            radius,
            start,
            hook_angle,
            hook_outer_offset,
            hook_length,
            hook_width,
        })
    }

    /// Appends this outline to a face group, filled or stroked in `color`.
    pub fn draw_on(&self, face: Group, color: &str) -> Group {
        match self {
            Conductor::Straight(c) => face.add(c.draw(color)),
            Conductor::Pin(c) => face.add(c.draw(color)),
            Conductor::Dee(c) => face.add(c.draw(color)),
            Conductor::Elbow(c) => face.add(c.draw(color)),
            Conductor::Tee(c) => face.add(c.draw(color)),
            Conductor::Arc(c) => face.add(c.draw(color)),
            Conductor::HookedArc(c) => face.add(c.draw(color)),
        }
    }
}
