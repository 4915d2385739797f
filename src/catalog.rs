//! The WD-6 connector table.
//!
//! Each entry carries the housing diameters for flanged inlets and
//! connector bodies together with one outline per contact per face. The
//! dimensions come straight from ANSI/NEMA WD 6-2016.

use std::path::{Path, PathBuf};

use crate::{
    conductor::{Conductor, Role, Sweep},
    designation::{Designation, Face, Family},
    error::{Error, Result},
    face::FaceSpec,
    geom::Vec2,
};

/// One contact position in a family: a role plus its outline on each face
/// the family has.
#[derive(Clone, PartialEq, Debug)]
pub struct Contact {
    pub role: Role,
    pub receptacle: Option<Conductor>,
    pub plug: Option<Conductor>,
}

impl Contact {
    pub fn new(role: Role, receptacle: Option<Conductor>, plug: Option<Conductor>) -> Self {
        Self { role, receptacle, plug }
    }

    pub fn on(&self, face: Face) -> Option<&Conductor> {
        match face {
            Face::Receptacle => self.receptacle.as_ref(),
            Face::Plug => self.plug.as_ref(),
        }
    }
}

/// One WD-6 family. A `None` diameter means the standard defines no such
/// face for the family, e.g. the plug-only 1-20.
#[derive(Clone, PartialEq, Debug)]
pub struct ConnectorDef {
    pub family: Family,
    pub receptacle_diameter: Option<f32>,
    pub plug_diameter: Option<f32>,
    pub contacts: Vec<Contact>,
}

impl ConnectorDef {
    pub fn face(&self, face: Face) -> Option<FaceView<'_>> {
        let diameter = match face {
            Face::Receptacle => self.receptacle_diameter,
            Face::Plug => self.plug_diameter,
        }?;

        let conductors = self
            .contacts
            .iter()
            .filter_map(|contact| contact.on(face).map(|outline| (contact.role, outline)))
            .collect();

        Some(FaceView {
            designation: Designation::new(self.family, face),
            diameter,
            outlined: face == Face::Receptacle,
            conductors,
        })
    }
}

/// Everything the renderer needs for one face of one family.
#[derive(Clone, PartialEq, Debug)]
pub struct FaceView<'a> {
    pub designation: Designation,
    pub diameter: f32,
    pub outlined: bool,
    pub conductors: Vec<(Role, &'a Conductor)>,
}

pub struct Catalog {
    defs: Vec<ConnectorDef>,
}

impl Catalog {
    /// The families shipped with the generator.
    pub fn wd6() -> Self {
        Self {
            defs: vec![
                nema_1_15(),
                nema_1_20(),
                nema_5_15(),
                nema_5_20(),
                nema_l5_30(),
                nema_l6_20(),
            ],
        }
    }

    pub fn defs(&self) -> &[ConnectorDef] {
        &self.defs
    }

    /// Every face in the table, receptacle before plug within a family.
    pub fn faces(&self) -> impl Iterator<Item = FaceView<'_>> {
        self.defs.iter().flat_map(|def| {
            [Face::Receptacle, Face::Plug]
                .into_iter()
                .filter_map(|face| def.face(face))
        })
    }

    /// Resolves a designation string to its face geometry.
    pub fn lookup(&self, text: &str) -> Result<FaceView<'_>> {
        let designation: Designation = text.parse().map_err(|source| Error::Designation {
            text: text.to_string(),
            source,
        })?;

        self.defs
            .iter()
            .find(|def| def.family == designation.family)
            .and_then(|def| def.face(designation.face))
            .ok_or_else(|| Error::Unknown(text.to_string()))
    }

    /// Renders every face into `dir`, stopping at the first write failure.
    pub fn save_all(&self, dir: &Path, spec: &FaceSpec, captions: bool) -> Result<Vec<PathBuf>> {
        self.faces().map(|face| spec.save(dir, &face, captions)).collect()
    }
}

fn nema_1_15() -> ConnectorDef {
    let spacing = 0.500;

    let slot_width = 0.075;
    let neutral_slot_height = 0.330;
    let line_slot_height = 0.265;

    let prong_width = 0.060;
    let neutral_prong_height = 0.322;
    let line_prong_height = 0.260;

    ConnectorDef {
        family: Family::straight(1, 15),
        receptacle_diameter: Some(1.531),
        plug_diameter: Some(1.550),
        contacts: vec![
            Contact::new(
                Role::Neutral,
                Some(Conductor::straight(
                    slot_width,
                    neutral_slot_height,
                    Vec2::x(spacing / 2.0),
                )),
                Some(Conductor::straight(
                    prong_width,
                    neutral_prong_height,
                    Vec2::x(-spacing / 2.0),
                )),
            ),
            Contact::new(
                Role::LineX,
                Some(Conductor::straight(
                    slot_width,
                    line_slot_height,
                    Vec2::x(-spacing / 2.0),
                )),
                Some(Conductor::straight(
                    prong_width,
                    line_prong_height,
                    Vec2::x(spacing / 2.0),
                )),
            ),
        ],
    }
}

fn nema_1_20() -> ConnectorDef {
    let spacing = 0.500;

    let prong_width = 0.060;
    let neutral_width = 0.260;
    let neutral_height = 0.165;
    let line_height = 0.260;

    // The neutral blade bends so the 20 A plug cannot enter a 15 A outlet.
    let neutral_start = Vec2::x(-spacing / 2.0 - (neutral_width - prong_width / 2.0));
    let neutral_end = Vec2::new(-spacing / 2.0, neutral_height - prong_width / 2.0);

    ConnectorDef {
        family: Family::straight(1, 20),
        receptacle_diameter: None,
        plug_diameter: Some(1.550),
        contacts: vec![
            Contact::new(
                Role::Neutral,
                None,
                Some(Conductor::elbow(
                    prong_width,
                    neutral_start,
                    neutral_end,
                    Sweep::Positive,
                )),
            ),
            Contact::new(
                Role::LineX,
                None,
                Some(Conductor::straight(
                    prong_width,
                    line_height,
                    Vec2::x(spacing / 2.0),
                )),
            ),
        ],
    }
}

fn nema_5_15() -> ConnectorDef {
    let spacing = 0.500;
    let lower_offset = 0.125;
    let upper_offset = 0.468;

    let slot_width = 0.075;
    let neutral_slot_height = 0.330;
    let line_slot_height = 0.265;
    let ground_slot_dims = 0.205;

    let prong_width = 0.060;
    let neutral_prong_height = 0.322;
    let line_prong_height = 0.260;
    let ground_prong_dims = 0.190;

    ConnectorDef {
        family: Family::straight(5, 15),
        receptacle_diameter: Some(1.531),
        plug_diameter: Some(1.550),
        contacts: vec![
            Contact::new(
                Role::Neutral,
                Some(Conductor::straight(
                    slot_width,
                    neutral_slot_height,
                    Vec2::new(spacing / 2.0, lower_offset),
                )),
                Some(Conductor::straight(
                    prong_width,
                    neutral_prong_height,
                    Vec2::new(-spacing / 2.0, lower_offset),
                )),
            ),
            Contact::new(
                Role::Ground,
                Some(Conductor::dee(
                    ground_slot_dims,
                    ground_slot_dims,
                    Vec2::y(lower_offset - upper_offset),
                    90.0,
                )),
                Some(Conductor::pin(
                    ground_prong_dims,
                    Vec2::y(lower_offset - upper_offset),
                )),
            ),
            Contact::new(
                Role::LineX,
                Some(Conductor::straight(
                    slot_width,
                    line_slot_height,
                    Vec2::new(-spacing / 2.0, lower_offset),
                )),
                Some(Conductor::straight(
                    prong_width,
                    line_prong_height,
                    Vec2::new(spacing / 2.0, lower_offset),
                )),
            ),
        ],
    }
}

fn nema_5_20() -> ConnectorDef {
    let receptacle_spacing = 0.500;
    let plug_line_offset = 0.250;
    let plug_neutral_offset = 0.609;
    let lower_offset = 0.125;
    let upper_offset = 0.468;

    let slot_width = 0.075;
    let neutral_slot_height = 0.330;
    let neutral_slot_width = 0.290;
    let line_slot_height = 0.265;
    let ground_slot_dims = 0.205;

    let prong_width = 0.060;
    let prong_length = 0.260;
    let ground_prong_dims = 0.190;

    ConnectorDef {
        family: Family::straight(5, 20),
        receptacle_diameter: Some(1.531),
        plug_diameter: Some(1.550),
        contacts: vec![
            Contact::new(
                Role::Neutral,
                // T-shaped so the receptacle accepts both 15 A and 20 A
                // plugs; the 20 A neutral blade lies sideways.
                Some(Conductor::tee(
                    slot_width,
                    neutral_slot_height,
                    neutral_slot_width,
                    Vec2::new(receptacle_spacing / 2.0, lower_offset),
                    90.0,
                )),
                Some(Conductor::straight(
                    prong_length,
                    prong_width,
                    Vec2::new(plug_line_offset - plug_neutral_offset, lower_offset),
                )),
            ),
            Contact::new(
                Role::Ground,
                Some(Conductor::dee(
                    ground_slot_dims,
                    ground_slot_dims,
                    Vec2::y(lower_offset - upper_offset),
                    90.0,
                )),
                Some(Conductor::pin(
                    ground_prong_dims,
                    Vec2::y(lower_offset - upper_offset),
                )),
            ),
            Contact::new(
                Role::LineX,
                Some(Conductor::straight(
                    slot_width,
                    line_slot_height,
                    Vec2::new(-receptacle_spacing / 2.0, lower_offset),
                )),
                Some(Conductor::straight(
                    prong_width,
                    prong_length,
                    Vec2::new(plug_line_offset, lower_offset),
                )),
            ),
        ],
    }
}

fn nema_l5_30() -> ConnectorDef {
    let radius = 0.500;
    let slot_width = 0.093;
    let prong_width = 0.070;

    let neutral_slot_end = 127.0;
    let neutral_slot_span = 42.5;
    let line_slot_end = 242.0;
    let line_slot_span = 52.0;

    let ground_slot_start = -25.0;
    let ground_hook_slot_outer_y = 0.248;
    let ground_hook_slot_height = 0.114;
    let ground_hook_slot_width = 0.105;

    let neutral_prong_end = 124.5;
    let neutral_prong_span = 38.0;
    let line_prong_end = 239.5;
    let line_prong_span = 47.5;

    let ground_prong_start = -22.5;
    let ground_hook_prong_outer_y = 0.220;
    let ground_hook_prong_height = prong_width;
    let ground_hook_prong_width = 0.100;

    ConnectorDef {
        family: Family::locking(5, 30),
        receptacle_diameter: Some(1.860),
        plug_diameter: Some(1.880),
        contacts: vec![
            Contact::new(
                Role::Neutral,
                Some(Conductor::arc(
                    slot_width,
                    radius,
                    neutral_slot_end - 180.0,
                    neutral_slot_end - neutral_slot_span - 180.0,
                )),
                Some(Conductor::arc(
                    prong_width,
                    radius,
                    -neutral_prong_end,
                    -neutral_prong_end + neutral_prong_span,
                )),
            ),
            Contact::new(
                Role::Ground,
                Some(Conductor::hooked_arc(
                    slot_width,
                    radius,
                    ground_slot_start - 180.0,
                    -180.0,
                    ground_hook_slot_outer_y,
                    ground_hook_slot_width,
                    ground_hook_slot_height,
                )),
                Some(Conductor::hooked_arc(
                    prong_width,
                    radius,
                    -ground_prong_start,
                    0.0,
                    -ground_hook_prong_outer_y,
                    ground_hook_prong_width,
                    ground_hook_prong_height,
                )),
            ),
            Contact::new(
                Role::LineX,
                Some(Conductor::arc(
                    slot_width,
                    radius,
                    line_slot_end - 180.0,
                    line_slot_end - line_slot_span - 180.0,
                )),
                Some(Conductor::arc(
                    prong_width,
                    radius,
                    -line_prong_end,
                    -line_prong_end + line_prong_span,
                )),
            ),
        ],
    }
}

fn nema_l6_20() -> ConnectorDef {
    let radius = 0.437;
    let slot_width = 0.075;
    let prong_width = 0.060;

    let line1_slot_end = 152.0;
    let line1_slot_span = 57.0;
    let line2_slot_end = 262.0;
    let line2_slot_span = 42.5;

    let ground_slot_start = -25.0;
    let ground_hook_slot_outer_y = 0.220;
    let ground_hook_slot_height = 0.100;
    let ground_hook_slot_width = 0.105;

    let line1_prong_end = 149.5;
    let line1_prong_span = 52.5;
    let line2_prong_end = 259.5;
    let line2_prong_span = 38.0;

    let ground_prong_start = -22.5;
    let ground_hook_prong_outer_y = 0.200;
    let ground_hook_prong_height = prong_width;
    let ground_hook_prong_width = 0.094;

    ConnectorDef {
        family: Family::locking(6, 20),
        receptacle_diameter: Some(1.860),
        plug_diameter: Some(1.880),
        contacts: vec![
            Contact::new(
                Role::LineX,
                Some(Conductor::arc(
                    slot_width,
                    radius,
                    line1_slot_end - 180.0,
                    line1_slot_end - line1_slot_span - 180.0,
                )),
                Some(Conductor::arc(
                    prong_width,
                    radius,
                    -line1_prong_end,
                    -line1_prong_end + line1_prong_span,
                )),
            ),
            Contact::new(
                Role::Ground,
                Some(Conductor::hooked_arc(
                    slot_width,
                    radius,
                    ground_slot_start - 180.0,
                    -180.0,
                    ground_hook_slot_outer_y,
                    ground_hook_slot_width,
                    ground_hook_slot_height,
                )),
                Some(Conductor::hooked_arc(
                    prong_width,
                    radius,
                    -ground_prong_start,
                    0.0,
                    -ground_hook_prong_outer_y,
                    ground_hook_prong_width,
                    ground_hook_prong_height,
                )),
            ),
            Contact::new(
                Role::LineY,
                Some(Conductor::arc(
                    slot_width,
                    radius,
                    line2_slot_end - 180.0,
                    line2_slot_end - line2_slot_span - 180.0,
                )),
                Some(Conductor::arc(
                    prong_width,
                    radius,
                    -line2_prong_end,
                    -line2_prong_end + line2_prong_span,
                )),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_holds_eleven_faces() {
        assert_eq!(Catalog::wd6().faces().count(), 11);
    }

    #[test]
    fn every_contact_appears_on_some_face() {
        for def in Catalog::wd6().defs() {
            for contact in &def.contacts {
                assert!(
                    contact.receptacle.is_some() || contact.plug.is_some(),
                    "{} {:?} has no outline",
                    def.family,
                    contact.role,
                );
            }
        }
    }

    #[test]
    fn lookup_resolves_both_faces() {
        let catalog = Catalog::wd6();

        let plug = catalog.lookup("5-15P").unwrap();
        assert_eq!(plug.designation.to_string(), "5-15P");
        assert_eq!(plug.conductors.len(), 3);
        assert!(!plug.outlined);

        let receptacle = catalog.lookup("5-15R").unwrap();
        assert!(receptacle.outlined);
        assert!(receptacle.diameter < plug.diameter);
    }

    #[test]
    fn plug_only_families_have_no_receptacle() {
        let catalog = Catalog::wd6();
        assert!(catalog.lookup("1-20P").is_ok());
        assert!(matches!(catalog.lookup("1-20R"), Err(Error::Unknown(_))));
    }

    #[test]
    fn unknown_and_malformed_designations_are_distinct() {
        let catalog = Catalog::wd6();
        assert!(matches!(catalog.lookup("7-15P"), Err(Error::Unknown(_))));
        assert!(matches!(
            catalog.lookup("not a plug"),
            Err(Error::Designation { .. })
        ));
    }

    #[test]
    fn locking_faces_are_built_from_arcs() {
        let catalog = Catalog::wd6();
        let face = catalog.lookup("L6-20R").unwrap();
        assert!(face.conductors.iter().all(|(_, c)| matches!(
            c,
            Conductor::Arc(_) | Conductor::HookedArc(_)
        )));
    }

    #[test]
    fn grounded_families_use_green() {
        let catalog = Catalog::wd6();
        for text in ["5-15P", "5-20R", "L5-30P", "L6-20P"] {
            let face = catalog.lookup(text).unwrap();
            assert!(
                face.conductors.iter().any(|(role, _)| role.color() == "green"),
                "{text} has no ground contact"
            );
        }
    }
}
