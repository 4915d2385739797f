//! Diagrams of NEMA WD-6 plug and receptacle faces.
//!
//! All dimensions are based on ANSI/NEMA WD 6-2016. Receptacle slot
//! outlines match the *minimum* dimensions given in the standard; plug
//! prong outlines match the *maximum*. The circles around the contacts
//! follow the dimensions for flanged inlets and connector bodies.

pub mod catalog;
pub mod conductor;
pub mod designation;
pub mod error;
pub mod face;
pub mod geom;

pub use catalog::{Catalog, ConnectorDef, Contact, FaceView};
pub use conductor::{Conductor, Role};
pub use designation::{Designation, Face, Family};
pub use error::{Error, Result};
pub use face::{FaceSpec, OUTLINE_WIDTH};
