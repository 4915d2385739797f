use std::{fmt, str::FromStr};

mod parse;

/// Which side of a connection a face belongs to.
///
/// Receptacle outlines use the minimum dimensions given in WD 6, plug
/// outlines the maximum, so the two faces of one family never share
/// geometry.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Face {
    Receptacle,
    Plug,
}

impl Face {
    pub fn letter(self) -> char {
        match self {
            Face::Receptacle => 'R',
            Face::Plug => 'P',
        }
    }
}

/// A WD-6 configuration line, e.g. "5-15" or "L6-20".
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Family {
    pub locking: bool,
    pub series: u16,
    pub amps: u16,
}

impl Family {
    pub const fn straight(series: u16, amps: u16) -> Self {
        Self { locking: false, series, amps }
    }

    pub const fn locking(series: u16, amps: u16) -> Self {
        Self { locking: true, series, amps }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.locking {
            write!(f, "L")?;
        }
        write!(f, "{}-{}", self.series, self.amps)
    }
}

/// A full connector designation such as "5-15P": a family plus the letter
/// naming which face is meant.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Designation {
    pub family: Family,
    pub face: Face,
}

impl Designation {
    pub fn new(family: Family, face: Face) -> Self {
        Self { family, face }
    }

    /// The output file name for this face, e.g. "NEMA_5-15P.svg".
    pub fn file_name(&self) -> String {
        format!("NEMA_{self}.svg")
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.family, self.face.letter())
    }
}

impl FromStr for Designation {
    type Err = pom::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Bindings required for borrow checker
        let chars = s.chars().collect::<Vec<_>>();
        let parser = parse::designation();
        parser.parse(&chars)
    }
}
