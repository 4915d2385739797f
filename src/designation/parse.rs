use pom::parser::{end, is_a, sym};

use super::{Designation, Face, Family};

type Parser<'a, O> = pom::parser::Parser<'a, char, O>;

fn integer<'a>() -> Parser<'a, u16> {
    is_a(char::is_numeric).repeat(1..)
        .map(|seq| seq.into_iter().collect::<String>())
        .convert(|s| s.parse())
}

fn face<'a>() -> Parser<'a, Face> {
    sym('P').map(|_| Face::Plug) | sym('R').map(|_| Face::Receptacle)
}

pub fn designation<'a>() -> Parser<'a, Designation> {
    let parser = sym('L').opt()
        + (integer() - sym('-'))
        + integer()
        + face();

    (parser - end()).map(|(((locking, series), amps), face)| Designation {
        family: Family { locking: locking.is_some(), series, amps },
        face,
    })
}
