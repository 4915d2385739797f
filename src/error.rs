use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed NEMA designation '{text}'")]
    Designation { text: String, source: pom::Error },

    #[error("no connector '{0}' in the WD-6 table")]
    Unknown(String),

    #[error("failed to write {}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
