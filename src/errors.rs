use std::io;

use failure::Fail;

use crate::assembly::PartId;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "{} does not exist in this assembly.", _0)]
    PartNotFound(PartId),
    #[fail(display = "Part can not set self as parent.")]
    CanNotAttachSelfAsParent,
    #[fail(display = "{} can not be attached to its own descendant.", _0)]
    CanNotAttachToDescendant(PartId),
    #[fail(display = "{} can not be a symmetry counterpart of itself.", _0)]
    SymmetryWithSelf(PartId),
    #[fail(display = "Invalid robotic signature: {}", _0)]
    InvalidSignature(String),
    #[fail(display = "Failed to apply strut attributes to {}: {}", _0, _1)]
    Applier(PartId, String),
    #[fail(display = "Malformed settings: {}", _0)]
    Settings(String),
    #[fail(display = "{}", _0)]
    Io(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Settings(err.to_string())
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::InvalidSignature(err.to_string())
    }
}
