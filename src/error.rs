use std::{borrow::Cow, fmt};

use crate::die::{DieId, MAX_FACE, MIN_FACE};

#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// A die was given a face outside `MIN_FACE..=MAX_FACE`.
    FaceOutOfRange(u8),
    /// A roster was assembled from the wrong number of dice.
    RosterSize(usize),
    /// A roster was assembled with the same id twice.
    DuplicateId(DieId),
    /// The player named a position that isn't on the table. 1-based, like the display.
    NoSuchPosition(usize),
    /// The console couldn't make sense of a line.
    UnknownCommand(String),
    /// A configuration value couldn't be parsed.
    Config(String),
    /// An `io::Error` occurred.
    Io(std::io::Error),
    /// Just directly contains an error message.
    Bare(Cow<'static, str>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FaceOutOfRange(v) => {
                write!(f, "die face {} is outside {}..={}", v, MIN_FACE, MAX_FACE)
            }
            Self::RosterSize(n) => write!(f, "a roster needs exactly 10 dice, got {}", n),
            Self::DuplicateId(id) => write!(f, "die id {} appears more than once", id),
            Self::NoSuchPosition(p) => write!(f, "there's no die at position {}", p),
            Self::UnknownCommand(c) => write!(f, "unknown command {:?}", c),
            Self::Config(msg) => write!(f, "bad configuration: {}", msg),
            Self::Io(e) => write!(f, "i/o error: {}", e),
            Self::Bare(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<&'static str> for Error {
    fn from(value: &'static str) -> Self {
        Self::Bare(Cow::Borrowed(value))
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Bare(Cow::Owned(value))
    }
}

pub type Result<T> = core::result::Result<T, Error>;
